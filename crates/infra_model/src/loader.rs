//! Lazy file-backed model loading
//!
//! The loader defers reading the artifact until the first prediction. A
//! failed load is reported on the request that observed it and attempted
//! again on the next one, so dropping a corrected artifact onto disk heals
//! the service without a restart. Once a load succeeds the model stays
//! resident for the lifetime of the process.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use core_kernel::{BinaryClassifier, ClassLabel, ClassifierError, FeatureVector};

use crate::artifact::LogisticModel;

/// File-backed classifier adapter that loads its artifact on first use
///
/// # Example
///
/// ```rust,ignore
/// use infra_model::ModelLoader;
///
/// let loader = ModelLoader::new("models/attorney_need.json");
/// let service = TriageService::new(Arc::new(loader));
/// ```
#[derive(Debug)]
pub struct ModelLoader {
    path: PathBuf,
    cell: OnceCell<LogisticModel>,
}

impl ModelLoader {
    /// Creates a loader for the artifact at `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Returns the artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true when the artifact is resident in memory
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Loads the artifact now if it is not already resident
    ///
    /// Used by the server for warm-up and by the readiness probe; the port
    /// methods call it implicitly.
    pub fn ensure_loaded(&self) -> Result<&LogisticModel, ClassifierError> {
        self.cell.get_or_try_init(|| {
            let model = LogisticModel::from_path(&self.path).map_err(|error| {
                warn!(path = %self.path.display(), %error, "model artifact load failed");
                ClassifierError::from(error)
            })?;
            info!(
                path = %self.path.display(),
                model_name = %model.model_name,
                "model artifact loaded"
            );
            Ok(model)
        })
    }
}

impl BinaryClassifier for ModelLoader {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        self.ensure_loaded()?.predict(features)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        self.ensure_loaded()?.predict_proba(features)
    }
}

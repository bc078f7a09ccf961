//! Logistic-regression model artifacts
//!
//! The production classifier is a binary logistic regression fitted
//! offline and exported as a JSON artifact. This module parses the
//! artifact, validates it against the feature contract, and implements the
//! classifier port over the fitted coefficients.
//!
//! # Artifact Schema
//!
//! ```json
//! {
//!   "model_name": "attorney-need-logistic-v3",
//!   "trained_at": "2025-11-02T09:30:00Z",
//!   "feature_names": ["sex_code", "...", "high_loss_flag"],
//!   "coefficients": [0.42, ...],
//!   "intercept": -1.07
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{
    BinaryClassifier, ClassLabel, ClassifierError, FeatureVector, FEATURE_DIMENSION,
    FEATURE_NAMES,
};

use crate::error::ModelError;

/// A fitted binary logistic-regression classifier
///
/// Coefficients apply positionally to the canonical feature slots; the
/// artifact echoes the slot names so a stale export is rejected at load
/// time instead of silently mis-scoring claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Name assigned at export time
    pub model_name: String,
    /// When the model was fitted, if the exporter recorded it
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    /// Feature names in the order the coefficients apply
    pub feature_names: Vec<String>,
    /// One coefficient per feature slot
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
}

impl LogisticModel {
    /// Parses and validates an artifact from its JSON text
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Parse` for malformed JSON and
    /// `ModelError::Incompatible` when the artifact does not match the
    /// feature contract.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: LogisticModel =
            serde_json::from_str(json).map_err(|source| ModelError::Parse { source })?;
        model.validate()?;
        Ok(model)
    }

    /// Reads, parses, and validates an artifact file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validates the artifact against the feature contract
    ///
    /// Checks coefficient count, slot-name order, and finiteness. A
    /// reordered artifact is as dangerous as a truncated one: the
    /// coefficients would silently apply to the wrong features.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.len() != FEATURE_DIMENSION {
            return Err(ModelError::incompatible(format!(
                "expected {} coefficients, found {}",
                FEATURE_DIMENSION,
                self.coefficients.len()
            )));
        }
        if self.feature_names.len() != FEATURE_DIMENSION {
            return Err(ModelError::incompatible(format!(
                "expected {} feature names, found {}",
                FEATURE_DIMENSION,
                self.feature_names.len()
            )));
        }
        for (slot, (found, expected)) in self
            .feature_names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .enumerate()
        {
            if found != expected {
                return Err(ModelError::incompatible(format!(
                    "feature name mismatch at slot {}: artifact has {:?}, expected {:?}",
                    slot, found, expected
                )));
            }
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::incompatible(
                "coefficients and intercept must be finite",
            ));
        }
        Ok(())
    }

    /// Computes the decision value `w . x + b`
    ///
    /// The width check guards direct construction: a model that skipped
    /// [`validate`](Self::validate) must not silently truncate the dot
    /// product.
    fn decision_value(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        if self.coefficients.len() != FEATURE_DIMENSION {
            return Err(ClassifierError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: self.coefficients.len(),
            });
        }
        let mut z = self.intercept;
        for (weight, value) in self.coefficients.iter().zip(features.as_slice()) {
            z += weight * value;
        }
        if !z.is_finite() {
            return Err(ClassifierError::invocation(format!(
                "decision value {} is not finite",
                z
            )));
        }
        Ok(z)
    }
}

/// Numerically stable logistic function
///
/// Branches on the sign of `z` so neither arm exponentiates a large
/// positive value; extreme decision values saturate to 0 or 1 instead of
/// overflowing.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl BinaryClassifier for LogisticModel {
    /// Predicts positive for a strictly positive decision value
    ///
    /// A decision value of exactly zero (probability 0.5) resolves to the
    /// negative class, matching the convention the model was fitted under.
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        let z = self.decision_value(features)?;
        Ok(if z > 0.0 {
            ClassLabel::Positive
        } else {
            ClassLabel::Negative
        })
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        let z = self.decision_value(features)?;
        let positive = sigmoid(z);
        Ok(vec![1.0 - positive, positive])
    }
}

//! Model artifact error types

use core_kernel::ClassifierError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file could not be read
    #[error("Failed to read model artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON for the expected schema
    #[error("Failed to parse model artifact: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The artifact does not satisfy the feature contract
    #[error("Incompatible model artifact: {message}")]
    Incompatible { message: String },
}

impl ModelError {
    /// Creates an Incompatible error
    pub fn incompatible(message: impl Into<String>) -> Self {
        ModelError::Incompatible {
            message: message.into(),
        }
    }

    /// Returns true if the artifact was rejected for contract reasons
    pub fn is_incompatible(&self) -> bool {
        matches!(self, ModelError::Incompatible { .. })
    }
}

/// Any artifact problem renders the classifier unavailable as a whole
impl From<ModelError> for ClassifierError {
    fn from(error: ModelError) -> Self {
        ClassifierError::Unavailable {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

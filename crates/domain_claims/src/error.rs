//! Claims triage domain errors

use core_kernel::ClassifierError;
use thiserror::Error;

/// Errors raised while validating a claim record
#[derive(Debug, Error, PartialEq)]
pub enum ClaimError {
    #[error("Invalid claim record: {field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("Invalid claim record: {field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Errors raised while evaluating a claim for attorney need
///
/// Evaluation is all-or-nothing: any failure yields one of these variants
/// and no partial result. Classifier invocation is deterministic and
/// side-effect-free, so none of these are retried.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The claim record failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ClaimError),

    /// The classifier artifact could not be loaded or used
    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// The classifier ran but produced an unusable prediction
    #[error("Prediction failed: {0}")]
    Prediction(String),
}

impl From<ClassifierError> for TriageError {
    fn from(error: ClassifierError) -> Self {
        match error {
            ClassifierError::Unavailable { .. } => {
                TriageError::ClassifierUnavailable(error.to_string())
            }
            ClassifierError::Invocation { .. } | ClassifierError::DimensionMismatch { .. } => {
                TriageError::Prediction(error.to_string())
            }
        }
    }
}

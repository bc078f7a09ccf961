//! Classifier port
//!
//! This module defines the seam between the triage domain and whatever
//! fitted binary classifier backs it. The domain depends only on the
//! [`BinaryClassifier`] trait; adapters (a file-backed model artifact in
//! production, stubs in tests) implement it.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        Triage Domain         │
//! │   (feature vector + result)  │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │     BinaryClassifier port    │
//! └──────────────────────────────┘
//!        ▲                ▲
//!        │                │
//! ┌──────┴──────┐  ┌──────┴───────┐
//! │ Model file  │  │ Test doubles │
//! │  adapter    │  │              │
//! └─────────────┘  └──────────────┘
//! ```
//!
//! The port is synchronous: a prediction is one bounded in-memory call with
//! no I/O beyond the adapter's own artifact handling.

use crate::features::FeatureVector;
use std::fmt;
use thiserror::Error;

/// Outcome label of a binary classification
///
/// `Negative` is class 0 (attorney unlikely to be needed), `Positive` is
/// class 1 (attorney likely to be needed). The numeric indices match the
/// ordering of probability distributions returned by `predict_proba`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    /// Class 0
    Negative,
    /// Class 1
    Positive,
}

impl ClassLabel {
    /// Returns the class index used to select from a probability distribution
    pub fn index(&self) -> usize {
        match self {
            ClassLabel::Negative => 0,
            ClassLabel::Positive => 1,
        }
    }

    /// Converts a class index back to a label
    pub fn from_index(index: usize) -> Option<ClassLabel> {
        match index {
            0 => Some(ClassLabel::Negative),
            1 => Some(ClassLabel::Positive),
            _ => None,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Negative => write!(f, "negative"),
            ClassLabel::Positive => write!(f, "positive"),
        }
    }
}

/// Error type for classifier port operations
///
/// All adapters report failures through this type so the domain can map
/// them uniformly: availability problems are distinguishable from faults
/// raised during an otherwise well-formed invocation.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The classifier artifact is missing, unreadable, or invalid
    #[error("Classifier unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The classifier failed while computing a prediction
    #[error("Classifier invocation failed: {message}")]
    Invocation {
        message: String,
    },

    /// The input vector and the fitted model disagree on width
    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },
}

impl ClassifierError {
    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        ClassifierError::Unavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Unavailable error with an underlying cause
    pub fn unavailable_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ClassifierError::Unavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an Invocation error
    pub fn invocation(message: impl Into<String>) -> Self {
        ClassifierError::Invocation {
            message: message.into(),
        }
    }

    /// Returns true if the classifier itself was unavailable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClassifierError::Unavailable { .. })
    }
}

/// Port for an already-fitted binary classifier
///
/// Implementations must be deterministic for a given artifact: the same
/// feature vector yields the same label and distribution on every call.
/// Invocations are side-effect-free, so callers never retry a failure;
/// an identical immediate retry would fail identically.
pub trait BinaryClassifier: Send + Sync {
    /// Predicts the class label for a feature vector
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError>;

    /// Returns the class-probability distribution `[p(negative), p(positive)]`
    ///
    /// The `Vec` return leaves room for an adapter to produce a malformed
    /// shape; callers are expected to reject distributions whose length is
    /// not exactly two.
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ClassifierError>;
}

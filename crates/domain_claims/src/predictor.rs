//! Attorney-need triage service
//!
//! This module contains the domain service that orchestrates a full claim
//! evaluation: validation, feature derivation, classifier invocation, and
//! assembly of the structured result handed to reviewers.

use std::sync::Arc;

use core_kernel::{BinaryClassifier, ClassLabel, FeatureVector};

use crate::claim::ClaimRecord;
use crate::derivation::{derive_features, RationaleFlags};
use crate::error::TriageError;
use crate::prediction::{InsightTier, PredictionResult};

/// Service for evaluating attorney need on individual claims
///
/// The TriageService wraps an injected, already-fitted binary classifier
/// behind the port. It never trains or mutates the model; swapping the
/// classifier (or substituting a test double) requires no domain changes.
#[derive(Clone)]
pub struct TriageService {
    classifier: Arc<dyn BinaryClassifier>,
}

impl TriageService {
    /// Creates a triage service backed by the given classifier
    pub fn new(classifier: Arc<dyn BinaryClassifier>) -> Self {
        Self { classifier }
    }

    /// Evaluates a claim record and returns the structured prediction
    ///
    /// This method:
    /// 1. Validates the record
    /// 2. Derives the feature vector and rationale flags
    /// 3. Invokes the classifier for a label and a confidence
    /// 4. Assembles the result with its insight tier
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed record,
    /// `ClassifierUnavailable` when the model artifact cannot be used, and
    /// `Prediction` when the classifier produces an unusable output. A
    /// failure yields no partial result, and nothing is retried.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = TriageService::new(classifier);
    /// let result = service.evaluate(&record)?;
    /// if result.needs_attorney {
    ///     println!("{} ({:.0}%)", result.summary(), result.confidence * 100.0);
    /// }
    /// ```
    pub fn evaluate(&self, record: &ClaimRecord) -> Result<PredictionResult, TriageError> {
        let derived = derive_features(record)?;
        self.predict(&derived.vector, &derived.flags)
    }

    /// Runs the classifier over an already-derived feature vector
    ///
    /// Confidence is the predicted class's own probability: for a positive
    /// label the second entry of the distribution, for a negative label the
    /// first. Distributions that are not two entries wide, or confidences
    /// outside [0, 1], are rejected rather than clamped.
    pub fn predict(
        &self,
        vector: &FeatureVector,
        flags: &RationaleFlags,
    ) -> Result<PredictionResult, TriageError> {
        let label = self.classifier.predict(vector)?;
        let distribution = self.classifier.predict_proba(vector)?;

        if distribution.len() != 2 {
            return Err(TriageError::Prediction(format!(
                "expected a two-class probability distribution, got {} entries",
                distribution.len()
            )));
        }

        let confidence = distribution[label.index()];
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(TriageError::Prediction(format!(
                "classifier reported confidence {} outside [0, 1]",
                confidence
            )));
        }

        let needs_attorney = label == ClassLabel::Positive;
        let insight_tier = InsightTier::for_prediction(needs_attorney, confidence);

        tracing::debug!(needs_attorney, confidence, ?insight_tier, "claim evaluated");

        Ok(PredictionResult {
            needs_attorney,
            confidence,
            flags: flags.tags(),
            insight_tier,
        })
    }
}

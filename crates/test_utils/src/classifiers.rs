//! Classifier Test Doubles
//!
//! Provides canned implementations of the classifier port so domain and
//! API tests can run without a model artifact on disk.

use core_kernel::{BinaryClassifier, ClassLabel, ClassifierError, FeatureVector};

/// Classifier returning a fixed label and probability distribution
#[derive(Debug, Clone)]
pub struct StubClassifier {
    label: ClassLabel,
    distribution: Vec<f64>,
}

impl StubClassifier {
    /// Creates a stub answering with the given label and distribution
    pub fn new(label: ClassLabel, distribution: Vec<f64>) -> Self {
        Self {
            label,
            distribution,
        }
    }

    /// Stub predicting the positive class with the given confidence
    pub fn positive(confidence: f64) -> Self {
        Self::new(ClassLabel::Positive, vec![1.0 - confidence, confidence])
    }

    /// Stub predicting the negative class with the given confidence
    pub fn negative(confidence: f64) -> Self {
        Self::new(ClassLabel::Negative, vec![confidence, 1.0 - confidence])
    }
}

impl BinaryClassifier for StubClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        Ok(self.distribution.clone())
    }
}

/// Classifier that reports itself unavailable on every call
#[derive(Debug, Clone)]
pub struct UnavailableClassifier;

impl BinaryClassifier for UnavailableClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        Err(ClassifierError::unavailable("artifact not loaded"))
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        Err(ClassifierError::unavailable("artifact not loaded"))
    }
}

/// Classifier returning a distribution with the wrong number of entries
#[derive(Debug, Clone)]
pub struct MalformedClassifier {
    entries: usize,
}

impl MalformedClassifier {
    /// Creates a classifier reporting `entries` probabilities instead of two
    pub fn new(entries: usize) -> Self {
        Self { entries }
    }
}

impl BinaryClassifier for MalformedClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        Ok(ClassLabel::Positive)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        Ok(vec![0.5; self.entries])
    }
}

/// Classifier reporting probabilities that are not numbers
#[derive(Debug, Clone)]
pub struct NonFiniteClassifier;

impl BinaryClassifier for NonFiniteClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        Ok(ClassLabel::Positive)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        Ok(vec![f64::NAN, f64::NAN])
    }
}

//! Core Kernel - Foundational types for the attorney-need triage system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure layers:
//! - The fixed-order feature vector consumed by the classifier
//! - The classifier port that adapters implement
//! - Classifier error types used across the seam

pub mod classifier;
pub mod features;

pub use classifier::{BinaryClassifier, ClassLabel, ClassifierError};
pub use features::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};

//! Claims Triage Domain
//!
//! This crate implements attorney-need triage for motor-insurance claims:
//! deterministic feature derivation from a claim record, classifier
//! invocation through the port, and assembly of the reviewer-facing result.
//!
//! # Evaluation Pipeline
//!
//! ```text
//! ClaimRecord -> validate -> derive features -> classify -> PredictionResult
//! ```

pub mod claim;
pub mod derivation;
pub mod error;
pub mod prediction;
pub mod predictor;

pub use claim::{AccidentSeverity, ClaimRecord, DrivingRecord, PolicyType, Sex};
pub use derivation::{derive_features, DerivedFeatures, RationaleFlags};
pub use error::{ClaimError, TriageError};
pub use prediction::{InsightTier, PredictionResult, RationaleFlag};
pub use predictor::TriageService;

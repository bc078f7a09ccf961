//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! attorney triage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for claims and classifier artifacts
//! - `builders`: Builder patterns for test data construction
//! - `classifiers`: Canned classifier port implementations
//! - `assertions`: Custom assertion helpers for feature and probability values
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod classifiers;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use classifiers::*;
pub use assertions::*;
pub use generators::*;

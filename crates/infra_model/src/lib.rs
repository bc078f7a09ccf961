//! Infrastructure Model Layer
//!
//! This crate provides the production classifier adapter for the triage
//! system: the JSON artifact schema for fitted logistic regressions,
//! load-time validation against the feature contract, and a lazy
//! file-backed loader implementing the classifier port.
//!
//! # Architecture
//!
//! The domain sees only the `BinaryClassifier` port from `core_kernel`;
//! this crate is the adapter behind it. Training happens elsewhere: the
//! artifact arrives fitted and is treated as read-only.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_model::ModelLoader;
//!
//! let loader = ModelLoader::new("models/attorney_need.json");
//! loader.ensure_loaded()?;
//! ```

pub mod artifact;
pub mod error;
pub mod loader;

pub use artifact::LogisticModel;
pub use error::ModelError;
pub use loader::ModelLoader;

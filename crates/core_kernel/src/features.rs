//! Feature vector types for classifier input
//!
//! This module defines the fixed-width numeric feature vector consumed by
//! the attorney-need classifier. Slot order is a contract shared between
//! feature derivation and every classifier artifact: consumers index
//! positionally, so the order in [`FEATURE_NAMES`] must never be reordered
//! without retraining the model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of feature slots in a classifier input vector
pub const FEATURE_DIMENSION: usize = 10;

/// Canonical slot names in encoding order
///
/// Artifacts echo these names back so a stale or reordered model can be
/// rejected at load time instead of silently mis-scoring claims.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "sex_code",
    "claim_diff",
    "claim_diff_pct",
    "underpaid_flag",
    "high_settlement_flag",
    "settlement_vs_claim_ratio",
    "seatbelt_code",
    "young_claimant_flag",
    "thirdparty_denied_flag",
    "high_loss_flag",
];

/// An immutable, fixed-order numeric feature vector
///
/// Values are IEEE-754 doubles to reproduce the arithmetic of the training
/// pipeline exactly. Binary indicator slots hold 0.0 or 1.0; monetary slots
/// may be negative (e.g. when a settlement exceeds the requested amount).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_DIMENSION]);

impl FeatureVector {
    /// Creates a feature vector from values in canonical slot order
    pub fn new(values: [f64; FEATURE_DIMENSION]) -> Self {
        Self(values)
    }

    /// Returns the values in canonical slot order
    pub fn values(&self) -> [f64; FEATURE_DIMENSION] {
        self.0
    }

    /// Returns the values as a slice for dot-product style consumers
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of slots
    pub fn len(&self) -> usize {
        FEATURE_DIMENSION
    }

    /// Always false; the vector has a fixed, non-zero number of slots
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encoded sex (1.0 = male, 0.0 = female)
    pub fn sex_code(&self) -> f64 {
        self.0[0]
    }

    /// Requested amount minus settlement amount
    pub fn claim_diff(&self) -> f64 {
        self.0[1]
    }

    /// Claim difference relative to the requested amount
    pub fn claim_diff_pct(&self) -> f64 {
        self.0[2]
    }

    /// 1.0 when the settlement fell below the underpayment threshold
    pub fn underpaid_flag(&self) -> f64 {
        self.0[3]
    }

    /// 1.0 when the settlement exceeded the high-settlement threshold
    pub fn high_settlement_flag(&self) -> f64 {
        self.0[4]
    }

    /// Settlement amount relative to the requested amount
    pub fn settlement_vs_claim_ratio(&self) -> f64 {
        self.0[5]
    }

    /// Encoded seatbelt use (1.0 = worn)
    pub fn seatbelt_code(&self) -> f64 {
        self.0[6]
    }

    /// 1.0 when the claimant is below the young-claimant age limit
    pub fn young_claimant_flag(&self) -> f64 {
        self.0[7]
    }

    /// 1.0 when a third-party claim was not approved
    pub fn thirdparty_denied_flag(&self) -> f64 {
        self.0[8]
    }

    /// 1.0 when the estimated loss exceeded the high-loss threshold
    pub fn high_loss_flag(&self) -> f64 {
        self.0[9]
    }
}

impl From<[f64; FEATURE_DIMENSION]> for FeatureVector {
    fn from(values: [f64; FEATURE_DIMENSION]) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

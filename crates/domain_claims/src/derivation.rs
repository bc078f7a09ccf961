//! Feature derivation from claim records
//!
//! Converts a validated [`ClaimRecord`] into the fixed-order vector the
//! classifier consumes, plus the rationale flags surfaced to reviewers.
//! Derivation is pure and deterministic: the same record always yields the
//! same bits, and the arithmetic reproduces the training pipeline exactly
//! so the fitted coefficients keep their meaning.

use serde::{Deserialize, Serialize};

use core_kernel::FeatureVector;

use crate::claim::{ClaimRecord, PolicyType, Sex};
use crate::error::ClaimError;
use crate::prediction::RationaleFlag;

/// Settlements strictly below this fraction of the requested amount count as underpaid
pub const UNDERPAID_SETTLEMENT_RATIO: f64 = 0.7;

/// Settlements strictly above this amount count as unusually high
pub const HIGH_SETTLEMENT_THRESHOLD: f64 = 20_000.0;

/// Estimated losses strictly above this amount count as high loss
pub const HIGH_LOSS_THRESHOLD: f64 = 20_000.0;

/// Claimants strictly below this age are flagged as young
pub const YOUNG_CLAIMANT_AGE_LIMIT: u8 = 25;

/// Boolean rationale conditions raised during derivation
///
/// These are the three feature-vector indicators that double as
/// reviewer-facing flags; the remaining slots stay internal to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationaleFlags {
    /// Settlement fell below the underpayment threshold
    pub underpaid: bool,
    /// Third-party claim that was not approved
    pub thirdparty_denied: bool,
    /// Estimated loss exceeded the high-loss threshold
    pub high_loss: bool,
}

impl RationaleFlags {
    /// Returns the raised flags in display order
    pub fn tags(&self) -> Vec<RationaleFlag> {
        let mut tags = Vec::new();
        if self.underpaid {
            tags.push(RationaleFlag::UnderpaidClaim);
        }
        if self.thirdparty_denied {
            tags.push(RationaleFlag::ThirdPartyDenied);
        }
        if self.high_loss {
            tags.push(RationaleFlag::HighLoss);
        }
        tags
    }

    /// Returns true when no flag is raised
    pub fn is_empty(&self) -> bool {
        !self.underpaid && !self.thirdparty_denied && !self.high_loss
    }
}

/// Output of feature derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFeatures {
    /// Classifier input vector in canonical slot order
    pub vector: FeatureVector,
    /// Rationale flags for the reviewer
    pub flags: RationaleFlags,
}

/// Derives the classifier input vector and rationale flags from a claim
///
/// Validates the record first; a malformed record is rejected before any
/// feature is computed. `claim_diff` may legitimately be negative when the
/// settlement exceeded the requested amount.
pub fn derive_features(record: &ClaimRecord) -> Result<DerivedFeatures, ClaimError> {
    record.validate()?;

    let requested = record.claim_amount_requested;
    let settlement = record.settlement_amount;

    let claim_diff = requested - settlement;
    let claim_diff_pct = claim_diff / divisor_or_one(requested);
    let settlement_vs_claim_ratio = settlement / divisor_or_one(requested);

    let underpaid = settlement < UNDERPAID_SETTLEMENT_RATIO * requested;
    let high_settlement = settlement > HIGH_SETTLEMENT_THRESHOLD;
    let young_claimant = record.age < YOUNG_CLAIMANT_AGE_LIMIT;
    let thirdparty_denied =
        record.policy_type == PolicyType::ThirdParty && !record.claim_approved;
    let high_loss = record.estimated_loss > HIGH_LOSS_THRESHOLD;

    let vector = FeatureVector::new([
        encode(record.sex == Sex::Male),
        claim_diff,
        claim_diff_pct,
        encode(underpaid),
        encode(high_settlement),
        settlement_vs_claim_ratio,
        encode(record.seatbelt_worn),
        encode(young_claimant),
        encode(thirdparty_denied),
        encode(high_loss),
    ]);

    Ok(DerivedFeatures {
        vector,
        flags: RationaleFlags {
            underpaid,
            thirdparty_denied,
            high_loss,
        },
    })
}

/// Divisor for the ratio features
///
/// The training pipeline substituted 1 for a zero requested amount before
/// dividing, which makes the "percentage" collapse to the raw difference.
/// Kept as-is so derived ratios match the inputs the model was fitted on.
fn divisor_or_one(requested: f64) -> f64 {
    if requested == 0.0 {
        1.0
    } else {
        requested
    }
}

fn encode(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

//! Claim record value object

use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Claimant sex as captured on the claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Severity of the accident
///
/// Captured on every claim but not encoded for the classifier; the fitted
/// model was trained without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccidentSeverity {
    Minor,
    Moderate,
    Severe,
}

/// Claimant driving record
///
/// Captured but not encoded, as with [`AccidentSeverity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrivingRecord {
    Clean,
    #[serde(rename = "Minor Offenses")]
    MinorOffenses,
    #[serde(rename = "Major Offenses")]
    MajorOffenses,
}

/// Policy type under which the claim was filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    /// Covers the policyholder's own vehicle as well as third parties
    Comprehensive,
    /// Covers damage to third parties only
    #[serde(rename = "Third-Party")]
    ThirdParty,
}

/// A single motor-insurance claim as submitted for triage
///
/// Immutable snapshot of the claim at evaluation time; records are built
/// per request and never persisted. Monetary amounts are IEEE-754 doubles
/// so derived features reproduce the training pipeline's arithmetic
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claimant sex
    pub sex: Sex,
    /// Claimant age in years
    pub age: u8,
    /// Whether a seatbelt was worn during the accident
    pub seatbelt_worn: bool,
    /// Accident severity (captured, not encoded)
    pub accident_severity: AccidentSeverity,
    /// Driving record (captured, not encoded)
    pub driving_record: DrivingRecord,
    /// Estimated loss amount
    pub estimated_loss: f64,
    /// Whether the claimant holds their own insurance (captured, not encoded)
    pub claimant_insured: bool,
    /// Amount the claimant requested
    pub claim_amount_requested: f64,
    /// Whether the insurer approved the claim
    pub claim_approved: bool,
    /// Amount the insurer settled at
    pub settlement_amount: f64,
    /// Policy type
    pub policy_type: PolicyType,
}

impl ClaimRecord {
    /// Validates the monetary amounts on the record
    ///
    /// Enum fields are valid by construction; amounts must be finite and
    /// non-negative. Negative or non-finite amounts indicate a malformed
    /// upstream record rather than a legitimate claim.
    pub fn validate(&self) -> Result<(), ClaimError> {
        validate_amount("estimated_loss", self.estimated_loss)?;
        validate_amount("claim_amount_requested", self.claim_amount_requested)?;
        validate_amount("settlement_amount", self.settlement_amount)?;
        Ok(())
    }
}

fn validate_amount(field: &'static str, value: f64) -> Result<(), ClaimError> {
    if !value.is_finite() {
        return Err(ClaimError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ClaimError::NegativeAmount { field, value });
    }
    Ok(())
}

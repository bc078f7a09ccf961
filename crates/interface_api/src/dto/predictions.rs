//! Prediction DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{
    AccidentSeverity, ClaimRecord, DrivingRecord, InsightTier, PolicyType, PredictionResult,
    RationaleFlag, Sex,
};

/// Request body for a claim evaluation
///
/// Enum fields use the intake-form spellings (`"Male"`, `"Minor Offenses"`,
/// `"Third-Party"`). The range bounds mirror the form; the domain layer
/// re-checks amounts before deriving features.
#[derive(Debug, Deserialize, Validate)]
pub struct PredictionRequest {
    pub sex: Sex,
    #[validate(range(max = 100))]
    pub age: u8,
    pub seatbelt_worn: bool,
    pub accident_severity: AccidentSeverity,
    pub driving_record: DrivingRecord,
    #[validate(range(min = 0.0))]
    pub estimated_loss: f64,
    pub claimant_insured: bool,
    #[validate(range(min = 0.0))]
    pub claim_amount_requested: f64,
    pub claim_approved: bool,
    #[validate(range(min = 0.0))]
    pub settlement_amount: f64,
    pub policy_type: PolicyType,
}

impl PredictionRequest {
    /// Converts the request into a domain claim record
    pub fn into_record(self) -> ClaimRecord {
        ClaimRecord {
            sex: self.sex,
            age: self.age,
            seatbelt_worn: self.seatbelt_worn,
            accident_severity: self.accident_severity,
            driving_record: self.driving_record,
            estimated_loss: self.estimated_loss,
            claimant_insured: self.claimant_insured,
            claim_amount_requested: self.claim_amount_requested,
            claim_approved: self.claim_approved,
            settlement_amount: self.settlement_amount,
            policy_type: self.policy_type,
        }
    }
}

/// A rationale flag with its reviewer-facing description
#[derive(Debug, Serialize)]
pub struct FlagResponse {
    pub code: String,
    pub description: String,
}

impl From<RationaleFlag> for FlagResponse {
    fn from(flag: RationaleFlag) -> Self {
        Self {
            code: flag.code().to_string(),
            description: flag.description().to_string(),
        }
    }
}

/// Response body for a claim evaluation
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub needs_attorney: bool,
    pub confidence: f64,
    pub insight_tier: InsightTier,
    pub summary: String,
    pub insight: String,
    pub flags: Vec<FlagResponse>,
    pub evaluated_at: DateTime<Utc>,
}

impl From<PredictionResult> for PredictionResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            needs_attorney: result.needs_attorney,
            confidence: result.confidence,
            insight_tier: result.insight_tier,
            summary: result.summary().to_string(),
            insight: result.insight_tier.message().to_string(),
            flags: result
                .flags
                .iter()
                .copied()
                .map(FlagResponse::from)
                .collect(),
            evaluated_at: Utc::now(),
        }
    }
}

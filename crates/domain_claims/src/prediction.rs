//! Prediction result types
//!
//! The structured outcome handed back to reviewers: the verdict, the
//! classifier's confidence in it, the rule-derived rationale flags, and a
//! tiered reading of how strong the signal is.

use serde::{Deserialize, Serialize};

/// Confidence above which a positive prediction counts as a strong signal
pub const STRONG_SIGNAL_CONFIDENCE: f64 = 0.6;

/// Rule-derived condition surfaced alongside a prediction
///
/// Flags are descriptive, computed from the claim itself during feature
/// derivation. They are independent of the classifier outcome: a claim
/// predicted not to need an attorney can still carry flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RationaleFlag {
    /// Settlement fell below the underpayment threshold
    UnderpaidClaim,
    /// Third-party claim that was not approved
    ThirdPartyDenied,
    /// Estimated loss exceeded the high-loss threshold
    HighLoss,
}

impl RationaleFlag {
    /// Reviewer-facing description of the condition
    pub fn description(&self) -> &'static str {
        match self {
            RationaleFlag::UnderpaidClaim => "Claim may have been underpaid.",
            RationaleFlag::ThirdPartyDenied => "Third-party claim possibly denied.",
            RationaleFlag::HighLoss => "High estimated loss noted.",
        }
    }

    /// Short machine-readable code for the condition
    pub fn code(&self) -> &'static str {
        match self {
            RationaleFlag::UnderpaidClaim => "underpaid_claim",
            RationaleFlag::ThirdPartyDenied => "third_party_denied",
            RationaleFlag::HighLoss => "high_loss",
        }
    }
}

/// Strength of the attorney-need signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTier {
    /// Positive prediction with confidence above the strong-signal threshold
    StrongSignal,
    /// Positive prediction with confidence at or below the threshold
    WeakSignal,
    /// Negative prediction, regardless of confidence
    NoSignal,
}

impl InsightTier {
    /// Classifies a prediction into a tier
    ///
    /// The threshold comparison is strict: a positive prediction with
    /// confidence of exactly 0.6 is a weak signal.
    pub fn for_prediction(needs_attorney: bool, confidence: f64) -> Self {
        if needs_attorney && confidence > STRONG_SIGNAL_CONFIDENCE {
            InsightTier::StrongSignal
        } else if needs_attorney {
            InsightTier::WeakSignal
        } else {
            InsightTier::NoSignal
        }
    }

    /// Reviewer-facing reading of the tier
    pub fn message(&self) -> &'static str {
        match self {
            InsightTier::StrongSignal => {
                "Strong indicators suggest legal counsel may be needed."
            }
            InsightTier::WeakSignal => {
                "Possibility of legal support exists, but with lower certainty."
            }
            InsightTier::NoSignal => {
                "Legal representation is likely unnecessary based on claim data."
            }
        }
    }
}

/// Outcome of an attorney-need evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Whether the claimant likely needs attorney representation
    pub needs_attorney: bool,
    /// Classifier confidence in the predicted class, in [0, 1]
    pub confidence: f64,
    /// Rationale flags raised during feature derivation
    pub flags: Vec<RationaleFlag>,
    /// Tiered strength of the signal
    pub insight_tier: InsightTier,
}

impl PredictionResult {
    /// Reviewer-facing verdict line
    pub fn summary(&self) -> &'static str {
        if self.needs_attorney {
            "This claimant may require legal representation."
        } else {
            "This claimant may not require an attorney."
        }
    }
}

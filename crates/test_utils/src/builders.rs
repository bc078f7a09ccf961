//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_claims::{AccidentSeverity, ClaimRecord, DrivingRecord, PolicyType, Sex};

/// Builder for constructing test claim records
pub struct ClaimRecordBuilder {
    sex: Sex,
    age: u8,
    seatbelt_worn: bool,
    accident_severity: AccidentSeverity,
    driving_record: DrivingRecord,
    estimated_loss: f64,
    claimant_insured: bool,
    claim_amount_requested: f64,
    claim_approved: bool,
    settlement_amount: f64,
    policy_type: PolicyType,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a new builder with default values
    ///
    /// The defaults describe an unremarkable approved comprehensive claim:
    /// no rationale flags fire and every derived ratio is well defined.
    pub fn new() -> Self {
        Self {
            sex: Sex::Female,
            age: 40,
            seatbelt_worn: true,
            accident_severity: AccidentSeverity::Moderate,
            driving_record: DrivingRecord::Clean,
            estimated_loss: 8_000.0,
            claimant_insured: true,
            claim_amount_requested: 10_000.0,
            claim_approved: true,
            settlement_amount: 9_000.0,
            policy_type: PolicyType::Comprehensive,
        }
    }

    /// Sets the claimant's sex
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Sets the claimant's age
    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    /// Sets whether a seatbelt was worn
    pub fn with_seatbelt_worn(mut self, worn: bool) -> Self {
        self.seatbelt_worn = worn;
        self
    }

    /// Sets the accident severity
    pub fn with_accident_severity(mut self, severity: AccidentSeverity) -> Self {
        self.accident_severity = severity;
        self
    }

    /// Sets the driving record
    pub fn with_driving_record(mut self, record: DrivingRecord) -> Self {
        self.driving_record = record;
        self
    }

    /// Sets the estimated loss
    pub fn with_estimated_loss(mut self, loss: f64) -> Self {
        self.estimated_loss = loss;
        self
    }

    /// Sets whether the claimant holds their own policy
    pub fn with_claimant_insured(mut self, insured: bool) -> Self {
        self.claimant_insured = insured;
        self
    }

    /// Sets the requested claim amount
    pub fn with_claim_amount_requested(mut self, amount: f64) -> Self {
        self.claim_amount_requested = amount;
        self
    }

    /// Sets whether the claim was approved
    pub fn with_claim_approved(mut self, approved: bool) -> Self {
        self.claim_approved = approved;
        self
    }

    /// Sets the settlement amount
    pub fn with_settlement_amount(mut self, amount: f64) -> Self {
        self.settlement_amount = amount;
        self
    }

    /// Sets the policy type
    pub fn with_policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    /// Sets the requested and settled amounts together
    pub fn with_amounts(mut self, requested: f64, settlement: f64) -> Self {
        self.claim_amount_requested = requested;
        self.settlement_amount = settlement;
        self
    }

    /// Configures the claim so every rationale flag fires
    ///
    /// Denied third-party claim settled at half the requested amount, with
    /// an unbelted young driver and a loss past the high-loss threshold.
    pub fn severe_unsettled(self) -> Self {
        self.with_sex(Sex::Male)
            .with_age(20)
            .with_seatbelt_worn(false)
            .with_accident_severity(AccidentSeverity::Severe)
            .with_driving_record(DrivingRecord::Clean)
            .with_estimated_loss(25_000.0)
            .with_claimant_insured(true)
            .with_amounts(10_000.0, 5_000.0)
            .with_claim_approved(false)
            .with_policy_type(PolicyType::ThirdParty)
    }

    /// Builds the claim record
    pub fn build(self) -> ClaimRecord {
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

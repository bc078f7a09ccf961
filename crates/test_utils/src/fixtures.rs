//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for claims and classifier artifacts.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
use infra_model::LogisticModel;

use crate::builders::ClaimRecordBuilder;
use domain_claims::ClaimRecord;

/// Fixture for claim record test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Approved comprehensive claim with no notable conditions
    pub fn settled_comprehensive() -> ClaimRecord {
        ClaimRecordBuilder::new().build()
    }

    /// Denied third-party claim settled at half the requested amount
    pub fn severe_unsettled() -> ClaimRecord {
        ClaimRecordBuilder::new().severe_unsettled().build()
    }

    /// Claim with a zero requested amount, exercising the ratio guard
    pub fn zero_requested() -> ClaimRecord {
        ClaimRecordBuilder::new().with_amounts(0.0, 3_000.0).build()
    }
}

/// Fixture for feature vector test data
pub struct FeatureFixtures;

impl FeatureFixtures {
    /// Feature vector derived from [`ClaimFixtures::severe_unsettled`]
    pub fn severe_unsettled_vector() -> FeatureVector {
        FeatureVector::new([1.0, 5_000.0, 0.5, 1.0, 0.0, 0.5, 0.0, 1.0, 1.0, 1.0])
    }

    /// All-zero feature vector
    pub fn zeros() -> FeatureVector {
        FeatureVector::new([0.0; FEATURE_DIMENSION])
    }
}

/// Fixture for classifier artifact test data
pub struct ArtifactFixtures;

impl ArtifactFixtures {
    /// Model name recorded in the fixture artifacts
    pub fn model_name() -> &'static str {
        "attorney-need-logistic-v3"
    }

    /// Coefficients used across the artifact fixtures
    pub fn coefficients() -> Vec<f64> {
        vec![0.25, 0.0001, 0.5, 0.9, -0.1, -0.6, -0.4, 0.3, 1.1, 0.8]
    }

    /// Intercept used across the artifact fixtures
    pub fn intercept() -> f64 {
        -1.2
    }

    /// Training timestamp recorded in the fixture artifacts
    pub fn trained_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 2, 9, 30, 0).unwrap()
    }

    /// A validated logistic model matching the production artifact layout
    pub fn logistic_model() -> LogisticModel {
        LogisticModel {
            model_name: Self::model_name().to_string(),
            trained_at: Some(Self::trained_at()),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: Self::coefficients(),
            intercept: Self::intercept(),
        }
    }

    /// Serialized artifact JSON as written by the training pipeline
    pub fn artifact_json() -> String {
        serde_json::to_string_pretty(&Self::logistic_model()).unwrap()
    }

    /// Artifact JSON missing its final coefficient
    pub fn truncated_artifact_json() -> String {
        let mut model = Self::logistic_model();
        model.coefficients.pop();
        serde_json::to_string(&model).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_fixtures_are_deterministic() {
        assert_eq!(
            ClaimFixtures::severe_unsettled(),
            ClaimFixtures::severe_unsettled()
        );
    }

    #[test]
    fn test_zero_requested_keeps_zero_amount() {
        let record = ClaimFixtures::zero_requested();
        assert_eq!(record.claim_amount_requested, 0.0);
        assert_eq!(record.settlement_amount, 3_000.0);
    }

    #[test]
    fn test_artifact_fixture_validates() {
        assert!(ArtifactFixtures::logistic_model().validate().is_ok());
    }

    #[test]
    fn test_artifact_json_round_trips() {
        let parsed = LogisticModel::from_json(&ArtifactFixtures::artifact_json()).unwrap();
        assert_eq!(parsed.model_name, ArtifactFixtures::model_name());
        assert_eq!(parsed.coefficients, ArtifactFixtures::coefficients());
    }

    #[test]
    fn test_truncated_artifact_is_rejected() {
        let error =
            LogisticModel::from_json(&ArtifactFixtures::truncated_artifact_json()).unwrap_err();
        assert!(error.is_incompatible());
    }
}

//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::FeatureVector;
use domain_claims::{AccidentSeverity, ClaimRecord, DrivingRecord, PolicyType, Sex};
use proptest::prelude::*;

/// Strategy for generating claimant sex values
pub fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

/// Strategy for generating accident severities
pub fn accident_severity_strategy() -> impl Strategy<Value = AccidentSeverity> {
    prop_oneof![
        Just(AccidentSeverity::Minor),
        Just(AccidentSeverity::Moderate),
        Just(AccidentSeverity::Severe),
    ]
}

/// Strategy for generating driving records
pub fn driving_record_strategy() -> impl Strategy<Value = DrivingRecord> {
    prop_oneof![
        Just(DrivingRecord::Clean),
        Just(DrivingRecord::MinorOffenses),
        Just(DrivingRecord::MajorOffenses),
    ]
}

/// Strategy for generating policy types
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::Comprehensive),
        Just(PolicyType::ThirdParty),
    ]
}

/// Strategy for generating form ages (0 to 100)
pub fn age_strategy() -> impl Strategy<Value = u8> {
    0u8..=100u8
}

/// Strategy for generating non-negative monetary amounts
pub fn amount_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0f64
}

/// Strategy for generating complete, valid claim records
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        sex_strategy(),
        age_strategy(),
        any::<bool>(),
        accident_severity_strategy(),
        driving_record_strategy(),
        amount_strategy(),
        any::<bool>(),
        (
            amount_strategy(),
            any::<bool>(),
            amount_strategy(),
            policy_type_strategy(),
        ),
    )
        .prop_map(
            |(
                sex,
                age,
                seatbelt_worn,
                accident_severity,
                driving_record,
                estimated_loss,
                claimant_insured,
                (claim_amount_requested, claim_approved, settlement_amount, policy_type),
            )| {
                ClaimRecord {
                    sex,
                    age,
                    seatbelt_worn,
                    accident_severity,
                    driving_record,
                    estimated_loss,
                    claimant_insured,
                    claim_amount_requested,
                    claim_approved,
                    settlement_amount,
                    policy_type,
                }
            },
        )
}

/// Strategy for generating probabilities in the unit interval
pub fn probability_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1.0f64
}

/// Strategy for generating well-formed two-class distributions
pub fn distribution_strategy() -> impl Strategy<Value = Vec<f64>> {
    probability_strategy().prop_map(|p| vec![1.0 - p, p])
}

/// Strategy for generating feature vectors with bounded values
pub fn feature_vector_strategy() -> impl Strategy<Value = FeatureVector> {
    proptest::array::uniform10(-1.0e6f64..1.0e6f64).prop_map(FeatureVector::new)
}

//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for feature vectors and
//! probability outputs that give more meaningful error messages than
//! standard assertions.

use core_kernel::{FeatureVector, FEATURE_NAMES};

/// Asserts that two f64 values are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `tolerance` - The allowed absolute difference
///
/// # Panics
///
/// Panics if the values differ by more than the tolerance
pub fn assert_f64_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that two feature vectors match slot by slot
///
/// Failure messages name the offending feature so a mismatch points
/// straight at the slot that derived differently.
pub fn assert_feature_vector_approx_eq(
    actual: &FeatureVector,
    expected: &FeatureVector,
    tolerance: f64,
) {
    for (index, (a, e)) in actual
        .as_slice()
        .iter()
        .zip(expected.as_slice())
        .enumerate()
    {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "Feature {} (slot {}) differs: actual={}, expected={}, tolerance={}",
            FEATURE_NAMES[index],
            index,
            a,
            e,
            tolerance
        );
    }
}

/// Asserts that a value is a binary indicator (exactly 0.0 or 1.0)
pub fn assert_binary_indicator(value: f64) {
    assert!(
        value == 0.0 || value == 1.0,
        "Expected a binary indicator, got {}",
        value
    );
}

/// Asserts that a confidence value lies in the unit interval
pub fn assert_confidence_valid(confidence: f64) {
    assert!(
        confidence.is_finite() && (0.0..=1.0).contains(&confidence),
        "Confidence {} is not a probability",
        confidence
    );
}

/// Asserts that a two-class probability distribution is well formed
///
/// Checks the entry count, the unit interval for each entry, and that
/// the entries sum to one within the tolerance.
pub fn assert_distribution_valid(distribution: &[f64], tolerance: f64) {
    assert_eq!(
        distribution.len(),
        2,
        "Expected a two-class distribution, got {} entries",
        distribution.len()
    );

    for probability in distribution {
        assert_confidence_valid(*probability);
    }

    let sum: f64 = distribution.iter().sum();
    assert!(
        (sum - 1.0).abs() <= tolerance,
        "Distribution sums to {} rather than 1.0 (tolerance={})",
        sum,
        tolerance
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

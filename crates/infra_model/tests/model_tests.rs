//! Comprehensive tests for infra_model
//!
//! Covers artifact parsing and validation, logistic predictions, and the
//! lazy file-backed loader, including recovery after a failed load.

use std::fs;
use std::path::PathBuf;

use core_kernel::{BinaryClassifier, ClassLabel, FeatureVector, FEATURE_NAMES};
use infra_model::{LogisticModel, ModelError, ModelLoader};

fn artifact_json() -> String {
    let names: Vec<String> = FEATURE_NAMES.iter().map(|s| format!("{:?}", s)).collect();
    format!(
        r#"{{
            "model_name": "attorney-need-logistic-v3",
            "trained_at": "2025-11-02T09:30:00Z",
            "feature_names": [{}],
            "coefficients": [0.25, 0.0001, 0.5, 0.9, -0.1, -0.6, -0.4, 0.3, 1.1, 0.8],
            "intercept": -1.2
        }}"#,
        names.join(", ")
    )
}

fn temp_artifact(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("attorney_triage_{}_{}.json", std::process::id(), name));
    fs::write(&path, contents).expect("failed to write test artifact");
    path
}

// ============================================================================
// Artifact Tests
// ============================================================================

mod artifact_tests {
    use super::*;

    #[test]
    fn test_parses_production_style_artifact() {
        let model = LogisticModel::from_json(&artifact_json()).unwrap();

        assert_eq!(model.model_name, "attorney-need-logistic-v3");
        assert!(model.trained_at.is_some());
        assert_eq!(model.coefficients.len(), 10);
        assert_eq!(model.intercept, -1.2);
    }

    #[test]
    fn test_rejects_nine_coefficient_artifact() {
        let json = artifact_json().replace(
            "[0.25, 0.0001, 0.5, 0.9, -0.1, -0.6, -0.4, 0.3, 1.1, 0.8]",
            "[0.25, 0.0001, 0.5, 0.9, -0.1, -0.6, -0.4, 0.3, 1.1]",
        );

        let error = LogisticModel::from_json(&json).unwrap_err();
        assert!(error.is_incompatible());
    }

    #[test]
    fn test_rejects_shuffled_feature_names() {
        let json = artifact_json().replace(
            r#""sex_code", "claim_diff""#,
            r#""claim_diff", "sex_code""#,
        );

        let error = LogisticModel::from_json(&json).unwrap_err();
        assert!(error.is_incompatible());
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let json = artifact_json().replace(r#""intercept": -1.2"#, r#""bias": -1.2"#);

        let error = LogisticModel::from_json(&json).unwrap_err();
        assert!(matches!(error, ModelError::Parse { .. }));
    }

    #[test]
    fn test_severe_unsettled_claim_scores_positive() {
        let model = LogisticModel::from_json(&artifact_json()).unwrap();
        // Young male, no seatbelt, underpaid, denied third-party, high loss
        let features =
            FeatureVector::new([1.0, 5_000.0, 0.5, 1.0, 0.0, 0.5, 0.0, 1.0, 1.0, 1.0]);

        let label = model.predict(&features).unwrap();
        let proba = model.predict_proba(&features).unwrap();

        assert_eq!(label, ClassLabel::Positive);
        assert!(proba[1] > 0.5);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clean_claim_scores_negative() {
        let model = LogisticModel::from_json(&artifact_json()).unwrap();
        // Settled comprehensive claim, belt worn, no indicators raised
        let features = FeatureVector::new([0.0, 1_000.0, 0.1, 0.0, 0.0, 0.9, 1.0, 0.0, 0.0, 0.0]);

        let label = model.predict(&features).unwrap();
        let proba = model.predict_proba(&features).unwrap();

        assert_eq!(label, ClassLabel::Negative);
        assert!(proba[0] > 0.5);
    }
}

// ============================================================================
// Loader Tests
// ============================================================================

mod loader_tests {
    use super::*;

    #[test]
    fn test_loads_artifact_on_first_prediction() {
        let path = temp_artifact("first_use", &artifact_json());
        let loader = ModelLoader::new(&path);
        let features = FeatureVector::new([0.0; 10]);

        assert!(!loader.is_ready());
        loader.predict(&features).unwrap();
        assert!(loader.is_ready());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_ensure_loaded_reports_model_name() {
        let path = temp_artifact("warmup", &artifact_json());
        let loader = ModelLoader::new(&path);

        let model = loader.ensure_loaded().unwrap();
        assert_eq!(model.model_name, "attorney-need-logistic-v3");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_artifact_reports_unavailable() {
        let path = temp_artifact("corrupt", "{not json");
        let loader = ModelLoader::new(&path);
        let features = FeatureVector::new([0.0; 10]);

        let error = loader.predict_proba(&features).unwrap_err();
        assert!(error.is_unavailable());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_recovers_once_artifact_appears() {
        let path = std::env::temp_dir().join(format!(
            "attorney_triage_{}_recovery.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let loader = ModelLoader::new(&path);
        let features = FeatureVector::new([0.0; 10]);

        // No artifact on disk yet: unavailable, but the loader keeps trying
        assert!(loader.predict(&features).unwrap_err().is_unavailable());

        fs::write(&path, artifact_json()).unwrap();
        assert!(loader.predict(&features).is_ok());
        assert!(loader.is_ready());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_loader_is_shareable_across_threads() {
        let path = temp_artifact("threads", &artifact_json());
        let loader = std::sync::Arc::new(ModelLoader::new(&path));
        let features = FeatureVector::new([1.0, 5_000.0, 0.5, 1.0, 0.0, 0.5, 0.0, 1.0, 1.0, 1.0]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let loader = loader.clone();
                std::thread::spawn(move || loader.predict(&features).unwrap())
            })
            .collect();

        let labels: Vec<ClassLabel> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(labels.iter().all(|l| *l == labels[0]));

        let _ = fs::remove_file(path);
    }
}

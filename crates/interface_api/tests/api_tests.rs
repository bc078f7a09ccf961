//! Comprehensive tests for the HTTP API layer
//!
//! Boots the router against a real classifier artifact on disk and covers
//! the prediction endpoint, health probes, validation, and error mapping.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use core_kernel::FEATURE_NAMES;
use infra_model::ModelLoader;
use interface_api::config::ApiConfig;
use interface_api::create_router;
use serde_json::{json, Value};

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

fn temp_artifact(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "attorney_triage_api_{}_{}.json",
        std::process::id(),
        name
    ));
    fs::write(&path, artifact_json()).expect("failed to write test artifact");
    path
}

fn test_server(artifact_path: PathBuf) -> TestServer {
    let loader = Arc::new(ModelLoader::new(artifact_path));
    let app = create_router(loader, ApiConfig::default());
    TestServer::new(app).expect("failed to start test server")
}

/// Third-party claim settled at half the requested amount, unbelted young
/// driver with a heavy loss. Scores well above the decision threshold.
fn severe_request() -> Value {
    json!({
        "sex": "Male",
        "age": 22,
        "seatbelt_worn": false,
        "accident_severity": "Severe",
        "driving_record": "Major Offenses",
        "estimated_loss": 25000.0,
        "claimant_insured": false,
        "claim_amount_requested": 10000.0,
        "claim_approved": false,
        "settlement_amount": 5000.0,
        "policy_type": "Third-Party"
    })
}

/// Approved comprehensive claim settled close to the requested amount.
fn clean_request() -> Value {
    json!({
        "sex": "Female",
        "age": 40,
        "seatbelt_worn": true,
        "accident_severity": "Moderate",
        "driving_record": "Clean",
        "estimated_loss": 8000.0,
        "claimant_insured": true,
        "claim_amount_requested": 10000.0,
        "claim_approved": true,
        "settlement_amount": 9000.0,
        "policy_type": "Comprehensive"
    })
}

// ============================================================================
// Health Probe Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let server = test_server(temp_artifact("health"));

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_reports_ready_with_artifact() {
        let server = test_server(temp_artifact("ready"));

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_readiness_reports_unavailable_without_artifact() {
        let missing = std::env::temp_dir().join("attorney_triage_api_no_such_artifact.json");
        let server = test_server(missing);

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

// ============================================================================
// Prediction Endpoint Tests
// ============================================================================

mod prediction_tests {
    use super::*;

    #[tokio::test]
    async fn test_severe_claim_predicts_attorney_with_strong_signal() {
        let server = test_server(temp_artifact("severe"));

        let response = server.post("/api/v1/predictions").json(&severe_request()).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["needs_attorney"], true);
        assert_eq!(body["insight_tier"], "strong_signal");
        assert_eq!(
            body["summary"],
            "This claimant may require legal representation."
        );
        assert_eq!(
            body["insight"],
            "Strong indicators suggest legal counsel may be needed."
        );

        let confidence = body["confidence"].as_f64().unwrap();
        assert!((confidence - 0.9309).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_severe_claim_reports_all_three_flags() {
        let server = test_server(temp_artifact("flags"));

        let response = server.post("/api/v1/predictions").json(&severe_request()).await;

        let body: Value = response.json();
        let flags = body["flags"].as_array().unwrap();
        assert_eq!(flags.len(), 3);
        assert_eq!(flags[0]["code"], "underpaid_claim");
        assert_eq!(flags[0]["description"], "Claim may have been underpaid.");
        assert_eq!(flags[1]["code"], "third_party_denied");
        assert_eq!(flags[1]["description"], "Third-party claim possibly denied.");
        assert_eq!(flags[2]["code"], "high_loss");
        assert_eq!(flags[2]["description"], "High estimated loss noted.");
    }

    #[tokio::test]
    async fn test_clean_claim_predicts_no_attorney() {
        let server = test_server(temp_artifact("clean"));

        let response = server.post("/api/v1/predictions").json(&clean_request()).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["needs_attorney"], false);
        assert_eq!(body["insight_tier"], "no_signal");
        assert_eq!(
            body["summary"],
            "This claimant may not require an attorney."
        );
        assert_eq!(
            body["insight"],
            "Legal representation is likely unnecessary based on claim data."
        );
        assert_eq!(body["flags"].as_array().unwrap().len(), 0);

        // Confidence reports the predicted class's own probability
        let confidence = body["confidence"].as_f64().unwrap();
        assert!((confidence - 0.8797).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_borderline_claim_yields_weak_signal() {
        let server = test_server(temp_artifact("borderline"));

        // Underpaid but otherwise unremarkable, lands just past the decision
        // boundary with low confidence
        let request = json!({
            "sex": "Male",
            "age": 30,
            "seatbelt_worn": false,
            "accident_severity": "Minor",
            "driving_record": "Clean",
            "estimated_loss": 8000.0,
            "claimant_insured": true,
            "claim_amount_requested": 10000.0,
            "claim_approved": true,
            "settlement_amount": 6000.0,
            "policy_type": "Comprehensive"
        });

        let response = server.post("/api/v1/predictions").json(&request).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["needs_attorney"], true);
        assert_eq!(body["insight_tier"], "weak_signal");
        assert_eq!(
            body["insight"],
            "Possibility of legal support exists, but with lower certainty."
        );

        let flags = body["flags"].as_array().unwrap();
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0]["code"], "underpaid_claim");
    }

    #[tokio::test]
    async fn test_response_carries_evaluation_timestamp() {
        let server = test_server(temp_artifact("timestamp"));

        let response = server.post("/api/v1/predictions").json(&clean_request()).await;

        let body: Value = response.json();
        assert!(body["evaluated_at"].is_string());
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = test_server(temp_artifact("request_id"));

        let response = server.post("/api/v1/predictions").json(&clean_request()).await;

        assert!(response.headers().contains_key("x-request-id"));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_age_above_form_limit() {
        let server = test_server(temp_artifact("age"));

        let mut request = clean_request();
        request["age"] = json!(130);

        let response = server.post("/api/v1/predictions").json(&request).await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_rejects_negative_settlement_amount() {
        let server = test_server(temp_artifact("negative"));

        let mut request = clean_request();
        request["settlement_amount"] = json!(-500.0);

        let response = server.post("/api/v1/predictions").json(&request).await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_rejects_unknown_enum_value() {
        let server = test_server(temp_artifact("enum"));

        let mut request = clean_request();
        request["policy_type"] = json!("ThirdParty");

        let response = server.post("/api/v1/predictions").json(&request).await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        let server = test_server(temp_artifact("missing"));

        let mut request = clean_request();
        request.as_object_mut().unwrap().remove("settlement_amount");

        let response = server.post("/api/v1/predictions").json(&request).await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// Classifier Availability Tests
// ============================================================================

mod availability_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_artifact_maps_to_service_unavailable() {
        let missing = std::env::temp_dir().join("attorney_triage_api_absent_model.json");
        let server = test_server(missing);

        let response = server.post("/api/v1/predictions").json(&clean_request()).await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["error"], "classifier_unavailable");
    }

    #[tokio::test]
    async fn test_classifier_loads_on_demand_and_stays_resident() {
        let path = std::env::temp_dir().join(format!(
            "attorney_triage_api_{}_late_artifact.json",
            std::process::id()
        ));
        fs::remove_file(&path).ok();

        let server = test_server(path.clone());

        // No artifact yet: every request observes the failure
        let response = server.post("/api/v1/predictions").json(&clean_request()).await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        // Artifact appears: the next request loads it
        fs::write(&path, artifact_json()).expect("failed to write test artifact");
        let response = server.post("/api/v1/predictions").json(&clean_request()).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        // Once loaded, the model survives the file disappearing
        fs::remove_file(&path).ok();
        let response = server.post("/api/v1/predictions").json(&clean_request()).await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

mod error_mapping_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use domain_claims::{ClaimError, TriageError};
    use interface_api::error::ApiError;

    #[test]
    fn test_invalid_input_maps_to_unprocessable_entity() {
        let error = ApiError::from(TriageError::InvalidInput(ClaimError::NegativeAmount {
            field: "settlement_amount",
            value: -1.0,
        }));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_classifier_unavailable_maps_to_service_unavailable() {
        let error = ApiError::from(TriageError::ClassifierUnavailable(
            "artifact missing".to_string(),
        ));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_prediction_failure_maps_to_internal_server_error() {
        let error = ApiError::from(TriageError::Prediction(
            "malformed distribution".to_string(),
        ));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// ============================================================================
// DTO Tests
// ============================================================================

mod dto_tests {
    use super::*;

    use domain_claims::{PolicyType, Sex};
    use interface_api::dto::predictions::PredictionRequest;
    use validator::Validate;

    #[test]
    fn test_request_accepts_intake_form_spellings() {
        let request: PredictionRequest = serde_json::from_value(severe_request()).unwrap();

        assert_eq!(request.sex, Sex::Male);
        assert_eq!(request.policy_type, PolicyType::ThirdParty);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_converts_into_claim_record() {
        let request: PredictionRequest = serde_json::from_value(severe_request()).unwrap();

        let record = request.into_record();

        assert_eq!(record.age, 22);
        assert_eq!(record.claim_amount_requested, 10000.0);
        assert_eq!(record.settlement_amount, 5000.0);
        assert!(!record.claim_approved);
    }

    #[test]
    fn test_form_age_limit_is_inclusive() {
        let mut body = clean_request();
        body["age"] = json!(100);
        let request: PredictionRequest = serde_json::from_value(body).unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_age_just_past_form_limit() {
        let mut body = clean_request();
        body["age"] = json!(101);
        let request: PredictionRequest = serde_json::from_value(body).unwrap();

        assert!(request.validate().is_err());
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, "models/attorney_need.json");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_server_addr_formats_host_and_port() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 9090,
            ..ApiConfig::default()
        };

        assert_eq!(config.server_addr(), "127.0.0.1:9090");
    }
}

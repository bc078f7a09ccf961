//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_claims::TriageError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone()),
            ApiError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input", msg.clone()),
            ApiError::ClassifierUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, "classifier_unavailable", msg.clone()),
            ApiError::Prediction(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "prediction_failed", msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        match &err {
            TriageError::InvalidInput(_) => ApiError::InvalidInput(err.to_string()),
            TriageError::ClassifierUnavailable(_) => ApiError::ClassifierUnavailable(err.to_string()),
            TriageError::Prediction(_) => ApiError::Prediction(err.to_string()),
        }
    }
}

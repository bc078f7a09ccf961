//! Prediction handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use crate::dto::predictions::{PredictionRequest, PredictionResponse};
use crate::error::ApiError;
use crate::AppState;

/// Evaluates a claim and returns the attorney-need prediction
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = request.into_record();
    let result = state.service.evaluate(&record)?;

    info!(
        needs_attorney = result.needs_attorney,
        confidence = result.confidence,
        insight_tier = ?result.insight_tier,
        "prediction served"
    );

    Ok(Json(PredictionResponse::from(result)))
}

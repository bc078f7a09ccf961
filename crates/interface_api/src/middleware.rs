//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

use crate::AppState;

/// Audit logging middleware
///
/// Records every prediction API call with its outcome and latency so
/// triage decisions leave a reviewable trail
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let started_at = Utc::now();

    let response = next.run(request).await;

    let elapsed = Utc::now() - started_at;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = elapsed.num_milliseconds(),
        "request audited"
    );

    response
}

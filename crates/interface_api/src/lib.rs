//! HTTP API Layer
//!
//! This crate provides the REST API for the attorney-need triage system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for predictions and health probes
//! - **Middleware**: Request tracing, request ids, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use infra_model::ModelLoader;
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let loader = Arc::new(ModelLoader::new("models/attorney_need.json"));
//! let app = create_router(loader, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::TriageService;
use infra_model::ModelLoader;

use crate::config::ApiConfig;
use crate::handlers::{health, predictions};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: TriageService,
    pub loader: Arc<ModelLoader>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `loader` - Classifier artifact loader, shared between the triage
///   service and the readiness probe
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(loader: Arc<ModelLoader>, config: ApiConfig) -> Router {
    let service = TriageService::new(loader.clone());
    let state = AppState {
        service,
        loader,
        config,
    };

    // Public routes (health probes)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Prediction routes
    let prediction_routes = Router::new()
        .route("/", post(predictions::create_prediction));

    // Versioned API routes
    let api_routes = Router::new()
        .nest("/predictions", prediction_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use floodwatch_sdk::Floodwatch;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Request headers browsers may send cross-origin
pub const CORS_ALLOWED_HEADERS: [&str; 4] =
    ["authorization", "x-client-info", "apikey", "content-type"];

/// Create REST API router
pub fn create_router(engine: Arc<Floodwatch>) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/health", get(health))
        .route("/functions/v1/flood-predict", post(predict_flood))
        .route("/v1/predict", post(predict_flood))
        .route("/functions/v1/get-nearby-shelters", post(nearby_shelters))
        .route("/v1/shelters/nearby", post(nearby_shelters))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(CORS_ALLOWED_HEADERS.map(HeaderName::from_static))
}

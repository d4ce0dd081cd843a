//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::Uri, Json};
use floodwatch_sdk::{PredictionResult, SdkError};
use serde_json::Value;
use tracing::error;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Flood-risk prediction endpoint
pub(super) async fn predict_flood(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<Json<PredictionResult>, ServerError> {
    let result = state.engine.predictions().predict_json(&body)?;
    Ok(Json(result))
}

/// Nearby shelters endpoint
pub(super) async fn nearby_shelters(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<Json<SheltersResponse>, ServerError> {
    let shelters = state
        .engine
        .shelters()
        .nearby_json(&body)
        .await
        .map_err(|e| match e {
            SdkError::Repository(err) => {
                error!("Error fetching shelters: {}", err);
                ServerError::UpstreamError("Failed to retrieve shelters".to_string())
            }
            other => other.into(),
        })?;

    Ok(Json(SheltersResponse { shelters }))
}

/// Fallback for unknown routes
pub(super) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}

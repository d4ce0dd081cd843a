//! REST API type definitions

use floodwatch_sdk::{Floodwatch, RankedShelter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Floodwatch>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Nearby shelters response
#[derive(Debug, Serialize, Deserialize)]
pub struct SheltersResponse {
    pub shelters: Vec<RankedShelter>,
}

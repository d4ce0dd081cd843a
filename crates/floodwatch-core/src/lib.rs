//! Floodwatch Core - Core types and computation engines
//!
//! This crate provides the deterministic pieces shared across Floodwatch:
//! - Data model for prediction requests and shelter records
//! - Risk model: feature table, normalization, weighted scoring, classification
//! - Explanation composer driven by raw-value alarm thresholds
//! - Geo math: haversine distance, initial bearing, compass quantization
//! - Shelter ranking by distance
//! - Error types

pub mod error;
pub mod geo;
pub mod ranking;
pub mod risk;
pub mod types;

// Re-export commonly used types
pub use error::{ModelError, ValidationError};
pub use geo::CompassDirection;
pub use risk::{Feature, FeatureSpec, RiskDirection, RiskModel, RiskThresholds};
pub use types::{
    coerce_number, Coordinate, PredictionInput, PredictionRecord, PredictionResult, RankedShelter,
    RiskLabel, ShelterRecord,
};

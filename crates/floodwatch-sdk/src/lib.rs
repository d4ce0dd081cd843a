//! Floodwatch SDK
//!
//! High-level services on top of the core engines:
//! - [`RiskPredictionService`]: validate, score, explain and log a prediction
//! - [`ShelterRankingService`]: rank the shelter catalogue around a coordinate
//!
//! Use [`FloodwatchBuilder`] to wire both to a repository.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod log_writer;
pub mod prediction;
pub mod shelters;

// Re-export main types
pub use builder::FloodwatchBuilder;
pub use config::EngineConfig;
pub use engine::Floodwatch;
pub use error::{Result, SdkError};
pub use log_writer::{PredictionLogWriter, DEFAULT_LOG_CAPACITY};
pub use prediction::RiskPredictionService;
pub use shelters::{NearbyQuery, ShelterRankingService, DEFAULT_SHELTER_LIMIT};

// Re-export commonly used types from dependencies
pub use floodwatch_core::{
    CompassDirection, PredictionInput, PredictionResult, RankedShelter, RiskLabel, RiskModel,
    ShelterRecord, ValidationError,
};

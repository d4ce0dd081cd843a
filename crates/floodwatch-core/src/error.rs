//! Error types for Floodwatch Core

use thiserror::Error;

/// Request validation error
///
/// Always surfaced to the caller. Only the first offending field is reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid numeric value for field: {0}")]
    InvalidNumber(&'static str),

    #[error("Latitude and longitude are required")]
    MissingCoordinate,

    #[error("{field} {value} is outside [{min}, {max}]")]
    CoordinateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("limit must be a positive integer")]
    InvalidLimit,
}

/// Risk model loading/validation error
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse model YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Feature declared more than once: {0}")]
    DuplicateFeature(&'static str),

    #[error("Feature missing from model: {0}")]
    MissingFeature(&'static str),

    #[error("Expected {columns} feature weights, got {weights}")]
    WeightCountMismatch { columns: usize, weights: usize },

    #[error("Invalid range for {feature}: min {min} must be below max {max}")]
    InvalidRange {
        feature: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Invalid weight for {feature}: {weight}")]
    InvalidWeight { feature: &'static str, weight: f64 },

    #[error("Feature weights must sum to 1.0, got {0}")]
    WeightSum(f64),

    #[error("Invalid thresholds: require 0 < low_medium ({low_medium}) < medium_high ({medium_high}) < 1")]
    InvalidThresholds { low_medium: f64, medium_high: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;

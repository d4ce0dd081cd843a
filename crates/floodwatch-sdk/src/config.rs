//! Configuration types for the Floodwatch engine

use crate::log_writer::DEFAULT_LOG_CAPACITY;
use crate::shelters::DEFAULT_SHELTER_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Optional risk model file (JSON/YAML or a training export).
    /// The built-in feature table is used when unset.
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    /// Shelters returned when a request gives no limit
    #[serde(default = "default_shelter_limit")]
    pub default_shelter_limit: usize,

    /// Bound of the prediction log queue
    #[serde(default = "default_log_capacity")]
    pub prediction_log_capacity: usize,
}

fn default_shelter_limit() -> usize {
    DEFAULT_SHELTER_LIMIT
}

fn default_log_capacity() -> usize {
    DEFAULT_LOG_CAPACITY
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            model_path: None,
            default_shelter_limit: DEFAULT_SHELTER_LIMIT,
            prediction_log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }

    /// Set model file
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Set default shelter limit
    pub fn with_default_shelter_limit(mut self, limit: usize) -> Self {
        self.default_shelter_limit = limit;
        self
    }

    /// Set prediction log queue bound
    pub fn with_prediction_log_capacity(mut self, capacity: usize) -> Self {
        self.prediction_log_capacity = capacity;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

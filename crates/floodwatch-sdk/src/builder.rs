//! Builder pattern for Floodwatch

use crate::config::EngineConfig;
use crate::engine::Floodwatch;
use crate::error::{Result, SdkError};
use crate::log_writer::PredictionLogWriter;
use crate::prediction::RiskPredictionService;
use crate::shelters::ShelterRankingService;
use floodwatch_core::RiskModel;
use floodwatch_repository::{PredictionLog, ShelterRepository};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for [`Floodwatch`]
///
/// # Example
///
/// ```rust,ignore
/// use floodwatch_repository::MemoryRepository;
/// use floodwatch_sdk::FloodwatchBuilder;
/// use std::sync::Arc;
///
/// let repo = Arc::new(MemoryRepository::from_seed_file("data/shelters.json").await?);
/// let engine = FloodwatchBuilder::new()
///     .with_shelter_repository(repo.clone())
///     .with_prediction_log(repo)
///     .with_model_path("model/flood_model.json")
///     .build()?;
/// ```
pub struct FloodwatchBuilder {
    config: EngineConfig,
    model: Option<Arc<RiskModel>>,
    shelter_repository: Option<Arc<dyn ShelterRepository>>,
    prediction_log: Option<Arc<dyn PredictionLog>>,
}

impl FloodwatchBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            model: None,
            shelter_repository: None,
            prediction_log: None,
        }
    }

    /// Replace the whole engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the risk model from a file at build time
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_path = Some(path.into());
        self
    }

    /// Use an already loaded risk model. Takes precedence over a model path.
    pub fn with_model(mut self, model: Arc<RiskModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_default_shelter_limit(mut self, limit: usize) -> Self {
        self.config.default_shelter_limit = limit;
        self
    }

    pub fn with_prediction_log_capacity(mut self, capacity: usize) -> Self {
        self.config.prediction_log_capacity = capacity;
        self
    }

    /// Set the shelter catalogue (required)
    pub fn with_shelter_repository(mut self, repository: Arc<dyn ShelterRepository>) -> Self {
        self.shelter_repository = Some(repository);
        self
    }

    /// Set the prediction log. Predictions are not recorded without one.
    pub fn with_prediction_log(mut self, log: Arc<dyn PredictionLog>) -> Self {
        self.prediction_log = Some(log);
        self
    }

    /// Build the engine.
    ///
    /// Must be called inside a Tokio runtime when a prediction log is set,
    /// since the log writer spawns its background task here.
    pub fn build(self) -> Result<Floodwatch> {
        let shelter_repository = self.shelter_repository.ok_or_else(|| {
            SdkError::ConfigError("shelter repository not configured".to_string())
        })?;

        let default_limit = NonZeroUsize::new(self.config.default_shelter_limit).ok_or_else(|| {
            SdkError::ConfigError("default shelter limit must be greater than zero".to_string())
        })?;

        let model = match (self.model, self.config.model_path) {
            (Some(model), _) => model,
            (None, Some(path)) => {
                let model = RiskModel::from_file(&path)?;
                tracing::info!("Loaded risk model from {}", path.display());
                Arc::new(model)
            }
            (None, None) => Arc::new(RiskModel::default()),
        };

        let mut predictions = RiskPredictionService::new(model);
        if let Some(log) = self.prediction_log {
            let writer = PredictionLogWriter::new(log, self.config.prediction_log_capacity)?;
            predictions = predictions.with_log_writer(writer);
        }

        let shelters = ShelterRankingService::new(shelter_repository)
            .with_default_limit(default_limit);

        Ok(Floodwatch::new(predictions, shelters))
    }
}

impl Default for FloodwatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodwatch_repository::MemoryRepository;

    #[test]
    fn test_build_requires_shelter_repository() {
        let result = FloodwatchBuilder::new().build();
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_build_without_log_needs_no_runtime() {
        let engine = FloodwatchBuilder::new()
            .with_shelter_repository(Arc::new(MemoryRepository::new()))
            .with_default_shelter_limit(4)
            .build()
            .unwrap();
        assert_eq!(engine.shelters().default_limit(), 4);
    }

    #[test]
    fn test_zero_default_limit_rejected() {
        let result = FloodwatchBuilder::new()
            .with_shelter_repository(Arc::new(MemoryRepository::new()))
            .with_default_shelter_limit(0)
            .build();
        assert!(matches!(result, Err(SdkError::ConfigError(_))));
    }

    #[test]
    fn test_missing_model_file() {
        let result = FloodwatchBuilder::new()
            .with_shelter_repository(Arc::new(MemoryRepository::new()))
            .with_model_path("/no/such/model.json")
            .build();
        assert!(matches!(result, Err(SdkError::Model(_))));
    }

    #[tokio::test]
    async fn test_build_with_prediction_log() {
        let repo = Arc::new(MemoryRepository::new());
        let engine = FloodwatchBuilder::new()
            .with_shelter_repository(repo.clone())
            .with_prediction_log(repo)
            .build();
        assert!(engine.is_ok());
    }
}

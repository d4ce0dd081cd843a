//! Engine initialization
//!
//! Converts server configuration into a datastore backend and hands both to
//! the SDK builder.

use crate::config::{DatastoreConfig, ServerConfig};
use anyhow::Result;
use floodwatch_repository::{ApiRepository, MemoryRepository, PredictionLog, ShelterRepository};
use floodwatch_sdk::{EngineConfig, Floodwatch, FloodwatchBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Initialize the Floodwatch engine
///
/// Must run inside the Tokio runtime: the prediction log writer spawns its
/// background task while the engine is built.
pub async fn init_engine(config: &ServerConfig) -> Result<Floodwatch> {
    let (shelters, predictions) = init_datastore(&config.datastore).await?;

    let engine_config = EngineConfig {
        model_path: config.model_path.clone(),
        default_shelter_limit: config.default_shelter_limit,
        prediction_log_capacity: config.prediction_log_capacity,
    };

    let engine = FloodwatchBuilder::new()
        .with_config(engine_config)
        .with_shelter_repository(shelters)
        .with_prediction_log(predictions)
        .build()?;

    match config.model_path {
        Some(ref path) => info!("Risk model: {}", path.display()),
        None => info!("Risk model: built-in feature table"),
    }

    Ok(engine)
}

async fn init_datastore(
    datastore: &DatastoreConfig,
) -> Result<(Arc<dyn ShelterRepository>, Arc<dyn PredictionLog>)> {
    match datastore {
        DatastoreConfig::Memory { seed_file } => {
            let repo = match seed_file {
                Some(path) => MemoryRepository::from_seed_file(path).await?,
                None => MemoryRepository::new(),
            };
            info!("Using in-memory datastore");
            let repo = Arc::new(repo);
            let shelters: Arc<dyn ShelterRepository> = repo.clone();
            let predictions: Arc<dyn PredictionLog> = repo;
            Ok((shelters, predictions))
        }
        DatastoreConfig::Api {
            base_url,
            api_key,
            timeout_secs,
        } => {
            let repo = ApiRepository::with_timeout(
                base_url.clone(),
                api_key.clone(),
                Duration::from_secs(*timeout_secs),
            )?;
            info!("Using HTTP datastore at {}", base_url);
            let repo = Arc::new(repo);
            let shelters: Arc<dyn ShelterRepository> = repo.clone();
            let predictions: Arc<dyn PredictionLog> = repo;
            Ok((shelters, predictions))
        }
    }
}

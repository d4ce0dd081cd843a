//! In-memory repository
//!
//! Keeps shelters in insertion order and records every logged prediction.
//! Used for local development and tests.

use async_trait::async_trait;
use floodwatch_core::{PredictionRecord, ShelterRecord};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::{PredictionLog, ShelterRepository};

/// In-memory shelter catalogue and prediction log
#[derive(Debug)]
pub struct MemoryRepository {
    shelters: RwLock<Vec<ShelterRecord>>,
    predictions: RwLock<Vec<PredictionRecord>>,
    available: AtomicBool,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_shelters(Vec::new())
    }

    /// Create a repository holding `shelters` in the given order
    pub fn with_shelters(shelters: Vec<ShelterRecord>) -> Self {
        Self {
            shelters: RwLock::new(shelters),
            predictions: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Load shelters from a JSON array file, or YAML when the extension is `.yaml`/`.yml`
    pub async fn from_seed_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;

        let shelters: Vec<ShelterRecord> = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        tracing::info!(
            "Seeded memory repository with {} shelters from {}",
            shelters.len(),
            path.display()
        );

        Ok(Self::with_shelters(shelters))
    }

    /// Append a shelter to the catalogue
    pub async fn add_shelter(&self, shelter: ShelterRecord) {
        self.shelters.write().await.push(shelter);
    }

    /// Snapshot of logged predictions
    pub async fn predictions(&self) -> Vec<PredictionRecord> {
        self.predictions.read().await.clone()
    }

    /// Simulate an outage: while unavailable every operation fails
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepositoryResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Unavailable(
                "memory repository marked unavailable".to_string(),
            ))
        }
    }
}

#[async_trait]
impl ShelterRepository for MemoryRepository {
    async fn list_shelters(&self) -> RepositoryResult<Vec<ShelterRecord>> {
        self.check_available()?;
        Ok(self.shelters.read().await.clone())
    }
}

#[async_trait]
impl PredictionLog for MemoryRepository {
    async fn insert_prediction(&self, record: &PredictionRecord) -> RepositoryResult<()> {
        self.check_available()?;
        self.predictions.write().await.push(record.clone());
        Ok(())
    }
}

//! Core trait definitions for the persistence collaborator
//!
//! - [`ShelterRepository`]: read-only access to the shelter catalogue
//! - [`PredictionLog`]: append-only sink for prediction records
//!
//! # Thread Safety
//!
//! All implementations must be `Send + Sync` for use across async tasks.

use async_trait::async_trait;
use floodwatch_core::{PredictionRecord, ShelterRecord};

use crate::RepositoryResult;

/// Shelter catalogue
#[async_trait]
pub trait ShelterRepository: Send + Sync {
    /// Return every shelter record.
    ///
    /// The order of the returned records is the retrieval order used to
    /// break distance ties during ranking.
    async fn list_shelters(&self) -> RepositoryResult<Vec<ShelterRecord>>;
}

/// Prediction log
#[async_trait]
pub trait PredictionLog: Send + Sync {
    /// Append one record
    async fn insert_prediction(&self, record: &PredictionRecord) -> RepositoryResult<()>;
}

//! Persistence layer for Floodwatch
//!
//! The computation engines treat storage as an external collaborator with
//! two operations:
//!
//! - [`ShelterRepository::list_shelters`]: read the full shelter catalogue
//!   (no geo-filtering at the store level)
//! - [`PredictionLog::insert_prediction`]: append one prediction record
//!
//! # Backends
//!
//! - **Memory**: in-process storage, optionally seeded from a JSON/YAML file
//! - **API** (feature `api`): PostgREST-style HTTP datastore with tables
//!   `safe_shelters` and `flood_risk_predictions`
//!
//! # Quick Start
//!
//! ```no_run
//! use floodwatch_repository::{MemoryRepository, ShelterRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = MemoryRepository::from_seed_file("data/shelters.json").await?;
//!     let shelters = repo.list_shelters().await?;
//!     println!("Loaded {} shelters", shelters.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod traits;

#[cfg(feature = "api")]
pub mod api;

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use memory::MemoryRepository;
pub use traits::*;

#[cfg(feature = "api")]
pub use api::ApiRepository;

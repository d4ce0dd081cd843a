//! SDK error types

use floodwatch_core::{ModelError, ValidationError};
use floodwatch_repository::RepositoryError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Request rejected before any computation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Risk model could not be loaded
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Datastore failure
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Prediction log queue rejected a record
    #[error("Prediction log unavailable: {0}")]
    LogQueue(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

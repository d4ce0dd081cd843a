//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// API error (HTTP requests, authentication, etc.)
    #[error("API error: {0}")]
    ApiError(String),

    /// Store temporarily unable to serve requests
    #[error("Datastore unavailable: {0}")]
    Unavailable(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}

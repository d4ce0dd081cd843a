//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use floodwatch_sdk::SdkError;
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Invalid request
    InvalidRequest(String),

    /// Datastore or other upstream failure
    UpstreamError(String),

    /// Internal server error
    InternalError(String),

    /// Not found
    NotFound(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::UpstreamError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ServerError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Validation(e) => ServerError::InvalidRequest(e.to_string()),
            SdkError::Repository(e) => ServerError::UpstreamError(e.to_string()),
            other => ServerError::InternalError(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodwatch_sdk::ValidationError;
    use floodwatch_repository::RepositoryError;

    #[test]
    fn test_invalid_request_display() {
        let err = ServerError::InvalidRequest("missing field".to_string());
        assert_eq!(err.to_string(), "Invalid request: missing field");
    }

    #[test]
    fn test_upstream_error_display() {
        let err = ServerError::UpstreamError("datastore offline".to_string());
        assert_eq!(err.to_string(), "Upstream error: datastore offline");
    }

    #[test]
    fn test_not_found_display() {
        let err = ServerError::NotFound("/v2/predict".to_string());
        assert_eq!(err.to_string(), "Not found: /v2/predict");
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let server_err: ServerError = SdkError::from(ValidationError::MissingCoordinate).into();
        assert!(matches!(
            server_err,
            ServerError::InvalidRequest(ref msg) if msg == "Latitude and longitude are required"
        ));
    }

    #[test]
    fn test_repository_maps_to_upstream() {
        let sdk_err = SdkError::from(RepositoryError::ApiError("503".to_string()));
        let server_err: ServerError = sdk_err.into();
        assert!(matches!(server_err, ServerError::UpstreamError(_)));
    }

    #[test]
    fn test_other_sdk_errors_are_internal() {
        let server_err: ServerError = SdkError::ConfigError("bad".to_string()).into();
        assert!(matches!(server_err, ServerError::InternalError(_)));
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let server_err: ServerError = anyhow_err.into();
        assert!(server_err.to_string().contains("Internal error"));
        assert!(server_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn test_into_response_status_codes() {
        let cases = [
            (ServerError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::UpstreamError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServerError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServerError>();
    }
}

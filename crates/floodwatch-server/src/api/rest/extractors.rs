//! Custom extractors
//!
//! Browser clients often post JSON as `text/plain` to skip a CORS preflight,
//! so the body is parsed as JSON whatever the declared content type. Bodies
//! that fail to parse are answered with a 400 in the `{"error", "status"}`
//! shape used by every other API error.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// JSON body extractor that ignores `Content-Type`
pub struct JsonExtractor<T>(pub T);

type Rejection = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: String) -> Rejection {
    tracing::debug!("Rejected request body: {}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": message,
            "status": 400,
        })),
    )
}

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| bad_request(format!("Failed to read body: {}", rejection)))?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|err| {
                let message = if err.is_data() {
                    format!("Invalid JSON data: {}", err)
                } else {
                    format!("JSON syntax error: {}", err)
                };
                bad_request(message)
            })
    }
}

//! HTTP API Repository implementation
//!
//! Talks to a PostgREST-style datastore (the REST dialect used by hosted
//! Postgres platforms).
//!
//! # Endpoints
//!
//! ## GET {base_url}/rest/v1/safe_shelters?select=*&order=created_at.desc
//!
//! Returns a JSON array of shelter rows, newest first.
//!
//! ## POST {base_url}/rest/v1/flood_risk_predictions
//!
//! Inserts one prediction row. Sent with `Prefer: return=minimal`.
//!
//! # Authentication
//!
//! If an API key is provided it is sent both as the `apikey` header and as a
//! Bearer token:
//!
//! ```text
//! apikey: {api_key}
//! Authorization: Bearer {api_key}
//! ```

use async_trait::async_trait;
use floodwatch_core::{PredictionRecord, ShelterRecord};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::{PredictionLog, ShelterRepository};

const SHELTERS_TABLE: &str = "safe_shelters";
const PREDICTIONS_TABLE: &str = "flood_risk_predictions";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP API Repository
pub struct ApiRepository {
    /// HTTP client for making requests
    client: Client,

    /// Base URL of the datastore (e.g., "https://project.example.co")
    base_url: String,

    /// Optional API key for authentication
    api_key: Option<String>,
}

impl ApiRepository {
    /// Create a new API repository with the default timeout
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<impl Into<String>>,
    ) -> RepositoryResult<Self> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Create a new API repository with a custom request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: Option<impl Into<String>>,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            RepositoryError::ApiError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.into()),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.api_key {
            Some(ref key) => request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }
}

#[async_trait]
impl ShelterRepository for ApiRepository {
    async fn list_shelters(&self) -> RepositoryResult<Vec<ShelterRecord>> {
        let url = self.table_url(SHELTERS_TABLE);
        let request = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepositoryError::ApiError(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(RepositoryError::ApiError(format!(
                "API returned error status {} for {}",
                response.status(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::ApiError(format!("Failed to read response body: {}", e)))?;

        let shelters: Vec<ShelterRecord> = serde_json::from_str(&body)?;
        tracing::debug!("Fetched {} shelters from {}", shelters.len(), url);
        Ok(shelters)
    }
}

#[async_trait]
impl PredictionLog for ApiRepository {
    async fn insert_prediction(&self, record: &PredictionRecord) -> RepositoryResult<()> {
        let url = self.table_url(PREDICTIONS_TABLE);
        let request = self
            .client
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(record);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepositoryError::ApiError(format!("Failed to insert into {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(RepositoryError::ApiError(format!(
                "API returned error status {} for {}: {}",
                status, url, detail
            )));
        }

        Ok(())
    }
}

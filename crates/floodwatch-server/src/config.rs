//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where shelters are read from and predictions written to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatastoreConfig {
    /// In-process storage
    Memory {
        /// Optional JSON/YAML file with the initial shelter list
        #[serde(default)]
        seed_file: Option<PathBuf>,
    },
    /// PostgREST-style HTTP datastore
    Api {
        /// Base URL of the datastore
        base_url: String,
        /// Optional service key, sent as `apikey` and Bearer token
        #[serde(default)]
        api_key: Option<String>,
        /// Request timeout in seconds
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        DatastoreConfig::Memory { seed_file: None }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level for the floodwatch crates when `RUST_LOG` is unset
    pub log_level: String,

    pub log_format: LogFormat,

    /// Risk model file; the built-in feature table is used when unset
    pub model_path: Option<PathBuf>,

    /// Shelters returned when a request gives no limit
    pub default_shelter_limit: usize,

    /// Bound of the prediction log queue
    pub prediction_log_capacity: usize,

    pub datastore: DatastoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            model_path: None,
            default_shelter_limit: floodwatch_sdk::DEFAULT_SHELTER_LIMIT,
            prediction_log_capacity: floodwatch_sdk::DEFAULT_LOG_CAPACITY,
            datastore: DatastoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("config/server").required(false)),
        )
    }

    /// Load configuration from an explicit file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::from_builder(
            config::Config::builder().add_source(config::File::from(path.as_ref())),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        let cfg = builder
            .add_source(
                config::Environment::with_prefix("FLOODWATCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Default `EnvFilter` directives derived from `log_level`
    pub fn log_directives(&self) -> String {
        format!(
            "floodwatch_server={level},floodwatch_sdk={level},floodwatch_repository={level},tower_http=debug",
            level = self.log_level
        )
    }
}

//! Configuration types
//!
//! Every section implements `Default`, so a missing section or field in the
//! TOML file falls back to the defaults below.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLIENT_BASE_URL, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_CONFIG_DIR, DEFAULT_LOG_LEVEL,
    DEFAULT_MAX_BODY_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, LOCAL_STORE_FILENAME,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Proxy endpoint settings
    pub server: ServerConfig,
    /// Hosted backing store used by the proxy
    pub backing_store: BackingStoreConfig,
    /// Persistence cache settings used by the client tools
    pub client: ClientConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Proxy endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Largest accepted PUT body in bytes
    pub max_body_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Which backing store the proxy talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackingStoreProvider {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// Redis server
    Redis,
    /// Cloudflare Workers KV namespace over the REST API
    Cloudflare,
}

/// Backing store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackingStoreConfig {
    /// Selected provider
    pub provider: BackingStoreProvider,
    /// Settings used when `provider = "redis"`
    pub redis: RedisConfig,
    /// Settings used when `provider = "cloudflare"`
    pub cloudflare: CloudflareConfig,
}

/// Redis backing store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Connection URL, for example `redis://127.0.0.1:6379`
    pub url: Option<String>,
    /// Optional key prefix, stored keys become `<namespace>:<key>`
    pub namespace: Option<String>,
}

/// Workers KV backing store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudflareConfig {
    /// Cloudflare account identifier
    pub account_id: Option<String>,
    /// Workers KV namespace identifier
    pub namespace_id: Option<String>,
    /// API token
    pub api_token: Option<String>,
    /// API base URL
    pub api_base: String,
}

impl Default for CloudflareConfig {
    fn default() -> Self {
        Self {
            account_id: None,
            namespace_id: None,
            api_token: None,
            api_base: sitekv_providers::constants::CLOUDFLARE_API_BASE.to_string(),
        }
    }
}

/// Persistence cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the proxy endpoint
    pub base_url: String,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Local durable store file; defaults under the user data directory
    pub local_store_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CLIENT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
            local_store_path: None,
        }
    }
}

impl ClientConfig {
    /// HTTP timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Local durable store file, falling back to
    /// `<data_local_dir>/sitekv/local.json`
    pub fn resolved_local_store_path(&self) -> PathBuf {
        self.local_store_path.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_CONFIG_DIR)
                .join(LOCAL_STORE_FILENAME)
        })
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily-rolling file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values, using Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sitekv_domain::error::{Error, Result};

use crate::config::{
    AppConfig, BackingStoreConfig, BackingStoreProvider, ClientConfig, LoggingConfig,
    ServerConfig,
};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `SITEKV_SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so that field names may
        // contain single underscores (`SITEKV_BACKING_STORE__PROVIDER`).
        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// First existing file among the default config locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_backing_store_config(&config.backing_store)?;
    validate_client_config(&config.client)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.max_body_bytes == 0 {
        return Err(Error::configuration("Maximum body size cannot be 0"));
    }
    Ok(())
}

fn validate_backing_store_config(config: &BackingStoreConfig) -> Result<()> {
    fn present(value: Option<&String>) -> bool {
        value.is_some_and(|v| !v.trim().is_empty())
    }

    match config.provider {
        BackingStoreProvider::Memory => Ok(()),
        BackingStoreProvider::Redis => {
            if present(config.redis.url.as_ref()) {
                Ok(())
            } else {
                Err(Error::configuration(
                    "backing_store.redis.url is required when provider is redis",
                ))
            }
        }
        BackingStoreProvider::Cloudflare => {
            let cf = &config.cloudflare;
            let missing: Vec<&str> = [
                ("account_id", present(cf.account_id.as_ref())),
                ("namespace_id", present(cf.namespace_id.as_ref())),
                ("api_token", present(cf.api_token.as_ref())),
            ]
            .into_iter()
            .filter_map(|(name, ok)| (!ok).then_some(name))
            .collect();

            if missing.is_empty() {
                Ok(())
            } else {
                Err(Error::configuration(format!(
                    "backing_store.cloudflare is missing {} when provider is cloudflare",
                    missing.join(", ")
                )))
            }
        }
    }
}

fn validate_client_config(config: &ClientConfig) -> Result<()> {
    reqwest::Url::parse(&config.base_url)
        .config_context(format!("Invalid client.base_url `{}`", config.base_url))?;
    if config.timeout_secs == 0 {
        return Err(Error::configuration("Client timeout cannot be 0"));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set backing store configuration
    pub fn with_backing_store(mut self, backing_store: BackingStoreConfig) -> Self {
        self.config.backing_store = backing_store;
        self
    }

    /// Set client configuration
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.config.client = client;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

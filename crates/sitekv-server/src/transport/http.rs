//! HTTP transport for the KV proxy
//!
//! Runs the routes from [`crate::handlers`] on Rocket with the configured
//! address, port and JSON body limit.

use std::net::SocketAddr;

use rocket::config::LogLevel;
use rocket::data::{Limits, ToByteUnit};
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use sitekv_domain::error::{Error, Result};
use sitekv_infrastructure::config::ServerConfig;
use sitekv_infrastructure::constants::{
    DEFAULT_MAX_BODY_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use tracing::info;

use crate::handlers::{self, KvState};

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Largest accepted JSON body
    pub max_body_bytes: u64,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl From<&ServerConfig> for HttpTransportConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            max_body_bytes: config.max_body_bytes,
        }
    }
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.port)))
    }

    /// Rocket configuration for these settings
    ///
    /// Rocket's own logging is kept to critical messages; requests are
    /// traced by the handlers.
    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.host.clone()))
            .merge(("port", self.port))
            .merge((
                "limits",
                Limits::default().limit("json", self.max_body_bytes.bytes()),
            ))
            .merge(("log_level", LogLevel::Critical))
    }
}

/// HTTP transport server
#[derive(Debug)]
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: KvState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, state: KvState) -> Self {
        Self { config, state }
    }

    /// Build the configured Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        handlers::mount(
            rocket::custom(self.config.figment()),
            self.state.clone(),
        )
    }

    /// Serve until Rocket shuts down (Ctrl+C)
    pub async fn start(self) -> Result<()> {
        info!(
            addr = %self.config.socket_addr(),
            backing_store = self.state.store.provider_name(),
            "KV proxy listening"
        );

        self.rocket()
            .launch()
            .await
            .map_err(|e| Error::infrastructure(format!("HTTP server failed: {e}")))?;

        info!("KV proxy stopped");
        Ok(())
    }
}

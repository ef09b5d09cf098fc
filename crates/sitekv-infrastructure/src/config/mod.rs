//! Configuration management
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8787
//!
//! [backing_store]
//! provider = "redis"
//! redis.url = "redis://127.0.0.1:6379"
//!
//! [client]
//! base_url = "https://example.dev"
//! ```

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{
    AppConfig, BackingStoreConfig, BackingStoreProvider, ClientConfig, CloudflareConfig,
    LoggingConfig, RedisConfig, ServerConfig,
};

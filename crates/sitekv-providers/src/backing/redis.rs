//! Redis backing store
//!
//! Hosted namespace backed by a Redis server. Keys can be grouped under an
//! optional namespace prefix (`<namespace>:<key>`) so several sites can share
//! one Redis database.
//!
//! ## Example
//!
//! ```ignore
//! use sitekv_providers::backing::RedisBackingStore;
//!
//! let store = RedisBackingStore::new("redis://localhost:6379", Some("site"))?;
//! ```

use crate::constants::PROVIDER_REDIS;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use sitekv_domain::error::{Error, Result};
use sitekv_domain::ports::BackingStore;
use tokio::sync::OnceCell;

/// Redis backing store
///
/// The connection manager is created on first use and reconnects on its own
/// after a dropped connection.
pub struct RedisBackingStore {
    client: Client,
    namespace: Option<String>,
    connection: OnceCell<ConnectionManager>,
}

impl std::fmt::Debug for RedisBackingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBackingStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl RedisBackingStore {
    /// Create a Redis backing store from a connection URL
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `namespace` - Optional key prefix
    pub fn new(connection_string: &str, namespace: Option<&str>) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::backing_store_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            connection: OnceCell::new(),
        })
    }

    /// Get the shared connection, connecting on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                ConnectionManager::new(self.client.clone())
                    .await
                    .map_err(|e| {
                        Error::backing_store_with_source(
                            format!("Failed to connect to Redis: {e}"),
                            e,
                        )
                    })
            })
            .await?;
        Ok(manager.clone())
    }

    /// Apply the namespace prefix to a key
    fn namespaced_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }
}

#[async_trait]
impl BackingStore for RedisBackingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(self.namespaced_key(key))
            .await
            .map_err(|e| Error::backing_store_with_source(format!("Redis GET failed: {e}"), e))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(self.namespaced_key(key), value)
            .await
            .map_err(|e| Error::backing_store_with_source(format!("Redis SET failed: {e}"), e))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_REDIS
    }
}

//! Provider factory
//!
//! Turns configuration sections into ready-to-use stores and the persistence
//! cache.

use std::sync::Arc;

use sitekv_application::KvCache;
use sitekv_domain::error::{Error, Result};
use sitekv_domain::ports::{BackingStore, LocalStore, RemoteKv};
use sitekv_providers::backing::{CloudflareKvConfig, CloudflareKvStore, RedisBackingStore};
use sitekv_providers::{FileLocalStore, HttpKvClient, MemoryBackingStore};
use tracing::info;

use crate::config::{BackingStoreConfig, BackingStoreProvider, ClientConfig};
use crate::error_ext::ErrorContext;

/// Create the backing store selected by `config.provider`
pub fn create_backing_store(config: &BackingStoreConfig) -> Result<Arc<dyn BackingStore>> {
    let store: Arc<dyn BackingStore> = match config.provider {
        BackingStoreProvider::Memory => Arc::new(MemoryBackingStore::new()),
        BackingStoreProvider::Redis => {
            let url = required(config.redis.url.as_ref(), "backing_store.redis.url")?;
            Arc::new(RedisBackingStore::new(
                url,
                config.redis.namespace.as_deref(),
            )?)
        }
        BackingStoreProvider::Cloudflare => {
            let cf = &config.cloudflare;
            let mut settings = CloudflareKvConfig::new(
                required(cf.account_id.as_ref(), "backing_store.cloudflare.account_id")?
                    .to_string(),
                required(cf.namespace_id.as_ref(), "backing_store.cloudflare.namespace_id")?
                    .to_string(),
                required(cf.api_token.as_ref(), "backing_store.cloudflare.api_token")?
                    .to_string(),
            );
            settings.api_base.clone_from(&cf.api_base);
            let http_client = reqwest::Client::builder()
                .build()
                .network_context("Failed to create Workers KV HTTP client")?;
            Arc::new(CloudflareKvStore::new(settings, http_client))
        }
    };

    info!(provider = store.provider_name(), "Backing store ready");
    Ok(store)
}

/// Open the local durable store at the configured (or default) path
pub fn create_local_store(config: &ClientConfig) -> Result<Arc<dyn LocalStore>> {
    let path = config.resolved_local_store_path();
    let store = FileLocalStore::open(&path)?;
    info!(path = %path.display(), "Local store opened");
    Ok(Arc::new(store))
}

/// Create the HTTP client for the proxy endpoint
pub fn create_remote(config: &ClientConfig) -> Result<Arc<dyn RemoteKv>> {
    Ok(Arc::new(HttpKvClient::new(&config.base_url, config.timeout())?))
}

/// Create a persistence cache over the proxy and the local durable store
pub fn create_kv_cache(config: &ClientConfig) -> Result<KvCache> {
    Ok(KvCache::new(create_remote(config)?, create_local_store(config)?))
}

fn required<'a>(value: Option<&'a String>, name: &str) -> Result<&'a str> {
    value
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::configuration(format!("{name} is required")))
}

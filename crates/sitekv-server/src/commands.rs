//! Client commands
//!
//! `get` and `put` go through the persistence cache, so they read and write
//! the same local durable store a long-running client would use.

use std::path::Path;

use serde_json::Value;
use sitekv_application::KvCache;
use sitekv_domain::entities::Entry;
use sitekv_domain::error::{Error, Result};
use sitekv_infrastructure::config::{AppConfig, ConfigLoader};
use tracing::{debug, info};

/// Current value of `key` once the remote fetch has settled
///
/// Falls back to the local copy when the proxy is unreachable and prints
/// `null` for a key nobody has written.
pub async fn get_value(cache: &KvCache, key: &str) -> Result<Value> {
    if key.is_empty() {
        return Err(Error::validation("key must not be empty"));
    }

    let binding = cache.bind(key, Value::Null);
    binding.reconciled().await;
    Ok(binding.get())
}

/// Parse `raw` as JSON, store it under `key` and wait for the remote write
///
/// The remote fetch is awaited first so that a late reconcile cannot replace
/// the new value locally. A failed remote write is logged by the cache and
/// the value stays in the local store.
pub async fn put_value(cache: &KvCache, key: &str, raw: &str) -> Result<Value> {
    let entry = Entry::new(key, serde_json::from_str(raw)?)?;

    let binding = cache.bind(entry.key.as_str(), Value::Null);
    binding.reconciled().await;
    binding.set(entry.value.clone());
    binding.flushed().await;

    debug!(key = %entry.key, "Value written");
    Ok(entry.value)
}

/// Write `config` as TOML to `path`
///
/// An existing file is only replaced when `force` is set.
pub fn write_config(config: &AppConfig, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::configuration(format!(
            "{} already exists, pass --force to replace it",
            path.display()
        )));
    }

    ConfigLoader::new().save_to_file(config, path)?;
    info!(path = %path.display(), "Configuration written");
    Ok(())
}

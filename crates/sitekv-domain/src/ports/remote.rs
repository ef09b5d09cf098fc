//! Remote KV Port
//!
//! Client view of the proxy endpoint.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Remote read/write contract used by the persistence cache
#[async_trait]
pub trait RemoteKv: Send + Sync + std::fmt::Debug {
    /// Fetch the remote value for `key`
    ///
    /// Returns `None` when the endpoint answers `{"value": null}`, which
    /// covers both a missing key and a stored `null`.
    async fn fetch(&self, key: &str) -> Result<Option<Value>>;

    /// Write `value` for `key`
    async fn store(&self, key: &str, value: &Value) -> Result<()>;
}

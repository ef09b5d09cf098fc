//! Backing Store Port
//!
//! Contract for the hosted, string-valued key-value namespace the proxy
//! delegates to. Each call is a single atomic operation; there are no
//! multi-key transactions.

use crate::error::Result;
use async_trait::async_trait;

/// Hosted key-value namespace used by the proxy endpoint
///
/// # Example
///
/// ```ignore
/// store.put("theme", "\"dark\"").await?;
/// assert_eq!(store.get("theme").await?, Some("\"dark\"".to_string()));
/// assert_eq!(store.get("never-set").await?, None);
/// ```
#[async_trait]
pub trait BackingStore: Send + Sync + std::fmt::Debug {
    /// Read the raw stored string for a key, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a raw string for a key, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Identifier of this implementation (e.g. "memory", "redis", "cloudflare")
    fn provider_name(&self) -> &str;
}

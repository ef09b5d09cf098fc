//! Cloudflare Workers KV backing store
//!
//! Talks to a Workers KV namespace through the Cloudflare REST API, so the
//! proxy can run outside the Workers runtime and still share the namespace
//! the deployed site uses.
//!
//! ```text
//! GET {api_base}/accounts/{account_id}/storage/kv/namespaces/{namespace_id}/values/{key}
//! PUT {api_base}/accounts/{account_id}/storage/kv/namespaces/{namespace_id}/values/{key}
//! ```

use crate::constants::{CLOUDFLARE_API_BASE, PROVIDER_CLOUDFLARE};
use crate::utils::HttpResponseUtils;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use sitekv_domain::error::{Error, Result};
use sitekv_domain::ports::BackingStore;
use tracing::debug;

/// Connection settings for a Workers KV namespace
#[derive(Debug, Clone)]
pub struct CloudflareKvConfig {
    /// Cloudflare account identifier
    pub account_id: String,
    /// Workers KV namespace identifier
    pub namespace_id: String,
    /// API token with `Workers KV Storage:Edit` permission
    pub api_token: String,
    /// API base URL, overridable for tests
    pub api_base: String,
}

impl CloudflareKvConfig {
    /// Settings against the public Cloudflare API
    pub fn new(account_id: String, namespace_id: String, api_token: String) -> Self {
        Self {
            account_id,
            namespace_id,
            api_token,
            api_base: CLOUDFLARE_API_BASE.to_string(),
        }
    }
}

/// Workers KV backing store
pub struct CloudflareKvStore {
    config: CloudflareKvConfig,
    http_client: Client,
}

impl std::fmt::Debug for CloudflareKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareKvStore")
            .field("account_id", &self.config.account_id)
            .field("namespace_id", &self.config.namespace_id)
            .field("api_base", &self.config.api_base)
            .finish_non_exhaustive()
    }
}

impl CloudflareKvStore {
    /// Create a store from settings and a shared HTTP client
    pub fn new(config: CloudflareKvConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Build the value URL for a key, percent-encoding the key segment
    fn value_url(&self, key: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.api_base).map_err(|e| {
            Error::backing_store_with_source(
                format!("Invalid Cloudflare API base `{}`", self.config.api_base),
                e,
            )
        })?;
        url.path_segments_mut()
            .map_err(|()| Error::backing_store("Cloudflare API base cannot hold a path"))?
            .pop_if_empty()
            .extend([
                "accounts",
                &self.config.account_id,
                "storage",
                "kv",
                "namespaces",
                &self.config.namespace_id,
                "values",
                key,
            ]);
        Ok(url)
    }
}

#[async_trait]
impl BackingStore for CloudflareKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let url = self.value_url(key)?;
        debug!(key = %key, "Workers KV read");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(|e| Error::backing_store_with_source(format!("Workers KV GET failed: {e}"), e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => response.text().await.map(Some).map_err(|e| {
                Error::backing_store_with_source(format!("Workers KV body read failed: {e}"), e)
            }),
            _ => Err(Error::backing_store(
                HttpResponseUtils::describe_failure(response, "Workers KV GET").await,
            )),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let url = self.value_url(key)?;
        debug!(key = %key, bytes = value.len(), "Workers KV write");

        let response = self
            .http_client
            .put(url)
            .bearer_auth(&self.config.api_token)
            .header("Content-Type", "text/plain")
            .body(value.to_string())
            .send()
            .await
            .map_err(|e| Error::backing_store_with_source(format!("Workers KV PUT failed: {e}"), e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::backing_store(
                HttpResponseUtils::describe_failure(response, "Workers KV PUT").await,
            ))
        }
    }

    fn provider_name(&self) -> &str {
        PROVIDER_CLOUDFLARE
    }
}

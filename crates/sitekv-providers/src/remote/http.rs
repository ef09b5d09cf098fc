//! HTTP client for the KV proxy endpoint
//!
//! Mirrors what the page does with `fetch`: one GET per reconcile and one PUT
//! per flushed write, no retries. Keys are percent-encoded into a single path
//! segment.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitekv_domain::constants::KV_API_BASE_PATH;
use sitekv_domain::error::{Error, Result};
use sitekv_domain::ports::RemoteKv;
use tracing::debug;

use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::HttpResponseUtils;

/// `GET /api/kv/{key}` response body
#[derive(Debug, Deserialize)]
struct ValueEnvelope {
    #[serde(default)]
    value: Option<Value>,
}

/// `PUT /api/kv/{key}` request body
#[derive(Debug, Serialize)]
struct PutEnvelope<'a> {
    value: &'a Value,
}

/// Remote KV client over HTTP
///
/// ## Example
///
/// ```rust,no_run
/// use sitekv_providers::HttpKvClient;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpKvClient::new("http://127.0.0.1:8787", Duration::from_secs(30))?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpKvClient {
    base_url: Url,
    http_client: Client,
}

impl HttpKvClient {
    /// Create a client for the proxy at `base_url` with a request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network_with_source("Failed to create HTTP client", e))?;
        Self::with_client(base_url, http_client)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(base_url: &str, http_client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::configuration(format!("Invalid proxy base URL `{base_url}`: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration(format!(
                "Proxy base URL `{base_url}` cannot hold a path"
            )));
        }
        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Base URL of the proxy
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the value resource for `key`
    pub fn value_url(&self, key: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(KV_API_BASE_PATH.split('/').filter(|s| !s.is_empty()));
            segments.push(key);
        }
        url
    }
}

#[async_trait]
impl RemoteKv for HttpKvClient {
    async fn fetch(&self, key: &str) -> Result<Option<Value>> {
        let url = self.value_url(key);
        debug!(url = %url, "Fetching remote value");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("GET {key} failed: {e}"), e))?;

        if !response.status().is_success() {
            return Err(Error::network(
                HttpResponseUtils::describe_failure(response, &format!("GET {key}")).await,
            ));
        }

        let envelope: ValueEnvelope = response.json().await.map_err(|e| {
            Error::network_with_source(format!("GET {key} returned an invalid body: {e}"), e)
        })?;
        Ok(envelope.value.filter(|v| !v.is_null()))
    }

    async fn store(&self, key: &str, value: &Value) -> Result<()> {
        let url = self.value_url(key);
        debug!(url = %url, "Storing remote value");

        let response = self
            .http_client
            .put(url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .json(&PutEnvelope { value })
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("PUT {key} failed: {e}"), e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::network(
                HttpResponseUtils::describe_failure(response, &format!("PUT {key}")).await,
            ))
        }
    }
}

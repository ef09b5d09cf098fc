//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the proxy endpoint and
//! the Cloudflare API. These are shared utilities, not ports.

use reqwest::{Response, StatusCode};

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Describe a non-success response for error messages
    ///
    /// Consumes the response to include its body text, truncated so that a
    /// large HTML error page does not flood the logs.
    pub async fn describe_failure(response: Response, context: &str) -> String {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Self::failure_message(status, context, &body)
    }

    /// Format a failure message from its parts
    pub fn failure_message(status: StatusCode, context: &str, body: &str) -> String {
        const MAX_BODY_CHARS: usize = 200;

        let code = status.as_u16();
        let reason = match code {
            400 => "bad request",
            401 | 403 => "authentication failed",
            404 => "not found",
            429 => "rate limit exceeded",
            500..=599 => "server error",
            _ => "request failed",
        };
        let mut body: String = body.chars().take(MAX_BODY_CHARS).collect();
        if body.is_empty() {
            body = "<empty body>".to_string();
        }
        format!("{context} {reason} ({code}): {body}")
    }
}

//! Remote client providers
//!
//! Implements [`RemoteKv`](sitekv_domain::ports::RemoteKv) against the proxy
//! endpoint.

pub mod http;

pub use http::HttpKvClient;

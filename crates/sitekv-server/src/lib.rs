//! # sitekv Server
//!
//! The KV proxy endpoint and the `sitekv` command line client.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/kv/<key>` | Read a value, `{"value": null}` when unset |
//! | PUT | `/api/kv/<key>` | Write `{"value": ...}` |
//! | OPTIONS | `/api/kv/<key>` | CORS preflight |
//! | GET | `/health` | Liveness and backing store name |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sitekv_server::handlers::KvState;
//! use sitekv_server::transport::http::{HttpTransport, HttpTransportConfig};
//!
//! # async fn example(store: Arc<dyn sitekv_domain::BackingStore>) -> sitekv_domain::Result<()> {
//! HttpTransport::new(HttpTransportConfig::localhost(8787), KvState::new(store))
//!     .start()
//!     .await
//! # }
//! ```

pub mod args;
pub mod commands;
pub mod handlers;
pub mod init;
pub mod responses;
pub mod transport;

pub use args::{Cli, Command};
pub use handlers::{KvState, kv_rocket};
pub use init::run;

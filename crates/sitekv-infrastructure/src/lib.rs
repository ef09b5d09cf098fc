//! # sitekv Infrastructure Layer
//!
//! Cross-cutting concerns shared by the proxy server and the client tools:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`factory`] | Builds stores and the persistence cache from configuration |
//! | [`error_ext`] | Context helpers for converting foreign errors |
//! | [`constants`] | Defaults and well-known names |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;

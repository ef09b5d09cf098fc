//! # sitekv - Provider Implementations
//!
//! Concrete implementations of the ports defined in `sitekv-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Backing store | `BackingStore` | Memory, Redis, Cloudflare Workers KV |
//! | Local store | `LocalStore` | Memory, JSON file |
//! | Remote | `RemoteKv` | `HttpKvClient` |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! sitekv-providers = { version = "0.1", default-features = false, features = ["backing-redis"] }
//! ```

// Re-export sitekv-domain types commonly used with providers
pub use sitekv_domain::error::{Error, Result};
pub use sitekv_domain::ports::{BackingStore, LocalStore, RemoteKv};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Backing store implementations used by the proxy endpoint
pub mod backing;

/// Local durable store implementations used by the persistence cache
pub mod local;

/// Remote client implementations used by the persistence cache
pub mod remote;

pub use backing::MemoryBackingStore;
pub use local::{FileLocalStore, MemoryLocalStore};
pub use remote::HttpKvClient;

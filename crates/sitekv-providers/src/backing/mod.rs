//! Backing store providers
//!
//! Implements [`BackingStore`](sitekv_domain::ports::BackingStore) for the
//! hosted namespaces the proxy can delegate to.

pub mod memory;

#[cfg(feature = "backing-redis")]
pub mod redis;

#[cfg(feature = "backing-cloudflare")]
pub mod cloudflare;

pub use memory::MemoryBackingStore;

#[cfg(feature = "backing-redis")]
pub use self::redis::RedisBackingStore;

#[cfg(feature = "backing-cloudflare")]
pub use cloudflare::{CloudflareKvConfig, CloudflareKvStore};

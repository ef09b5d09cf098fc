//! # sitekv Application Layer
//!
//! The client persistence cache: a synchronous-feeling read/write primitive
//! over a key, backed by a durable local store and an eventually-consistent
//! remote store.
//!
//! ```ignore
//! let cache = KvCache::new(remote, local);
//! let theme = cache.bind("theme-preference", "light".to_string());
//! theme.set("dark".to_string());          // local + reactive now, remote later
//! let counter = cache.bind("counter", 0_i64);
//! counter.update(|prev| prev + 1);
//! ```
//!
//! Requires a Tokio runtime: binding a key spawns its reconcile fetch and the
//! first write to an idle key spawns that key's write pipeline.

pub mod cache;

pub use cache::{KvBinding, KvCache, ReconcileState, WritePhase};

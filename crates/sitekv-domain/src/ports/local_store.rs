//! Local Store Port
//!
//! Synchronous, durable, flat string namespace on the client side. Plays the
//! role a browser's local storage plays for the page: reads and writes never
//! suspend.

use crate::error::Result;

/// Client-side durable string store
///
/// Keys arrive already namespaced (see [`crate::constants::local_key`]).
pub trait LocalStore: Send + Sync + std::fmt::Debug {
    /// Read the raw string stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a raw string under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

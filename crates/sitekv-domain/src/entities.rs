//! Entry entity
//!
//! The unit of storage: an opaque string key mapped to any JSON value. The
//! backing store is string-valued, so an entry crosses that boundary as the
//! JSON serialization of its value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single key/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Logical key, URL-path-safe, never empty
    pub key: String,
    /// Arbitrary JSON payload; no schema is enforced
    pub value: Value,
}

impl Entry {
    /// Create an entry, rejecting an empty key
    pub fn new<K: Into<String>>(key: K, value: Value) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::validation("key must not be empty"));
        }
        Ok(Self { key, value })
    }

    /// Serialize the value into the string form handed to the backing store
    pub fn to_stored(&self) -> String {
        // Serializing a `Value` cannot fail: every map key is already a string.
        self.value.to_string()
    }

    /// Rebuild an entry from a string read out of the backing store
    ///
    /// A stored string that is not valid JSON (for example written out of
    /// band) is reported as a [`Error::BackingStore`] failure.
    pub fn from_stored<K: Into<String>>(key: K, raw: &str) -> Result<Self> {
        let key = key.into();
        let value = serde_json::from_str(raw).map_err(|e| {
            Error::backing_store_with_source(format!("stored value for `{key}` is not JSON"), e)
        })?;
        Ok(Self { key, value })
    }
}

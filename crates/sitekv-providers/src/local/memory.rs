//! In-memory local store
//!
//! Durable only for the lifetime of the process. Useful for tests and for
//! clients that do not need to survive restarts.

use dashmap::DashMap;
use sitekv_domain::error::Result;
use sitekv_domain::ports::LocalStore;
use std::sync::Arc;

/// DashMap-backed local store
#[derive(Debug, Clone, Default)]
pub struct MemoryLocalStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryLocalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (key, value) in entries {
            store.entries.insert(key.into(), value.into());
        }
        store
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

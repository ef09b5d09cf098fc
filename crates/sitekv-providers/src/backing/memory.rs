//! In-memory backing store
//!
//! Process-local stand-in for the hosted namespace. Used for development
//! servers and tests; contents are lost on restart.

use crate::constants::PROVIDER_MEMORY;
use async_trait::async_trait;
use dashmap::DashMap;
use sitekv_domain::error::Result;
use sitekv_domain::ports::BackingStore;
use std::sync::Arc;

/// DashMap-backed string store
#[derive(Debug, Clone, Default)]
pub struct MemoryBackingStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryBackingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl BackingStore for MemoryBackingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn provider_name(&self) -> &str {
        PROVIDER_MEMORY
    }
}

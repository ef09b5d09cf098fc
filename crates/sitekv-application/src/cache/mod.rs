//! Client persistence cache
//!
//! [`KvCache`] hands out [`KvBinding`]s. All bindings of a key share one slot,
//! so a write through any of them is seen by every other one and by every
//! subscriber of the key.
//!
//! Read path: seed from the local store (or the caller default), then one
//! background fetch that replaces the value when the remote has one.
//!
//! Write path: apply locally and persist locally at once, then hand the value
//! to the key's write pipeline (see [`WritePhase`]).

mod binding;
mod slot;

pub use binding::{KvBinding, ReconcileState};
pub use slot::WritePhase;

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sitekv_domain::ports::{LocalStore, RemoteKv};
use tracing::warn;

use slot::KeySlot;

pub(crate) struct CacheInner {
    pub(crate) remote: Arc<dyn RemoteKv>,
    pub(crate) local: Arc<dyn LocalStore>,
    slots: DashMap<String, Arc<KeySlot>>,
}

/// Registry of bound keys over a remote and a local store
///
/// Cheap to clone; clones share the same slots.
#[derive(Clone)]
pub struct KvCache {
    inner: Arc<CacheInner>,
}

impl std::fmt::Debug for KvCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvCache")
            .field("remote", &self.inner.remote)
            .field("local", &self.inner.local)
            .field("keys", &self.inner.slots.len())
            .finish()
    }
}

impl KvCache {
    /// Create an empty cache
    pub fn new(remote: Arc<dyn RemoteKv>, local: Arc<dyn LocalStore>) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                remote,
                local,
                slots: DashMap::new(),
            }),
        }
    }

    /// Bind `key` with `default` as the fallback value
    ///
    /// The first binding of a key seeds it from the local store, or from
    /// `default` when nothing usable is stored locally. Every binding starts
    /// its own remote fetch.
    ///
    /// Must be called within a Tokio runtime.
    pub fn bind<T>(&self, key: impl Into<String>, default: T) -> KvBinding<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let key = key.into();
        let slot = self
            .inner
            .slots
            .entry(key.clone())
            .or_insert_with(|| {
                let seed = serde_json::to_value(&default).unwrap_or_else(|e| {
                    warn!(key = %key, error = %e, "Default does not serialize to JSON, seeding null");
                    Value::Null
                });
                Arc::new(KeySlot::seed(key.clone(), self.inner.local.as_ref(), seed))
            })
            .clone();

        KvBinding::start(Arc::clone(&self.inner), slot, default)
    }

    /// Current shared value of a bound key
    pub fn peek(&self, key: &str) -> Option<Value> {
        self.inner.slots.get(key).map(|slot| slot.current())
    }

    /// Number of keys bound so far
    pub fn len(&self) -> usize {
        self.inner.slots.len()
    }

    /// Whether no key has been bound
    pub fn is_empty(&self) -> bool {
        self.inner.slots.is_empty()
    }

    /// Wait until every bound key has attempted its pending remote writes
    pub async fn flush(&self) {
        let slots: Vec<Arc<KeySlot>> = self
            .inner
            .slots
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for slot in slots {
            slot.idle().await;
        }
    }
}

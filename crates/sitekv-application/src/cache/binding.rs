//! Typed key bindings
//!
//! A [`KvBinding`] is one consumer's handle on a key. It reads and writes the
//! shared key slot through its own type `T`, and owns the reconcile fetch
//! started when it was created.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::CacheInner;
use super::slot::{KeySlot, WritePhase};

/// Progress of the one-shot remote fetch of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileState {
    /// Holding the local or default value, fetch not started yet
    Seeded,
    /// Fetch in flight
    Reconciling,
    /// Fetch finished, whatever its outcome
    Reconciled,
}

/// Handle on one key, typed as `T`
///
/// Dropping the binding abandons its reconcile fetch. Remote writes already
/// issued keep running.
pub struct KvBinding<T> {
    cache: Arc<CacheInner>,
    slot: Arc<KeySlot>,
    default: T,
    state: watch::Receiver<ReconcileState>,
    reconcile: JoinHandle<()>,
}

impl<T> std::fmt::Debug for KvBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvBinding")
            .field("key", &self.slot.key())
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl<T> KvBinding<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub(crate) fn start(cache: Arc<CacheInner>, slot: Arc<KeySlot>, default: T) -> Self {
        let (state_tx, state) = watch::channel(ReconcileState::Seeded);
        let reconcile = tokio::spawn(reconcile(
            Arc::clone(&cache),
            Arc::clone(&slot),
            state_tx,
        ));
        Self {
            cache,
            slot,
            default,
            state,
            reconcile,
        }
    }

    /// Key this binding addresses
    pub fn key(&self) -> &str {
        self.slot.key()
    }

    /// Current value
    ///
    /// A shared value that does not decode as `T` (another binding of the key
    /// used a different shape) reads as this binding's default.
    pub fn get(&self) -> T {
        self.decode(&self.slot.current())
    }

    /// Current value as raw JSON
    pub fn raw(&self) -> Value {
        self.slot.current()
    }

    /// Replace the value
    ///
    /// Takes effect locally before returning; the remote write follows in the
    /// background.
    pub fn set(&self, value: T) {
        self.update(move |_| value);
    }

    /// Replace the value with one derived from the current value
    ///
    /// `f` sees the value as of this call, never a stale snapshot, so
    /// back-to-back updates compose. `f` runs while the key is locked and must
    /// not use any binding of the same key.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        let applied = self.slot.apply(self.cache.local.as_ref(), |current| {
            let next = f(self.decode(current));
            serde_json::to_value(&next)
                .inspect_err(|e| {
                    warn!(key = %self.key(), error = %e, "Value does not serialize to JSON, ignoring");
                })
                .ok()
        });

        if let Some(value) = applied {
            self.slot.enqueue_write(&self.cache.remote, value);
        }
    }

    /// Receiver notified on every change of the shared value
    pub fn subscribe(&self) -> watch::Receiver<Value> {
        self.slot.subscribe()
    }

    /// Where the reconcile fetch stands
    pub fn reconcile_state(&self) -> ReconcileState {
        *self.state.borrow()
    }

    /// Whether the reconcile fetch has not finished yet
    pub fn is_loading(&self) -> bool {
        self.reconcile_state() != ReconcileState::Reconciled
    }

    /// Wait for the reconcile fetch to finish
    pub async fn reconciled(&self) {
        let mut state = self.state.clone();
        let _ = state.wait_for(|s| *s == ReconcileState::Reconciled).await;
    }

    /// Phase of the key's remote write pipeline
    pub fn write_phase(&self) -> WritePhase {
        self.slot.write_phase()
    }

    /// Wait until every write issued for the key has been attempted
    pub async fn flushed(&self) {
        self.slot.idle().await;
    }

    fn decode(&self, value: &Value) -> T {
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            debug!(key = %self.key(), error = %e, "Shared value does not fit binding type");
            self.default.clone()
        })
    }
}

impl<T> Drop for KvBinding<T> {
    fn drop(&mut self) {
        self.reconcile.abort();
    }
}

/// Fetch the remote value once and adopt it when present
async fn reconcile(
    cache: Arc<CacheInner>,
    slot: Arc<KeySlot>,
    state: watch::Sender<ReconcileState>,
) {
    state.send_replace(ReconcileState::Reconciling);

    match cache.remote.fetch(slot.key()).await {
        Ok(Some(value)) if !value.is_null() => {
            debug!(key = %slot.key(), "Adopting remote value");
            slot.overwrite(cache.local.as_ref(), value);
        }
        Ok(_) => debug!(key = %slot.key(), "No remote value, keeping seed"),
        Err(e) => warn!(
            key = %slot.key(),
            error = %e,
            "Failed to fetch KV value, using local fallback"
        ),
    }

    state.send_replace(ReconcileState::Reconciled);
}

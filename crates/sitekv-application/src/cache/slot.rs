//! Per-key slot
//!
//! One [`KeySlot`] owns everything the cache knows about a key: the shared
//! current value and the remote write pipeline. Every binding of the key goes
//! through the same slot.
//!
//! # Write pipeline
//!
//! ```text
//! Idle --enqueue--> Writing --store done, pending--> Writing
//!                      |  ^                              |
//!                      |  +------ WritingWithPending <---+ (enqueue while in flight)
//!                      +--store done, nothing pending--> Idle
//! ```
//!
//! At most one remote write is in flight and at most one value waits behind
//! it. A newer value replaces the waiting one, so intermediate values may
//! never reach the remote store while the last one always does.

use std::sync::Arc;

use serde_json::Value;
use sitekv_domain::constants::local_key;
use sitekv_domain::ports::{LocalStore, RemoteKv};
use tokio::sync::watch;
use tracing::{debug, trace, warn};

/// Observable phase of a key's remote write pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePhase {
    /// No write scheduled or running
    Idle,
    /// A write is scheduled or in flight, nothing waits behind it
    Writing,
    /// A write is in flight and a newer value waits for it to finish
    WritingWithPending,
}

#[derive(Debug, Default)]
pub(crate) struct WritePipeline {
    /// A drain task exists for this key
    active: bool,
    /// The drain task is awaiting the remote store
    in_flight: bool,
    /// Single pending slot
    pending: Option<Value>,
}

impl WritePipeline {
    fn phase(&self) -> WritePhase {
        if !self.active {
            WritePhase::Idle
        } else if self.in_flight && self.pending.is_some() {
            WritePhase::WritingWithPending
        } else {
            WritePhase::Writing
        }
    }
}

/// Shared state for one key
#[derive(Debug)]
pub(crate) struct KeySlot {
    key: String,
    value: watch::Sender<Value>,
    writes: watch::Sender<WritePipeline>,
}

impl KeySlot {
    /// Create the slot, seeding from the local store or the caller default
    ///
    /// An unreadable or unparseable local copy falls back to the default.
    pub(crate) fn seed(key: String, local: &dyn LocalStore, default: Value) -> Self {
        let seeded = match local.get(&local_key(&key)) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "Ignoring unparseable local value");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!(key = %key, error = %e, "Local store read failed, using default");
                default
            }
        };

        Self {
            key,
            value: watch::Sender::new(seeded),
            writes: watch::Sender::new(WritePipeline::default()),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn current(&self) -> Value {
        self.value.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Value> {
        self.value.subscribe()
    }

    /// Resolve and apply a new value atomically against the current one
    ///
    /// `resolve` runs while the value is locked and must not call back into
    /// this slot. Returns the applied value, or `None` when `resolve` declined.
    pub(crate) fn apply<F>(&self, local: &dyn LocalStore, resolve: F) -> Option<Value>
    where
        F: FnOnce(&Value) -> Option<Value>,
    {
        let mut applied = None;
        self.value.send_if_modified(|current| match resolve(current) {
            Some(next) => {
                write_local(local, &self.key, &next);
                *current = next.clone();
                applied = Some(next);
                true
            }
            None => false,
        });
        applied
    }

    /// Replace the value with one fetched from the remote store
    pub(crate) fn overwrite(&self, local: &dyn LocalStore, value: Value) {
        self.apply(local, |_| Some(value));
    }

    /// Put `value` in the pending slot, starting the drain task if idle
    pub(crate) fn enqueue_write(self: &Arc<Self>, remote: &Arc<dyn RemoteKv>, value: Value) {
        let mut start = false;
        self.writes.send_modify(|pipeline| {
            if pipeline.pending.replace(value).is_some() {
                trace!(key = %self.key, "Coalesced pending remote write");
            }
            if !pipeline.active {
                pipeline.active = true;
                start = true;
            }
        });

        if start {
            tokio::spawn(Arc::clone(self).drain(Arc::clone(remote)));
        }
    }

    /// Flush pending values one at a time until the slot is empty
    async fn drain(self: Arc<Self>, remote: Arc<dyn RemoteKv>) {
        loop {
            let mut next = None;
            self.writes.send_modify(|pipeline| {
                next = pipeline.pending.take();
                pipeline.in_flight = next.is_some();
                pipeline.active = next.is_some();
            });
            let Some(value) = next else {
                return;
            };

            match remote.store(&self.key, &value).await {
                Ok(()) => debug!(key = %self.key, "Remote write completed"),
                Err(e) => warn!(
                    key = %self.key,
                    error = %e,
                    "Failed to persist KV value, local copy stays authoritative"
                ),
            }
        }
    }

    pub(crate) fn write_phase(&self) -> WritePhase {
        self.writes.borrow().phase()
    }

    /// Wait until no remote write is scheduled or in flight
    pub(crate) async fn idle(&self) {
        let mut rx = self.writes.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting.
        let _ = rx.wait_for(|pipeline| !pipeline.active).await;
    }
}

/// Write the JSON form of `value` to the local store, logging failures
fn write_local(local: &dyn LocalStore, key: &str, value: &Value) {
    if let Err(e) = local.set(&local_key(key), &value.to_string()) {
        warn!(key = %key, error = %e, "Local store write failed");
    }
}

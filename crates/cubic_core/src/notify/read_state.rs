//! Persisted read-notification identifiers.
//!
//! # Responsibility
//! - Hold the authoritative set of notification ids the user dismissed.
//! - Persist it best-effort through the key-value capability.
//!
//! # Invariants
//! - Identifiers are the deterministic ids from
//!   [`NotificationKind::record_id`](crate::model::notification::NotificationKind::record_id),
//!   so the set survives feed recomputation.
//! - Missing or corrupt persisted data resets to the empty set.

use crate::storage::KeyValueStore;
use log::debug;
use std::collections::BTreeSet;

pub const READ_STATE_KEY: &str = "notificaciones_leidas";

/// Read-id set backed by a [`KeyValueStore`].
pub struct ReadState<S: KeyValueStore> {
    store: S,
    ids: BTreeSet<String>,
}

impl<S: KeyValueStore> ReadState<S> {
    /// Loads the persisted set. Missing or corrupt data resets to empty.
    pub fn load(store: S) -> Self {
        let ids = match store.get(READ_STATE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    debug!(
                        "event=read_state_load module=notify status=reset reason=corrupt error={err}"
                    );
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                debug!(
                    "event=read_state_load module=notify status=degraded reason=storage error={err}"
                );
                BTreeSet::new()
            }
        };
        Self { store, ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replaces the whole set and persists it immediately, best-effort.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = String>) {
        self.ids = ids.into_iter().collect();
        let payload = match serde_json::to_string(&self.ids) {
            Ok(payload) => payload,
            Err(err) => {
                debug!("event=read_state_persist module=notify status=degraded error={err}");
                return;
            }
        };
        if let Err(err) = self.store.set(READ_STATE_KEY, &payload) {
            debug!("event=read_state_persist module=notify status=degraded error={err}");
        }
    }
}

//! Bounded recent-search history.
//!
//! # Responsibility
//! - Keep the five most recent activated search results, newest first.
//! - Persist the list best-effort through the key-value capability.
//!
//! # Invariants
//! - At most [`RECENT_LIMIT`] entries; no two entries share a path.
//! - Storage failures degrade to in-memory state, they never propagate.

use crate::search::ranker::ResultKind;
use crate::storage::KeyValueStore;
use log::debug;
use serde::{Deserialize, Serialize};

pub const RECENT_SEARCHES_KEY: &str = "cubic_recent_searches";
pub const RECENT_LIMIT: usize = 5;

/// One remembered search activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSearchEntry {
    pub path: String,
    pub label: String,
    /// Serialized as `type` to match the persisted schema.
    #[serde(rename = "type")]
    pub kind: ResultKind,
}

/// Recent-search list backed by a [`KeyValueStore`].
pub struct RecentSearches<S: KeyValueStore> {
    store: S,
    entries: Vec<RecentSearchEntry>,
}

impl<S: KeyValueStore> RecentSearches<S> {
    /// Loads the persisted list. Missing or corrupt data resets to empty.
    pub fn load(store: S) -> Self {
        let entries = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<RecentSearchEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(RECENT_LIMIT);
                    entries
                }
                Err(err) => {
                    debug!(
                        "event=recent_load module=search status=reset reason=corrupt error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                debug!(
                    "event=recent_load module=search status=degraded reason=storage error={err}"
                );
                Vec::new()
            }
        };
        Self { store, entries }
    }

    pub fn entries(&self) -> &[RecentSearchEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records an activation: the entry moves to the front, any older entry
    /// with the same path is dropped, the list is re-bounded and persisted.
    pub fn record(&mut self, entry: RecentSearchEntry) {
        self.entries.retain(|existing| existing.path != entry.path);
        self.entries.insert(0, entry);
        self.entries.truncate(RECENT_LIMIT);
        self.persist();
    }

    /// Removes one remembered entry by path.
    pub fn remove(&mut self, path: &str) {
        let before = self.entries.len();
        self.entries.retain(|existing| existing.path != path);
        if self.entries.len() != before {
            self.persist();
        }
    }

    /// Clears the whole history and drops the persisted value.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.store.remove(RECENT_SEARCHES_KEY) {
            debug!("event=recent_clear module=search status=degraded error={err}");
        }
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.entries) {
            Ok(payload) => payload,
            Err(err) => {
                debug!("event=recent_persist module=search status=degraded error={err}");
                return;
            }
        };
        if let Err(err) = self.store.set(RECENT_SEARCHES_KEY, &payload) {
            debug!("event=recent_persist module=search status=degraded error={err}");
        }
    }
}

//! Entry-scoped draft persistence over a keyed storage backend.

use crate::storage::StorageBackend;

use super::merge::merge;
use super::{DraftAnswers, DraftUpdate};

/// Storage key for an entry's draft. Deterministic function of the entry
/// id only, so entries never interfere with each other.
pub fn entry_key(entry_id: &str) -> String {
    format!("journal:entry:{entry_id}")
}

/// Persistent store for in-progress journal answers.
///
/// Durability is best-effort: reads treat corruption as absence and writes
/// absorb backend failures, leaving the prior snapshot as the durable
/// state. Nothing here surfaces an error to the editing flow.
pub struct DraftStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> DraftStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The persisted snapshot for `entry_id`, or the empty snapshot when
    /// nothing is stored or the stored value is unparseable.
    pub fn load(&self, entry_id: &str) -> DraftAnswers {
        match self.backend.get(&entry_key(entry_id)) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => DraftAnswers::default(),
        }
    }

    /// Merge-write `update` against the current snapshot and persist the
    /// result. A backend failure is absorbed; the previous snapshot stays
    /// durable (at most one generation lost, never corrupted).
    pub fn save(&mut self, entry_id: &str, update: &DraftUpdate) {
        let merged = merge(&self.load(entry_id), update);
        if let Ok(raw) = serde_json::to_string(&merged) {
            let _ = self.backend.set(&entry_key(entry_id), &raw);
        }
    }

    /// Remove the persisted snapshot entirely. Failures are absorbed.
    pub fn clear(&mut self, entry_id: &str) {
        let _ = self.backend.remove(&entry_key(entry_id));
    }

    /// Consume the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

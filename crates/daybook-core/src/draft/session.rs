//! The editing session for one journal entry.
//!
//! An `EntrySession` wires the draft store to the dirty guard and is the
//! single writer for its entry: save is a read-modify-write against the
//! stored snapshot, so concurrent saves for the same entry could drop each
//! other's overlapping keys. Routing every write through `&mut self`
//! serializes them.

use crate::error::RemoteError;
use crate::remote::{EntrySubmission, EntrySubmitter};
use crate::storage::StorageBackend;

use super::guard::{DirtyGuard, UnloadInterceptor};
use super::store::DraftStore;
use super::{DraftAnswers, DraftUpdate};

/// One user's in-progress editing of one entry.
pub struct EntrySession<B: StorageBackend> {
    entry_id: String,
    store: DraftStore<B>,
    guard: DirtyGuard,
}

impl<B: StorageBackend> EntrySession<B> {
    /// Start a clean session for `entry_id`. Any draft already persisted
    /// for the entry stays visible through [`answers`](Self::answers).
    pub fn begin(store: DraftStore<B>, entry_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            store,
            guard: DirtyGuard::new(),
        }
    }

    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// The current merged snapshot for this entry.
    pub fn answers(&self) -> DraftAnswers {
        self.store.load(&self.entry_id)
    }

    /// Accept a write: merge-persist the update, then mark dirty.
    pub fn apply(&mut self, update: &DraftUpdate) {
        self.store.save(&self.entry_id, update);
        self.guard.mark_dirty();
    }

    /// Throw the draft away and return to clean.
    pub fn discard(&mut self) {
        self.store.clear(&self.entry_id);
        self.guard.mark_clean();
    }

    /// Send the final entry to the portal. Only a successful submit
    /// destroys the draft; on failure the draft and the dirty flag are
    /// left untouched so the user can retry.
    pub async fn submit<P: EntrySubmitter>(&mut self, submitter: &P) -> Result<(), RemoteError> {
        let submission = EntrySubmission::new(self.entry_id.clone(), self.answers());
        submitter.submit(&submission).await?;
        self.store.clear(&self.entry_id);
        self.guard.mark_clean();
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.guard.is_dirty()
    }

    /// Interceptor for the host's unload hook; inert once the session ends.
    pub fn unload_interceptor(&self) -> UnloadInterceptor {
        self.guard.interceptor()
    }

    /// End the session, returning the store. Outstanding interceptors go
    /// inert; the persisted draft survives.
    pub fn end(self) -> DraftStore<B> {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn session(entry_id: &str) -> EntrySession<MemoryBackend> {
        EntrySession::begin(DraftStore::new(MemoryBackend::new()), entry_id)
    }

    #[test]
    fn test_write_then_discard_roundtrip() {
        let mut s = session("e");
        assert!(!s.is_dirty());

        s.apply(&DraftUpdate::scale(1, 4));
        assert!(s.is_dirty());
        assert!(s.unload_interceptor().should_confirm());

        s.discard();
        assert!(!s.is_dirty());
        assert!(!s.unload_interceptor().should_confirm());
        assert!(s.answers().is_empty());
    }

    #[test]
    fn test_session_end_keeps_draft_but_disarms_guard() {
        let mut s = session("e");
        s.apply(&DraftUpdate::scale(1, 4));
        let interceptor = s.unload_interceptor();

        let store = s.end();
        assert!(!interceptor.should_confirm());
        assert_eq!(store.load("e").scales.get(&1), Some(&4));
    }

    #[test]
    fn test_new_session_over_existing_draft_starts_clean() {
        let mut s = session("e");
        s.apply(&DraftUpdate::scale(1, 4));
        let store = s.end();

        let resumed = EntrySession::begin(store, "e");
        assert!(!resumed.is_dirty());
        assert_eq!(resumed.answers().scales.get(&1), Some(&4));
    }

    struct FakeSubmitter {
        fail: bool,
        called: AtomicBool,
    }

    impl FakeSubmitter {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                called: AtomicBool::new(false),
            }
        }
    }

    impl EntrySubmitter for FakeSubmitter {
        async fn submit(&self, submission: &EntrySubmission) -> Result<(), RemoteError> {
            self.called.store(true, Ordering::SeqCst);
            assert_eq!(submission.entry_id, "e");
            if self.fail {
                Err(RemoteError::Status {
                    operation: "entries/e".into(),
                    status: 503,
                })
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_successful_submit_clears_draft_and_flag() {
        let mut s = session("e");
        s.apply(&DraftUpdate::select(0, vec!["a".into()]));

        let submitter = FakeSubmitter::new(false);
        s.submit(&submitter).await.unwrap();

        assert!(submitter.called.load(Ordering::SeqCst));
        assert!(!s.is_dirty());
        assert!(s.answers().is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft_and_dirty_flag() {
        let mut s = session("e");
        s.apply(&DraftUpdate::scale(2, 2));

        let submitter = FakeSubmitter::new(true);
        assert!(s.submit(&submitter).await.is_err());

        assert!(s.is_dirty());
        assert_eq!(s.answers().scales.get(&2), Some(&2));
    }
}

//! Streak reconciliation for the journal hub.
//!
//! Streaks are computed server-side from entry history; this module only
//! reconciles them into read-only display state. One read per track, all
//! in flight at once, and the aggregate view flips from loading to ready
//! only when every read has settled -- partial results are never shown.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::remote::StreakSource;

/// Server-computed streak counter for one track.
///
/// `current_streak` is the only field the reconciler guarantees; a track
/// whose read failed shows the default of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub current_streak: u32,
}

/// What the hub sees: nothing yet, a batch in flight, or the complete
/// result set of the last finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StreakView {
    #[default]
    Idle,
    Loading,
    Ready(BTreeMap<String, StreakRecord>),
}

impl StreakView {
    pub fn is_loading(&self) -> bool {
        matches!(self, StreakView::Loading)
    }
}

/// Fetches per-track streaks concurrently and publishes them atomically.
pub struct StreakReconciler<S: StreakSource> {
    source: Arc<S>,
    state: Arc<Mutex<StreakView>>,
}

impl<S: StreakSource> Clone for StreakReconciler<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: StreakSource + 'static> StreakReconciler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(StreakView::Idle)),
        }
    }

    /// Current view. Cheap clone; safe to poll from the UI thread.
    pub fn view(&self) -> StreakView {
        self.state.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.view().is_loading()
    }

    /// Run one load cycle: issue every read concurrently, wait for all of
    /// them to settle, then publish the complete result set at once.
    ///
    /// A failed read yields `current_streak = 0` for that track without
    /// disturbing its siblings. No retries here -- the consumer triggers a
    /// fresh cycle on its next mount.
    pub async fn refresh(&self, tracks: &[String]) -> BTreeMap<String, StreakRecord> {
        *self.state.lock().unwrap() = StreakView::Loading;

        let mut reads = JoinSet::new();
        for track in tracks {
            let source = Arc::clone(&self.source);
            let track = track.clone();
            reads.spawn(async move {
                let record = source.fetch(&track).await.unwrap_or_default();
                (track, record)
            });
        }

        let mut records = BTreeMap::new();
        while let Some(joined) = reads.join_next().await {
            if let Ok((track, record)) = joined {
                records.insert(track, record);
            }
        }
        // A task that failed to join still gets its track a zero record.
        for track in tracks {
            records.entry(track.clone()).or_default();
        }

        *self.state.lock().unwrap() = StreakView::Ready(records.clone());
        records
    }
}

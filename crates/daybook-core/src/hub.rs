//! Mount-time coordinator for the journal hub view.
//!
//! The hub view shows one streak counter per configured track. On mount it
//! kicks off a single reconciliation cycle; while that cycle is in flight
//! the view reads as loading, and once it settles the complete result set
//! is available. Re-mounting is the only retry.

use std::collections::BTreeMap;

use crate::remote::StreakSource;
use crate::storage::Config;
use crate::streaks::{StreakReconciler, StreakRecord, StreakView};

/// Read-only streak display state for the hub.
pub struct JournalHub<S: StreakSource + 'static> {
    reconciler: StreakReconciler<S>,
    tracks: Vec<String>,
}

impl<S: StreakSource + 'static> JournalHub<S> {
    pub fn new(source: S, tracks: Vec<String>) -> Self {
        Self {
            reconciler: StreakReconciler::new(source),
            tracks,
        }
    }

    /// Hub for the tracks named in the user's configuration.
    pub fn from_config(source: S, config: &Config) -> Self {
        Self::new(source, config.streaks.tracks.clone())
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    /// One reconciliation cycle over the configured tracks.
    pub async fn mount(&self) -> BTreeMap<String, StreakRecord> {
        self.reconciler.refresh(&self.tracks).await
    }

    /// Current view: idle, loading, or the last complete result set.
    pub fn streaks(&self) -> StreakView {
        self.reconciler.view()
    }

    pub fn is_loading(&self) -> bool {
        self.reconciler.is_loading()
    }
}

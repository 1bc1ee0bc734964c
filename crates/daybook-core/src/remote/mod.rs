//! Trait seams for the hosted portal backend.
//!
//! The engine only ever talks to the backend through these traits so tests
//! can substitute canned or failing collaborators. [`http::PortalClient`]
//! is the production implementation.

pub mod http;

pub use http::PortalClient;

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::draft::DraftAnswers;
use crate::error::RemoteError;
use crate::streaks::StreakRecord;

/// Asynchronous read of one track's server-computed streak counter.
pub trait StreakSource: Send + Sync {
    fn fetch(
        &self,
        track: &str,
    ) -> impl Future<Output = Result<StreakRecord, RemoteError>> + Send;
}

/// Final submission of a completed entry to the portal.
pub trait EntrySubmitter: Send + Sync {
    fn submit(
        &self,
        submission: &EntrySubmission,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send;
}

/// Payload for the final submit.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySubmission {
    pub entry_id: String,
    #[serde(flatten)]
    pub answers: DraftAnswers,
    pub submitted_at: DateTime<Utc>,
}

impl EntrySubmission {
    pub fn new(entry_id: impl Into<String>, answers: DraftAnswers) -> Self {
        Self {
            entry_id: entry_id.into(),
            answers,
            submitted_at: Utc::now(),
        }
    }
}

//! HTTP client for the hosted portal backend.

use reqwest::Client;

use crate::error::RemoteError;
use crate::streaks::StreakRecord;

use super::{EntrySubmission, EntrySubmitter, StreakSource};

/// Reqwest-backed portal client.
///
/// Streak reads: `GET {base}/streaks/{track}` returning
/// `{"current_streak": n}`. Final submit: `POST {base}/entries/{id}` with
/// the answers payload.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    client: Client,
}

impl PortalClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
        }
    }
}

impl StreakSource for PortalClient {
    async fn fetch(&self, track: &str) -> Result<StreakRecord, RemoteError> {
        let operation = format!("streaks/{track}");
        let response = self
            .client
            .get(format!("{}/streaks/{track}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        response
            .json::<StreakRecord>()
            .await
            .map_err(|e| RemoteError::Decode {
                operation,
                message: e.to_string(),
            })
    }
}

impl EntrySubmitter for PortalClient {
    async fn submit(&self, submission: &EntrySubmission) -> Result<(), RemoteError> {
        let operation = format!("entries/{}", submission.entry_id);
        let response = self
            .client
            .post(format!("{}/entries/{}", self.base_url, submission.entry_id))
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

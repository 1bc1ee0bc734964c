//! Journal draft persistence.
//!
//! A draft is the locally persisted, not-yet-submitted set of answers for
//! one journal entry. Answers arrive one question at a time as the user
//! progresses, so everything in this module is built around merge-writes:
//! a new value for question 3 must never erase the stored answer for
//! question 1.

pub mod guard;
pub mod merge;
pub mod session;
pub mod store;

pub use guard::{DirtyGuard, UnloadInterceptor};
pub use session::EntrySession;
pub use store::DraftStore;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The persisted answers for one journal entry.
///
/// Both maps are keyed by question index. An absent key means the question
/// is unanswered; the engine never distinguishes empty from missing.
///
/// Serialized as `{"selected": {"0": ["a"]}, "scales": {"1": 4}}` -- map
/// keys become decimal strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftAnswers {
    /// Multi-select answers: ordered option ids per question.
    #[serde(default)]
    pub selected: BTreeMap<u32, Vec<String>>,
    /// Likert-scale answers.
    #[serde(default)]
    pub scales: BTreeMap<u32, u32>,
}

impl DraftAnswers {
    /// Whether no question has an answer yet.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.scales.is_empty()
    }
}

/// A partial update to a draft: only the questions the user just touched.
///
/// Applied per key -- see [`merge::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub selected: BTreeMap<u32, Vec<String>>,
    pub scales: BTreeMap<u32, u32>,
}

impl DraftUpdate {
    /// Update carrying a single multi-select answer.
    pub fn select(question: u32, options: Vec<String>) -> Self {
        let mut update = Self::default();
        update.selected.insert(question, options);
        update
    }

    /// Update carrying a single scale answer.
    pub fn scale(question: u32, value: u32) -> Self {
        let mut update = Self::default();
        update.scales.insert(question, value);
        update
    }
}

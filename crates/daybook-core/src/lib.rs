//! # Daybook Core Library
//!
//! This library provides the journal draft engine for the Daybook portal.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, with any GUI shell being a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Draft engine**: merge-write persistence of in-progress answers,
//!   keyed per entry, with dirty tracking and unload interception
//! - **Storage**: SQLite-backed keyed store and TOML-based configuration
//! - **Streaks**: concurrent per-track reads of server-computed streak
//!   counters, published only once the whole batch settles
//! - **Remote**: trait seams over the hosted portal backend
//!
//! ## Key Components
//!
//! - [`DraftStore`]: entry-scoped draft persistence
//! - [`EntrySession`]: single-writer editing session with dirty tracking
//! - [`StreakReconciler`]: concurrent streak reads with an aggregate
//!   loading phase
//! - [`JournalHub`]: mount-time coordinator for the hub view

pub mod draft;
pub mod error;
pub mod hub;
pub mod remote;
pub mod storage;
pub mod streaks;

pub use draft::{DirtyGuard, DraftAnswers, DraftStore, DraftUpdate, EntrySession, UnloadInterceptor};
pub use error::{ConfigError, CoreError, RemoteError, StorageError};
pub use hub::JournalHub;
pub use remote::{EntrySubmission, EntrySubmitter, PortalClient, StreakSource};
pub use storage::{Config, MemoryBackend, SqliteBackend, StorageBackend};
pub use streaks::{StreakReconciler, StreakRecord, StreakView};

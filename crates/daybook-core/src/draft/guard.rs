//! Dirty-state tracking and unload interception.
//!
//! The guard answers one question for the host shell: "should navigation
//! away be confirmed right now?". The answer must reflect the dirty flag
//! at the moment of the unload attempt, not a snapshot taken when the
//! interceptor was registered, so the interceptor holds a live reference
//! to the flag rather than a copy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Clean/dirty flag for one editing session.
///
/// Starts clean; any accepted write marks it dirty; discard or a
/// successful submit marks it clean again. Dropping the guard ends the
/// session and disarms every interceptor handed out.
#[derive(Debug)]
pub struct DirtyGuard {
    flag: Arc<AtomicBool>,
}

impl DirtyGuard {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether unsaved changes exist.
    pub fn is_dirty(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Record an accepted write.
    pub fn mark_dirty(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Record a discard or successful submit.
    pub fn mark_clean(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    /// Hand out an interceptor for the host's unload hook.
    ///
    /// The handle stays valid across state changes and goes inert once the
    /// guard is dropped, so teardown cannot leak an armed intercept.
    pub fn interceptor(&self) -> UnloadInterceptor {
        UnloadInterceptor {
            flag: Arc::downgrade(&self.flag),
        }
    }
}

impl Default for DirtyGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Live handle asked at unload time whether to request confirmation.
#[derive(Debug, Clone)]
pub struct UnloadInterceptor {
    flag: Weak<AtomicBool>,
}

impl UnloadInterceptor {
    /// Evaluated synchronously at the unload attempt. True only while the
    /// owning session is alive and dirty.
    pub fn should_confirm(&self) -> bool {
        match self.flag.upgrade() {
            Some(flag) => flag.load(Ordering::SeqCst),
            None => false,
        }
    }
}

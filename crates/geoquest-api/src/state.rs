//! Shared application state.
//!
//! Handlers take the tracker lock with `unwrap()` intentionally. Lock
//! poisoning only occurs when another thread panicked while holding the lock,
//! which is an unrecoverable state for a single in-memory session.

use std::sync::RwLock;

use geoquest_core::tracker::QuestTracker;

/// One quiz session per server process. The lock serializes events so the
/// tracker sees them one at a time, each to completion.
pub struct AppState {
    pub tracker: RwLock<QuestTracker>,
}

impl AppState {
    pub fn new(tracker: QuestTracker) -> Self {
        Self {
            tracker: RwLock::new(tracker),
        }
    }
}

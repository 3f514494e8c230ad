//! Time-windowed query coalescing.

use std::time::{Duration, Instant};

/// Coalesces a burst of query edits into one search per quiet period.
///
/// The owner drives it with explicit timestamps: `schedule` on every
/// edit, `poll` from the host's event loop. Only the most recent query
/// scheduled within a window survives to fire (last-write-wins). The
/// engine owns exactly one of these and cancels it on rebuild, so a
/// pending callback can never outlive the indexes it was scheduled
/// against.
#[derive(Debug)]
pub(crate) struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Replaces any pending query and restarts the quiet period.
    pub(crate) fn schedule(&mut self, query: String, now: Instant) {
        self.pending = Some(Pending {
            query,
            deadline: now + self.window,
        });
    }

    /// Takes the pending query if its quiet period has elapsed.
    /// Fires at most once per scheduled edit.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

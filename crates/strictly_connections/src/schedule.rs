//! Deferred actions with restart invalidation.
//!
//! Feedback-then-transition sequencing is modeled as a queue of
//! deadline-tagged actions rather than ad hoc timers. Every entry carries the
//! session epoch that scheduled it; bumping the epoch on restart makes stale
//! callbacks inert without needing cancellation handles.

use std::time::Duration;
use tracing::{debug, instrument};

/// Monotonic counter distinguishing puzzle sessions within one engine.
pub type SessionEpoch = u64;

#[derive(Debug, Clone)]
struct Entry<A> {
    due: Duration,
    epoch: SessionEpoch,
    action: A,
}

/// Deadline-ordered queue of deferred actions.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    pending: Vec<Entry<A>>,
    epoch: SessionEpoch,
}

impl<A> Scheduler<A> {
    /// Creates an empty scheduler at epoch zero.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            epoch: 0,
        }
    }

    /// Current session epoch.
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    /// Schedules `action` to fire once the clock reaches `due`, tagged with
    /// the current epoch.
    pub fn schedule(&mut self, due: Duration, action: A) {
        self.pending.push(Entry {
            due,
            epoch: self.epoch,
            action,
        });
    }

    /// Starts a new epoch. Entries from earlier epochs are dropped the next
    /// time they are polled, never fired.
    #[instrument(skip(self))]
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        debug!(epoch = self.epoch, stale = self.pending.len(), "scheduler epoch bumped");
    }

    /// Whether any current-epoch entry is still waiting.
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|e| e.epoch == self.epoch)
    }

    /// Removes and returns every current-epoch action due at `now`, in
    /// deadline order. Stale-epoch entries encountered along the way are
    /// discarded silently.
    pub fn poll_due(&mut self, now: Duration) -> Vec<A> {
        let epoch = self.epoch;
        let mut due: Vec<Entry<A>> = Vec::new();

        let mut index = 0;
        while index < self.pending.len() {
            let entry = &self.pending[index];
            if entry.epoch != epoch {
                self.pending.swap_remove(index);
            } else if entry.due <= now {
                due.push(self.pending.swap_remove(index));
            } else {
                index += 1;
            }
        }

        due.sort_by_key(|e| e.due);
        due.into_iter().map(|e| e.action).collect()
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_actions_fire_at_their_deadline_not_before() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), "clear");

        assert!(scheduler.poll_due(ms(499)).is_empty());
        assert_eq!(scheduler.poll_due(ms(500)), vec!["clear"]);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_due_actions_come_back_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(600), "reveal");
        scheduler.schedule(ms(500), "clear");

        assert_eq!(scheduler.poll_due(ms(1000)), vec!["clear", "reveal"]);
    }

    #[test]
    fn test_stale_entries_never_fire_after_invalidate() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), "stale");
        scheduler.invalidate();

        assert!(!scheduler.has_pending());
        assert!(scheduler.poll_due(ms(1000)).is_empty());
    }

    #[test]
    fn test_entries_after_invalidate_fire_normally() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), "stale");
        scheduler.invalidate();
        scheduler.schedule(ms(700), "fresh");

        assert!(scheduler.has_pending());
        assert_eq!(scheduler.poll_due(ms(700)), vec!["fresh"]);
    }

    #[test]
    fn test_undue_entries_stay_pending() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), "clear");
        scheduler.schedule(ms(900), "reveal");

        assert_eq!(scheduler.poll_due(ms(600)), vec!["clear"]);
        assert!(scheduler.has_pending());
        assert_eq!(scheduler.poll_due(ms(900)), vec!["reveal"]);
    }
}

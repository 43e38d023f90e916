//! Reschedulable timer for search input
//!
//! Each keystroke pushes the deadline back; the filter is applied once the
//! user has stopped typing for `delay`. The event loop drives it by calling
//! [`Debouncer::fire_if_due`] on every tick.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and re-filtering
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer, replacing any pending deadline
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` exactly once per armed deadline, when it has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.schedule(start);

        assert!(!debouncer.fire_if_due(start + Duration::from_millis(100)));
        assert!(debouncer.fire_if_due(start + Duration::from_millis(300)));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_reschedule_pushes_deadline_back() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(200));

        assert!(!debouncer.fire_if_due(start + Duration::from_millis(400)));
        assert!(debouncer.fire_if_due(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.schedule(start);
        debouncer.cancel();
        assert!(!debouncer.fire_if_due(start + Duration::from_secs(1)));
    }
}

//! Single-slot re-armable deadline.
//!
//! Both deferred effects in this app follow the same discipline: arming
//! replaces any pending deadline (last call wins, at most one pending at a
//! time), and the effect fires once when a tick observes the deadline has
//! passed. The HUD auto-hide uses a 2s period, settings persistence 150ms.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debounce {
    period: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// (Re)arm the timer; any pending deadline is superseded
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first call at or past the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

//! Carousel auto-advance timer.
//!
//! The timer is a repeating deadline rather than a background task: the
//! host calls [`AutoAdvance::poll`] with the current time and advances the
//! carousel when it fires. Pointer hover and keyboard focus each pause it;
//! it runs only while neither is present.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    interval: Duration,
    deadline: Option<Instant>,
    hovered: bool,
    focused: bool,
}

impl AutoAdvance {
    /// Create a stopped timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            hovered: false,
            focused: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the timer fires next, if running.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// (Re)start counting a full interval from `now`, unless paused.
    pub fn start(&mut self, now: Instant) {
        if self.hovered || self.focused {
            return;
        }
        self.deadline = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.stop();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        self.start(now);
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
        self.stop();
    }

    pub fn focus_out(&mut self, now: Instant) {
        self.focused = false;
        self.start(now);
    }

    /// Returns true when the deadline has passed, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

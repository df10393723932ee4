#![forbid(unsafe_code)]

//! Cancellable single-slot timers.
//!
//! A [`Timer`] holds at most one pending deadline. Scheduling again replaces
//! the previous deadline, so repeated triggers never stack up duplicate
//! effects. Owners poll [`Timer::fire`] with the current time on every tick;
//! the runtime sleeps until the earliest [`Timer::deadline`] among them.

use std::time::Duration;

/// One pending deadline, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    /// An idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm for `now + delay`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarm.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Time left until the deadline, zero if already due.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_sub(now))
    }

    /// Consume the deadline if it has passed. Returns `true` at most once per schedule.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of a set of optional deadlines.
pub fn earliest<I>(deadlines: I) -> Option<Duration>
where
    I: IntoIterator<Item = Option<Duration>>,
{
    deadlines.into_iter().flatten().min()
}

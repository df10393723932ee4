#![forbid(unsafe_code)]

//! Rate limiter for blocked grid activations.
//!
//! One accidental click on a disabled box says nothing. Repeated attempts
//! inside a rolling window earn a notice. Each attempt re-arms the window;
//! when it lapses with no further attempt the count returns to zero.

use std::time::Duration;

use wordgrid_core::Timer;

/// Attempts needed to trigger a notice.
pub const DEFAULT_THRESHOLD: u32 = 2;
/// Rolling window length.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(2000);

/// Counts blocked attempts within a rolling window.
#[derive(Debug, Clone)]
pub struct BlockedNudge {
    count: u32,
    threshold: u32,
    window: Duration,
    reset_timer: Timer,
    fired: u64,
}

impl Default for BlockedNudge {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_WINDOW)
    }
}

impl BlockedNudge {
    /// A limiter that fires on the `threshold`-th attempt inside `window`.
    pub fn new(threshold: u32, window: Duration) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
            window,
            reset_timer: Timer::new(),
            fired: 0,
        }
    }

    /// Record a blocked attempt at `now`. Returns `true` when a notice is due.
    pub fn record(&mut self, now: Duration) -> bool {
        self.tick(now);
        self.count += 1;
        self.reset_timer.schedule(now, self.window);
        if self.count >= self.threshold {
            self.count = 0;
            self.fired += 1;
            tracing::debug!(fired = self.fired, "blocked-action nudge");
            return true;
        }
        false
    }

    /// Drop the count once the window has lapsed.
    pub fn tick(&mut self, now: Duration) {
        if self.reset_timer.fire(now) {
            self.count = 0;
        }
    }

    /// Attempts counted in the current window.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Notices triggered so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.reset_timer.deadline()
    }
}

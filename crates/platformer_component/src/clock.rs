//! Elapsed-time stamps.
//!
//! A [`Clock`] does not read the system time itself. The world samples its
//! time source once per tick and every clock measures against that sample,
//! so all timers observed within one tick agree.

use std::time::Duration;

/// A restartable stopwatch measured against an externally supplied `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    started: Duration,
}

impl Clock {
    /// A clock that started at `now`.
    #[must_use]
    pub const fn started_at(now: Duration) -> Self {
        Self { started: now }
    }

    /// Time elapsed between the last restart and `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started)
    }

    /// Restart the clock at `now`, returning the time that had elapsed.
    pub fn restart(&mut self, now: Duration) -> Duration {
        let elapsed = self.elapsed(now);
        self.started = now;
        elapsed
    }
}

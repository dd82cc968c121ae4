//! Time sources.
//!
//! The world reads its [`TimeSource`] once per tick; every [`Clock`] in the
//! world measures against that single sample.
//!
//! [`Clock`]: platformer_component::Clock

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Something that can say how much time has passed since an origin.
pub trait TimeSource {
    /// Time since this source's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from when the source was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven time. Clones share the same reading, so a test can keep one
/// handle and give another to the world.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<Duration>>,
}

impl ManualTime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

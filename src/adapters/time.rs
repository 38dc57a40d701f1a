//! Monotonic clock adapter.
//!
//! Implements [`Clock`] on top of `std::time::Instant`, which is immune to
//! wall-clock adjustments.  Time is reported relative to adapter creation.

use core::time::Duration;
use std::time::Instant;

use crate::app::ports::Clock;

/// Host monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

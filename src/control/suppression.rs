//! Short-cycle suppression window.
//!
//! Armed when the heater switches off; while active, the controller must
//! not switch the heater back on no matter how large the deficit is.
//! The window is purely time-bounded and in-memory: a restart begins with
//! no suppression.
//!
//! ```text
//!   heater off ──▶ start(now) ──▶ [ active: now < ends_at ] ──▶ expired
//! ```

use core::time::Duration;

/// A time-bounded heater lockout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressionWindow {
    ends_at: Duration,
}

impl SuppressionWindow {
    /// Begin a window ending `duration` after `now`.
    pub fn start(now: Duration, duration: Duration) -> Self {
        Self {
            ends_at: now.saturating_add(duration),
        }
    }

    /// Re-arm in place.  Last start wins.
    pub fn restart(&mut self, now: Duration, duration: Duration) {
        *self = Self::start(now, duration);
    }

    pub fn is_active(&self, now: Duration) -> bool {
        now < self.ends_at
    }

    pub fn has_expired(&self, now: Duration) -> bool {
        !self.is_active(now)
    }

    pub fn ends_at(&self) -> Duration {
        self.ends_at
    }

    /// Time left before expiry (zero once expired).
    pub fn remaining(&self, now: Duration) -> Duration {
        self.ends_at.saturating_sub(now)
    }
}

/// Active check over the optional slot the controller holds.
pub fn is_suppressed(window: Option<&SuppressionWindow>, now: Duration) -> bool {
    window.is_some_and(|w| w.is_active(now))
}

//! Rest countdown between sets.
//!
//! A rest timer is a start instant and a duration; the remaining time is a
//! pure function of those and the current instant. It lives only in memory
//! and restarts whenever a set is completed.

use jiff::Timestamp;

/// Countdown started when a set is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    started_at: Timestamp,
    duration_seconds: u32,
}

impl RestTimer {
    /// Starts a countdown of `duration_seconds` at `now`.
    pub fn start(duration_seconds: u32, now: Timestamp) -> Self {
        Self {
            started_at: now,
            duration_seconds,
        }
    }

    /// Total length of the countdown in seconds.
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Extends the countdown, e.g. for a "+30s" control.
    pub fn add_seconds(&mut self, extra: u32) {
        self.duration_seconds += extra;
    }

    /// Seconds remaining as of `now`, clamped at zero.
    pub fn remaining_seconds(&self, now: Timestamp) -> u32 {
        let elapsed = now.as_second() - self.started_at.as_second();
        let elapsed = u64::try_from(elapsed).unwrap_or(0);
        u64::from(self.duration_seconds)
            .saturating_sub(elapsed)
            .try_into()
            .unwrap_or(u32::MAX)
    }

    /// Whether the countdown has run out.
    pub fn is_elapsed(&self, now: Timestamp) -> bool {
        self.remaining_seconds(now) == 0
    }

    /// Fraction of the countdown consumed, between 0.0 and 1.0.
    pub fn progress(&self, now: Timestamp) -> f64 {
        if self.duration_seconds == 0 {
            return 1.0;
        }
        let remaining = f64::from(self.remaining_seconds(now));
        1.0 - remaining / f64::from(self.duration_seconds)
    }
}

//! DateTime and duration display utilities.
//!
//! This module provides wrapper types for formatting timestamps and elapsed
//! times in a consistent, human-readable format using system timezone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// This struct encapsulates a `Timestamp` reference and implements `Display` to
/// format it in a consistent, human-readable format using the system timezone.
/// It provides an ergonomic and type-safe approach to timestamp formatting in
/// display contexts.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A wrapper around an elapsed duration in milliseconds that formats as a
/// stopwatch reading via the `Display` trait.
///
/// # Format
///
/// Durations under an hour render as `MM:SS`; longer durations render as
/// `H:MM:SS`. Sub-second remainders are truncated.
pub struct ElapsedTime(pub u64);

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.0 / 1000;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes:02}:{seconds:02}")
        }
    }
}

/// Format a weight in kilograms, dropping the fractional part when it is a
/// whole number.
pub fn format_weight(weight: f64) -> String {
    if (weight - weight.trunc()).abs() < f64::EPSILON {
        format!("{weight:.0}")
    } else {
        format!("{weight:.1}")
    }
}

//! Offset <-> clock time mapping for the playback scrubber
//!
//! The ruler is linear: a fixed number of pixels per hour, with offset 0
//! pinned to the anchor time. Positive offsets (dragging the ruler right)
//! move back in time. There are no bounds; readings wrap around midnight.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Anchor time for offset 0 (14:42)
pub const ANCHOR_MINUTES: f64 = (14 * 60 + 42) as f64;

/// Ruler scale: 100 px = 1 hour
pub const PIXELS_PER_HOUR: f64 = 100.0;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A wall-clock reading, always within 00:00:00..=23:59:59
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hours, minutes, 0).map(Self)
    }

    /// Parse "HH:MM" (a trailing ":SS" is accepted and dropped)
    ///
    /// Returns `None` for relative labels like "Yesterday".
    pub fn parse(input: &str) -> Option<Self> {
        // chrono tolerates unpadded and space-padded fields; labels never have them
        if !is_clock_shape(input) {
            return None;
        }
        NaiveTime::parse_from_str(input, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
            .ok()
            .and_then(|t| t.with_second(0))
            .map(Self)
    }

    /// Build from a possibly out-of-range second count, wrapping into one day
    pub fn from_total_seconds(total: i64) -> Self {
        let secs = total.rem_euclid(SECONDS_PER_DAY) as u32;
        Self(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default())
    }

    pub fn total_minutes(&self) -> f64 {
        self.0.num_seconds_from_midnight() as f64 / 60.0
    }

    /// "HH:MM" form for the scrubber label
    pub fn short(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// Two-digit fields separated by colons: "HH:MM" or "HH:MM:SS"
fn is_clock_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    matches!(bytes.len(), 5 | 8)
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Linear mapping between ruler offset and clock time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeMapper {
    anchor_minutes: f64,
    pixels_per_hour: f64,
}

impl Default for TimeMapper {
    fn default() -> Self {
        Self::new(ANCHOR_MINUTES, PIXELS_PER_HOUR)
    }
}

impl TimeMapper {
    pub fn new(anchor_minutes: f64, pixels_per_hour: f64) -> Self {
        Self {
            anchor_minutes,
            pixels_per_hour,
        }
    }

    pub fn pixels_per_hour(&self) -> f64 {
        self.pixels_per_hour
    }

    /// Unwrapped minute value for an offset (may be negative or exceed a day)
    pub fn minutes_at(&self, offset: f64) -> f64 {
        self.anchor_minutes - (offset / self.pixels_per_hour) * 60.0
    }

    /// Clock reading shown for a ruler offset
    pub fn display_time(&self, offset: f64) -> ClockTime {
        // Nearest second, so offsets produced by offset_for land exactly
        let total_seconds = (self.minutes_at(offset) * 60.0).round() as i64;
        ClockTime::from_total_seconds(total_seconds)
    }

    /// Ruler offset that puts `target` under the scrubber
    pub fn offset_for(&self, target: &ClockTime) -> f64 {
        (self.anchor_minutes - target.total_minutes()) * self.pixels_per_hour / 60.0
    }

    /// Offset for an event timestamp label, if it is a clock time
    pub fn offset_for_label(&self, label: &str) -> Option<f64> {
        ClockTime::parse(label).map(|t| self.offset_for(&t))
    }
}

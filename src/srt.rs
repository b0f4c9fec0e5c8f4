use crate::offset::Offset;

use std::fmt;

pub const RANGE_SEPARATOR: &str = " --> ";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A wall-clock timestamp with millisecond resolution. The SRT format has
/// no day field, so all arithmetic wraps modulo 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {
    pub fn from_parts(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self::from_millis(((hours * 60 + minutes) * 60 + seconds) * 1000 + millis)
    }

    pub fn from_millis(millis: i64) -> Self {
        Timestamp {
            millis: millis.rem_euclid(MILLIS_PER_DAY),
        }
    }

    pub fn millis(self) -> i64 {
        self.millis
    }

    pub fn plus_millis(self, delta: i64) -> Self {
        Self::from_millis(self.millis + delta)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let total_secs = self.millis / 1000;
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;
        let millis = self.millis % 1000;
        write!(
            fmt,
            "{:02}:{:02}:{:02},{:03}",
            hours, minutes, seconds, millis
        )
    }
}

/// The `show --> hide` pair governing when a cue is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub show_at: Timestamp,
    pub hide_at: Timestamp,
}

impl TimeRange {
    /// Shift the range, preserving its original display duration. The new
    /// end is derived from the new start, so an inverted range stays
    /// inverted and endpoints pushed across midnight wrap.
    pub fn shifted(self, offset: Offset) -> TimeRange {
        let duration = self.hide_at.millis() - self.show_at.millis();
        let show_at = self.show_at.plus_millis(offset.as_millis());
        TimeRange {
            show_at,
            hide_at: show_at.plus_millis(duration),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}{}{}", self.show_at, RANGE_SEPARATOR, self.hide_at)
    }
}

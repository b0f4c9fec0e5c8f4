use crate::error::ShiftError;

use regex::Regex;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_MILLI: i64 = 1_000_000;

/// The signed shift applied uniformly to every cue. Held at nanosecond
/// resolution, applied at the millisecond resolution the SRT timestamp
/// format can actually express.
#[derive(Debug, Clone, Copy)]
pub struct Offset {
    nanos: i64,
}

impl Offset {
    /// Parse an offset expression: an optional leading minus, one or more
    /// digits, and a unit. `m` is minutes, `s` is seconds, `ss` is
    /// nanosecond ticks. `ss` is listed first so it is never read as `s`
    /// followed by a stray character.
    pub fn parse(expr: &str) -> Result<Offset, ShiftError> {
        let pattern = Regex::new(r"^(-?\d+)(ss|m|s)$").expect("offset pattern is valid");

        let captures = pattern
            .captures(expr)
            .ok_or_else(|| ShiftError::OffsetParse(expr.to_string()))?;

        let amount: i64 = captures[1]
            .parse()
            .map_err(|_| ShiftError::OffsetParse(expr.to_string()))?;

        let nanos = match &captures[2] {
            "m" => amount.checked_mul(NANOS_PER_MINUTE),
            "s" => amount.checked_mul(NANOS_PER_SECOND),
            _ => Some(amount),
        };

        nanos
            .map(|nanos| Offset { nanos })
            .ok_or_else(|| ShiftError::OffsetParse(expr.to_string()))
    }

    pub fn nanos(&self) -> i64 {
        self.nanos
    }

    /// Truncates toward zero, so a sub-millisecond offset shifts nothing.
    pub fn as_millis(&self) -> i64 {
        self.nanos / NANOS_PER_MILLI
    }
}

//! Time utilities: strict HH:MM parsing, minutes since midnight, spans.
//!
//! Everything is plain wall-clock time on a single day. No timezone or
//! calendar arithmetic happens here.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `H:MM` or `HH:MM`, ASCII digits only.
static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid HH:MM regex"));

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day, stored as minutes since midnight (0..=1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const LAST_MINUTE: TimeOfDay = TimeOfDay(MINUTES_PER_DAY - 1);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self(hours * 60 + minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        parse_time_of_day(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
    }
}

/// Parse `H:MM` / `HH:MM` into a [`TimeOfDay`].
///
/// Returns `None` for anything else: empty input, missing colon,
/// one-digit minutes, surrounding whitespace, hour > 23 or minute > 59.
/// Values are never clamped.
pub fn parse_time_of_day(text: &str) -> Option<TimeOfDay> {
    let caps = HHMM.captures(text)?;
    let hours: u16 = caps[1].parse().ok()?;
    let minutes: u16 = caps[2].parse().ok()?;
    TimeOfDay::from_hm(hours, minutes)
}

/// Canonical `HH:MM` for a raw minute count; `None` when out of range.
pub fn format_time_of_day(minutes: u16) -> Option<String> {
    TimeOfDay::from_minutes(minutes).map(|t| t.to_string())
}

/// A start/end pair on one calendar day.
///
/// The fields are public so callers can carry unvalidated spans around;
/// only spans produced by the booking validator are guaranteed to have
/// `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeSpan {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse both ends of a stored window; no ordering check.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self::new(parse_time_of_day(start)?, parse_time_of_day(end)?))
    }

    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// Length in minutes, 0 for zero-length or inverted spans.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// `self` lies completely inside `outer` (equal bounds allowed).
    pub fn within(&self, outer: &TimeSpan) -> bool {
        self.start >= outer.start && self.end <= outer.end
    }

    /// Half-open overlap: spans that only touch (`a.end == b.start`)
    /// do not overlap.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

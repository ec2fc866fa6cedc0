//! Date and clock-time primitives for the schedule.
//!
//! Dates travel through the system in the schedule file's encoding: a single
//! integer shaped YYYYMMDD. Clock times and durations are decimal hours
//! (9.75 means 09:45) and must sit on quarter-hour boundaries.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar date encoded as YYYYMMDD (e.g. 20240108).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaskDate(u32);

impl TaskDate {
    pub fn new(encoded: u32) -> Self {
        TaskDate(encoded)
    }

    pub fn encoded(self) -> u32 {
        self.0
    }

    pub fn year(self) -> u32 {
        self.0 / 10_000
    }

    pub fn month(self) -> u32 {
        self.0 / 100 % 100
    }

    pub fn day(self) -> u32 {
        self.0 % 100
    }

    /// Structural validity only: year > 0, month 1-12, day 1-31.
    /// There is deliberately no per-month day-count check.
    pub fn is_well_formed(self) -> bool {
        self.year() > 0 && (1..=12).contains(&self.month()) && (1..=31).contains(&self.day())
    }

    /// Convert to a chrono date for arithmetic.
    ///
    /// Day numbers past the real month length roll forward (20230431 becomes
    /// May 1st), matching the lenient calendar the schedule format grew up
    /// with. Returns None for dates that are not well-formed.
    pub fn to_naive(self) -> Option<NaiveDate> {
        if !self.is_well_formed() {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(self.year() as i32, self.month(), 1)?;
        Some(first + Duration::days(self.day() as i64 - 1))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        use chrono::Datelike;
        TaskDate(date.year() as u32 * 10_000 + date.month() * 100 + date.day())
    }

    /// The spelled-out form used on task cards, e.g. "January 8, 2024".
    pub fn pretty(self) -> String {
        format!("{} {}, {}", month_name(self.month()), self.day(), self.year())
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// True when a decimal-hours value sits on a quarter-hour boundary.
pub fn quarter_aligned(hours: f32) -> bool {
    (hours * 60.0).round() as i64 % 15 == 0
}

/// End-of-task clock value: wrapped past midnight only when the raw sum
/// exceeds 24 (23.5 + 2.0 gives 1.5; an exact 24.0 stays 24.0).
pub fn wrap_clock(hours: f32) -> f32 {
    if hours > 24.0 { hours - 24.0 } else { hours }
}

//! Week-relative time model.
//!
//! # Design
//!
//! A schedule covers exactly one simulated week, measured in indivisible
//! `TimeUnit`s of ten minutes:
//!
//! ```text
//! 1 hour = 6 units    1 day = 144 units    1 week = 1008 units
//! ```
//!
//! All times stored in schedules are absolute within the week (0 is Monday
//! 00:00).  Builders reason in `(day, time_of_day)` pairs and convert with
//! the helpers below; integer arithmetic keeps every comparison exact.

use std::fmt;

/// One ten-minute simulation step.
pub type TimeUnit = u32;

pub const UNITS_PER_HOUR: TimeUnit = 6;
pub const DAY_LENGTH:     TimeUnit = 144;
pub const DAYS_PER_WEEK:  u32      = 7;
pub const WEEK_LENGTH:    TimeUnit = DAY_LENGTH * DAYS_PER_WEEK;
/// Days 0..SCHOOL_DAYS (Monday to Friday) are school and work days.
pub const SCHOOL_DAYS:    u32      = 5;

// ── WeekTime ──────────────────────────────────────────────────────────────────

/// An absolute week time with day/clock accessors.  Mostly used for logging
/// and for the `day_start` arithmetic inside builders.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct WeekTime(pub TimeUnit);

impl WeekTime {
    /// The first unit of `day`.
    #[inline]
    pub fn day_start(day: u32) -> WeekTime {
        WeekTime(day * DAY_LENGTH)
    }

    /// Zero-based day of the week (0 = Monday).
    #[inline]
    pub fn day(self) -> u32 {
        self.0 / DAY_LENGTH
    }

    /// Units elapsed since the start of the current day.
    #[inline]
    pub fn time_of_day(self) -> TimeUnit {
        self.0 % DAY_LENGTH
    }

    #[inline]
    pub fn is_school_day(self) -> bool {
        self.day() < SCHOOL_DAYS
    }

    /// `(hour, minute)` of the wall clock for this unit.
    pub fn clock(self) -> (u32, u32) {
        let tod = self.time_of_day();
        (tod / UNITS_PER_HOUR, (tod % UNITS_PER_HOUR) * 10)
    }
}

impl fmt::Display for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DAYS: [&str; 8] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "End"];
        let (h, m) = self.clock();
        let day = DAYS[(self.day() as usize).min(7)];
        write!(f, "{day} {h:02}:{m:02} (t={})", self.0)
    }
}

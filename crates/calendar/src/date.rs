//! No-leap date with year context and a day ordinal.

use crate::datetime::NoLeapDateTime;
use crate::error::CalendarError;

/// Number of days in every no-leap year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Number of days in each month (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed in the year before each month starts (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date in the 365-day no-leap calendar.
///
/// Ordering is chronological: field order `(year, month, day)` makes the
/// derived `Ord` compare dates the way a calendar does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoLeapDate {
    year: i32,
    month: u8,
    day: u8,
}

impl NoLeapDate {
    /// Creates a new `NoLeapDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// 365-day no-leap calendar (February 29 never exists).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of year (1..=365).
    pub fn day_of_year(self) -> u16 {
        DAYS_BEFORE_MONTH[self.month as usize] + self.day as u16
    }

    /// Days elapsed since 0000-01-01 in the no-leap calendar.
    ///
    /// Negative for dates before year 0.
    pub fn days_since_epoch(self) -> i64 {
        self.year as i64 * DAYS_PER_YEAR + (self.day_of_year() as i64 - 1)
    }

    /// Inverse of [`NoLeapDate::days_since_epoch`].
    pub fn from_days_since_epoch(days: i64) -> Self {
        let year = days.div_euclid(DAYS_PER_YEAR) as i32;
        let offset = days.rem_euclid(DAYS_PER_YEAR) as u16;
        let month = (1..=12u8)
            .rev()
            .find(|&m| DAYS_BEFORE_MONTH[m as usize] <= offset)
            .unwrap_or(1);
        let day = (offset - DAYS_BEFORE_MONTH[month as usize] + 1) as u8;
        Self { year, month, day }
    }

    /// Returns the date one calendar month later.
    ///
    /// The day is clamped to the length of the target month, so Jan 31
    /// becomes Feb 28. December wraps to January of the following year.
    pub fn next_month(self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let day = self.day.min(DAYS_PER_MONTH[month as usize]);
        Self { year, month, day }
    }

    /// The instant at 00:00:00 of this date.
    pub fn at_midnight(self) -> NoLeapDateTime {
        NoLeapDateTime::from_date(self)
    }
}

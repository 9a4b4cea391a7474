//! Instants (date plus time of day) in the no-leap calendar.

use crate::date::NoLeapDate;
use crate::error::CalendarError;

const SECONDS_PER_DAY: i64 = 86_400;

/// A no-leap date with a time of day at one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoLeapDateTime {
    date: NoLeapDate,
    hour: u8,
    minute: u8,
    second: u8,
}

impl NoLeapDateTime {
    /// Creates an instant from a date and a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTime`] if any field is out of range.
    pub fn new(date: NoLeapDate, hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of `date`.
    pub fn from_date(date: NoLeapDate) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// First second of January 1 of `year`.
    pub fn start_of_year(year: i32) -> Self {
        Self::from_date(NoLeapDate::from_days_since_epoch(
            year as i64 * crate::date::DAYS_PER_YEAR,
        ))
    }

    /// Last second of December 31 of `year`.
    pub fn end_of_year(year: i32) -> Self {
        Self {
            date: NoLeapDate::from_days_since_epoch(
                (year as i64 + 1) * crate::date::DAYS_PER_YEAR - 1,
            ),
            hour: 23,
            minute: 59,
            second: 59,
        }
    }

    /// Returns the calendar date.
    pub fn date(self) -> NoLeapDate {
        self.date
    }

    /// Seconds elapsed since 0000-01-01 00:00:00.
    pub fn seconds_since_epoch(self) -> i64 {
        self.date.days_since_epoch() * SECONDS_PER_DAY
            + self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

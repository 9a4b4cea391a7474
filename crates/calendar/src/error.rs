//! Error types for the skillcast-calendar crate.

/// Error type for all fallible operations in the skillcast-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values
/// and time-of-day fields in the 365-day no-leap calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour, minute or second is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour (0..=23).
        hour: u8,
        /// Minute (0..=59).
        minute: u8,
        /// Second (0..=59).
        second: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_invalid_time() {
        let err = CalendarError::InvalidTime {
            hour: 24,
            minute: 0,
            second: 5,
        };
        assert_eq!(err.to_string(), "invalid time of day: 24:00:05");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}

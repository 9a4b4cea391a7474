//! Monthly date sequences for the no-leap calendar.

use crate::date::NoLeapDate;

/// Generates `n_months` monthly stamps starting at `start`.
///
/// Each step advances one calendar month, keeping the day of month where the
/// target month allows it.
///
/// # Example
///
/// ```
/// use skillcast_calendar::{NoLeapDate, month_sequence};
///
/// let start = NoLeapDate::new(1990, 11, 15).unwrap();
/// let stamps = month_sequence(start, 3);
/// assert_eq!(stamps[2], NoLeapDate::new(1991, 1, 15).unwrap());
/// ```
pub fn month_sequence(start: NoLeapDate, n_months: usize) -> Vec<NoLeapDate> {
    let mut dates = Vec::with_capacity(n_months);
    let mut current = start;
    for _ in 0..n_months {
        dates.push(current);
        current = current.next_month();
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_full_year() {
        let start = NoLeapDate::new(1990, 1, 15).unwrap();
        let dates = month_sequence(start, 24);
        assert_eq!(dates.len(), 24);
        assert_eq!(dates[12], NoLeapDate::new(1991, 1, 15).unwrap());
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn monthly_empty() {
        let start = NoLeapDate::new(1990, 1, 15).unwrap();
        assert!(month_sequence(start, 0).is_empty());
    }
}

//! Calendar normalisation of monthly time axes.
//!
//! Monthly model output is stamped at the end of the averaging interval,
//! which the calendar reports as the first instant of the *following*
//! month. Re-stamping attributes each value to day 15 of the month it
//! actually averages.

use crate::date::NoLeapDate;

/// Day of month used for mid-month stamps.
pub const MID_MONTH_DAY: u8 = 15;

/// Re-stamps one end-of-month timestamp to mid-month of the preceding month.
///
/// January maps to December 15 of the previous year.
pub fn midmonth(date: NoLeapDate) -> NoLeapDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NoLeapDate::new(year, month, MID_MONTH_DAY).expect("day 15 exists in every month")
}

/// Re-stamps a monthly time axis to mid-month values.
///
/// The result has the same length as `dates`; nothing else is altered.
pub fn to_midmonth(dates: &[NoLeapDate]) -> Vec<NoLeapDate> {
    dates.iter().map(|&d| midmonth(d)).collect()
}

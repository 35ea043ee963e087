//! Leap years, month lengths and day-of-year for the Gregorian calendar.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::CalendarError;

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_yo_opt(year, 1).is_some_and(|d| d.leap_year())
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let last = NaiveDate::from_ymd_opt(year, u32::from(month), 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::InvalidMonth { month })?;
    Ok(last.day() as u8)
}

/// Returns the day-of-year of `(year, month, day)`, starting at 1 for January 1.
///
/// The day is not checked against the month length: a day past the end of
/// the month continues counting into the next month (`day_of_year(2023, 1, 32)`
/// is 32, the same as February 1). Callers scanning windows that straddle a
/// month boundary rely on this.
pub fn day_of_year(year: i32, month: u8, day: i32) -> i32 {
    let k = if is_leap_year(year) { 1 } else { 2 };
    let m = i32::from(month);
    275 * m / 9 - k * ((m + 9) / 12) + day - 30
}

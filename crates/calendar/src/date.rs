//! Validated Gregorian date.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::doy::days_in_month;
use crate::error::CalendarError;
use crate::julian::calendar_to_jd;

/// A date in the proleptic Gregorian calendar.
///
/// Thin wrapper over [`NaiveDate`] that exposes the `u8` month/day fields,
/// the `YYYY-MM-DD` key and the Julian Day used by the moon calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is outside 1..=12 or the day
    /// does not exist in that month of that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            })
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the day-of-year (1..=366).
    pub fn doy(self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Returns the Julian Day at noon of this date.
    pub fn julian_day_noon(self) -> f64 {
        calendar_to_jd(self.year(), self.month(), f64::from(self.day()) + 0.5)
    }

    /// Returns the ISO weekday number: 1 = Monday ... 7 = Sunday.
    pub fn iso_weekday(self) -> u8 {
        self.0.weekday().number_from_monday() as u8
    }

    /// Returns the zero-padded `YYYY-MM-DD` key of this date.
    pub fn key(self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Returns the following date, or `None` past the last representable
    /// date.
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Returns `true` if this is the last day of its year.
    pub fn is_year_end(self) -> bool {
        self.0.month() == 12 && self.0.day() == 31
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
        assert_eq!(date.doy(), 60);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2024, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day_in_common_year() {
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_rejects_day_zero() {
        assert!(CalendarDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn key_is_zero_padded() {
        let date = CalendarDate::new(987, 3, 7).unwrap();
        assert_eq!(date.key(), "0987-03-07");
        assert_eq!(CalendarDate::new(2024, 11, 23).unwrap().key(), "2024-11-23");
    }

    #[test]
    fn iso_weekday_known_dates() {
        // 2013-01-07 was a Monday, 2024-01-01 a Monday, 2023-12-31 a Sunday.
        assert_eq!(CalendarDate::new(2013, 1, 7).unwrap().iso_weekday(), 1);
        assert_eq!(CalendarDate::new(2013, 1, 5).unwrap().iso_weekday(), 6);
        assert_eq!(CalendarDate::new(2024, 1, 1).unwrap().iso_weekday(), 1);
        assert_eq!(CalendarDate::new(2023, 12, 31).unwrap().iso_weekday(), 7);
        assert_eq!(CalendarDate::new(2024, 7, 4).unwrap().iso_weekday(), 4);
    }

    #[test]
    fn next_within_month() {
        let next = CalendarDate::new(2024, 1, 15).unwrap().next().unwrap();
        assert_eq!(next, CalendarDate::new(2024, 1, 16).unwrap());
    }

    #[test]
    fn next_leap_february() {
        let date = CalendarDate::new(2024, 2, 28).unwrap();
        assert_eq!(date.next().unwrap(), CalendarDate::new(2024, 2, 29).unwrap());
        assert_eq!(date.next().unwrap().next().unwrap(), CalendarDate::new(2024, 3, 1).unwrap());
    }

    #[test]
    fn next_common_february() {
        let date = CalendarDate::new(2023, 2, 28).unwrap();
        assert_eq!(date.next().unwrap(), CalendarDate::new(2023, 3, 1).unwrap());
    }

    #[test]
    fn next_dec_31_year_wrap() {
        let date = CalendarDate::new(2024, 12, 31).unwrap();
        assert!(date.is_year_end());
        assert_eq!(date.next().unwrap(), CalendarDate::new(2025, 1, 1).unwrap());
    }

    #[test]
    fn ord_is_chronological() {
        let a = CalendarDate::new(2023, 12, 31).unwrap();
        let b = CalendarDate::new(2024, 1, 1).unwrap();
        let c = CalendarDate::new(2024, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date.naive(), naive);
        assert_eq!(date.to_string(), "2024-07-04");
    }

    #[test]
    fn next_stops_at_max_date() {
        assert!(CalendarDate::from(NaiveDate::MAX).next().is_none());
    }

    #[test]
    fn hash_trait() {
        fn assert_hash<T: std::hash::Hash>() {}
        assert_hash::<CalendarDate>();
    }
}

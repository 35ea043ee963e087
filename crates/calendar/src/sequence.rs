//! Date sequence generation.

use chrono::{Datelike, NaiveDate};

use crate::date::CalendarDate;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates; the
/// sequence ends early only at the last date chrono can represent.
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    start
        .naive()
        .iter_days()
        .take(n_days)
        .map(CalendarDate::from)
        .collect()
}

/// Returns every date of `year`, January 1 through December 31.
pub fn year_dates(year: i32) -> Vec<CalendarDate> {
    let Some(first) = NaiveDate::from_yo_opt(year, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.year() == year)
        .map(CalendarDate::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = CalendarDate::new(2024, 1, 1).unwrap();
        assert!(date_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = CalendarDate::new(2024, 6, 15).unwrap();
        let dates = date_sequence(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn year_transition() {
        let start = CalendarDate::new(2024, 12, 30).unwrap();
        let dates = date_sequence(start, 4);
        assert_eq!(dates[0], CalendarDate::new(2024, 12, 30).unwrap());
        assert_eq!(dates[1], CalendarDate::new(2024, 12, 31).unwrap());
        assert_eq!(dates[2], CalendarDate::new(2025, 1, 1).unwrap());
        assert_eq!(dates[3], CalendarDate::new(2025, 1, 2).unwrap());
    }

    #[test]
    fn leap_year_has_366_dates() {
        let dates = year_dates(2024);
        assert_eq!(dates.len(), 366);
        assert_eq!(dates[59], CalendarDate::new(2024, 2, 29).unwrap());
        assert_eq!(*dates.last().unwrap(), CalendarDate::new(2024, 12, 31).unwrap());
    }

    #[test]
    fn common_year_has_365_dates() {
        let dates = year_dates(2023);
        assert_eq!(dates.len(), 365);
        assert_eq!(dates[59], CalendarDate::new(2023, 3, 1).unwrap());
    }
}

use almanac_calendar::{CalendarDate, date_sequence, year_dates};

#[test]
fn full_leap_year_month_boundaries() {
    let dates = year_dates(2024);
    assert_eq!(dates.len(), 366);

    // Index 0: Jan 1
    assert_eq!(dates[0].month(), 1);
    assert_eq!(dates[0].day(), 1);

    // Index 30: Jan 31
    assert_eq!(dates[30].month(), 1);
    assert_eq!(dates[30].day(), 31);

    // Index 59: Feb 29
    assert_eq!(dates[59].month(), 2);
    assert_eq!(dates[59].day(), 29);

    // Index 60: Mar 1
    assert_eq!(dates[60].month(), 3);
    assert_eq!(dates[60].day(), 1);

    // Index 365: Dec 31
    assert_eq!(dates[365].month(), 12);
    assert_eq!(dates[365].day(), 31);
    assert!(dates.iter().all(|d| d.year() == 2024));
}

#[test]
fn doy_matches_position() {
    for year in [1900, 2000, 2023, 2024] {
        for (i, date) in year_dates(year).into_iter().enumerate() {
            assert_eq!(
                usize::from(date.doy()),
                i + 1,
                "doy mismatch for {date}: expected {}",
                i + 1
            );
        }
    }
}

#[test]
fn multi_year_transitions() {
    let start = CalendarDate::new(2023, 1, 1).unwrap();
    let dates = date_sequence(start, 731);
    assert_eq!(dates.len(), 731);

    // Index 364: Dec 31, 2023
    assert_eq!(dates[364].key(), "2023-12-31");
    // Index 365: Jan 1, 2024
    assert_eq!(dates[365].key(), "2024-01-01");
    // Index 730: Dec 31, 2024
    assert_eq!(dates[730].key(), "2024-12-31");
}

#[test]
fn weekdays_cycle_through_the_week() {
    let dates = year_dates(2024);
    for pair in dates.windows(2) {
        let expected = pair[0].iso_weekday() % 7 + 1;
        assert_eq!(pair[1].iso_weekday(), expected, "weekday break at {}", pair[1]);
    }
}

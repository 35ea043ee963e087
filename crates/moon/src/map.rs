//! Year-wide and month-scoped moon phase maps.

use std::collections::BTreeMap;

use almanac_calendar::{day_of_year, days_in_year, jd_to_calendar, year_dates};
use tracing::debug;

use crate::phase::MoonPhase;

/// Phase labels keyed by `YYYY-MM-DD`.
pub type MoonPhaseMap = BTreeMap<String, MoonPhase>;

/// A phase instant: the phase and its JDE.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PhaseInstant {
    phase: MoonPhase,
    jde: f64,
}

/// Converts a JDE into the calendar `(year, month, whole day)` it falls on.
fn calendar_day(jde: f64) -> (i32, u8, u32) {
    let (y, m, d) = jd_to_calendar(jde);
    (y, m, d as u32)
}

fn date_key(jde: f64) -> String {
    let (y, m, d) = calendar_day(jde);
    format!("{y:04}-{m:02}-{d:02}")
}

/// Fractional position of zero-based day index `index` within `year`.
///
/// Index 0 maps one day before the start of the year; the year-wide scan
/// has always started there.
fn decimal_year(year: i32, index: i32, days: u16) -> f64 {
    f64::from(year) + f64::from(index - 1) / f64::from(days)
}

/// Scans every day of `year` and collects the nearest estimate of each
/// phase, keyed by the calendar date of the estimate.
fn phase_instants(year: i32) -> BTreeMap<String, PhaseInstant> {
    let days = days_in_year(year);
    let mut instants = BTreeMap::new();
    for i in 0..i32::from(days) {
        let dy = decimal_year(year, i, days);
        for phase in MoonPhase::EVALUATION_ORDER {
            let jde = phase.estimate(dy);
            instants.insert(date_key(jde), PhaseInstant { phase, jde });
        }
    }
    instants
}

/// Returns the dates on which a principal phase occurs, as found by scanning
/// every day of `year`.
///
/// Keys are the phase's own calendar date, so a few entries fall in the
/// last days of the previous year or the first days of the next. If two
/// phases share a date, the later one in [`MoonPhase::EVALUATION_ORDER`]
/// is kept.
pub fn phase_events(year: i32) -> MoonPhaseMap {
    let events: MoonPhaseMap = phase_instants(year)
        .into_iter()
        .map(|(key, instant)| (key, instant.phase))
        .collect();
    debug!(year, n_events = events.len(), "computed moon phase events");
    events
}

/// Returns, for every day of `year`, the phase whose instant lies nearest
/// to that day's noon.
///
/// The map has 365 entries, or 366 in a leap year. Equal distances resolve
/// to the later phase in [`MoonPhase::EVALUATION_ORDER`].
pub fn year_moon_phases(year: i32) -> MoonPhaseMap {
    let instants: Vec<PhaseInstant> = phase_instants(year).into_values().collect();
    let mut map = MoonPhaseMap::new();
    for date in year_dates(year) {
        let noon = date.julian_day_noon();
        let nearest = instants.iter().min_by(|a, b| {
            let da = (a.jde - noon).abs();
            let db = (b.jde - noon).abs();
            da.total_cmp(&db)
                .then_with(|| b.phase.rank().cmp(&a.phase.rank()))
        });
        if let Some(instant) = nearest {
            map.insert(date.key(), instant.phase);
        }
    }
    map
}

/// Returns the phases that fall in `month` of `year`, keyed by day of month.
///
/// Scans 32 offsets starting at `day`. For offset `i`, each phase is
/// estimated from the decimal year of day `day + i` and recorded at key `i`
/// when its calendar date is exactly `(year, month, i)`. Phases are tested
/// in [`MoonPhase::EVALUATION_ORDER`], so on a collision the Last Quarter
/// wins. Keys always lie in 1..=31.
///
/// Out-of-range `month` or `year` values are not checked.
pub fn month_moon_phases(day: u8, month: u8, year: i32) -> BTreeMap<u32, MoonPhase> {
    let days = days_in_year(year);
    let mut map = BTreeMap::new();
    for offset in 0..32u32 {
        let doy = day_of_year(year, month, i32::from(day) + offset as i32);
        let dy = f64::from(year) + f64::from(doy - 1) / f64::from(days);
        for phase in MoonPhase::EVALUATION_ORDER {
            let (y, m, d) = calendar_day(phase.estimate(dy));
            if y == year && m == month && d == offset {
                debug!(year, month, day = d, phase = %phase, "phase in month");
                map.insert(offset, phase);
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_year_starts_one_day_early() {
        let dy = decimal_year(2023, 0, 365);
        assert!(dy < 2023.0);
        assert!((decimal_year(2023, 1, 365) - 2023.0).abs() < 1e-12);
    }

    #[test]
    fn date_key_is_zero_padded() {
        // JD 2451545.0 is 2000-01-01 12:00.
        assert_eq!(date_key(2_451_545.0), "2000-01-01");
    }

    #[test]
    fn instants_are_distinct_dates() {
        let instants = phase_instants(2024);
        // About 12.4 lunations of four phases, plus spill into adjacent years.
        assert!(instants.len() >= 48, "got {}", instants.len());
        assert!(instants.len() <= 56, "got {}", instants.len());
    }
}

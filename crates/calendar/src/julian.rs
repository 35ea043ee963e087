//! Julian Day <-> calendar conversion (Meeus, *Astronomical Algorithms*, ch. 7).

/// First Julian Day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

/// Converts a proleptic Gregorian date to a Julian Day.
///
/// `day` may carry a fraction for the time of day; day 1.0 is midnight at
/// the start of the first of the month, so the result ends in `.5` for whole
/// days.
pub fn calendar_to_jd(year: i32, month: u8, day: f64) -> f64 {
    let (mut y, mut m) = (f64::from(year), f64::from(month));
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Converts a Julian Day to a calendar `(year, month, day)` triple.
///
/// The day keeps the fraction of the day. Julian Days before the Gregorian
/// reform are returned in the Julian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u8, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u8, day)
}

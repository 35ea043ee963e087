//! Moon phase instants after Meeus, *Astronomical Algorithms*, chapter 49.
//!
//! Each function takes a decimal year and returns the JDE of the nearest
//! occurrence of its phase, lunation `k = floor((year - 2000) * 12.3685 - q
//! + 0.5) + q`, with the periodic
//! terms and the fourteen planetary arguments applied. Accuracy is a few
//! seconds of time for recent centuries.

use std::f64::consts::PI;

const D2R: f64 = PI / 180.0;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Evaluates a polynomial with coefficients in ascending order.
fn horner(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Amplitudes of the planetary arguments A1..A14.
const PLANETARY_AMPLITUDES: [f64; 14] = [
    0.000325, 0.000165, 0.000164, 0.000126, 0.000110, 0.000062, 0.000060, 0.000056, 0.000047,
    0.000042, 0.000040, 0.000037, 0.000035, 0.000023,
];

/// Fundamental arguments for one lunation.
struct Lunation {
    k: f64,
    t: f64,
    /// Eccentricity factor of the Earth's orbit.
    e: f64,
    /// Sun's mean anomaly (radians).
    m: f64,
    /// Moon's mean anomaly (radians).
    mp: f64,
    /// Moon's argument of latitude (radians).
    f: f64,
    /// Longitude of the ascending node (radians).
    omega: f64,
}

impl Lunation {
    /// Picks the lunation of phase `q` nearest to `decimal_year`.
    fn new(decimal_year: f64, q: f64) -> Self {
        let k = ((decimal_year - 2000.0) * 12.3685 - q + 0.5).floor() + q;
        let t = k / LUNATIONS_PER_CENTURY;
        Self {
            k,
            t,
            e: horner(t, &[1.0, -0.002516, -0.0000074]),
            m: horner(t, &[2.5534 + 29.105_356_70 * k, 0.0, -0.0000014, -0.00000011]) * D2R,
            mp: horner(
                t,
                &[
                    201.5643 + 385.816_935_28 * k,
                    0.0,
                    0.0107582,
                    0.00001238,
                    -0.000000058,
                ],
            ) * D2R,
            f: horner(
                t,
                &[
                    160.7108 + 390.670_502_84 * k,
                    0.0,
                    -0.0016118,
                    -0.00000227,
                    0.000000011,
                ],
            ) * D2R,
            omega: horner(t, &[124.7746 - 1.563_755_88 * k, 0.0, 0.0020672, 0.00000215]) * D2R,
        }
    }

    /// Mean phase (equation 49.1).
    fn mean(&self) -> f64 {
        horner(
            self.t,
            &[
                2_451_550.097_66 + 29.530_588_861 * self.k,
                0.0,
                0.00015437,
                -0.000000150,
                0.00000000073,
            ],
        )
    }

    /// Additional corrections common to all phases.
    fn planetary(&self) -> f64 {
        let (k, t) = (self.k, self.t);
        let args = [
            299.77 + 0.107408 * k - 0.009173 * t * t,
            251.88 + 0.016321 * k,
            251.83 + 26.651886 * k,
            349.42 + 36.412478 * k,
            84.66 + 18.206239 * k,
            141.74 + 53.303771 * k,
            207.14 + 2.453732 * k,
            154.84 + 7.306860 * k,
            34.52 + 27.261239 * k,
            207.19 + 0.121824 * k,
            291.34 + 1.844379 * k,
            161.72 + 24.198154 * k,
            239.56 + 25.513099 * k,
            331.55 + 3.592518 * k,
        ];
        args.iter()
            .zip(PLANETARY_AMPLITUDES)
            .map(|(a, amp)| amp * (a * D2R).sin())
            .sum()
    }

    /// Terms shared by the new and full moon series from `sin Ω` onwards.
    fn syzygy_tail(&self) -> f64 {
        let (m, mp, f) = (self.m, self.mp, self.f);
        -0.00017 * self.omega.sin() - 0.00007 * (mp + 2.0 * m).sin()
            + 0.00004 * (2.0 * mp - 2.0 * f).sin()
            + 0.00004 * (3.0 * m).sin()
            + 0.00003 * (mp + m - 2.0 * f).sin()
            + 0.00003 * (2.0 * mp + 2.0 * f).sin()
            - 0.00003 * (mp + m + 2.0 * f).sin()
            + 0.00003 * (mp - m + 2.0 * f).sin()
            - 0.00002 * (mp - m - 2.0 * f).sin()
            - 0.00002 * (3.0 * mp + m).sin()
            + 0.00002 * (4.0 * mp).sin()
    }

    fn new_corrections(&self) -> f64 {
        let (e, m, mp, f) = (self.e, self.m, self.mp, self.f);
        -0.40720 * mp.sin() + 0.17241 * e * m.sin() + 0.01608 * (2.0 * mp).sin()
            + 0.01039 * (2.0 * f).sin()
            + 0.00739 * e * (mp - m).sin()
            - 0.00514 * e * (mp + m).sin()
            + 0.00208 * e * e * (2.0 * m).sin()
            - 0.00111 * (mp - 2.0 * f).sin()
            - 0.00057 * (mp + 2.0 * f).sin()
            + 0.00056 * e * (2.0 * mp + m).sin()
            - 0.00042 * (3.0 * mp).sin()
            + 0.00042 * e * (m + 2.0 * f).sin()
            + 0.00038 * e * (m - 2.0 * f).sin()
            - 0.00024 * e * (2.0 * mp - m).sin()
            + self.syzygy_tail()
    }

    fn full_corrections(&self) -> f64 {
        let (e, m, mp, f) = (self.e, self.m, self.mp, self.f);
        -0.40614 * mp.sin() + 0.17302 * e * m.sin() + 0.01614 * (2.0 * mp).sin()
            + 0.01043 * (2.0 * f).sin()
            + 0.00734 * e * (mp - m).sin()
            - 0.00515 * e * (mp + m).sin()
            + 0.00209 * e * e * (2.0 * m).sin()
            - 0.00111 * (mp - 2.0 * f).sin()
            - 0.00057 * (mp + 2.0 * f).sin()
            + 0.00056 * e * (2.0 * mp + m).sin()
            - 0.00042 * (3.0 * mp).sin()
            + 0.00042 * e * (m + 2.0 * f).sin()
            + 0.00038 * e * (m - 2.0 * f).sin()
            - 0.00024 * e * (2.0 * mp - m).sin()
            + self.syzygy_tail()
    }

    fn quarter_corrections(&self) -> f64 {
        let (e, m, mp, f) = (self.e, self.m, self.mp, self.f);
        -0.62801 * mp.sin() + 0.17172 * e * m.sin() - 0.01183 * e * (mp + m).sin()
            + 0.00862 * (2.0 * mp).sin()
            + 0.00804 * (2.0 * f).sin()
            + 0.00454 * e * (mp - m).sin()
            + 0.00204 * e * e * (2.0 * m).sin()
            - 0.00180 * (mp - 2.0 * f).sin()
            - 0.00070 * (mp + 2.0 * f).sin()
            - 0.00040 * (3.0 * mp).sin()
            - 0.00034 * e * (2.0 * mp - m).sin()
            + 0.00032 * e * (m + 2.0 * f).sin()
            + 0.00032 * e * (m - 2.0 * f).sin()
            - 0.00028 * e * e * (mp + 2.0 * m).sin()
            + 0.00027 * e * (2.0 * mp + m).sin()
            - 0.00017 * self.omega.sin()
            - 0.00005 * (mp - m - 2.0 * f).sin()
            + 0.00004 * (2.0 * mp + 2.0 * f).sin()
            - 0.00004 * (mp + m + 2.0 * f).sin()
            + 0.00004 * (mp - 2.0 * m).sin()
            + 0.00003 * (mp + m - 2.0 * f).sin()
            + 0.00003 * (3.0 * m).sin()
            + 0.00002 * (2.0 * mp - 2.0 * f).sin()
            + 0.00002 * (mp - m + 2.0 * f).sin()
            - 0.00002 * (3.0 * mp + m).sin()
    }

    /// Quarter-phase correction W, added for first and subtracted for last.
    fn quarter_w(&self) -> f64 {
        let (e, m, mp, f) = (self.e, self.m, self.mp, self.f);
        0.00306 - 0.00038 * e * m.cos() + 0.00026 * mp.cos() - 0.00002 * (mp - m).cos()
            + 0.00002 * (mp + m).cos()
            + 0.00002 * (2.0 * f).cos()
    }
}

/// JDE of the New Moon for the lunation selected by `decimal_year`.
pub fn new_moon(decimal_year: f64) -> f64 {
    let l = Lunation::new(decimal_year, 0.0);
    l.mean() + l.new_corrections() + l.planetary()
}

/// JDE of the First Quarter for the lunation selected by `decimal_year`.
pub fn first_quarter(decimal_year: f64) -> f64 {
    let l = Lunation::new(decimal_year, 0.25);
    l.mean() + l.quarter_corrections() + l.quarter_w() + l.planetary()
}

/// JDE of the Full Moon for the lunation selected by `decimal_year`.
pub fn full_moon(decimal_year: f64) -> f64 {
    let l = Lunation::new(decimal_year, 0.5);
    l.mean() + l.full_corrections() + l.planetary()
}

/// JDE of the Last Quarter for the lunation selected by `decimal_year`.
pub fn last_quarter(decimal_year: f64) -> f64 {
    let l = Lunation::new(decimal_year, 0.75);
    l.mean() + l.quarter_corrections() - l.quarter_w() + l.planetary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn horner_ascending_coefficients() {
        // 1 + 2x + 3x^2 at x = 2
        assert_abs_diff_eq!(horner(2.0, &[1.0, 2.0, 3.0]), 17.0, epsilon = 1e-12);
        assert_abs_diff_eq!(horner(5.0, &[]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn new_moon_february_1977() {
        // Meeus example 49.a: k = -283, JDE 2443192.65118
        assert_abs_diff_eq!(new_moon(1977.13), 2_443_192.651_18, epsilon = 1e-3);
    }

    #[test]
    fn last_quarter_january_2044() {
        // Meeus example 49.b: k = 544.75, JDE 2467636.49186
        assert_abs_diff_eq!(last_quarter(2044.04), 2_467_636.491_86, epsilon = 1e-3);
    }

    /// Mean-phase JDE of the (fractional) lunation at `decimal_year`.
    fn mean_jde_at(decimal_year: f64) -> f64 {
        2_451_550.097_66 + 29.530_588_861 * (decimal_year - 2000.0) * 12.3685
    }

    #[test]
    fn phases_are_the_nearest_occurrence() {
        // Half a synodic month plus the largest periodic correction.
        let bound = 29.530_588_861 / 2.0 + 1.0;
        for step in 0..2000 {
            let y = 1990.0 + f64::from(step) * 0.0173;
            let at = mean_jde_at(y);
            for jde in [new_moon(y), first_quarter(y), full_moon(y), last_quarter(y)] {
                assert!((jde - at).abs() <= bound, "y={y}: {jde} vs {at}");
            }
        }
    }

    #[test]
    fn new_moon_rounds_forward_late_in_a_lunation() {
        // 0.8 of the way through lunation 300: lunation 301 is nearer.
        let y = 2000.0 + 300.8 / 12.3685;
        let jde = new_moon(y);
        assert!(jde > mean_jde_at(y), "returned the previous new moon: {jde}");
        assert_abs_diff_eq!(jde, new_moon(2000.0 + 301.0 / 12.3685), epsilon = 1e-9);
    }

    #[test]
    fn same_lunation_for_nearby_decimal_years() {
        // Both inputs round to the same k.
        assert_abs_diff_eq!(full_moon(2024.01), full_moon(2024.012), epsilon = 1e-12);
    }
}

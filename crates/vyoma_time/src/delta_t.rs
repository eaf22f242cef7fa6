//! ΔT = TT − UT polynomial model.
//!
//! Piecewise polynomial expressions from Espenak & Meeus (2006),
//! "Five Millennium Canon of Solar Eclipses", NASA/TP-2006-214141.
//! The segments used here cover 1900–2150, the span documented for the
//! snapshot engine; outside that range the long-term parabola
//! ΔT = −20 + 32·u² (u in centuries from 1820) is used.
//!
//! Typical accuracy is a few seconds over the covered span, which is
//! orders of magnitude below the analytic ephemeris error budget.

/// ΔT in seconds for a decimal year.
///
/// Use [`delta_t_seconds`] for calendar input.
pub fn delta_t_for_decimal_year(y: f64) -> f64 {
    if y < 1900.0 || y >= 2150.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t * t * t * t;
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t;
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return 29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0;
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return 45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0;
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t;
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t * t;
    }
    // 2050–2150
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
}

/// ΔT in seconds for a calendar year/month.
///
/// The month enters as a decimal-year fraction, `year + (month − 0.5)/12`.
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    delta_t_for_decimal_year(year as f64 + (month as f64 - 0.5) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_t_2000() {
        // Observed ΔT at 2000.0 was ~63.8 s
        let dt = delta_t_for_decimal_year(2000.0);
        assert!((dt - 63.8).abs() < 1.0, "ΔT(2000) = {dt}");
    }

    #[test]
    fn delta_t_2024() {
        // ΔT has hovered around ~70 s through the 2010s-2020s
        let dt = delta_t_seconds(2024, 6);
        assert!((55.0..85.0).contains(&dt), "ΔT(2024.5) = {dt}");
    }

    #[test]
    fn delta_t_1950() {
        let dt = delta_t_for_decimal_year(1950.0);
        assert!((dt - 29.1).abs() < 1.0, "ΔT(1950) = {dt}");
    }

    #[test]
    fn delta_t_monotonic_this_century() {
        // Within 2005-2050 the model is a rising parabola
        let a = delta_t_for_decimal_year(2010.0);
        let b = delta_t_for_decimal_year(2030.0);
        let c = delta_t_for_decimal_year(2049.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn delta_t_continuous_at_segment_edges() {
        // Adjacent segments agree to within a couple of seconds
        for &y in &[1920.0, 1941.0, 1961.0, 1986.0, 2005.0] {
            let below = delta_t_for_decimal_year(y - 1e-6);
            let above = delta_t_for_decimal_year(y + 1e-6);
            assert!(
                (below - above).abs() < 2.5,
                "jump at {y}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn pre_1900_parabola() {
        // 1600s: ΔT was large and positive
        let dt = delta_t_for_decimal_year(1620.0);
        assert!(dt > 100.0 && dt < 140.0, "ΔT(1620) = {dt}");
    }
}

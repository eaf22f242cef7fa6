//! Truncated lunar position series.
//!
//! Principal periodic terms from Meeus, _Astronomical Algorithms_,
//! ch. 47 (ELP-2000/82 derived). The truncation keeps the terms above
//! ~0.04° in longitude and the four largest distance terms, giving
//! ~0.3° in longitude/latitude and ~500 km in distance — comfortably
//! inside the engine's display accuracy budget.
//!
//! Output is referred to the mean ecliptic and equinox of date.

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Ecliptic longitude of date in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Evaluate the lunar series at `t` Julian centuries of TT since J2000.0.
pub fn geocentric_ecliptic(t: f64) -> MoonPosition {
    // Mean elements (degrees), Meeus eqs. 47.1-47.5 (linear + quadratic
    // terms; higher orders are below the truncation noise).
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t; // mean longitude
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t; // mean elongation
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t; // Sun mean anomaly
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t; // Moon mean anomaly
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t; // argument of latitude

    let d = d.to_radians();
    let m = m.to_radians();
    let mp = mp.to_radians();
    let f = f.to_radians();

    // Longitude terms (degrees), Meeus table 47.a leading entries.
    let lon = lp
        + 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin()
        - 0.040_923 * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * (m + mp).sin();

    // Latitude terms (degrees), Meeus table 47.b leading entries.
    let lat = 5.128_122 * f.sin()
        + 0.280_602 * (mp + f).sin()
        + 0.277_693 * (mp - f).sin()
        + 0.173_237 * (2.0 * d - f).sin()
        + 0.055_413 * (2.0 * d - mp + f).sin()
        + 0.046_271 * (2.0 * d - mp - f).sin();

    // Distance terms (km), Meeus table 47.a leading entries.
    let dist = 385_000.56
        - 20_905.355 * mp.cos()
        - 3_699.111 * (2.0 * d - mp).cos()
        - 2_955.968 * (2.0 * d).cos()
        - 569.925 * (2.0 * mp).cos();

    MoonPosition {
        lon_deg: lon.rem_euclid(360.0),
        lat_deg: lat,
        distance_km: dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_within_perigee_apogee() {
        for k in 0..60 {
            let t = k as f64 * 0.0004; // ~every 5.3 days over ~9 years
            let p = geocentric_ecliptic(t);
            assert!(
                (354_000.0..407_000.0).contains(&p.distance_km),
                "t={t}: {} km",
                p.distance_km
            );
        }
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for k in 0..120 {
            let t = k as f64 * 0.0002;
            let p = geocentric_ecliptic(t);
            assert!(p.lat_deg.abs() < 5.6, "t={t}: lat = {}", p.lat_deg);
        }
    }

    #[test]
    fn daily_motion_about_thirteen_degrees() {
        let day = 1.0 / 36_525.0;
        for k in 0..20 {
            let t = k as f64 * 0.0011;
            let a = geocentric_ecliptic(t);
            let b = geocentric_ecliptic(t + day);
            let motion = (b.lon_deg - a.lon_deg).rem_euclid(360.0);
            assert!(
                (11.0..16.0).contains(&motion),
                "t={t}: daily motion = {motion}°"
            );
        }
    }

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD (JD 2448724.5): λ ≈ 133.163°, β ≈ -3.229°,
        // Δ ≈ 368 410 km. The truncation tail allows a few tenths of a
        // degree here.
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let p = geocentric_ecliptic(t);
        assert!((p.lon_deg - 133.16).abs() < 0.3, "lon = {}", p.lon_deg);
        assert!((p.lat_deg - (-3.23)).abs() < 0.15, "lat = {}", p.lat_deg);
        assert!((p.distance_km - 368_410.0).abs() < 1_000.0, "Δ = {}", p.distance_km);
    }
}

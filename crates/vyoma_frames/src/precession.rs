//! Precession of equatorial coordinates from J2000 to date.
//!
//! IAU 1976 precession angles ζ, z, θ applied as the standard
//! three-rotation transform. Source: Meeus, _Astronomical Algorithms_,
//! eq. 21.2-21.4 (Lieske et al. 1977). Adequate at the arcsecond level
//! over a few centuries around J2000, well inside the engine's error
//! budget.

/// Precession angles (ζ, z, θ) in degrees for Julian centuries `t` of
/// TT since J2000.0.
fn precession_angles_deg(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let zeta = (2306.2181 * t + 0.30188 * t2 + 0.017998 * t3) / 3600.0;
    let z = (2306.2181 * t + 1.09468 * t2 + 0.018203 * t3) / 3600.0;
    let theta = (2004.3109 * t - 0.42665 * t2 - 0.041833 * t3) / 3600.0;
    (zeta, z, theta)
}

/// Precess J2000 equatorial coordinates to the mean equinox of date.
///
/// `jd_tt` is the target epoch. Returns `(ra_deg, dec_deg)` with RA in
/// [0, 360).
pub fn precess_from_j2000(ra_deg: f64, dec_deg: f64, jd_tt: f64) -> (f64, f64) {
    let t = (jd_tt - 2_451_545.0) / 36_525.0;
    let (zeta, z, theta) = precession_angles_deg(t);

    let ra0 = ra_deg.to_radians();
    let dec0 = dec_deg.to_radians();
    let zeta = zeta.to_radians();
    let z = z.to_radians();
    let theta = theta.to_radians();

    let a = dec0.cos() * (ra0 + zeta).sin();
    let b = theta.cos() * dec0.cos() * (ra0 + zeta).cos() - theta.sin() * dec0.sin();
    let c = theta.sin() * dec0.cos() * (ra0 + zeta).cos() + theta.cos() * dec0.sin();

    let ra = (a.atan2(b) + z).to_degrees().rem_euclid(360.0);
    let dec = c.clamp(-1.0, 1.0).asin().to_degrees();
    (ra, dec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_j2000() {
        let (ra, dec) = precess_from_j2000(123.456, -41.2, 2_451_545.0);
        assert!((ra - 123.456).abs() < 1e-9);
        assert!((dec - (-41.2)).abs() < 1e-9);
    }

    #[test]
    fn equinox_point_drift_over_a_century() {
        // For α=0, δ=0, one century ahead: Δα ≈ ζ + z ≈ 4612.5″ ≈ 1.281°,
        // Δδ ≈ θ ≈ 2004.3″ ≈ 0.557°.
        let jd = 2_451_545.0 + 36_525.0;
        let (ra, dec) = precess_from_j2000(0.0, 0.0, jd);
        assert!((ra - 1.2817).abs() < 0.01, "ra = {ra}");
        assert!((dec - 0.5568).abs() < 0.01, "dec = {dec}");
    }

    #[test]
    fn backward_precession_reverses_sign() {
        let jd = 2_451_545.0 - 36_525.0;
        let (ra, dec) = precess_from_j2000(0.0, 0.0, jd);
        assert!(ra > 358.0 && ra < 360.0, "ra = {ra}");
        assert!(dec < 0.0, "dec = {dec}");
    }

    #[test]
    fn quarter_century_is_small() {
        // 25 years of precession is ~0.35° along the ecliptic
        let jd = 2_451_545.0 + 0.25 * 36_525.0;
        let (ra, dec) = precess_from_j2000(180.0, 30.0, jd);
        assert!((ra - 180.0).abs() < 0.6);
        assert!((dec - 30.0).abs() < 0.3);
    }
}

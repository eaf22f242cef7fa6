//! Equatorial ↔ horizontal coordinate conversion.
//!
//! Standard spherical-trigonometry formulas relating (RA, Dec) to
//! (Alt, Az) through the local hour angle. Sources: Meeus,
//! _Astronomical Algorithms_ ch. 13; standard spherical astronomy.

/// Horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Altitude in degrees, range [-90, 90]. Negative = below horizon.
    pub alt_deg: f64,
    /// Azimuth in degrees, range [0, 360). North = 0°, East = 90°.
    pub az_deg: f64,
}

/// Wrap an angle to [0, 360). `rem_euclid` alone can round a tiny
/// negative input up to exactly 360.0, so that case is folded to 0.
pub(crate) fn wrap360(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// Local hour angle H = LST − RA, wrapped to [-180, 180).
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    let h = (lst_deg - ra_deg).rem_euclid(360.0);
    if h >= 180.0 { h - 360.0 } else { h }
}

/// Convert equatorial coordinates to horizontal coordinates.
///
/// ```text
/// sin(alt) = sin(dec)·sin(lat) + cos(dec)·cos(lat)·cos(H)
/// az = atan2(−cos(dec)·sin(H), sin(dec)·cos(lat) − cos(dec)·sin(lat)·cos(H))
/// ```
///
/// Azimuth is measured from North through East. At the poles
/// (|lat| = 90°) azimuth is geometrically undefined; it is returned as
/// 0 by convention and the function never fails.
pub fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    lat_deg: f64,
    lst_deg: f64,
) -> HorizontalCoords {
    let h = hour_angle_deg(lst_deg, ra_deg).to_radians();
    let dec = dec_deg.to_radians();
    let lat = lat_deg.to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * h.cos();
    let alt = sin_alt.clamp(-1.0, 1.0).asin();

    let az = if lat_deg.abs() >= 90.0 {
        0.0
    } else {
        let y = -dec.cos() * h.sin();
        let x = dec.sin() * lat.cos() - dec.cos() * lat.sin() * h.cos();
        wrap360(y.atan2(x).to_degrees())
    };

    HorizontalCoords {
        alt_deg: alt.to_degrees(),
        az_deg: az,
    }
}

/// Convert horizontal coordinates back to equatorial coordinates.
///
/// Inverse of [`equatorial_to_horizontal`]; used by view pickers and the
/// round-trip tests. Returns `(ra_deg, dec_deg)` with RA in [0, 360).
pub fn horizontal_to_equatorial(
    alt_deg: f64,
    az_deg: f64,
    lat_deg: f64,
    lst_deg: f64,
) -> (f64, f64) {
    let alt = alt_deg.to_radians();
    let az = az_deg.to_radians();
    let lat = lat_deg.to_radians();

    let sin_dec = alt.sin() * lat.sin() + alt.cos() * lat.cos() * az.cos();
    let dec = sin_dec.clamp(-1.0, 1.0).asin();

    let y = -alt.cos() * az.sin();
    let x = alt.sin() * lat.cos() - alt.cos() * lat.sin() * az.cos();
    let h = y.atan2(x).to_degrees();

    let ra = wrap360(lst_deg - h);
    (ra, dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn hour_angle_wraps() {
        assert!((hour_angle_deg(10.0, 350.0) - 20.0).abs() < EPS);
        assert!((hour_angle_deg(350.0, 10.0) - (-20.0)).abs() < EPS);
        assert!((hour_angle_deg(0.0, 180.0) - (-180.0)).abs() < EPS);
        assert!((hour_angle_deg(180.0, 0.0) - (-180.0)).abs() < EPS);
    }

    #[test]
    fn zenith_when_dec_equals_lat_at_transit() {
        // H = 0 and dec = lat puts the object at the zenith
        let hc = equatorial_to_horizontal(120.0, 51.5, 51.5, 120.0);
        assert!((hc.alt_deg - 90.0).abs() < 1e-6, "alt = {}", hc.alt_deg);
    }

    #[test]
    fn transit_altitude_south_of_zenith() {
        // dec < lat at transit: alt = 90 − (lat − dec), az = 180 (south)
        let hc = equatorial_to_horizontal(0.0, 20.0, 50.0, 0.0);
        assert!((hc.alt_deg - 60.0).abs() < 1e-6, "alt = {}", hc.alt_deg);
        assert!((hc.az_deg - 180.0).abs() < 1e-6, "az = {}", hc.az_deg);
    }

    #[test]
    fn transit_altitude_north_of_zenith() {
        // dec > lat at transit: az = 0 (north)
        let hc = equatorial_to_horizontal(0.0, 80.0, 50.0, 0.0);
        assert!((hc.alt_deg - 60.0).abs() < 1e-6, "alt = {}", hc.alt_deg);
        assert!(
            hc.az_deg < 1e-6 || (hc.az_deg - 360.0).abs() < 1e-6,
            "az = {}",
            hc.az_deg
        );
    }

    #[test]
    fn object_east_of_meridian_rises_in_east() {
        // Equatorial star, six hours before transit, seen from the equator:
        // it sits on the horizon due east.
        let hc = equatorial_to_horizontal(90.0, 0.0, 0.0, 0.0);
        assert!(hc.alt_deg.abs() < 1e-6, "alt = {}", hc.alt_deg);
        assert!((hc.az_deg - 90.0).abs() < 1e-6, "az = {}", hc.az_deg);
    }

    #[test]
    fn object_west_of_meridian_sets_in_west() {
        let hc = equatorial_to_horizontal(270.0, 0.0, 0.0, 0.0);
        assert!(hc.alt_deg.abs() < 1e-6, "alt = {}", hc.alt_deg);
        assert!((hc.az_deg - 270.0).abs() < 1e-6, "az = {}", hc.az_deg);
    }

    #[test]
    fn celestial_pole_altitude_equals_latitude() {
        let hc = equatorial_to_horizontal(123.0, 90.0, 51.5, 7.0);
        assert!((hc.alt_deg - 51.5).abs() < 1e-6, "alt = {}", hc.alt_deg);
        assert!(
            hc.az_deg < 1e-6 || (hc.az_deg - 360.0).abs() < 1e-6,
            "pole az = {}",
            hc.az_deg
        );
    }

    #[test]
    fn observer_at_pole_gets_az_zero() {
        let hc = equatorial_to_horizontal(42.0, 30.0, 90.0, 111.0);
        assert_eq!(hc.az_deg, 0.0);
        // From the north pole, altitude equals declination
        assert!((hc.alt_deg - 30.0).abs() < 1e-6);

        let hc = equatorial_to_horizontal(42.0, 30.0, -90.0, 111.0);
        assert_eq!(hc.az_deg, 0.0);
        assert!((hc.alt_deg + 30.0).abs() < 1e-6);
    }

    #[test]
    fn roundtrip_through_inverse() {
        let lat = 51.5;
        let lst = 200.0;
        for &(ra, dec) in &[
            (0.0, 0.0),
            (15.0, 51.5),
            (123.456, -12.3),
            (200.0, 51.5),
            (359.9, 89.0),
            (80.0, -45.0),
        ] {
            let hc = equatorial_to_horizontal(ra, dec, lat, lst);
            let (ra2, dec2) = horizontal_to_equatorial(hc.alt_deg, hc.az_deg, lat, lst);
            let dra = (ra2 - ra).rem_euclid(360.0);
            let dra = dra.min(360.0 - dra);
            assert!(dra < 1e-6, "RA roundtrip {ra} -> {ra2}");
            assert!((dec2 - dec).abs() < 1e-6, "Dec roundtrip {dec} -> {dec2}");
        }
    }

    #[test]
    fn altitude_always_in_range() {
        for &lst in &[0.0, 97.0, 180.0, 271.5] {
            for &dec in &[-90.0, -30.0, 0.0, 30.0, 90.0] {
                let hc = equatorial_to_horizontal(33.0, dec, 51.5, lst);
                assert!((-90.0..=90.0).contains(&hc.alt_deg));
                assert!((0.0..360.0).contains(&hc.az_deg));
            }
        }
    }
}

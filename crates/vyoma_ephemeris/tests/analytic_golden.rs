//! Structural golden checks for the analytic ephemeris.
//!
//! Rather than pinning arcminute-exact coordinates (the mean-element
//! model does not warrant it), these verify geometry the model must
//! get right over its whole validity span: bounded inner-planet
//! elongations, distance envelopes, and frame sanity.

use vyoma_ephemeris::{EphemerisBody, Provider, analytic};
use vyoma_frames::angular_separation_deg;

/// Sample epochs spread over ~1990-2040.
fn epochs() -> impl Iterator<Item = f64> {
    (0..120).map(|k| 2_448_000.5 + k as f64 * 152.0)
}

fn elongation_from_sun(body: EphemerisBody, jd: f64) -> f64 {
    let (sun_lon, sun_lat) = analytic::geocentric_ecliptic_lon_lat(EphemerisBody::Sun, jd);
    let (lon, lat) = analytic::geocentric_ecliptic_lon_lat(body, jd);
    angular_separation_deg(lat, lon, sun_lat, sun_lon)
}

#[test]
fn mercury_elongation_bounded() {
    // Greatest elongation of Mercury is ~28°; allow model slack.
    for jd in epochs() {
        let e = elongation_from_sun(EphemerisBody::Mercury, jd);
        assert!(e < 29.5, "Mercury {e}° from Sun at JD {jd}");
    }
}

#[test]
fn venus_elongation_bounded() {
    // Greatest elongation of Venus is ~47°.
    for jd in epochs() {
        let e = elongation_from_sun(EphemerisBody::Venus, jd);
        assert!(e < 48.5, "Venus {e}° from Sun at JD {jd}");
    }
}

#[test]
fn venus_reaches_wide_elongations() {
    // The bound above must not be vacuous: Venus actually swings out
    // past 40° somewhere in the sampled span.
    let max = epochs()
        .map(|jd| elongation_from_sun(EphemerisBody::Venus, jd))
        .fold(0.0f64, f64::max);
    assert!(max > 40.0, "max Venus elongation only {max}°");
}

#[test]
fn geocentric_distance_envelopes() {
    let provider = Provider::Analytic;
    for jd in epochs() {
        let mars = provider.position(EphemerisBody::Mars, jd).unwrap();
        assert!(
            (0.36..2.70).contains(&mars.distance_au),
            "Mars at {} au (JD {jd})",
            mars.distance_au
        );
        let saturn = provider.position(EphemerisBody::Saturn, jd).unwrap();
        assert!(
            (7.9..11.1).contains(&saturn.distance_au),
            "Saturn at {} au (JD {jd})",
            saturn.distance_au
        );
        let sun = provider.position(EphemerisBody::Sun, jd).unwrap();
        assert!(
            (0.980..1.020).contains(&sun.distance_au),
            "Sun at {} au (JD {jd})",
            sun.distance_au
        );
    }
}

#[test]
fn outer_planets_closest_near_opposition() {
    // For Jupiter, the geocentric distance at ~180° elongation must be
    // smaller than at ~0° elongation across the sampled epochs.
    let provider = Provider::Analytic;
    let mut near_opposition = f64::MAX;
    let mut near_conjunction = f64::MIN;
    for jd in epochs() {
        let e = elongation_from_sun(EphemerisBody::Jupiter, jd);
        let d = provider
            .position(EphemerisBody::Jupiter, jd)
            .unwrap()
            .distance_au;
        if e > 150.0 {
            near_opposition = near_opposition.min(d);
        }
        if e < 30.0 {
            near_conjunction = near_conjunction.max(d);
        }
    }
    assert!(
        near_opposition < near_conjunction,
        "opposition {near_opposition} au vs conjunction {near_conjunction} au"
    );
}

#[test]
fn sun_declination_stays_within_obliquity() {
    let provider = Provider::Analytic;
    for jd in epochs() {
        let sun = provider.position(EphemerisBody::Sun, jd).unwrap();
        assert!(
            sun.dec_deg.abs() <= 23.5,
            "Sun dec {}° at JD {jd}",
            sun.dec_deg
        );
    }
}

#[test]
fn moon_never_far_from_ecliptic() {
    for jd in epochs() {
        let (_, lat) = analytic::geocentric_ecliptic_lon_lat(EphemerisBody::Moon, jd);
        assert!(lat.abs() < 5.6, "Moon β = {lat}° at JD {jd}");
    }
}

//! Closed-form analytic ephemeris.
//!
//! Planets: Standish mean Keplerian elements ([`crate::elements`]),
//! Kepler's equation solved by Newton iteration, heliocentric ecliptic
//! rectangular coordinates rotated to the equatorial J2000 frame. The
//! Sun is the negated Earth-Moon-barycenter position. The Moon comes
//! from the truncated trigonometric series in [`crate::moon`].
//!
//! Apparent magnitudes are recomputed per evaluation from the
//! phase-angle polynomials in [`crate::magnitude`].

use vyoma_frames::{OBLIQUITY_J2000_DEG, angular_separation_deg, mean_obliquity_deg};
use vyoma_time::julian_centuries;

use crate::BodyPosition;
use crate::body::EphemerisBody;
use crate::elements::{ElementSet, OrbitalElements};
use crate::magnitude::{MAG_SUN, moon_magnitude, planet_magnitude};
use crate::moon;

/// Astronomical unit in kilometers (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Maximum Newton iterations for Kepler's equation.
const MAX_KEPLER_ITERATIONS: usize = 20;

/// Solve Kepler's equation M = E − e·sin(E) for the eccentric anomaly.
///
/// Newton iteration; converges in a handful of steps for planetary
/// eccentricities.
pub(crate) fn solve_kepler(m_rad: f64, e: f64) -> f64 {
    let mut ea = if e < 0.8 { m_rad } else { std::f64::consts::PI };
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta = (ea - e * ea.sin() - m_rad) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ea
}

/// Wrap an angle in degrees to [-180, 180).
fn normalize_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// Heliocentric ecliptic-J2000 rectangular position in au.
pub(crate) fn heliocentric_ecliptic(set: ElementSet, t: f64) -> [f64; 3] {
    let el = set.elements();
    let a = OrbitalElements::at(el.a, t);
    let e = OrbitalElements::at(el.e, t);
    let incl = OrbitalElements::at(el.i, t).to_radians();
    let l = OrbitalElements::at(el.l, t);
    let lon_peri = OrbitalElements::at(el.lon_peri, t);
    let lon_node = OrbitalElements::at(el.lon_node, t);

    let omega = (lon_peri - lon_node).to_radians();
    let node = lon_node.to_radians();
    let m = normalize_pm180(l - lon_peri).to_radians();

    let ea = solve_kepler(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (sin_o, cos_o) = omega.sin_cos();
    let (sin_n, cos_n) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    [
        (cos_o * cos_n - sin_o * sin_n * cos_i) * xp
            + (-sin_o * cos_n - cos_o * sin_n * cos_i) * yp,
        (cos_o * sin_n + sin_o * cos_n * cos_i) * xp
            + (-sin_o * sin_n + cos_o * cos_n * cos_i) * yp,
        (sin_o * sin_i) * xp + (cos_o * sin_i) * yp,
    ]
}

/// Earth's heliocentric position (EM-barycenter approximation), au.
pub(crate) fn earth_heliocentric(t: f64) -> [f64; 3] {
    heliocentric_ecliptic(ElementSet::EmBary, t)
}

/// Rotate ecliptic rectangular coordinates to equatorial.
pub(crate) fn ecliptic_to_equatorial(v: &[f64; 3], obliquity_deg: f64) -> [f64; 3] {
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    [
        v[0],
        v[1] * cos_e - v[2] * sin_e,
        v[1] * sin_e + v[2] * cos_e,
    ]
}

/// Rotate equatorial rectangular coordinates to ecliptic.
pub(crate) fn equatorial_to_ecliptic(v: &[f64; 3], obliquity_deg: f64) -> [f64; 3] {
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    [
        v[0],
        v[1] * cos_e + v[2] * sin_e,
        -v[1] * sin_e + v[2] * cos_e,
    ]
}

/// Wrap an angle in degrees to [0, 360), folding the exact-360.0
/// rounding case of `rem_euclid` on tiny negative inputs.
pub(crate) fn wrap360(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// RA/Dec in degrees and range of a rectangular vector.
pub(crate) fn ra_dec_of(v: &[f64; 3]) -> (f64, f64, f64) {
    let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let ra = wrap360(v[1].atan2(v[0]).to_degrees());
    let dec = (v[2] / r).clamp(-1.0, 1.0).asin().to_degrees();
    (ra, dec, r)
}

fn norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Phase angle (Sun-body-Earth) in degrees from the triangle sides.
fn phase_angle_deg(r_helio: f64, delta: f64, r_earth: f64) -> f64 {
    let cos_i = (r_helio * r_helio + delta * delta - r_earth * r_earth)
        / (2.0 * r_helio * delta);
    cos_i.clamp(-1.0, 1.0).acos().to_degrees()
}

/// The Sun's true geometric ecliptic longitude in degrees, [0, 360).
///
/// Used by the annual-aberration correction.
pub fn sun_true_longitude_deg(jd_tt: f64) -> f64 {
    let t = julian_centuries(jd_tt);
    let e = earth_heliocentric(t);
    wrap360((-e[1]).atan2(-e[0]).to_degrees())
}

/// Geocentric ecliptic longitude/latitude of a body, degrees.
///
/// Moon phase and conjunction logic work in this frame.
pub fn geocentric_ecliptic_lon_lat(body: EphemerisBody, jd_tt: f64) -> (f64, f64) {
    let t = julian_centuries(jd_tt);
    match body {
        EphemerisBody::Sun => {
            let e = earth_heliocentric(t);
            let lon = wrap360((-e[1]).atan2(-e[0]).to_degrees());
            let lat = (-e[2] / norm(&e)).clamp(-1.0, 1.0).asin().to_degrees();
            (lon, lat)
        }
        EphemerisBody::Moon => {
            let m = moon::geocentric_ecliptic(t);
            (m.lon_deg, m.lat_deg)
        }
        _ => {
            let set = planet_elements(body);
            let helio = heliocentric_ecliptic(set, t);
            let geo = sub(&helio, &earth_heliocentric(t));
            let r = norm(&geo);
            let lon = wrap360(geo[1].atan2(geo[0]).to_degrees());
            let lat = (geo[2] / r).clamp(-1.0, 1.0).asin().to_degrees();
            (lon, lat)
        }
    }
}

fn planet_elements(body: EphemerisBody) -> ElementSet {
    match body {
        EphemerisBody::Mercury => ElementSet::Mercury,
        EphemerisBody::Venus => ElementSet::Venus,
        EphemerisBody::Mars => ElementSet::Mars,
        EphemerisBody::Jupiter => ElementSet::Jupiter,
        EphemerisBody::Saturn => ElementSet::Saturn,
        EphemerisBody::Uranus => ElementSet::Uranus,
        EphemerisBody::Neptune => ElementSet::Neptune,
        // Sun and Moon are handled before element lookup.
        EphemerisBody::Sun | EphemerisBody::Moon => unreachable!("no elements for Sun/Moon"),
    }
}

/// Geocentric equatorial position and apparent magnitude of a body.
pub fn position(body: EphemerisBody, jd_tt: f64) -> BodyPosition {
    let t = julian_centuries(jd_tt);
    let earth = earth_heliocentric(t);
    let r_earth = norm(&earth);

    match body {
        EphemerisBody::Sun => {
            let geo = [-earth[0], -earth[1], -earth[2]];
            let eq = ecliptic_to_equatorial(&geo, OBLIQUITY_J2000_DEG);
            let (ra, dec, r) = ra_dec_of(&eq);
            BodyPosition {
                ra_deg: ra,
                dec_deg: dec,
                distance_au: r,
                magnitude: MAG_SUN,
            }
        }
        EphemerisBody::Moon => {
            let m = moon::geocentric_ecliptic(t);
            let dist_au = m.distance_km / AU_KM;
            let ecl = [
                dist_au * m.lat_deg.to_radians().cos() * m.lon_deg.to_radians().cos(),
                dist_au * m.lat_deg.to_radians().cos() * m.lon_deg.to_radians().sin(),
                dist_au * m.lat_deg.to_radians().sin(),
            ];
            let eq = ecliptic_to_equatorial(&ecl, mean_obliquity_deg(t));
            let (ra, dec, r) = ra_dec_of(&eq);

            let (sun_lon, sun_lat) = geocentric_ecliptic_lon_lat(EphemerisBody::Sun, jd_tt);
            let elongation = angular_separation_deg(m.lat_deg, m.lon_deg, sun_lat, sun_lon);
            let phase = 180.0 - elongation;
            BodyPosition {
                ra_deg: ra,
                dec_deg: dec,
                distance_au: r,
                magnitude: moon_magnitude(phase),
            }
        }
        _ => {
            let set = planet_elements(body);
            let helio = heliocentric_ecliptic(set, t);
            let geo = sub(&helio, &earth);
            let r_helio = norm(&helio);
            let delta = norm(&geo);
            let eq = ecliptic_to_equatorial(&geo, OBLIQUITY_J2000_DEG);
            let (ra, dec, _) = ra_dec_of(&eq);
            let phase = phase_angle_deg(r_helio, delta, r_earth);
            BodyPosition {
                ra_deg: ra,
                dec_deg: dec,
                distance_au: delta,
                magnitude: planet_magnitude(body, r_helio, delta, phase),
            }
        }
    }
}

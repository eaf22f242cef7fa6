//! Apparent visual magnitudes of solar-system bodies.
//!
//! Classical phase-angle polynomials from the Astronomical Almanac
//! (1984 system), as tabulated in Meeus, _Astronomical Algorithms_,
//! ch. 41. Saturn's ring contribution is omitted (it needs the ring
//! opening angle; the disk-only value errs faint by up to ~1 mag).
//! The Moon uses Allen's phase law (_Astrophysical Quantities_).

use crate::body::EphemerisBody;

/// Apparent magnitude of the Sun.
pub const MAG_SUN: f64 = -26.74;

/// Planet magnitude from heliocentric distance `r`, geocentric distance
/// `delta` (both au) and phase angle `i` in degrees.
pub fn planet_magnitude(body: EphemerisBody, r: f64, delta: f64, phase_deg: f64) -> f64 {
    let base = 5.0 * (r * delta).log10();
    let i = phase_deg;
    match body {
        EphemerisBody::Mercury => {
            -0.42 + base + 0.0380 * i - 0.000_273 * i * i + 0.000_002 * i * i * i
        }
        EphemerisBody::Venus => {
            -4.40 + base + 0.0009 * i + 0.000_239 * i * i - 0.000_000_65 * i * i * i
        }
        EphemerisBody::Mars => -1.52 + base + 0.016 * i,
        EphemerisBody::Jupiter => -9.40 + base + 0.005 * i,
        EphemerisBody::Saturn => -8.88 + base + 0.044 * i,
        EphemerisBody::Uranus => -7.19 + base + 0.002 * i,
        EphemerisBody::Neptune => -6.87 + base,
        EphemerisBody::Sun => MAG_SUN,
        // The Moon has its own phase law.
        EphemerisBody::Moon => moon_magnitude(phase_deg),
    }
}

/// Moon magnitude from phase angle in degrees (0 = full).
///
/// Allen: m = −12.73 + 0.026·|i| + 4·10⁻⁹·i⁴.
pub fn moon_magnitude(phase_deg: f64) -> f64 {
    let i = phase_deg.abs();
    -12.73 + 0.026 * i + 4.0e-9 * i * i * i * i
}

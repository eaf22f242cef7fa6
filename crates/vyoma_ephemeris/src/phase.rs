//! Lunar phase computation.
//!
//! Illuminated fraction from the Sun-Moon elongation,
//! fraction = (1 − cos(elongation)) / 2, with waxing determined by the
//! sign of the Sun→Moon ecliptic longitude difference. Phase names
//! bucket the fraction, with the quarter names reserved for the
//! half-lit window.

use vyoma_frames::angular_separation_deg;

use crate::analytic::geocentric_ecliptic_lon_lat;
use crate::body::EphemerisBody;

/// Lunar phase summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Illuminated fraction of the disk, 0 = new, 1 = full.
    pub illuminated_fraction: f64,
    /// Friendly name ("Waxing gibbous", ...).
    pub phase_name: &'static str,
    /// True between new and full moon.
    pub waxing: bool,
}

/// Compute the Moon's phase at a TT Julian Date.
pub fn moon_phase(jd_tt: f64) -> MoonPhase {
    let (sun_lon, sun_lat) = geocentric_ecliptic_lon_lat(EphemerisBody::Sun, jd_tt);
    let (moon_lon, moon_lat) = geocentric_ecliptic_lon_lat(EphemerisBody::Moon, jd_tt);

    let elongation = angular_separation_deg(moon_lat, moon_lon, sun_lat, sun_lon);
    let fraction = (1.0 - elongation.to_radians().cos()) / 2.0;
    let waxing = (moon_lon - sun_lon).rem_euclid(360.0) < 180.0;

    MoonPhase {
        illuminated_fraction: fraction,
        phase_name: phase_name(fraction, waxing),
        waxing,
    }
}

fn phase_name(fraction: f64, waxing: bool) -> &'static str {
    if fraction < 0.03 {
        "New Moon"
    } else if fraction > 0.97 {
        "Full Moon"
    } else if (0.47..=0.53).contains(&fraction) {
        if waxing { "First quarter" } else { "Last quarter" }
    } else if fraction < 0.5 {
        if waxing { "Waxing crescent" } else { "Waning crescent" }
    } else if waxing {
        "Waxing gibbous"
    } else {
        "Waning gibbous"
    }
}

//! Atmospheric refraction correction.
//!
//! Bennett's formula (Bennett 1982, _The calculation of astronomical
//! refraction in marine navigation_, J. Navigation 35) for standard
//! atmospheric conditions. Accurate to ~0.1′ across the whole sky.

/// Below this apparent altitude the correction is not applied: the
/// formula's argument approaches its singularity and the object is
/// treated as below the horizon.
pub const REFRACTION_MIN_ALT_DEG: f64 = -1.0;

/// Refraction in arcminutes for an apparent altitude in degrees.
///
/// R = 1.02 / tan(h + 10.3 / (h + 5.11)), argument in degrees.
/// Clamped to ≥ 0 (the raw formula goes marginally negative near the
/// zenith).
pub fn bennett_refraction_arcmin(alt_deg: f64) -> f64 {
    let arg_deg = alt_deg + 10.3 / (alt_deg + 5.11);
    (1.02 / arg_deg.to_radians().tan()).max(0.0)
}

/// Apply refraction to an altitude, raising it toward the zenith.
///
/// Only applied for altitudes ≥ [`REFRACTION_MIN_ALT_DEG`]; lower
/// altitudes are returned unchanged.
pub fn apply_refraction(alt_deg: f64) -> f64 {
    if alt_deg < REFRACTION_MIN_ALT_DEG {
        return alt_deg;
    }
    alt_deg + bennett_refraction_arcmin(alt_deg) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_refraction_about_half_degree() {
        // At h = 0 Bennett gives ~34.5′
        let r = bennett_refraction_arcmin(0.0);
        assert!((r - 34.5).abs() < 1.0, "R(0°) = {r}′");
    }

    #[test]
    fn refraction_at_45_degrees() {
        // ~1′ at 45°
        let r = bennett_refraction_arcmin(45.0);
        assert!((r - 1.0).abs() < 0.1, "R(45°) = {r}′");
    }

    #[test]
    fn refraction_never_negative() {
        for alt in 0..=90 {
            let r = bennett_refraction_arcmin(alt as f64);
            assert!(r >= 0.0, "R({alt}°) = {r}′");
        }
    }

    #[test]
    fn refraction_monotonic_decreasing() {
        let mut prev = bennett_refraction_arcmin(0.0);
        for alt in 1..=89 {
            let r = bennett_refraction_arcmin(alt as f64);
            assert!(r <= prev, "R not decreasing at {alt}°");
            prev = r;
        }
    }

    #[test]
    fn below_threshold_unchanged() {
        assert_eq!(apply_refraction(-1.5), -1.5);
        assert_eq!(apply_refraction(-30.0), -30.0);
    }

    #[test]
    fn applied_raises_altitude() {
        let corrected = apply_refraction(0.0);
        assert!(corrected > 0.5 && corrected < 0.65, "corrected = {corrected}");
    }

    #[test]
    fn object_just_below_horizon_can_be_lifted_above() {
        // Refraction near the horizon (~0.5°) lifts objects slightly below it
        let corrected = apply_refraction(-0.3);
        assert!(corrected > 0.0, "corrected = {corrected}");
    }
}

//! Visibility culling rules.
//!
//! Applied in order: altitude, then magnitude against the
//! light-pollution-adjusted limit, then the optional field-of-view
//! bound. The Bortle extinction model is the linear penalty the
//! planetarium has always shipped: 0.2 mag per class step above 1,
//! which satisfies the required monotonicity (higher class → fewer
//! faint objects).

use vyoma_frames::angular_separation_deg;

use crate::FieldOfView;

/// Magnitude penalty for a Bortle class in [1, 9].
pub fn bortle_penalty_mag(bortle_class: u8) -> f64 {
    0.2 * (bortle_class.saturating_sub(1)) as f64
}

/// Effective magnitude after the shared extinction term.
pub fn effective_magnitude(catalog_mag: f64, penalty_mag: f64) -> f64 {
    catalog_mag + penalty_mag
}

/// Horizon rule: objects at exactly 0° altitude are included.
pub fn is_above_horizon(alt_deg: f64) -> bool {
    alt_deg >= 0.0
}

/// Field-of-view bound: great-circle separation from the view center
/// must be within half the view width. Spherical, never planar.
pub fn within_field(fov: &FieldOfView, alt_deg: f64, az_deg: f64) -> bool {
    angular_separation_deg(alt_deg, az_deg, fov.center_alt_deg, fov.center_az_deg)
        <= fov.width_deg / 2.0
}

/// Full culling predicate in the documented order.
pub fn passes(
    alt_deg: f64,
    az_deg: f64,
    effective_mag: f64,
    limiting_magnitude: f64,
    fov: Option<&FieldOfView>,
) -> bool {
    if !is_above_horizon(alt_deg) {
        return false;
    }
    if effective_mag > limiting_magnitude {
        return false;
    }
    match fov {
        Some(fov) => within_field(fov, alt_deg, az_deg),
        None => true,
    }
}

//! Plot-space projections of horizontal coordinates.
//!
//! Pure total functions over alt ∈ [0, 90], az ∈ [0, 360). All three
//! share the azimuth convention North = 0°, East = 90°; the 2D
//! projections put North at +y / x = 0 so screen output matches the 3D
//! hemisphere and exports.

/// Rectangular Az/Alt plot: x = azimuth, y = altitude. Linear, no
/// singularities.
pub fn project_rectangular(alt_deg: f64, az_deg: f64) -> [f64; 2] {
    [az_deg.rem_euclid(360.0), alt_deg]
}

/// Polar dome plot centered on the zenith.
///
/// Radius r = (90 − alt)/90 clamped to [0, 1]; angle = azimuth with
/// North up: x = r·sin(az), y = r·cos(az). The zenith (alt = 90) maps
/// exactly to (0, 0).
pub fn project_dome(alt_deg: f64, az_deg: f64) -> [f64; 2] {
    let r = ((90.0 - alt_deg) / 90.0).clamp(0.0, 1.0);
    let az = az_deg.to_radians();
    [r * az.sin(), r * az.cos()]
}

/// Unit-hemisphere coordinates.
///
/// x = cos(alt)·sin(az), y = cos(alt)·cos(az), z = sin(alt); z ≥ 0 for
/// alt ≥ 0 by construction.
pub fn project_hemisphere(alt_deg: f64, az_deg: f64) -> [f64; 3] {
    let alt = alt_deg.to_radians();
    let az = az_deg.to_radians();
    let r = alt.cos();
    [r * az.sin(), r * az.cos(), alt.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn rectangular_is_identity_like() {
        let [x, y] = project_rectangular(35.5, 127.25);
        assert_eq!((x, y), (127.25, 35.5));
    }

    #[test]
    fn rectangular_wraps_azimuth() {
        let [x, _] = project_rectangular(10.0, 360.0);
        assert!(x.abs() < EPS);
    }

    #[test]
    fn dome_zenith_is_origin() {
        let [x, y] = project_dome(90.0, 0.0);
        assert_eq!((x, y), (0.0, 0.0));
        // Any azimuth at the zenith collapses to the origin
        let [x, y] = project_dome(90.0, 213.7);
        assert!(x.abs() < EPS && y.abs() < EPS);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn dome_horizon_on_unit_circle() {
        for &az in &[0.0, 45.0, 90.0, 180.0, 270.0] {
            let [x, y] = project_dome(0.0, az);
            let r = (x * x + y * y).sqrt();
            assert!((r - 1.0).abs() < EPS, "r = {r} at az = {az}");
        }
    }

    #[test]
    fn dome_north_is_up_east_is_right() {
        let [x, y] = project_dome(0.0, 0.0);
        assert!(x.abs() < EPS && (y - 1.0).abs() < EPS);
        let [x, y] = project_dome(0.0, 90.0);
        assert!((x - 1.0).abs() < EPS && y.abs() < EPS);
    }

    #[test]
    fn hemisphere_zenith_is_up() {
        let [x, y, z] = project_hemisphere(90.0, 42.0);
        assert!(x.abs() < EPS && y.abs() < EPS);
        assert!((z - 1.0).abs() < EPS);
    }

    #[test]
    fn hemisphere_unit_length() {
        for &(alt, az) in &[(0.0, 0.0), (30.0, 120.0), (60.0, 300.0), (89.9, 10.0)] {
            let [x, y, z] = project_hemisphere(alt, az);
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 1.0).abs() < EPS, "r = {r}");
        }
    }

    #[test]
    fn hemisphere_z_nonnegative_above_horizon() {
        for alt in 0..=90 {
            let [_, _, z] = project_hemisphere(alt as f64, 200.0);
            assert!(z >= 0.0);
        }
    }

    #[test]
    fn dome_and_hemisphere_share_azimuth_convention() {
        // An object due east sits at +x in both projections
        let [dx, dy] = project_dome(30.0, 90.0);
        let [hx, hy, _] = project_hemisphere(30.0, 90.0);
        assert!(dx > 0.0 && dy.abs() < EPS);
        assert!(hx > 0.0 && hy.abs() < EPS);
    }
}

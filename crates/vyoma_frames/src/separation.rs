//! Great-circle angular separation.
//!
//! Haversine formulation: numerically stable for small separations,
//! which is exactly where field-of-view culling and conjunction
//! detection operate. Never planar Euclidean distance.

/// Angular separation in degrees between two points on the sphere.
///
/// Arguments are (latitude-like, longitude-like) pairs in degrees:
/// Alt/Az or Dec/RA both work.
pub fn angular_separation_deg(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (lon2_deg - lon1_deg).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * a.sqrt().clamp(0.0, 1.0).asin().to_degrees()
}

//! Coordinate-frame transforms and plot projections for the snapshot engine.
//!
//! Provides:
//! - Equatorial (RA/Dec) ↔ horizontal (Alt/Az) conversion
//! - Atmospheric refraction (Bennett 1982)
//! - Precession from J2000 and annual aberration corrections
//! - Great-circle angular separation
//! - Pure projection functions (rectangular, dome, 3D hemisphere)
//!
//! All public angles are degrees. Azimuth convention throughout:
//! North = 0°, East = 90°, range [0, 360).

pub mod aberration;
pub mod horizontal;
pub mod obliquity;
pub mod precession;
pub mod projection;
pub mod refraction;
pub mod separation;

pub use aberration::annual_aberration_delta;
pub use horizontal::{
    HorizontalCoords, equatorial_to_horizontal, horizontal_to_equatorial, hour_angle_deg,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, mean_obliquity_deg};
pub use precession::precess_from_j2000;
pub use projection::{project_dome, project_hemisphere, project_rectangular};
pub use refraction::{REFRACTION_MIN_ALT_DEG, apply_refraction, bennett_refraction_arcmin};
pub use separation::angular_separation_deg;

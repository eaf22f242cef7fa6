//! Time-scale utilities for the sky snapshot engine.
//!
//! This crate provides:
//! - A validated, explicitly-UTC calendar instant type
//! - Julian Date ↔ calendar conversions (proleptic Gregorian, years ≥ 1582)
//! - Earth Rotation Angle, Greenwich/Local Mean Sidereal Time
//! - A ΔT (TT − UT) polynomial model for the TT time-scale option

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_instant;

pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, julian_centuries};
pub use sidereal::{earth_rotation_angle_rad, gmst_deg, gmst_rad, local_sidereal_time_deg};
pub use utc_instant::UtcInstant;

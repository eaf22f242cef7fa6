//! UTC calendar instant with sub-second precision.
//!
//! `UtcInstant` is the canonical time input for the snapshot engine. The
//! type itself is the UTC tag: there is no way to express a naive or
//! zone-ambiguous timestamp, and parsing rejects anything that is not an
//! explicit `YYYY-MM-DDTHH:MM:SS[.fff][Z]` string. The engine never
//! guesses a timezone.

use std::fmt;
use std::str::FromStr;

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// UTC calendar instant.
///
/// Construct via [`UtcInstant::new`] (validated) or [`FromStr`]. Fields
/// are public for destructuring; callers that fill them by hand should
/// run [`UtcInstant::validate`] before handing the instant to the engine
/// (the engine re-validates on entry either way).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcInstant {
    /// Create a validated UTC instant.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let instant = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        instant.validate()?;
        Ok(instant)
    }

    /// Check all calendar fields.
    ///
    /// Years before 1582 are rejected: the Julian Date conversion is
    /// proleptic Gregorian only.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.year < 1582 {
            return Err(TimeError::InvalidInput(format!(
                "year {} precedes the Gregorian calendar",
                self.year
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidInput(format!(
                "month {} out of range 1-12",
                self.month
            )));
        }
        let dim = days_in_month(self.year, self.month);
        if !(1..=dim).contains(&self.day) {
            return Err(TimeError::InvalidInput(format!(
                "day {} out of range 1-{dim} for {}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour >= 24 {
            return Err(TimeError::InvalidInput(format!(
                "hour {} out of range 0-23",
                self.hour
            )));
        }
        if self.minute >= 60 {
            return Err(TimeError::InvalidInput(format!(
                "minute {} out of range 0-59",
                self.minute
            )));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidInput(format!(
                "second {} out of range [0, 60)",
                self.second
            )));
        }
        Ok(())
    }

    /// Julian Date (UTC) of this instant.
    pub fn julian_date(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date shifted to Terrestrial Time: JD_UTC + ΔT/86400.
    pub fn julian_date_tt(&self) -> f64 {
        self.julian_date() + delta_t_seconds(self.year, self.month) / 86_400.0
    }
}

/// Whether a Gregorian year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a Gregorian month. `month` must be 1-12.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl FromStr for UtcInstant {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM:SS`, optionally with fractional seconds
    /// and/or a trailing `Z`. Any other offset or format is rejected.
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let bad = || TimeError::InvalidInput(format!("expected YYYY-MM-DDTHH:MM:SS[Z], got {s:?}"));

        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s.split_once('T').ok_or_else(bad)?;

        let mut date_parts = date.splitn(3, '-');
        let year: i32 = date_parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;
        let month: u32 = date_parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;
        let day: u32 = date_parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;

        let mut time_parts = time.splitn(3, ':');
        let hour: u32 = time_parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;
        let minute: u32 = time_parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;
        let second: f64 = time_parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(bad)?;

        Self::new(year, month, day, hour, minute, second)
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

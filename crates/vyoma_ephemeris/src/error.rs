//! Error types for ephemeris evaluation and kernel loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::EphemerisBody;

/// Errors from kernel loading or ephemeris queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Kernel file could not be read.
    Io(String),
    /// Kernel bytes are malformed.
    Parse(String),
    /// The kernel does not cover `(body, jd_tt)`.
    ///
    /// Recoverable: callers fall back to the analytic provider with a
    /// reported degradation flag.
    Unavailable { body: EphemerisBody, jd_tt: f64 },
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "kernel I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "kernel parse error: {msg}"),
            Self::Unavailable { body, jd_tt } => {
                write!(f, "ephemeris unavailable for {} at JD {jd_tt}", body.name())
            }
        }
    }
}

impl Error for EphemerisError {}

impl From<std::io::Error> for EphemerisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

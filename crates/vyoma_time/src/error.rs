//! Error types for time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or instant parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Malformed or out-of-range calendar instant.
    InvalidInput(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid time input: {msg}"),
        }
    }
}

impl Error for TimeError {}

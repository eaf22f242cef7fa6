//! Engine error taxonomy.
//!
//! Propagation policy: configuration and input errors abort the
//! snapshot call; catalog validation problems are handled at load time
//! (skip + report) and never reach the engine; ephemeris
//! unavailability degrades accuracy via the snapshot's `degraded` flag
//! and never aborts. Nothing here is fatal to the process.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vyoma_catalog::CatalogError;
use vyoma_ephemeris::EphemerisError;
use vyoma_time::TimeError;

/// Errors surfaced by the snapshot engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// Out-of-range configuration option. Never silently clamped.
    InvalidConfig(&'static str),
    /// Malformed observer or time input.
    InvalidInput(String),
    /// Catalog lookup failure.
    Catalog(CatalogError),
    /// Ephemeris failure outside the recoverable fallback path
    /// (e.g. a kernel that fails to load at construction).
    Ephemeris(EphemerisError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Catalog(e) => write!(f, "catalog error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for EngineError {}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<CatalogError> for EngineError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<EphemerisError> for EngineError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

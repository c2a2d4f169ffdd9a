//! Error types for the Galaxy3D camera
//!
//! The taxonomy is purely numeric: bad construction parameters and
//! degenerate camera frames. Out-of-range FOV is clamped, not reported.

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Construction parameters that cannot produce a usable basis
    /// (non-positive aspect ratio, image width, FOV, focus distance...)
    InvalidConfiguration(String),

    /// Look direction parallel to the up hint (or zero length), so the
    /// right vector cannot be derived
    DegenerateBasis(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::DegenerateBasis(msg) => write!(f, "Degenerate basis: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

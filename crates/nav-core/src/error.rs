//! Base error type.
//!
//! Sub-crates define their own error enums for their preconditions
//! (`IndexError`, `SelectError`, `GuideError`, `DatasetError`) and may wrap
//! `NavError` as one variant where the coordinate check is shared.

use thiserror::Error;

/// Errors for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid coordinate ({lat}, {lng}): out of WGS-84 range or not finite")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;

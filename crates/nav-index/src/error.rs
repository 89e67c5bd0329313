//! Index-subsystem error type.

use thiserror::Error;

/// Errors produced by `nav-index`.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot build an index over an empty point set")]
    EmptyPointSet,

    #[error("point {index} has invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },
}

pub type IndexResult<T> = Result<T, IndexError>;

//! Guidance-subsystem error type.

use thiserror::Error;

/// Errors produced by `nav-guide`.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("route has no coordinates")]
    EmptyGeometry,
}

pub type GuideResult<T> = Result<T, GuideError>;

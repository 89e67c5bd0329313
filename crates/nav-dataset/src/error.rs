//! Dataset-subsystem error type.

use thiserror::Error;

use nav_index::IndexError;

/// Errors produced by `nav-dataset`.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index build failed: {0}")]
    Index(#[from] IndexError),
}

pub type DatasetResult<T> = Result<T, DatasetError>;

//! Selection-subsystem error type.

use thiserror::Error;

/// Errors produced by `nav-select`.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("no candidates to select from")]
    NoCandidates,

    #[error("matrix has {durations} durations for {candidates} candidates")]
    MatrixMismatch { candidates: usize, durations: usize },

    #[error("matrix has {durations} durations for {destinations} destinations")]
    MatrixShape { destinations: usize, durations: usize },
}

pub type SelectResult<T> = Result<T, SelectError>;

//! Minimum-travel-time candidate resolution.

use nav_core::GeoPoint;

use crate::error::{SelectError, SelectResult};
use crate::matrix::TravelTimeMatrix;

/// Pick the candidate with the lowest travel duration.
///
/// Returns the index of the chosen candidate in `candidates`.  Ties resolve
/// to the lowest index.  The matrix must have been requested with
/// `candidates` as its destinations, in the same order; this function checks
/// only the counts, never the coordinates.
///
/// Pure: no side effects, no I/O.
///
/// # Errors
///
/// `NoCandidates` when `candidates` is empty; `MatrixMismatch` when the
/// matrix's duration count disagrees with the candidate count.
pub fn resolve(candidates: &[GeoPoint], matrix: &TravelTimeMatrix) -> SelectResult<usize> {
    if candidates.is_empty() {
        return Err(SelectError::NoCandidates);
    }
    if matrix.durations_secs.len() != candidates.len() {
        return Err(SelectError::MatrixMismatch {
            candidates: candidates.len(),
            durations: matrix.durations_secs.len(),
        });
    }

    // total_cmp orders NaN above every finite duration, so a defective row
    // from the service loses rather than poisoning the argmin.  Strict
    // less-than keeps the first of equal elements — the lowest-index tie rule.
    let durations = &matrix.durations_secs;
    let mut best = 0;
    for i in 1..durations.len() {
        if durations[i].total_cmp(&durations[best]).is_lt() {
            best = i;
        }
    }

    Ok(best)
}

//! One-to-many travel-time matrix, as returned by an external routing
//! service.
//!
//! The destination order is positional and must be trusted as-is: index `i`
//! in `durations_secs` is the travel time from `origin` to
//! `destinations[i]`.  Nothing here re-matches destinations by coordinate
//! value — the caller builds the matrix request in candidate order and the
//! service echoes that order back.

use nav_core::GeoPoint;

use crate::error::{SelectError, SelectResult};

/// Travel durations from one origin to an ordered set of destinations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTimeMatrix {
    /// The single origin the durations were computed from.
    pub origin: GeoPoint,

    /// Destination points, in request order.
    pub destinations: Vec<GeoPoint>,

    /// Travel time to each destination in seconds, aligned with
    /// `destinations`.
    pub durations_secs: Vec<f64>,
}

impl TravelTimeMatrix {
    /// Construct a matrix, enforcing the shape invariant
    /// `durations_secs.len() == destinations.len()`.
    ///
    /// # Errors
    ///
    /// `MatrixShape` when the two sequences disagree in length.
    pub fn new(
        origin: GeoPoint,
        destinations: Vec<GeoPoint>,
        durations_secs: Vec<f64>,
    ) -> SelectResult<Self> {
        if destinations.len() != durations_secs.len() {
            return Err(SelectError::MatrixShape {
                destinations: destinations.len(),
                durations: durations_secs.len(),
            });
        }
        Ok(Self { origin, destinations, durations_secs })
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

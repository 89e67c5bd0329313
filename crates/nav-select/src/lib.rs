//! `nav-select` — resolve the single best destination by real travel time.
//!
//! Proximity queries return candidates by straight-line closeness; the road
//! network can disagree.  A one-to-many travel-time matrix from an external
//! routing service settles it, and [`resolve`] picks the minimum-duration
//! candidate from that matrix.  This crate never performs the matrix request
//! itself — acquiring the matrix (an HTTP round trip) is the caller's
//! concern.
//!
//! # Crate layout
//!
//! | Module       | Contents                          |
//! |--------------|-----------------------------------|
//! | [`matrix`]   | `TravelTimeMatrix`                |
//! | [`selector`] | `resolve`                         |
//! | [`error`]    | `SelectError`, `SelectResult<T>`  |

pub mod error;
pub mod matrix;
pub mod selector;


pub use error::{SelectError, SelectResult};
pub use matrix::TravelTimeMatrix;
pub use selector::resolve;

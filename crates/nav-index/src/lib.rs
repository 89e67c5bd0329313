//! `nav-index` — build-once spatial index over facility coordinates.
//!
//! # Crate layout
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`index`] | `FacilityIndex` (R-tree, K-nearest, radius) |
//! | [`error`] | `IndexError`, `IndexResult<T>`              |

pub mod error;
pub mod index;

#[cfg(test)]
mod tests;

pub use error::{IndexError, IndexResult};
pub use index::FacilityIndex;

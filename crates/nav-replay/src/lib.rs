//! `nav-replay` — replay a recorded position track at a fixed cadence.
//!
//! Equivalent in contract to a live position stream, but fully deterministic
//! and replayable: each recorded position is delivered exactly once, in
//! order, one interval apart.  Exists so the navigation core can be
//! exercised and demoed without real sensors.
//!
//! # Crate layout
//!
//! | Module     | Contents                   |
//! |------------|----------------------------|
//! | [`driver`] | `replay`, `ReplayHandle`   |

pub mod driver;


pub use driver::{replay, ReplayHandle};

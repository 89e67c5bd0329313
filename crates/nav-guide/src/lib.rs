//! `nav-guide` — turn-by-turn guidance over a routed path.
//!
//! A [`Route`] is what the external routing service returns: a dense
//! coordinate path plus sparse maneuver [`Instruction`]s anchored to
//! positions along it.  A [`Navigator`] consumes one route and advances
//! monotonically through its instructions as live (or replayed) positions
//! arrive, handing back at most one [`AnnounceEvent`] per update.  Speaking
//! the event is the caller's job — this crate decides *what* and *when*,
//! never *how*.
//!
//! # Crate layout
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`route`]     | `Route`, `Instruction`                         |
//! | [`navigator`] | `Navigator`, `GuidancePhase`, `AnnounceEvent`  |
//! | [`error`]     | `GuideError`, `GuideResult<T>`                 |

pub mod error;
pub mod navigator;
pub mod route;


pub use error::{GuideError, GuideResult};
pub use navigator::{AnnounceEvent, GuidancePhase, Navigator, PROXIMITY_THRESHOLD_M};
pub use route::{Instruction, Route};

//! Route and instruction value types.
//!
//! These mirror the routing service's response contract: a dense coordinate
//! path and a sparse list of maneuver instructions, each referencing an index
//! into the path.  Fields are `pub` — routes arrive from outside and are
//! consumed read-only by the navigator.

use nav_core::GeoPoint;

/// One maneuver along a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Index into [`Route::coordinates`] of the point at which this
    /// instruction should be announced.
    pub anchor: usize,

    /// Guidance text, passed verbatim to the speech sink.
    pub text: String,
}

impl Instruction {
    pub fn new(anchor: usize, text: impl Into<String>) -> Self {
        Self { anchor, text: text.into() }
    }
}

/// A routed path: geometry plus ordered maneuver instructions.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Dense path geometry from origin to destination.
    pub coordinates: Vec<GeoPoint>,

    /// Maneuver points, ordered along the path.
    pub instructions: Vec<Instruction>,
}

impl Route {
    pub fn new(coordinates: Vec<GeoPoint>, instructions: Vec<Instruction>) -> Self {
        Self { coordinates, instructions }
    }

    /// The point at which `instruction` should be announced.
    ///
    /// An out-of-range anchor falls back to the first coordinate instead of
    /// failing — routing services have been observed emitting dangling
    /// anchors, and guidance must keep running when they do.  Returns `None`
    /// only when the route has no coordinates at all.
    pub fn anchor_point(&self, instruction: &Instruction) -> Option<GeoPoint> {
        self.coordinates
            .get(instruction.anchor)
            .or_else(|| self.coordinates.first())
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

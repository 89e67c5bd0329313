//! The navigator state machine.
//!
//! # State model
//!
//! A `Navigator` owns one [`Route`] and a cursor into its instruction list.
//! The cursor starts at 0 and only ever moves forward; the session is
//! `Completed` once it reaches `instructions.len()`.  Each position update
//! is processed to completion before the next — the host delivers positions
//! one at a time per session, so the navigator needs no locking.
//!
//! The original live-position stream was callback-driven with a shared
//! current-instruction pointer; here the pointer is a private field on an
//! owned value and [`Navigator::update`] is the only transition.  Multiple
//! sessions are just multiple navigators.

use nav_core::GeoPoint;

use crate::error::{GuideError, GuideResult};
use crate::route::{Instruction, Route};

/// Distance at which an upcoming instruction is announced, metres.
///
/// Matched to pedestrian cadence: close enough that the maneuver is in
/// sight, far enough that the utterance finishes before the turn.
pub const PROXIMITY_THRESHOLD_M: f64 = 15.0;

// ── Events ────────────────────────────────────────────────────────────────────

/// One unit of guidance output: "utter this text now".
///
/// Dispatch to the speech sink is the caller's responsibility; one event is
/// one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnounceEvent {
    /// Index of the announced instruction in the route's instruction list.
    pub instruction: usize,

    /// The instruction text to speak.
    pub text: String,
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where the session is in its lifecycle.  There is no way back from
/// `Completed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuidancePhase {
    /// Positions are being consumed and instructions announced.
    Tracking,
    /// Every instruction has been announced; updates are no-ops.
    Completed,
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Stateful turn-by-turn tracker for a single guidance session.
pub struct Navigator {
    route: Route,
    cursor: usize,
    last_position: GeoPoint,
    phase: GuidancePhase,
}

impl Navigator {
    /// Begin a guidance session on `route` from `initial_position`.
    ///
    /// A route with no instructions completes immediately (nothing to
    /// announce, but the geometry is still a valid trip).
    ///
    /// # Errors
    ///
    /// `EmptyGeometry` if the route has no coordinates.
    pub fn start(route: Route, initial_position: GeoPoint) -> GuideResult<Self> {
        if route.is_empty() {
            return Err(GuideError::EmptyGeometry);
        }
        let phase = if route.instructions.is_empty() {
            GuidancePhase::Completed
        } else {
            GuidancePhase::Tracking
        };
        Ok(Self { route, cursor: 0, last_position: initial_position, phase })
    }

    /// Feed one live (or replayed) position into the session.
    ///
    /// Total: never fails and never performs I/O.  A garbage position (off
    /// the planet, NaN from a flaky sensor) simply triggers nothing — sensor
    /// noise must not take down a live session.
    ///
    /// At most one instruction is announced per call even if the position is
    /// within range of several anchors in a row; advancing one step per
    /// update keeps the announcement order deterministic and keeps spoken
    /// guidance from being skipped when positions jump.
    pub fn update(&mut self, position: GeoPoint) -> Option<AnnounceEvent> {
        self.last_position = position;

        if self.phase == GuidancePhase::Completed {
            return None;
        }

        let instruction = self.route.instructions.get(self.cursor)?;
        let anchor = self.route.anchor_point(instruction)?;

        // NaN distances fail this comparison, so invalid positions fall
        // through to "no instruction triggered".
        if position.distance_m(anchor) < PROXIMITY_THRESHOLD_M {
            let event = AnnounceEvent {
                instruction: self.cursor,
                text: instruction.text.clone(),
            };
            self.cursor += 1;
            if self.cursor == self.route.instructions.len() {
                self.phase = GuidancePhase::Completed;
            }
            return Some(event);
        }

        None
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Index of the next instruction to announce.  Equals the instruction
    /// count once the session is complete.  Never decreases.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> GuidancePhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == GuidancePhase::Completed
    }

    /// The most recent position fed to [`update`](Self::update), or the
    /// starting position if none has arrived yet.
    pub fn last_position(&self) -> GeoPoint {
        self.last_position
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The instruction the session is currently tracking toward, if any.
    pub fn next_instruction(&self) -> Option<&Instruction> {
        match self.phase {
            GuidancePhase::Completed => None,
            GuidancePhase::Tracking => self.route.instructions.get(self.cursor),
        }
    }

    /// Instructions not yet announced.
    pub fn remaining(&self) -> usize {
        self.route.instructions.len() - self.cursor
    }

    /// Great-circle distance from the last known position to the next
    /// instruction's anchor, for progress display.  `None` once complete.
    pub fn distance_to_next_anchor(&self) -> Option<f64> {
        let instruction = self.next_instruction()?;
        let anchor = self.route.anchor_point(instruction)?;
        Some(self.last_position.distance_m(anchor))
    }
}

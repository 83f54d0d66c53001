//! Pan gesture reports delivered by the host's gesture recognition system
//!
//! Reports are strictly serialized: no two `Changed` reports are ever
//! processed concurrently. Translation is cumulative from the gesture's
//! origin; velocity is instantaneous.

use crate::geometry::Vec2;

/// Lifecycle of a pan gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// Recognizer is evaluating but has not committed to a pan
    Possible,
    /// The pan was recognized; translation starts accumulating
    Began,
    /// The finger moved
    Changed,
    /// The finger lifted normally
    Ended,
    /// The system interrupted the gesture (e.g. an incoming call)
    Cancelled,
    /// The recognizer gave up on this gesture
    Failed,
}

impl PanPhase {
    /// Whether this phase terminates the gesture
    pub fn is_terminal(&self) -> bool {
        matches!(self, PanPhase::Ended | PanPhase::Cancelled | PanPhase::Failed)
    }
}

/// One pan gesture report
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    pub phase: PanPhase,
    /// Cumulative translation since the gesture began
    pub translation: Vec2,
    /// Instantaneous velocity in units per second
    pub velocity: Vec2,
}

impl PanGesture {
    pub const fn new(phase: PanPhase, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    pub const fn began() -> Self {
        Self::new(PanPhase::Began, Vec2::ZERO, Vec2::ZERO)
    }

    pub const fn changed(translation: Vec2, velocity: Vec2) -> Self {
        Self::new(PanPhase::Changed, translation, velocity)
    }

    pub const fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self::new(PanPhase::Ended, translation, velocity)
    }

    pub const fn cancelled(translation: Vec2) -> Self {
        Self::new(PanPhase::Cancelled, translation, Vec2::ZERO)
    }
}

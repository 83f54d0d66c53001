//! Transition error types

use thiserror::Error;

/// Errors surfaced when wiring up a transition.
///
/// Missing *required* data mid-transition is a contract violation between
/// screens and panics instead; see the individual animators' `# Panics`
/// sections. Missing *optional* data never errors - it degrades to a
/// fallback frame.
#[derive(Error, Debug)]
pub enum TransitionError {
    /// A screen does not implement the participant contract
    #[error("participant cannot join the transition: {0}")]
    ParticipantNotCapable(&'static str),

    /// An interaction was requested but no interactive transition is live
    #[error("no interactive transition is active")]
    NoActiveTransition,
}

/// Result type for transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;

//! Swoop Animation System
//!
//! Timing primitives for gesture-driven transitions.
//!
//! # Features
//!
//! - **Timing Curves**: closed-form damped-spring timing that settles exactly
//!   at its duration, plus a plain ease-in for animations that accelerate
//!   offscreen
//! - **Animation Tracks**: reversible, scrubbable animations over shared view
//!   state
//! - **Re-timing**: `continue_with_factor` stretches a track's remaining
//!   distance so two tracks finish in the same wall-clock instant
//! - **Track Scheduler**: single-threaded registry ticked by the host event
//!   loop, with a one-shot deferred-task queue for post-layout work

pub mod scheduler;
pub mod spring;
pub mod track;

pub use scheduler::{DeferredFn, SchedulerHandle, TrackId};
pub use spring::{SpringCurve, TimingCurve};
pub use track::{AnimationTrack, ApplyFn, CompletionFn, TrackEnd};

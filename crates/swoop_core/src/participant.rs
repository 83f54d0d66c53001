//! Contracts between the transition engine and its collaborators
//!
//! Two screens participate in every photo transition. Each implements
//! [`TransitionParticipant`] to vend the reference image and its on-screen
//! frame, and to hide its own copy of the image while the flying overlay is
//! animating. The host navigation layer implements [`TransitionContext`] to
//! supply the views and receive progress/completion signals.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::geometry::Rect;
use crate::view::{ReferenceImage, SharedContainer, SharedView};

/// A screen-side object participating in a photo transition.
pub trait TransitionParticipant {
    /// Called just-before the transition animation begins.
    /// Participants hide their own image view here to avoid double-rendering.
    fn transition_will_start(&mut self);

    /// Called right-after the transition animation ends.
    fn transition_did_end(&mut self);

    /// The image the flying overlay should display.
    fn reference_image(&self) -> Option<ReferenceImage>;

    /// The on-screen rect where that image currently sits, if laid out.
    fn reference_frame(&self) -> Option<Rect>;
}

/// Strong handle to a participant (the from-side of a transition)
pub type SharedParticipant = Rc<RefCell<dyn TransitionParticipant>>;

/// Non-owning handle to a participant (the to-side may disappear)
pub type WeakParticipant = Weak<RefCell<dyn TransitionParticipant>>;

/// The host navigation layer's side of one transition.
///
/// Borrowed by the engine for the duration of a single transition and
/// released as soon as the transition finishes; implementations must not be
/// retained past that point.
pub trait TransitionContext {
    /// The view of the screen being navigated away from
    fn from_view(&self) -> SharedView;

    /// The view of the destination screen, when the host provides one
    fn to_view(&self) -> Option<SharedView>;

    /// The surface the transition animates inside
    fn container(&self) -> SharedContainer;

    /// Whether the host marked this transition as cancelled
    fn was_cancelled(&self) -> bool;

    /// Report interactive progress while a drag is in flight
    fn update_interactive(&mut self, fraction: f32);

    /// The interactive transition resolved by committing
    fn finish_interactive(&mut self);

    /// The interactive transition resolved by reversing
    fn cancel_interactive(&mut self);

    /// The transition is over; `did_finish` is false when it was cancelled
    fn complete_transition(&mut self, did_finish: bool);
}

/// Shared handle to the host context for one transition
pub type SharedContext = Rc<RefCell<dyn TransitionContext>>;

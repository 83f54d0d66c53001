//! Swoop Transition Engine
//!
//! Custom, interactive screen-transition control logic: a photo-detail
//! push/pop pair with gesture-driven drag-to-dismiss, and a modal card
//! present/dismiss.
//!
//! The engine decides *what* animates, *when*, and *whether it commits*;
//! rendering belongs to the host. Screens participate through
//! [`swoop_core::TransitionParticipant`], the navigation layer through
//! [`swoop_core::TransitionContext`], and the host event loop drives
//! everything by ticking a [`swoop_animation::SchedulerHandle`].
//!
//! - `progress`: pure gesture-delta -> fraction/scale mapping
//! - `fitting`: aspect-fit placement for the flying image
//! - `push` / `pop`: the one-shot spring animators
//! - `modal`: the card-style present/dismiss animator
//! - `interactive`: the drag-driven dismissal state machine
//! - `coordinator`: picks the animator per navigation operation

pub mod coordinator;
pub mod fitting;
pub mod interactive;
pub mod modal;
pub mod pop;
pub mod progress;
pub mod push;

pub use coordinator::{Animator, NavigationOperation, TransitionCoordinator};
pub use fitting::{aspect_fit, offscreen_below, offscreen_presentation_frame};
pub use interactive::{should_commit, InteractiveDismissTransition, TransitionPhase};
pub use modal::{ModalTransition, ModalTransitionKind};
pub use pop::PopTransition;
pub use progress::{progress, scale_and_shift, visual_scale, MAX_DRAG_DISTANCE, MIN_IMAGE_SCALE};
pub use push::PushTransition;

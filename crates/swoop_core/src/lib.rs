//! Swoop Core
//!
//! Foundational types for the swoop transition engine:
//!
//! - **Geometry**: points, sizes, rects, and the overlay transform
//! - **View Model**: shared view state the host renderer reads each frame
//! - **Contracts**: participant and host-context traits for one transition
//! - **Gestures**: serialized pan reports from the host recognizer
//!
//! Everything here is single-threaded by design: transitions run on the
//! UI-owning event loop, so shared state is `Rc<RefCell<..>>`, and the
//! to-side participant is held through a `Weak` handle.

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod participant;
pub mod view;

pub use error::{Result, TransitionError};
pub use geometry::{Point, Rect, Size, Transform2D, Vec2};
pub use gesture::{PanGesture, PanPhase};
pub use participant::{
    SharedContext, SharedParticipant, TransitionContext, TransitionParticipant, WeakParticipant,
};
pub use view::{
    shared_container, shared_view, Container, ImageOverlay, ReferenceImage, SharedContainer,
    SharedView, ViewState,
};

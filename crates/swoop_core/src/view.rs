//! Shared view model for transition animation
//!
//! The transition engine does not render anything itself. It mutates shared
//! view state (frames, opacity, transforms) that a host renderer reads each
//! frame. Views are `Rc<RefCell<..>>` because everything runs on the single
//! UI-owning event loop.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{Rect, Size, Transform2D};

/// A reference to an image the host can resolve to an actual texture.
///
/// The engine only needs the intrinsic size (for aspect-fit math) and an
/// opaque id so the host knows which image the overlay is standing in for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceImage {
    pub id: u64,
    pub size: Size,
}

impl ReferenceImage {
    pub const fn new(id: u64, size: Size) -> Self {
        Self { id, size }
    }
}

/// Mutable visual state of one view layer
#[derive(Clone, Debug)]
pub struct ViewState {
    pub frame: Rect,
    pub alpha: f32,
    pub transform: Transform2D,
}

impl ViewState {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            alpha: 1.0,
            transform: Transform2D::IDENTITY,
        }
    }

    /// The view's own coordinate space: its size at the origin
    pub fn bounds(&self) -> Rect {
        self.frame.size.to_rect()
    }

    /// The on-screen rect after applying the view's transform
    pub fn effective_frame(&self) -> Rect {
        self.transform.apply_to(self.frame)
    }
}

/// Shared handle to a view layer
pub type SharedView = Rc<RefCell<ViewState>>;

/// Create a new shared view with the given frame
pub fn shared_view(frame: Rect) -> SharedView {
    Rc::new(RefCell::new(ViewState::new(frame)))
}

/// The transient "flying image" that animates between the two screens.
///
/// Clones share the same underlying view and image slot, so animation
/// closures can retain the overlay while the owning transition keeps its own
/// handle.
#[derive(Clone)]
pub struct ImageOverlay {
    view: SharedView,
    image: Rc<RefCell<Option<ReferenceImage>>>,
}

impl ImageOverlay {
    pub fn new() -> Self {
        Self {
            view: shared_view(Rect::ZERO),
            image: Rc::new(RefCell::new(None)),
        }
    }

    pub fn view(&self) -> &SharedView {
        &self.view
    }

    pub fn set_frame(&self, frame: Rect) {
        self.view.borrow_mut().frame = frame;
    }

    pub fn frame(&self) -> Rect {
        self.view.borrow().frame
    }

    pub fn set_transform(&self, transform: Transform2D) {
        self.view.borrow_mut().transform = transform;
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.view.borrow_mut().alpha = alpha.clamp(0.0, 1.0);
    }

    /// On-screen rect with the current transform applied
    pub fn effective_frame(&self) -> Rect {
        self.view.borrow().effective_frame()
    }

    pub fn set_image(&self, image: Option<ReferenceImage>) {
        *self.image.borrow_mut() = image;
    }

    pub fn image(&self) -> Option<ReferenceImage> {
        *self.image.borrow()
    }

    pub fn clear_image(&self) {
        *self.image.borrow_mut() = None;
    }
}

impl Default for ImageOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// The surface a transition animates inside.
///
/// Layers are kept in z-order: later entries render above earlier ones.
/// Pushing a view that is already present moves it to the top, matching
/// re-parenting semantics on the host side.
pub struct Container {
    bounds: Rect,
    layers: Vec<SharedView>,
}

impl Container {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            layers: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Add a view above everything currently in the container
    pub fn push(&mut self, view: SharedView) {
        self.layers.retain(|v| !Rc::ptr_eq(v, &view));
        self.layers.push(view);
    }

    /// Remove a view from the container, if present
    pub fn remove(&mut self, view: &SharedView) {
        let before = self.layers.len();
        self.layers.retain(|v| !Rc::ptr_eq(v, view));
        if self.layers.len() != before {
            tracing::trace!("container: removed layer");
        }
    }

    pub fn contains(&self, view: &SharedView) -> bool {
        self.layers.iter().any(|v| Rc::ptr_eq(v, view))
    }

    /// Z-position of a view (0 = bottom), if present
    pub fn index_of(&self, view: &SharedView) -> Option<usize> {
        self.layers.iter().position(|v| Rc::ptr_eq(v, view))
    }

    pub fn layers(&self) -> &[SharedView] {
        &self.layers
    }
}

/// Shared handle to a container surface
pub type SharedContainer = Rc<RefCell<Container>>;

/// Create a new shared container with the given bounds
pub fn shared_container(bounds: Rect) -> SharedContainer {
    Rc::new(RefCell::new(Container::new(bounds)))
}

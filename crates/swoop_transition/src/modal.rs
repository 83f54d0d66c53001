//! Modal card present/dismiss
//!
//! Slides a card up from below the bottom edge while a backdrop tint fades
//! in; dismissal runs the same two states in the other direction. Unlike push
//! and pop there is no flying image - the card and backdrop are the whole
//! show - and the two directions time differently: presentation lands on a
//! gentle spring, dismissal accelerates offscreen on an ease-in.

use std::rc::Rc;

use swoop_animation::{AnimationTrack, SchedulerHandle, SpringCurve, TimingCurve, TrackEnd};
use swoop_core::{SharedContext, SharedView, Transform2D};

const PRESENT_DURATION: f32 = 0.44;
const PRESENT_DAMPING: f32 = 0.82;
const DISMISS_DURATION: f32 = 0.32;

/// Extra travel past the bottom edge, so the card's rounded top corners
/// clear the screen when parked offscreen
const CARD_PEEK: f32 = 20.0;

/// Which way the modal is moving
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransitionKind {
    Present,
    Dismiss,
}

/// Animates presenting or dismissing a modal card.
pub struct ModalTransition {
    kind: ModalTransitionKind,
    card: SharedView,
}

impl ModalTransition {
    pub fn new(kind: ModalTransitionKind, card: SharedView) -> Self {
        Self { kind, card }
    }

    pub fn kind(&self) -> ModalTransitionKind {
        self.kind
    }

    pub fn duration(&self) -> f32 {
        match self.kind {
            ModalTransitionKind::Present => PRESENT_DURATION,
            ModalTransitionKind::Dismiss => DISMISS_DURATION,
        }
    }

    /// Run the modal animation on the given scheduler.
    ///
    /// # Panics
    ///
    /// Panics when presenting without a destination view - the backdrop to
    /// tint is the modal screen itself, so a present with nothing to present
    /// is a wiring bug.
    pub fn run(&mut self, context: &SharedContext, scheduler: &SchedulerHandle) {
        let (backdrop, container) = {
            let ctx = context.borrow();
            let backdrop = match self.kind {
                ModalTransitionKind::Present => ctx
                    .to_view()
                    .expect("modal presentation requires a destination view"),
                ModalTransitionKind::Dismiss => ctx.from_view(),
            };
            (backdrop, ctx.container())
        };

        // Offscreen means the card translated down far enough that even its
        // top edge clears the bottom of the backdrop.
        let offset =
            backdrop.borrow().frame.height() - self.card.borrow().frame.height() + CARD_PEEK;

        let kind = self.kind;
        if kind == ModalTransitionKind::Present {
            // Jump to the offscreen state without animating into it, then
            // enter the view hierarchy.
            backdrop.borrow_mut().alpha = 0.0;
            self.card.borrow_mut().transform = Transform2D::new(1.0, 0.0, offset);
            let mut container = container.borrow_mut();
            container.push(backdrop.clone());
            container.push(self.card.clone());
        }

        let card = self.card.clone();
        let tinting = backdrop.clone();
        let apply = move |f: f32| {
            let onscreen = match kind {
                ModalTransitionKind::Present => f,
                ModalTransitionKind::Dismiss => 1.0 - f,
            };
            card.borrow_mut().transform = Transform2D::new(1.0, 0.0, offset * (1.0 - onscreen));
            tinting.borrow_mut().alpha = onscreen.clamp(0.0, 1.0);
        };

        let (duration, curve) = match kind {
            ModalTransitionKind::Present => (
                PRESENT_DURATION,
                TimingCurve::from(SpringCurve::new(PRESENT_DAMPING)),
            ),
            ModalTransitionKind::Dismiss => (DISMISS_DURATION, TimingCurve::EaseIn),
        };

        let card = self.card.clone();
        let context = Rc::clone(context);
        let mut track = AnimationTrack::new(duration, curve, apply).on_complete(move |end| {
            debug_assert_eq!(end, TrackEnd::Completed);
            if kind == ModalTransitionKind::Dismiss {
                let mut container = container.borrow_mut();
                container.remove(&card);
                container.remove(&backdrop);
            }
            tracing::debug!(?kind, "modal transition complete");
            context.borrow_mut().complete_transition(true);
        });
        track.start();
        scheduler.add(track);
    }
}

//! Interactive drag-to-dismiss
//!
//! The gesture-driven state machine at the heart of the engine. A pan on the
//! detail screen starts the dismissal; every `Changed` report scrubs two
//! animation tracks (the flying image under the finger, the background fade);
//! the terminal gesture report resolves the transition into a committed or
//! reversed spring animation, with both tracks re-timed to finish in the same
//! instant.
//!
//! Phases: `Idle -> Tracking -> Resolving -> Finished`. `Finished` is
//! absorbing - gesture reports arriving after resolution completes are
//! ignored - and a new gesture cannot start while a resolution is in flight.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swoop_animation::{AnimationTrack, SchedulerHandle, SpringCurve, TrackId};
use swoop_core::{
    ImageOverlay, PanGesture, PanPhase, Rect, SharedContext, SharedParticipant, Transform2D,
    WeakParticipant,
};

use crate::fitting;
use crate::progress::{progress, visual_scale};

const COMMIT_DURATION: f32 = 0.37;
const COMMIT_DAMPING: f32 = 0.90;
const CANCEL_DURATION: f32 = 0.45;
const CANCEL_DAMPING: f32 = 0.75;

/// Progress below this never commits, whatever the velocity
const SIGNIFICANT_PROGRESS: f32 = 0.1;

/// The background track's creation-time duration is arbitrary; it is only
/// ever scrubbed, then re-timed at resolution.
const BACKGROUND_PLACEHOLDER_DURATION: f32 = 1.0;

/// Alpha the overlay fades to when sliding the whole screen away
const SLIDE_OVERLAY_ALPHA: f32 = 0.4;

/// Lifecycle of one interactive dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Created but not yet driving a transition
    Idle,
    /// A drag is in flight; progress scrubs the tracks
    Tracking,
    /// The gesture ended; tracks are animating to their resolved end
    Resolving {
        /// Whether the resolution reverses back to the start
        cancelled: bool,
    },
    /// Terminal. Further gesture reports are no-ops.
    Finished,
}

/// Decide whether an ended gesture commits the dismissal.
///
/// The finger must be moving downward *and* have dragged past the
/// significant-progress threshold. Any upward or zero velocity cancels,
/// regardless of how far the drag got - ambiguous input favors cancel.
pub fn should_commit(velocity_y: f32, fraction: f32) -> bool {
    velocity_y > 0.0 && fraction > SIGNIFICANT_PROGRESS
}

/// Gesture-driven dismissal of the photo-detail screen.
pub struct InteractiveDismissTransition {
    from_participant: SharedParticipant,
    to_participant: Option<WeakParticipant>,
    scheduler: SchedulerHandle,
    overlay: ImageOverlay,

    /// Shared with resolution completions, which flip it to `Finished`
    phase: Rc<Cell<TransitionPhase>>,
    /// Borrowed host context, cached for the transition and released at the
    /// `Finished` flip
    context: Rc<RefCell<Option<SharedContext>>>,

    from_frame: Option<Rect>,
    placeholder_frame: Option<Rect>,
    background: Option<TrackId>,
}

impl InteractiveDismissTransition {
    pub fn new(
        from_participant: SharedParticipant,
        to_participant: Option<SharedParticipant>,
        scheduler: SchedulerHandle,
    ) -> Self {
        Self {
            from_participant,
            to_participant: to_participant.map(|p| Rc::downgrade(&p)),
            scheduler,
            overlay: ImageOverlay::new(),
            phase: Rc::new(Cell::new(TransitionPhase::Idle)),
            context: Rc::new(RefCell::new(None)),
            from_frame: None,
            placeholder_frame: None,
            background: None,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase.get()
    }

    pub fn is_finished(&self) -> bool {
        self.phase.get() == TransitionPhase::Finished
    }

    /// The flying-image overlay, for hosts that want to render it
    pub fn overlay(&self) -> &ImageOverlay {
        &self.overlay
    }

    fn to_upgraded(&self) -> Option<SharedParticipant> {
        self.to_participant.as_ref().and_then(|weak| weak.upgrade())
    }

    /// Take over the transition. Called once by the host when the
    /// interactive pop begins; moves the machine from `Idle` to `Tracking`.
    ///
    /// # Panics
    ///
    /// Panics if the detail screen cannot supply its reference image or
    /// frame. That is a wiring bug between screens, not a recoverable
    /// runtime condition.
    pub fn begin(&mut self, context: SharedContext) {
        if self.phase.get() != TransitionPhase::Idle {
            tracing::warn!(phase = ?self.phase.get(), "begin called on a live transition");
            return;
        }

        let (from_view, to_view, container) = {
            let ctx = context.borrow();
            (ctx.from_view(), ctx.to_view(), ctx.container())
        };

        let (image, from_frame) = {
            let from = self.from_participant.borrow();
            (
                from.reference_image().expect(
                    "interactive dismissal requires the detail screen to supply its reference image",
                ),
                from.reference_frame().expect(
                    "interactive dismissal requires the detail screen to supply its image frame",
                ),
            )
        };

        self.from_frame = Some(from_frame);

        // Where the image lands if the destination never supplies a real
        // frame: just off the bottom of the screen, at its current size.
        // A better frame is re-queried at resolution time.
        self.placeholder_frame = Some(fitting::offscreen_below(
            from_frame.size(),
            from_view.borrow().frame.height(),
        ));

        {
            let mut container = container.borrow_mut();
            container.push(from_view.clone());
            if let Some(to_view) = to_view {
                container.push(to_view);
            }
            container.push(self.overlay.view().clone());
        }

        self.overlay.set_image(Some(image));
        self.overlay.set_frame(from_frame);

        // The background fade. With a participating destination this is a
        // plain fade-out of the detail screen; without one the whole screen
        // slides off to the right while the overlay dims.
        let slide_mode = self.to_upgraded().is_none();
        let background = if slide_mode {
            let sliding = from_view.clone();
            let overlay = self.overlay.clone();
            let start_x = from_view.borrow().frame.x();
            let end_x = container.borrow().bounds().max_x();
            AnimationTrack::new(
                BACKGROUND_PLACEHOLDER_DURATION,
                SpringCurve::scrubbing(),
                move |f| {
                    sliding.borrow_mut().frame.origin.x = start_x + (end_x - start_x) * f;
                    overlay.set_alpha(1.0 - (1.0 - SLIDE_OVERLAY_ALPHA) * f);
                },
            )
        } else {
            let fading = from_view.clone();
            AnimationTrack::new(
                BACKGROUND_PLACEHOLDER_DURATION,
                SpringCurve::scrubbing(),
                move |f| fading.borrow_mut().alpha = (1.0 - f).clamp(0.0, 1.0),
            )
        };
        self.background = Some(self.scheduler.add(background));

        self.from_participant.borrow_mut().transition_will_start();
        if let Some(to) = self.to_upgraded() {
            to.borrow_mut().transition_will_start();
        }

        *self.context.borrow_mut() = Some(context);
        self.phase.set(TransitionPhase::Tracking);
        tracing::debug!(slide_mode, "interactive dismissal tracking");
    }

    /// Feed one pan report into the state machine.
    ///
    /// Ignored unless the machine is `Tracking`: reports before `begin` can
    /// never resolve anything, and reports after resolution starts are
    /// stale input from a gesture that already ended.
    pub fn update(&mut self, gesture: PanGesture) {
        if self.phase.get() != TransitionPhase::Tracking {
            tracing::trace!(phase = ?self.phase.get(), "dropping gesture report");
            return;
        }

        match gesture.phase {
            PanPhase::Possible | PanPhase::Began => {}
            PanPhase::Cancelled | PanPhase::Failed => self.resolve(true),
            PanPhase::Changed => {
                let fraction = progress(gesture.translation.y);
                let scale = visual_scale(fraction);

                // Shrink about the center, then follow the finger.
                self.overlay.set_transform(Transform2D::new(
                    scale,
                    gesture.translation.x,
                    gesture.translation.y,
                ));

                let context = self.context.borrow().clone();
                if let Some(context) = context {
                    context.borrow_mut().update_interactive(fraction);
                }

                if let Some(background) = self.background {
                    self.scheduler.with(background, |t| t.set_fraction(fraction));
                }
            }
            PanPhase::Ended => {
                let fraction = progress(gesture.translation.y);
                let commit = should_commit(gesture.velocity.y, fraction);
                self.resolve(!commit);
            }
        }
    }

    /// Animate to the resolved end state and wrap the transition up.
    fn resolve(&mut self, cancelled: bool) {
        self.phase.set(TransitionPhase::Resolving { cancelled });

        let background = self
            .background
            .expect("resolving a transition that never began");
        self.scheduler.with(background, |t| t.set_reversed(cancelled));

        let (duration, damping) = if cancelled {
            (CANCEL_DURATION, CANCEL_DAMPING)
        } else {
            (COMMIT_DURATION, COMMIT_DAMPING)
        };

        // Ask the destination for its frame *now*, not at drag-start: if the
        // device rotated mid-drag, the frame captured earlier is stale.
        let target = if cancelled {
            self.from_frame.expect("resolving a transition that never began")
        } else {
            self.to_upgraded()
                .and_then(|to| to.borrow().reference_frame())
                .unwrap_or_else(|| {
                    tracing::debug!("destination frame unavailable, committing to placeholder");
                    self.placeholder_frame
                        .expect("resolving a transition that never began")
                })
        };

        // Fold the drag transform into the frame, then animate the frame.
        let start = self.overlay.effective_frame();
        self.overlay.set_transform(Transform2D::IDENTITY);
        self.overlay.set_frame(start);

        let animating = self.overlay.clone();
        let apply = move |f: f32| animating.set_frame(start.lerp(&target, f));

        let context = self
            .context
            .borrow()
            .clone()
            .expect("resolving a transition that never began");
        let container = context.borrow().container();
        let overlay = self.overlay.clone();
        let from = Rc::clone(&self.from_participant);
        let to = self.to_participant.clone();
        let phase = Rc::clone(&self.phase);
        let context_slot = Rc::clone(&self.context);

        let mut foreground = AnimationTrack::new(duration, SpringCurve::new(damping), apply)
            .on_complete(move |_| {
                container.borrow_mut().remove(overlay.view());
                overlay.clear_image();

                if let Some(to) = to.as_ref().and_then(|weak| weak.upgrade()) {
                    to.borrow_mut().transition_did_end();
                }
                from.borrow_mut().transition_did_end();

                // Release the borrowed context as part of finishing.
                if let Some(context) = context_slot.borrow_mut().take() {
                    let mut context = context.borrow_mut();
                    if cancelled {
                        context.cancel_interactive();
                    } else {
                        context.finish_interactive();
                    }
                    context.complete_transition(!cancelled);
                }

                phase.set(TransitionPhase::Finished);
            });
        foreground.start();
        self.scheduler.add(foreground);

        // Stretch or compress the background's remaining distance so it
        // lands in the same wall-clock instant as the foreground.
        let background_duration = self
            .scheduler
            .with(background, |t| t.duration())
            .unwrap_or(duration);
        let factor = duration / background_duration;
        self.scheduler
            .with(background, |t| t.continue_with_factor(factor));

        tracing::debug!(cancelled, duration, factor, "interactive dismissal resolving");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_requires_downward_velocity_and_significant_progress() {
        assert!(should_commit(5.0, 0.5));
        assert!(!should_commit(-5.0, 0.9));
        assert!(!should_commit(5.0, 0.05));
        assert!(!should_commit(0.0, 0.5));
    }

    #[test]
    fn commit_threshold_is_exclusive() {
        assert!(!should_commit(1.0, SIGNIFICANT_PROGRESS));
        assert!(should_commit(1.0, SIGNIFICANT_PROGRESS + 1e-4));
    }
}

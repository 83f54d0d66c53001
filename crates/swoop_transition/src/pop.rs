//! Non-interactive pop animation
//!
//! Flies the image from the detail screen back to its cell on the source
//! screen while the detail screen fades out.
//!
//! The destination frame has a timing hazard: if the device rotated while
//! the detail screen was up, the source screen's layout hasn't settled when
//! the pop begins, so the frame captured at start may be stale. The animator
//! re-queries the destination on the next scheduler tick - after the host
//! has had a layout pass - and retargets the running track.

use std::cell::Cell;
use std::rc::Rc;

use swoop_animation::{AnimationTrack, SchedulerHandle, SpringCurve};
use swoop_core::{ImageOverlay, SharedContext, SharedParticipant};

use crate::fitting;

const POP_DURATION: f32 = 0.38;
const POP_DAMPING: f32 = 0.90;

/// Animates dismissing the photo-detail screen without a gesture.
pub struct PopTransition {
    other: SharedParticipant,
    detail: SharedParticipant,
    overlay: ImageOverlay,
}

impl PopTransition {
    pub fn new(other: SharedParticipant, detail: SharedParticipant) -> Self {
        Self {
            other,
            detail,
            overlay: ImageOverlay::new(),
        }
    }

    pub fn duration(&self) -> f32 {
        POP_DURATION
    }

    /// Run the pop animation on the given scheduler.
    ///
    /// # Panics
    ///
    /// Panics if the detail screen cannot supply its image frame - the pop
    /// cannot start without knowing where the image currently sits.
    pub fn run(&mut self, context: &SharedContext, scheduler: &SchedulerHandle) {
        let (from_view, to_view, container) = {
            let ctx = context.borrow();
            (ctx.from_view(), ctx.to_view(), ctx.container())
        };

        let start = self
            .detail
            .borrow()
            .reference_frame()
            .expect("pop transition requires the detail screen to supply its image frame");
        self.overlay.set_image(self.detail.borrow().reference_image());
        self.overlay.set_frame(start);

        let container_height = container.borrow().bounds().height();

        {
            let mut container = container.borrow_mut();
            if let Some(to_view) = to_view {
                container.push(to_view);
            }
            container.push(from_view.clone());
            container.push(self.overlay.view().clone());
        }

        self.other.borrow_mut().transition_will_start();
        self.detail.borrow_mut().transition_will_start();

        // Retargetable end frame: the apply closure reads it every tick, so
        // the deferred re-query below can swap it while the track runs.
        let end = Rc::new(Cell::new(
            self.other
                .borrow()
                .reference_frame()
                .unwrap_or_else(|| fitting::offscreen_below(start.size(), container_height)),
        ));

        let overlay = self.overlay.clone();
        let fading = from_view.clone();
        let end_in = end.clone();
        let apply = move |f: f32| {
            overlay.set_frame(start.lerp(&end_in.get(), f));
            fading.borrow_mut().alpha = (1.0 - f).clamp(0.0, 1.0);
        };

        let overlay = self.overlay.clone();
        let context = Rc::clone(context);
        let other = Rc::clone(&self.other);
        let detail = Rc::clone(&self.detail);
        let mut track = AnimationTrack::new(POP_DURATION, SpringCurve::new(POP_DAMPING), apply)
            .on_complete(move |_| {
                container.borrow_mut().remove(overlay.view());
                overlay.clear_image();

                let did_finish = !context.borrow().was_cancelled();
                context.borrow_mut().complete_transition(did_finish);

                other.borrow_mut().transition_did_end();
                detail.borrow_mut().transition_did_end();
            });
        track.start();
        scheduler.add(track);

        // Re-query once the destination has re-laid-out. The fallback frame
        // stays in place if it still can't supply one.
        let requery = Rc::clone(&self.other);
        scheduler.defer(move || {
            if let Some(frame) = requery.borrow().reference_frame() {
                end.set(frame);
            } else {
                tracing::debug!("pop: destination frame still unavailable after layout");
            }
        });
    }
}

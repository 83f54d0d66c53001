//! Non-interactive push animation
//!
//! Flies the tapped image from its spot on the source screen into its
//! aspect-fit resting place on the detail screen, cross-fading the detail
//! screen in underneath it. Runs exactly once with fixed spring timing.

use std::rc::Rc;

use swoop_animation::{AnimationTrack, SchedulerHandle, SpringCurve};
use swoop_core::{ImageOverlay, SharedContext, SharedParticipant};

use crate::fitting;

const PUSH_DURATION: f32 = 0.38;
const PUSH_DAMPING: f32 = 0.95;

/// Animates presenting the photo-detail screen.
pub struct PushTransition {
    from: SharedParticipant,
    detail: SharedParticipant,
    overlay: ImageOverlay,
}

impl PushTransition {
    pub fn new(from: SharedParticipant, detail: SharedParticipant) -> Self {
        Self {
            from,
            detail,
            overlay: ImageOverlay::new(),
        }
    }

    pub fn duration(&self) -> f32 {
        PUSH_DURATION
    }

    /// Run the push animation on the given scheduler.
    ///
    /// # Panics
    ///
    /// Panics if the source participant cannot supply a reference image, or
    /// the context has no destination view. Both indicate a wiring bug
    /// between the screens, not a runtime condition.
    pub fn run(&mut self, context: &SharedContext, scheduler: &SchedulerHandle) {
        let (from_view, to_view, container) = {
            let ctx = context.borrow();
            (ctx.from_view(), ctx.to_view(), ctx.container())
        };
        let to_view = to_view.expect("push transition requires a destination view");

        let image = self
            .from
            .borrow()
            .reference_image()
            .expect("push transition requires the source screen to supply a reference image");
        self.overlay.set_image(Some(image));

        let to_bounds = to_view.borrow().bounds();

        // If the source screen can't tell us where the image sits, start it
        // from below the bottom edge. In practice this almost never happens.
        let start = self.from.borrow().reference_frame().unwrap_or_else(|| {
            tracing::debug!("push: no source frame, presenting from offscreen");
            fitting::offscreen_presentation_frame(image.size, to_bounds)
        });

        // The detail screen isn't laid out yet, so compute its resting frame
        // ourselves: the image aspect-fit inside the destination bounds.
        let end = fitting::aspect_fit(image.size, to_bounds);

        self.overlay.set_frame(start);
        to_view.borrow_mut().alpha = 0.0;

        {
            let mut container = container.borrow_mut();
            container.push(from_view.clone());
            container.push(to_view.clone());
            container.push(self.overlay.view().clone());
        }

        // Participants hide their own image views here.
        self.from.borrow_mut().transition_will_start();
        self.detail.borrow_mut().transition_will_start();

        let overlay = self.overlay.clone();
        let fading = to_view.clone();
        let apply = move |f: f32| {
            overlay.set_frame(start.lerp(&end, f));
            fading.borrow_mut().alpha = f.clamp(0.0, 1.0);
        };

        let overlay = self.overlay.clone();
        let context = Rc::clone(context);
        let from = Rc::clone(&self.from);
        let detail = Rc::clone(&self.detail);
        let mut track = AnimationTrack::new(PUSH_DURATION, SpringCurve::new(PUSH_DAMPING), apply)
            .on_complete(move |_| {
                container.borrow_mut().remove(overlay.view());
                overlay.clear_image();

                let did_finish = !context.borrow().was_cancelled();
                context.borrow_mut().complete_transition(did_finish);

                from.borrow_mut().transition_did_end();
                detail.borrow_mut().transition_did_end();
            });
        track.start();
        scheduler.add(track);
    }
}

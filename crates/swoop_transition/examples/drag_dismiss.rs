//! Simulated drag-to-dismiss, printed to the terminal
//!
//! Stands in for a host UI: two fake screens, a fake navigation context, and
//! a scripted pan gesture. Run with `RUST_LOG=debug` to watch the state
//! machine resolve.

use std::cell::RefCell;
use std::rc::Rc;

use swoop_animation::SchedulerHandle;
use swoop_core::{
    shared_container, shared_view, PanGesture, Rect, ReferenceImage, SharedContainer,
    SharedContext, SharedView, Size, TransitionContext, TransitionParticipant, Vec2,
};
use swoop_transition::{Animator, NavigationOperation, TransitionCoordinator};

struct Screen {
    name: &'static str,
    image: Option<ReferenceImage>,
    frame: Option<Rect>,
}

impl TransitionParticipant for Screen {
    fn transition_will_start(&mut self) {
        println!("[{}] hiding my image view", self.name);
    }

    fn transition_did_end(&mut self) {
        println!("[{}] transition over, restoring image view", self.name);
    }

    fn reference_image(&self) -> Option<ReferenceImage> {
        self.image
    }

    fn reference_frame(&self) -> Option<Rect> {
        self.frame
    }
}

struct Navigation {
    from_view: SharedView,
    to_view: SharedView,
    container: SharedContainer,
}

impl TransitionContext for Navigation {
    fn from_view(&self) -> SharedView {
        self.from_view.clone()
    }

    fn to_view(&self) -> Option<SharedView> {
        Some(self.to_view.clone())
    }

    fn container(&self) -> SharedContainer {
        self.container.clone()
    }

    fn was_cancelled(&self) -> bool {
        false
    }

    fn update_interactive(&mut self, fraction: f32) {
        println!("[nav] interactive progress {:.2}", fraction);
    }

    fn finish_interactive(&mut self) {
        println!("[nav] interactive transition finished");
    }

    fn cancel_interactive(&mut self) {
        println!("[nav] interactive transition cancelled");
    }

    fn complete_transition(&mut self, did_finish: bool) {
        println!("[nav] transition complete, did_finish={did_finish}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bounds = Rect::new(0.0, 0.0, 400.0, 800.0);
    let photo = ReferenceImage::new(1, Size::new(3000.0, 2000.0));

    let detail = Rc::new(RefCell::new(Screen {
        name: "photo-detail",
        image: Some(photo),
        frame: Some(Rect::new(0.0, 266.0, 400.0, 267.0)),
    }));
    let grid = Rc::new(RefCell::new(Screen {
        name: "photo-grid",
        image: Some(photo),
        frame: Some(Rect::new(140.0, 300.0, 120.0, 120.0)),
    }));

    let scheduler = SchedulerHandle::new();
    let mut coordinator = TransitionCoordinator::new(scheduler.clone());
    let animator = coordinator
        .animator_for(
            NavigationOperation::Pop,
            detail.clone(),
            Some(grid.clone()),
            true,
        )
        .expect("both screens participate");
    let Animator::InteractiveDismiss(transition) = animator else {
        unreachable!("interactive pops always get the interactive animator");
    };

    let navigation: SharedContext = Rc::new(RefCell::new(Navigation {
        from_view: shared_view(bounds),
        to_view: shared_view(bounds),
        container: shared_container(bounds),
    }));
    transition.borrow_mut().begin(navigation);

    // Drag down 180 units over a few frames, then release with a downward
    // flick: this commits the dismissal.
    transition.borrow_mut().update(PanGesture::began());
    for step in 1..=6 {
        let y = step as f32 * 30.0;
        transition
            .borrow_mut()
            .update(PanGesture::changed(Vec2::new(8.0, y), Vec2::new(0.0, 900.0)));
    }
    transition
        .borrow_mut()
        .update(PanGesture::ended(Vec2::new(8.0, 180.0), Vec2::new(0.0, 900.0)));

    // The host event loop would do this every frame.
    let overlay = transition.borrow().overlay().clone();
    while scheduler.tick(1.0 / 120.0) {
        let frame = overlay.frame();
        println!(
            "overlay at ({:>6.1}, {:>6.1}) {:>5.1}x{:<5.1}",
            frame.x(),
            frame.y(),
            frame.width(),
            frame.height()
        );
    }

    println!("done: phase = {:?}", transition.borrow().phase());
}

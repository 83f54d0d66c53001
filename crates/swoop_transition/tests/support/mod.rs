//! Shared mocks for transition integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use swoop_core::{
    shared_container, shared_view, Rect, ReferenceImage, SharedContainer, SharedContext,
    SharedParticipant, SharedView, Size, TransitionContext, TransitionParticipant,
};

/// A screen-side participant that records lifecycle calls.
pub struct MockParticipant {
    pub image: Option<ReferenceImage>,
    pub frame: Option<Rect>,
    pub will_start_count: usize,
    pub did_end_count: usize,
}

impl MockParticipant {
    pub fn new(image: Option<ReferenceImage>, frame: Option<Rect>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            image,
            frame,
            will_start_count: 0,
            did_end_count: 0,
        }))
    }
}

impl TransitionParticipant for MockParticipant {
    fn transition_will_start(&mut self) {
        self.will_start_count += 1;
    }

    fn transition_did_end(&mut self) {
        self.did_end_count += 1;
    }

    fn reference_image(&self) -> Option<ReferenceImage> {
        self.image
    }

    fn reference_frame(&self) -> Option<Rect> {
        self.frame
    }
}

/// Host navigation context that records every signal the engine sends.
pub struct HostContext {
    pub from_view: SharedView,
    pub to_view: Option<SharedView>,
    pub container: SharedContainer,
    pub fractions: Vec<f32>,
    pub finished_interactive: bool,
    pub cancelled_interactive: bool,
    pub completed: Option<bool>,
    pub mark_cancelled: bool,
}

impl HostContext {
    pub fn new(bounds: Rect, with_to_view: bool) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            from_view: shared_view(bounds),
            to_view: with_to_view.then(|| shared_view(bounds)),
            container: shared_container(bounds),
            fractions: Vec::new(),
            finished_interactive: false,
            cancelled_interactive: false,
            completed: None,
            mark_cancelled: false,
        }))
    }
}

impl TransitionContext for HostContext {
    fn from_view(&self) -> SharedView {
        self.from_view.clone()
    }

    fn to_view(&self) -> Option<SharedView> {
        self.to_view.clone()
    }

    fn container(&self) -> SharedContainer {
        self.container.clone()
    }

    fn was_cancelled(&self) -> bool {
        self.mark_cancelled
    }

    fn update_interactive(&mut self, fraction: f32) {
        self.fractions.push(fraction);
    }

    fn finish_interactive(&mut self) {
        self.finished_interactive = true;
    }

    fn cancel_interactive(&mut self) {
        self.cancelled_interactive = true;
    }

    fn complete_transition(&mut self, did_finish: bool) {
        self.completed = Some(did_finish);
    }
}

/// Standard 400x800 portrait container bounds
pub fn screen_bounds() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 800.0)
}

/// A square photo sitting in the middle of the detail screen
pub fn detail_frame() -> Rect {
    Rect::new(0.0, 200.0, 400.0, 400.0)
}

/// The photo's cell up in the grid
pub fn grid_frame() -> Rect {
    Rect::new(10.0, 60.0, 120.0, 120.0)
}

pub fn photo() -> ReferenceImage {
    ReferenceImage::new(42, Size::new(1000.0, 1000.0))
}

/// Coerce a concrete mock into the trait-object handle the engine takes
pub fn as_participant(mock: &Rc<RefCell<MockParticipant>>) -> SharedParticipant {
    mock.clone()
}

pub fn as_context(host: &Rc<RefCell<HostContext>>) -> SharedContext {
    host.clone()
}

/// Tick at 120fps until nothing is animating (bounded, in case of bugs)
pub fn run_to_idle(scheduler: &swoop_animation::SchedulerHandle) {
    for _ in 0..1000 {
        if !scheduler.tick(1.0 / 120.0) {
            return;
        }
    }
    panic!("scheduler never went idle");
}

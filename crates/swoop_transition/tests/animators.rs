//! Tests for the one-shot push, pop, and modal animators

mod support;

use support::*;
use swoop_animation::SchedulerHandle;
use swoop_core::{shared_view, Rect};
use swoop_transition::{
    fitting, ModalTransition, ModalTransitionKind, PopTransition, PushTransition,
};

#[test]
fn push_flies_the_image_in_and_crossfades() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(Some(photo()), Some(grid_frame()));
    let detail = MockParticipant::new(None, None);
    let host = HostContext::new(screen_bounds(), true);

    let mut push = PushTransition::new(as_participant(&grid), as_participant(&detail));
    assert!((push.duration() - 0.38).abs() < 1e-6);
    push.run(&as_context(&host), &scheduler);

    // The destination starts invisible and the overlay sits on the cell.
    assert_eq!(host.borrow().to_view.as_ref().unwrap().borrow().alpha, 0.0);
    assert_eq!(grid.borrow().will_start_count, 1);
    assert_eq!(detail.borrow().will_start_count, 1);

    let overlay = host
        .borrow()
        .container
        .borrow()
        .layers()
        .last()
        .unwrap()
        .clone();
    assert!(overlay.borrow().frame.approx_eq(&grid_frame(), 1e-3));

    run_to_idle(&scheduler);

    // A square photo aspect-fit in 400x800 rests at (0, 200, 400, 400).
    let expected = fitting::aspect_fit(photo().size, screen_bounds());
    assert!(expected.approx_eq(&Rect::new(0.0, 200.0, 400.0, 400.0), 1e-3));
    assert!(overlay.borrow().frame.approx_eq(&expected, 1e-3));

    let host = host.borrow();
    assert_eq!(host.to_view.as_ref().unwrap().borrow().alpha, 1.0);
    assert_eq!(host.completed, Some(true));
    assert_eq!(grid.borrow().did_end_count, 1);
    assert_eq!(detail.borrow().did_end_count, 1);
    // Overlay is gone from the container by the time the host hears back.
    assert_eq!(host.container.borrow().layers().len(), 2);
}

#[test]
fn push_without_a_source_frame_presents_from_offscreen() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(Some(photo()), None);
    let detail = MockParticipant::new(None, None);
    let host = HostContext::new(screen_bounds(), true);

    let mut push = PushTransition::new(as_participant(&grid), as_participant(&detail));
    push.run(&as_context(&host), &scheduler);

    // Before the first tick the overlay sits below the bottom edge.
    let overlay = host
        .borrow()
        .container
        .borrow()
        .layers()
        .last()
        .unwrap()
        .clone();
    assert!((overlay.borrow().frame.y() - 800.0).abs() < 1e-3);

    run_to_idle(&scheduler);
    assert_eq!(host.borrow().completed, Some(true));
}

#[test]
fn push_overlay_sits_above_both_screen_views() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(Some(photo()), Some(grid_frame()));
    let detail = MockParticipant::new(None, None);
    let host = HostContext::new(screen_bounds(), true);

    let mut push = PushTransition::new(as_participant(&grid), as_participant(&detail));
    push.run(&as_context(&host), &scheduler);

    let h = host.borrow();
    let container = h.container.borrow();
    assert_eq!(container.layers().len(), 3);
    assert_eq!(container.index_of(&h.from_view), Some(0));
    assert_eq!(container.index_of(h.to_view.as_ref().unwrap()), Some(1));
}

#[test]
fn push_honors_a_cancelled_context() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(Some(photo()), Some(grid_frame()));
    let detail = MockParticipant::new(None, None);
    let host = HostContext::new(screen_bounds(), true);
    host.borrow_mut().mark_cancelled = true;

    let mut push = PushTransition::new(as_participant(&grid), as_participant(&detail));
    push.run(&as_context(&host), &scheduler);
    run_to_idle(&scheduler);

    assert_eq!(host.borrow().completed, Some(false));
}

#[test]
fn pop_flies_the_image_back_to_its_cell() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(None, Some(grid_frame()));
    let detail = MockParticipant::new(Some(photo()), Some(detail_frame()));
    let host = HostContext::new(screen_bounds(), true);

    let mut pop = PopTransition::new(as_participant(&grid), as_participant(&detail));
    assert!((pop.duration() - 0.38).abs() < 1e-6);
    pop.run(&as_context(&host), &scheduler);

    let overlay = host
        .borrow()
        .container
        .borrow()
        .layers()
        .last()
        .unwrap()
        .clone();
    assert!(overlay.borrow().frame.approx_eq(&detail_frame(), 1e-3));

    run_to_idle(&scheduler);

    assert!(overlay.borrow().frame.approx_eq(&grid_frame(), 1e-3));
    let host = host.borrow();
    assert_eq!(host.from_view.borrow().alpha, 0.0);
    assert_eq!(host.completed, Some(true));
    assert_eq!(grid.borrow().did_end_count, 1);
    assert_eq!(detail.borrow().did_end_count, 1);
}

#[test]
fn pop_requeries_the_destination_after_a_layout_pass() {
    let scheduler = SchedulerHandle::new();
    // The frame captured at start is stale; layout settles before the next
    // tick and moves the cell.
    let grid = MockParticipant::new(None, Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
    let detail = MockParticipant::new(Some(photo()), Some(detail_frame()));
    let host = HostContext::new(screen_bounds(), true);

    let mut pop = PopTransition::new(as_participant(&grid), as_participant(&detail));
    pop.run(&as_context(&host), &scheduler);

    grid.borrow_mut().frame = Some(grid_frame());

    let overlay = host
        .borrow()
        .container
        .borrow()
        .layers()
        .last()
        .unwrap()
        .clone();
    run_to_idle(&scheduler);
    assert!(overlay.borrow().frame.approx_eq(&grid_frame(), 1e-3));
}

#[test]
fn pop_without_a_destination_frame_dismisses_offscreen() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(None, None);
    let detail = MockParticipant::new(Some(photo()), Some(detail_frame()));
    let host = HostContext::new(screen_bounds(), true);

    let mut pop = PopTransition::new(as_participant(&grid), as_participant(&detail));
    pop.run(&as_context(&host), &scheduler);

    let overlay = host
        .borrow()
        .container
        .borrow()
        .layers()
        .last()
        .unwrap()
        .clone();
    run_to_idle(&scheduler);

    // Same size as the detail frame, parked below the container.
    assert!(overlay
        .borrow()
        .frame
        .approx_eq(&Rect::new(0.0, 800.0, 400.0, 400.0), 1e-3));
    assert_eq!(host.borrow().completed, Some(true));
}

#[test]
#[should_panic(expected = "detail screen to supply its image frame")]
fn pop_without_a_detail_frame_is_a_contract_violation() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(None, Some(grid_frame()));
    let detail = MockParticipant::new(Some(photo()), None);
    let host = HostContext::new(screen_bounds(), true);

    let mut pop = PopTransition::new(as_participant(&grid), as_participant(&detail));
    pop.run(&as_context(&host), &scheduler);
}

#[test]
#[should_panic(expected = "source screen to supply a reference image")]
fn push_without_a_reference_image_is_a_contract_violation() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(None, Some(grid_frame()));
    let detail = MockParticipant::new(None, None);
    let host = HostContext::new(screen_bounds(), true);

    let mut push = PushTransition::new(as_participant(&grid), as_participant(&detail));
    push.run(&as_context(&host), &scheduler);
}

#[test]
#[should_panic(expected = "destination view")]
fn push_without_a_destination_view_is_a_contract_violation() {
    let scheduler = SchedulerHandle::new();
    let grid = MockParticipant::new(Some(photo()), Some(grid_frame()));
    let detail = MockParticipant::new(None, None);
    let host = HostContext::new(screen_bounds(), false);

    let mut push = PushTransition::new(as_participant(&grid), as_participant(&detail));
    push.run(&as_context(&host), &scheduler);
}

/// A 300-tall card in the 400x800 test screen, inset like a bottom sheet
fn card_frame() -> Rect {
    Rect::new(20.0, 460.0, 360.0, 300.0)
}

#[test]
fn modal_present_slides_the_card_up_under_a_tint() {
    let scheduler = SchedulerHandle::new();
    let host = HostContext::new(screen_bounds(), true);
    let card = shared_view(card_frame());

    let mut modal = ModalTransition::new(ModalTransitionKind::Present, card.clone());
    assert!((modal.duration() - 0.44).abs() < 1e-6);
    modal.run(&as_context(&host), &scheduler);

    // Before the first tick: tint clear, card parked past the bottom edge.
    {
        let h = host.borrow();
        assert_eq!(h.to_view.as_ref().unwrap().borrow().alpha, 0.0);
        let parked = card.borrow().transform.ty;
        assert!((parked - (800.0 - 300.0 + 20.0)).abs() < 1e-3);
        assert!(h.container.borrow().contains(&card));
    }

    run_to_idle(&scheduler);

    let h = host.borrow();
    assert!(card.borrow().transform.is_identity());
    assert_eq!(h.to_view.as_ref().unwrap().borrow().alpha, 1.0);
    assert_eq!(h.completed, Some(true));
    // Presentation leaves the card and backdrop in place.
    assert!(h.container.borrow().contains(&card));
}

#[test]
fn modal_dismiss_accelerates_the_card_offscreen() {
    let scheduler = SchedulerHandle::new();
    let host = HostContext::new(screen_bounds(), false);
    let card = shared_view(card_frame());
    {
        let h = host.borrow();
        let mut container = h.container.borrow_mut();
        container.push(h.from_view.clone());
        container.push(card.clone());
    }

    let mut modal = ModalTransition::new(ModalTransitionKind::Dismiss, card.clone());
    assert!((modal.duration() - 0.32).abs() < 1e-6);
    modal.run(&as_context(&host), &scheduler);
    run_to_idle(&scheduler);

    let h = host.borrow();
    assert!((card.borrow().transform.ty - 520.0).abs() < 1e-3);
    assert_eq!(h.from_view.borrow().alpha, 0.0);
    assert!(!h.container.borrow().contains(&card));
    assert!(!h.container.borrow().contains(&h.from_view));
    assert_eq!(h.completed, Some(true));
}

#[test]
#[should_panic(expected = "destination view")]
fn modal_present_without_a_destination_is_a_contract_violation() {
    let scheduler = SchedulerHandle::new();
    let host = HostContext::new(screen_bounds(), false);

    let mut modal = ModalTransition::new(ModalTransitionKind::Present, shared_view(card_frame()));
    modal.run(&as_context(&host), &scheduler);
}

//! Transition coordination
//!
//! Selects the animator for each navigation operation and owns the lifetime
//! of the currently active interactive transition. Screens never own their
//! transition controller; they look it up through a non-owning handle and
//! forward pan reports to it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swoop_animation::SchedulerHandle;
use swoop_core::{Result, SharedParticipant, TransitionError};

use crate::interactive::InteractiveDismissTransition;
use crate::pop::PopTransition;
use crate::push::PushTransition;

/// Which way the navigation stack is moving
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOperation {
    Push,
    Pop,
}

/// The animator chosen for one navigation operation.
///
/// Push and pop variants are fire-and-forget; the interactive variant is
/// shared so the detail screen can keep feeding it gesture reports while the
/// coordinator retains ownership.
pub enum Animator {
    Push(PushTransition),
    Pop(PopTransition),
    InteractiveDismiss(Rc<RefCell<InteractiveDismissTransition>>),
}

impl Animator {
    /// Nominal duration in seconds. For the interactive variant the value is
    /// advisory only - the gesture drives the timing.
    pub fn duration(&self) -> f32 {
        match self {
            Animator::Push(push) => push.duration(),
            Animator::Pop(pop) => pop.duration(),
            Animator::InteractiveDismiss(_) => 0.3,
        }
    }
}

/// Picks animators and owns the active interactive transition.
pub struct TransitionCoordinator {
    scheduler: SchedulerHandle,
    current_interactive: Option<Rc<RefCell<InteractiveDismissTransition>>>,
}

impl TransitionCoordinator {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self {
            scheduler,
            current_interactive: None,
        }
    }

    /// Choose the animator for a navigation operation involving the
    /// photo-detail screen.
    ///
    /// `detail` is the photo-detail side; `other` is the opposite screen if
    /// it participates in the transition contract. Push and non-interactive
    /// pop need a capable counterpart; the interactive dismissal degrades
    /// gracefully without one (the whole screen slides away instead of
    /// cross-fading).
    ///
    /// Whatever transition was active before is dropped wholesale.
    pub fn animator_for(
        &mut self,
        operation: NavigationOperation,
        detail: SharedParticipant,
        other: Option<SharedParticipant>,
        interactive: bool,
    ) -> Result<Animator> {
        self.current_interactive = None;

        match operation {
            NavigationOperation::Push => {
                let other = other.ok_or(TransitionError::ParticipantNotCapable(
                    "the presenting screen does not vend transition geometry",
                ))?;
                Ok(Animator::Push(PushTransition::new(other, detail)))
            }
            NavigationOperation::Pop if interactive => {
                let transition = Rc::new(RefCell::new(InteractiveDismissTransition::new(
                    detail,
                    other,
                    self.scheduler.clone(),
                )));
                self.current_interactive = Some(Rc::clone(&transition));
                Ok(Animator::InteractiveDismiss(transition))
            }
            NavigationOperation::Pop => {
                let other = other.ok_or(TransitionError::ParticipantNotCapable(
                    "the destination screen does not vend transition geometry",
                ))?;
                Ok(Animator::Pop(PopTransition::new(other, detail)))
            }
        }
    }

    /// Non-owning handle to the live interactive transition, for the detail
    /// screen to forward pan reports through.
    pub fn interaction_controller(
        &self,
    ) -> Result<Weak<RefCell<InteractiveDismissTransition>>> {
        self.current_interactive
            .as_ref()
            .map(Rc::downgrade)
            .ok_or(TransitionError::NoActiveTransition)
    }
}

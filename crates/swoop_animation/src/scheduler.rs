//! Track scheduler
//!
//! Owns all registered animation tracks and ticks them from the host event
//! loop. Single-threaded and cooperative: gesture callbacks, deferred tasks,
//! and track completions all run on the UI-owning loop, so the scheduler is a
//! cheap `Rc<RefCell<..>>` handle rather than a background thread.
//!
//! The one-shot deferred queue is the "run after the next layout pass"
//! primitive: a task pushed with [`SchedulerHandle::defer`] runs at the start
//! of the next tick, after the host has had a chance to re-layout.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::track::AnimationTrack;

new_key_type! {
    /// Handle to a registered animation track
    pub struct TrackId;
}

/// One-shot task run at the start of the next tick
pub type DeferredFn = Box<dyn FnOnce()>;

struct SchedulerInner {
    tracks: SlotMap<TrackId, AnimationTrack>,
    deferred: Vec<DeferredFn>,
}

/// Cloneable handle to the track scheduler.
///
/// Completions and deferred tasks are always invoked with the scheduler's
/// interior borrow released, so they may freely register or remove tracks.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                tracks: SlotMap::with_key(),
                deferred: Vec::new(),
            })),
        }
    }

    /// Register a track. The track keeps whatever running/paused state it
    /// was built with; paused tracks just sit and wait to be scrubbed.
    pub fn add(&self, track: AnimationTrack) -> TrackId {
        self.inner.borrow_mut().tracks.insert(track)
    }

    /// Remove a track without firing its completions
    pub fn remove(&self, id: TrackId) -> Option<AnimationTrack> {
        self.inner.borrow_mut().tracks.remove(id)
    }

    /// Mutate a registered track in place
    pub fn with<R>(&self, id: TrackId, f: impl FnOnce(&mut AnimationTrack) -> R) -> Option<R> {
        self.inner.borrow_mut().tracks.get_mut(id).map(f)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.inner.borrow().tracks.contains_key(id)
    }

    /// Schedule a one-shot task for the start of the next tick
    pub fn defer(&self, f: impl FnOnce() + 'static) {
        self.inner.borrow_mut().deferred.push(Box::new(f));
    }

    /// Whether any track is currently playing
    pub fn has_active(&self) -> bool {
        self.inner.borrow().tracks.iter().any(|(_, t)| t.is_running())
    }

    pub fn track_count(&self) -> usize {
        self.inner.borrow().tracks.len()
    }

    /// Advance all running tracks by `dt` seconds.
    ///
    /// Deferred tasks run first (they may retarget tracks before the frame's
    /// animation step), then every running track ticks. Tracks that finish
    /// are unregistered and their completions fired last, outside the borrow.
    /// Returns true while anything is still animating.
    pub fn tick(&self, dt: f32) -> bool {
        let deferred: Vec<DeferredFn> = std::mem::take(&mut self.inner.borrow_mut().deferred);
        for task in deferred {
            task();
        }

        let mut finished = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            let ids: Vec<TrackId> = inner.tracks.keys().collect();
            for id in ids {
                if let Some(track) = inner.tracks.get_mut(id) {
                    if track.tick(dt) {
                        finished.push(id);
                    }
                }
            }
        }

        for id in finished {
            let removed = self.inner.borrow_mut().tracks.remove(id);
            if let Some(mut track) = removed {
                let end = track.end_position();
                tracing::trace!(?end, "track finished");
                for completion in track.take_completions() {
                    completion(end);
                }
            }
        }

        self.has_active()
    }
}

impl Default for SchedulerHandle {
    fn default() -> Self {
        Self::new()
    }
}

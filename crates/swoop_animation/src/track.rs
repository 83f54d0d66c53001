//! Reversible, scrubbable animation tracks
//!
//! An [`AnimationTrack`] owns one visual concern (the overlay's frame, a
//! background fade) as a closure over shared view state. Tracks spend their
//! life in one of two modes:
//!
//! - **scrubbed**: paused, with the completion fraction set directly from
//!   gesture progress (`set_fraction`)
//! - **running**: playing toward their resolved end (1.0, or 0.0 when
//!   reversed) along a spring curve
//!
//! `continue_with_factor` is the primitive that keeps two tracks honest: it
//! re-times a track's *remaining* distance to play over `duration * factor`,
//! preserving the fraction already reached, so a re-timed background track
//! finishes in the same wall-clock instant as a freshly started foreground
//! track.

use smallvec::SmallVec;

use crate::spring::TimingCurve;

/// Where a track came to rest
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackEnd {
    /// Reached fraction 1.0 (played forward to completion)
    Completed,
    /// Reached fraction 0.0 (played in reverse back to the start)
    Reversed,
}

/// Closure applying an output fraction to shared view state
pub type ApplyFn = Box<dyn FnMut(f32)>;

/// Completion callback, fired once when the track finishes running
pub type CompletionFn = Box<dyn FnOnce(TrackEnd)>;

/// One independently-timed, reversible animation.
pub struct AnimationTrack {
    duration: f32,
    curve: TimingCurve,
    apply: ApplyFn,
    completions: SmallVec<[CompletionFn; 2]>,

    fraction: f32,
    reversed: bool,
    running: bool,
    start_fraction: f32,
    elapsed: f32,
    run_duration: f32,
}

impl AnimationTrack {
    /// Create a paused track. `duration` is in seconds.
    pub fn new(
        duration: f32,
        curve: impl Into<TimingCurve>,
        apply: impl FnMut(f32) + 'static,
    ) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            curve: curve.into(),
            apply: Box::new(apply),
            completions: SmallVec::new(),
            fraction: 0.0,
            reversed: false,
            running: false,
            start_fraction: 0.0,
            elapsed: 0.0,
            run_duration: 0.0,
        }
    }

    /// Attach a completion callback (builder-style)
    pub fn on_complete(mut self, f: impl FnOnce(TrackEnd) + 'static) -> Self {
        self.completions.push(Box::new(f));
        self
    }

    pub fn add_completion(&mut self, f: impl FnOnce(TrackEnd) + 'static) {
        self.completions.push(Box::new(f));
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Reverse (or un-reverse) the track's direction for its next run
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Scrub the track directly to `fraction` - an instantaneous update,
    /// no animation. Used while a gesture drives progress.
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
        (self.apply)(self.fraction);
    }

    /// Start playing from the current fraction over the full duration
    pub fn start(&mut self) {
        self.begin_run(self.duration);
    }

    /// Continue toward the (possibly reversed) end, with the remaining
    /// distance re-timed to play over `duration * factor`.
    pub fn continue_with_factor(&mut self, factor: f32) {
        self.begin_run(self.duration * factor);
    }

    fn begin_run(&mut self, run_duration: f32) {
        self.start_fraction = self.fraction;
        self.elapsed = 0.0;
        self.run_duration = run_duration.max(f32::EPSILON);
        self.running = true;
    }

    fn target(&self) -> f32 {
        if self.reversed {
            0.0
        } else {
            1.0
        }
    }

    /// Advance a running track by `dt` seconds. Returns true when the track
    /// just finished; completions are left in place for the scheduler to
    /// drain after the track is unregistered.
    pub(crate) fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += dt;
        let t = self.elapsed / self.run_duration;
        if t >= 1.0 {
            self.fraction = self.target();
            self.running = false;
            (self.apply)(self.fraction);
            return true;
        }

        let eased = self.curve.eval(t);
        self.fraction = self.start_fraction + (self.target() - self.start_fraction) * eased;
        (self.apply)(self.fraction);
        false
    }

    pub(crate) fn take_completions(&mut self) -> SmallVec<[CompletionFn; 2]> {
        std::mem::take(&mut self.completions)
    }

    pub(crate) fn end_position(&self) -> TrackEnd {
        if self.reversed {
            TrackEnd::Reversed
        } else {
            TrackEnd::Completed
        }
    }
}

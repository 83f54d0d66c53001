//! Gesture-progress mapping
//!
//! Pure functions from raw drag deltas to transition progress and overlay
//! scale. Progress is recomputed from the absolute translation on every
//! report, never accumulated, so it moves backward when the finger reverses.

/// A drag of this many units maps to 100% progress
pub const MAX_DRAG_DISTANCE: f32 = 200.0;

/// The overlay shrinks to this scale at 100% progress
pub const MIN_IMAGE_SCALE: f32 = 0.68;

/// Linearly rescale `value` from `in_range` into `to_range`, clamping at
/// both ends.
pub fn scale_and_shift(value: f32, in_range: (f32, f32), to_range: (f32, f32)) -> f32 {
    debug_assert!(in_range.1 > in_range.0);
    debug_assert!(to_range.1 > to_range.0);

    if value < in_range.0 {
        to_range.0
    } else if value > in_range.1 {
        to_range.1
    } else {
        let ratio = (value - in_range.0) / (in_range.1 - in_range.0);
        to_range.0 + ratio * (to_range.1 - to_range.0)
    }
}

/// Completion fraction for a given vertical drag.
/// e.g. -100 units -> 0, 20 units -> 0.1, 200 units -> 1.0, 400 units -> 1.0
pub fn progress(vertical_delta: f32) -> f32 {
    scale_and_shift(vertical_delta, (0.0, MAX_DRAG_DISTANCE), (0.0, 1.0))
}

/// Overlay scale for a given completion fraction: 1.0 down to
/// [`MIN_IMAGE_SCALE`], linearly.
pub fn visual_scale(fraction: f32) -> f32 {
    1.0 - (1.0 - MIN_IMAGE_SCALE) * fraction
}

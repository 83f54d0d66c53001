//! Flying-image placement
//!
//! Aspect-fit variants used to decide where the overlay rests. Unlike
//! standard aspect-fit, the result always touches either the full width or
//! the full height of the target rect, and the touching dimension is pinned
//! to the container origin.

use swoop_core::{Rect, Size};

/// Fit a rect of the given aspect ratio inside `inside`.
///
/// If the image is wider (relative to its height) than the target, fit by
/// width and center vertically; otherwise fit by height and center
/// horizontally.
pub fn aspect_fit(aspect: Size, inside: Rect) -> Rect {
    let view_ratio = inside.width() / inside.height();
    let image_ratio = aspect.aspect_ratio();
    let touches_horizontal_sides = image_ratio > view_ratio;

    if touches_horizontal_sides {
        let height = inside.width() / image_ratio;
        let y = inside.y() + (inside.height() - height) / 2.0;
        Rect::new(0.0, y, inside.width(), height)
    } else {
        let width = inside.height() * image_ratio;
        let x = inside.x() + (inside.width() - width) / 2.0;
        Rect::new(x, 0.0, width, inside.height())
    }
}

/// Dismissal fallback: park the image just below the visible area, keeping
/// its current size.
pub fn offscreen_below(size: Size, container_height: f32) -> Rect {
    Rect::new(0.0, container_height, size.width, size.height)
}

/// Presentation fallback: where the flying image starts when the source
/// screen cannot supply a frame - the aspect-fit rect pushed off the bottom
/// edge of the destination.
pub fn offscreen_presentation_frame(aspect: Size, bounds: Rect) -> Rect {
    let mut result = aspect_fit(aspect, bounds);
    result.origin.y = bounds.height();
    result
}

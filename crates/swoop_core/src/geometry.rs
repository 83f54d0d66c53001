//! Core geometry types for transition math
//!
//! Frames, deltas, and the scale-then-translate transform applied to the
//! flying-image overlay while a drag is in flight.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        debug_assert!(self.height > 0.0, "aspect ratio of a zero-height size");
        self.width / self.height
    }

    /// Uniformly scale both dimensions
    pub fn scaled(&self, factor: f32) -> Self {
        Size::new(self.width * factor, self.height * factor)
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

/// 2D vector, used for gesture translations and velocities
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rect from center point and size
    pub fn from_center(center: Point, size: Size) -> Self {
        Rect {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Component-wise linear interpolation toward another rect
    pub fn lerp(&self, other: &Rect, t: f32) -> Self {
        Rect::new(
            self.origin.x + (other.origin.x - self.origin.x) * t,
            self.origin.y + (other.origin.y - self.origin.y) * t,
            self.size.width + (other.size.width - self.size.width) * t,
            self.size.height + (other.size.height - self.size.height) * t,
        )
    }

    pub fn approx_eq(&self, other: &Rect, epsilon: f32) -> bool {
        (self.origin.x - other.origin.x).abs() < epsilon
            && (self.origin.y - other.origin.y).abs() < epsilon
            && (self.size.width - other.size.width).abs() < epsilon
            && (self.size.height - other.size.height).abs() < epsilon
    }
}

/// Uniform scale about a view's center, followed by a translation.
///
/// This is the only transform the transition engine needs: the flying image
/// shrinks in place and follows the finger. The translation is the raw
/// gesture delta, not scaled into the shrunk coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub scale: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        scale: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub const fn new(scale: f32, tx: f32, ty: f32) -> Self {
        Self { scale, tx, ty }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The rect produced by applying this transform to `frame`
    pub fn apply_to(&self, frame: Rect) -> Rect {
        let center = frame.center();
        Rect::from_center(
            Point::new(center.x + self.tx, center.y + self.ty),
            frame.size.scaled(self.scale),
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

//! Geometric primitives for rasterization.
//!
//! All coordinates are integers: the rasterizers are integer-only scan
//! converters, so there is no sub-pixel positioning to represent.

/// A 2D point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// True if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from center coordinates and radius.
    #[must_use]
    pub const fn from_coords(xc: i32, yc: i32, radius: i32) -> Self {
        Self::new(Point::new(xc, yc), radius)
    }
}

/// An axis-aligned ellipse given by center and semi-axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Horizontal semi-axis in pixels.
    pub rx: i32,
    /// Vertical semi-axis in pixels.
    pub ry: i32,
}

impl Ellipse {
    /// Create a new ellipse.
    #[must_use]
    pub const fn new(center: Point, rx: i32, ry: i32) -> Self {
        Self { center, rx, ry }
    }

    /// Create an ellipse from center coordinates and semi-axes.
    #[must_use]
    pub const fn from_coords(xc: i32, yc: i32, rx: i32, ry: i32) -> Self {
        Self::new(Point::new(xc, yc), rx, ry)
    }
}

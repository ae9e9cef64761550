//! Geometric primitives
//!
//! Coordinates are `f32` logical pixels with the origin at the top-left
//! corner and `y` growing downwards.

use serde::{Deserialize, Serialize};

/// A point in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge
    pub x: f32,
    /// Vertical offset from the top edge
    pub y: f32,
}

impl Point {
    /// The origin (0, 0)
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A width/height pair in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Size {
    /// The empty size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area covered by this size
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent from the origin
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from an origin and a size
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Left edge (inclusive)
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge (inclusive)
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Right edge (exclusive)
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge (exclusive)
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Whether the horizontal ranges `[min_x, max_x)` of two rectangles overlap
    pub fn intersects_horizontally(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x() && other.min_x() < self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.max_y(), 60.0);
    }

    #[test]
    fn test_horizontal_overlap() {
        let a = Rect::new(Point::new(0.0, 0.0), Size::new(100.0, 10.0));
        let b = Rect::new(Point::new(108.0, 0.0), Size::new(50.0, 10.0));
        let c = Rect::new(Point::new(99.0, 0.0), Size::new(5.0, 10.0));

        assert!(!a.intersects_horizontally(&b));
        assert!(a.intersects_horizontally(&c));
        assert!(c.intersects_horizontally(&a));

        // Touching edges do not overlap
        let d = Rect::new(Point::new(100.0, 0.0), Size::new(5.0, 10.0));
        assert!(!a.intersects_horizontally(&d));
    }

    #[test]
    fn test_tuple_conversions() {
        assert_eq!(Size::from((3.0, 4.0)), Size::new(3.0, 4.0));
        assert_eq!(Point::from((1.5, 2.5)), Point::new(1.5, 2.5));
        assert_eq!(Size::new(3.0, 4.0).area(), 12.0);
    }
}

//! Axis-aligned rectangle.
//!
//! Boundary convention: [`Rectangle::contains`] is inclusive on every edge,
//! while [`Rectangle::intersects`] uses strict comparisons, so two rectangles
//! that only touch along an edge do not intersect.

use serde::{Deserialize, Serialize};

use super::vector2::Vector2;

/// Axis-aligned rectangle given by its top-left corner and size.
///
/// Sizes are expected to be non-negative; callers that build rectangles from
/// arbitrary corners should use [`Rectangle::from_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub pos: Vector2,
    pub size: Vector2,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Vector2, size: Vector2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    /// Normalizes two arbitrary corners into a non-negative size.
    pub fn from_corners(a: Vector2, b: Vector2) -> Self {
        let min = Vector2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vector2::new(a.x.max(b.x), a.y.max(b.y));
        Self {
            pos: min,
            size: max - min,
        }
    }

    pub fn left(&self) -> f64 {
        self.pos.x
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y / 2.0)
    }

    /// Point containment, edges included.
    pub fn contains(&self, p: Vector2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Strict overlap test; touching edges are not an intersection.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let r = Rectangle::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), Vector2::new(60.0, 45.0));
    }

    #[test]
    fn test_centered_roundtrips_center() {
        let r = Rectangle::centered(Vector2::new(5.0, 5.0), Vector2::new(4.0, 2.0));
        assert_eq!(r.pos, Vector2::new(3.0, 4.0));
        assert_eq!(r.center(), Vector2::new(5.0, 5.0));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let r = Rectangle::from_corners(Vector2::new(10.0, 0.0), Vector2::new(0.0, 10.0));
        assert_eq!(r, Rectangle::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_contains_includes_edges() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vector2::new(0.0, 0.0)));
        assert!(r.contains(Vector2::new(10.0, 10.0)));
        assert!(r.contains(Vector2::new(5.0, 10.0)));
        assert!(!r.contains(Vector2::new(10.0001, 5.0)));
        assert!(!r.contains(Vector2::new(-0.0001, 5.0)));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges_is_false() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let right = Rectangle::new(10.0, 0.0, 10.0, 10.0);
        let below = Rectangle::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rectangle::new(10.0, 10.0, 5.0, 5.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_intersects_contained() {
        let outer = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rectangle::new(40.0, 40.0, 1.0, 1.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
    }
}

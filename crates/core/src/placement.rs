//! Tile placement value type.

use crate::geom::Aabb;
use crate::point::Point2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned tile placed in the room.
///
/// `x`/`y` anchor the lower-left corner. `width`/`height` are the actual
/// extents of the rectangle; `length` is the nominal palette length the
/// tile was cut from (the larger side), used for counting and pricing.
/// Orientation is expressed solely by swapping width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TilePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

impl TilePlacement {
    /// A horizontal tile: `length` along x, the short side along y.
    pub fn horizontal(x: f64, y: f64, length: f64, short_side: f64) -> Self {
        Self {
            x,
            y,
            width: length,
            height: short_side,
            length,
        }
    }

    /// A vertical tile: the short side along x, `length` along y.
    pub fn vertical(x: f64, y: f64, length: f64, short_side: f64) -> Self {
        Self {
            x,
            y,
            width: short_side,
            height: length,
            length,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// True if the closed rectangle contains the point.
    pub fn hit(&self, p: Point2D) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.bottom() && p.y <= self.top()
    }

    /// The outer contour as an open CCW ring.
    pub fn ring(&self) -> Vec<(f64, f64)> {
        vec![
            (self.x, self.y),
            (self.right(), self.y),
            (self.right(), self.top()),
            (self.x, self.top()),
        ]
    }

    /// Bounding box (identical to the rectangle itself).
    pub fn aabb(&self) -> Aabb {
        Aabb {
            min_x: self.left(),
            min_y: self.bottom(),
            max_x: self.right(),
            max_y: self.top(),
        }
    }

    /// The same tile moved to a new anchor.
    pub fn at(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let t = TilePlacement::horizontal(1.0, 2.0, 4.0, 1.26);
        assert_eq!(t.left(), 1.0);
        assert_eq!(t.right(), 5.0);
        assert_eq!(t.bottom(), 2.0);
        assert!((t.top() - 3.26).abs() < 1e-12);
        assert_eq!(t.length, 4.0);
    }

    #[test]
    fn test_vertical_swaps_sides() {
        let t = TilePlacement::vertical(0.0, 0.0, 2.0, 1.26);
        assert!((t.width - 1.26).abs() < 1e-12);
        assert_eq!(t.height, 2.0);
        assert_eq!(t.length, 2.0);
    }

    #[test]
    fn test_hit_boundary_inclusive() {
        let t = TilePlacement::horizontal(0.0, 0.0, 4.0, 1.0);
        assert!(t.hit(Point2D::new(0.0, 0.0)));
        assert!(t.hit(Point2D::new(4.0, 1.0)));
        assert!(t.hit(Point2D::new(2.0, 0.5)));
        assert!(!t.hit(Point2D::new(4.001, 0.5)));
    }

    #[test]
    fn test_ring_is_ccw() {
        use crate::geom::{ring_winding, Winding};
        let t = TilePlacement::horizontal(1.0, 1.0, 2.0, 1.0);
        assert_eq!(ring_winding(&t.ring()), Winding::CounterClockwise);
    }
}

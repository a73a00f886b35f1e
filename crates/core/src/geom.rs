//! Low-level ring math: signed area, winding, perimeter, bounding boxes.
//!
//! Rings are open vertex lists (`&[(f64, f64)]`) with an implicit closing
//! edge from the last vertex back to the first. Winding detection uses
//! Shewchuk's robust orientation predicate so that nearly-collinear
//! outlines are classified correctly before they reach the offsetter.

use robust::{orient2d as robust_orient2d, Coord};

/// Winding direction of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Vertices run counter-clockwise (interior on the left).
    CounterClockwise,
    /// Vertices run clockwise (interior on the right).
    Clockwise,
    /// Fewer than three vertices, or all vertices collinear.
    Degenerate,
}

impl Winding {
    /// Returns true for counter-clockwise rings.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Winding::CounterClockwise)
    }
}

/// Robust orientation of the triangle `(a, b, c)`.
///
/// Positive for a left turn, negative for a right turn, zero when the
/// points are exactly collinear.
#[inline]
pub fn orient2d(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    robust_orient2d(
        Coord { x: a.0, y: a.1 },
        Coord { x: b.0, y: b.1 },
        Coord { x: c.0, y: c.1 },
    )
}

/// Twice the signed area of a ring (shoelace). Positive for CCW rings.
pub fn signed_area_2x(ring: &[(f64, f64)]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let (x1, y1) = ring[i];
        let (x2, y2) = ring[(i + 1) % n];
        acc += x1 * y2 - x2 * y1;
    }
    acc
}

/// Unsigned area of a ring.
pub fn ring_area(ring: &[(f64, f64)]) -> f64 {
    signed_area_2x(ring).abs() * 0.5
}

/// Winding of a ring, decided at its lowest-then-rightmost vertex so that
/// a single robust orientation test suffices.
pub fn ring_winding(ring: &[(f64, f64)]) -> Winding {
    let n = ring.len();
    if n < 3 {
        return Winding::Degenerate;
    }
    let mut pivot = 0;
    for (i, &(x, y)) in ring.iter().enumerate() {
        let (px, py) = ring[pivot];
        if y < py || (y == py && x > px) {
            pivot = i;
        }
    }
    let prev = ring[(pivot + n - 1) % n];
    let next = ring[(pivot + 1) % n];
    let turn = orient2d(prev, ring[pivot], next);
    if turn > 0.0 {
        Winding::CounterClockwise
    } else if turn < 0.0 {
        Winding::Clockwise
    } else {
        // Convex-hull vertex is collinear with its neighbors; fall back to
        // the shoelace sign.
        let a2 = signed_area_2x(ring);
        if a2 > 0.0 {
            Winding::CounterClockwise
        } else if a2 < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}

/// Euclidean length of the closed ring boundary.
pub fn ring_perimeter(ring: &[(f64, f64)]) -> f64 {
    let n = ring.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..n {
        let (x1, y1) = ring[i];
        let (x2, y2) = ring[(i + 1) % n];
        total += (x2 - x1).hypot(y2 - y1);
    }
    total
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Bounding box of a vertex list, or `None` for an empty list.
    pub fn of_ring(ring: &[(f64, f64)]) -> Option<Aabb> {
        let (&(fx, fy), rest) = ring.split_first()?;
        let mut bb = Aabb {
            min_x: fx,
            min_y: fy,
            max_x: fx,
            max_y: fy,
        };
        for &(x, y) in rest {
            bb.min_x = bb.min_x.min(x);
            bb.min_y = bb.min_y.min(y);
            bb.max_x = bb.max_x.max(x);
            bb.max_y = bb.max_y.max(y);
        }
        Some(bb)
    }

    /// Smallest box covering both boxes.
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

//! Rooms and side-by-side outline construction.

use tilelay_core::geom::{ring_area, ring_winding, Winding};
use tilelay_core::{Error, Point2D, Result};

use crate::offset::offset;
use crate::region::Region;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A room: a simple polygon outline plus the wall clearance margin.
///
/// The caller guarantees the outline does not self-intersect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    outline: Vec<Point2D>,
    margin: f64,
}

impl Room {
    /// Creates a room from a closed outline (closing edge implicit).
    pub fn new(outline: Vec<Point2D>, margin: f64) -> Result<Self> {
        if outline.len() < 3 {
            return Err(Error::InvalidGeometry(format!(
                "outline needs at least 3 vertices, got {}",
                outline.len()
            )));
        }
        if let Some(p) = outline.iter().find(|p| !p.is_finite()) {
            return Err(Error::InvalidGeometry(format!(
                "outline vertex ({}, {}) is not finite",
                p.x, p.y
            )));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::InvalidInput(format!(
                "margin {margin} must be finite and non-negative"
            )));
        }
        let ring: Vec<(f64, f64)> = outline.iter().map(|p| (p.x, p.y)).collect();
        if ring_winding(&ring) == Winding::Degenerate || ring_area(&ring) == 0.0 {
            return Err(Error::InvalidGeometry("outline encloses no area".into()));
        }
        Ok(Self { outline, margin })
    }

    /// An axis-aligned rectangular room with its corner at the origin.
    pub fn rectangle(width: f64, height: f64, margin: f64) -> Result<Self> {
        Self::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(width, 0.0),
                Point2D::new(width, height),
                Point2D::new(0.0, height),
            ],
            margin,
        )
    }

    pub fn outline(&self) -> &[Point2D] {
        &self.outline
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// The outline as an open coordinate ring.
    pub fn ring(&self) -> Vec<(f64, f64)> {
        self.outline.iter().map(|p| (p.x, p.y)).collect()
    }

    /// The room eroded by its margin; empty when the margin exceeds the
    /// inscribed radius.
    pub fn inner_region(&self) -> Region {
        offset(&Region::from_ring(self.ring()), -self.margin)
    }
}

/// Accumulates a room outline one side at a time.
///
/// Each side is a (length, angle-in-degrees) pair appended to the last
/// vertex, starting from the origin. Invalid input leaves the outline
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    points: Vec<Point2D>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the endpoint of one more side. Zero or non-finite lengths
    /// and non-finite angles are rejected without modifying the outline.
    pub fn add_side(&mut self, length: f64, angle_deg: f64) -> Result<()> {
        if !length.is_finite() || length == 0.0 {
            return Err(Error::InvalidInput(format!(
                "side length {length} must be finite and non-zero"
            )));
        }
        if !angle_deg.is_finite() {
            return Err(Error::InvalidInput(format!(
                "side angle {angle_deg} must be finite"
            )));
        }
        let angle = angle_deg.to_radians();
        let last = self.points.last().copied().unwrap_or_default();
        self.points.push(Point2D::new(
            last.x + length * angle.cos(),
            last.y + length * angle.sin(),
        ));
        Ok(())
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discards the outline under construction.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Closes the outline into a room. Requires at least three vertices.
    pub fn close(&self, margin: f64) -> Result<Room> {
        Room::new(self.points.clone(), margin)
    }
}

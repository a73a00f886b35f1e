//! Multi-ring polygonal regions.
//!
//! A [`Region`] is the result type of every buffering or union operation:
//! zero, one or many polygons, each with an outer ring and optional holes.
//! Zero polygons is the explicit empty marker used when an erosion
//! swallows its input.

use geo::{LineString, MultiPolygon, Polygon as GeoPolygon};
use tilelay_core::geom::{ring_area, Aabb};
use tilelay_core::TilePlacement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One polygon of a region: an outer ring plus interior holes.
///
/// Rings are open vertex lists; the closing edge is implicit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionPolygon {
    pub outer: Vec<(f64, f64)>,
    pub holes: Vec<Vec<(f64, f64)>>,
}

impl RegionPolygon {
    /// A polygon without holes.
    pub fn from_outer(outer: Vec<(f64, f64)>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }
}

/// A set of polygons produced by offsetting or union.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub polygons: Vec<RegionPolygon>,
}

impl Region {
    /// The empty region.
    pub fn empty() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// A region with a single hole-free ring.
    pub fn from_ring(ring: Vec<(f64, f64)>) -> Self {
        Self {
            polygons: vec![RegionPolygon::from_outer(ring)],
        }
    }

    /// The rectangle covered by a placement.
    pub fn from_placement(tile: &TilePlacement) -> Self {
        Self::from_ring(tile.ring())
    }

    /// True when no polygons remain.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Iterator over the outer rings only.
    pub fn outer_rings(&self) -> impl Iterator<Item = &[(f64, f64)]> {
        self.polygons.iter().map(|p| p.outer.as_slice())
    }

    /// Total area, holes subtracted.
    pub fn area(&self) -> f64 {
        self.polygons
            .iter()
            .map(|p| {
                let holes: f64 = p.holes.iter().map(|h| ring_area(h)).sum();
                ring_area(&p.outer) - holes
            })
            .sum()
    }

    /// Bounding box over all outer rings, `None` when empty.
    pub fn aabb(&self) -> Option<Aabb> {
        self.outer_rings()
            .filter_map(Aabb::of_ring)
            .reduce(|a, b| a.merged(&b))
    }

    /// Conversion to a [`geo::MultiPolygon`] for relate queries.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        let polys = self
            .polygons
            .iter()
            .map(|p| {
                let exterior = LineString::from(p.outer.clone());
                let interiors = p
                    .holes
                    .iter()
                    .map(|h| LineString::from(h.clone()))
                    .collect();
                GeoPolygon::new(exterior, interiors)
            })
            .collect();
        MultiPolygon(polys)
    }

    /// Converts i_overlay output shapes (first contour of each shape is
    /// the outer ring, the rest are holes) into a region. Contours with
    /// fewer than three vertices are dropped.
    pub fn from_overlay_shapes(shapes: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
        let mut polygons = Vec::new();
        for shape in shapes {
            let mut contours = shape.into_iter();
            let Some(outer) = contours.next() else {
                continue;
            };
            if outer.len() < 3 {
                continue;
            }
            let outer: Vec<(f64, f64)> = outer.into_iter().map(|[x, y]| (x, y)).collect();
            let holes: Vec<Vec<(f64, f64)>> = contours
                .filter(|c| c.len() >= 3)
                .map(|c| c.into_iter().map(|[x, y]| (x, y)).collect())
                .collect();
            polygons.push(RegionPolygon { outer, holes });
        }
        Self { polygons }
    }
}

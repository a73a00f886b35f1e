//! Boolean union of rectangle sets.
//!
//! The union is a left fold of pairwise `i_overlay` unions in input order.
//! A pairwise step whose result comes back empty keeps the running
//! accumulator instead of aborting, so a numerically awkward rectangle can
//! never sink the whole operation.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use tilelay_core::geom::signed_area_2x;
use tilelay_core::TilePlacement;

use crate::region::{Region, RegionPolygon};

/// Converts a ring into an i_overlay contour with the requested winding.
fn contour(ring: &[(f64, f64)], want_ccw: bool) -> Vec<[f64; 2]> {
    let ccw = signed_area_2x(ring) > 0.0;
    let mut out: Vec<[f64; 2]> = ring.iter().map(|&(x, y)| [x, y]).collect();
    if ccw != want_ccw {
        out.reverse();
    }
    out
}

/// Contours of one region polygon: outer CCW, holes CW, so that the
/// non-zero fill rule sees holes as holes.
fn shape_contours(polygon: &RegionPolygon) -> Vec<Vec<[f64; 2]>> {
    let mut contours = vec![contour(&polygon.outer, true)];
    for hole in &polygon.holes {
        contours.push(contour(hole, false));
    }
    contours
}

/// Left-fold union of contour sets. Each input set is the contour list of
/// one polygon (outer first).
fn fold_union(sets: Vec<Vec<Vec<[f64; 2]>>>) -> Region {
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Region::empty();
    };

    let mut shapes: Vec<Vec<Vec<[f64; 2]>>> = vec![first.clone()];
    let mut contours: Vec<Vec<[f64; 2]>> = first;

    for clip in sets {
        let result = contours.overlay(&clip, OverlayRule::Union, FillRule::NonZero);
        if result.is_empty() {
            // Tolerate a failed pairwise step and keep the accumulator.
            log::warn!("pairwise union produced no output, keeping accumulator");
            continue;
        }
        contours = result.iter().flatten().cloned().collect();
        shapes = result;
    }

    Region::from_overlay_shapes(shapes)
}

/// Union of all placement rectangles, in placement order.
///
/// The empty input is the caller's special case (an empty region, not an
/// error), mirroring how downstream consumers treat it.
pub fn union_placements(placements: &[TilePlacement]) -> Region {
    let sets = placements
        .iter()
        .map(|t| vec![contour(&t.ring(), true)])
        .collect();
    fold_union(sets)
}

/// Union of already-built region polygons, used to dissolve overlaps after
/// a dilation step.
pub(crate) fn union_region_polygons(polygons: &[RegionPolygon]) -> Region {
    let sets = polygons.iter().map(shape_contours).collect();
    fold_union(sets)
}

//! Outward boundary measurement for cost estimation.
//!
//! The placed tiles are unioned, epsilon-fused, and buffered outward by
//! the wall margin; the perimeter is the Euclidean length of every outer
//! ring of the result. Corner joins are coarse (one chord per joint), a
//! tolerance the cost estimate explicitly accepts.

use tilelay_core::geom::ring_perimeter;
use tilelay_core::TilePlacement;

use crate::offset::{fuse, offset};
use crate::region::Region;
use crate::union_ops::union_placements;

/// Computes the protective boundary polygon around the placed tiles and
/// its perimeter in meters.
///
/// An empty placement list measures `(empty, 0.0)`. If the outward offset
/// fails, the fused union itself is measured instead.
pub fn boundary_perimeter(placements: &[TilePlacement], margin: f64) -> (Region, f64) {
    if placements.is_empty() {
        return (Region::empty(), 0.0);
    }

    let union = union_placements(placements);
    if union.is_empty() {
        log::warn!("tile union came back empty, no boundary to measure");
        return (Region::empty(), 0.0);
    }

    let fused = fuse(&union);
    let outer = offset(&fused, margin);
    let measured = if outer.is_empty() {
        log::warn!("outward offset failed, measuring the fused union instead");
        fused
    } else {
        outer
    };

    let length: f64 = measured.outer_rings().map(ring_perimeter).sum();
    (measured, length)
}

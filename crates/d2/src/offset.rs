//! Polygon offsetting with degeneracy tolerance.
//!
//! Positive distances dilate, negative distances erode. No call here ever
//! raises an unrecoverable error: an erosion that swallows its input (or a
//! primitive failure on degenerate input) yields the empty region, while a
//! failed dilation yields the input unchanged.
//!
//! Corner joins are coarse on purpose: result polylines are sampled at
//! their vertices only, so each rounded joint collapses to a single chord
//! segment. Callers needing the outward safety boundary accept this
//! trade of perimeter accuracy for simplicity.

use cavalier_contours::polyline::{
    PlineOffsetOptions, PlineSource, PlineSourceMut, Polyline,
};
use tilelay_core::geom::{ring_area, ring_winding, Winding};

use crate::region::{Region, RegionPolygon};
use crate::union_ops::union_region_polygons;

/// Distance of the two-step epsilon fuse (dilate then erode) that merges
/// near-coincident edges before further offsetting.
pub const FUSE_EPS: f64 = 1e-6;

/// Rings below this area are numeric noise and are dropped.
const MIN_RING_AREA: f64 = 1e-9;

/// Grid to which offset output coordinates are rounded.
///
/// The offsetter emits last-ulp noise on axis-aligned edges (a vertex of
/// an eroded rectangle can land at `0.10000000000000031` instead of
/// `0.1`). Downstream containment queries are boundary-exact, so a tile
/// anchored at the region's bounding-box corner would sit one ulp outside
/// the tilted edge and be rejected. Snapping to a 1e-9 grid restores the
/// exact coordinates without disturbing any real geometry at layout scale.
const COORD_QUANTUM: f64 = 1e-9;

#[inline]
fn quantize(v: f64) -> f64 {
    (v / COORD_QUANTUM).round() * COORD_QUANTUM
}

fn ring_to_pline(ring: &[(f64, f64)]) -> Polyline<f64> {
    let mut pline = Polyline::new_closed();
    for &(x, y) in ring {
        pline.add(x, y, 0.0);
    }
    pline
}

fn pline_to_ring(pline: &Polyline<f64>) -> Vec<(f64, f64)> {
    (0..pline.vertex_count())
        .map(|i| {
            let v = pline.at(i);
            (quantize(v.x), quantize(v.y))
        })
        .collect()
}

/// Offsets one closed ring outward by `outward` (inward when negative).
///
/// Returns `None` when the ring is degenerate, otherwise the surviving
/// result rings. An empty vec means the ring was annihilated, a normal
/// outcome for erosion.
fn offset_ring(ring: &[(f64, f64)], outward: f64) -> Option<Vec<Vec<(f64, f64)>>> {
    let winding = ring_winding(ring);
    if winding == Winding::Degenerate {
        return None;
    }
    // The offsetter moves a positive distance to the left of travel, which
    // is inward for CCW rings and outward for CW rings.
    let signed = if winding.is_ccw() { -outward } else { outward };
    let options = PlineOffsetOptions {
        handle_self_intersects: true,
        ..Default::default()
    };
    let pline = ring_to_pline(ring);
    let results = pline.parallel_offset_opt(signed, &options);
    Some(
        results
            .iter()
            .map(pline_to_ring)
            .filter(|r| r.len() >= 3 && ring_area(r) > MIN_RING_AREA)
            .collect(),
    )
}

/// Buffers a region by a signed distance.
///
/// Holes move opposite to outer rings: dilating the region shrinks (and
/// may swallow) its holes, eroding grows them. When a dilation leaves
/// several overlapping polygons they are dissolved with a union pass.
pub fn offset(region: &Region, distance: f64) -> Region {
    if region.is_empty() || distance == 0.0 {
        return region.clone();
    }

    let eroding = distance < 0.0;
    let mut polygons: Vec<RegionPolygon> = Vec::new();

    for polygon in &region.polygons {
        let outers = match offset_ring(&polygon.outer, distance) {
            Some(rings) => rings,
            None => {
                if eroding {
                    log::warn!("degenerate ring during erosion, dropping polygon");
                    continue;
                }
                log::warn!("degenerate ring during dilation, keeping polygon unchanged");
                polygons.push(polygon.clone());
                continue;
            }
        };
        if outers.is_empty() {
            if eroding {
                // Shrunk to nothing.
                continue;
            }
            log::warn!("dilation produced no output, keeping polygon unchanged");
            polygons.push(polygon.clone());
            continue;
        }

        // Holes are standalone rings offset the opposite way; a hole that
        // degenerates or closes up is dropped.
        let mut holes: Vec<Vec<(f64, f64)>> = Vec::new();
        for hole in &polygon.holes {
            if let Some(mut rings) = offset_ring(hole, -distance) {
                holes.append(&mut rings);
            }
        }

        if outers.len() == 1 {
            let outer = outers.into_iter().next().unwrap_or_default();
            polygons.push(RegionPolygon { outer, holes });
        } else {
            // The ring split; park each hole with the piece whose bounding
            // box contains it.
            let mut pieces: Vec<RegionPolygon> = outers
                .into_iter()
                .map(RegionPolygon::from_outer)
                .collect();
            for hole in holes {
                let anchor = hole.first().copied();
                let target = anchor
                    .and_then(|(hx, hy)| {
                        pieces.iter().position(|p| {
                            tilelay_core::geom::Aabb::of_ring(&p.outer).is_some_and(|bb| {
                                hx >= bb.min_x && hx <= bb.max_x && hy >= bb.min_y && hy <= bb.max_y
                            })
                        })
                    })
                    .unwrap_or(0);
                pieces[target].holes.push(hole);
            }
            polygons.append(&mut pieces);
        }
    }

    if !eroding && polygons.len() > 1 {
        let dissolved = union_region_polygons(&polygons);
        if !dissolved.is_empty() {
            return dissolved;
        }
        log::warn!("post-dilation union failed, keeping undissolved polygons");
    }

    Region { polygons }
}

/// Two-step epsilon fuse: dilate by [`FUSE_EPS`], then erode by the same,
/// merging coincident and near-adjacent edges that would otherwise produce
/// invalid topology downstream. If either step fails the input is returned
/// unfused.
pub fn fuse(region: &Region) -> Region {
    if region.is_empty() {
        return Region::empty();
    }
    let dilated = offset(region, FUSE_EPS);
    if dilated.is_empty() {
        log::warn!("epsilon fuse dilation failed, proceeding unfused");
        return region.clone();
    }
    let fused = offset(&dilated, -FUSE_EPS);
    if fused.is_empty() {
        log::warn!("epsilon fuse erosion failed, proceeding unfused");
        return region.clone();
    }
    fused
}

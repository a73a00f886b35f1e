//! Rectangle-in-region containment.
//!
//! Containment is boundary inclusive (DE-9IM "covers"): a tile resting
//! exactly on the inner room's edge is still inside. Both the packer and
//! the interactive drag gate go through [`covers_rect`], so the two paths
//! can never disagree.

use geo::{LineString, Polygon as GeoPolygon, Relate};

use crate::region::Region;

/// True iff the closed rectangle `(x, y, w, h)` lies entirely within or on
/// the boundary of the region. An empty region contains nothing; bad
/// scalars are a plain `false`, never an error.
pub fn covers_rect(region: &Region, x: f64, y: f64, width: f64, height: f64) -> bool {
    if region.is_empty() {
        return false;
    }
    if ![x, y, width, height].iter().all(|v| v.is_finite()) || width <= 0.0 || height <= 0.0 {
        return false;
    }
    let rect = GeoPolygon::new(
        LineString::from(vec![
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ]),
        vec![],
    );
    let container = region.to_multi_polygon();
    container.relate(&rect).is_covers()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Region {
        Region::from_ring(vec![(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)])
    }

    #[test]
    fn test_inside() {
        assert!(covers_rect(&square(10.0), 1.0, 1.0, 4.0, 2.0));
    }

    #[test]
    fn test_boundary_touch_is_inside() {
        assert!(covers_rect(&square(10.0), 0.0, 0.0, 10.0, 10.0));
        assert!(covers_rect(&square(10.0), 0.0, 2.0, 4.0, 1.0));
    }

    #[test]
    fn test_protruding_is_outside() {
        assert!(!covers_rect(&square(10.0), 8.0, 1.0, 4.0, 1.0));
        assert!(!covers_rect(&square(10.0), -0.5, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_empty_region_contains_nothing() {
        assert!(!covers_rect(&Region::empty(), 0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_bad_scalars_are_false() {
        assert!(!covers_rect(&square(10.0), f64::NAN, 0.0, 1.0, 1.0));
        assert!(!covers_rect(&square(10.0), 1.0, 1.0, 0.0, 1.0));
        assert!(!covers_rect(&square(10.0), 1.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn test_hole_blocks_containment() {
        use crate::region::RegionPolygon;
        let region = Region {
            polygons: vec![RegionPolygon {
                outer: vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
                holes: vec![vec![(4.0, 4.0), (4.0, 6.0), (6.0, 6.0), (6.0, 4.0)]],
            }],
        };
        assert!(covers_rect(&region, 0.5, 0.5, 2.0, 2.0));
        assert!(!covers_rect(&region, 3.5, 3.5, 3.0, 3.0));
    }

    #[test]
    fn test_concave_notch() {
        // L-shaped region: the notch is not coverable.
        let region = Region::from_ring(vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 4.0),
            (5.0, 4.0),
            (5.0, 10.0),
            (0.0, 10.0),
        ]);
        assert!(covers_rect(&region, 1.0, 1.0, 3.0, 2.0));
        assert!(!covers_rect(&region, 6.0, 5.0, 2.0, 2.0));
        // Spans the notch corner
        assert!(!covers_rect(&region, 3.0, 3.0, 4.0, 3.0));
    }
}

//! Integration tests for tilelay-d2.

use tilelay_d2::{
    boundary_perimeter, covers_rect, fuse, offset, pack, union_placements, DragOutcome,
    LayoutSession, Orientation, OutlineBuilder, PackConfig, Point2D, PriceTable, Region, Room,
    TilePlacement,
};

mod offset_tests {
    use super::*;

    #[test]
    fn test_erosion_below_inscribed_radius_stays_inside() {
        // Non-convex room: L-shape.
        let room = Region::from_ring(vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 4.0),
            (6.0, 4.0),
            (6.0, 8.0),
            (0.0, 8.0),
        ]);
        let inner = offset(&room, -0.5);
        assert!(!inner.is_empty());
        assert!(inner.area() < room.area());

        use geo::Relate;
        assert!(room
            .to_multi_polygon()
            .relate(&inner.to_multi_polygon())
            .is_covers());
    }

    #[test]
    fn test_full_erosion_returns_empty_marker() {
        let small = Region::from_ring(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(offset(&small, -2.0).is_empty());
    }

    #[test]
    fn test_fuse_merges_touching_rectangles() {
        let a = TilePlacement::horizontal(0.0, 0.0, 2.0, 1.0);
        let b = TilePlacement::horizontal(2.0, 0.0, 2.0, 1.0);
        let fused = fuse(&union_placements(&[a, b]));
        assert!(!fused.is_empty());
        assert!((fused.area() - 4.0).abs() < 1e-3);
    }
}

mod union_tests {
    use super::*;

    #[test]
    fn test_union_association_up_to_area() {
        let a = TilePlacement::horizontal(0.0, 0.0, 4.0, 1.26);
        let b = TilePlacement::horizontal(2.0, 0.6, 4.0, 1.26);
        let c = TilePlacement::vertical(3.0, 0.0, 4.0, 1.26);
        let left = union_placements(&[a, b, c]);
        let right = union_placements(&[b, c, a]);
        assert!((left.area() - right.area()).abs() < 1e-6);
    }
}

mod packer_tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // 10m x 6m room, margin 0.207, short side 1.26, palette [4, 2, 1].
        let room = Room::rectangle(10.0, 6.0, 0.207).unwrap();
        let config = PackConfig::new();
        let placements = pack(&room, &config).unwrap();
        assert!(!placements.is_empty());

        let inner = room.inner_region();
        for t in &placements {
            assert!(
                covers_rect(&inner, t.x, t.y, t.width, t.height),
                "tile ({}, {}) {}x{} not contained",
                t.x,
                t.y,
                t.width,
                t.height
            );
            assert!(t.length >= 1.0 - 1e-12, "tile below minimum palette length");
        }
    }

    #[test]
    fn test_polygonal_room() {
        // Pentagon-ish room via the outline builder.
        let mut builder = OutlineBuilder::new();
        builder.add_side(8.0, 0.0).unwrap();
        builder.add_side(4.0, 60.0).unwrap();
        builder.add_side(8.0, 170.0).unwrap();
        builder.add_side(3.0, 250.0).unwrap();
        let room = builder.close(0.15).unwrap();

        let placements = pack(&room, &PackConfig::new()).unwrap();
        let inner = room.inner_region();
        for t in &placements {
            assert!(covers_rect(&inner, t.x, t.y, t.width, t.height));
        }
    }

    #[test]
    fn test_single_pass_has_no_overlap() {
        let room = Room::rectangle(10.0, 6.0, 0.207).unwrap();
        let config = PackConfig::new().with_orientation(Orientation::Horizontal);
        let placements = pack(&room, &config).unwrap();
        assert!(!placements.is_empty());
        for (i, a) in placements.iter().enumerate() {
            for b in placements.iter().skip(i + 1) {
                let overlap_x = a.right().min(b.right()) - a.left().max(b.left());
                let overlap_y = a.top().min(b.top()) - a.bottom().max(b.bottom());
                assert!(
                    overlap_x <= 1e-9 || overlap_y <= 1e-9,
                    "tiles {a:?} and {b:?} overlap"
                );
            }
        }
    }
}

mod perimeter_tests {
    use super::*;

    #[test]
    fn test_empty_list_measures_zero() {
        let (region, len) = boundary_perimeter(&[], 0.207);
        assert!(region.is_empty());
        assert_eq!(len, 0.0);
    }

    #[test]
    fn test_isolated_tile_measurement() {
        let (w, h, m) = (2.0, 1.26, 0.3);
        let tile = TilePlacement::horizontal(5.0, 5.0, w, h);
        let (_, len) = boundary_perimeter(&[tile], m);
        // Between the chamfered and square-cornered perimeters; the gap is
        // the coarse one-segment corner join.
        let low = 2.0 * (w + h) + 4.0 * m * std::f64::consts::SQRT_2;
        let high = 2.0 * (w + 2.0 * m) + 2.0 * (h + 2.0 * m);
        assert!(len >= low - 1e-6 && len <= high + 1e-6, "len = {len}");
    }

    #[test]
    fn test_packed_layout_has_positive_boundary() {
        let room = Room::rectangle(10.0, 6.0, 0.207).unwrap();
        let placements = pack(&room, &PackConfig::new()).unwrap();
        let (region, len) = boundary_perimeter(&placements, room.margin());
        assert!(!region.is_empty());
        assert!(len > 0.0);
    }
}

mod session_tests {
    use super::*;

    fn session() -> LayoutSession {
        let mut s = LayoutSession::new();
        s.set_room(Room::rectangle(10.0, 6.0, 0.207).unwrap());
        s
    }

    #[test]
    fn test_drag_outside_rejected_and_position_survives() {
        let mut s = session();
        s.pack(&PackConfig::new()).unwrap();
        let before = s.placements()[0];

        assert!(s.begin_drag(0, Point2D::new(before.x, before.y)));
        assert_eq!(
            s.update_drag(Point2D::new(-20.0, -20.0)),
            DragOutcome::Rejected
        );
        s.end_drag();
        assert_eq!(s.placements()[0], before);
    }

    #[test]
    fn test_snap_closes_gap_before_containment() {
        let mut s = LayoutSession::new();
        s.set_room(Room::rectangle(20.0, 10.0, 0.1).unwrap());
        s.pack(&PackConfig::new().with_orientation(Orientation::Horizontal))
            .unwrap();
        let neighbor = s.placements()[0];
        let mover = s.placements()[1];

        // 0.03m gap, 0.05m tolerance: the gap must close.
        assert!(s.begin_drag(1, Point2D::new(mover.x, mover.y)));
        let outcome = s.update_drag(Point2D::new(neighbor.right() + 0.03, mover.y));
        assert_eq!(outcome, DragOutcome::Committed);
        assert!((s.placements()[1].x - neighbor.right()).abs() < 1e-12);
    }

    #[test]
    fn test_full_workflow_costs() {
        let mut s = session();
        let placed = s.pack(&PackConfig::new()).unwrap();
        assert!(placed > 0);

        let prices = PriceTable::new(vec![(4.0, 20.0), (2.0, 12.0), (1.0, 6.0)]);
        let tile_cost = s.tile_cost(&prices);
        assert!(tile_cost > 0.0);

        let (perimeter, cost) = s.boundary_perimeter_and_cost(1.5);
        assert!(perimeter > 0.0);
        assert!((cost - perimeter * 1.5).abs() < 1e-9);
        assert!((s.grand_total(&prices, 1.5) - (tile_cost + cost)).abs() < 1e-9);

        s.reset();
        assert!(s.placements().is_empty());
        assert_eq!(s.boundary_perimeter_and_cost(1.5), (0.0, 0.0));
    }

    #[test]
    fn test_manual_add_then_delete_lifecycle() {
        let mut s = session();
        let a = s.add_manual_tile(4.0, 1.26).unwrap();
        let b = s.add_manual_tile(2.0, 1.26).unwrap();
        // Documented quirk: repeated manual adds stack at the same anchor.
        assert_eq!((a.x, a.y), (b.x, b.y));

        let hit = s.hit_test(Point2D::new(a.x + 0.05, a.y + 0.05)).unwrap();
        assert_eq!(hit, 1, "topmost tile wins the hit test");
        s.remove_tile(hit).unwrap();
        assert_eq!(s.placements().len(), 1);
    }
}

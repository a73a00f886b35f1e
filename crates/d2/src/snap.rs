//! Edge snapping for dragged tiles.
//!
//! Advisory positioning only: the snapped coordinate still has to pass the
//! containment gate before a drag commits.

use tilelay_core::TilePlacement;

/// Default snap distance in meters.
pub const SNAP_TOLERANCE: f64 = 0.05;

/// Aligns a candidate drag position with nearby tile edges.
///
/// For every other placement, in index order, the moving rectangle's left
/// and right edges are compared against the neighbor's left and right
/// edges; any pair closer than `tolerance` forces exact coincidence. The
/// vertical axis is handled the same way with top/bottom edges. A later
/// neighbor's match overwrites an earlier one.
pub fn snap_to_neighbors(
    moving: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    placements: &[TilePlacement],
    tolerance: f64,
) -> (f64, f64) {
    let (mut x, mut y) = (x, y);
    for (j, t) in placements.iter().enumerate() {
        if j == moving {
            continue;
        }
        for sx in [t.left(), t.right()] {
            if (x - sx).abs() < tolerance {
                x = sx;
            }
            if (x + width - sx).abs() < tolerance {
                x = sx - width;
            }
        }
        for sy in [t.bottom(), t.top()] {
            if (y - sy).abs() < tolerance {
                y = sy;
            }
            if (y + height - sy).abs() < tolerance {
                y = sy - height;
            }
        }
    }
    (x, y)
}

//! Greedy tile packing over a polygonal room.
//!
//! Two independent sweep passes fill the inward-offset room: horizontal
//! rows bottom-up, then vertical columns left-to-right. At every scan
//! position the longest palette length that still fits is placed; when
//! nothing fits the cursor advances by the minimum palette length so the
//! scan always terminates. The passes never consult each other, so with
//! [`Orientation::Both`] a tile from the vertical pass can overlap one
//! from the horizontal pass. That matches the behavior this engine is
//! output-compatible with; callers wanting a single consistent layer run
//! one pass only.

use tilelay_core::{Orientation, PackConfig, Result, TilePlacement};

use crate::contain::covers_rect;
use crate::region::Region;
use crate::room::Room;

/// Packs tiles into the room's inward-offset interior.
///
/// Fully deterministic: identical inputs give identical placement lists,
/// horizontal row-major placements first, vertical column-major after.
/// Returns an empty list when the margin erodes the room away.
pub fn pack(room: &Room, config: &PackConfig) -> Result<Vec<TilePlacement>> {
    config.validate()?;

    let inner = room.inner_region();
    if inner.is_empty() {
        log::debug!("inner region empty after margin erosion, nothing to pack");
        return Ok(Vec::new());
    }
    let Some(bb) = inner.aabb() else {
        return Ok(Vec::new());
    };

    let lengths = config.sorted_palette();
    // validate() guarantees a non-empty palette.
    let min_len = lengths[lengths.len() - 1];
    let short = config.tile_short_side;

    let mut placements = Vec::new();

    if matches!(config.orientation, Orientation::Both | Orientation::Horizontal) {
        horizontal_pass(&inner, &lengths, min_len, short, &bb, &mut placements);
    }
    if matches!(config.orientation, Orientation::Both | Orientation::Vertical) {
        vertical_pass(&inner, &lengths, min_len, short, &bb, &mut placements);
    }

    log::debug!(
        "packed {} tiles ({:?}, short side {short})",
        placements.len(),
        config.orientation
    );
    Ok(placements)
}

/// Rows of height `short`, scanned left to right.
fn horizontal_pass(
    inner: &Region,
    lengths: &[f64],
    min_len: f64,
    short: f64,
    bb: &tilelay_core::Aabb,
    placements: &mut Vec<TilePlacement>,
) {
    let mut y = bb.min_y;
    while y <= bb.max_y - short {
        let mut x = bb.min_x;
        while x <= bb.max_x - min_len {
            let mut placed = false;
            for &len in lengths {
                if covers_rect(inner, x, y, len, short) {
                    placements.push(TilePlacement::horizontal(x, y, len, short));
                    x += len;
                    placed = true;
                    break;
                }
            }
            if !placed {
                x += min_len;
            }
        }
        y += short;
    }
}

/// Columns of width `short`, scanned bottom to top. Mirror image of the
/// horizontal pass with the axis roles swapped.
fn vertical_pass(
    inner: &Region,
    lengths: &[f64],
    min_len: f64,
    short: f64,
    bb: &tilelay_core::Aabb,
    placements: &mut Vec<TilePlacement>,
) {
    let mut x = bb.min_x;
    while x <= bb.max_x - short {
        let mut y = bb.min_y;
        while y <= bb.max_y - min_len {
            let mut placed = false;
            for &len in lengths {
                if covers_rect(inner, x, y, short, len) {
                    placements.push(TilePlacement::vertical(x, y, len, short));
                    y += len;
                    placed = true;
                    break;
                }
            }
            if !placed {
                y += min_len;
            }
        }
        x += short;
    }
}

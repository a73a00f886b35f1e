//! Interactive layout session.
//!
//! [`LayoutSession`] is the single owner of all mutable interaction state:
//! the room, the placement list, the cached inward-offset region and the
//! drag state machine. Every operation runs to completion on the calling
//! thread and leaves the placement list either fully updated or untouched.

use tilelay_core::{Error, PackConfig, Point2D, Result, TilePlacement};

use crate::contain::covers_rect;
use crate::packer::pack;
use crate::perimeter::boundary_perimeter;
use crate::region::Region;
use crate::room::Room;
use crate::snap::{snap_to_neighbors, SNAP_TOLERANCE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one drag update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The candidate position was contained; the placement was replaced.
    Committed,
    /// The candidate position was out of bounds (or no drag is active);
    /// the placement list is unchanged.
    Rejected,
}

/// Drag state machine: Idle, or Dragging one tile with the grab offset
/// between the pointer and the tile anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        index: usize,
        grab_dx: f64,
        grab_dy: f64,
    },
}

/// Price lookup by nominal tile length.
///
/// Lengths match exactly (within 1e-9); a length missing from the table
/// prices as zero.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceTable {
    entries: Vec<(f64, f64)>,
}

impl PriceTable {
    pub fn new(entries: Vec<(f64, f64)>) -> Self {
        Self { entries }
    }

    /// Unit price for a nominal length, 0.0 when absent.
    pub fn price_for(&self, length: f64) -> f64 {
        self.entries
            .iter()
            .find(|entry| (entry.0 - length).abs() < 1e-9)
            .map(|entry| entry.1)
            .unwrap_or(0.0)
    }
}

/// Owner of the placement list and all interaction state.
#[derive(Debug, Clone)]
pub struct LayoutSession {
    room: Option<Room>,
    placements: Vec<TilePlacement>,
    inner_cache: Option<Region>,
    drag: DragState,
    snap_tolerance: f64,
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSession {
    pub fn new() -> Self {
        Self {
            room: None,
            placements: Vec::new(),
            inner_cache: None,
            drag: DragState::Idle,
            snap_tolerance: SNAP_TOLERANCE,
        }
    }

    /// Overrides the default snap tolerance.
    pub fn with_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    /// Installs a room, invalidating the cached inner region. Existing
    /// placements are kept; re-pack to replace them.
    pub fn set_room(&mut self, room: Room) {
        self.room = Some(room);
        self.inner_cache = None;
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// The room eroded by its margin, computed once and cached.
    fn inner_region(&mut self) -> Region {
        if self.inner_cache.is_none() {
            let region = match &self.room {
                Some(room) => room.inner_region(),
                None => Region::empty(),
            };
            self.inner_cache = Some(region);
        }
        self.inner_cache.clone().unwrap_or_default()
    }

    /// Replaces the placement list wholesale with a fresh greedy packing.
    pub fn pack(&mut self, config: &PackConfig) -> Result<usize> {
        let room = self
            .room
            .as_ref()
            .ok_or_else(|| Error::InvalidGeometry("no room set".into()))?;
        self.placements = pack(room, config)?;
        self.drag = DragState::Idle;
        Ok(self.placements.len())
    }

    /// Appends a horizontal tile anchored at the min corner of the inner
    /// region's bounding box.
    ///
    /// Quirks preserved from the behavior this engine reproduces: the
    /// anchor ignores existing placements (repeated adds stack at the same
    /// spot), and no containment gate is applied at creation time.
    pub fn add_manual_tile(&mut self, length: f64, short_side: f64) -> Option<TilePlacement> {
        if !length.is_finite() || length <= 0.0 || !short_side.is_finite() || short_side <= 0.0 {
            return None;
        }
        let inner = self.inner_region();
        let bb = inner.aabb()?;
        let tile = TilePlacement::horizontal(bb.min_x, bb.min_y, length, short_side);
        self.placements.push(tile);
        Some(tile)
    }

    /// Removes one placement; out-of-range indices are a no-op.
    pub fn remove_tile(&mut self, index: usize) -> Option<TilePlacement> {
        if index >= self.placements.len() {
            return None;
        }
        self.drag = DragState::Idle;
        Some(self.placements.remove(index))
    }

    /// Clears the room, the placements and any active drag.
    pub fn reset(&mut self) {
        self.room = None;
        self.placements.clear();
        self.inner_cache = None;
        self.drag = DragState::Idle;
    }

    /// Topmost placement under the point, if any. Later placements paint
    /// over earlier ones, so the scan runs back to front.
    pub fn hit_test(&self, point: Point2D) -> Option<usize> {
        self.placements
            .iter()
            .enumerate()
            .rev()
            .find(|(_, t)| t.hit(point))
            .map(|(i, _)| i)
    }

    /// Starts dragging a tile grabbed at `grab`. Returns false when the
    /// index is out of range or a drag is already active.
    pub fn begin_drag(&mut self, index: usize, grab: Point2D) -> bool {
        if !matches!(self.drag, DragState::Idle) || index >= self.placements.len() {
            return false;
        }
        let t = &self.placements[index];
        self.drag = DragState::Dragging {
            index,
            grab_dx: grab.x - t.x,
            grab_dy: grab.y - t.y,
        };
        true
    }

    /// Processes one pointer move: candidate position, snap, containment
    /// gate, then an atomic commit or reject.
    pub fn update_drag(&mut self, pointer: Point2D) -> DragOutcome {
        let DragState::Dragging {
            index,
            grab_dx,
            grab_dy,
        } = self.drag
        else {
            return DragOutcome::Rejected;
        };
        let Some(&tile) = self.placements.get(index) else {
            return DragOutcome::Rejected;
        };

        let candidate_x = pointer.x - grab_dx;
        let candidate_y = pointer.y - grab_dy;
        let (x, y) = snap_to_neighbors(
            index,
            candidate_x,
            candidate_y,
            tile.width,
            tile.height,
            &self.placements,
            self.snap_tolerance,
        );

        let inner = self.inner_region();
        if covers_rect(&inner, x, y, tile.width, tile.height) {
            self.placements[index] = tile.at(x, y);
            DragOutcome::Committed
        } else {
            DragOutcome::Rejected
        }
    }

    /// Ends the drag; the tile stays at its last committed position.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Placement counts per nominal length, longest first.
    pub fn counts_by_length(&self) -> Vec<(f64, usize)> {
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for t in &self.placements {
            match counts.iter_mut().find(|entry| (entry.0 - t.length).abs() < 1e-9) {
                Some(entry) => entry.1 += 1,
                None => counts.push((t.length, 1)),
            }
        }
        counts.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        counts
    }

    /// Total tile cost under the given price table.
    pub fn tile_cost(&self, prices: &PriceTable) -> f64 {
        self.placements
            .iter()
            .map(|t| prices.price_for(t.length))
            .sum()
    }

    /// The protective boundary region and its perimeter, using the room's
    /// margin (0 when no room is set).
    pub fn boundary(&self) -> (Region, f64) {
        let margin = self.room.as_ref().map(Room::margin).unwrap_or(0.0);
        boundary_perimeter(&self.placements, margin)
    }

    /// Perimeter of the outward boundary and its cost at the given price
    /// per meter. Empty placements measure `(0.0, 0.0)`.
    pub fn boundary_perimeter_and_cost(&self, price_per_meter: f64) -> (f64, f64) {
        let (_, length) = self.boundary();
        (length, length * price_per_meter)
    }

    /// Tiles plus boundary.
    pub fn grand_total(&self, prices: &PriceTable, price_per_meter: f64) -> f64 {
        self.tile_cost(prices) + self.boundary_perimeter_and_cost(price_per_meter).1
    }
}

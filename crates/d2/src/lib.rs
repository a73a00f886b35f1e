//! # Tilelay 2D
//!
//! 2D tile layout engine for polygonal rooms.
//!
//! This crate lays rectangular tiles of a fixed short side and palette of
//! nominal lengths inside a simple polygon, honoring a wall clearance
//! margin. It provides:
//!
//! - Inward/outward polygon offsetting with degeneracy tolerance
//! - Boolean union of placed rectangles with epsilon edge fusing
//! - Boundary-inclusive rectangle containment
//! - A deterministic greedy packer (horizontal and vertical passes)
//! - Outward boundary perimeter measurement for cost estimation
//! - An interactive session with drag snapping and a containment gate
//!
//! ## Quick Start
//!
//! ```rust
//! use tilelay_core::PackConfig;
//! use tilelay_d2::{covers_rect, LayoutSession, PriceTable, Room};
//!
//! // A 10m x 6m room with a 0.207m wall clearance.
//! let room = Room::rectangle(10.0, 6.0, 0.207).unwrap();
//! let inner = room.inner_region();
//!
//! let mut session = LayoutSession::new();
//! session.set_room(room);
//!
//! // Automatic layout with the default palette [4, 2, 1].
//! let placed = session.pack(&PackConfig::new()).unwrap();
//! assert!(placed > 0);
//! for tile in session.placements() {
//!     assert!(covers_rect(&inner, tile.x, tile.y, tile.width, tile.height));
//! }
//!
//! // Cost estimation: tiles plus the protective boundary.
//! let prices = PriceTable::new(vec![(4.0, 20.0), (2.0, 12.0), (1.0, 6.0)]);
//! let tile_cost = session.tile_cost(&prices);
//! let (perimeter, boundary_cost) = session.boundary_perimeter_and_cost(1.5);
//! assert!(tile_cost > 0.0 && perimeter > 0.0);
//! assert!((session.grand_total(&prices, 1.5) - (tile_cost + boundary_cost)).abs() < 1e-9);
//! ```

pub mod contain;
pub mod offset;
pub mod packer;
pub mod perimeter;
pub mod region;
pub mod room;
pub mod session;
pub mod snap;
pub mod union_ops;

// Re-exports
pub use contain::covers_rect;
pub use offset::{fuse, offset, FUSE_EPS};
pub use packer::pack;
pub use perimeter::boundary_perimeter;
pub use region::{Region, RegionPolygon};
pub use room::{OutlineBuilder, Room};
pub use session::{DragOutcome, LayoutSession, PriceTable};
pub use snap::{snap_to_neighbors, SNAP_TOLERANCE};
pub use union_ops::union_placements;

// Shared core types, re-exported for convenience.
pub use tilelay_core::{Aabb, Error, Orientation, PackConfig, Point2D, Result, TilePlacement};

//! # Tilelay Core
//!
//! Shared types for the tilelay layout engine.
//!
//! This crate provides the value types and low-level polygon math used by
//! the 2-D engine:
//!
//! - [`TilePlacement`] - an axis-aligned tile with its nominal length
//! - [`PackConfig`] / [`Orientation`] - greedy packer configuration
//! - [`Point2D`] - planar coordinate in meters
//! - [`geom`] - ring math (signed area, winding, perimeter, AABB) with
//!   robust orientation predicates
//! - [`Error`] / [`Result`] - the workspace error taxonomy

pub mod config;
pub mod error;
pub mod geom;
pub mod placement;
pub mod point;

// Re-exports
pub use config::{Orientation, PackConfig};
pub use error::{Error, Result};
pub use geom::{Aabb, Winding};
pub use placement::TilePlacement;
pub use point::Point2D;

//! Packing configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which sweep passes the packer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Horizontal rows followed by vertical columns.
    #[default]
    Both,
    /// Horizontal rows only.
    Horizontal,
    /// Vertical columns only.
    Vertical,
}

/// Configuration for the greedy packer.
///
/// The wall clearance margin is not part of this type; it belongs to the
/// room being packed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackConfig {
    /// Allowed nominal tile lengths in meters. Consumed sorted descending.
    pub palette: Vec<f64>,

    /// Fixed short side of every tile in meters.
    pub tile_short_side: f64,

    /// Sweep passes to run.
    pub orientation: Orientation,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            palette: vec![4.0, 2.0, 1.0],
            tile_short_side: 1.26,
            orientation: Orientation::default(),
        }
    }
}

impl PackConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tile length palette.
    pub fn with_palette(mut self, palette: Vec<f64>) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the tile short side.
    pub fn with_tile_short_side(mut self, short_side: f64) -> Self {
        self.tile_short_side = short_side;
        self
    }

    /// Sets the sweep orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The palette sorted descending.
    pub fn sorted_palette(&self) -> Vec<f64> {
        let mut lengths = self.palette.clone();
        lengths.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        lengths
    }

    /// The smallest palette length, which bounds the scan step.
    pub fn min_length(&self) -> Option<f64> {
        self.palette
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, l| match acc {
                Some(m) => Some(m.min(l)),
                None => Some(l),
            })
    }

    /// Validates scalar ranges.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::InvalidInput("palette is empty".into()));
        }
        for &l in &self.palette {
            if !l.is_finite() || l <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "palette length {l} must be finite and positive"
                )));
            }
        }
        if !self.tile_short_side.is_finite() || self.tile_short_side <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "tile short side {} must be finite and positive",
                self.tile_short_side
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PackConfig::default();
        assert_eq!(config.palette, vec![4.0, 2.0, 1.0]);
        assert!((config.tile_short_side - 1.26).abs() < 1e-12);
        assert_eq!(config.orientation, Orientation::Both);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sorted_palette_descending() {
        let config = PackConfig::new().with_palette(vec![1.0, 4.0, 2.0]);
        assert_eq!(config.sorted_palette(), vec![4.0, 2.0, 1.0]);
        assert_eq!(config.min_length(), Some(1.0));
    }

    #[test]
    fn test_validate_rejects_bad_scalars() {
        assert!(PackConfig::new().with_palette(vec![]).validate().is_err());
        assert!(PackConfig::new()
            .with_palette(vec![4.0, -1.0])
            .validate()
            .is_err());
        assert!(PackConfig::new()
            .with_palette(vec![f64::NAN])
            .validate()
            .is_err());
        assert!(PackConfig::new()
            .with_tile_short_side(0.0)
            .validate()
            .is_err());
    }
}

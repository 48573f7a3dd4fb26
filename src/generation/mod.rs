//! # Generation Module
//!
//! Procedural map generation: configuration, the range sampler, room shapes
//! and the fill controller.
//!
//! Generation is driven by [`FillController::fill`] (or the [`generate`]
//! convenience wrapper): it validates the configuration, clears the grid,
//! then repeatedly picks a room shape, carves it and re-anchors the next
//! room inside the last one until the requested fraction of the grid is
//! filled.

pub mod fill;
pub mod rooms;
pub mod sampling;

pub use fill::{generate, FillController, FillStats, SelectableSpace};
pub use rooms::{RoomShape, ShapeRegistry};
pub use sampling::sample;

use crate::map::Grid;
use crate::{WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};

/// Configuration for map generation.
///
/// `min_filling` is the fraction of the grid that must be carved before
/// generation stops, in the open interval (0, 1). `max_room_size` bounds each
/// room's extent as a fraction of the grid dimensions, in (0, 1].
///
/// # Examples
///
/// ```
/// use warren::GenerationConfig;
///
/// let config = GenerationConfig::default();
/// assert!(config.min_filling > 0.0 && config.min_filling < 1.0);
/// assert!(config.max_room_size > 0.0 && config.max_room_size <= 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Target fraction of tiles to carve before stopping
    pub min_filling: f64,
    /// Maximum room extent as a fraction of the grid dimensions
    pub max_room_size: f64,
}

impl GenerationConfig {
    /// Creates a configuration from explicit fractions.
    pub fn new(min_filling: f64, max_room_size: f64) -> Self {
        Self {
            min_filling,
            max_room_size,
        }
    }

    /// Many tightly packed small rooms.
    pub fn small_rooms() -> Self {
        Self::new(0.4, 0.05)
    }

    /// Fewer, sprawling rooms.
    pub fn big_rooms() -> Self {
        Self::new(0.5, 0.35)
    }

    /// A handful of arena-sized chambers.
    pub fn boss() -> Self {
        Self::new(0.3, 0.8)
    }

    /// Checks this configuration against a concrete grid.
    ///
    /// Rejects fractions outside their defined intervals, and rejects
    /// `max_room_size` values that scale below the minimum room extent of 2
    /// tiles in either grid dimension. Called by the fill controller before
    /// it touches the grid.
    pub fn validate_for(&self, grid: &Grid) -> WarrenResult<()> {
        if self.min_filling <= 0.0 || self.min_filling >= 1.0 {
            return Err(WarrenError::InvalidConfig(format!(
                "min_filling must be in (0, 1), got {}",
                self.min_filling
            )));
        }
        if self.max_room_size <= 0.0 || self.max_room_size > 1.0 {
            return Err(WarrenError::InvalidConfig(format!(
                "max_room_size must be in (0, 1], got {}",
                self.max_room_size
            )));
        }
        let scaled_width = (self.max_room_size * grid.width() as f64) as i32;
        let scaled_height = (self.max_room_size * grid.height() as f64) as i32;
        if scaled_width < 2 || scaled_height < 2 {
            return Err(WarrenError::InvalidConfig(format!(
                "max_room_size {} scales below the 2-tile minimum room extent on a {}x{} grid",
                self.max_room_size,
                grid.width(),
                grid.height()
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_MIN_FILLING,
            crate::config::DEFAULT_MAX_ROOM_SIZE,
        )
    }
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

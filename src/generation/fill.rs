//! # Fill Controller
//!
//! The generation loop: validate the configuration, clear the grid, then
//! carve rooms until the requested fraction of tiles is filled.
//!
//! Room chaining happens here. After each room is inserted, its tile listing
//! becomes the selectable space from which the next room draws its anchor —
//! replaced wholesale, not merged — so every new room attaches to the most
//! recently carved one.

use crate::generation::rooms::ShapeRegistry;
use crate::generation::GenerationConfig;
use crate::map::{Grid, Position, Tile};
use crate::{WarrenError, WarrenResult};
use log::debug;
use rand::rngs::StdRng;

/// Default cap on anchor redraws per room before a shape gives up.
pub const DEFAULT_MAX_ANCHOR_ATTEMPTS: u32 = 1000;

/// Default cap on consecutive shape re-picks after a shape finds no anchor.
pub const DEFAULT_MAX_SHAPE_RETRIES: u32 = 32;

/// The current candidate set of anchor points for the next room.
///
/// Backed by a buffer pre-sized to the grid's tile count (the worst case is
/// one room covering the whole grid), so swapping a room listing in never
/// allocates.
#[derive(Debug, Clone)]
pub struct SelectableSpace {
    points: Vec<Position>,
}

impl SelectableSpace {
    /// Creates an empty candidate set with capacity for every tile of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            points: Vec::with_capacity(grid.len()),
        }
    }

    /// Resets the candidate set to every coordinate of `grid`.
    pub fn reset_to_full(&mut self, grid: &Grid) {
        self.points.clear();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                self.points.push(Position::new(x, y));
            }
        }
    }

    /// The candidate anchors.
    pub fn as_slice(&self) -> &[Position] {
        &self.points
    }

    /// Number of candidate anchors.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no anchors are available.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces the candidate set with the contents of `listing` by swapping
    /// buffers; `listing` receives the old candidates as scratch space.
    pub fn replace_with(&mut self, listing: &mut Vec<Position>) {
        std::mem::swap(&mut self.points, listing);
    }
}

/// Summary of one completed fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillStats {
    /// Number of rooms carved (overlapping rooms included)
    pub rooms_carved: u32,
    /// Number of tiles that transitioned from empty to room
    pub tiles_filled: usize,
}

/// Orchestrates map generation.
///
/// Validates the configuration, initializes the grid and selectable space,
/// and runs the carve/insert loop until the fill threshold is met.
///
/// # Examples
///
/// ```
/// use warren::generation::utils::create_rng;
/// use warren::{FillController, GenerationConfig, Grid, Tile};
///
/// let mut grid = Grid::new(60, 30);
/// let mut rng = create_rng(12345);
/// let stats = FillController::new()
///     .fill(&mut grid, &GenerationConfig::default(), &mut rng)
///     .unwrap();
///
/// assert_eq!(grid.count(Tile::Room), stats.tiles_filled);
/// assert!(stats.tiles_filled as f64 >= 60.0 * 30.0 * 0.4);
/// ```
#[derive(Debug, Clone)]
pub struct FillController {
    /// The room shapes available to the generation loop
    pub registry: ShapeRegistry,
    /// Maximum anchor redraws per room before a shape gives up
    pub max_anchor_attempts: u32,
    /// Maximum consecutive shape re-picks when a shape finds no anchor
    pub max_shape_retries: u32,
}

impl FillController {
    /// Creates a controller with the full shape set and default retry caps.
    pub fn new() -> Self {
        Self {
            registry: ShapeRegistry::new(),
            max_anchor_attempts: DEFAULT_MAX_ANCHOR_ATTEMPTS,
            max_shape_retries: DEFAULT_MAX_SHAPE_RETRIES,
        }
    }

    /// Fills `grid` with chained rooms until at least
    /// `config.min_filling` of its tiles are carved.
    ///
    /// On a configuration error the grid is untouched. On
    /// [`crate::WarrenError::GenerationStalled`] the carved prefix is left in
    /// place. On success every tile listed by a generator was inside the
    /// grid, and `grid.count(Tile::Room)` meets the threshold.
    pub fn fill(
        &self,
        grid: &mut Grid,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> WarrenResult<FillStats> {
        // Validating: any violation fails before the grid is mutated.
        config.validate_for(grid)?;

        // Initializing
        grid.reset();
        let mut selectable = SelectableSpace::for_grid(grid);
        selectable.reset_to_full(grid);
        let mut room: Vec<Position> = Vec::with_capacity(grid.len());

        let target = grid.len() as f64 * config.min_filling;
        let mut stats = FillStats {
            rooms_carved: 0,
            tiles_filled: 0,
        };

        // Generating <-> Inserting, at least one iteration
        let mut consecutive_stalls = 0u32;
        loop {
            let shape = self.registry.pick(rng);
            match shape.carve(
                grid,
                selectable.as_slice(),
                &mut room,
                config.max_room_size,
                self.max_anchor_attempts,
                rng,
            ) {
                Ok(()) => consecutive_stalls = 0,
                // A shape with no suitable anchor (an ellipse whose margin
                // requirement no tile of the current selectable space meets,
                // say) is re-picked a bounded number of times before the
                // whole fill is declared stuck.
                Err(WarrenError::GenerationStalled(reason)) => {
                    consecutive_stalls += 1;
                    if consecutive_stalls >= self.max_shape_retries {
                        return Err(WarrenError::GenerationStalled(format!(
                            "no shape could place a room after {} re-picks: {}",
                            consecutive_stalls, reason
                        )));
                    }
                    debug!("{} shape found no anchor, re-picking: {}", shape.name(), reason);
                    continue;
                }
                Err(other) => return Err(other),
            }

            let mut inserted = 0usize;
            for &tile in &room {
                if grid.carve(tile) {
                    inserted += 1;
                }
            }
            stats.rooms_carved += 1;
            stats.tiles_filled += inserted;

            debug!(
                "room {}: {} shape, {} tiles ({} new), {}/{} filled",
                stats.rooms_carved,
                shape.name(),
                room.len(),
                inserted,
                stats.tiles_filled,
                grid.len()
            );

            // Chaining: the new room becomes the next anchor candidate set
            selectable.replace_with(&mut room);

            // CheckThreshold
            if stats.tiles_filled as f64 >= target {
                break;
            }
        }

        debug_assert_eq!(grid.count(Tile::Room), stats.tiles_filled);

        Ok(stats)
    }
}

impl Default for FillController {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills `grid` using a default [`FillController`].
///
/// # Examples
///
/// ```
/// use warren::generation::utils::create_rng;
/// use warren::{generate, GenerationConfig, Grid, Tile};
///
/// let mut grid = Grid::new(80, 40);
/// let mut rng = create_rng(7);
/// generate(&mut grid, &GenerationConfig::default(), &mut rng).unwrap();
/// assert!(grid.count(Tile::Room) >= (80 * 40) * 4 / 10);
/// ```
pub fn generate(
    grid: &mut Grid,
    config: &GenerationConfig,
    rng: &mut StdRng,
) -> WarrenResult<FillStats> {
    FillController::new().fill(grid, config, rng)
}

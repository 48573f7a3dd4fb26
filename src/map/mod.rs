//! # Map Module
//!
//! The tile grid and its coordinate type.
//!
//! A [`Grid`] is a fixed-size 2-D buffer of [`Tile`]s stored row-major in a
//! single allocation. All access goes through bounds-checked methods; the
//! linear index arithmetic never leaves this module. The grid is created once
//! by the caller and mutated in place by the fill controller — it is never
//! reallocated during generation.

use serde::{Deserialize, Serialize};

/// Represents a 2-D coordinate on the map.
///
/// # Examples
///
/// ```
/// use warren::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// assert_eq!(pos + Position::new(1, -1), Position::new(11, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// The two states a map tile can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Uncarved rock
    Empty,
    /// Carved room interior
    Room,
}

/// A fixed-size 2-D tile buffer.
///
/// Tiles are stored row-major (`index = y * width + x`); that index stays
/// internal to this type. Out-of-range access through [`Grid::get`] or
/// [`Grid::set`] is a programmer error and panics rather than corrupting
/// neighboring rows.
///
/// # Examples
///
/// ```
/// use warren::{Grid, Position, Tile};
///
/// let mut grid = Grid::new(8, 4);
/// assert_eq!(grid.count(Tile::Empty), 32);
///
/// grid.set(Position::new(3, 2), Tile::Room);
/// assert_eq!(grid.get(Position::new(3, 2)), Tile::Room);
/// assert_eq!(grid.count(Tile::Room), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Allocates a grid of the given dimensions with every tile [`Tile::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; (width * height) as usize],
        }
    }

    /// Grid width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid holds zero tiles. Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Checks whether a position lies within the grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position ({}, {}) out of bounds for {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        (pos.y as u32 * self.width + pos.x as u32) as usize
    }

    /// Returns the tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> Tile {
        self.tiles[self.index(pos)]
    }

    /// Sets the tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Marks the tile at `pos` as [`Tile::Room`].
    ///
    /// Returns `true` only when the tile transitions from empty to room, so
    /// callers can count newly occupied tiles; carving an already carved tile
    /// is a silent no-op.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn carve(&mut self, pos: Position) -> bool {
        let idx = self.index(pos);
        if self.tiles[idx] != Tile::Room {
            self.tiles[idx] = Tile::Room;
            true
        } else {
            false
        }
    }

    /// Counts the tiles currently in the given state. O(width * height).
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Resets every tile to [`Tile::Empty`] without reallocating.
    pub fn reset(&mut self) {
        self.tiles.fill(Tile::Empty);
    }

    /// Iterates over all tiles of one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: u32) -> impl Iterator<Item = Tile> + '_ {
        assert!(y < self.height, "row {} out of bounds for height {}", y, self.height);
        let start = (y * self.width) as usize;
        self.tiles[start..start + self.width as usize].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
        assert_eq!(Position::origin(), Position::new(0, 0));
    }

    #[test]
    fn test_grid_starts_empty() {
        let grid = Grid::new(10, 6);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.len(), 60);
        assert_eq!(grid.count(Tile::Empty), 60);
        assert_eq!(grid.count(Tile::Room), 0);
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(4, 4);
        let pos = Position::new(2, 3);

        assert_eq!(grid.get(pos), Tile::Empty);
        grid.set(pos, Tile::Room);
        assert_eq!(grid.get(pos), Tile::Room);

        // Neighbors stay untouched
        assert_eq!(grid.get(Position::new(1, 3)), Tile::Empty);
        assert_eq!(grid.get(Position::new(3, 3)), Tile::Empty);
        assert_eq!(grid.get(Position::new(2, 2)), Tile::Empty);
    }

    #[test]
    fn test_grid_carve_counts_transitions() {
        let mut grid = Grid::new(4, 4);
        let pos = Position::new(1, 1);

        assert!(grid.carve(pos));
        assert!(!grid.carve(pos)); // already a room, contributes nothing
        assert_eq!(grid.count(Tile::Room), 1);
    }

    #[test]
    fn test_grid_contains() {
        let grid = Grid::new(5, 3);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(4, 2)));
        assert!(!grid.contains(Position::new(5, 2)));
        assert!(!grid.contains(Position::new(4, 3)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
    }

    #[test]
    fn test_grid_reset() {
        let mut grid = Grid::new(4, 4);
        grid.set(Position::new(1, 2), Tile::Room);
        grid.set(Position::new(3, 0), Tile::Room);

        grid.reset();
        assert_eq!(grid.count(Tile::Empty), 16);
    }

    #[test]
    fn test_grid_row() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(1, 1), Tile::Room);

        let top: Vec<Tile> = grid.row(0).collect();
        let bottom: Vec<Tile> = grid.row(1).collect();
        assert_eq!(top, vec![Tile::Empty; 3]);
        assert_eq!(bottom, vec![Tile::Empty, Tile::Room, Tile::Empty]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_grid_get_out_of_bounds_panics() {
        let grid = Grid::new(4, 4);
        grid.get(Position::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_grid_set_negative_panics() {
        let mut grid = Grid::new(4, 4);
        grid.set(Position::new(-1, 2), Tile::Room);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_grid_zero_dimension_panics() {
        let _ = Grid::new(0, 4);
    }
}

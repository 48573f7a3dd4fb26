//! Text display of a map grid.
//!
//! The renderer only reads the grid — dimensions and per-tile state — and
//! maps each tile to a display character, one output line per grid row.

use crate::map::{Grid, Tile};
use crate::WarrenResult;
use std::io::Write;

/// Display character for a carved room tile.
pub const CHAR_ROOM: char = '#';

/// Display character for an empty tile.
pub const CHAR_EMPTY: char = '.';

/// Renders a [`Grid`] as text.
///
/// # Examples
///
/// ```
/// use warren::{Grid, Position, TextRenderer, Tile};
///
/// let mut grid = Grid::new(3, 2);
/// grid.set(Position::new(1, 0), Tile::Room);
///
/// let text = TextRenderer::new().render(&grid);
/// assert_eq!(text, ".#.\n...\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Maps a tile state to its display character.
    pub fn tile_char(&self, tile: Tile) -> char {
        match tile {
            Tile::Room => CHAR_ROOM,
            Tile::Empty => CHAR_EMPTY,
        }
    }

    /// Renders the whole grid into a string, one line per row, each line
    /// terminated by a newline.
    pub fn render(&self, grid: &Grid) -> String {
        let mut text = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
        for y in 0..grid.height() {
            for tile in grid.row(y) {
                text.push(self.tile_char(tile));
            }
            text.push('\n');
        }
        text
    }

    /// Writes the rendered grid to `writer`.
    pub fn write_to<W: Write>(&self, grid: &Grid, writer: &mut W) -> WarrenResult<()> {
        writer.write_all(self.render(grid).as_bytes())?;
        Ok(())
    }
}

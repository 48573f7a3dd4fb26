//! # Room Shapes
//!
//! The pluggable room generators and the registry that selects among them.
//!
//! A shape turns an anchor point drawn from the current selectable space into
//! a listing of tile coordinates. Shapes only read the grid (to test margins);
//! writing tiles and replacing the selectable space is the fill controller's
//! job.

use crate::generation::sampling::sample;
use crate::map::{Grid, Position};
use crate::{WarrenError, WarrenResult};
use rand::rngs::StdRng;
use rand::Rng;

/// Minimum extent of a generated room, in tiles.
pub const MIN_ROOM_EXTENT: i32 = 2;

/// The available room shapes.
///
/// Dispatched through [`RoomShape::carve`]; the set itself lives in a
/// [`ShapeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomShape {
    /// Axis-aligned solid rectangle grown from the anchor
    Rectangular,
    /// Filled ellipse centered on the anchor
    Elliptic,
}

impl RoomShape {
    /// Produces a room listing into `out`.
    ///
    /// Draws an anchor from `selectable` (redrawing until one satisfies the
    /// shape's margin requirements), sizes the room against `max_room_size`
    /// and the space available around the anchor, and writes the room's tile
    /// coordinates into `out` in scan order. `out` is cleared first and is
    /// never grown past the grid's tile count, so a caller-sized buffer is
    /// reused without reallocation.
    ///
    /// Returns [`WarrenError::GenerationStalled`] when `max_anchor_attempts`
    /// draws produce no suitable anchor.
    pub fn carve(
        &self,
        grid: &Grid,
        selectable: &[Position],
        out: &mut Vec<Position>,
        max_room_size: f64,
        max_anchor_attempts: u32,
        rng: &mut StdRng,
    ) -> WarrenResult<()> {
        match self {
            RoomShape::Rectangular => {
                carve_rectangular(grid, selectable, out, max_room_size, max_anchor_attempts, rng)
            }
            RoomShape::Elliptic => {
                carve_elliptic(grid, selectable, out, max_room_size, max_anchor_attempts, rng)
            }
        }
    }

    /// Shape name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RoomShape::Rectangular => "rectangular",
            RoomShape::Elliptic => "elliptic",
        }
    }
}

/// Holds the ordered set of available room shapes and picks among them
/// uniformly.
///
/// # Examples
///
/// ```
/// use warren::ShapeRegistry;
///
/// let registry = ShapeRegistry::new();
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    shapes: Vec<RoomShape>,
}

impl ShapeRegistry {
    /// Creates the registry with the full shape set.
    pub fn new() -> Self {
        Self {
            shapes: vec![RoomShape::Rectangular, RoomShape::Elliptic],
        }
    }

    /// Number of registered shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry is empty. Never true for [`ShapeRegistry::new`].
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Picks one shape uniformly at random. No weighting, no adaptation.
    pub fn pick(&self, rng: &mut StdRng) -> RoomShape {
        self.shapes[sample(rng, 0, self.shapes.len() as i32) as usize]
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Tiles available from `anchor` to the grid edge in one growth direction,
/// anchor included.
fn available_span(anchor: i32, dimension: u32, grow_positive: bool) -> i32 {
    if grow_positive {
        dimension as i32 - anchor
    } else {
        anchor + 1
    }
}

/// A rectangular room of minimum extent must fit between the anchor and the
/// grid edge in each chosen growth direction.
fn is_suitable_rect_anchor(grid: &Grid, anchor: Position, grow_right: bool, grow_down: bool) -> bool {
    available_span(anchor.x, grid.width(), grow_right) >= MIN_ROOM_EXTENT
        && available_span(anchor.y, grid.height(), grow_down) >= MIN_ROOM_EXTENT
}

/// An elliptic room needs breathing room on every side of its center.
fn is_suitable_ellipse_anchor(grid: &Grid, anchor: Position) -> bool {
    anchor.x >= MIN_ROOM_EXTENT
        && anchor.y >= MIN_ROOM_EXTENT
        && grid.width() as i32 - 1 - anchor.x >= MIN_ROOM_EXTENT
        && grid.height() as i32 - 1 - anchor.y >= MIN_ROOM_EXTENT
}

/// Draws anchors from `selectable` until `accept` passes, up to
/// `max_anchor_attempts` draws.
fn draw_anchor(
    selectable: &[Position],
    max_anchor_attempts: u32,
    rng: &mut StdRng,
    mut accept: impl FnMut(Position, &mut StdRng) -> bool,
) -> WarrenResult<Position> {
    if selectable.is_empty() {
        return Err(WarrenError::GenerationStalled(
            "selectable space is empty".to_string(),
        ));
    }

    for _ in 0..max_anchor_attempts {
        let anchor = selectable[sample(rng, 0, selectable.len() as i32) as usize];
        if accept(anchor, rng) {
            return Ok(anchor);
        }
    }

    Err(WarrenError::GenerationStalled(format!(
        "no suitable anchor among {} candidates after {} attempts",
        selectable.len(),
        max_anchor_attempts
    )))
}

/// Carves a solid rectangle grown from the anchor.
///
/// Growth direction along each axis is a fair binary draw, redrawn together
/// with the anchor on every attempt so one doomed direction pair cannot stall
/// a satisfiable candidate set. Width and height are each sampled from
/// `[2, min(dimension * max_room_size, available))`, floored at the minimum
/// extent.
fn carve_rectangular(
    grid: &Grid,
    selectable: &[Position],
    out: &mut Vec<Position>,
    max_room_size: f64,
    max_anchor_attempts: u32,
    rng: &mut StdRng,
) -> WarrenResult<()> {
    let mut grow_right = false;
    let mut grow_down = false;
    let anchor = draw_anchor(selectable, max_anchor_attempts, rng, |candidate, rng| {
        grow_right = rng.gen_bool(0.5);
        grow_down = rng.gen_bool(0.5);
        is_suitable_rect_anchor(grid, candidate, grow_right, grow_down)
    })?;

    let width_cap = (grid.width() as f64 * max_room_size) as i32;
    let height_cap = (grid.height() as f64 * max_room_size) as i32;
    let avail_w = available_span(anchor.x, grid.width(), grow_right);
    let avail_h = available_span(anchor.y, grid.height(), grow_down);

    let width = sample(rng, MIN_ROOM_EXTENT, width_cap.min(avail_w).max(MIN_ROOM_EXTENT));
    let height = sample(rng, MIN_ROOM_EXTENT, height_cap.min(avail_h).max(MIN_ROOM_EXTENT));

    let x0 = if grow_right { anchor.x } else { anchor.x - (width - 1) };
    let y0 = if grow_down { anchor.y } else { anchor.y - (height - 1) };

    out.clear();
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            out.push(Position::new(x, y));
        }
    }

    Ok(())
}

/// Carves a filled ellipse centered on the anchor.
///
/// The semi-axes are sampled against the distance to the nearest edge and
/// half the scaled maximum room extent. Membership uses the squared-radii
/// form `dx²·h² + dy²·w² <= h²·w²` so no floating division is involved.
fn carve_elliptic(
    grid: &Grid,
    selectable: &[Position],
    out: &mut Vec<Position>,
    max_room_size: f64,
    max_anchor_attempts: u32,
    rng: &mut StdRng,
) -> WarrenResult<()> {
    let anchor = draw_anchor(selectable, max_anchor_attempts, rng, |candidate, _| {
        is_suitable_ellipse_anchor(grid, candidate)
    })?;

    let height_cap = (grid.height() as f64 * max_room_size * 0.5) as i32;
    let width_cap = (grid.width() as f64 * max_room_size * 0.5) as i32;
    let max_height = anchor.y.min(grid.height() as i32 - anchor.y).min(height_cap);
    let max_width = anchor.x.min(grid.width() as i32 - anchor.x).min(width_cap);

    let height = sample(rng, 1, max_height);
    let width = sample(rng, 1, max_width);

    let square_h = (height as i64) * (height as i64);
    let square_w = (width as i64) * (width as i64);

    out.clear();
    for dy in -height..=height {
        for dx in -width..=width {
            let dx2 = (dx as i64) * (dx as i64);
            let dy2 = (dy as i64) * (dy as i64);
            if dx2 * square_h + dy2 * square_w <= square_h * square_w {
                let tile = Position::new(anchor.x + dx, anchor.y + dy);
                if grid.contains(tile) {
                    out.push(tile);
                }
            }
        }
    }

    Ok(())
}

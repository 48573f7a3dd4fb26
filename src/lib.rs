//! # Warren
//!
//! A procedural dungeon map generator that carves chained, randomly shaped
//! rooms into a fixed 2-D tile grid until a target fraction of the grid is
//! filled.
//!
//! ## Architecture Overview
//!
//! The crate is organized around a small set of collaborating pieces:
//!
//! - **Map**: the tile grid itself — a linear-indexed buffer of `Empty`/`Room`
//!   tiles with bounds-checked access
//! - **Range Sampler**: an unbiased pseudo-random integer draw over a
//!   half-open interval, built on rejection sampling
//! - **Room Shapes**: pluggable rectangular and elliptic room generators that
//!   turn an anchor point and a size bound into a listing of tile coordinates
//! - **Fill Controller**: the generation loop — validates the configuration,
//!   picks shapes, inserts rooms and tracks fill progress
//! - **Rendering**: a text renderer that maps tiles to display characters,
//!   row by row
//!
//! Each new room is anchored inside the previously carved one: after a room
//! is inserted, its tile listing becomes the candidate set for the next
//! room's anchor. This chaining is what produces organically connected
//! layouts instead of scattered disconnected boxes.
//!
//! ## Determinism
//!
//! The core performs no seeding of its own. An explicit [`rand::rngs::StdRng`]
//! handle is passed into [`generation::generate`] and threaded through every
//! random decision, so a fixed seed reproduces a layout exactly.

pub mod generation;
pub mod map;
pub mod rendering;

pub use generation::{
    generate, FillController, FillStats, GenerationConfig, RoomShape, ShapeRegistry,
};
pub use map::{Grid, Position, Tile};
pub use rendering::TextRenderer;

/// Core error type for the warren map generator.
#[derive(thiserror::Error, Debug)]
pub enum WarrenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation could not make progress
    #[error("Generation stalled: {0}")]
    GenerationStalled(String),
}

/// Result type used throughout the warren codebase.
pub type WarrenResult<T> = Result<T, WarrenError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generation constants.
pub mod config {
    /// Default map width in tiles
    pub const DEFAULT_MAP_WIDTH: u32 = 80;

    /// Default map height in tiles
    pub const DEFAULT_MAP_HEIGHT: u32 = 40;

    /// Default target fill fraction
    pub const DEFAULT_MIN_FILLING: f64 = 0.4;

    /// Default maximum room extent as a fraction of the grid dimensions
    pub const DEFAULT_MAX_ROOM_SIZE: f64 = 0.1;
}

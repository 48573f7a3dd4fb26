//! # Rendering Module
//!
//! Text rendering of a generated map, row by row.

pub mod text;

pub use text::*;

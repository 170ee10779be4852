//! Pixel grid and the drawing primitives that operate on it.
//!
//! This module defines the core image types:
//! - [`Grid`]: bounds-checked, 1-indexed buffer of [`Color`] cells
//! - [`Shape`]: pixel and axis-aligned segment primitives
//! - [`flood_fill`]: scanline region fill
//! - Text rendering of a grid for display

pub mod color;
pub mod fill;
pub mod grid;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::{BLANK, Color};
pub use fill::{SeedOrder, flood_fill, flood_fill_with};
pub use grid::{CanvasLimits, Grid, GridError};
pub use render::render_rows;
pub use shape::Shape;

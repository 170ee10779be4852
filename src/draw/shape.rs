//! Drawing primitives applied to a grid.

use super::color::Color;
use super::grid::{Grid, GridError};

/// A drawable primitive.
///
/// Segment endpoints are inclusive. A segment whose end precedes its start
/// covers no cells and draws nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Single cell
    Pixel { x: i64, y: i64, color: Color },
    /// Cells `(col, y)` for `y` in `[y1, y2]`
    VerticalSegment {
        col: i64,
        y1: i64,
        y2: i64,
        color: Color,
    },
    /// Cells `(x, row)` for `x` in `[x1, x2]`
    HorizontalSegment {
        x1: i64,
        x2: i64,
        row: i64,
        color: Color,
    },
}

impl Shape {
    /// Paints the shape onto `grid`.
    ///
    /// Both endpoints of a non-empty segment are checked before any cell is
    /// written, so a failed draw leaves the grid untouched.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] for the first endpoint that lies
    /// outside the grid.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        match *self {
            Shape::Pixel { x, y, color } => grid.set(x, y, color),
            Shape::VerticalSegment { col, y1, y2, color } => {
                if y1 > y2 {
                    return Ok(());
                }
                ensure_inside(grid, col, y1)?;
                ensure_inside(grid, col, y2)?;
                for y in y1..=y2 {
                    grid.set(col, y, color)?;
                }
                Ok(())
            }
            Shape::HorizontalSegment { x1, x2, row, color } => {
                if x1 > x2 {
                    return Ok(());
                }
                ensure_inside(grid, x1, row)?;
                ensure_inside(grid, x2, row)?;
                for x in x1..=x2 {
                    grid.set(x, row, color)?;
                }
                Ok(())
            }
        }
    }

    /// Number of cells the shape covers.
    pub fn len(&self) -> usize {
        match *self {
            Shape::Pixel { .. } => 1,
            Shape::VerticalSegment { y1, y2, .. } => span(y1, y2),
            Shape::HorizontalSegment { x1, x2, .. } => span(x1, x2),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ensure_inside(grid: &Grid, x: i64, y: i64) -> Result<(), GridError> {
    if grid.contains(x, y) {
        Ok(())
    } else {
        Err(GridError::OutOfBounds { x, y })
    }
}

fn span(start: i64, end: i64) -> usize {
    if end < start {
        0
    } else {
        (end - start) as usize + 1
    }
}

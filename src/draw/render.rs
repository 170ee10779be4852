//! Text rendering of a grid for the `show` command.

use super::grid::Grid;
use std::fmt;

/// Width of the decimal field each cell is right-aligned in.
pub const CELL_WIDTH: usize = 3;

/// Lazily renders the grid, one string per row.
///
/// Every cell becomes its decimal color right-aligned in a [`CELL_WIDTH`]
/// column, so a row of `width` cells is `3 * width` characters for colors
/// up to three digits. All `height` rows and `width` columns are included.
pub fn render_rows(grid: &Grid) -> impl Iterator<Item = String> + '_ {
    grid.rows().map(|row| {
        row.iter().fold(
            String::with_capacity(row.len() * CELL_WIDTH),
            |mut line, color| {
                line.push_str(&format!("{color:>width$}", width = CELL_WIDTH));
                line
            },
        )
    })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in render_rows(self) {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::CanvasLimits;

    #[test]
    fn renders_every_row_and_column() {
        let mut grid = Grid::new(4, 3, &CanvasLimits::default()).unwrap();
        grid.set(4, 3, 5).unwrap();

        let rows: Vec<String> = render_rows(&grid).collect();
        assert_eq!(rows.len(), 3, "last row must be rendered");
        assert!(rows.iter().all(|r| r.len() == 4 * CELL_WIDTH));
        // Bottom-right cell lives in the last column of the last row.
        assert_eq!(rows[2], "  0  0  0  5");
    }

    #[test]
    fn pads_cells_to_three_columns() {
        let mut grid = Grid::new(3, 1, &CanvasLimits::default()).unwrap();
        grid.set(1, 1, 12).unwrap();
        grid.set(2, 1, -4).unwrap();
        grid.set(3, 1, 123).unwrap();

        let rows: Vec<String> = render_rows(&grid).collect();
        assert_eq!(rows, vec![" 12 -4123".to_string()]);
    }

    #[test]
    fn display_joins_rows_with_newlines() {
        let grid = Grid::new(2, 2, &CanvasLimits::default()).unwrap();
        assert_eq!(grid.to_string(), "  0  0\n  0  0\n");
    }
}

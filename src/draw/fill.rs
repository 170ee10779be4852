//! Scanline flood fill.

use super::color::Color;
use super::grid::{Grid, GridError};
use super::shape::Shape;
use log::debug;
use std::collections::VecDeque;

/// Order in which pending seeds are taken from the work-list.
///
/// The final grid is the same for either order; only the painting sequence differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedOrder {
    /// Most recently pushed seed first (stack)
    #[default]
    Lifo,
    /// Oldest seed first (queue)
    Fifo,
}

impl SeedOrder {
    fn next(self, pending: &mut VecDeque<(i64, i64)>) -> Option<(i64, i64)> {
        match self {
            SeedOrder::Lifo => pending.pop_back(),
            SeedOrder::Fifo => pending.pop_front(),
        }
    }
}

/// Repaints the 4-connected region of `(x, y)` with `color`.
///
/// See [`flood_fill_with`]; this uses [`SeedOrder::Lifo`].
pub fn flood_fill(grid: &mut Grid, x: i64, y: i64, color: Color) -> Result<usize, GridError> {
    flood_fill_with(grid, x, y, color, SeedOrder::default())
}

/// Repaints every cell reachable from `(x, y)` through up/down/left/right
/// steps over cells of the seed's color.
///
/// Works in horizontal runs: each seed is widened to the maximal run of the
/// target color on its row, the run is painted, and target-colored cells
/// directly above and below the run become new seeds. Filling a region with
/// its own color is a no-op.
///
/// Returns the number of cells painted.
///
/// # Errors
/// Returns [`GridError::OutOfBounds`] if the seed lies outside the grid; the
/// grid is not modified in that case.
pub fn flood_fill_with(
    grid: &mut Grid,
    x: i64,
    y: i64,
    color: Color,
    order: SeedOrder,
) -> Result<usize, GridError> {
    let target = grid.get(x, y)?;
    if target == color {
        return Ok(0);
    }

    let mut pending = VecDeque::from([(x, y)]);
    let mut painted = 0;
    let mut runs = 0;

    while let Some((seed_x, seed_y)) = order.next(&mut pending) {
        // An earlier run may already have covered this seed.
        if grid.get(seed_x, seed_y)? != target {
            continue;
        }

        let mut left = seed_x;
        while grid.contains(left - 1, seed_y) && grid.get(left - 1, seed_y)? == target {
            left -= 1;
        }
        let mut right = seed_x;
        while grid.contains(right + 1, seed_y) && grid.get(right + 1, seed_y)? == target {
            right += 1;
        }

        let run = Shape::HorizontalSegment {
            x1: left,
            x2: right,
            row: seed_y,
            color,
        };
        run.apply(grid)?;
        painted += run.len();
        runs += 1;

        for run_x in left..=right {
            for neighbour_y in [seed_y - 1, seed_y + 1] {
                if grid.contains(run_x, neighbour_y) && grid.get(run_x, neighbour_y)? == target {
                    pending.push_back((run_x, neighbour_y));
                }
            }
        }
    }

    debug!(
        "Filled {} cells in {} runs from ({}, {}): {} -> {}",
        painted, runs, x, y, target, color
    );
    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLANK, CanvasLimits};

    fn grid(width: i64, height: i64) -> Grid {
        Grid::new(width, height, &CanvasLimits::default()).unwrap()
    }

    fn draw(grid: &mut Grid, shapes: &[Shape]) {
        for shape in shapes {
            shape.apply(grid).unwrap();
        }
    }

    /// A 7x6 grid with a closed box outline and some stray pixels.
    fn maze() -> Grid {
        let mut g = grid(7, 6);
        draw(
            &mut g,
            &[
                Shape::HorizontalSegment {
                    x1: 2,
                    x2: 6,
                    row: 2,
                    color: 1,
                },
                Shape::HorizontalSegment {
                    x1: 2,
                    x2: 6,
                    row: 5,
                    color: 1,
                },
                Shape::VerticalSegment {
                    col: 2,
                    y1: 2,
                    y2: 5,
                    color: 1,
                },
                Shape::VerticalSegment {
                    col: 6,
                    y1: 2,
                    y2: 5,
                    color: 1,
                },
                Shape::Pixel { x: 4, y: 3, color: 2 },
                Shape::Pixel { x: 7, y: 1, color: 3 },
            ],
        );
        g
    }

    #[test]
    fn uniform_grid_is_filled_entirely() {
        let mut g = grid(5, 5);
        let painted = flood_fill(&mut g, 1, 1, 9).unwrap();
        assert_eq!(painted, 25);
        assert!(g.rows().flatten().all(|&c| c == 9));
    }

    #[test]
    fn fill_from_interior_point_covers_uniform_grid() {
        let mut g = grid(8, 3);
        flood_fill(&mut g, 5, 2, -1).unwrap();
        assert!(g.rows().flatten().all(|&c| c == -1));
    }

    #[test]
    fn isolated_cell_keeps_its_color() {
        let mut g = grid(5, 5);
        g.set(3, 3, 1).unwrap();
        flood_fill(&mut g, 1, 1, 9).unwrap();

        for y in 1..=5 {
            for x in 1..=5 {
                let expected = if (x, y) == (3, 3) { 1 } else { 9 };
                assert_eq!(g.get(x, y).unwrap(), expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn same_color_fill_is_noop() {
        let mut g = maze();
        let before = g.clone();
        assert_eq!(flood_fill(&mut g, 3, 3, BLANK).unwrap(), 0);
        assert_eq!(g, before);
    }

    #[test]
    fn fill_stays_inside_outline() {
        let mut g = maze();
        flood_fill(&mut g, 3, 4, 8).unwrap();

        // Interior of the box, minus the stray pixel.
        for y in 3..=4 {
            for x in 3..=5 {
                let expected = if (x, y) == (4, 3) { 2 } else { 8 };
                assert_eq!(g.get(x, y).unwrap(), expected, "cell ({x}, {y})");
            }
        }
        // Outside and outline untouched.
        assert_eq!(g.get(1, 1).unwrap(), BLANK);
        assert_eq!(g.get(7, 6).unwrap(), BLANK);
        assert_eq!(g.get(2, 2).unwrap(), 1);
    }

    #[test]
    fn fill_does_not_leak_diagonally() {
        let mut g = grid(3, 3);
        // Walls at (2,1) and (1,2) cut off the corner; it meets (2,2) only diagonally.
        draw(
            &mut g,
            &[
                Shape::Pixel { x: 2, y: 1, color: 1 },
                Shape::Pixel { x: 1, y: 2, color: 1 },
            ],
        );
        flood_fill(&mut g, 1, 1, 5).unwrap();
        assert_eq!(g.get(1, 1).unwrap(), 5);
        assert_eq!(g.get(2, 2).unwrap(), BLANK);
        assert_eq!(g.get(3, 3).unwrap(), BLANK);
    }

    #[test]
    fn fill_follows_winding_region() {
        // Serpentine corridor: rows 1, 3, 5 open, walls on rows 2 and 4
        // with gaps at alternating ends.
        let mut g = grid(5, 5);
        draw(
            &mut g,
            &[
                Shape::HorizontalSegment {
                    x1: 1,
                    x2: 4,
                    row: 2,
                    color: 1,
                },
                Shape::HorizontalSegment {
                    x1: 2,
                    x2: 5,
                    row: 4,
                    color: 1,
                },
            ],
        );
        let painted = flood_fill(&mut g, 1, 1, 6).unwrap();
        assert_eq!(painted, 17);
        assert_eq!(g.get(5, 5).unwrap(), 6);
        assert_eq!(g.get(5, 2).unwrap(), 6);
        assert_eq!(g.get(1, 4).unwrap(), 6);
    }

    #[test]
    fn result_is_independent_of_seed_order() {
        for (x, y) in [(1, 1), (3, 4), (4, 3), (7, 6), (7, 1)] {
            let mut lifo = maze();
            let mut fifo = maze();
            let a = flood_fill_with(&mut lifo, x, y, 4, SeedOrder::Lifo).unwrap();
            let b = flood_fill_with(&mut fifo, x, y, 4, SeedOrder::Fifo).unwrap();
            assert_eq!(lifo, fifo, "seed ({x}, {y})");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn seed_outside_grid_is_rejected() {
        let mut g = grid(4, 4);
        let before = g.clone();
        for (x, y) in [(0, 1), (5, 1), (1, 0), (1, 5)] {
            assert_eq!(
                flood_fill(&mut g, x, y, 3),
                Err(GridError::OutOfBounds { x, y })
            );
        }
        assert_eq!(g, before);
    }

    #[test]
    fn single_cell_grid() {
        let mut g = grid(1, 1);
        assert_eq!(flood_fill(&mut g, 1, 1, 2).unwrap(), 1);
        assert_eq!(g.get(1, 1).unwrap(), 2);
    }
}

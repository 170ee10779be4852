//! Bounds-checked pixel buffer.

use super::color::{BLANK, Color};
use thiserror::Error;

/// Default maximum image width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 250;

/// Default maximum image height in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 250;

/// Errors raised by grid creation and cell access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Requested image dimensions fall outside the allowed range.
    #[error("{reason}")]
    InvalidDimensions { reason: String },

    /// Coordinate lies outside `[1, width] x [1, height]`.
    #[error("{x}, {y} is outside image's dimensions.")]
    OutOfBounds { x: i64, y: i64 },
}

/// Limits applied when a new grid is created.
///
/// Width and height are bounded independently. `initial_color` is the color
/// every cell holds after creation and after [`Grid::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLimits {
    pub max_width: u32,
    pub max_height: u32,
    pub initial_color: Color,
}

impl Default for CanvasLimits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            initial_color: BLANK,
        }
    }
}

impl CanvasLimits {
    /// Checks user-supplied dimensions against these limits.
    pub fn validate(&self, width: i64, height: i64) -> Result<(usize, usize), GridError> {
        let invalid = |reason: String| Err(GridError::InvalidDimensions { reason });

        if width < 1 {
            return invalid("Image must be minimum 1 pixel wide.".to_string());
        }
        if height < 1 {
            return invalid("Image must be minimum 1 pixel high.".to_string());
        }
        if width > i64::from(self.max_width) {
            return invalid(format!(
                "Image must be maximum {} pixels wide.",
                self.max_width
            ));
        }
        if height > i64::from(self.max_height) {
            return invalid(format!(
                "Image must be maximum {} pixels high.",
                self.max_height
            ));
        }

        Ok((width as usize, height as usize))
    }
}

/// Rectangular image of colored cells addressed by 1-indexed `(x, y)`.
///
/// `x` selects the column (1 = leftmost) and `y` the row (1 = topmost).
/// Cells are stored row-major with no padding; every access outside
/// `[1, width] x [1, height]` is rejected with [`GridError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    initial_color: Color,
    cells: Vec<Color>,
}

impl Grid {
    /// Creates a grid of `width x height` cells, all set to the initial color.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDimensions`] if either dimension is below 1
    /// or above the corresponding maximum in `limits`.
    pub fn new(width: i64, height: i64, limits: &CanvasLimits) -> Result<Self, GridError> {
        let (width, height) = limits.validate(width, height)?;
        Ok(Self {
            width,
            height,
            initial_color: limits.initial_color,
            cells: vec![limits.initial_color; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color assigned to cells on creation and clear.
    pub fn initial_color(&self) -> Color {
        self.initial_color
    }

    /// Returns true if `(x, y)` addresses a cell of this grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 1 && y >= 1 && x <= self.width as i64 && y <= self.height as i64
    }

    /// Returns the color at `(x, y)`.
    pub fn get(&self, x: i64, y: i64) -> Result<Color, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrites the color at `(x, y)`.
    pub fn set(&mut self, x: i64, y: i64, color: Color) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = color;
        Ok(())
    }

    /// Resets every cell to the initial color.
    pub fn clear(&mut self) {
        self.cells.fill(self.initial_color);
    }

    /// Iterates rows top to bottom, each a slice of `width` colors.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.cells.chunks(self.width)
    }

    fn index(&self, x: i64, y: i64) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok((y as usize - 1) * self.width + (x as usize - 1))
    }
}

//! Color representation for grid cells.

/// Opaque color tag stored in every grid cell.
///
/// Colors carry no channel model; they are plain signed integers chosen by
/// the user and compared only for equality.
///
/// # Examples
///
/// ```
/// use gridpaint::draw::{Color, BLANK};
/// let ink: Color = 7;
/// assert_ne!(ink, BLANK);
/// ```
pub type Color = i64;

/// Color every cell holds after image creation or a clear, unless configured otherwise.
pub const BLANK: Color = 0;

//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both components are validated at construction time.
///
/// # Examples
///
/// ```
/// use numbra_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, left to right, top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self::new(
            box_index % 3 * 3 + cell % 3,
            box_index / 3 * 3 + cell / 3,
        )
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this position,
    /// counted left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns an iterator over all 81 positions in row-major order
    /// (top to bottom, left to right).
    ///
    /// This is the scan order of the deduction pass and branch selection.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81u8).map(|i| Self::new(i % 9, i / 9))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//! Houses: rows, columns, and 3×3 boxes.

use std::fmt::{self, Display};

use crate::Position;

/// A house (row, column, or 3×3 box).
///
/// The three houses of a cell together form its peer group: the set of cells
/// whose values constrain which digits the cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing the given position, in row,
    /// column, box order.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbra_core::{House, Position};
    ///
    /// let houses = House::houses_of(Position::new(4, 7));
    /// assert_eq!(houses[0], House::Row { y: 7 });
    /// assert_eq!(houses[1], House::Column { x: 4 });
    /// assert_eq!(houses[2], House::Box { index: 7 });
    /// ```
    #[must_use]
    pub const fn houses_of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns an iterator over the nine positions of this house.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}

//! The 9×9 puzzle grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// Error returned when a grid string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contains a character that is neither a digit, an empty-cell
    /// marker, nor whitespace.
    #[display("invalid character {c:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
    /// The string does not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

/// Error returned when a raw cell value is outside the range 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value} at {position}: expected 0-9")]
pub struct InvalidValueError {
    position: Position,
    value: u8,
}

impl InvalidValueError {
    /// Returns the position of the invalid cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the rejected raw value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Error returned when a grid violates row/column/box uniqueness among its
/// filled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} at {position} appears more than once in {house}")]
pub struct ConsistencyError {
    position: Position,
    digit: Digit,
    house: House,
}

impl ConsistencyError {
    /// Returns the position of the duplicated digit.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the duplicated digit.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Returns the house in which the duplicate was found.
    #[must_use]
    pub fn house(&self) -> House {
        self.house
    }
}

/// A 9×9 grid of optionally filled cells.
///
/// `None` means the cell is empty (the `0` of raw input). The grid has plain
/// value semantics: cloning yields an independent copy, which is exactly what
/// the search engine relies on when forking a branch per candidate digit.
///
/// All queries ([`allows`](Self::allows), [`candidates`](Self::candidates),
/// [`check_consistency`](Self::check_consistency)) are pure; probing a
/// hypothetical placement never mutates the grid.
///
/// # Examples
///
/// ```
/// use numbra_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(grid.check_consistency().is_ok());
/// # Ok::<(), numbra_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    // cells[y][x], row-major
    cells: [[Option<Digit>; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Writes a digit into an empty cell.
    ///
    /// The deduction and search layers only ever fill empty cells; a value,
    /// once placed, is never overwritten or removed.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the cell is already filled.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.get(pos).is_none(), "cell {pos} is already filled");
        self.cells[pos.y() as usize][pos.x() as usize] = Some(digit);
    }

    /// Returns `true` if placing `digit` at `pos` would not conflict with any
    /// other filled cell in the same row, column, or box.
    ///
    /// This is a hypothetical query: the cell's own current value (if any) is
    /// ignored, and the grid is not touched.
    #[must_use]
    pub fn allows(&self, pos: Position, digit: Digit) -> bool {
        House::houses_of(pos)
            .into_iter()
            .all(|house| house.cells().all(|cell| cell == pos || self.get(cell) != Some(digit)))
    }

    /// Returns the candidate digits for a cell.
    ///
    /// For an empty cell this is the set of digits allowed by row, column,
    /// and box consistency alone; for a filled cell it is the singleton of
    /// its digit, so the option count of any cell is `candidates(pos).len()`.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        if let Some(digit) = self.get(pos) {
            return DigitSet::from_elem(digit);
        }
        Digit::ALL
            .into_iter()
            .filter(|&digit| self.allows(pos, digit))
            .collect()
    }

    /// Checks that no two filled cells sharing a house hold the same digit.
    ///
    /// Empty cells are ignored; a grid that is merely incomplete is still
    /// consistent.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsistencyError`] identifying the first duplicated digit
    /// found in row-major scan order.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for position in Position::all() {
            let Some(digit) = self.get(position) else {
                continue;
            };
            for house in House::houses_of(position) {
                let duplicated = house
                    .cells()
                    .any(|cell| cell != position && self.get(cell) == Some(digit));
                if duplicated {
                    return Err(ConsistencyError {
                        position,
                        digit,
                        house,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        Position::all().all(|pos| self.get(pos).is_some())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_none()).count()
    }

    /// Converts the grid into a raw value matrix, with `0` for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(0, Digit::value)))
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = InvalidValueError;

    /// Builds a grid from a raw value matrix, with `0` meaning empty.
    ///
    /// Values outside 0-9 are rejected; consistency among the filled cells is
    /// a separate concern, checked by [`Grid::check_consistency`].
    fn try_from(values: [[u8; 9]; 9]) -> Result<Self, InvalidValueError> {
        let mut grid = Self::new();
        for position in Position::all() {
            let value = values[position.y() as usize][position.x() as usize];
            if value == 0 {
                continue;
            }
            let digit = Digit::try_from_value(value)
                .ok_or(InvalidValueError { position, value })?;
            grid.place(position, digit);
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid string.
    ///
    /// Digits 1-9 fill cells; `.`, `_`, and `0` mark empty cells; whitespace
    /// is ignored. Exactly 81 cells must be present.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [[None; 9]; 9];
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c as u8 - b'0';
                    Digit::try_from_value(value)
                }
                _ => return Err(ParseGridError::InvalidCharacter { c }),
            };
            if count < 81 {
                cells[count / 9][count % 9] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    /// Formats the grid as nine rows of nine cells, `_` for empty, with a
    /// space between 3-cell groups.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

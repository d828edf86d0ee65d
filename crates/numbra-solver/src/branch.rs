//! Option counting and branch-cell selection.
//!
//! When deduction stagnates, the search engine needs to pick the cell to
//! guess at. A single structural scan of the grid classifies it as solved,
//! dead, or branchable, and in the latter case yields the empty cell with
//! the fewest (but more than one) candidates.

use numbra_core::{DigitSet, Grid, Position};

/// Per-cell option counts for a grid.
///
/// Filled cells count as 1 by convention (their candidate set is the
/// singleton of their digit), so a fully solved grid is all ones.
///
/// # Examples
///
/// ```
/// use numbra_core::{Digit, Grid, Position};
/// use numbra_solver::branch::OptionGrid;
///
/// let mut grid = Grid::new();
/// grid.place(Position::new(0, 0), Digit::D5);
///
/// let options = OptionGrid::new(&grid);
/// assert_eq!(options.count(Position::new(0, 0)), 1);
/// assert_eq!(options.count(Position::new(1, 0)), 8);
/// assert_eq!(options.count(Position::new(8, 8)), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGrid {
    counts: [[u8; 9]; 9],
}

impl OptionGrid {
    /// Computes the option count of every cell.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let mut counts = [[0; 9]; 9];
        for pos in Position::all() {
            #[expect(clippy::cast_possible_truncation)]
            {
                counts[pos.y() as usize][pos.x() as usize] = grid.candidates(pos).len() as u8;
            }
        }
        Self { counts }
    }

    /// Returns the option count at a position.
    #[must_use]
    pub const fn count(&self, pos: Position) -> u8 {
        self.counts[pos.y() as usize][pos.x() as usize]
    }
}

/// Structural classification of a grid at a stagnation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridScan {
    /// Every cell is filled.
    Filled,
    /// An empty cell has no legal candidate; the grid cannot be completed.
    DeadEnd(Position),
    /// The best cell to branch on and its candidate digits.
    Branch {
        /// First empty cell (row-major) attaining the minimum candidate
        /// count greater than one.
        position: Position,
        /// The legal candidate digits at that cell.
        candidates: DigitSet,
    },
}

/// Scans the grid once and classifies it.
///
/// Cells with exactly one candidate are never chosen as branch targets: a
/// filled cell trivially counts 1, and an empty cell with a single candidate
/// cannot survive a stagnated deduction pass. If such a cell nevertheless
/// remains while no cell has two or more candidates (which means the scan was
/// run on a grid deduction has not been applied to), the first one is
/// reported as the branch target with its singleton candidate set.
#[must_use]
pub fn scan(grid: &Grid) -> GridScan {
    let mut best: Option<(Position, DigitSet)> = None;
    let mut fallback: Option<(Position, DigitSet)> = None;
    for pos in Position::all() {
        if grid.get(pos).is_some() {
            continue;
        }
        let candidates = grid.candidates(pos);
        match candidates.len() {
            0 => return GridScan::DeadEnd(pos),
            1 => fallback = fallback.or(Some((pos, candidates))),
            n => {
                if best.is_none_or(|(_, c)| n < c.len()) {
                    best = Some((pos, candidates));
                }
            }
        }
    }
    match best.or(fallback) {
        Some((position, candidates)) => GridScan::Branch {
            position,
            candidates,
        },
        None => GridScan::Filled,
    }
}

//! Shared fixtures and assertions for solver tests.

use numbra_core::{DigitSet, Grid, House};

/// A valid fully solved grid, used as the base for test fixtures.
pub(crate) const SOLVED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// Parses a grid string, panicking on malformed fixtures.
#[track_caller]
pub(crate) fn grid(s: &str) -> Grid {
    s.parse().unwrap()
}

/// Asserts that the grid is completely filled and that every row, column,
/// and box contains each digit exactly once.
#[track_caller]
pub(crate) fn assert_valid_solution(grid: &Grid) {
    assert!(grid.is_filled(), "grid has empty cells:\n{grid}");
    for house in House::ALL {
        let digits: DigitSet = house.cells().filter_map(|pos| grid.get(pos)).collect();
        assert_eq!(
            digits,
            DigitSet::FULL,
            "{house} does not contain all digits:\n{grid}"
        );
    }
}

#[cfg(test)]
mod tests {
    use numbra_core::{Digit, Position};

    use super::*;

    #[test]
    fn test_solved_fixture_is_valid() {
        let solved = grid(SOLVED);
        assert!(solved.check_consistency().is_ok());
        assert_valid_solution(&solved);
    }

    #[test]
    #[should_panic(expected = "grid has empty cells")]
    fn test_assert_valid_solution_rejects_incomplete_grid() {
        assert_valid_solution(&Grid::new());
    }

    #[test]
    #[should_panic(expected = "does not contain all digits")]
    fn test_assert_valid_solution_rejects_duplicate_digits() {
        let mut broken = Grid::new();
        for pos in Position::all() {
            broken.place(pos, Digit::D1);
        }
        assert_valid_solution(&broken);
    }
}

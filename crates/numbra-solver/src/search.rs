use log::{debug, trace};
use numbra_core::Grid;
use tinyvec::TinyVec;

use crate::{
    SolverError,
    branch::{self, GridScan},
    deduction,
};

/// Solutions are kept inline up to the default limit; raising the limit
/// spills to the heap.
type Solutions = TinyVec<[Grid; Solver::DEFAULT_SOLUTION_LIMIT]>;

/// The terminal result of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one filled grid was found within the solution limit.
    Unique(Grid),
    /// More than one branch independently reached a filled grid: the puzzle
    /// is not uniquely solvable. Holds every solution found, up to the
    /// configured limit.
    Multiple(Vec<Grid>),
    /// No branch reached a filled grid. Holds the input grid advanced as far
    /// as deduction could take it, with its remaining cells empty.
    Unsolvable(Grid),
}

impl Outcome {
    /// Returns the first solution found, if any.
    #[must_use]
    pub fn first_solution(&self) -> Option<&Grid> {
        match self {
            Self::Unique(grid) => Some(grid),
            Self::Multiple(grids) => grids.first(),
            Self::Unsolvable(_) => None,
        }
    }
}

/// The solving engine: repeated deduction passes with a branching fallback.
///
/// Each invocation runs deduction to stagnation, then (if empty cells
/// remain) forks one independent grid copy per candidate digit at the
/// least-constrained cell and recurses. Branches share no mutable state, so
/// an abandoned branch can never corrupt its parent or siblings, and every
/// branch placement strictly decreases the number of empty cells, which
/// bounds the recursion depth by 81.
///
/// # Examples
///
/// ```
/// use numbra_core::Grid;
/// use numbra_solver::{Outcome, Solver};
///
/// let solver = Solver::new();
/// let outcome = solver.solve(&Grid::new())?;
/// // the empty grid has many completions
/// assert!(matches!(outcome, Outcome::Multiple(_)));
/// # Ok::<(), numbra_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    solution_limit: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Default number of solutions collected before the search stops.
    ///
    /// Two is enough to distinguish a uniquely solvable puzzle from an
    /// under-constrained one.
    pub const DEFAULT_SOLUTION_LIMIT: usize = 2;

    /// Creates a solver with the default solution limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solution_limit: Self::DEFAULT_SOLUTION_LIMIT,
        }
    }

    /// Sets the maximum number of solutions to collect.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_solution_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "solution limit must be at least 1");
        self.solution_limit = limit;
        self
    }

    /// Solves the grid.
    ///
    /// The input is never mutated; the search works on private copies
    /// throughout. Unsolvable puzzles are an [`Outcome`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the input grid already
    /// contains a duplicate digit in some row, column, or box.
    pub fn solve(&self, grid: &Grid) -> Result<Outcome, SolverError> {
        grid.check_consistency()?;

        let mut work = *grid;
        let mut solutions = Solutions::default();
        self.search(&mut work, 0, &mut solutions);

        let outcome = match solutions.len() {
            0 => Outcome::Unsolvable(work),
            1 => Outcome::Unique(solutions[0]),
            n => {
                debug!("{n} solutions found (limit {})", self.solution_limit);
                Outcome::Multiple(solutions.to_vec())
            }
        };
        Ok(outcome)
    }

    /// One search frame: deduction to stagnation, then branch on the
    /// least-constrained cell.
    ///
    /// `grid` is owned by this frame; branch children are forked copies and
    /// the parent is left untouched once the frame returns.
    fn search(&self, grid: &mut Grid, depth: usize, solutions: &mut Solutions) {
        loop {
            let placed = deduction::apply_deductions(grid);
            if placed == 0 {
                break;
            }
            trace!("depth {depth}: deduction placed {placed} digits");
        }

        match branch::scan(grid) {
            GridScan::Filled => {
                debug!("depth {depth}: solution found");
                solutions.push(*grid);
            }
            GridScan::DeadEnd(pos) => {
                trace!("depth {depth}: dead end, no candidate at {pos}");
            }
            GridScan::Branch {
                position,
                candidates,
            } => {
                debug!(
                    "depth {depth}: branching at {position} over {} candidates",
                    candidates.len()
                );
                for digit in candidates {
                    if solutions.len() >= self.solution_limit {
                        return;
                    }
                    trace!("depth {depth}: trying {digit} at {position}");
                    let mut child = *grid;
                    child.place(position, digit);
                    self.search(&mut child, depth + 1, solutions);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use numbra_core::{Digit, Position};
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{SOLVED, assert_valid_solution, grid};

    #[test]
    fn test_solves_classic_puzzle_uniquely() {
        let puzzle = grid("
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ");
        let outcome = Solver::new().solve(&puzzle).unwrap();
        assert_eq!(outcome, Outcome::Unique(grid(SOLVED)));
    }

    #[test]
    fn test_solution_preserves_given_clues() {
        let puzzle = grid("
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ");
        let outcome = Solver::new().solve(&puzzle).unwrap();
        let solution = outcome.first_solution().unwrap();
        assert_valid_solution(solution);
        for pos in Position::all() {
            if let Some(digit) = puzzle.get(pos) {
                assert_eq!(solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_input_grid_is_not_mutated() {
        let puzzle = grid("
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ");
        let copy = puzzle;
        let _ = Solver::new().solve(&puzzle).unwrap();
        assert_eq!(puzzle, copy);
    }

    #[test]
    fn test_rejects_inconsistent_input() {
        let mut puzzle = Grid::new();
        puzzle.place(Position::new(0, 0), Digit::D4);
        puzzle.place(Position::new(8, 0), Digit::D4);

        let error = Solver::new().solve(&puzzle).unwrap_err();
        assert!(matches!(error, SolverError::Inconsistent(_)));
    }

    #[test]
    fn test_unsolvable_puzzle_reports_stalled_grid() {
        // (8, 0) accepts no digit: 1-8 fill its row and 9 blocks its column.
        let puzzle = grid("
            123 456 78_
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ __9
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ");
        let Outcome::Unsolvable(stalled) = Solver::new().solve(&puzzle).unwrap() else {
            panic!("expected an unsolvable outcome");
        };
        assert_eq!(stalled.get(Position::new(8, 0)), None);
        // deduction never wrote anything inconsistent into the stalled grid
        assert!(stalled.check_consistency().is_ok());
    }

    #[test]
    fn test_under_constrained_puzzle_surfaces_both_solutions() {
        // Blanking a deadly rectangle (rows 0 and 3, columns 3 and 4,
        // digits 6 and 7) leaves exactly two completions.
        let solved = grid(SOLVED);
        let holes = [
            Position::new(3, 0),
            Position::new(4, 0),
            Position::new(3, 3),
            Position::new(4, 3),
        ];
        let mut puzzle = Grid::new();
        for pos in Position::all() {
            if !holes.contains(&pos) {
                puzzle.place(pos, solved.get(pos).unwrap());
            }
        }

        let Outcome::Multiple(solutions) = Solver::new().solve(&puzzle).unwrap() else {
            panic!("expected a multiple-solutions outcome");
        };
        assert_eq!(solutions.len(), 2);
        for solution in &solutions {
            assert_valid_solution(solution);
        }
        assert_ne!(solutions[0], solutions[1]);
        assert!(solutions.contains(&solved));
    }

    #[test]
    fn test_branch_failure_does_not_lose_other_solutions() {
        // Nearly empty grids stall deduction immediately, so the search must
        // branch; some candidates dead-end deep in the tree, yet solutions
        // are still found.
        let mut puzzle = Grid::new();
        puzzle.place(Position::new(0, 0), Digit::D1);
        puzzle.place(Position::new(4, 4), Digit::D2);

        let Outcome::Multiple(solutions) = Solver::new().solve(&puzzle).unwrap() else {
            panic!("expected a multiple-solutions outcome");
        };
        assert_eq!(solutions.len(), 2);
        for solution in &solutions {
            assert_valid_solution(solution);
            assert_eq!(solution.get(Position::new(0, 0)), Some(Digit::D1));
            assert_eq!(solution.get(Position::new(4, 4)), Some(Digit::D2));
        }
    }

    #[test]
    fn test_solution_limit_caps_collection() {
        let solver = Solver::new().with_solution_limit(5);
        let Outcome::Multiple(solutions) = solver.solve(&Grid::new()).unwrap() else {
            panic!("expected a multiple-solutions outcome");
        };
        assert_eq!(solutions.len(), 5);
    }

    #[test]
    #[should_panic(expected = "solution limit must be at least 1")]
    fn test_zero_solution_limit_panics() {
        let _ = Solver::new().with_solution_limit(0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Deleting any subset of cells from a valid solved grid leaves a
        /// solvable puzzle, and every returned solution is a valid filled
        /// grid.
        #[test]
        fn prop_subgrids_of_solution_stay_solvable(
            holes in proptest::collection::btree_set(0u8..81, 0..=60)
        ) {
            let solved = grid(SOLVED);
            let mut puzzle = Grid::new();
            for (i, pos) in (0u8..).zip(Position::all()) {
                if !holes.contains(&i) {
                    puzzle.place(pos, solved.get(pos).unwrap());
                }
            }

            let outcome = Solver::new().solve(&puzzle).unwrap();
            prop_assert!(!matches!(outcome, Outcome::Unsolvable(_)));
            let solution = outcome.first_solution().unwrap();
            assert_valid_solution(solution);
            for pos in Position::all() {
                if let Some(digit) = puzzle.get(pos) {
                    prop_assert_eq!(solution.get(pos), Some(digit));
                }
            }
        }

        /// Deduction passes are monotone and idempotent at their fixed point.
        #[test]
        fn prop_deduction_is_monotone_and_idempotent(
            holes in proptest::collection::btree_set(0u8..81, 0..=60)
        ) {
            let solved = grid(SOLVED);
            let mut puzzle = Grid::new();
            for (i, pos) in (0u8..).zip(Position::all()) {
                if !holes.contains(&i) {
                    puzzle.place(pos, solved.get(pos).unwrap());
                }
            }

            loop {
                let before = puzzle.empty_count();
                let placed = crate::deduction::apply_deductions(&mut puzzle);
                prop_assert_eq!(puzzle.empty_count(), before - placed);
                if placed == 0 {
                    break;
                }
            }
            let fixed_point = puzzle;
            prop_assert_eq!(crate::deduction::apply_deductions(&mut puzzle), 0);
            prop_assert_eq!(puzzle, fixed_point);
        }

        /// Abandoned branches never leak into caller-visible state: the
        /// input grid is bit-identical after `solve`, whatever the search
        /// explored.
        #[test]
        fn prop_solve_leaves_input_grid_untouched(
            holes in proptest::collection::btree_set(0u8..81, 0..=60)
        ) {
            let solved = grid(SOLVED);
            let mut puzzle = Grid::new();
            for (i, pos) in (0u8..).zip(Position::all()) {
                if !holes.contains(&i) {
                    puzzle.place(pos, solved.get(pos).unwrap());
                }
            }

            let before = puzzle;
            let _ = Solver::new().solve(&puzzle).unwrap();
            prop_assert_eq!(puzzle, before);
        }
    }
}

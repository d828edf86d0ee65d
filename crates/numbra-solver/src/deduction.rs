//! Deterministic deduction: single-candidate and unique-placement rules.
//!
//! A deduction pass visits every empty cell in row-major order and fills it
//! when one of two rules determines its digit:
//!
//! - **Single candidate**: only one digit is consistent with the cell's row,
//!   column, and box.
//! - **Unique placement**: one of the cell's candidate digits has no other
//!   legal home among the empty cells of the cell's row, column, *or* box.
//!   A digit forced in any single house justifies the placement, so the three
//!   per-house checks combine with OR.
//!
//! The pass is sequential and order-dependent: a placement immediately
//! constrains the cells visited later in the same pass. A pass that places
//! nothing is the stagnation signal the search engine branches on, and
//! re-running a pass at that fixed point changes nothing.

use numbra_core::{Digit, Grid, House, Position};

/// Returns `true` if exactly one empty cell in `house` can legally hold
/// `digit`.
///
/// Filled cells are not counted, even one already holding `digit`.
#[must_use]
pub fn unique_in_house(grid: &Grid, digit: Digit, house: House) -> bool {
    let mut spots = 0;
    for pos in house.cells() {
        if grid.get(pos).is_none() && grid.allows(pos, digit) {
            spots += 1;
            if spots > 1 {
                return false;
            }
        }
    }
    spots == 1
}

/// Returns `true` if `digit` is forced at `pos` by uniqueness in the cell's
/// row, column, or box.
///
/// The caller guarantees that `digit` is a legal candidate at `pos`; when it
/// is, a house with exactly one legal spot for `digit` can only mean that
/// spot is `pos` itself.
#[must_use]
pub fn has_unique_placement(grid: &Grid, digit: Digit, pos: Position) -> bool {
    House::houses_of(pos)
        .into_iter()
        .any(|house| unique_in_house(grid, digit, house))
}

/// Runs one deduction pass over the grid, returning the number of digits
/// placed.
///
/// Cells that remain ambiguous after both rules are left unchanged; a return
/// value of `0` means the pass stagnated. Only empty cells are ever written.
pub fn apply_deductions(grid: &mut Grid) -> usize {
    let mut placed = 0;
    for pos in Position::all() {
        if grid.get(pos).is_some() {
            continue;
        }
        let candidates = grid.candidates(pos);
        if let Some(digit) = candidates.as_single() {
            grid.place(pos, digit);
            placed += 1;
            continue;
        }
        // ascending digit order, first forced digit wins
        for digit in candidates {
            if has_unique_placement(grid, digit, pos) {
                grid.place(pos, digit);
                placed += 1;
                break;
            }
        }
    }
    placed
}

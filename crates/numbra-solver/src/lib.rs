//! The Numbra solving engine.
//!
//! The engine combines two deterministic deduction rules with a branching
//! fallback search:
//!
//! 1. **Single candidate** ([`deduction`]): an empty cell with exactly one
//!    legal digit is filled immediately.
//! 2. **Unique placement** ([`deduction`]): a digit with exactly one legal
//!    home among the empty cells of a row, column, or box is placed there.
//! 3. **Branching search** ([`search`]): when a full deduction pass changes
//!    nothing, the [`branch`] module selects the empty cell with the fewest
//!    candidates, and the engine forks an independent grid copy per candidate
//!    digit and recurses.
//!
//! Solutions found across branches are collected, so an under-constrained
//! puzzle surfaces as [`Outcome::Multiple`] instead of silently yielding an
//! arbitrary solution.
//!
//! # Examples
//!
//! ```
//! use numbra_core::Grid;
//! use numbra_solver::{Outcome, Solver};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let outcome = Solver::new().solve(&grid)?;
//! assert!(matches!(outcome, Outcome::Unique(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, search::*};

pub mod branch;
pub mod deduction;
mod error;
mod search;

#[cfg(test)]
mod testing;

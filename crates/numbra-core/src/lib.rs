//! Core data structures for the Numbra solving engine.
//!
//! This crate provides the value types the solver operates on:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: an (x, y) cell coordinate on the 9×9 board
//! - [`House`]: a row, column, or 3×3 box
//! - [`DigitSet`]: a bitset of candidate digits for a single cell
//! - [`Grid`]: a 9×9 grid of optionally filled cells with consistency
//!   checking, candidate enumeration, parsing, and formatting
//!
//! All candidate and consistency queries are pure: they take an immutable
//! grid reference plus a hypothetical `(position, digit)` pair and never
//! mutate caller-visible state.
//!
//! # Examples
//!
//! ```
//! use numbra_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.place(Position::new(4, 4), Digit::D5);
//!
//! // 5 conflicts along the shared column
//! assert!(!grid.allows(Position::new(4, 7), Digit::D5));
//! assert!(!grid.candidates(Position::new(4, 0)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{ConsistencyError, Grid, InvalidValueError, ParseGridError},
    house::House,
    position::Position,
};

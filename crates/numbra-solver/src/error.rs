use numbra_core::ConsistencyError;

/// Errors reported by the solver before any solving work starts.
///
/// Unsolvable and stalled states are not errors: they are ordinary outcomes
/// of the search and surface as [`Outcome`](crate::Outcome) variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The input grid already violates row/column/box uniqueness among its
    /// filled cells, so any deduction from it would be meaningless.
    #[display("inconsistent input grid: {_0}")]
    Inconsistent(#[from] ConsistencyError),
}

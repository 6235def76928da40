//! Error types for non-dominated sorting.

use thiserror::Error;

/// Errors raised while validating a sorting request.
///
/// All variants are produced before any ranking work starts, so a failed
/// call never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// No decisions were supplied.
    #[error("no decisions to sort")]
    EmptyInput,

    /// Objective vectors differ in length.
    ///
    /// `expected` is the dimension of the first vector; `positions` lists
    /// every input position whose vector has a different dimension.
    #[error("objective vectors at positions {positions:?} do not have {expected} objectives")]
    DimensionMismatch {
        expected: usize,
        positions: Vec<usize>,
    },

    /// Fewer than two objectives per vector.
    #[error("at least 2 objectives are required, found {dimension}")]
    InsufficientObjectives { dimension: usize },

    /// An objective value is not comparable with itself (e.g. `f64::NAN`).
    #[error("objective {objective} of the vector at position {position} is not comparable")]
    IncomparableValue { position: usize, objective: usize },

    /// Two vectors of different length were compared for dominance.
    #[error("cannot compare vectors of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
/// Possible `libtupper` errors
pub enum Error {
    /// Error returned if a grid does not have exactly
    /// [`crate::Grid::HEIGHT`] rows of [`crate::Grid::WIDTH`] pixels
    #[error("grid must be {expected:?} (rows, columns), found {found:?}")]
    InvalidDimensions {
        /// expected (rows, columns)
        expected: (usize, usize),
        /// (rows, columns) of the offending input. For ragged input the
        /// column count is the length of the first row that does not fit
        found: (usize, usize),
    },
    /// Error returned by a strict [`crate::Evaluator`] whose precision cannot hold
    /// every significant digit of the seed
    #[error("seed needs {required} significant digits, but the evaluator only carries {available}")]
    InsufficientPrecision {
        /// significant decimal digits of the working seed
        required: usize,
        /// significant decimal digits carried by the evaluator
        available: usize,
    },
    /// Error returned if applying a shift moves the seed below zero
    #[error("shifted seed is negative: {0}")]
    NegativeSeed(BigInt),
    /// Error returned if a seed, shift or grid literal fails to parse
    #[error("invalid {kind} literal: {input:?}")]
    Parse {
        /// what was being parsed
        kind: &'static str,
        /// the offending input
        input: String,
    },
}

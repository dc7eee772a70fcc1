//! Error types for vector, matrix and equation-system operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which kind of operand carried the mismatched dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Vector,
    Matrix,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Vector => write!(f, "Vectors"),
            Operand::Matrix => write!(f, "Matrices"),
        }
    }
}

/// Errors that can occur during linear algebra operations.
///
/// Every failure is immediate and carries no partial result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// An index is outside `[0, len)`.
    #[error("Index {index} is out of bounds for dimension {len}")]
    OutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the indexed dimension
        len: usize,
    },

    /// Two operands of a binary operation have incompatible shapes.
    #[error("{operand} have unlike dimensions: expected {expected}, found {found}")]
    UnlikeDimensions {
        /// Kind of operand that carried the mismatch
        operand: Operand,
        /// Dimension required by the receiver
        expected: usize,
        /// Dimension that was supplied
        found: usize,
    },

    /// An equation was evaluated against a vector of different dimension.
    #[error("Number of variables ({expected}) and dimension of vector ({found}) do not match")]
    UnlikeVariables {
        /// Number of coefficients in the equation
        expected: usize,
        /// Dimension of the supplied vector
        found: usize,
    },

    /// A square-only operation was invoked on a non-square matrix.
    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Zero determinant, or no nonzero pivot during elimination.
    #[error("Matrix is singular")]
    Singular,

    /// Rows handed to a matrix constructor do not all have the same length.
    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Returns `Ok(())` when `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::OutOfBounds { index, len })
    }
}

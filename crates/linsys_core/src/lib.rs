pub mod equation;
pub mod error;
pub mod interop;
pub mod matrix;
pub mod report;
pub mod system;
/// The `linsys_core` crate provides dense vectors, matrices and linear equation systems.
/// Every container is generic over `Scalar` (any `num_traits::Float`), defaulting to `f64`.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction).
/// - **Vector / Matrix**: value types with checked indexing; the matrix carries the
///   cofactor-expansion determinant, adjugate inverse and Gaussian elimination.
/// - **Equation / System**: `c · x = r` equations and their collection, solved by
///   inversion or by back-substitution.
/// - **Report**: solve-and-verify summary for callers that want one serializable answer.
pub mod traits;
pub mod vector;

pub use equation::Equation;
pub use error::{LinalgError, Operand, Result};
pub use matrix::Matrix;
pub use system::{SolveMethod, SolveSettings, System};
pub use vector::Vector;

use crate::error::{LinalgError, Result};
use crate::traits::Scalar;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One linear equation `c · x = r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation<T = f64> {
    coefficients: Vector<T>,
    result: T,
}

impl<T: Scalar> Equation<T> {
    pub fn new(coefficients: Vector<T>, result: T) -> Self {
        Self {
            coefficients,
            result,
        }
    }

    pub fn from_vec(coefficients: Vec<T>, result: T) -> Self {
        Self::new(Vector::from_vec(coefficients), result)
    }

    /// Number of coefficients.
    pub fn dim(&self) -> usize {
        self.coefficients.dim()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.coefficients.get(index)
    }

    pub fn coefficients(&self) -> &Vector<T> {
        &self.coefficients
    }

    /// The right-hand side.
    pub fn res(&self) -> T {
        self.result
    }

    /// Left-hand side evaluated at `values`.
    pub fn plug(&self, values: &Vector<T>) -> Result<T> {
        if values.dim() != self.dim() {
            return Err(LinalgError::UnlikeVariables {
                expected: self.dim(),
                found: values.dim(),
            });
        }
        self.coefficients.dot(values)
    }

    /// Exact check that `values` satisfies the equation.
    pub fn check(&self, values: &Vector<T>) -> Result<bool> {
        Ok(self.plug(values)? == self.result)
    }

    /// `plug(values) - res()`.
    pub fn residual(&self, values: &Vector<T>) -> Result<T> {
        Ok(self.plug(values)? - self.result)
    }

    pub fn check_within(&self, values: &Vector<T>, tolerance: T) -> Result<bool> {
        Ok(self.residual(values)?.abs() <= tolerance)
    }
}

impl<T: fmt::Display> fmt::Display for Equation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.coefficients.dim();
        for (idx, c) in self.coefficients.iter().enumerate() {
            write!(f, "{:.6}x{}", c, idx + 1)?;
            if idx + 1 != count {
                write!(f, " + ")?;
            }
        }
        write!(f, " = {:.6}", self.result)
    }
}

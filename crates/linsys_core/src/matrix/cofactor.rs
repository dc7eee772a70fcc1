//! Determinant by cofactor expansion, and the inverse built on it.
//!
//! The expansion recurses along the first row and costs O(n!), so it is
//! only practical for a handful of unknowns.

use super::Matrix;
use crate::error::{check_index, LinalgError, Result};
use crate::traits::{alternating_sign, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Determinant. The `0 x 0` matrix has determinant one.
    pub fn det(&self) -> Result<T> {
        self.require_square()?;
        Ok(self.expand_det())
    }

    /// Determinant of the submatrix with row `i` and column `j` removed.
    pub fn minor(&self, i: usize, j: usize) -> Result<T> {
        check_index(i, self.rows)?;
        check_index(j, self.cols)?;
        self.without(i, j).det()
    }

    /// `(-1)^(i+j)` times the minor at `(i, j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T> {
        Ok(alternating_sign::<T>(i + j) * self.minor(i, j)?)
    }

    /// Classical adjugate: the transposed cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        let mut cofactors = Vec::with_capacity(self.rows * self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                cofactors.push(self.cofactor(i, j)?);
            }
        }
        Ok(Matrix::from_parts(self.rows, self.cols, cofactors).transpose())
    }

    /// `adj(A) / det(A)`. A determinant of exactly zero is singular.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let det = self.det()?;
        if det == T::zero() {
            return Err(LinalgError::Singular);
        }
        Ok(self.adjugate()?.scalar_multiply(T::one() / det))
    }

    fn expand_det(&self) -> T {
        let d = &self.data;
        match self.rows {
            0 => T::one(),
            1 => d[0],
            2 => d[0] * d[3] - d[1] * d[2],
            n => {
                log::trace!("expanding {n}x{n} determinant along row 0");
                (0..n).fold(T::zero(), |acc, i| {
                    acc + alternating_sign::<T>(i) * self.without(0, i).expand_det() * d[i]
                })
            }
        }
    }

    /// Copy of `self` with row `skip_row` and column `skip_col` removed.
    fn without(&self, skip_row: usize, skip_col: usize) -> Matrix<T> {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != skip_row) {
            for (j, &value) in self.row_slice(i).iter().enumerate() {
                if j != skip_col {
                    data.push(value);
                }
            }
        }
        Matrix::from_parts(self.rows - 1, self.cols - 1, data)
    }
}

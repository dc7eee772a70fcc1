//! Conversions to and from `nalgebra` dense types.

use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;
use nalgebra::{DMatrix, DVector};

impl<T: Scalar> Matrix<T> {
    pub fn to_dmatrix(&self) -> DMatrix<T> {
        DMatrix::from_row_slice(self.nrows(), self.ncols(), self.as_slice())
    }

    pub fn from_dmatrix(matrix: &DMatrix<T>) -> Self {
        Matrix::from_fn(matrix.nrows(), matrix.ncols(), |i, j| matrix[(i, j)])
    }
}

impl<T: Scalar> Vector<T> {
    pub fn to_dvector(&self) -> DVector<T> {
        DVector::from_column_slice(self.as_slice())
    }

    pub fn from_dvector(vector: &DVector<T>) -> Self {
        vector.iter().copied().collect()
    }
}

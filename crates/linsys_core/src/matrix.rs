//! Dense row-major matrices.
//!
//! The core type lives here together with shape accessors, row/column
//! manipulation, transposition and multiplication. The determinant family
//! (minor, cofactor, adjugate, inverse) is in [`cofactor`], Gaussian
//! elimination and back-substitution in [`elimination`].

mod cofactor;
mod elimination;

use crate::error::{check_index, LinalgError, Operand, Result};
use crate::traits::Scalar;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// An `M x N` matrix stored row-major in a single buffer.
///
/// Serialized as a list of rows; deserialization rejects ragged input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: Deserialize<'de>"
    )
)]
pub struct Matrix<T = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LinalgError::RaggedRows {
                    row: idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols,
            data,
        })
    }

    /// A matrix without rows has no columns either.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        let cols = if rows == 0 { 0 } else { cols };
        Self { rows, cols, data }
    }

    /// Number of rows (`M`).
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`N`); zero for an empty matrix.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_same_dimension(&self, other: &Matrix<T>) -> bool {
        self.shape() == other.shape()
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_parts(rows, cols, vec![T::zero(); rows * cols])
    }

    /// Builds an `rows x cols` matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self::from_parts(rows, cols, data)
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, identity_entry)
    }

    /// Assembles a matrix whose columns are `columns`, in order.
    pub fn from_columns(columns: &[Vector<T>]) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Ok(Self::default());
        };
        let rows = first.dim();
        if let Some(short) = columns.iter().find(|c| c.dim() != rows) {
            return Err(LinalgError::UnlikeDimensions {
                operand: Operand::Vector,
                expected: rows,
                found: short.dim(),
            });
        }
        Ok(Self::from_fn(rows, columns.len(), |i, j| columns[j][i]))
    }

    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        check_index(i, self.rows)?;
        check_index(j, self.cols)?;
        Ok(self.data[self.offset(i, j)])
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        check_index(i, self.rows)?;
        check_index(j, self.cols)?;
        let offset = self.offset(i, j);
        self.data[offset] = value;
        Ok(())
    }

    /// Copies row `i` out as a vector.
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        check_index(i, self.rows)?;
        Ok(Vector::from_vec(self.row_slice(i).to_vec()))
    }

    /// Copies column `j` out as a vector.
    pub fn column(&self, j: usize) -> Result<Vector<T>> {
        check_index(j, self.cols)?;
        Ok((0..self.rows).map(|i| self.data[self.offset(i, j)]).collect())
    }

    pub fn set_row(&mut self, i: usize, row: &Vector<T>) -> Result<()> {
        self.require_len(self.cols, row.dim())?;
        check_index(i, self.rows)?;
        let start = self.offset(i, 0);
        self.data[start..start + self.cols].copy_from_slice(row.as_slice());
        Ok(())
    }

    pub fn set_column(&mut self, j: usize, column: &Vector<T>) -> Result<()> {
        self.require_len(self.rows, column.dim())?;
        check_index(j, self.cols)?;
        for (i, &value) in column.iter().enumerate() {
            let offset = self.offset(i, j);
            self.data[offset] = value;
        }
        Ok(())
    }

    /// Appends a row. A matrix without rows takes its width from `row`.
    pub fn append_row(&mut self, row: &Vector<T>) -> Result<()> {
        if self.rows == 0 {
            self.cols = row.dim();
        }
        self.require_len(self.cols, row.dim())?;
        self.data.extend_from_slice(row.as_slice());
        self.rows += 1;
        Ok(())
    }

    /// Appends a column. An empty matrix takes its height from `column`;
    /// appending an empty column to it is a no-op.
    pub fn append_column(&mut self, column: &Vector<T>) -> Result<()> {
        if self.rows == 0 {
            self.rows = column.dim();
        }
        self.require_len(self.rows, column.dim())?;
        if self.rows == 0 {
            return Ok(());
        }
        let mut data = Vec::with_capacity(self.rows * (self.cols + 1));
        for i in 0..self.rows {
            data.extend_from_slice(self.row_slice(i));
            data.push(column[i]);
        }
        self.data = data;
        self.cols += 1;
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<T> {
        Self::from_fn(self.cols, self.rows, |i, j| self.data[self.offset(j, i)])
    }

    pub fn scalar_multiply(&self, factor: T) -> Matrix<T> {
        Self::from_parts(
            self.rows,
            self.cols,
            self.data.iter().map(|&v| v * factor).collect(),
        )
    }

    /// Matrix product `self x other`; entry `(i, j)` is row `i` dotted with column `j`.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(LinalgError::UnlikeDimensions {
                operand: Operand::Matrix,
                expected: self.cols,
                found: other.rows,
            });
        }
        let columns = (0..other.cols)
            .map(|j| other.column(j))
            .collect::<Result<Vec<_>>>()?;
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let row = self.row(i)?;
            for column in &columns {
                data.push(row.dot(column)?);
            }
        }
        Ok(Self::from_parts(self.rows, other.cols, data))
    }

    fn require_len(&self, expected: usize, found: usize) -> Result<()> {
        if expected != found {
            return Err(LinalgError::UnlikeDimensions {
                operand: Operand::Matrix,
                expected,
                found,
            });
        }
        Ok(())
    }
}

fn identity_entry<T: Scalar>(i: usize, j: usize) -> T {
    if i == j {
        T::one()
    } else {
        T::zero()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: Clone> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        if matrix.cols == 0 {
            return vec![Vec::new(); matrix.rows];
        }
        matrix
            .data
            .chunks(matrix.cols)
            .map(<[T]>::to_vec)
            .collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for value in self.row_slice(i) {
                write!(f, "{:>9.2} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

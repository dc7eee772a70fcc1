use super::Matrix;
use crate::error::{LinalgError, Operand, Result};
use crate::traits::Scalar;
use crate::vector::Vector;

impl<T: Scalar> Matrix<T> {
    /// Forward Gaussian elimination in place, without full pivoting.
    ///
    /// Row `i` has multiples of the already-normalized rows `0..i` subtracted,
    /// borrows a lower row when its pivot is zero, and is scaled so the pivot is
    /// one. Entries above pivots are left as elimination produced them.
    ///
    /// On `Singular` the offending row holds its partially reduced values.
    pub fn to_reduced_row_echelon(&mut self) -> Result<()> {
        for i in 0..self.rows {
            if i >= self.cols {
                return Err(LinalgError::Singular);
            }
            let mut current = self.eliminate_leading(self.row(i)?, i)?;

            if current[i] == T::zero() {
                for k in (i + 1)..self.rows {
                    let candidate = self.eliminate_leading(self.row(k)?, i)?;
                    if candidate[i] != T::zero() {
                        log::trace!("row {i}: zero pivot, adding row {k}");
                        current = current.add(&candidate)?;
                        break;
                    }
                }
            }

            let pivot = current[i];
            if pivot == T::zero() {
                log::trace!("row {i}: no nonzero pivot in column {i}");
                self.set_row(i, &current)?;
                return Err(LinalgError::Singular);
            }
            self.set_row(i, &current.scale(T::one() / pivot))?;
        }
        Ok(())
    }

    /// Solves an augmented system `[A | b]` on a copy of `self`.
    ///
    /// The last column is the right-hand side, so the matrix must be
    /// `n x (n + 1)`; the empty matrix is the augmented form of the empty
    /// system. The solution is returned in variable order.
    pub fn back_substitute(&self) -> Result<Vector<T>> {
        let n = self.rows;
        if n > 0 && self.cols != n + 1 {
            return Err(LinalgError::UnlikeDimensions {
                operand: Operand::Matrix,
                expected: n + 1,
                found: self.cols,
            });
        }

        let mut reduced = self.clone();
        reduced.to_reduced_row_echelon()?;

        let mut solution = vec![T::zero(); n];
        for i in (0..n).rev() {
            let row = reduced.row_slice(i);
            let lhs = ((i + 1)..n)
                .rev()
                .fold(T::zero(), |acc, j| acc + solution[j] * row[j]);
            solution[i] = row[n] - lhs;
        }
        Ok(Vector::from_vec(solution))
    }

    /// Clears columns `0..upto` of `row` using the normalized rows above.
    fn eliminate_leading(&self, mut row: Vector<T>, upto: usize) -> Result<Vector<T>> {
        for j in 0..upto {
            let factor = row[j];
            if factor != T::zero() {
                row = row.add(&self.row(j)?.scale(-factor))?;
            }
        }
        Ok(row)
    }
}

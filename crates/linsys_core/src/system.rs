use crate::equation::Equation;
use crate::error::{check_index, Result};
use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// How [`System::solve_with`] computes the solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    /// `A^-1 b` with the inverse built from the adjugate and determinant.
    #[default]
    Inverse,
    /// Gaussian elimination on `[A | b]` followed by back-substitution.
    Elimination,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveSettings {
    pub method: SolveMethod,
    /// Largest accepted `|plug(x) - res|` when verifying a solution.
    pub tolerance: f64,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            method: SolveMethod::Inverse,
            tolerance: 1e-9,
        }
    }
}

/// An ordered collection of linear equations over the same unknowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct System<T = f64> {
    equations: Vec<Equation<T>>,
}

impl<T: Scalar> System<T> {
    pub fn new(equations: Vec<Equation<T>>) -> Self {
        Self { equations }
    }

    /// Dimension of the first equation, or zero without equations.
    pub fn dim(&self) -> usize {
        self.equations.first().map_or(0, Equation::dim)
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Equation<T>> {
        check_index(index, self.len())?;
        Ok(&self.equations[index])
    }

    pub fn equations(&self) -> &[Equation<T>] {
        &self.equations
    }

    /// Coefficient matrix: row `j` holds the coefficients of equation `j`.
    pub fn coeff(&self) -> Result<Matrix<T>> {
        let columns = (0..self.dim())
            .map(|i| {
                self.equations
                    .iter()
                    .map(|eq| eq.get(i))
                    .collect::<Result<Vector<T>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_columns(&columns)
    }

    /// Right-hand sides in equation order.
    pub fn res(&self) -> Vector<T> {
        self.equations.iter().map(Equation::res).collect()
    }

    /// Coefficient matrix with the right-hand sides appended as the last column.
    pub fn augmented(&self) -> Result<Matrix<T>> {
        let mut matrix = self.coeff()?;
        matrix.append_column(&self.res())?;
        Ok(matrix)
    }

    /// Solves by inverting the coefficient matrix.
    pub fn solve(&self) -> Result<Vector<T>> {
        log::debug!(
            "solving {}x{} system by inversion",
            self.len(),
            self.dim()
        );
        let inverse = self.coeff()?.inverse()?;
        let product = inverse.multiply(&self.res().to_matrix())?;
        Ok(product.as_slice().iter().copied().collect())
    }

    pub fn solve_with(&self, method: SolveMethod) -> Result<Vector<T>> {
        match method {
            SolveMethod::Inverse => self.solve(),
            SolveMethod::Elimination => {
                log::debug!(
                    "solving {}x{} system by elimination",
                    self.len(),
                    self.dim()
                );
                self.augmented()?.back_substitute()
            }
        }
    }

    /// Exact check of every equation; stops at the first failure or error.
    pub fn satisfies(&self, values: &Vector<T>) -> Result<bool> {
        for eq in &self.equations {
            if !eq.check(values)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn satisfies_within(&self, values: &Vector<T>, tolerance: T) -> Result<bool> {
        for eq in &self.equations {
            if !eq.check_within(values, tolerance)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<T: Scalar> FromIterator<Equation<T>> for System<T> {
    fn from_iter<I: IntoIterator<Item = Equation<T>>>(iter: I) -> Self {
        System::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    fn sample() -> System {
        System::new(vec![
            Equation::from_vec(vec![2.0, -3.0, 4.0], 6.0),
            Equation::from_vec(vec![3.0, 4.0, -5.0], 7.0),
            Equation::from_vec(vec![4.0, -5.0, 6.0], 8.0),
        ])
    }

    fn assert_close(actual: &Vector, expected: &[f64], tol: f64) {
        assert_eq!(actual.dim(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < tol, "expected {expected:?}, got {actual}");
        }
    }

    #[test]
    fn dim_and_get() {
        let system = sample();
        assert_eq!(system.dim(), 3);
        assert_eq!(system.get(2).map(Equation::res), Ok(8.0));
        assert_eq!(
            system.get(3).map(Equation::res),
            Err(LinalgError::OutOfBounds { index: 3, len: 3 })
        );

        let empty = System::<f64>::new(Vec::new());
        assert_eq!(empty.dim(), 0);
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn coeff_rows_are_equations() {
        let coeff = sample().coeff().expect("coefficients");
        assert_eq!(
            coeff,
            Matrix::from_rows(vec![
                vec![2.0, -3.0, 4.0],
                vec![3.0, 4.0, -5.0],
                vec![4.0, -5.0, 6.0],
            ])
            .expect("rows")
        );
        assert_eq!(sample().res().as_slice(), &[6.0, 7.0, 8.0]);
    }

    #[test]
    fn coeff_rejects_short_equation() {
        let system = System::new(vec![
            Equation::from_vec(vec![1.0, 2.0], 3.0),
            Equation::from_vec(vec![1.0], 1.0),
        ]);
        assert_eq!(
            system.coeff(),
            Err(LinalgError::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn solve_reproduces_right_hand_sides() {
        let system = sample();
        let solution = system.solve().expect("invertible system");
        assert_close(&solution, &[7.0 / 3.0, 20.0 / 3.0, 16.0 / 3.0], 1e-12);

        for eq in system.equations() {
            let lhs = eq.plug(&solution).expect("matching dimension");
            assert!((lhs - eq.res()).abs() < 1e-9);
        }
        assert_eq!(system.satisfies_within(&solution, 1e-9), Ok(true));
    }

    #[test]
    fn elimination_agrees_with_inversion() {
        let system = sample();
        let by_inverse = system.solve_with(SolveMethod::Inverse).expect("inverse");
        let by_elimination = system
            .solve_with(SolveMethod::Elimination)
            .expect("elimination");
        assert_close(&by_elimination, by_inverse.as_slice(), 1e-9);
    }

    #[test]
    fn solve_matches_nalgebra_lu() {
        let system = sample();
        let a = system.coeff().expect("coefficients").to_dmatrix();
        let b = system.res().to_dvector();
        let expected = a.lu().solve(&b).expect("nalgebra solve");
        let solution = system.solve().expect("solve");
        assert_close(&solution, expected.as_slice(), 1e-9);
    }

    #[test]
    fn solve_propagates_singular_and_not_square() {
        let singular = System::new(vec![
            Equation::from_vec(vec![1.0, 2.0], 3.0),
            Equation::from_vec(vec![2.0, 4.0], 6.0),
        ]);
        assert_eq!(singular.solve(), Err(LinalgError::Singular));
        assert_eq!(
            singular.solve_with(SolveMethod::Elimination),
            Err(LinalgError::Singular)
        );

        let underdetermined = System::new(vec![Equation::from_vec(vec![1.0, 2.0], 3.0)]);
        assert_eq!(
            underdetermined.solve(),
            Err(LinalgError::NotSquare { rows: 1, cols: 2 })
        );
    }

    #[test]
    fn empty_system_has_empty_solution() {
        let empty = System::<f64>::new(Vec::new());
        assert_eq!(empty.solve(), Ok(Vector::from_vec(Vec::new())));
        assert_eq!(
            empty.solve_with(SolveMethod::Elimination),
            Ok(Vector::from_vec(Vec::new()))
        );
    }

    #[test]
    fn satisfies_short_circuits() {
        let system = System::new(vec![
            Equation::from_vec(vec![1.0, 0.0], 1.0),
            Equation::from_vec(vec![0.0, 1.0], 2.0),
            Equation::from_vec(vec![1.0], 1.0),
        ]);
        let exact = Vector::from_vec(vec![1.0, 2.0]);
        // Third equation has the wrong arity, so reaching it is an error.
        assert_eq!(
            system.satisfies(&exact),
            Err(LinalgError::UnlikeVariables {
                expected: 1,
                found: 2
            })
        );
        // A false check earlier stops before the malformed equation.
        assert_eq!(system.satisfies(&Vector::from_vec(vec![0.0, 2.0])), Ok(false));
    }

    #[test]
    fn settings_default_to_inversion() {
        let settings = SolveSettings::default();
        assert_eq!(settings.method, SolveMethod::Inverse);
        assert_eq!(settings.tolerance, 1e-9);
    }
}

//! Solve a system and verify the answer equation by equation.

use crate::system::{SolveSettings, System};
use anyhow::{bail, Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquationCheck {
    /// Left-hand side evaluated at the solution.
    pub plug: f64,
    /// Right-hand side of the equation.
    pub res: f64,
    /// Exact equality of `plug` and `res`.
    pub exact: bool,
    pub residual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub solution: Vec<f64>,
    pub checks: Vec<EquationCheck>,
    pub satisfied_exactly: bool,
    pub satisfied_within_tolerance: bool,
    pub max_residual: f64,
}

pub fn solve_and_verify(system: &System<f64>, settings: SolveSettings) -> Result<SolveReport> {
    if !settings.tolerance.is_finite() || settings.tolerance < 0.0 {
        bail!(
            "tolerance must be finite and non-negative, got {}.",
            settings.tolerance
        );
    }

    let solution = system
        .solve_with(settings.method)
        .context("Failed to solve linear system.")?;

    let mut checks = Vec::with_capacity(system.len());
    for (idx, eq) in system.equations().iter().enumerate() {
        let plug = eq
            .plug(&solution)
            .with_context(|| format!("Failed to evaluate equation {} at the solution.", idx + 1))?;
        let residual = plug - eq.res();
        if residual.is_nan() || residual.abs() > settings.tolerance {
            log::warn!(
                "equation {} misses its right-hand side by {:e} (tolerance {:e})",
                idx + 1,
                residual,
                settings.tolerance
            );
        }
        checks.push(EquationCheck {
            plug,
            res: eq.res(),
            exact: plug == eq.res(),
            residual,
        });
    }

    let satisfied_exactly = system
        .satisfies(&solution)
        .context("Failed to verify solution.")?;
    let satisfied_within_tolerance = system
        .satisfies_within(&solution, settings.tolerance)
        .context("Failed to verify solution.")?;
    // NaN residuals must survive the reduction.
    let max_residual = checks
        .iter()
        .map(|c| c.residual.abs())
        .fold(0.0, |acc: f64, r| if r.is_nan() || r > acc { r } else { acc });

    Ok(SolveReport {
        solution: solution.into_vec(),
        satisfied_exactly,
        satisfied_within_tolerance,
        max_residual,
        checks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::Equation;
    use crate::system::SolveMethod;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err:#}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    fn three_by_three() -> System {
        System::new(vec![
            Equation::from_vec(vec![2.0, -3.0, 4.0], 6.0),
            Equation::from_vec(vec![3.0, 4.0, -5.0], 7.0),
            Equation::from_vec(vec![4.0, -5.0, 6.0], 8.0),
        ])
    }

    #[test]
    fn report_verifies_every_equation() {
        let report =
            solve_and_verify(&three_by_three(), SolveSettings::default()).expect("report");
        assert_eq!(report.solution.len(), 3);
        assert_eq!(report.checks.len(), 3);
        assert!(report.satisfied_within_tolerance);
        assert!(report.max_residual < 1e-9);
        for (check, res) in report.checks.iter().zip([6.0, 7.0, 8.0]) {
            assert_eq!(check.res, res);
            assert!((check.plug - res).abs() < 1e-9);
            assert_eq!(check.exact, check.plug == res);
        }
        assert_eq!(
            report.satisfied_exactly,
            report.checks.iter().all(|c| c.exact)
        );
    }

    #[test]
    fn report_with_exact_solution_is_exactly_satisfied() {
        let system = System::new(vec![
            Equation::from_vec(vec![1.0, 1.0], 3.0),
            Equation::from_vec(vec![1.0, -1.0], 1.0),
        ]);
        let settings = SolveSettings {
            method: SolveMethod::Elimination,
            ..SolveSettings::default()
        };
        let report = solve_and_verify(&system, settings).expect("report");
        assert_eq!(report.solution, vec![2.0, 1.0]);
        assert!(report.satisfied_exactly);
        assert_eq!(report.max_residual, 0.0);
    }

    #[test]
    fn zero_tolerance_rejects_inexact_solution() {
        let _ = env_logger::builder().is_test(true).try_init();
        // 3 * (7 * (1/3)) rounds to 7 - 2^-50.
        let system = System::new(vec![
            Equation::from_vec(vec![3.0, 0.0], 7.0),
            Equation::from_vec(vec![0.0, 1.0], 2.0),
        ]);
        let settings = SolveSettings {
            tolerance: 0.0,
            ..SolveSettings::default()
        };
        let report = solve_and_verify(&system, settings).expect("report");
        assert!(report.max_residual > 0.0);
        assert!(!report.satisfied_within_tolerance);
        assert!(!report.satisfied_exactly);
        assert!(report.checks[1].exact);

        let loose = solve_and_verify(&system, SolveSettings::default()).expect("report");
        assert!(loose.satisfied_within_tolerance);
    }

    #[test]
    fn nan_residuals_are_never_within_tolerance() {
        let _ = env_logger::builder().is_test(true).try_init();
        // det underflows to a subnormal, so 1/det is infinite.
        let system = System::new(vec![
            Equation::from_vec(vec![1e-160, 0.0], 1.0),
            Equation::from_vec(vec![0.0, 1e-160], 1.0),
        ]);
        let report = solve_and_verify(&system, SolveSettings::default()).expect("report");
        assert!(report.checks.iter().all(|c| c.residual.is_nan()));
        assert!(report.max_residual.is_nan());
        assert!(!report.satisfied_within_tolerance);
        assert!(!report.satisfied_exactly);
    }

    #[test]
    fn report_rejects_bad_tolerance() {
        let settings = SolveSettings {
            tolerance: -1.0,
            ..SolveSettings::default()
        };
        assert_err_contains(solve_and_verify(&three_by_three(), settings), "tolerance");
        let settings = SolveSettings {
            tolerance: f64::NAN,
            ..SolveSettings::default()
        };
        assert_err_contains(solve_and_verify(&three_by_three(), settings), "tolerance");
    }

    #[test]
    fn report_surfaces_singular_system() {
        let system = System::new(vec![
            Equation::from_vec(vec![1.0, 2.0], 3.0),
            Equation::from_vec(vec![2.0, 4.0], 6.0),
        ]);
        let result = solve_and_verify(&system, SolveSettings::default());
        assert_err_contains(result, "Failed to solve linear system.");
        let result = solve_and_verify(&system, SolveSettings::default());
        assert_err_contains(result, "Matrix is singular");
    }
}

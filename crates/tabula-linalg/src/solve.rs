//! Linear systems `Ax = b` solved through the (pseudo)inverse.
//!
//! A square coefficient matrix is inverted directly. Any other shape goes
//! through the Moore-Penrose pseudoinverse, which gives the exact solution
//! of a consistent overdetermined system and the least-squares solution of
//! an inconsistent one. There is no fallback between the two paths: an
//! unsolvable system is an error.

use log::debug;

use crate::config::SolverConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Which inverse produced a [`Solution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMethod {
    /// The coefficient matrix was square and inverted directly.
    Inverse,
    /// The coefficient matrix was rectangular; the pseudoinverse was used.
    Pseudoinverse,
}

/// The solution vector of a linear system.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// One value per unknown.
    pub values: Vec<f64>,
    /// How the system was inverted.
    pub method: SolveMethod,
}

/// A coefficient matrix paired with solver settings.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    coefficients: Matrix,
    config: SolverConfig,
}

impl LinearSystem {
    /// Creates a system with the default configuration.
    #[must_use]
    pub fn new(coefficients: Matrix) -> Self {
        Self::with_config(coefficients, SolverConfig::default())
    }

    /// Creates a system with an explicit configuration.
    #[must_use]
    pub fn with_config(coefficients: Matrix, config: SolverConfig) -> Self {
        Self {
            coefficients,
            config,
        }
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn coefficients(&self) -> &Matrix {
        &self.coefficients
    }

    /// Solves for `constants`, one value per equation.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if `constants` does not have one
    /// entry per row, and [`MatrixError::Singular`] if the system has no
    /// unique (least-squares) solution.
    pub fn solve(&self, constants: &[f64]) -> Result<Solution> {
        let a = &self.coefficients;
        let b = Matrix::from_column(constants)?;
        if b.num_rows() != a.num_rows() {
            return Err(MatrixError::IncompatibleShape {
                op: "solve",
                left: a.shape(),
                right: b.shape(),
            });
        }

        let parallel = &self.config.parallel;
        let (inverse, method) = if a.is_square() {
            (a.inverse_with(parallel)?, SolveMethod::Inverse)
        } else {
            (a.pseudoinverse_with(parallel)?, SolveMethod::Pseudoinverse)
        };
        debug!("solved {} system via {method:?}", a.shape());

        let mut result = inverse.multiply_with(&b, parallel)?;
        if let Some(digits) = self.config.rounding {
            result = result.eliminate_rounding_errors_with(digits);
        }
        Ok(Solution {
            values: result.into_column_vec(),
            method,
        })
    }
}

/// Solves `coefficients * x = constants`.
///
/// `coefficients` holds one row per equation. The result holds one value per
/// unknown, rounded to the default cutoff when `eliminate_rounding_errors` is
/// set.
///
/// # Errors
///
/// Construction errors for a malformed coefficient array, plus the errors of
/// [`LinearSystem::solve`].
pub fn solve_system_of_equations<R: AsRef<[f64]>>(
    coefficients: &[R],
    constants: &[f64],
    eliminate_rounding_errors: bool,
) -> Result<Vec<f64>> {
    let config = if eliminate_rounding_errors {
        SolverConfig::rounded()
    } else {
        SolverConfig::default()
    };
    let system = LinearSystem::with_config(Matrix::from_rows(coefficients)?, config);
    Ok(system.solve(constants)?.values)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_solve_2x2() {
        // 2x + y = 3, x + 3y = 5
        let x = solve_system_of_equations(&[[2.0, 1.0], [1.0, 3.0]], &[3.0, 5.0], true).unwrap();
        assert_eq!(x, vec![0.8, 1.4]);
    }

    #[test]
    fn test_solve_unrounded_is_close() {
        let x = solve_system_of_equations(&[[2.0, 1.0], [1.0, 3.0]], &[3.0, 5.0], false).unwrap();
        assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_3x3() {
        // x + 2y + 3z = 14, y + 4z = 14, 5x + 6y = 17 -> (1, 2, 3)
        let coefficients = vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
            vec![5.0, 6.0, 0.0],
        ];
        let x = solve_system_of_equations(&coefficients, &[14.0, 14.0, 17.0], true).unwrap();
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_overdetermined_consistent() {
        // x = 1, y = 2, x + y = 3
        let system = LinearSystem::with_config(
            Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]).unwrap(),
            SolverConfig::rounded(),
        );
        let solution = system.solve(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(solution.method, SolveMethod::Pseudoinverse);
        assert_eq!(solution.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_overdetermined_least_squares() {
        // Fit y = c0 + c1 * t through (0, 1), (1, 2), (2, 2): c0 = 7/6, c1 = 1/2
        let coefficients = [[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
        let x = solve_system_of_equations(&coefficients, &[1.0, 2.0, 2.0], false).unwrap();
        assert_abs_diff_eq!(x[0], 7.0 / 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x[1], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_single_unknown() {
        let x = solve_system_of_equations(&[[2.0], [4.0]], &[1.0, 2.0], true).unwrap();
        assert_eq!(x, vec![0.5]);
        let x = solve_system_of_equations(&[[4.0]], &[2.0], true).unwrap();
        assert_eq!(x, vec![0.5]);
    }

    #[test]
    fn test_singular_system_fails() {
        let err = solve_system_of_equations(&[[1.0, 2.0], [2.0, 4.0]], &[1.0, 2.0], true);
        assert_eq!(err, Err(MatrixError::Singular));
    }

    #[test]
    fn test_underdetermined_fails() {
        let err = solve_system_of_equations(&[[1.0, 1.0, 1.0]], &[3.0], true);
        assert_eq!(err, Err(MatrixError::Singular));
    }

    #[test]
    fn test_constants_length_mismatch() {
        let err = solve_system_of_equations(&[[2.0, 1.0], [1.0, 3.0]], &[3.0], true);
        assert!(matches!(
            err,
            Err(MatrixError::IncompatibleShape { op: "solve", .. })
        ));
        assert!(solve_system_of_equations(&[[2.0, 1.0]], &[], true).is_err());
    }

    #[test]
    fn test_square_method_reported() {
        let system = LinearSystem::new(Matrix::identity(2).unwrap());
        let solution = system.solve(&[4.0, -1.0]).unwrap();
        assert_eq!(solution.method, SolveMethod::Inverse);
        assert_eq!(solution.values, vec![4.0, -1.0]);
        assert_eq!(system.coefficients(), &Matrix::identity(2).unwrap());
    }
}

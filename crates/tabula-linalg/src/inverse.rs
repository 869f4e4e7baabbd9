//! Classical inverse, Moore-Penrose pseudoinverse and rounding cleanup.

use log::debug;

use crate::config::ParallelConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::rounding::{round_to_digits, ROUNDING_DIGIT_CUTOFF};

impl Matrix {
    /// Returns true if the determinant rounds to zero at [`ROUNDING_DIGIT_CUTOFF`] digits.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn is_singular(&self) -> Result<bool> {
        self.is_singular_with(ROUNDING_DIGIT_CUTOFF)
    }

    /// Returns true if the determinant rounds to zero at `cutoff` digits.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn is_singular_with(&self, cutoff: u32) -> Result<bool> {
        Ok(round_to_digits(self.determinant()?, cutoff) == 0.0)
    }

    /// Computes the inverse as `adjugate / determinant`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for a non-square matrix and
    /// [`MatrixError::Singular`] if the determinant rounds to zero.
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(&ParallelConfig::default())
    }

    /// [`Matrix::inverse`] with an explicit parallelism setting.
    ///
    /// # Errors
    ///
    /// See [`Matrix::inverse`].
    pub fn inverse_with(&self, config: &ParallelConfig) -> Result<Self> {
        self.require_square("inverse")?;
        let det = self.determinant()?;
        if round_to_digits(det, ROUNDING_DIGIT_CUTOFF) == 0.0 {
            debug!("inverse requested for singular {} matrix", self.shape());
            return Err(MatrixError::Singular);
        }
        Ok(self.adjugate_with(config)?.scale(1.0 / det))
    }

    /// Computes the Moore-Penrose pseudoinverse `(MᵗM)⁻¹Mᵗ`.
    ///
    /// Defined for any shape whose normal-equations matrix `MᵗM` is invertible,
    /// which makes it the least-squares inverse of an overdetermined system.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Singular`] if `MᵗM` is singular.
    pub fn pseudoinverse(&self) -> Result<Self> {
        self.pseudoinverse_with(&ParallelConfig::default())
    }

    /// [`Matrix::pseudoinverse`] with an explicit parallelism setting.
    ///
    /// # Errors
    ///
    /// See [`Matrix::pseudoinverse`].
    pub fn pseudoinverse_with(&self, config: &ParallelConfig) -> Result<Self> {
        let transpose = self.transpose();
        let normal = transpose.multiply_with(self, config)?;
        if normal.is_singular()? {
            debug!("normal equations of {} matrix are singular", self.shape());
            return Err(MatrixError::Singular);
        }
        normal.inverse_with(config)?.multiply_with(&transpose, config)
    }

    /// Rounds every cell to [`ROUNDING_DIGIT_CUTOFF`] decimal digits.
    #[must_use]
    pub fn eliminate_rounding_errors(&self) -> Self {
        self.eliminate_rounding_errors_with(ROUNDING_DIGIT_CUTOFF)
    }

    /// Rounds every cell to `cutoff` decimal digits, turning `-0.0` into `0.0`.
    #[must_use]
    pub fn eliminate_rounding_errors_with(&self, cutoff: u32) -> Self {
        Self::from_grid(self.cells.map(|&v| round_to_digits(v, cutoff)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_inverse_2x2() {
        let a = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        let expected = m(&[&[0.6, -0.7], &[-0.2, 0.4]]);
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(inv[(i, j)], expected[(i, j)], epsilon = 1e-12);
            }
        }
        let product = a.multiply(&inv).unwrap().eliminate_rounding_errors();
        assert_eq!(product, Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_inverse_1x1() {
        assert_eq!(m(&[&[4.0]]).inverse(), Ok(m(&[&[0.25]])));
        assert_eq!(m(&[&[0.0]]).inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn test_inverse_singular() {
        let a = m(&[&[0.0, 0.0], &[3.0, 4.0]]);
        assert_eq!(a.is_singular(), Ok(true));
        assert_eq!(a.inverse(), Err(MatrixError::Singular));
        let b = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(b.inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn test_inverse_not_square() {
        let a = Matrix::new(3, 2).unwrap();
        assert!(matches!(
            a.inverse(),
            Err(MatrixError::NotSquare { op: "inverse", .. })
        ));
        assert!(a.is_singular().is_err());
    }

    #[test]
    fn test_is_singular_cutoff() {
        let a = m(&[&[1e-3, 0.0], &[0.0, 1e-3]]);
        assert_eq!(a.is_singular(), Ok(false));
        assert_eq!(a.is_singular_with(4), Ok(true));
    }

    #[test]
    fn test_pseudoinverse_of_invertible_is_inverse() {
        let a = m(&[&[2.0, 1.0], &[1.0, 3.0]]);
        let pinv = a.pseudoinverse().unwrap().eliminate_rounding_errors();
        let inv = a.inverse().unwrap().eliminate_rounding_errors();
        assert_eq!(pinv, inv);
    }

    #[test]
    fn test_pseudoinverse_left_inverse() {
        let a = m(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
        let pinv = a.pseudoinverse().unwrap();
        assert_eq!(pinv.num_rows(), 2);
        assert_eq!(pinv.num_cols(), 3);
        let product = pinv.multiply(&a).unwrap().eliminate_rounding_errors();
        assert_eq!(product, Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_pseudoinverse_singular_normal_equations() {
        // Wide matrix: MᵗM is 3x3 with rank 2.
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.pseudoinverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn test_eliminate_rounding_errors() {
        let a = m(&[&[0.999_999_999_9, -1e-12], &[2.000_000_000_4, 0.123_456_789_01]]);
        let r = a.eliminate_rounding_errors();
        assert_eq!(r, m(&[&[1.0, 0.0], &[2.0, 0.123_456_79]]));
        assert!(r[(0, 1)].is_sign_positive());
        // operand untouched
        assert_eq!(a[(0, 1)], -1e-12);
        assert_eq!(a.eliminate_rounding_errors_with(2)[(1, 1)], 0.12);
    }
}

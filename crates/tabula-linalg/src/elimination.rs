//! Gaussian elimination with partial pivoting, and the determinant built on it.

use log::{debug, trace};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::rounding::{round_to_digits, ROUNDING_DIGIT_CUTOFF};

/// Outcome of reducing a square matrix to upper-triangular form.
#[derive(Debug, Clone, PartialEq)]
pub enum Triangularization {
    /// Elimination completed.
    Triangular {
        /// The upper-triangular matrix.
        matrix: Matrix,
        /// True if an odd number of row swaps was performed, which negates
        /// the determinant.
        sign_flipped: bool,
    },
    /// A pivot column had no entry that survives rounding; the determinant is zero.
    Singular,
}

impl Triangularization {
    /// Returns true for the [`Triangularization::Singular`] outcome.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular)
    }
}

impl Matrix {
    /// Converts the matrix to upper-triangular form.
    ///
    /// For each pivot column the row with the largest magnitude entry at or
    /// below the diagonal is swapped into place, then multiples of the pivot
    /// row are added to the rows beneath to clear the column. The work is
    /// done on a copy; `self` is untouched.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`](crate::MatrixError::NotSquare) for a
    /// non-square matrix.
    pub fn to_upper_triangular(&self) -> Result<Triangularization> {
        self.require_square("triangularization")?;
        let n = self.num_rows();
        let mut m = self.cells.clone();
        let mut sign_flipped = false;

        for pivot in 0..n.saturating_sub(1) {
            // Find pivot (largest magnitude, first one wins on ties)
            let mut max_row = pivot;
            let mut max_abs = m[(pivot, pivot)].abs();
            for row in pivot + 1..n {
                let abs = m[(row, pivot)].abs();
                if abs > max_abs {
                    max_abs = abs;
                    max_row = row;
                }
            }

            if round_to_digits(max_abs, ROUNDING_DIGIT_CUTOFF) == 0.0 {
                debug!("column {pivot} has no usable pivot, matrix is singular");
                return Ok(Triangularization::Singular);
            }

            if max_row != pivot {
                trace!("swapping rows {pivot} and {max_row}");
                m.swap_rows(pivot, max_row);
                sign_flipped = !sign_flipped;
            }

            // Eliminate below
            let pivot_row = m.row(pivot).to_vec();
            let pivot_val = pivot_row[pivot];
            for row in pivot + 1..n {
                let factor = -m[(row, pivot)] / pivot_val;
                for (cell, p) in m.row_mut(row).iter_mut().zip(pivot_row.iter()) {
                    *cell += p * factor;
                }
            }
        }

        Ok(Triangularization::Triangular {
            matrix: Self::from_grid(m),
            sign_flipped,
        })
    }

    /// Computes the determinant.
    ///
    /// A matrix that elimination reports as singular has determinant exactly
    /// `0.0`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`](crate::MatrixError::NotSquare) for a
    /// non-square matrix.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square("determinant")?;
        if self.num_rows() == 1 {
            return Ok(self.cells[(0, 0)]);
        }

        match self.to_upper_triangular()? {
            Triangularization::Singular => Ok(0.0),
            Triangularization::Triangular {
                matrix,
                sign_flipped,
            } => {
                let product: f64 = (0..matrix.num_rows()).map(|i| matrix[(i, i)]).product();
                Ok(if product == 0.0 {
                    0.0
                } else if sign_flipped {
                    -product
                } else {
                    product
                })
            }
        }
    }
}

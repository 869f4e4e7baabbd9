//! Minor matrices and the adjugate.

use tabula_core::Coord;

use crate::config::ParallelConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::parallel;

impl Matrix {
    /// Returns the matrix with row `row` and column `col` removed.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the cell does not exist, and
    /// [`MatrixError::InvalidDimension`] if the result would have no rows or
    /// no columns (a single-row or single-column input).
    pub fn single_minor(&self, row: usize, col: usize) -> Result<Self> {
        self.single_minor_at(Coord::from((row, col)))
    }

    /// Returns the matrix with the row and column of `coord` removed.
    ///
    /// # Errors
    ///
    /// See [`Matrix::single_minor`].
    pub fn single_minor_at(&self, coord: Coord) -> Result<Self> {
        let shape = self.shape();
        let (skip_row, skip_col) = coord
            .to_indices(shape.rows, shape.cols)
            .ok_or(MatrixError::OutOfRange { coord, shape })?;
        let mut minor = Self::new(shape.rows - 1, shape.cols - 1)?;

        for row in 0..shape.rows {
            if row == skip_row {
                continue;
            }
            let new_row = if row > skip_row { row - 1 } else { row };
            for col in 0..shape.cols {
                if col == skip_col {
                    continue;
                }
                let new_col = if col > skip_col { col - 1 } else { col };
                minor.cells[(new_row, new_col)] = self.cells[(row, col)];
            }
        }
        Ok(minor)
    }

    /// Replaces every cell with the determinant of its minor.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for a non-square matrix, and
    /// [`MatrixError::InvalidDimension`] for a 1x1 matrix, whose minors are empty.
    pub fn minors(&self) -> Result<Self> {
        self.minors_with(&ParallelConfig::default())
    }

    /// [`Matrix::minors`], spreading rows over rayon above the configured size.
    ///
    /// # Errors
    ///
    /// See [`Matrix::minors`].
    pub fn minors_with(&self, config: &ParallelConfig) -> Result<Self> {
        self.require_square("minors")?;
        let n = self.num_rows();
        if config.use_parallel(n) {
            return parallel::minors(self);
        }

        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.single_minor(i, j)?.determinant()?);
            }
        }
        Self::from_row_major(n, n, data)
    }

    /// Returns the adjugate: the transposed cofactor-signed minors matrix.
    ///
    /// The adjugate of a 1x1 matrix is defined as `[[1]]` by convention. It
    /// is not derived from [`Matrix::minors`], which still fails with
    /// [`MatrixError::InvalidDimension`] for a 1x1 input because its only
    /// minor would be 0x0.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn adjugate(&self) -> Result<Self> {
        self.adjugate_with(&ParallelConfig::default())
    }

    /// [`Matrix::adjugate`] with an explicit parallelism setting.
    ///
    /// # Errors
    ///
    /// See [`Matrix::adjugate`].
    pub fn adjugate_with(&self, config: &ParallelConfig) -> Result<Self> {
        self.require_square("adjugate")?;
        if self.num_rows() == 1 {
            return Self::identity(1);
        }
        Ok(self.minors_with(config)?.cofactor().transpose())
    }
}

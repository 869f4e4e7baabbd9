//! Data-parallel kernels.
//!
//! Each output cell depends only on the inputs, so the rayon versions
//! produce the same results as the sequential loops they replace.

use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::{dot_column, Matrix};

/// Matrix-matrix multiply with one rayon task per output row.
///
/// Callers check shape compatibility.
pub(crate) fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix> {
    let rows = left.num_rows();
    let cols = right.num_cols();
    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|i| {
            let row = left.cells.row(i);
            (0..cols).map(move |j| dot_column(row, right, j))
        })
        .collect();

    Matrix::from_row_major(rows, cols, data)
}

/// Minors matrix with one rayon task per output row.
///
/// Callers check squareness.
pub(crate) fn minors(matrix: &Matrix) -> Result<Matrix> {
    let n = matrix.num_rows();
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| matrix.single_minor(i, j)?.determinant())
                .collect::<Result<Vec<f64>>>()
        })
        .collect::<Result<_>>()?;

    Matrix::from_row_major(n, n, rows.into_iter().flatten().collect())
}

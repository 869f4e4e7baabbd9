//! Dense `f64` matrix with a fixed shape.
//!
//! Every transformation allocates and returns a new [`Matrix`]; only the
//! explicit cell setters mutate an existing instance.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use tabula_core::{Coord, Grid, Shape};

use crate::config::ParallelConfig;
use crate::error::{MatrixError, Result};
use crate::parallel;

/// Dense matrix of `f64` stored in row-major order.
///
/// Equality is exact: two matrices are equal if they have the same shape and
/// every pair of corresponding cells compares equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) cells: Grid<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            cells: Grid::filled(rows, cols, 0.0),
        })
    }

    /// Copies a 2-D array into a new matrix.
    ///
    /// The result never aliases `rows`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] for an empty array or empty rows,
    /// [`MatrixError::RaggedRows`] if the rows differ in length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(rows.len(), expected)?;
        let cells = Grid::from_rows(rows).map_err(|row| MatrixError::RaggedRows {
            row,
            expected,
            found: rows[row].as_ref().len(),
        })?;
        Ok(Self { cells })
    }

    /// Creates an `n x 1` matrix with `values[i]` at `(i, 0)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if `values` is empty.
    pub fn from_column(values: &[f64]) -> Result<Self> {
        check_dimensions(values.len(), 1)?;
        Ok(Self {
            cells: Grid::from_fn(values.len(), 1, |i, _| values[i]),
        })
    }

    /// Creates a matrix with cell `(i, j)` set to `f(i, j)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if either dimension is zero.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            cells: Grid::from_fn(rows, cols, f),
        })
    }

    /// Creates a `size x size` identity matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if `size` is zero.
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, size, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Wraps an existing store. Callers guarantee both dimensions are non-zero.
    pub(crate) fn from_grid(cells: Grid<f64>) -> Self {
        debug_assert!(!cells.shape().is_empty());
        Self { cells }
    }

    /// Wraps `rows * cols` cells in row-major order.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if a dimension is zero or the cell
    /// count does not match the shape.
    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Grid::from_vec(rows, cols, data)
            .map(Self::from_grid)
            .ok_or(MatrixError::InvalidDimension { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cells.num_cols()
    }

    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.cells.shape()
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the cell does not exist.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.at(Coord::from((row, col)))
    }

    /// Reads the cell at `coord`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the coordinate fails validation.
    pub fn at(&self, coord: Coord) -> Result<f64> {
        self.cells.get(coord).copied().ok_or(MatrixError::OutOfRange {
            coord,
            shape: self.shape(),
        })
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the cell does not exist.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.set_at(Coord::from((row, col)), value)
    }

    /// Overwrites the cell at `coord`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the coordinate fails validation.
    pub fn set_at(&mut self, coord: Coord, value: f64) -> Result<()> {
        let shape = self.shape();
        self.cells
            .set(coord, value)
            .map_err(|_| MatrixError::OutOfRange { coord, shape })
    }

    /// Returns a copy of row `row`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the row does not exist.
    pub fn row(&self, row: usize) -> Result<Vec<f64>> {
        if row >= self.num_rows() {
            return Err(self.out_of_range(row, 0));
        }
        Ok(self.cells.row(row).to_vec())
    }

    /// Returns a copy of column `col`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if the column does not exist.
    pub fn column(&self, col: usize) -> Result<Vec<f64>> {
        if col >= self.num_cols() {
            return Err(self.out_of_range(0, col));
        }
        Ok(self.cells.col(col))
    }

    /// Returns a copy of every row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells.to_rows()
    }

    /// Collapses the first column into a flat vector.
    #[must_use]
    pub fn into_column_vec(self) -> Vec<f64> {
        self.cells.col(0)
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::OutOfRange {
            coord: Coord::from((row, col)),
            shape: self.shape(),
        }
    }

    /// Returns true if the row and column counts match.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Returns true if `self * right` is defined.
    #[must_use]
    pub fn can_multiply(&self, right: &Self) -> bool {
        self.num_cols() == right.num_rows()
    }

    /// Returns true if `self + right` is defined.
    #[must_use]
    pub fn can_add(&self, right: &Self) -> bool {
        self.shape() == right.shape()
    }

    /// Returns the shape of `self * right`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if the product is undefined.
    pub fn multiply_size(&self, right: &Self) -> Result<Shape> {
        if !self.can_multiply(right) {
            return Err(MatrixError::IncompatibleShape {
                op: "multiply",
                left: self.shape(),
                right: right.shape(),
            });
        }
        Ok(Shape::new(self.num_rows(), right.num_cols()))
    }

    /// Fails with [`MatrixError::NotSquare`] unless the matrix is square.
    pub(crate) fn require_square(&self, op: &'static str) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                op,
                shape: self.shape(),
            })
        }
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_grid(Grid::from_fn(self.num_cols(), self.num_rows(), |i, j| {
            self.cells[(j, i)]
        }))
    }

    /// Negates every cell whose row and column indices sum to an odd number.
    #[must_use]
    pub fn cofactor(&self) -> Self {
        Self::from_grid(Grid::from_fn(self.num_rows(), self.num_cols(), |i, j| {
            let v = self.cells[(i, j)];
            if (i + j) % 2 == 0 {
                v
            } else {
                -v
            }
        }))
    }

    /// Multiplies every cell by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self::from_grid(self.cells.map(|v| scalar * v))
    }

    /// Matrix-matrix multiply: `self * right`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if `self.num_cols() != right.num_rows()`.
    pub fn multiply(&self, right: &Self) -> Result<Self> {
        self.multiply_with(right, &ParallelConfig::default())
    }

    /// Matrix-matrix multiply, switching to rayon above the configured size.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if `self.num_cols() != right.num_rows()`.
    pub fn multiply_with(&self, right: &Self, config: &ParallelConfig) -> Result<Self> {
        let shape = self.multiply_size(right)?;
        if config.use_parallel(shape.rows) {
            return parallel::multiply(self, right);
        }
        Ok(Self::from_grid(Grid::from_fn(shape.rows, shape.cols, |i, j| {
            dot_column(self.cells.row(i), right, j)
        })))
    }

    /// Matrix-vector multiply: `y = self * x`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if `x.len() != self.num_cols()`.
    pub fn multiply_vector(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.num_cols() {
            return Err(MatrixError::IncompatibleShape {
                op: "multiply",
                left: self.shape(),
                right: Shape::new(x.len(), 1),
            });
        }
        Ok((0..self.num_rows())
            .map(|row| {
                self.cells
                    .row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            })
            .collect())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if the shapes differ.
    pub fn add_elementwise(&self, right: &Self) -> Result<Self> {
        self.zip_with(right, "add", |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IncompatibleShape`] if the shapes differ.
    pub fn subtract_elementwise(&self, right: &Self) -> Result<Self> {
        self.zip_with(right, "subtract", |a, b| a - b)
    }

    fn zip_with(&self, right: &Self, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if !self.can_add(right) {
            return Err(MatrixError::IncompatibleShape {
                op,
                left: self.shape(),
                right: right.shape(),
            });
        }
        Ok(Self::from_grid(Grid::from_fn(self.num_rows(), self.num_cols(), |i, j| {
            f(self.cells[(i, j)], right.cells[(i, j)])
        })))
    }
}

/// Dot product of `row` with column `col` of `right`.
pub(crate) fn dot_column(row: &[f64], right: &Matrix, col: usize) -> f64 {
    row.iter()
        .enumerate()
        .fold(0.0, |acc, (k, a)| acc + a * right.cells[(k, col)])
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    Ok(())
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        if row >= self.num_rows() || col >= self.num_cols() {
            panic!("{}", self.out_of_range(row, col));
        }
        &self.cells[(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        if row >= self.num_rows() || col >= self.num_cols() {
            panic!("{}", self.out_of_range(row, col));
        }
        &mut self.cells[(row, col)]
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scale(self)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, right: Self) -> Result<Matrix> {
        self.multiply(right)
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, right: Self) -> Result<Matrix> {
        self.add_elementwise(right)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, right: Self) -> Result<Matrix> {
        self.subtract_elementwise(right)
    }
}

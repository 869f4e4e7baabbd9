//! Fixed-size row-major 2-D cell store.

use std::ops::{Index, IndexMut};

use crate::coord::{Coord, Shape};

/// A rectangular store of cells in row-major order.
///
/// The shape is fixed at construction. Reads and writes through
/// [`Grid::get`] and [`Grid::set`] are bounds-checked; the `(usize, usize)`
/// index operators panic on out-of-range access like slice indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    /// Cells in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self {
        Self {
            data: vec![value; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Copies a slice of rows into a new grid.
    ///
    /// Returns `Err(row)` with the index of the first row whose length
    /// differs from row 0.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, usize> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_cols {
                return Err(i);
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns a copy of every row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.num_rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f(row, col)` for every cell.
    pub fn from_fn(num_rows: usize, num_cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Wraps row-major cells. Returns `None` if the length does not match.
    #[must_use]
    pub fn from_vec(num_rows: usize, num_cols: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == num_rows * num_cols).then_some(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the shape of the grid.
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.num_rows, self.num_cols)
    }

    /// Returns a reference to the cell at `coord`, if it is in range.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        let (row, col) = coord.to_indices(self.num_rows, self.num_cols)?;
        Some(&self.data[row * self.num_cols + col])
    }

    /// Returns a mutable reference to the cell at `coord`, if it is in range.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        let (row, col) = coord.to_indices(self.num_rows, self.num_cols)?;
        Some(&mut self.data[row * self.num_cols + col])
    }

    /// Overwrites the cell at `coord`. Returns the rejected value if the
    /// coordinate is out of range.
    pub fn set(&mut self, coord: Coord, value: T) -> Result<(), T> {
        match self.get_mut(coord) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Applies `f` to every cell, producing a grid of the same shape.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "cell ({row}, {col}) out of range for {}",
            self.shape()
        );
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "cell ({row}, {col}) out of range for {}",
            self.shape()
        );
        &mut self.data[row * self.num_cols + col]
    }
}

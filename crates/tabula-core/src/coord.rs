//! Cell coordinates and matrix shapes.

use std::fmt;

/// A (row, column) address into a 2-D store.
///
/// Components are signed so that a negative coordinate can be expressed and
/// rejected by [`Coord::validate`] instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index.
    pub row: isize,
    /// Column index.
    pub col: isize,
}

impl Coord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate with row and column exchanged.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Returns true if neither component is negative.
    #[must_use]
    pub const fn validate(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Returns true if `0 <= row < max_rows` and `0 <= col < max_cols`.
    #[must_use]
    pub fn validate_within(self, max_rows: usize, max_cols: usize) -> bool {
        self.validate() && self.row.unsigned_abs() < max_rows && self.col.unsigned_abs() < max_cols
    }

    /// Converts to unsigned indices if the coordinate lies inside the bounds.
    #[must_use]
    pub fn to_indices(self, max_rows: usize, max_cols: usize) -> Option<(usize, usize)> {
        if self.validate_within(max_rows, max_cols) {
            Some((self.row.unsigned_abs(), self.col.unsigned_abs()))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coord {
    /// Indices beyond `isize::MAX` saturate, which keeps them out of range.
    fn from((row, col): (usize, usize)) -> Self {
        Self {
            row: isize::try_from(row).unwrap_or(isize::MAX),
            col: isize::try_from(col).unwrap_or(isize::MAX),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The dimensions of a 2-D store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Creates a shape.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns true if rows equal columns.
    #[must_use]
    pub const fn is_square(self) -> bool {
        self.rows == self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the shape holds no cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

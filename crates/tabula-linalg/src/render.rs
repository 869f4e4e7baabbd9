//! Human-readable rendering.

use std::fmt;

use crate::matrix::Matrix;

/// Row separation used by [`Matrix::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    /// All rows on one line.
    SingleLine,
    /// One row per line, no trailing newline.
    #[default]
    MultiLine,
}

impl Matrix {
    /// Renders the matrix using `f64`'s `Display` for each cell.
    #[must_use]
    pub fn render(&self, layout: Layout) -> String {
        self.render_with(layout, |v| v.to_string())
    }

    /// Renders the matrix, formatting each cell with `transform`.
    ///
    /// Each row is written as `[`, then two spaces before every cell, then
    /// `  ]`.
    pub fn render_with(&self, layout: Layout, transform: impl Fn(f64) -> String) -> String {
        let mut out = String::new();
        for i in 0..self.num_rows() {
            if i > 0 && layout == Layout::MultiLine {
                out.push('\n');
            }
            out.push('[');
            for &v in self.cells.row(i) {
                out.push_str("  ");
                out.push_str(&transform(v));
            }
            out.push_str("  ]");
        }
        out
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Layout::MultiLine))
    }
}

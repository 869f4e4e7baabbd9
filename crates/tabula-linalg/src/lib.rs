//! # tabula-linalg
//!
//! Dense real matrix algebra for Tabula.
//!
//! This crate provides:
//! - A fixed-shape `f64` [`Matrix`] with bounds-checked cell access
//! - Transpose, cofactor signing, scalar and matrix products
//! - Partial-pivot Gaussian elimination with sign tracking
//! - Minors, adjugate, determinant, inverse and Moore-Penrose pseudoinverse
//! - A linear system solver built on the two inverses
//! - Parallel matrix operations via rayon
//!
//! ## Rounding
//!
//! Elimination arithmetic leaves noise in the last bits of results.
//! Algorithms only round when testing a pivot or determinant for zero (at
//! [`ROUNDING_DIGIT_CUTOFF`] digits). Cleaning up final results is explicit,
//! through [`Matrix::eliminate_rounding_errors`].
//!
//! ## Example
//!
//! ```
//! use tabula_linalg::solve_system_of_equations;
//!
//! // 2x + y = 3, x + 3y = 5
//! let x = solve_system_of_equations(&[[2.0, 1.0], [1.0, 3.0]], &[3.0, 5.0], true)?;
//! assert_eq!(x, vec![0.8, 1.4]);
//! # Ok::<(), tabula_linalg::MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod render;
pub mod rounding;
pub mod solve;

mod inverse;
mod minors;
mod parallel;

pub use config::{ParallelConfig, SolverConfig};
pub use elimination::Triangularization;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use render::Layout;
pub use rounding::{round_to_digits, ROUNDING_DIGIT_CUTOFF};
pub use solve::{solve_system_of_equations, LinearSystem, SolveMethod, Solution};
pub use tabula_core::{Coord, Shape};

#[cfg(test)]
mod proptests;

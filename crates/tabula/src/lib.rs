//! # Tabula
//!
//! A dense real matrix engine for solving linear systems.
//!
//! Tabula favours correctness and numerical robustness over throughput:
//! partial-pivot elimination, explicit rounding cleanup, and typed errors
//! for every failure mode.
//!
//! ## Features
//!
//! - **Fixed-Shape Matrices**: bounds-checked `f64` cells, never resized
//! - **Elimination**: partial pivoting with row-swap sign tracking
//! - **Inverses**: adjugate-based inverse and Moore-Penrose pseudoinverse
//! - **Solver**: square systems exactly, overdetermined ones by least squares
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]])?;
//! let solution = LinearSystem::with_config(a, SolverConfig::rounded()).solve(&[3.0, 5.0])?;
//! assert_eq!(solution.values, vec![0.8, 1.4]);
//! # Ok::<(), MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabula_core as core;
pub use tabula_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabula_core::{Coord, Grid, Shape};
    pub use tabula_linalg::{
        solve_system_of_equations, Layout, LinearSystem, Matrix, MatrixError, ParallelConfig,
        SolveMethod, Solution, SolverConfig, Triangularization,
    };
}

//! # tabula-core
//!
//! Addressing and storage primitives for the Tabula matrix engine.
//!
//! This crate provides:
//! - `Coord`, a (row, column) lookup key with bounds validation
//! - `Shape`, a (rows, columns) pair
//! - `Grid`, a fixed-size row-major 2-D cell store with bounds-checked access
//!
//! The store knows nothing about arithmetic. Numeric semantics live in
//! `tabula-linalg`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coord;
pub mod grid;

pub use coord::{Coord, Shape};
pub use grid::Grid;

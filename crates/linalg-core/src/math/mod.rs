//! Dense containers used throughout the crate.
//!
//! Provides `Array2` (row-major matrix), `Array1` (vector) and `Matrix2`, a
//! fixed 2x2 matrix for the closed-form solver. Shapes are fixed at
//! construction and none of the arithmetic mutates its inputs.
pub mod matrix;
pub mod matrix2;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use matrix2::Matrix2;
pub use vector::Array1;

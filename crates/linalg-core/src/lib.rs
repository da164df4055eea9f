//! linalg-core: dense matrix and vector arithmetic.
//!
//! This crate provides small row-major containers (`Array2`, `Array1`, and the
//! fixed-size `Matrix2`), the elementary operations on them (matrix product,
//! vector-matrix product, transpose), and a closed-form solver for 2x2 linear
//! systems based on Cramer's rule.
//!
//! Every operation is a pure function of its inputs: nothing is mutated in
//! place, and shape violations or singular systems are reported through
//! [`LinalgError`] before any output is produced.
pub mod display;
pub mod error;
pub mod linalg;
pub mod math;

pub use error::{LinalgError, Result};
pub use linalg::{
    multiply, multiply_vector_by_matrix, solve_2x2, solve_linear_system_2x2, transpose,
    SINGULARITY_EPSILON,
};

//! One-shot operations on operands read from an [`InputConfig`].
use std::io::Write;

use anyhow::{Context, Result};

use linalg_core::display::{format_matrix, format_vector};
use linalg_core::{multiply, multiply_vector_by_matrix, solve_linear_system_2x2, transpose};

use crate::config::InputConfig;

pub fn run_multiply<W: Write>(config: &InputConfig, out: &mut W) -> Result<()> {
    let left = config.left_matrix()?;
    let right = config.right_matrix()?;
    let product = multiply(&left, &right).context("Cannot multiply 'left' by 'right'")?;
    writeln!(out, "{}", format_matrix(&product))?;
    Ok(())
}

pub fn run_transpose<W: Write>(config: &InputConfig, out: &mut W) -> Result<()> {
    let left = config.left_matrix()?;
    writeln!(out, "{}", format_matrix(&transpose(&left)))?;
    Ok(())
}

pub fn run_vecmat<W: Write>(config: &InputConfig, out: &mut W) -> Result<()> {
    let right = config.right_matrix()?;
    let result = multiply_vector_by_matrix(&config.vector(), &right)
        .context("Cannot multiply 'vector' by 'right'")?;
    writeln!(out, "{}", format_vector(&result))?;
    Ok(())
}

pub fn run_solve<W: Write>(config: &InputConfig, out: &mut W) -> Result<()> {
    let matrix = config.system_matrix()?;
    let x = solve_linear_system_2x2(&matrix, &config.rhs())
        .context("Cannot solve 'matrix' * x = 'rhs'")?;
    writeln!(out, "{}", format_vector(&x))?;
    Ok(())
}

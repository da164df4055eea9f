//! The two fixed console demonstrations.
use std::io::Write;
use std::str::FromStr;

use anyhow::Result;

use linalg_core::display::{format_matrix, format_vector};
use linalg_core::math::{Array1, Array2};
use linalg_core::{multiply, multiply_vector_by_matrix, solve_linear_system_2x2, transpose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    /// Vectors, matrices, transpose and the vector-matrix product.
    Vectors,
    /// Matrix product and a 2x2 linear system.
    Systems,
    All,
}

impl FromStr for Lesson {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vectors" => Ok(Lesson::Vectors),
            "systems" => Ok(Lesson::Systems),
            "all" => Ok(Lesson::All),
            _ => Err(format!(
                "Unknown lesson: {}. Expected one of: vectors, systems, all",
                s
            )),
        }
    }
}

pub fn run_lesson<W: Write>(lesson: Lesson, out: &mut W) -> Result<()> {
    match lesson {
        Lesson::Vectors => run_vectors_lesson(out),
        Lesson::Systems => run_systems_lesson(out),
        Lesson::All => {
            run_vectors_lesson(out)?;
            run_systems_lesson(out)
        }
    }
}

pub fn run_vectors_lesson<W: Write>(out: &mut W) -> Result<()> {
    log::info!("[Linalg::lessons] Vectors and matrices");

    let vector = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    writeln!(out, "Vector:")?;
    writeln!(out, "{}", format_vector(&vector))?;

    let matrix = Array2::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    writeln!(out, "\nMatrix:")?;
    writeln!(out, "{}", format_matrix(&matrix))?;

    // A 1x3 row vector only lines up with the 2x3 matrix once it is 3x2.
    let transposed = transpose(&matrix);
    let result = multiply_vector_by_matrix(&vector, &transposed)?;
    writeln!(out, "\nVector x Matrix result:")?;
    writeln!(out, "{}", format_vector(&result))?;
    Ok(())
}

pub fn run_systems_lesson<W: Write>(out: &mut W) -> Result<()> {
    log::info!("[Linalg::lessons] Matrix product and linear systems");

    let a = Array2::from_rows(vec![vec![2.0, 1.0], vec![3.0, 4.0]])?;
    writeln!(out, "Matrix A:")?;
    writeln!(out, "{}", format_matrix(&a))?;

    let b = Array2::from_rows(vec![vec![1.0, 2.0], vec![0.0, 1.0]])?;
    writeln!(out, "\nMatrix B:")?;
    writeln!(out, "{}", format_matrix(&b))?;

    writeln!(out, "\nProduct A x B:")?;
    let c = multiply(&a, &b)?;
    writeln!(out, "{}", format_matrix(&c))?;

    writeln!(out, "\nSolving linear system A * x = b")?;
    let rhs = Array1::from_vec(vec![5.0, 6.0]);
    let x = solve_linear_system_2x2(&a, &rhs)?;
    writeln!(out, "Solution x:")?;
    writeln!(out, "{}", format_vector(&x))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_from_str_is_case_insensitive() {
        assert_eq!("Vectors".parse::<Lesson>().unwrap(), Lesson::Vectors);
        assert_eq!("ALL".parse::<Lesson>().unwrap(), Lesson::All);
        assert!("matrices".parse::<Lesson>().is_err());
    }
}

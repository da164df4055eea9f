//! Console rendering for matrices and vectors.
//!
//! Matrices print one bracketed row per line with values in their shortest
//! form (`[ 2 5 ]`). Vectors print on one line with two decimal places
//! (`[ 2.80, -0.60 ]`).
use std::fmt;

use crate::math::{Array1, Array2};

pub fn format_matrix(m: &Array2<f64>) -> String {
    m.rows()
        .map(format_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(row: &[f64]) -> String {
    let mut line = String::from("[ ");
    for value in row {
        line.push_str(&format!("{} ", value));
    }
    line.push(']');
    line
}

pub fn format_vector(v: &Array1<f64>) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{:.2}", x)).collect();
    format!("[ {} ]", parts.join(", "))
}

impl fmt::Display for Array2<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_matrix(self))
    }
}

impl fmt::Display for Array1<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_vector(self))
    }
}

//! JSON input for the `multiply`, `solve`, `transpose` and `vecmat` commands.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use linalg_core::math::{Array1, Array2};

/// Operands read from a JSON file. Missing fields fall back to the lesson data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Left operand of `multiply`, input of `transpose`.
    pub left: Vec<Vec<f64>>,
    /// Right operand of `multiply` and `vecmat`.
    pub right: Vec<Vec<f64>>,
    /// Row vector for `vecmat`.
    pub vector: Vec<f64>,
    /// Coefficients of the 2x2 system for `solve`.
    pub matrix: Vec<Vec<f64>>,
    /// Right-hand side of the 2x2 system for `solve`.
    pub rhs: Vec<f64>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            left: vec![vec![2.0, 1.0], vec![3.0, 4.0]],
            right: vec![vec![1.0, 2.0], vec![0.0, 1.0]],
            vector: vec![1.0, 2.0],
            matrix: vec![vec![2.0, 1.0], vec![3.0, 4.0]],
            rhs: vec![5.0, 6.0],
        }
    }
}

impl InputConfig {
    pub fn left_matrix(&self) -> Result<Array2<f64>> {
        to_matrix("left", &self.left)
    }

    pub fn right_matrix(&self) -> Result<Array2<f64>> {
        to_matrix("right", &self.right)
    }

    pub fn system_matrix(&self) -> Result<Array2<f64>> {
        to_matrix("matrix", &self.matrix)
    }

    pub fn vector(&self) -> Array1<f64> {
        Array1::from_vec(self.vector.clone())
    }

    pub fn rhs(&self) -> Array1<f64> {
        Array1::from_vec(self.rhs.clone())
    }
}

fn to_matrix(field: &str, rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    Array2::from_rows(rows.to_vec()).with_context(|| format!("Invalid '{}' matrix", field))
}

/// Load operands from a JSON file.
pub fn load_input_config<P: AsRef<Path>>(path: P) -> Result<InputConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: InputConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

use std::ops::Mul;

use num_traits::Zero;

use crate::error::{LinalgError, Result};
use crate::math::{Array1, Array2, Matrix2};

/// Determinants with an absolute value below this are treated as zero.
pub const SINGULARITY_EPSILON: f64 = 1e-10;

/// Multiply two matrices.
///
/// Each output cell is the dot product of row `i` of `a` with column `j` of `b`:
///
/// C[i][j] = sum over k of A[i][k] * B[k][j]
///
/// Cells are filled row by row, and each accumulator starts at zero before
/// summing over `k` in ascending order.
///
/// # Arguments
///
/// * `a` - Left operand of shape (m, n).
/// * `b` - Right operand of shape (n, p).
///
/// # Returns
///
/// A new (m, p) matrix, or `LinalgError::DimensionMismatch` when the columns of `a`
/// do not match the rows of `b`.
pub fn multiply<T>(a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>>
where
    T: Copy + Zero + Mul<Output = T>,
{
    let (rows_a, cols_a) = a.shape();
    let (rows_b, cols_b) = b.shape();
    if cols_a != rows_b {
        return Err(LinalgError::DimensionMismatch {
            operation: "matrix multiplication",
            left: a.shape(),
            right: b.shape(),
        });
    }
    log::debug!(
        "Multiplying {}x{} by {}x{}",
        rows_a,
        cols_a,
        rows_b,
        cols_b
    );

    let mut result = Array2::zeros(rows_a, cols_b);
    for i in 0..rows_a {
        let row = a.row_slice(i);
        for j in 0..cols_b {
            let mut acc = T::zero();
            for (k, &lhs) in row.iter().enumerate() {
                acc = acc + lhs * b[(k, j)];
            }
            result[(i, j)] = acc;
        }
    }
    Ok(result)
}

/// Multiply a row vector by a matrix.
///
/// The vector is treated as a 1xN matrix on the left, so `r[j]` is the sum over
/// `i` of `v[i] * M[i][j]`.
///
/// # Arguments
///
/// * `v` - Vector of length N.
/// * `m` - Matrix of shape (N, cols).
///
/// # Returns
///
/// A vector of length `cols`, or `LinalgError::DimensionMismatch` when the vector
/// length differs from the number of rows.
pub fn multiply_vector_by_matrix<T>(v: &Array1<T>, m: &Array2<T>) -> Result<Array1<T>>
where
    T: Copy + Zero + Mul<Output = T>,
{
    let (rows, cols) = m.shape();
    if v.len() != rows {
        return Err(LinalgError::DimensionMismatch {
            operation: "vector-matrix multiplication",
            left: (1, v.len()),
            right: m.shape(),
        });
    }
    log::debug!("Multiplying 1x{} vector by {}x{}", v.len(), rows, cols);

    let mut result = Array1::zeros(cols);
    for j in 0..cols {
        let mut acc = T::zero();
        for i in 0..rows {
            acc = acc + v[i] * m[(i, j)];
        }
        result[j] = acc;
    }
    Ok(result)
}

/// Swap rows and columns: `T[j][i] = M[i][j]`.
///
/// Performs no arithmetic, so transposing twice gives back an identical matrix.
pub fn transpose<T: Clone>(m: &Array2<T>) -> Array2<T> {
    let (rows, cols) = m.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(m[(i, j)].clone());
        }
    }
    Array2::from_raw_parts(cols, rows, data)
}

/// Solve `A · x = b` for a 2x2 system with Cramer's rule.
///
/// With `A = [[a, β], [c, d]]` and `det = a·d − β·c`:
///
/// x0 = (b0·d − β·b1) / det
/// x1 = (a·b1 − b0·c) / det
///
/// A system whose determinant is within [`SINGULARITY_EPSILON`] of zero is
/// rejected with `LinalgError::SingularSystem`. No solution and infinitely many
/// solutions both end up there.
pub fn solve_2x2(a: &Matrix2, b: [f64; 2]) -> Result<[f64; 2]> {
    let [[a00, a01], [a10, a11]] = *a.rows();
    let det = a.determinant();
    if det.abs() < SINGULARITY_EPSILON {
        log::warn!("Rejecting 2x2 system with determinant {:e}", det);
        return Err(LinalgError::SingularSystem { determinant: det });
    }

    let x0 = (b[0] * a11 - a01 * b[1]) / det;
    let x1 = (a00 * b[1] - b[0] * a10) / det;
    Ok([x0, x1])
}

/// Solve a 2x2 system given as dynamically shaped containers.
///
/// `a` must be 2x2 and `b` must have length 2, otherwise
/// `LinalgError::DimensionMismatch` is returned before anything is computed.
pub fn solve_linear_system_2x2(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let matrix = Matrix2::try_from(a)?;
    if b.len() != 2 {
        return Err(LinalgError::DimensionMismatch {
            operation: "2x2 system",
            left: a.shape(),
            right: (b.len(), 1),
        });
    }
    let x = solve_2x2(&matrix, [b[0], b[1]])?;
    Ok(Array1::from_vec(x.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_accumulates_from_zero() {
        let a = Array2::from_rows(vec![vec![0.1, 0.2]]).unwrap();
        let b = Array2::from_rows(vec![vec![0.3], vec![0.4]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c[(0, 0)], 0.0 + 0.1 * 0.3 + 0.2 * 0.4);
    }

    #[test]
    fn transpose_of_empty_columns() {
        let m: Array2<f64> = Array2::from_shape_vec((3, 0), vec![]).unwrap();
        assert_eq!(transpose(&m).shape(), (0, 3));
    }

    #[test]
    fn determinant_on_threshold_is_accepted() {
        let a = Matrix2::from_rows([[SINGULARITY_EPSILON, 0.0], [0.0, 1.0]]);
        assert!(solve_2x2(&a, [1.0, 1.0]).is_ok());
    }
}

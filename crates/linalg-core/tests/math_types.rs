//! Integration tests for the Array1, Array2 and Matrix2 containers.

use linalg_core::display::format_vector;
use linalg_core::math::{Array1, Array2, Matrix2, ShapeError};
use linalg_core::LinalgError;

// ---------------------------------------------------------------------------
// Array1 basics
// ---------------------------------------------------------------------------

#[test]
fn array1_from_vec_and_len() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert!(!a.is_empty());
}

#[test]
fn array1_zeros() {
    let z: Array1<f64> = Array1::zeros(3);
    assert_eq!(z.to_vec(), vec![0.0, 0.0, 0.0]);
}

#[test]
fn array1_dot() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Array1::from_vec(vec![4.0, 5.0, 6.0]);
    assert_eq!(a.dot(&b), 32.0);
}

#[test]
#[should_panic(expected = "equal length")]
fn array1_dot_mismatched_lengths_panics() {
    let a = Array1::from_vec(vec![1.0, 2.0]);
    let b = Array1::from_vec(vec![1.0]);
    let _ = a.dot(&b);
}

#[test]
fn array1_display_matches_vector_format() {
    let x = Array1::from_vec(vec![2.8, -0.6]);
    assert_eq!(x.to_string(), "[ 2.80, -0.60 ]");
    assert_eq!(x.to_string(), format_vector(&x));
}

// ---------------------------------------------------------------------------
// Array2 construction
// ---------------------------------------------------------------------------

#[test]
fn array2_from_shape_vec() {
    let a = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    assert_eq!(a[(1, 0)], 4);
}

#[test]
fn array2_shape_mismatch_errors() {
    let result = Array2::<f64>::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        ShapeError::BufferLength {
            rows: 2,
            cols: 3,
            len: 3
        }
    );
}

#[test]
fn array2_from_rows_matches_row_major_buffer() {
    let a = Array2::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let b = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.row_slice(1), &[4, 5, 6]);
}

#[test]
fn array2_from_rows_rejects_jagged_input() {
    let err = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        ShapeError::JaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    );
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn array2_from_rows_empty_is_zero_by_zero() {
    let a: Array2<f64> = Array2::from_rows(vec![]).unwrap();
    assert_eq!(a.shape(), (0, 0));
}

#[test]
fn array2_row_slice_and_column() {
    let a = Array2::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    assert_eq!(a.row_slice(2), &[5, 6]);
    assert_eq!(a.column(1).to_vec(), vec![2, 4, 6]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn array2_index_past_last_column_panics() {
    let a = Array2::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let value = a[(0, 4)];
    assert_eq!(value, 5);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn array2_index_mut_past_last_column_panics() {
    let mut a = Array2::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    a[(1, 3)] = 0;
}

// ---------------------------------------------------------------------------
// Matrix2
// ---------------------------------------------------------------------------

#[test]
fn matrix2_determinant() {
    let m = Matrix2::from_rows([[2.0, 1.0], [3.0, 4.0]]);
    assert_eq!(m.determinant(), 5.0);
    assert_eq!(m.rows()[1], [3.0, 4.0]);
}

#[test]
fn matrix2_try_from_array2() {
    let a = Array2::from_rows(vec![vec![2.0, 1.0], vec![3.0, 4.0]]).unwrap();
    let m = Matrix2::try_from(&a).unwrap();
    assert_eq!(m, Matrix2::from_rows([[2.0, 1.0], [3.0, 4.0]]));
}

#[test]
fn matrix2_try_from_wrong_shape_errors() {
    let a = Array2::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    match Matrix2::try_from(&a) {
        Err(LinalgError::DimensionMismatch { left, .. }) => assert_eq!(left, (2, 3)),
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

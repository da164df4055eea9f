use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Failures raised by the linear algebra routines.
///
/// Every variant is raised before any output is produced; there is no
/// partial result to recover.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `operation`.
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// The 2x2 determinant is too close to zero for a unique solution.
    SingularSystem { determinant: f64 },
    /// A buffer or set of rows could not be shaped into a matrix.
    Shape(ShapeError),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Incompatible shapes for {}: {}x{} and {}x{}",
                operation, left.0, left.1, right.0, right.1
            ),
            LinalgError::SingularSystem { determinant } => write!(
                f,
                "System has no unique solution (determinant {:e})",
                determinant
            ),
            LinalgError::Shape(err) => write!(f, "{}", err),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for LinalgError {
    fn from(value: ShapeError) -> Self {
        LinalgError::Shape(value)
    }
}

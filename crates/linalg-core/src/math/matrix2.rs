use crate::error::LinalgError;
use crate::math::matrix::Array2;

/// A 2x2 `f64` matrix stored as rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2 {
    inner: [[f64; 2]; 2],
}

impl Matrix2 {
    pub const fn from_rows(inner: [[f64; 2]; 2]) -> Self {
        Self { inner }
    }

    pub const fn rows(&self) -> &[[f64; 2]; 2] {
        &self.inner
    }

    /// `a·d − b·c` for `[[a, b], [c, d]]`.
    pub fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.inner;
        a * d - b * c
    }
}

impl TryFrom<&Array2<f64>> for Matrix2 {
    type Error = LinalgError;

    fn try_from(value: &Array2<f64>) -> Result<Self, Self::Error> {
        if value.shape() != (2, 2) {
            return Err(LinalgError::DimensionMismatch {
                operation: "2x2 system",
                left: value.shape(),
                right: (2, 2),
            });
        }
        Ok(Self::from_rows([
            [value[(0, 0)], value[(0, 1)]],
            [value[(1, 0)], value[(1, 1)]],
        ]))
    }
}

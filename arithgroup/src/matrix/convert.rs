use crate::errors::ArithGroupError;
use crate::matrix::Matrix2;

use num_bigint::BigInt;

/// Coercion of user data into a [`Matrix2`].
///
/// Accepts a nested pair of pairs, a flat row-major sequence of four entries, or a matrix.
pub trait IntoMatrix2 {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError>;
}

impl IntoMatrix2 for Matrix2 {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError> {
        Ok(self)
    }
}

impl IntoMatrix2 for &Matrix2 {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError> {
        Ok(self.clone())
    }
}

impl<T: Into<BigInt>> IntoMatrix2 for [[T; 2]; 2] {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError> {
        let [[a, b], [c, d]] = self;
        Ok(Matrix2::new(a, b, c, d))
    }
}

impl<T: Into<BigInt>> IntoMatrix2 for [T; 4] {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError> {
        let [a, b, c, d] = self;
        Ok(Matrix2::new(a, b, c, d))
    }
}

impl<T: Into<BigInt>> IntoMatrix2 for Vec<T> {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError> {
        let len = self.len();
        let entries: [T; 4] = self.try_into().map_err(|_| {
            ArithGroupError::DimensionMismatch(format!(
                "Expected 4 entries for a 2x2 matrix, got {}",
                len
            ))
        })?;

        entries.into_matrix2()
    }
}

impl<T: Into<BigInt> + Clone> IntoMatrix2 for &[T] {
    fn into_matrix2(self) -> Result<Matrix2, ArithGroupError> {
        self.to_vec().into_matrix2()
    }
}

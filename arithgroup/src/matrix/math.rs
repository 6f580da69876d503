//! Arithmetic on 2×2 integer matrices.

use crate::errors::ArithGroupError;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use std::ops::Mul;

/// A 2×2 matrix over the integers, stored row-major as `[a, b, c, d]`.
///
/// There is no way to mutate a `Matrix2` once it exists; every operation returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Matrix2 {
    entries: [BigInt; 4],
}

impl Matrix2 {
    /// Builds `[[a, b], [c, d]]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::matrix::Matrix2;
    /// let m = Matrix2::new(1, 2, 15, 31);
    /// assert_eq!(m.determinant(), 1.into());
    /// ```
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        c: impl Into<BigInt>,
        d: impl Into<BigInt>,
    ) -> Self {
        Matrix2 {
            entries: [a.into(), b.into(), c.into(), d.into()],
        }
    }

    pub fn from_entries(entries: [BigInt; 4]) -> Self {
        Matrix2 { entries }
    }

    pub fn identity() -> Self {
        Matrix2::new(1, 0, 0, 1)
    }

    /// Entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::IndexOutOfRange` unless both indices are 0 or 1.
    pub fn entry(&self, row: usize, col: usize) -> Result<&BigInt, ArithGroupError> {
        if row > 1 || col > 1 {
            return Err(ArithGroupError::IndexOutOfRange { row, col });
        }

        Ok(&self.entries[2 * row + col])
    }

    pub fn a(&self) -> &BigInt {
        &self.entries[0]
    }

    pub fn b(&self) -> &BigInt {
        &self.entries[1]
    }

    pub fn c(&self) -> &BigInt {
        &self.entries[2]
    }

    pub fn d(&self) -> &BigInt {
        &self.entries[3]
    }

    /// Row-major view of the entries.
    pub fn entries(&self) -> &[BigInt; 4] {
        &self.entries
    }

    pub fn into_entries(self) -> [BigInt; 4] {
        self.entries
    }

    /// Computes `ad - bc`.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::matrix::Matrix2;
    /// # use num_bigint::BigInt;
    /// assert_eq!(Matrix2::new(2, 3, 4, 5).determinant(), BigInt::from(-2));
    /// ```
    pub fn determinant(&self) -> BigInt {
        let [a, b, c, d] = &self.entries;
        a * d - b * c
    }

    pub fn trace(&self) -> BigInt {
        &self.entries[0] + &self.entries[3]
    }

    /// The adjugate `[[d, -b], [-c, a]]`.
    ///
    /// For a matrix of determinant 1 this is its inverse.
    pub fn adjugate(&self) -> Matrix2 {
        let [a, b, c, d] = &self.entries;
        Matrix2 {
            entries: [d.clone(), -b, -c, a.clone()],
        }
    }

    /// Standard matrix product `self · other`.
    pub fn product(&self, other: &Matrix2) -> Matrix2 {
        let [a, b, c, d] = &self.entries;
        let [e, f, g, h] = &other.entries;

        Matrix2 {
            entries: [a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h],
        }
    }

    pub fn is_identity(&self) -> bool {
        let [a, b, c, d] = &self.entries;
        a.is_one() && b.is_zero() && c.is_zero() && d.is_one()
    }

    /// True for `I` and `-I`.
    pub fn is_scalar_unit(&self) -> bool {
        let [a, b, c, d] = &self.entries;
        b.is_zero() && c.is_zero() && a == d && (a.is_one() || (-a).is_one())
    }
}

impl Mul<&Matrix2> for &Matrix2 {
    type Output = Matrix2;

    fn mul(self, rhs: &Matrix2) -> Matrix2 {
        self.product(rhs)
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    fn mul(self, rhs: Matrix2) -> Matrix2 {
        self.product(&rhs)
    }
}

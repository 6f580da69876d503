//! # Element Module
//!
//! Provides [`GroupElement`], a matrix of SL(2,Z) tagged with the arithmetic subgroup it
//! is considered to belong to.

pub mod action;
pub mod serial;

#[cfg(test)]
pub(crate) mod arbitrary;

use crate::errors::ArithGroupError;
use crate::group::GroupRef;
use crate::matrix::{IntoMatrix2, Matrix2};

use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;

pub use action::{Cusp, FieldElement, Point};
pub use serial::{GroupTag, Reduction};

/// Conjugacy-invariant shape of an element, read off the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `I` or `-I`.
    Scalar,
    /// `|tr| < 2`: finite order, fixes a point of the upper half plane.
    Elliptic,
    /// `|tr| = 2`, not scalar: fixes exactly one cusp.
    Parabolic,
    /// `|tr| > 2`.
    Hyperbolic,
}

/// An element of an arithmetic subgroup of SL(2,Z).
///
/// Equality, ordering and hashing only look at the matrix; the parent is not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "Reduction", try_from = "Reduction")]
pub struct GroupElement {
    matrix: Matrix2,
    group: GroupRef,
}

impl GroupElement {
    /// Builds an element of `group`, checking that the parent is an arithmetic subgroup and
    /// that the matrix has determinant 1.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::TypeMismatch` if either check fails, and
    /// `ArithGroupError::DimensionMismatch` if a flat sequence does not hold four entries.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::element::GroupElement;
    /// # use arithgroup::preset::generators::SL2Z;
    /// # use num_bigint::BigInt;
    /// let x = GroupElement::try_with(SL2Z.clone(), [[1, 2], [15, 31]]).unwrap();
    /// assert_eq!(x.c(), &BigInt::from(15));
    /// assert!(GroupElement::try_with(SL2Z.clone(), [2, 0, 0, 1]).is_err());
    /// ```
    pub fn try_with<D: IntoMatrix2>(group: GroupRef, data: D) -> Result<Self, ArithGroupError> {
        if !group.is_arithmetic_subgroup() {
            tracing::debug!(parent = %group, "parent is not an arithmetic subgroup");
            return Err(ArithGroupError::TypeMismatch(format!(
                "parent ({}) must be an arithmetic subgroup",
                group
            )));
        }

        let matrix = data.into_matrix2()?;

        if !matrix.determinant().is_one() {
            tracing::debug!(det = %matrix.determinant(), "rejecting matrix with determinant != 1");
            return Err(ArithGroupError::TypeMismatch(
                "matrix must have determinant 1".into(),
            ));
        }

        Ok(GroupElement { matrix, group })
    }

    /// Wraps `matrix` without any validation.
    ///
    /// The caller guarantees that `group` is an arithmetic subgroup and that the determinant
    /// is 1. A matrix that breaks this gives meaningless results downstream.
    pub fn new_unchecked(group: GroupRef, matrix: Matrix2) -> Self {
        GroupElement { matrix, group }
    }

    pub fn identity(group: GroupRef) -> Self {
        GroupElement::new_unchecked(group, Matrix2::identity())
    }

    pub fn group(&self) -> &GroupRef {
        &self.group
    }

    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Structural comparison of the underlying matrices, row-major.
    pub fn compare(&self, other: &GroupElement) -> Ordering {
        self.matrix.cmp(&other.matrix)
    }

    /// Always true: no element of SL(2,Z) is the zero matrix.
    pub fn is_nonzero(&self) -> bool {
        true
    }

    /// The product `self · other`, tagged with `self`'s group.
    ///
    /// No intersection of the operands' groups is computed.
    pub fn multiply(&self, other: &GroupElement) -> GroupElement {
        GroupElement::new_unchecked(self.group.clone(), self.matrix.product(&other.matrix))
    }

    /// The inverse `[[d, -b], [-c, a]]`, tagged with `self`'s group.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::element::GroupElement;
    /// # use arithgroup::preset::generators::SL2Z;
    /// # use num_bigint::BigInt;
    /// let x = GroupElement::try_with(SL2Z.clone(), [1, 2, 15, 31]).unwrap();
    /// let expected: Vec<BigInt> = vec![31i64, -2, -15, 1].into_iter().map(BigInt::from).collect();
    /// assert_eq!(x.inverse().as_sequence().to_vec(), expected);
    /// assert_eq!(&x * &x.inverse(), GroupElement::identity(SL2Z.clone()));
    /// ```
    pub fn inverse(&self) -> GroupElement {
        GroupElement::new_unchecked(self.group.clone(), self.matrix.adjugate())
    }

    /// Always 1; the determinant is only checked once, at construction.
    pub fn determinant(&self) -> BigInt {
        BigInt::one()
    }

    /// Raises the element to an integer power; negative exponents go through the inverse.
    pub fn pow(&self, exp: i64) -> GroupElement {
        let mut base = if exp < 0 {
            self.inverse()
        } else {
            self.clone()
        };
        let mut result = GroupElement::identity(self.group.clone());

        let mut e = exp.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                result = result.multiply(&base);
            }
            base = base.multiply(&base);
            e >>= 1;
        }
        result
    }

    pub fn trace(&self) -> BigInt {
        self.matrix.trace()
    }

    /// Order of the element, or `None` if it has infinite order.
    ///
    /// Torsion in SL(2,Z) only has orders 1, 2, 3, 4 and 6, and the trace decides which.
    pub fn multiplicative_order(&self) -> Option<u32> {
        if self.matrix.is_identity() {
            return Some(1);
        }
        if self.matrix.is_scalar_unit() {
            return Some(2);
        }

        let trace = self.trace();
        if trace.is_zero() {
            Some(4)
        } else if trace.is_one() {
            Some(6)
        } else if (-trace).is_one() {
            Some(3)
        } else {
            None
        }
    }

    pub fn kind(&self) -> ElementKind {
        if self.matrix.is_scalar_unit() {
            return ElementKind::Scalar;
        }

        let two = BigInt::from(2);
        match self.trace().magnitude().cmp(two.magnitude()) {
            Ordering::Less => ElementKind::Elliptic,
            Ordering::Equal => ElementKind::Parabolic,
            Ordering::Greater => ElementKind::Hyperbolic,
        }
    }

    /// Entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::IndexOutOfRange` unless both indices are 0 or 1.
    pub fn entry(&self, row: usize, col: usize) -> Result<&BigInt, ArithGroupError> {
        self.matrix.entry(row, col)
    }

    pub fn a(&self) -> &BigInt {
        self.matrix.a()
    }

    pub fn b(&self) -> &BigInt {
        self.matrix.b()
    }

    pub fn c(&self) -> &BigInt {
        self.matrix.c()
    }

    pub fn d(&self) -> &BigInt {
        self.matrix.d()
    }

    /// Entries in row-major order `[a, b, c, d]`.
    pub fn as_sequence(&self) -> [BigInt; 4] {
        self.matrix.entries().clone()
    }

    pub fn to_latex(&self) -> String {
        self.matrix.to_latex()
    }
}

impl PartialEq for GroupElement {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl Eq for GroupElement {}

impl PartialEq<Matrix2> for GroupElement {
    fn eq(&self, other: &Matrix2) -> bool {
        &self.matrix == other
    }
}

impl PartialOrd for GroupElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for GroupElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.matrix.hash(state);
    }
}

impl Mul<&GroupElement> for &GroupElement {
    type Output = GroupElement;

    fn mul(self, rhs: &GroupElement) -> GroupElement {
        self.multiply(rhs)
    }
}

impl Mul for GroupElement {
    type Output = GroupElement;

    fn mul(self, rhs: GroupElement) -> GroupElement {
        self.multiply(&rhs)
    }
}

impl<'a> IntoIterator for &'a GroupElement {
    type Item = &'a BigInt;
    type IntoIter = std::slice::Iter<'a, BigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrix.entries().iter()
    }
}

impl fmt::Display for GroupElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}

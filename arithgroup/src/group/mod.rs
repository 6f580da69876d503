//! # Group Module
//!
//! Parents that group elements can be attached to. Membership tests live here,
//! never on the element.

pub mod congruence;

use crate::element::GroupElement;
use crate::errors::ArithGroupError;
use crate::matrix::{IntoMatrix2, Matrix2};

use std::fmt;
use std::sync::Arc;

pub use congruence::{Gamma0, Gamma1, GammaN, Sl2z};

/// Shared handle to the parent of an element.
pub type GroupRef = Arc<dyn Parent>;

/// Anything an element may name as its parent.
pub trait Parent: fmt::Debug + fmt::Display + Send + Sync {
    /// The subgroup view of this parent, if it is an arithmetic subgroup of SL(2,Z).
    fn as_arithmetic_subgroup(&self) -> Option<&dyn ArithmeticSubgroup> {
        None
    }

    fn is_arithmetic_subgroup(&self) -> bool {
        self.as_arithmetic_subgroup().is_some()
    }
}

/// A finite-index subgroup of SL(2,Z).
pub trait ArithmeticSubgroup: Parent {
    fn level(&self) -> u64;

    /// Whether `matrix` has determinant 1 and satisfies this subgroup's congruence conditions.
    fn contains(&self, matrix: &Matrix2) -> bool;

    /// A handle suitable for tagging elements of this subgroup.
    fn group_ref(&self) -> GroupRef;

    /// Builds an element of this subgroup, rejecting matrices that are not members.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::TypeMismatch` if the determinant is not 1 or the matrix
    /// fails the subgroup's congruence conditions.
    fn element<D: IntoMatrix2>(&self, data: D) -> Result<GroupElement, ArithGroupError>
    where
        Self: Sized,
    {
        let element = GroupElement::try_with(self.group_ref(), data)?;
        if !self.contains(element.matrix()) {
            tracing::debug!(group = %self, "matrix rejected by membership test");
            return Err(ArithGroupError::TypeMismatch(format!(
                "matrix\n{}\nis not an element of {}",
                element.matrix(),
                self
            )));
        }

        Ok(element)
    }
}

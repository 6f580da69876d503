//! The modular group and the standard congruence subgroups.

use crate::element::GroupElement;
use crate::errors::ArithGroupError;
use crate::group::{ArithmeticSubgroup, GroupRef, Parent};
use crate::matrix::Matrix2;
use crate::preset::generators::SL2Z;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use std::fmt;
use std::sync::Arc;

/// `x ≡ r (mod n)`.
fn congruent(x: &BigInt, r: i64, n: u64) -> bool {
    (x - BigInt::from(r)).mod_floor(&BigInt::from(n)).is_zero()
}

fn check_level(level: u64) -> Result<u64, ArithGroupError> {
    if level == 0 {
        return Err(ArithGroupError::InvalidLevel(level));
    }

    Ok(level)
}

/// The full modular group SL(2,Z).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sl2z;

impl Sl2z {
    /// A random element whose bottom row `(c, d)` has entries in `[-bound, bound]`.
    ///
    /// The top row is solved from `ad - bc = 1` with the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::InvalidParameters` if `bound` is 0.
    pub fn random_element<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        bound: u32,
    ) -> Result<GroupElement, ArithGroupError> {
        if bound == 0 {
            return Err(ArithGroupError::InvalidParameters(
                "bound must be at least 1".into(),
            ));
        }

        let bound = bound as i64;
        loop {
            let c: i64 = rng.random_range(-bound..=bound);
            let d: i64 = rng.random_range(-bound..=bound);
            let egcd = d.extended_gcd(&c);
            let (x, y) = match egcd.gcd {
                1 => (egcd.x, egcd.y),
                -1 => (-egcd.x, -egcd.y),
                _ => continue,
            };

            // a·d - b·c = x·d + y·c = 1
            return GroupElement::try_with(SL2Z.clone(), [x, -y, c, d]);
        }
    }
}

impl fmt::Display for Sl2z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modular Group SL(2,Z)")
    }
}

impl Parent for Sl2z {
    fn as_arithmetic_subgroup(&self) -> Option<&dyn ArithmeticSubgroup> {
        Some(self)
    }
}

impl ArithmeticSubgroup for Sl2z {
    fn level(&self) -> u64 {
        1
    }

    fn contains(&self, matrix: &Matrix2) -> bool {
        matrix.determinant().is_one()
    }

    fn group_ref(&self) -> GroupRef {
        SL2Z.clone()
    }
}

/// Gamma0(N): matrices with `c ≡ 0 (mod N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gamma0 {
    level: u64,
}

impl Gamma0 {
    /// Creates Gamma0(N).
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::group::{ArithmeticSubgroup, Gamma0};
    /// let g = Gamma0::try_with(11).unwrap();
    /// assert_eq!(g.level(), 11);
    /// assert!(g.element([1, 1, 11, 12]).is_ok());
    /// assert!(g.element([1, 1, 10, 11]).is_err());
    /// assert!(Gamma0::try_with(0).is_err());
    /// ```
    pub fn try_with(level: u64) -> Result<Self, ArithGroupError> {
        Ok(Gamma0 {
            level: check_level(level)?,
        })
    }
}

impl fmt::Display for Gamma0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Congruence Subgroup Gamma0({})", self.level)
    }
}

impl Parent for Gamma0 {
    fn as_arithmetic_subgroup(&self) -> Option<&dyn ArithmeticSubgroup> {
        Some(self)
    }
}

impl ArithmeticSubgroup for Gamma0 {
    fn level(&self) -> u64 {
        self.level
    }

    fn contains(&self, matrix: &Matrix2) -> bool {
        matrix.determinant().is_one() && congruent(matrix.c(), 0, self.level)
    }

    fn group_ref(&self) -> GroupRef {
        Arc::new(*self)
    }
}

/// Gamma1(N): matrices congruent to `[[1, *], [0, 1]]` mod N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gamma1 {
    level: u64,
}

impl Gamma1 {
    pub fn try_with(level: u64) -> Result<Self, ArithGroupError> {
        Ok(Gamma1 {
            level: check_level(level)?,
        })
    }
}

impl fmt::Display for Gamma1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Congruence Subgroup Gamma1({})", self.level)
    }
}

impl Parent for Gamma1 {
    fn as_arithmetic_subgroup(&self) -> Option<&dyn ArithmeticSubgroup> {
        Some(self)
    }
}

impl ArithmeticSubgroup for Gamma1 {
    fn level(&self) -> u64 {
        self.level
    }

    fn contains(&self, matrix: &Matrix2) -> bool {
        let n = self.level;
        matrix.determinant().is_one()
            && congruent(matrix.c(), 0, n)
            && congruent(matrix.a(), 1, n)
            && congruent(matrix.d(), 1, n)
    }

    fn group_ref(&self) -> GroupRef {
        Arc::new(*self)
    }
}

/// The principal congruence subgroup Gamma(N): matrices congruent to the identity mod N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GammaN {
    level: u64,
}

impl GammaN {
    pub fn try_with(level: u64) -> Result<Self, ArithGroupError> {
        Ok(GammaN {
            level: check_level(level)?,
        })
    }
}

impl fmt::Display for GammaN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Congruence Subgroup Gamma({})", self.level)
    }
}

impl Parent for GammaN {
    fn as_arithmetic_subgroup(&self) -> Option<&dyn ArithmeticSubgroup> {
        Some(self)
    }
}

impl ArithmeticSubgroup for GammaN {
    fn level(&self) -> u64 {
        self.level
    }

    fn contains(&self, matrix: &Matrix2) -> bool {
        let n = self.level;
        matrix.determinant().is_one()
            && congruent(matrix.a(), 1, n)
            && congruent(matrix.b(), 0, n)
            && congruent(matrix.c(), 0, n)
            && congruent(matrix.d(), 1, n)
    }

    fn group_ref(&self) -> GroupRef {
        Arc::new(*self)
    }
}

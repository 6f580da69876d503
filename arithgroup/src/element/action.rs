//! Action of group elements on points by fractional linear transformations
//! `z ↦ (az + b) / (cz + d)`.

use crate::element::GroupElement;
use crate::errors::ArithGroupError;

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::{BigRational, Ratio};
use num_traits::{ToPrimitive, Zero};

use std::ops::{Add, Div, Mul};

/// A point of the projective line over Q.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cusp {
    Infinity,
    Finite(BigRational),
}

/// A point an element can act on.
///
/// Values are sorted into these variants on conversion: integers of any width and
/// `Ratio<T>` over any integer type become `Exact` (a zero denominator is the point at
/// infinity), floating and complex values become `Field`.
#[derive(Debug, Clone, PartialEq)]
pub enum Point<F> {
    Infinity,
    Exact(BigRational),
    Field(F),
}

/// A field the entries of a group element can be mapped into.
///
/// Division follows the field's own rules; for floats a zero denominator gives inf or NaN.
pub trait FieldElement:
    Clone + Add<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    fn from_integer(n: &BigInt) -> Self;
}

impl FieldElement for f64 {
    fn from_integer(n: &BigInt) -> Self {
        n.to_f64().unwrap_or(f64::NAN)
    }
}

impl FieldElement for Complex64 {
    fn from_integer(n: &BigInt) -> Self {
        Complex64::new(f64::from_integer(n), 0.0)
    }
}

impl<F> From<Cusp> for Point<F> {
    fn from(cusp: Cusp) -> Self {
        match cusp {
            Cusp::Infinity => Point::Infinity,
            Cusp::Finite(q) => Point::Exact(q),
        }
    }
}

impl<F, T: Into<BigInt>> From<Ratio<T>> for Point<F> {
    fn from(q: Ratio<T>) -> Self {
        let (numer, denom) = q.into_raw();
        let denom: BigInt = denom.into();
        if denom.is_zero() {
            return Point::Infinity;
        }

        Point::Exact(BigRational::new(numer.into(), denom))
    }
}

impl<F> From<BigInt> for Point<F> {
    fn from(n: BigInt) -> Self {
        Point::Exact(BigRational::from_integer(n))
    }
}

macro_rules! exact_point_from_primitive {
    ($($int:ty),* $(,)?) => {
        $(
            impl<F> From<$int> for Point<F> {
                fn from(n: $int) -> Self {
                    Point::Exact(BigRational::from_integer(BigInt::from(n)))
                }
            }
        )*
    };
}

exact_point_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Point<f64> {
    fn from(x: f64) -> Self {
        Point::Field(x)
    }
}

impl From<Complex64> for Point<Complex64> {
    fn from(z: Complex64) -> Self {
        Point::Field(z)
    }
}

impl GroupElement {
    /// Acts on `z`, trying the point at infinity first, then exact fractions, then
    /// generic field arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `ArithGroupError::ZeroDivision` when an exact fraction maps to `0/0`, which
    /// only happens for matrices built with [`GroupElement::new_unchecked`] that are not
    /// invertible.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::element::{GroupElement, Point};
    /// # use arithgroup::preset::generators::SL2Z;
    /// # use num_bigint::BigInt;
    /// # use num_rational::{BigRational, Ratio};
    /// let x = GroupElement::try_with(SL2Z.clone(), [1, 2, 15, 31]).unwrap();
    ///
    /// let image = x.act_on_point::<f64, _>(Point::Infinity).unwrap();
    /// assert_eq!(image, Point::Exact(BigRational::new(BigInt::from(1), BigInt::from(15))));
    ///
    /// let z = BigRational::new(BigInt::from(-31), BigInt::from(15));
    /// assert_eq!(x.act_on_point::<f64, _>(z).unwrap(), Point::Infinity);
    /// ```
    pub fn act_on_point<F, Z>(&self, z: Z) -> Result<Point<F>, ArithGroupError>
    where
        F: FieldElement,
        Z: Into<Point<F>>,
    {
        match z.into() {
            Point::Infinity => {
                tracing::trace!("acting on the cusp at infinity");
                Ok(self.act_on_infinity().into())
            }
            Point::Exact(q) => {
                tracing::trace!(point = %q, "acting on an exact fraction");
                Ok(self.act_on_rational(&q)?.into())
            }
            Point::Field(z) => Ok(Point::Field(self.act_on_field(&z))),
        }
    }

    /// The closed action on P¹(Q).
    pub fn act_on_cusp(&self, cusp: &Cusp) -> Result<Cusp, ArithGroupError> {
        match cusp {
            Cusp::Infinity => Ok(self.act_on_infinity()),
            Cusp::Finite(q) => self.act_on_rational(q),
        }
    }

    /// `(az + b) / (cz + d)` computed in `F`.
    ///
    /// A zero denominator is not detected; the result is whatever `F`'s division gives.
    pub fn act_on_field<F: FieldElement>(&self, z: &F) -> F {
        let [a, b, c, d] = self.matrix().entries();
        let numerator = F::from_integer(a) * z.clone() + F::from_integer(b);
        let denominator = F::from_integer(c) * z.clone() + F::from_integer(d);
        numerator / denominator
    }

    fn act_on_infinity(&self) -> Cusp {
        if self.c().is_zero() {
            return Cusp::Infinity;
        }

        Cusp::Finite(BigRational::new(self.a().clone(), self.c().clone()))
    }

    fn act_on_rational(&self, q: &BigRational) -> Result<Cusp, ArithGroupError> {
        let [a, b, c, d] = self.matrix().entries();
        let (p, q) = (q.numer(), q.denom());

        let top = a * p + b * q;
        let bottom = c * p + d * q;

        if bottom.is_zero() {
            if top.is_zero() {
                return Err(ArithGroupError::ZeroDivision(format!(
                    "matrix\n{}\nsends {}/{} to 0/0",
                    self.matrix(),
                    p,
                    q
                )));
            }
            return Ok(Cusp::Infinity);
        }

        Ok(Cusp::Finite(BigRational::new(top, bottom)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix2;
    use crate::preset::generators::{S, SL2Z, T};

    fn ratio(p: i64, q: i64) -> BigRational {
        BigRational::new(BigInt::from(p), BigInt::from(q))
    }

    fn x() -> GroupElement {
        GroupElement::new_unchecked(SL2Z.clone(), Matrix2::new(1, 2, 15, 31))
    }

    #[test]
    fn test_infinity_maps_to_a_over_c() -> Result<(), ArithGroupError> {
        assert_eq!(
            x().act_on_point::<f64, _>(Point::Infinity)?,
            Point::Exact(ratio(1, 15))
        );
        assert_eq!(x().act_on_cusp(&Cusp::Infinity)?, Cusp::Finite(ratio(1, 15)));
        Ok(())
    }

    #[test]
    fn test_infinity_fixed_by_upper_triangular() -> Result<(), ArithGroupError> {
        assert_eq!(T.act_on_cusp(&Cusp::Infinity)?, Cusp::Infinity);
        assert_eq!(T.pow(7).act_on_point::<Complex64, _>(Point::Infinity)?, Point::Infinity);
        Ok(())
    }

    #[test]
    fn test_fraction_mapping_to_infinity() -> Result<(), ArithGroupError> {
        assert_eq!(x().act_on_point::<f64, _>(ratio(-31, 15))?, Point::Infinity);
        assert_eq!(x().act_on_cusp(&Cusp::Finite(ratio(-31, 15)))?, Cusp::Infinity);
        Ok(())
    }

    #[test]
    fn test_fraction_action_is_reduced() -> Result<(), ArithGroupError> {
        // 0 ↦ 2/31, 1 ↦ 3/46
        assert_eq!(x().act_on_point::<f64, _>(0i64)?, Point::Exact(ratio(2, 31)));
        assert_eq!(x().act_on_point::<f64, _>(BigInt::from(1))?, Point::Exact(ratio(3, 46)));
        // S: 2/4 ↦ -2
        assert_eq!(S.act_on_cusp(&Cusp::Finite(ratio(2, 4)))?, Cusp::Finite(ratio(-2, 1)));
        Ok(())
    }

    #[test]
    fn test_any_integer_ratio_is_exact() -> Result<(), ArithGroupError> {
        use num_rational::{Rational32, Rational64};

        assert_eq!(x().act_on_point::<f64, _>(Rational64::new(-31, 15))?, Point::Infinity);
        assert_eq!(
            x().act_on_point::<f64, _>(Rational32::new(0, 7))?,
            Point::Exact(ratio(2, 31))
        );
        // -1 ↦ 1/16, 7 ↦ 9/136
        assert_eq!(x().act_on_point::<f64, _>(-1i32)?, Point::Exact(ratio(1, 16)));
        assert_eq!(x().act_on_point::<f64, _>(7u8)?, Point::Exact(ratio(9, 136)));
        assert_eq!(x().act_on_point::<f64, _>(7usize)?, Point::Exact(ratio(9, 136)));
        assert_eq!(
            x().act_on_point::<f64, _>(Ratio::new(14u64, 2))?,
            Point::Exact(ratio(9, 136))
        );
        Ok(())
    }

    #[test]
    fn test_ratio_with_zero_denominator_is_infinity() -> Result<(), ArithGroupError> {
        let q = Ratio::new_raw(3i64, 0);
        assert_eq!(x().act_on_point::<f64, _>(q)?, Point::Exact(ratio(1, 15)));
        Ok(())
    }

    #[test]
    fn test_action_is_compatible_with_product() -> Result<(), ArithGroupError> {
        let y = GroupElement::new_unchecked(SL2Z.clone(), Matrix2::new(3, 7, 2, 5));
        let z = Cusp::Finite(ratio(5, 9));
        let lhs = (&x() * &y).act_on_cusp(&z)?;
        let rhs = x().act_on_cusp(&y.act_on_cusp(&z)?)?;
        assert_eq!(lhs, rhs);
        Ok(())
    }

    #[test]
    fn test_degenerate_unchecked_matrix_reports_zero_division() {
        let zero = GroupElement::new_unchecked(SL2Z.clone(), Matrix2::new(0, 0, 0, 0));
        assert!(matches!(
            zero.act_on_cusp(&Cusp::Finite(ratio(1, 2))),
            Err(ArithGroupError::ZeroDivision(_))
        ));
    }

    #[test]
    fn test_real_action() -> Result<(), ArithGroupError> {
        assert_eq!(T.act_on_point::<f64, _>(0.5)?, Point::Field(1.5));
        assert_eq!(S.act_on_field(&2.0f64), -0.5);
        Ok(())
    }

    #[test]
    fn test_real_zero_denominator_is_not_special_cased() {
        assert!(S.act_on_field(&0.0f64).is_infinite());
    }

    #[test]
    fn test_complex_action_fixes_i_under_s() -> Result<(), ArithGroupError> {
        let i = Complex64::new(0.0, 1.0);
        assert_eq!(S.act_on_point::<Complex64, _>(i)?, Point::Field(i));

        let w = T.act_on_field(&Complex64::new(0.25, 2.0));
        assert_eq!(w, Complex64::new(1.25, 2.0));
        Ok(())
    }
}

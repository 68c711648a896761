//! The field of rational numbers Q.
//!
//! Backed by `dashu::rational::RBig`, which keeps every value in lowest
//! terms with a positive denominator. That canonical form is what makes
//! the derived `Eq` and `Hash` agree with mathematical equality.

use dashu::base::{Inverse, Signed};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// An exact rational number.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates `numerator / denominator`, normalising the sign.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let mut num = IBig::from(numerator);
        if denominator < 0 {
            num = -num;
        }
        Self(RBig::from_parts(num, UBig::from(denominator.unsigned_abs())))
    }

    /// Creates the integer `n` as a rational.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Wraps a `dashu` rational.
    #[must_use]
    pub fn from_inner(value: RBig) -> Self {
        Self(value)
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        Signed::is_negative(&self.0)
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Q {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Ring for Q {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn is_zero(&self) -> bool {
        <Self as Zero>::is_zero(self)
    }

    fn is_one(&self) -> bool {
        <Self as One>::is_one(self)
    }

    fn unit_inverse(&self) -> Option<Self> {
        Field::inv(self)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.clone() * Self::from_i64(n)
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({self})")
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.0.is_zero(), "division by zero");
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Q::new(1, 2);
        let b = Q::new(1, 3);

        assert_eq!(a.clone() + b.clone(), Q::new(5, 6));
        assert_eq!(a.clone() - b.clone(), Q::new(1, 6));
        assert_eq!(a.clone() * b.clone(), Q::new(1, 6));
        assert_eq!(a / b, Q::new(3, 2));
    }

    #[test]
    fn test_reduction_and_sign() {
        assert_eq!(Q::new(4, 6), Q::new(2, 3));
        assert_eq!(Q::new(1, -2), Q::new(-1, 2));
        assert!(Q::new(3, -7).is_negative());
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Q::new(-2, 5).inv(), Some(Q::new(-5, 2)));
        assert_eq!(<Q as Field>::inv(&<Q as Ring>::zero()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Q::new(3, 4)), "3/4");
        assert_eq!(format!("{}", Q::from_i64(-5)), "-5");
    }
}

//! Algebraic structure traits.
//!
//! Everything above the coefficient layer (polynomials, matrices, the
//! Morse reduction itself) is written against these two traits.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// `Hash` is required because ring elements are used as cache keys
/// when standard representations are memoized.
pub trait Ring:
    Clone
    + Eq
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns the multiplicative inverse if this element is a unit.
    fn unit_inverse(&self) -> Option<Self>;

    /// Returns true if this element has a multiplicative inverse.
    fn is_unit(&self) -> bool {
        self.unit_inverse().is_some()
    }

    /// Computes self + self + ... (n times), negated for negative n.
    fn mul_by_scalar(&self, n: i64) -> Self {
        match n {
            0 => Self::zero(),
            1 => self.clone(),
            -1 => -self.clone(),
            _ => {
                let mut result = Self::zero();
                let mut base = self.clone();
                let mut k = n.unsigned_abs();
                while k > 0 {
                    if k & 1 == 1 {
                        result = result + base.clone();
                    }
                    base = base.clone() + base;
                    k >>= 1;
                }
                if n < 0 {
                    -result
                } else {
                    result
                }
            }
        }
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

//! Prime fields Z/pZ.
//!
//! Useful when coefficient growth over Q becomes the bottleneck: Betti
//! numbers only depend on the characteristic, so a large prime gives the
//! rational answer for all but finitely many inputs.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// An element of Z/pZ for a prime `P`.
///
/// `P` must be prime and below 2^63; neither is checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element, reducing modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value >= 0 || r == 0 {
            Self(r)
        } else {
            Self(P - r)
        }
    }

    /// Returns the canonical representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic.
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % P)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn unit_inverse(&self) -> Option<Self> {
        self.inv()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        *self * Self::from_signed(n)
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        // Extended Euclid on (P, a); i128 keeps the Bezout coefficients exact.
        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (i128::from(P), i128::from(self.0));
        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        let p = i128::from(P);
        let normalized = ((t % p) + p) % p;
        u64::try_from(normalized).ok().map(Self)
    }
}

impl<const P: u64> fmt::Debug for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = u128::from(self.0) + u128::from(rhs.0);
        Self((sum % u128::from(P)) as u64)
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let product = u128::from(self.0) * u128::from(rhs.0);
        Self((product % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

/// Z/32003Z, the customary characteristic for syzygy computations.
pub type GF32003 = FiniteField<32003>;

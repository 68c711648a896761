//! Monomials as exponent vectors.
//!
//! A monomial stores its exponents `(e_0, e_1, ...)` with trailing zeros
//! trimmed, so two equal monomials always have identical storage no matter
//! how many variables the surrounding ring has. The total degree is cached
//! because every graded comparison starts with it.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Inline capacity before the exponent vector spills to the heap.
const INLINE_VARS: usize = 8;

/// A monomial `x0^e0 * x1^e1 * ...`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    /// Exponents with trailing zeros removed.
    exponents: SmallVec<[u16; INLINE_VARS]>,
    /// Cached total degree.
    degree: u32,
}

impl Monomial {
    /// Creates a monomial from an exponent vector.
    #[must_use]
    pub fn new(exps: &[u16]) -> Self {
        let mut exponents: SmallVec<[u16; INLINE_VARS]> = SmallVec::from_slice(exps);
        Self::trim(&mut exponents);
        let degree = exponents.iter().map(|&e| u32::from(e)).sum();
        Self { exponents, degree }
    }

    /// The monomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// The variable `x_i`.
    #[must_use]
    pub fn var(i: usize) -> Self {
        Self::var_pow(i, 1)
    }

    /// The power `x_i^e`.
    #[must_use]
    pub fn var_pow(i: usize, e: u16) -> Self {
        if e == 0 {
            return Self::one();
        }
        let mut exponents: SmallVec<[u16; INLINE_VARS]> = SmallVec::from_elem(0, i + 1);
        exponents[i] = e;
        Self {
            exponents,
            degree: u32::from(e),
        }
    }

    fn trim(exponents: &mut SmallVec<[u16; INLINE_VARS]>) {
        while exponents.last() == Some(&0) {
            exponents.pop();
        }
    }

    /// Returns the exponent of `x_i` (zero beyond the stored length).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u16 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the stored exponents; trailing zeros are not included.
    #[must_use]
    pub fn exponents(&self) -> &[u16] {
        &self.exponents
    }

    /// Returns the exponent vector padded with zeros to `num_vars` entries.
    #[must_use]
    pub fn dense_exponents(&self, num_vars: usize) -> Vec<u16> {
        (0..num_vars.max(self.exponents.len()))
            .map(|i| self.exponent(i))
            .collect()
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.degree
    }

    /// Checks if this is the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.degree == 0
    }

    /// Index of the last variable with a nonzero exponent.
    ///
    /// This is the class of the monomial; `None` for the monomial 1.
    #[must_use]
    pub fn max_var(&self) -> Option<usize> {
        self.exponents.len().checked_sub(1)
    }

    /// Index of the first variable with a nonzero exponent.
    #[must_use]
    pub fn min_var(&self) -> Option<usize> {
        self.exponents.iter().position(|&e| e > 0)
    }

    /// Iterates over the indices of variables dividing this monomial.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.exponents
            .iter()
            .enumerate()
            .filter(|(_, e)| **e > 0)
            .map(|(i, _)| i)
    }

    /// Multiplies two monomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.exponents.len().max(other.exponents.len());
        let exponents = (0..n)
            .map(|i| self.exponent(i).saturating_add(other.exponent(i)))
            .collect();
        Self {
            exponents,
            degree: self.degree + other.degree,
        }
    }

    /// Multiplies by a single variable `x_i`.
    #[must_use]
    pub fn mul_var(&self, i: usize) -> Self {
        let mut exponents = self.exponents.clone();
        if exponents.len() <= i {
            exponents.resize(i + 1, 0);
        }
        exponents[i] = exponents[i].saturating_add(1);
        Self {
            exponents,
            degree: self.degree + 1,
        }
    }

    /// Divides this monomial by another, if divisible.
    ///
    /// Returns `None` if `other` does not divide `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !self.is_divisible_by(other) {
            return None;
        }
        let mut exponents: SmallVec<[u16; INLINE_VARS]> = self
            .exponents
            .iter()
            .enumerate()
            .map(|(i, &e)| e - other.exponent(i))
            .collect();
        Self::trim(&mut exponents);
        Some(Self {
            exponents,
            degree: self.degree - other.degree,
        })
    }

    /// Divides by a single variable `x_i`, if it divides this monomial.
    #[must_use]
    pub fn div_var(&self, i: usize) -> Option<Self> {
        if self.exponent(i) == 0 {
            return None;
        }
        let mut exponents = self.exponents.clone();
        exponents[i] -= 1;
        Self::trim(&mut exponents);
        Some(Self {
            exponents,
            degree: self.degree - 1,
        })
    }

    /// Checks if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        if other.degree > self.degree || other.exponents.len() > self.exponents.len() {
            return false;
        }
        other
            .exponents
            .iter()
            .zip(self.exponents.iter())
            .all(|(a, b)| a <= b)
    }

    /// Checks if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        other.is_divisible_by(self)
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let n = self.exponents.len().max(other.exponents.len());
        let exponents: SmallVec<[u16; INLINE_VARS]> = (0..n)
            .map(|i| self.exponent(i).max(other.exponent(i)))
            .collect();
        let degree = exponents.iter().map(|&e| u32::from(e)).sum();
        Self { exponents, degree }
    }

    /// Computes the greatest common divisor of two monomials.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let n = self.exponents.len().min(other.exponents.len());
        let mut exponents: SmallVec<[u16; INLINE_VARS]> = (0..n)
            .map(|i| self.exponent(i).min(other.exponent(i)))
            .collect();
        Self::trim(&mut exponents);
        let degree = exponents.iter().map(|&e| u32::from(e)).sum();
        Self { exponents, degree }
    }

    /// Checks if two monomials are coprime (GCD = 1).
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .zip(other.exponents.iter())
            .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// Compares using pure lexicographic ordering.
    #[must_use]
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        let n = self.exponents.len().max(other.exponents.len());
        for i in 0..n {
            match self.exponent(i).cmp(&other.exponent(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Compares by total degree, then lexicographically.
    #[must_use]
    pub fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.degree
            .cmp(&other.degree)
            .then_with(|| self.cmp_lex(other))
    }

    /// Compares using degree reverse lexicographic ordering.
    ///
    /// Ties in degree are broken at the last variable where the exponents
    /// differ: the monomial with the *smaller* exponent there is larger.
    #[must_use]
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        match self.degree.cmp(&other.degree) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let n = self.exponents.len().max(other.exponents.len());
        for i in (0..n).rev() {
            match other.exponent(i).cmp(&self.exponent(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let mut first = true;
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x{i}")?;
            } else {
                write!(f, "x{i}^{e}")?;
            }
        }
        Ok(())
    }
}

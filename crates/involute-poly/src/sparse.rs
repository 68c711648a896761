//! Sparse multivariate polynomials.
//!
//! A polynomial is a list of `(monomial, coefficient)` pairs sorted in
//! descending order under its monomial ordering, with no zero coefficients
//! and no repeated monomials. Equality and hashing only look at the terms,
//! so the zero produced by `Ring::zero()` equals `SparsePoly::zero(n, order)`.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use involute_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial.
#[derive(Clone, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Terms in descending order.
    terms: Vec<(Monomial, R)>,
    /// Number of variables of the ambient ring.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are sorted and like terms are combined.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        Self::monomial(Monomial::one(), c, num_vars, order)
    }

    /// Creates the single term `c * m`.
    #[must_use]
    pub fn monomial(m: Monomial, c: R, num_vars: usize, order: MonomialOrder) -> Self {
        let terms = if c.is_zero() { Vec::new() } else { vec![(m, c)] };
        Self {
            terms,
            num_vars,
            order,
        }
    }

    /// Creates a single variable `x_i`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::monomial(Monomial::var(i), R::one(), num_vars, order)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Consumes the polynomial and returns its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<(Monomial, R)> {
        self.terms
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term (monomial, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Returns the polynomial without its leading term.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            terms: self.terms.iter().skip(1).cloned().collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Returns the coefficient of `m` (zero if absent).
    #[must_use]
    pub fn coeff(&self, m: &Monomial) -> R {
        self.terms
            .binary_search_by(|(t, _)| self.order.compare(m, t))
            .map_or_else(|_| R::zero(), |i| self.terms[i].1.clone())
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> R {
        match self.terms.last() {
            Some((m, c)) if m.is_one() => c.clone(),
            _ => R::zero(),
        }
    }

    /// Returns true if the polynomial has no non-constant terms.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|(m, _)| m.is_one())
    }

    /// Computes the total degree; zero for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Returns true if all terms share the same total degree.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        match self.terms.first() {
            None => true,
            Some((lead, _)) => {
                let d = lead.total_degree();
                self.terms.iter().all(|(m, _)| m.total_degree() == d)
            }
        }
    }

    /// Re-sorts the terms under a different ordering.
    #[must_use]
    pub fn with_order(&self, order: MonomialOrder) -> Self {
        Self::new(self.terms.clone(), self.num_vars, order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let terms = self
            .terms
            .iter()
            .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();
        Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies by the term `c * m`.
    ///
    /// Monomial orders are compatible with multiplication, so the result
    /// stays sorted without a re-sort.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let terms = self
            .terms
            .iter()
            .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
            .filter(|(_, x)| !x.is_zero())
            .collect();
        Self {
            terms,
            num_vars: self.num_vars.max(m.exponents().len()),
            order: self.order,
        }
    }

    /// Multiplies by the variable `x_i`.
    #[must_use]
    pub fn mul_var(&self, i: usize) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.mul_var(i), c.clone()))
                .collect(),
            num_vars: self.num_vars.max(i + 1),
            order: self.order,
        }
    }

    /// Shared ambient ring of two operands.
    ///
    /// Polynomials built through `Ring::zero()`/`Ring::one()` carry no
    /// variables; they adopt the context of the other operand.
    fn context(&self, other: &Self) -> (usize, MonomialOrder) {
        let order = if self.num_vars == 0 {
            other.order
        } else {
            self.order
        };
        (self.num_vars.max(other.num_vars), order)
    }

    /// Sorts terms descending and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut combined: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match combined.last_mut() {
                Some((last, acc)) if *last == m => {
                    *acc = acc.clone() + c;
                }
                _ => combined.push((m, c)),
            }
        }
        combined.retain(|(_, c)| !c.is_zero());
        self.terms = combined;
    }

    /// Merges two sorted term lists, scaling the second by `sign`.
    fn merge(&self, other: &Self, negate: bool) -> Self {
        let (num_vars, order) = self.context(other);
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();
        let signed = |c: &R| if negate { -c.clone() } else { c.clone() };

        loop {
            match (lhs.peek(), rhs.peek()) {
                (Some((ma, ca)), Some((mb, cb))) => match order.compare(ma, mb) {
                    Ordering::Greater => {
                        terms.push((ma.clone(), ca.clone()));
                        lhs.next();
                    }
                    Ordering::Less => {
                        terms.push((mb.clone(), signed(cb)));
                        rhs.next();
                    }
                    Ordering::Equal => {
                        let c = ca.clone() + signed(cb);
                        if !c.is_zero() {
                            terms.push((ma.clone(), c));
                        }
                        lhs.next();
                        rhs.next();
                    }
                },
                (Some((ma, ca)), None) => {
                    terms.push((ma.clone(), ca.clone()));
                    lhs.next();
                }
                (None, Some((mb, cb))) => {
                    terms.push((mb.clone(), signed(cb)));
                    rhs.next();
                }
                (None, None) => break,
            }
        }

        Self {
            terms,
            num_vars,
            order,
        }
    }

    fn product(&self, other: &Self) -> Self {
        let (num_vars, order) = self.context(other);
        if self.is_zero() || other.is_zero() {
            return Self::zero(num_vars, order);
        }
        if other.terms.len() == 1 {
            let (m, c) = &other.terms[0];
            let mut p = self.mul_monomial(m, c);
            p.num_vars = num_vars;
            p.order = order;
            return p;
        }

        let mut acc: FxHashMap<Monomial, R> = FxHashMap::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let m = m1.mul(m2);
                let c = c1.clone() * c2.clone();
                acc.entry(m)
                    .and_modify(|x| *x = x.clone() + c.clone())
                    .or_insert(c);
            }
        }

        Self::new(acc.into_iter().collect(), num_vars, order)
    }
}

impl<F: Field> SparsePoly<F> {
    /// Divides by the leading coefficient.
    ///
    /// The zero polynomial is returned unchanged.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        match self.leading_coeff().and_then(Field::inv) {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }
}

impl<R: Ring> PartialEq for SparsePoly<R> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<R: Ring> Eq for SparsePoly<R> {}

impl<R: Ring> Hash for SparsePoly<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terms.hash(state);
    }
}

impl<R: Ring> Add<&SparsePoly<R>> for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn add(self, rhs: &SparsePoly<R>) -> SparsePoly<R> {
        self.merge(rhs, false)
    }
}

impl<R: Ring> Sub<&SparsePoly<R>> for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn sub(self, rhs: &SparsePoly<R>) -> SparsePoly<R> {
        self.merge(rhs, true)
    }
}

impl<R: Ring> Mul<&SparsePoly<R>> for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn mul(self, rhs: &SparsePoly<R>) -> SparsePoly<R> {
        self.product(rhs)
    }
}

impl<R: Ring> Neg for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn neg(self) -> SparsePoly<R> {
        SparsePoly {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }
}

impl<R: Ring> Add for SparsePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<R: Ring> Sub for SparsePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<R: Ring> Mul for SparsePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<R: Ring> Neg for SparsePoly<R> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<R: Ring> Ring for SparsePoly<R> {
    fn zero() -> Self {
        Self::zero(0, MonomialOrder::default())
    }

    fn one() -> Self {
        Self::one(0, MonomialOrder::default())
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [(m, c)] if m.is_one() && c.is_one())
    }

    fn unit_inverse(&self) -> Option<Self> {
        match self.terms.as_slice() {
            [(m, c)] if m.is_one() => c
                .unit_inverse()
                .map(|inv| Self::constant(inv, self.num_vars, self.order)),
            _ => None,
        }
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.scale(&R::one().mul_by_scalar(n))
    }
}

impl<R: Ring> std::fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if m.is_one() {
                write!(f, "{c}")?;
            } else if c.is_one() {
                write!(f, "{m}")?;
            } else if (-c.clone()).is_one() {
                write!(f, "-{m}")?;
            } else {
                write!(f, "{c}*{m}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use involute_rings::Q;

    fn x(i: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, 3, MonomialOrder::Grevlex)
    }

    fn c(n: i64) -> SparsePoly<Q> {
        SparsePoly::constant(Q::from_i64(n), 3, MonomialOrder::Grevlex)
    }

    #[test]
    fn test_sparse_basic() {
        let sum = &x(0) + &x(1);
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.leading_monomial(), Some(&Monomial::var(0)));
        assert!((&sum - &sum).is_zero());
    }

    #[test]
    fn test_sparse_mul() {
        // (x0 + 1)^2 = x0^2 + 2x0 + 1
        let xp1 = &x(0) + &c(1);
        let sq = &xp1 * &xp1;
        assert_eq!(sq.len(), 3);
        assert_eq!(sq.coeff(&Monomial::var(0)), Q::from_i64(2));
        assert_eq!(sq.constant_term(), Q::from_i64(1));
        assert!(!sq.is_homogeneous());
    }

    #[test]
    fn test_leading_term_grevlex() {
        // x0*x1 + x1^2: the leading monomial is x0*x1
        let p = &(&x(0) * &x(1)) + &(&x(1) * &x(1));
        assert_eq!(p.leading_monomial(), Some(&Monomial::new(&[1, 1])));
        assert!(p.is_homogeneous());
        assert_eq!(p.tail(), &x(1) * &x(1));
    }

    #[test]
    fn test_ring_zero_adopts_context() {
        let z = <SparsePoly<Q> as Ring>::zero();
        assert_eq!(z, SparsePoly::zero(3, MonomialOrder::Grevlex));
        let p = z + x(2);
        assert_eq!(p.num_vars(), 3);
        assert_eq!(p, x(2));
    }

    #[test]
    fn test_units() {
        assert!(c(5).is_unit());
        assert!(!x(0).is_unit());
        assert_eq!(c(2).unit_inverse(), Some(SparsePoly::constant(Q::new(1, 2), 3, MonomialOrder::Grevlex)));
        assert!(<SparsePoly<Q> as Ring>::one().is_one());
    }

    #[test]
    fn test_make_monic() {
        let p = &c(3) * &(&x(0) + &x(1));
        let m = p.make_monic();
        assert_eq!(m, &x(0) + &x(1));
    }

    #[test]
    fn test_display() {
        let p = &(&x(0) * &x(0)) - &c(2);
        assert_eq!(p.to_string(), "x0^2 + -2");
    }
}

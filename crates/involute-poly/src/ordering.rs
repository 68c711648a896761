//! Monomial orderings.
//!
//! The resolution engine itself only runs under degree reverse lex, but
//! Gröbner bases and involutive completions work for any of these orders.

use std::cmp::Ordering;

use crate::monomial::Monomial;

/// A monomial ordering with `x0 > x1 > ... > x_{n-1}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Degree reverse lexicographic order.
    ///
    /// First compares total degree, then looks at the last variable where
    /// the exponents differ; the smaller exponent wins.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.cmp_lex(b),
            MonomialOrder::Grlex => a.cmp_grlex(b),
            MonomialOrder::Grevlex => a.cmp_grevlex(b),
        }
    }

    /// Returns true for orders that compare total degree first.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self, MonomialOrder::Grlex | MonomialOrder::Grevlex)
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "degrevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Involutive divisions on monomials.
//!
//! An involutive division assigns every element `u` of a finite monomial
//! set a subset of *multiplicative* variables. The involutive cone of `u`
//! is `u` times all monomials in its multiplicative variables; `u`
//! involutively divides `t` when `t` lies in that cone.
//!
//! Conventions: `x0 > x1 > ... > x_{n-1}`, and the class of `u` is the
//! largest index of a variable dividing it (0 for the monomial 1).

use involute_poly::Monomial;

/// The involutive divisions supported by the mill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvolutiveDivision {
    /// Janet division; depends on the whole monomial set.
    Janet,
    /// Pommaret division; multiplicative variables are `x_cls, ..., x_{n-1}`.
    Pommaret,
}

impl InvolutiveDivision {
    /// Multiplicative variables of `u` as a member of `set`.
    #[must_use]
    pub fn multiplicative_vars(&self, u: &Monomial, set: &[Monomial], num_vars: usize) -> Vec<bool> {
        match self {
            InvolutiveDivision::Janet => janet_multiplicative(u, set, num_vars),
            InvolutiveDivision::Pommaret => pommaret_multiplicative(u, num_vars),
        }
    }

    /// Returns a short name for the division.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            InvolutiveDivision::Janet => "janet",
            InvolutiveDivision::Pommaret => "pommaret",
        }
    }
}

impl std::fmt::Display for InvolutiveDivision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Class of a monomial: the largest index with a nonzero exponent.
#[must_use]
pub fn class(u: &Monomial) -> usize {
    u.max_var().unwrap_or(0)
}

/// Pommaret multiplicative variables: exactly the indices `>= class(u)`.
#[must_use]
pub fn pommaret_multiplicative(u: &Monomial, num_vars: usize) -> Vec<bool> {
    let cls = class(u);
    (0..num_vars).map(|i| i >= cls).collect()
}

/// Janet multiplicative variables of `u` within `set`.
///
/// Variables are scanned from `x_{n-1}` down to `x0`. The variable `x_i`
/// is multiplicative when `deg_i(u)` is maximal among the elements of `set`
/// that agree with `u` in every variable after `x_i`.
#[must_use]
pub fn janet_multiplicative(u: &Monomial, set: &[Monomial], num_vars: usize) -> Vec<bool> {
    (0..num_vars)
        .map(|i| {
            let max_in_group = set
                .iter()
                .filter(|v| (i + 1..num_vars).all(|j| v.exponent(j) == u.exponent(j)))
                .map(|v| v.exponent(i))
                .max()
                .unwrap_or(0);
            u.exponent(i) >= max_in_group
        })
        .collect()
}

/// Returns true if `divisor` divides `target` and the quotient only
/// involves variables marked in `multiplicative`.
#[must_use]
pub fn involutively_divides(divisor: &Monomial, multiplicative: &[bool], target: &Monomial) -> bool {
    target.div(divisor).is_some_and(|q| {
        q.support()
            .all(|i| multiplicative.get(i).copied().unwrap_or(false))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class() {
        assert_eq!(class(&Monomial::one()), 0);
        assert_eq!(class(&Monomial::new(&[2, 1])), 1);
        assert_eq!(class(&Monomial::new(&[0, 0, 3])), 2);
    }

    #[test]
    fn test_pommaret_multiplicative() {
        let u = Monomial::new(&[1, 1]);
        assert_eq!(pommaret_multiplicative(&u, 3), vec![false, true, true]);
        assert_eq!(pommaret_multiplicative(&Monomial::one(), 2), vec![true, true]);
    }

    #[test]
    fn test_janet_multiplicative() {
        // {x0^2, x1^2, x0*x1^2} in two variables
        let set = vec![
            Monomial::new(&[2, 0]),
            Monomial::new(&[0, 2]),
            Monomial::new(&[1, 2]),
        ];
        // x1-degree 0 group {x0^2}: x0 multiplicative; x1 not (max is 2)
        assert_eq!(janet_multiplicative(&set[0], &set, 2), vec![true, false]);
        // x1-degree 2 group {x1^2, x0*x1^2}: x0 maximal only for x0*x1^2
        assert_eq!(janet_multiplicative(&set[1], &set, 2), vec![false, true]);
        assert_eq!(janet_multiplicative(&set[2], &set, 2), vec![true, true]);
    }

    #[test]
    fn test_involutively_divides() {
        let u = Monomial::new(&[1, 1]);
        let mult = pommaret_multiplicative(&u, 2);
        assert!(involutively_divides(&u, &mult, &Monomial::new(&[1, 3])));
        assert!(!involutively_divides(&u, &mult, &Monomial::new(&[2, 1])));
        assert!(!involutively_divides(&u, &mult, &Monomial::new(&[0, 2])));
    }

    #[test]
    fn test_division_dispatch() {
        let set = vec![Monomial::var(0), Monomial::var(1)];
        let p = InvolutiveDivision::Pommaret.multiplicative_vars(&set[1], &set, 2);
        let j = InvolutiveDivision::Janet.multiplicative_vars(&set[1], &set, 2);
        assert_eq!(p, vec![false, true]);
        // x1 is alone in its x1-degree group, so x0 is Janet-multiplicative for it
        assert_eq!(j, vec![true, true]);
        assert_eq!(InvolutiveDivision::Janet.to_string(), "janet");
    }
}

//! Involutive completion of monomial ideals.
//!
//! Starting from the minimal generators of a monomial ideal `J`, the
//! completion repeatedly adds the smallest non-multiplicative prolongation
//! `x_i * u` that no involutive cone covers. When no such prolongation is
//! left the set is locally involutive, and for the continuous divisions
//! used here that means the cones partition `J`.
//!
//! A finite Pommaret basis exists exactly when `J` is quasi-stable, which
//! [`is_quasi_stable`] tests directly on the minimal generators.

use rustc_hash::FxHashSet;
use tracing::trace;

use involute_poly::{Monomial, MonomialOrder};

use crate::division::{class, involutively_divides, pommaret_multiplicative, InvolutiveDivision};
use crate::error::MillError;

/// Minimal generators of the monomial ideal spanned by `monomials`.
///
/// Duplicates and multiples of other elements are removed. The result is
/// sorted ascending under `order`.
#[must_use]
pub fn minimal_generators(monomials: &[Monomial], order: MonomialOrder) -> Vec<Monomial> {
    let distinct: FxHashSet<&Monomial> = monomials.iter().collect();
    let mut sorted: Vec<Monomial> = distinct.into_iter().cloned().collect();
    sorted.sort_by(|a, b| order.compare(a, b));

    let mut minimal: Vec<Monomial> = Vec::with_capacity(sorted.len());
    for m in sorted {
        if !minimal.iter().any(|g| m.is_divisible_by(g)) {
            minimal.push(m);
        }
    }
    minimal
}

/// Membership in the monomial ideal generated by `generators`.
#[must_use]
pub fn ideal_contains(generators: &[Monomial], t: &Monomial) -> bool {
    generators.iter().any(|g| t.is_divisible_by(g))
}

/// Tests whether the monomial ideal generated by `generators` is quasi-stable.
///
/// The condition checked: for every minimal generator `t` of class `c` and
/// every `j < c` some power `x_j^s * t / x_c^{deg_c t}` lies in the ideal.
#[must_use]
pub fn is_quasi_stable(generators: &[Monomial], order: MonomialOrder) -> bool {
    let minimal = minimal_generators(generators, order);
    minimal.iter().all(|t| {
        let Some(c) = t.max_var() else {
            return true;
        };
        let mut stripped = t.exponents().to_vec();
        stripped[c] = 0;
        let stripped = Monomial::new(&stripped);

        (0..c).all(|j| {
            // x_j^s * stripped is in J iff some generator divides it away from x_j
            minimal.iter().any(|g| {
                (0..g.exponents().len())
                    .filter(|&k| k != j)
                    .all(|k| g.exponent(k) <= stripped.exponent(k))
            })
        })
    })
}

/// Multiplicative variables of every element of `basis`.
#[must_use]
pub fn multiplicative_table(
    basis: &[Monomial],
    division: InvolutiveDivision,
    num_vars: usize,
) -> Vec<Vec<bool>> {
    basis
        .iter()
        .map(|u| division.multiplicative_vars(u, basis, num_vars))
        .collect()
}

/// Returns the index of the element whose involutive cone contains `t`.
#[must_use]
pub fn involutive_divisor(basis: &[Monomial], mults: &[Vec<bool>], t: &Monomial) -> Option<usize> {
    basis
        .iter()
        .zip(mults)
        .position(|(u, m)| involutively_divides(u, m, t))
}

/// Non-multiplicative prolongations of `basis` that no cone covers.
///
/// A prolongation reachable from several elements is reported once.
fn uncovered_prolongations(
    basis: &[Monomial],
    mults: &[Vec<bool>],
    num_vars: usize,
) -> Vec<Monomial> {
    let mut seen: FxHashSet<Monomial> = FxHashSet::default();
    basis
        .iter()
        .zip(mults)
        .flat_map(|(u, m)| {
            (0..num_vars)
                .filter(move |&i| !m[i])
                .map(move |i| u.mul_var(i))
        })
        .filter(|t| seen.insert(t.clone()))
        .filter(|t| involutive_divisor(basis, mults, t).is_none())
        .collect()
}

/// Returns true if every non-multiplicative prolongation is involutively covered.
#[must_use]
pub fn is_locally_involutive(
    basis: &[Monomial],
    division: InvolutiveDivision,
    num_vars: usize,
) -> bool {
    let mults = multiplicative_table(basis, division, num_vars);
    uncovered_prolongations(basis, &mults, num_vars).is_empty()
}

/// Completes `generators` to an involutive basis of the ideal they span.
///
/// # Errors
///
/// Returns [`MillError::CompletionDegreeExceeded`] if a prolongation of
/// degree above `max_degree` would have to be added. For the Pommaret
/// division this is how a non quasi-stable ideal shows up.
pub fn involutive_completion(
    generators: &[Monomial],
    division: InvolutiveDivision,
    num_vars: usize,
    order: MonomialOrder,
    max_degree: u32,
) -> Result<Vec<Monomial>, MillError> {
    let mut basis = minimal_generators(generators, order);

    loop {
        let mults = multiplicative_table(&basis, division, num_vars);
        let Some(next) = uncovered_prolongations(&basis, &mults, num_vars)
            .into_iter()
            .min_by(|a, b| order.compare(a, b))
        else {
            break;
        };

        if next.total_degree() > max_degree {
            return Err(MillError::CompletionDegreeExceeded { limit: max_degree });
        }
        trace!(%division, prolongation = %next, "adding prolongation");
        basis.push(next);
    }

    if division == InvolutiveDivision::Pommaret {
        pommaret_autoreduce(&mut basis, num_vars);
    }

    Ok(basis)
}

/// Drops elements lying in the Pommaret cone of another element.
fn pommaret_autoreduce(basis: &mut Vec<Monomial>, num_vars: usize) {
    let snapshot = basis.clone();
    basis.retain(|u| {
        !snapshot.iter().any(|v| {
            v != u && class(v) <= class(u) && involutively_divides(v, &pommaret_multiplicative(v, num_vars), u)
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn m(e: &[u16]) -> Monomial {
        Monomial::new(e)
    }

    #[test]
    fn test_minimal_generators() {
        let gens = vec![m(&[2, 1]), m(&[1, 0]), m(&[0, 2]), m(&[1, 0])];
        assert_eq!(minimal_generators(&gens, ORDER), vec![m(&[1, 0]), m(&[0, 2])]);
    }

    #[test]
    fn test_shared_prolongation_is_reported_once() {
        // x2*(x1x3) = x1*(x2x3), and neither cone contains it
        let basis = vec![m(&[0, 1, 0, 1]), m(&[0, 0, 1, 1])];
        let mults = multiplicative_table(&basis, InvolutiveDivision::Pommaret, 4);
        let uncovered = uncovered_prolongations(&basis, &mults, 4);
        let shared = m(&[0, 1, 1, 1]);
        assert_eq!(uncovered.iter().filter(|t| **t == shared).count(), 1);
        // x0, x1, x2 times each element, with one overlap
        assert_eq!(uncovered.len(), 5);
    }

    #[test]
    fn test_quasi_stability() {
        assert!(is_quasi_stable(&[m(&[1, 0]), m(&[0, 1])], ORDER));
        assert!(is_quasi_stable(&[m(&[2, 0]), m(&[0, 2])], ORDER));
        assert!(is_quasi_stable(&[m(&[2, 0]), m(&[1, 1]), m(&[0, 3])], ORDER));
        assert!(is_quasi_stable(&[m(&[])], ORDER));
        // x1 alone: no power of x0 lands in (x1)
        assert!(!is_quasi_stable(&[m(&[0, 1])], ORDER));
        assert!(!is_quasi_stable(&[m(&[1, 1])], ORDER));
    }

    #[test]
    fn test_pommaret_completion_adds_mixed_term() {
        let basis = involutive_completion(
            &[m(&[2, 0]), m(&[0, 2])],
            InvolutiveDivision::Pommaret,
            2,
            ORDER,
            64,
        )
        .unwrap();
        assert_eq!(basis, vec![m(&[0, 2]), m(&[2, 0]), m(&[1, 2])]);
        assert!(is_locally_involutive(&basis, InvolutiveDivision::Pommaret, 2));
    }

    #[test]
    fn test_pommaret_completion_of_stable_ideal_is_trivial() {
        let gens = [m(&[2, 0]), m(&[1, 1]), m(&[0, 2])];
        let basis =
            involutive_completion(&gens, InvolutiveDivision::Pommaret, 2, ORDER, 64).unwrap();
        assert_eq!(basis.len(), 3);
    }

    #[test]
    fn test_pommaret_completion_diverges_without_quasi_stability() {
        let err = involutive_completion(&[m(&[0, 1])], InvolutiveDivision::Pommaret, 2, ORDER, 8)
            .unwrap_err();
        assert_eq!(err, MillError::CompletionDegreeExceeded { limit: 8 });
    }

    #[test]
    fn test_janet_completion_always_finishes() {
        let basis =
            involutive_completion(&[m(&[0, 1])], InvolutiveDivision::Janet, 2, ORDER, 8).unwrap();
        assert_eq!(basis, vec![m(&[0, 1])]);

        let basis =
            involutive_completion(&[m(&[1, 1])], InvolutiveDivision::Janet, 2, ORDER, 8).unwrap();
        assert!(is_locally_involutive(&basis, InvolutiveDivision::Janet, 2));
    }

    #[test]
    fn test_involutive_divisor_is_unique() {
        let basis = vec![m(&[2, 0]), m(&[0, 2]), m(&[1, 2])];
        let mults = multiplicative_table(&basis, InvolutiveDivision::Pommaret, 2);
        assert_eq!(involutive_divisor(&basis, &mults, &m(&[3, 2])), Some(0));
        assert_eq!(involutive_divisor(&basis, &mults, &m(&[1, 4])), Some(2));
        assert_eq!(involutive_divisor(&basis, &mults, &m(&[0, 5])), Some(1));
        assert_eq!(involutive_divisor(&basis, &mults, &m(&[1, 1])), None);
    }
}

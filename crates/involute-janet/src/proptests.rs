//! Property-based tests for completions and standard representations.

use proptest::prelude::*;

use crate::completion::{involutive_completion, is_locally_involutive, multiplicative_table};
use crate::division::{involutively_divides, InvolutiveDivision};
use crate::{InvolutiveMill, MillConfig};
use involute_poly::{Monomial, MonomialOrder, SparsePoly};
use involute_rings::{Ring, Q};

const NUM_VARS: usize = 3;
const ORDER: MonomialOrder = MonomialOrder::Grevlex;

fn monomial(max_exp: u16) -> impl Strategy<Value = Monomial> {
    proptest::collection::vec(0..=max_exp, NUM_VARS)
        .prop_map(|e| Monomial::new(&e))
        .prop_filter("non-constant", |m| !m.is_one())
}

fn homogeneous_poly(degree: u16) -> impl Strategy<Value = SparsePoly<Q>> {
    proptest::collection::vec((0..=degree, 0..=degree, -3i64..=3), 1..4).prop_map(move |terms| {
        let terms = terms
            .into_iter()
            .filter(|(a, b, _)| a + b <= degree)
            .map(|(a, b, c)| (Monomial::new(&[a, b, degree - a - b]), Q::from_i64(c)))
            .collect();
        SparsePoly::new(terms, NUM_VARS, ORDER)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn janet_completion_is_involutive(gens in proptest::collection::vec(monomial(3), 1..4)) {
        let basis = involutive_completion(&gens, InvolutiveDivision::Janet, NUM_VARS, ORDER, 32).unwrap();
        prop_assert!(is_locally_involutive(&basis, InvolutiveDivision::Janet, NUM_VARS));
        for g in &gens {
            prop_assert!(basis.iter().any(|b| b.divides(g)));
        }
    }

    #[test]
    fn involutive_cones_are_disjoint(gens in proptest::collection::vec(monomial(2), 1..4), probe in monomial(4)) {
        let basis = involutive_completion(&gens, InvolutiveDivision::Janet, NUM_VARS, ORDER, 32).unwrap();
        let mults = multiplicative_table(&basis, InvolutiveDivision::Janet, NUM_VARS);
        let hits = basis
            .iter()
            .zip(&mults)
            .filter(|(u, m)| involutively_divides(u, m, &probe))
            .count();
        let in_ideal = basis.iter().any(|b| b.divides(&probe));
        prop_assert_eq!(hits, usize::from(in_ideal));
    }

    #[test]
    fn standard_representation_recombines(
        f in homogeneous_poly(2),
        g in homogeneous_poly(2),
        a in homogeneous_poly(1),
        b in homogeneous_poly(1),
    ) {
        prop_assume!(!f.is_zero() || !g.is_zero());
        let mill = InvolutiveMill::new(vec![f.clone(), g.clone()], MillConfig::default()).unwrap();
        let element = &(&a * &f) + &(&b * &g);
        let rep = mill.standard_representation(&element).unwrap();
        prop_assert_eq!(rep.len(), mill.len());
        let recombined = rep
            .iter()
            .zip(mill.basis())
            .fold(<SparsePoly<Q> as Ring>::zero(), |acc, (p, h)| &acc + &(p * h));
        prop_assert_eq!(recombined, element);
    }
}

//! Property-based tests for monomials and sparse polynomials.

use proptest::prelude::*;
use std::cmp::Ordering;

use crate::{Monomial, MonomialOrder, SparsePoly};
use involute_rings::Q;

const NUM_VARS: usize = 3;

fn small_monomial() -> impl Strategy<Value = Monomial> {
    proptest::collection::vec(0u16..4, NUM_VARS).prop_map(|e| Monomial::new(&e))
}

fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
    proptest::collection::vec((small_monomial(), -20i64..20i64), 0..6).prop_map(|terms| {
        let terms = terms
            .into_iter()
            .map(|(m, c)| (m, Q::from_i64(c)))
            .collect();
        SparsePoly::new(terms, NUM_VARS, MonomialOrder::Grevlex)
    })
}

proptest! {
    #[test]
    fn grevlex_is_multiplicative(a in small_monomial(), b in small_monomial(), t in small_monomial()) {
        prop_assert_eq!(a.cmp_grevlex(&b), a.mul(&t).cmp_grevlex(&b.mul(&t)));
    }

    #[test]
    fn grevlex_total_and_consistent_with_eq(a in small_monomial(), b in small_monomial()) {
        prop_assert_eq!(a.cmp_grevlex(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp_grevlex(&b), b.cmp_grevlex(&a).reverse());
    }

    #[test]
    fn lcm_is_divisible_by_both(a in small_monomial(), b in small_monomial()) {
        let l = a.lcm(&b);
        prop_assert!(a.divides(&l));
        prop_assert!(b.divides(&l));
        prop_assert_eq!(l.div(&a).unwrap().mul(&a), l);
    }

    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        let left = &a * &(&b + &c);
        let right = &(&a * &b) + &(&a * &c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn poly_sub_self_is_zero(a in small_poly()) {
        prop_assert!((&a - &a).is_zero());
    }

    #[test]
    fn poly_terms_stay_sorted(a in small_poly(), b in small_poly()) {
        let p = &a * &b;
        for w in p.terms().windows(2) {
            prop_assert_eq!(w[0].0.cmp_grevlex(&w[1].0), Ordering::Greater);
        }
    }

    #[test]
    fn mul_monomial_matches_mul(a in small_poly(), m in small_monomial()) {
        let term = SparsePoly::monomial(m.clone(), Q::from_i64(3), NUM_VARS, MonomialOrder::Grevlex);
        prop_assert_eq!(a.mul_monomial(&m, &Q::from_i64(3)), &a * &term);
    }
}

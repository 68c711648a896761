//! Property-based tests for the coefficient rings.

use proptest::prelude::*;

use crate::{Field, FiniteField, Ring, Q};

type F101 = FiniteField<101>;

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

proptest! {
    #[test]
    fn rational_distributive(a in small_int(), b in small_int(), c in non_zero_int()) {
        let a = Q::from_i64(a);
        let b = Q::from_i64(b);
        let c = Q::new(1, c);
        prop_assert_eq!(
            c.clone() * (a.clone() + b.clone()),
            c.clone() * a + c * b
        );
    }

    #[test]
    fn rational_inverse(n in non_zero_int(), d in non_zero_int()) {
        let q = Q::new(n, d);
        let inv = q.inv().unwrap();
        prop_assert!((q * inv).is_one());
    }

    #[test]
    fn rational_field_div_roundtrip(a in small_int(), b in non_zero_int()) {
        let a = Q::from_i64(a);
        let b = Q::from_i64(b);
        prop_assert_eq!(a.field_div(&b) * b, a);
    }

    #[test]
    fn finite_field_additive_inverse(a in small_int()) {
        let x = F101::from_signed(a);
        prop_assert!((x + (-x)).is_zero());
    }

    #[test]
    fn finite_field_inverse(a in 1u64..101) {
        let x = F101::new(a);
        prop_assert!((x * x.inv().unwrap()).is_one());
    }

    #[test]
    fn finite_field_scalar_matches_embedding(a in small_int(), n in small_int()) {
        let x = F101::from_signed(a);
        prop_assert_eq!(x.mul_by_scalar(n), x * F101::from_signed(n));
    }
}

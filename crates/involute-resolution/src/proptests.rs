//! Property-based tests over random Artinian ideals.

use proptest::prelude::*;

use involute_janet::InvolutiveMill;
use involute_poly::{Monomial, MonomialOrder, SparsePoly};
use involute_rings::{Ring, GF32003, Q};

use crate::{
    betti_diagram, minimal_resolution, pseudo_betti_diagram, resolution, BasisEntry,
    MorseElement, MorsePaths, ResolutionMinimization, VarMask,
};

const NUM_VARS: usize = 3;
const ORDER: MonomialOrder = MonomialOrder::Grevlex;

// Pure powers of every variable make the ideal zero-dimensional, hence
// quasi-stable, so the mill always ends up with a Pommaret basis.
fn artinian_ideal() -> impl Strategy<Value = Vec<SparsePoly<Q>>> {
    proptest::collection::vec(proptest::collection::vec(0u16..=2, NUM_VARS), 0..4).prop_map(
        |extra| {
            let mut gens: Vec<SparsePoly<Q>> = (0..NUM_VARS)
                .map(|i| {
                    SparsePoly::monomial(Monomial::var_pow(i, 3), Q::one(), NUM_VARS, ORDER)
                })
                .collect();
            gens.extend(
                extra
                    .into_iter()
                    .map(|e| Monomial::new(&e))
                    .filter(|m| !m.is_one())
                    .map(|m| SparsePoly::monomial(m, Q::one(), NUM_VARS, ORDER)),
            );
            gens
        },
    )
}

// A zero-dimensional ideal stays zero-dimensional under a change of
// coordinates, and so does its leading ideal.
fn generic_artinian_ideal() -> impl Strategy<Value = (usize, Vec<SparsePoly<GF32003>>)> {
    (3usize..=4)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec(proptest::collection::vec(0u16..=1, n), 0..3),
                proptest::collection::vec(-3i64..=3, n * n),
            )
        })
        .prop_map(|(n, extra, coeffs)| {
            // x_i -> x_i + sum_{j > i} c_ij x_j is unitriangular
            let images: Vec<SparsePoly<GF32003>> = (0..n)
                .map(|i| {
                    let terms = std::iter::once((Monomial::var(i), GF32003::one()))
                        .chain(((i + 1)..n).map(|j| {
                            (Monomial::var(j), GF32003::from_signed(coeffs[i * n + j]))
                        }))
                        .collect();
                    SparsePoly::new(terms, n, ORDER)
                })
                .collect();
            let substitute = |e: &[u16]| {
                let mut p = SparsePoly::one(n, ORDER);
                for (i, &k) in e.iter().enumerate() {
                    for _ in 0..k {
                        p = &p * &images[i];
                    }
                }
                p
            };

            let mut gens: Vec<SparsePoly<GF32003>> = (0..n)
                .map(|i| {
                    let mut e = vec![0u16; n];
                    e[i] = 2;
                    substitute(&e[..])
                })
                .collect();
            gens.extend(
                extra
                    .iter()
                    .filter(|e| e.iter().any(|&k| k > 0))
                    .map(|e| substitute(e.as_slice())),
            );
            (n, gens)
        })
}

fn basis_entries() -> Vec<BasisEntry<Q>> {
    [[2u16, 0, 0], [1, 1, 0], [0, 1, 1]]
        .iter()
        .enumerate()
        .map(|(position, e)| {
            let lpp = Monomial::new(e);
            BasisEntry {
                element: SparsePoly::monomial(lpp.clone(), Q::one(), NUM_VARS, ORDER),
                non_mult: VarMask::from_indices(0..lpp.max_var().unwrap_or(0), NUM_VARS),
                lpp,
                position,
            }
        })
        .collect()
}

fn morse_element() -> impl Strategy<Value = MorseElement> {
    (
        proptest::collection::vec(any::<bool>(), NUM_VARS),
        proptest::collection::vec(0u16..=2, NUM_VARS),
        0usize..3,
    )
        .prop_map(|(wedge, right, h)| {
            MorseElement::new(
                VarMask::from_bools(&wedge),
                Monomial::new(&right),
                &basis_entries()[h],
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn morse_order_is_total(a in morse_element(), b in morse_element(), c in morse_element()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn king_faces_precede_their_queen(e in morse_element()) {
        prop_assume!(e.is_reducible());
        let a = e.max_type_one().unwrap();
        let mut left = e.clone();
        prop_assert!(left.divide_right_factor_by(a));
        prop_assert!(left < e);
    }

    #[test]
    fn paths_accumulate(
        target in morse_element(),
        a in -5i64..=5,
        b in -5i64..=5,
    ) {
        let mut paths = MorsePaths::new();
        paths.add_path(target.clone(), Q::from_i64(a));
        paths.add_path(target.clone(), Q::from_i64(b));
        prop_assert_eq!(paths.get_path(&target), Q::from_i64(a + b));
        prop_assert_eq!(paths.is_empty(), a + b == 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn morse_resolution_is_a_complex(gens in artinian_ideal()) {
        let mill = InvolutiveMill::from_generators(gens).unwrap();
        prop_assume!(mill.is_pommaret_basis());
        let maps = resolution(&mill).unwrap();
        for pair in maps.windows(2) {
            prop_assert!(pair[0].mm(&pair[1]).is_zero());
        }
    }

    #[test]
    fn betti_numbers_are_bounded_by_pseudo_betti(gens in artinian_ideal()) {
        let mill = InvolutiveMill::from_generators(gens).unwrap();
        prop_assume!(mill.is_pommaret_basis());
        let betti = betti_diagram(&mill).unwrap();
        let pseudo = pseudo_betti_diagram(&mill).unwrap();
        prop_assert!(betti.is_bounded_by(&pseudo));
        prop_assert_eq!(betti.get(0, 0), 1);
        // P/I of an Artinian ideal has projective dimension n
        prop_assert_eq!(betti.projective_dimension(), NUM_VARS);
    }

    #[test]
    fn minimal_resolution_matches_betti_totals(gens in artinian_ideal()) {
        let mill = InvolutiveMill::from_generators(gens).unwrap();
        prop_assume!(mill.is_pommaret_basis());
        let totals = betti_diagram(&mill).unwrap().totals();
        let maps = minimal_resolution(&mill).unwrap();
        prop_assert_eq!(maps.len() + 1, totals.len());
        for (i, m) in maps.iter().enumerate() {
            prop_assert_eq!(m.num_cols(), totals[i + 1]);
            prop_assert!(m.entries().all(|(_, _, p)| !p.is_unit()));
        }
        for pair in maps.windows(2) {
            prop_assert!(pair[0].mm(&pair[1]).is_zero());
        }

        let mut again = ResolutionMinimization::new(maps.clone());
        prop_assert_eq!(again.minimize(), 0);
        prop_assert_eq!(again.into_matrices(), maps);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn resolutions_survive_a_change_of_coordinates((n, gens) in generic_artinian_ideal()) {
        let mill = InvolutiveMill::from_generators(gens).unwrap();
        prop_assume!(mill.is_pommaret_basis());

        for pair in resolution(&mill).unwrap().windows(2) {
            prop_assert!(pair[0].mm(&pair[1]).is_zero());
        }

        let betti = betti_diagram(&mill).unwrap();
        let pseudo = pseudo_betti_diagram(&mill).unwrap();
        prop_assert!(betti.is_bounded_by(&pseudo));
        prop_assert_eq!(betti.get(0, 0), 1);
        prop_assert_eq!(betti.projective_dimension(), n);

        let totals = betti.totals();
        let maps = minimal_resolution(&mill).unwrap();
        prop_assert_eq!(maps.len() + 1, totals.len());
        for (i, m) in maps.iter().enumerate() {
            prop_assert_eq!(m.num_cols(), totals[i + 1]);
        }
        for pair in maps.windows(2) {
            prop_assert!(pair[0].mm(&pair[1]).is_zero());
        }
    }
}

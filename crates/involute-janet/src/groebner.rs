//! Buchberger's algorithm with batched, parallel S-polynomial reduction.
//!
//! Pairs are selected by the normal strategy: every round takes all pending
//! pairs whose lcm has minimal total degree, builds and reduces their
//! S-polynomials on the rayon pool, then inserts the survivors one at a
//! time so that later survivors are reduced against earlier ones.

use rayon::prelude::*;
use tracing::{debug, trace};

use involute_poly::{Monomial, MonomialOrder, SparsePoly};
use involute_rings::traits::Field;

/// Configuration for [`Buchberger`].
#[derive(Clone, Debug)]
pub struct GroebnerConfig {
    /// Skip pairs whose leading monomials are coprime.
    pub use_product_criterion: bool,
    /// Maximum number of pairs reduced per round (0 = no limit).
    pub batch_size: usize,
}

impl Default for GroebnerConfig {
    fn default() -> Self {
        Self {
            use_product_criterion: true,
            batch_size: 0,
        }
    }
}

/// A pending S-pair.
#[derive(Clone, Debug)]
struct CriticalPair {
    i: usize,
    j: usize,
    lcm: Monomial,
}

/// Buchberger's algorithm over a field.
pub struct Buchberger<F: Field> {
    /// Current basis, all monic.
    basis: Vec<SparsePoly<F>>,
    /// Pending pairs.
    pairs: Vec<CriticalPair>,
    config: GroebnerConfig,
    num_vars: usize,
    order: MonomialOrder,
}

impl<F: Field + Send + Sync> Buchberger<F> {
    /// Creates a new instance from generators.
    ///
    /// Zero generators are dropped; the rest are made monic. All generators
    /// are re-sorted under `order`.
    #[must_use]
    pub fn new(
        generators: &[SparsePoly<F>],
        num_vars: usize,
        order: MonomialOrder,
        config: GroebnerConfig,
    ) -> Self {
        let mut this = Self {
            basis: Vec::new(),
            pairs: Vec::new(),
            config,
            num_vars,
            order,
        };
        for g in generators.iter().filter(|g| !g.is_zero()) {
            let g = if g.order() == order {
                g.make_monic()
            } else {
                g.with_order(order).make_monic()
            };
            this.add_to_basis(g);
        }
        this
    }

    /// Runs the algorithm to completion and returns a (non-reduced) Gröbner basis.
    #[must_use]
    pub fn compute(mut self) -> Vec<SparsePoly<F>> {
        while !self.pairs.is_empty() {
            self.step();
        }
        self.basis
    }

    fn step(&mut self) {
        let min_degree = self
            .pairs
            .iter()
            .map(|p| p.lcm.total_degree())
            .min()
            .unwrap_or(0);

        let (mut selected, rest): (Vec<_>, Vec<_>) = self
            .pairs
            .drain(..)
            .partition(|p| p.lcm.total_degree() == min_degree);
        self.pairs = rest;

        if self.config.batch_size > 0 && selected.len() > self.config.batch_size {
            self.pairs.extend(selected.split_off(self.config.batch_size));
        }

        trace!(
            degree = min_degree,
            pairs = selected.len(),
            "reducing S-polynomials"
        );

        for poly in self.reduce_spolys(&selected) {
            let poly = normal_form(&poly, &self.basis);
            if !poly.is_zero() {
                self.add_to_basis(poly.make_monic());
            }
        }
    }

    fn reduce_spolys(&self, pairs: &[CriticalPair]) -> Vec<SparsePoly<F>> {
        pairs
            .par_iter()
            .filter_map(|pair| self.compute_spoly(pair))
            .map(|s| normal_form(&s, &self.basis))
            .filter(|p| !p.is_zero())
            .collect()
    }

    /// S(f, g) = (lcm / lm f) * f - (lcm / lm g) * g for monic f, g.
    fn compute_spoly(&self, pair: &CriticalPair) -> Option<SparsePoly<F>> {
        let f = self.basis.get(pair.i)?;
        let g = self.basis.get(pair.j)?;

        let mult_f = pair.lcm.div(f.leading_monomial()?)?;
        let mult_g = pair.lcm.div(g.leading_monomial()?)?;

        let one = F::one();
        Some(&f.mul_monomial(&mult_f, &one) - &g.mul_monomial(&mult_g, &one))
    }

    fn add_to_basis(&mut self, poly: SparsePoly<F>) {
        let Some(lm_new) = poly.leading_monomial().cloned() else {
            return;
        };
        let new_idx = self.basis.len();

        for (i, existing) in self.basis.iter().enumerate() {
            let Some(lm_i) = existing.leading_monomial() else {
                continue;
            };
            if self.config.use_product_criterion && lm_i.is_coprime(&lm_new) {
                continue;
            }
            self.pairs.push(CriticalPair {
                i,
                j: new_idx,
                lcm: lm_i.lcm(&lm_new),
            });
        }

        self.basis.push(poly);
    }

    /// Returns the current number of basis elements.
    #[must_use]
    pub fn basis_size(&self) -> usize {
        self.basis.len()
    }

    /// Returns the number of pending pairs.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }
}

/// Fully reduces `f` modulo `basis`.
///
/// Every term of the result is irreducible by the leading monomials of
/// `basis`. The basis does not have to be monic.
#[must_use]
pub fn normal_form<F: Field>(f: &SparsePoly<F>, basis: &[SparsePoly<F>]) -> SparsePoly<F> {
    let mut p = f.clone();
    let mut remainder = Vec::new();

    while let Some((lm, lc)) = p.leading_term().cloned() {
        let reducer = basis.iter().find_map(|g| {
            let (g_lm, g_lc) = g.leading_term()?;
            let mult = lm.div(g_lm)?;
            Some((g, mult, g_lc))
        });

        match reducer {
            Some((g, mult, g_lc)) => {
                let ratio = lc.field_div(g_lc);
                p = &p - &g.mul_monomial(&mult, &ratio);
            }
            None => {
                remainder.push((lm, lc));
                p = p.tail();
            }
        }
    }

    SparsePoly::new(remainder, f.num_vars(), f.order())
}

/// Computes the reduced Gröbner basis of the ideal generated by `generators`.
///
/// The result is sorted by leading monomial in descending order. The zero
/// ideal yields an empty basis.
#[must_use]
pub fn reduced_groebner_basis<F: Field + Send + Sync>(
    generators: &[SparsePoly<F>],
    num_vars: usize,
    order: MonomialOrder,
) -> Vec<SparsePoly<F>> {
    let basis = Buchberger::new(generators, num_vars, order, GroebnerConfig::default()).compute();
    let raw_len = basis.len();

    // minimal basis: drop elements whose leading monomial is divisible by another's
    let mut sorted = basis;
    sorted.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
        (Some(x), Some(y)) => order.compare(x, y),
        _ => std::cmp::Ordering::Equal,
    });
    let mut minimal: Vec<SparsePoly<F>> = Vec::new();
    for g in sorted {
        let Some(lm) = g.leading_monomial() else {
            continue;
        };
        let redundant = minimal
            .iter()
            .filter_map(SparsePoly::leading_monomial)
            .any(|m| lm.is_divisible_by(m));
        if !redundant {
            minimal.push(g);
        }
    }

    // tail reduction
    let mut reduced: Vec<SparsePoly<F>> = minimal
        .iter()
        .map(|g| {
            let head = SparsePoly::new(g.terms()[..1].to_vec(), g.num_vars(), g.order());
            &head + &normal_form(&g.tail(), &minimal)
        })
        .collect();

    reduced.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
        (Some(x), Some(y)) => order.compare(y, x),
        _ => std::cmp::Ordering::Equal,
    });

    debug!(
        raw = raw_len,
        reduced = reduced.len(),
        "computed reduced Gröbner basis"
    );
    reduced
}

//! The involutive mill: polynomial involutive bases and standard representations.
//!
//! Construction runs the full pipeline:
//! 1. reduced Gröbner basis `G` of the input;
//! 2. the monomial ideal `J = LT(G)`;
//! 3. an involutive basis of `J`, using Pommaret division when `J` is
//!    quasi-stable and Janet division otherwise;
//! 4. for each basis monomial `m`, the polynomial `m - NF_G(m)`.
//!
//! The resulting polynomials are monic, their leading monomials are the
//! involutive basis of `J`, and the basis is ordered by ascending degree
//! and then descending monomial order.

use tracing::{debug, info, warn};

use involute_poly::{Monomial, MonomialOrder, SparsePoly};
use involute_rings::traits::Field;

use crate::completion::{
    involutive_completion, involutive_divisor, is_locally_involutive, is_quasi_stable,
    multiplicative_table,
};
use crate::division::InvolutiveDivision;
use crate::error::MillError;
use crate::groebner::{normal_form, reduced_groebner_basis};

/// Configuration for [`InvolutiveMill`].
#[derive(Clone, Debug)]
pub struct MillConfig {
    /// Monomial order for every polynomial the mill produces.
    pub order: MonomialOrder,
    /// Completion gives up beyond this degree.
    pub max_completion_degree: u32,
}

impl Default for MillConfig {
    fn default() -> Self {
        Self {
            order: MonomialOrder::Grevlex,
            max_completion_degree: 64,
        }
    }
}

/// An involutive basis of a polynomial ideal.
#[derive(Clone, Debug)]
pub struct InvolutiveMill<F: Field> {
    generators: Vec<SparsePoly<F>>,
    groebner: Vec<SparsePoly<F>>,
    basis: Vec<SparsePoly<F>>,
    leading: Vec<Monomial>,
    multiplicative: Vec<Vec<bool>>,
    division: InvolutiveDivision,
    locally_involutive: bool,
    num_vars: usize,
    config: MillConfig,
}

impl<F: Field + Send + Sync> InvolutiveMill<F> {
    /// Builds the involutive basis of the ideal generated by `generators`.
    ///
    /// # Errors
    ///
    /// - [`MillError::EmptyGenerators`] if `generators` is empty
    /// - [`MillError::VariableCountMismatch`] if the generators disagree on
    ///   the number of variables
    /// - [`MillError::CompletionDegreeExceeded`] if even the Janet
    ///   completion passes the configured degree bound
    pub fn new(generators: Vec<SparsePoly<F>>, config: MillConfig) -> Result<Self, MillError> {
        let first = generators.first().ok_or(MillError::EmptyGenerators)?;
        let num_vars = first.num_vars();
        if let Some((index, g)) = generators
            .iter()
            .enumerate()
            .find(|(_, g)| g.num_vars() != num_vars)
        {
            return Err(MillError::VariableCountMismatch {
                index,
                expected: num_vars,
                found: g.num_vars(),
            });
        }

        let order = config.order;
        let generators: Vec<SparsePoly<F>> = generators
            .into_iter()
            .map(|g| if g.order() == order { g } else { g.with_order(order) })
            .collect();

        let groebner = reduced_groebner_basis(&generators, num_vars, order);
        let lead_terms: Vec<Monomial> = groebner
            .iter()
            .filter_map(SparsePoly::leading_monomial)
            .cloned()
            .collect();

        let (division, mut leading) =
            Self::complete(&lead_terms, num_vars, order, config.max_completion_degree)?;
        leading.sort_by(|a, b| {
            a.total_degree()
                .cmp(&b.total_degree())
                .then_with(|| order.compare(b, a))
        });

        let multiplicative = multiplicative_table(&leading, division, num_vars);
        let locally_involutive = is_locally_involutive(&leading, division, num_vars);
        let basis: Vec<SparsePoly<F>> = leading
            .iter()
            .map(|m| {
                let mono = SparsePoly::monomial(m.clone(), F::one(), num_vars, order);
                &mono - &normal_form(&mono, &groebner)
            })
            .collect();

        info!(
            %division,
            generators = generators.len(),
            groebner = groebner.len(),
            basis = basis.len(),
            "built involutive basis"
        );

        Ok(Self {
            generators,
            groebner,
            basis,
            leading,
            multiplicative,
            division,
            locally_involutive,
            num_vars,
            config,
        })
    }

    /// Builds the mill with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`InvolutiveMill::new`].
    pub fn from_generators(generators: Vec<SparsePoly<F>>) -> Result<Self, MillError> {
        Self::new(generators, MillConfig::default())
    }

    fn complete(
        lead_terms: &[Monomial],
        num_vars: usize,
        order: MonomialOrder,
        max_degree: u32,
    ) -> Result<(InvolutiveDivision, Vec<Monomial>), MillError> {
        if is_quasi_stable(lead_terms, order) {
            match involutive_completion(
                lead_terms,
                InvolutiveDivision::Pommaret,
                num_vars,
                order,
                max_degree,
            ) {
                Ok(basis) => return Ok((InvolutiveDivision::Pommaret, basis)),
                Err(err) => warn!(%err, "Pommaret completion failed, falling back to Janet"),
            }
        } else {
            debug!("leading ideal is not quasi-stable, using Janet division");
        }

        let basis = involutive_completion(
            lead_terms,
            InvolutiveDivision::Janet,
            num_vars,
            order,
            max_degree,
        )?;
        Ok((InvolutiveDivision::Janet, basis))
    }
}

impl<F: Field> InvolutiveMill<F> {
    /// The involutive basis, in basis order.
    #[must_use]
    pub fn basis(&self) -> &[SparsePoly<F>] {
        &self.basis
    }

    /// Number of basis elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    /// Returns true for the zero ideal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    /// Leading monomials of the basis, in basis order.
    #[must_use]
    pub fn leading_monomials(&self) -> &[Monomial] {
        &self.leading
    }

    /// The reduced Gröbner basis the involutive basis was built from.
    #[must_use]
    pub fn groebner_basis(&self) -> &[SparsePoly<F>] {
        &self.groebner
    }

    /// The generators as supplied (re-sorted to the mill's order).
    #[must_use]
    pub fn generators(&self) -> &[SparsePoly<F>] {
        &self.generators
    }

    /// Multiplicative variables of the basis element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn mult_vars_of(&self, index: usize) -> &[bool] {
        &self.multiplicative[index]
    }

    /// Non-multiplicative variables of the basis element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn non_mult_vars_of(&self, index: usize) -> Vec<bool> {
        self.multiplicative[index].iter().map(|m| !m).collect()
    }

    /// The division the basis is involutive for.
    #[must_use]
    pub fn division(&self) -> InvolutiveDivision {
        self.division
    }

    /// True when the basis is a Pommaret basis.
    #[must_use]
    pub fn is_pommaret_basis(&self) -> bool {
        self.division == InvolutiveDivision::Pommaret && self.locally_involutive
    }

    /// True when every generator is homogeneous.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.generators.iter().all(SparsePoly::is_homogeneous)
    }

    /// The monomial order of all polynomials in the mill.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.config.order
    }

    /// Number of variables of the ambient ring.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The configuration the mill was built with.
    #[must_use]
    pub fn config(&self) -> &MillConfig {
        &self.config
    }

    /// Index of the basis element whose involutive cone contains `m`.
    #[must_use]
    pub fn involutive_divisor(&self, m: &Monomial) -> Option<usize> {
        involutive_divisor(&self.leading, &self.multiplicative, m)
    }

    /// Normal form modulo the ideal.
    #[must_use]
    pub fn normal_form(&self, f: &SparsePoly<F>) -> SparsePoly<F> {
        normal_form(f, &self.groebner)
    }

    /// Ideal membership.
    #[must_use]
    pub fn contains(&self, f: &SparsePoly<F>) -> bool {
        self.normal_form(f).is_zero()
    }

    /// Writes `f` as `sum_i P_i * h_i` over the basis `h_i`.
    ///
    /// Every `P_i` only involves the multiplicative variables of `h_i`, so
    /// the representation is unique. The returned vector has one entry per
    /// basis element.
    ///
    /// # Errors
    ///
    /// Returns [`MillError::NotInIdeal`] if `f` is not in the ideal.
    pub fn standard_representation(
        &self,
        f: &SparsePoly<F>,
    ) -> Result<Vec<SparsePoly<F>>, MillError> {
        let order = self.config.order;
        let mut coeffs = vec![SparsePoly::zero(self.num_vars, order); self.basis.len()];
        let mut p = if f.order() == order {
            f.clone()
        } else {
            f.with_order(order)
        };

        while let Some((lm, lc)) = p.leading_term().cloned() {
            let Some(index) = self.involutive_divisor(&lm) else {
                return Err(MillError::NotInIdeal(f.to_string()));
            };
            let Some(mult) = lm.div(&self.leading[index]) else {
                return Err(MillError::NotInIdeal(f.to_string()));
            };

            let term = SparsePoly::monomial(mult.clone(), lc.clone(), self.num_vars, order);
            coeffs[index] = &coeffs[index] + &term;
            p = &p - &self.basis[index].mul_monomial(&mult, &lc);
        }

        Ok(coeffs)
    }
}

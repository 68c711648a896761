//! Generators of the free resolution before Morse reduction.
//!
//! A [`MorseElement`] stands for the generator `1 ⊗ x_k ⊗ m · h` of the
//! involutive resolution: an exterior monomial `x_k` (stored as a
//! [`VarMask`]), a right factor `m`, and a basis element `h` of the mill.
//!
//! The matching on these generators pairs every non-critical element
//! with a partner that differs by moving one variable between the wedge
//! and the right factor. An element whose right factor has its largest
//! variable above every multiplicative wedge index is a *queen*; it is
//! eliminated by rewriting every path through it in terms of the faces
//! of its *king* `x_{k ∪ {a}} ⊗ m / x_a · h`. Elements with `m = 1` and a
//! wedge made of non-multiplicative variables only are *critical* and
//! survive as generators of the reduced resolution.

use std::cmp::Ordering;
use std::fmt;

use involute_janet::{InvolutiveMill, MillError};
use involute_poly::{Monomial, MonomialOrder, SparsePoly};
use involute_rings::{Field, Ring};

use crate::bitset::VarMask;
use crate::std_rep::StandardRepresentationContainer;
use crate::variant::{ConstantPaths, GraphVariant, PolynomialPaths};

/// A basis element of the mill together with the data Morse elements need.
#[derive(Clone, Debug)]
pub struct BasisEntry<F: Field> {
    /// The basis polynomial.
    pub element: SparsePoly<F>,
    /// Its leading monomial.
    pub lpp: Monomial,
    /// Its non-multiplicative variables.
    pub non_mult: VarMask,
    /// Position in basis order.
    pub position: usize,
}

impl<F: Field> BasisEntry<F> {
    /// One entry per basis element of `mill`, in basis order.
    #[must_use]
    pub fn from_mill(mill: &InvolutiveMill<F>) -> Vec<Self> {
        mill.basis()
            .iter()
            .zip(mill.leading_monomials())
            .enumerate()
            .map(|(position, (element, lpp))| Self {
                element: element.clone(),
                lpp: lpp.clone(),
                non_mult: VarMask::from_bools(&mill.non_mult_vars_of(position)),
                position,
            })
            .collect()
    }
}

/// A free generator `1 ⊗ x_k ⊗ m · h` of the involutive resolution.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MorseElement {
    wedge: VarMask,
    right_factor: Monomial,
    basis: usize,
    lpp: Monomial,
    non_mult: VarMask,
    full: Monomial,
}

impl MorseElement {
    /// The generator `x_wedge ⊗ right_factor · h` for the basis entry `h`.
    #[must_use]
    pub fn new<F: Field>(wedge: VarMask, right_factor: Monomial, entry: &BasisEntry<F>) -> Self {
        let full = wedge.to_monomial().mul(&right_factor).mul(&entry.lpp);
        Self {
            wedge,
            right_factor,
            basis: entry.position,
            lpp: entry.lpp.clone(),
            non_mult: entry.non_mult.clone(),
            full,
        }
    }

    /// The generator `x_wedge ⊗ 1 · h`.
    #[must_use]
    pub fn with_identity<F: Field>(wedge: VarMask, entry: &BasisEntry<F>) -> Self {
        Self::new(wedge, Monomial::one(), entry)
    }

    /// The exterior part.
    #[must_use]
    pub fn wedge(&self) -> &VarMask {
        &self.wedge
    }

    /// The polynomial factor between the wedge and the basis element.
    #[must_use]
    pub fn right_factor(&self) -> &Monomial {
        &self.right_factor
    }

    /// Position of the basis element in basis order.
    #[must_use]
    pub fn basis_index(&self) -> usize {
        self.basis
    }

    /// The basis polynomial this element sits on.
    ///
    /// # Panics
    ///
    /// Panics if `basis` is not the basis the element was built from.
    #[must_use]
    pub fn basis_element<'b, F: Field>(&self, basis: &'b [BasisEntry<F>]) -> &'b SparsePoly<F> {
        &basis[self.basis].element
    }

    /// Leading monomial of the basis element.
    #[must_use]
    pub fn leading_monomial(&self) -> &Monomial {
        &self.lpp
    }

    /// Non-multiplicative variables of the basis element.
    #[must_use]
    pub fn non_mult(&self) -> &VarMask {
        &self.non_mult
    }

    /// The monomial `x_k * m * LPP(h)`.
    #[must_use]
    pub fn full_monomial(&self) -> &Monomial {
        &self.full
    }

    /// Replaces the wedge.
    pub fn set_wedge_product(&mut self, wedge: VarMask) {
        self.wedge = wedge;
        self.refresh_full();
    }

    /// Replaces the right factor.
    pub fn set_right_factor(&mut self, right_factor: Monomial) {
        self.right_factor = right_factor;
        self.refresh_full();
    }

    /// Divides the right factor by `x_var`; returns false if it does not divide.
    pub fn divide_right_factor_by(&mut self, var: usize) -> bool {
        match self.right_factor.div_var(var) {
            Some(m) => {
                self.set_right_factor(m);
                true
            }
            None => false,
        }
    }

    fn refresh_full(&mut self) {
        self.full = self
            .wedge
            .to_monomial()
            .mul(&self.right_factor)
            .mul(&self.lpp);
    }

    /// Polynomial degree `deg(m * LPP(h))`.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.right_factor.total_degree() + self.lpp.total_degree()
    }

    /// Internal (shift) degree `|k| + deg(m * LPP(h))` of the generator.
    #[must_use]
    pub fn internal_degree(&self) -> u32 {
        self.full.total_degree()
    }

    /// Homological degree: the size of the wedge.
    #[must_use]
    pub fn count_wedge_basis(&self) -> usize {
        self.wedge.count()
    }

    /// `(-1)^s` where `s` counts wedge variables strictly between `i` and `j`.
    #[must_use]
    pub fn epsilon(&self, i: usize, j: usize) -> i64 {
        sign(self.wedge.count_between(i, j))
    }

    /// `(-1)^s` where `s` counts wedge variables below `v`.
    #[must_use]
    pub fn wedge_sign(&self, v: usize) -> i64 {
        sign(self.wedge.count_below(v))
    }

    /// The largest variable of the right factor.
    #[must_use]
    pub fn max_type_one(&self) -> Option<usize> {
        self.right_factor.max_var()
    }

    /// The largest variable of the right factor, provided it exceeds every
    /// multiplicative wedge variable.
    #[must_use]
    pub fn max_type_two(&self) -> Option<usize> {
        let a = self.right_factor.max_var()?;
        let beats_wedge = self
            .wedge
            .indices()
            .filter(|&v| !self.non_mult.test(v))
            .all(|v| v < a);
        beats_wedge.then_some(a)
    }

    /// True for queens: elements matched with an element of higher
    /// homological degree.
    #[must_use]
    pub fn is_reducible(&self) -> bool {
        self.max_type_two().is_some() && self.max_type_one() == self.max_type_two()
    }

    /// True for critical elements: trivial right factor and a wedge of
    /// non-multiplicative variables.
    #[must_use]
    pub fn is_basis_element(&self) -> bool {
        self.right_factor.is_one() && self.wedge.is_subset_of(&self.non_mult)
    }

    /// Differential of a critical element with polynomial edge weights.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_basic_maps<F: Field>(
        &self,
        basis: &[BasisEntry<F>],
        container: &mut StandardRepresentationContainer<'_, F>,
    ) -> Result<Vec<(MorseElement, SparsePoly<F>)>, MillError> {
        self.basic_maps::<F, PolynomialPaths>(basis, container)
    }

    /// Differential of a critical element, keeping scalar edges only.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_basic_constant_maps<F: Field>(
        &self,
        basis: &[BasisEntry<F>],
        container: &mut StandardRepresentationContainer<'_, F>,
    ) -> Result<Vec<(MorseElement, F)>, MillError> {
        self.basic_maps::<F, ConstantPaths>(basis, container)
    }

    /// `d(x_k ⊗ h) = sum_v ± (x_v · x_{k∖v} ⊗ h - x_{k∖v} ⊗ x_v h)`, with
    /// `x_v h` expanded through its standard representation.
    pub(crate) fn basic_maps<F: Field, V: GraphVariant<F>>(
        &self,
        basis: &[BasisEntry<F>],
        container: &mut StandardRepresentationContainer<'_, F>,
    ) -> Result<Vec<(MorseElement, V::Coeff)>, MillError> {
        let entry = &basis[self.basis];
        let num_vars = self.wedge.len();
        let order = entry.element.order();
        let mut maps = Vec::new();

        for v in self.wedge.indices() {
            let s = self.wedge_sign(v);
            let face = self.wedge.flipped(v);

            if let Some(x_v) = V::variable(v, num_vars, order) {
                maps.push((
                    MorseElement::with_identity(face.clone(), entry),
                    x_v.mul_by_scalar(s),
                ));
            }

            let product = entry.element.mul_var(v);
            let rep = container.standard_representation(&product)?;
            push_representation::<F, V>(&mut maps, rep, &face, basis, -s, order);
        }

        Ok(maps)
    }
}

/// Appends one target per term of a standard representation.
pub(crate) fn push_representation<F: Field, V: GraphVariant<F>>(
    out: &mut Vec<(MorseElement, V::Coeff)>,
    rep: &[SparsePoly<F>],
    wedge: &VarMask,
    basis: &[BasisEntry<F>],
    sign: i64,
    order: MonomialOrder,
) {
    let num_vars = wedge.len();
    for (beta, coeffs) in rep.iter().enumerate() {
        for (nu, c) in coeffs.terms() {
            out.push((
                MorseElement::new(wedge.clone(), nu.clone(), &basis[beta]),
                V::scalar(c.clone(), num_vars, order).mul_by_scalar(sign),
            ));
        }
    }
}

fn sign(count: usize) -> i64 {
    if count % 2 == 0 {
        1
    } else {
        -1
    }
}

impl Ord for MorseElement {
    /// Homological degree first, then the full monomial in degrevlex, then
    /// the wedge, the basis position and the right factor.
    fn cmp(&self, other: &Self) -> Ordering {
        self.count_wedge_basis()
            .cmp(&other.count_wedge_basis())
            .then_with(|| self.full.cmp_grevlex(&other.full))
            .then_with(|| self.wedge.cmp_revlex(&other.wedge))
            .then_with(|| self.basis.cmp(&other.basis))
            .then_with(|| self.right_factor.cmp_grevlex(&other.right_factor))
    }
}

impl PartialOrd for MorseElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MorseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}|h{}]", self.wedge, self.right_factor, self.basis)
    }
}

impl fmt::Debug for MorseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

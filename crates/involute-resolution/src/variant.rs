//! Coefficient rings for the edges of the Morse graph.
//!
//! The full resolution labels edges with polynomials. For Betti numbers
//! only the scalar part of each edge matters: a differential between two
//! free generators of the same internal degree is a constant, and every
//! edge that passes through a variable raises the internal degree. The
//! constant variant drops variable factors at the source and keeps the
//! whole reduction inside the coefficient field.

use involute_poly::{MonomialOrder, SparsePoly};
use involute_rings::{Field, Ring};

/// Selects the coefficient ring used along paths of the Morse graph.
pub trait GraphVariant<F: Field> {
    /// Edge weight type.
    type Coeff: Ring;

    /// The variable `x_index` as an edge weight, or `None` when variable
    /// edges are dropped.
    fn variable(index: usize, num_vars: usize, order: MonomialOrder) -> Option<Self::Coeff>;

    /// A field element as an edge weight.
    fn scalar(c: F, num_vars: usize, order: MonomialOrder) -> Self::Coeff;
}

/// Edges carry polynomials; used for the resolution maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolynomialPaths;

/// Edges carry field elements; used for Betti numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantPaths;

impl<F: Field> GraphVariant<F> for PolynomialPaths {
    type Coeff = SparsePoly<F>;

    fn variable(index: usize, num_vars: usize, order: MonomialOrder) -> Option<SparsePoly<F>> {
        Some(SparsePoly::var(index, num_vars, order))
    }

    fn scalar(c: F, num_vars: usize, order: MonomialOrder) -> SparsePoly<F> {
        SparsePoly::constant(c, num_vars, order)
    }
}

impl<F: Field> GraphVariant<F> for ConstantPaths {
    type Coeff = F;

    fn variable(_index: usize, _num_vars: usize, _order: MonomialOrder) -> Option<F> {
        None
    }

    fn scalar(c: F, _num_vars: usize, _order: MonomialOrder) -> F {
        c
    }
}

//! # involute-poly
//!
//! Sparse multivariate polynomials for the involute resolution engine.
//!
//! This crate provides:
//! - `Monomial`: exponent vectors with a cached total degree
//! - `MonomialOrder`: lex, graded lex and degree reverse lex
//! - `SparsePoly`: polynomials as sorted term lists
//!
//! Variables are named `x0, x1, ...` and ordered `x0 > x1 > ...`.
//! The *class* of a monomial is the largest index of a variable dividing
//! it; the Pommaret division in `involute-janet` is defined through it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use sparse::SparsePoly;

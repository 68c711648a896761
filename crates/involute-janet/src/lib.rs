//! # involute-janet
//!
//! Involutive bases of polynomial ideals.
//!
//! This crate provides:
//! - A parallel Buchberger algorithm producing reduced Gröbner bases
//! - Janet and Pommaret involutive divisions on monomials
//! - Involutive completion of monomial ideals, with a quasi-stability test
//! - `InvolutiveMill`: the polynomial involutive basis of an ideal together
//!   with involutive standard representations
//!
//! ## Pipeline
//!
//! ```text
//! generators ──Buchberger──▶ reduced Gröbner basis G
//!            ──LT(G)──────▶ monomial ideal J
//!            ──completion─▶ involutive basis of J (Pommaret if J is quasi-stable)
//!            ──m - NF_G(m)▶ polynomial involutive basis of the ideal
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod completion;
pub mod division;
pub mod error;
pub mod groebner;
pub mod mill;

#[cfg(test)]
mod proptests;

pub use division::InvolutiveDivision;
pub use error::MillError;
pub use groebner::{normal_form, reduced_groebner_basis, Buchberger, GroebnerConfig};
pub use mill::{InvolutiveMill, MillConfig};

//! # involute-resolution
//!
//! Free resolutions of polynomial ideals by algebraic discrete Morse theory.
//!
//! A Pommaret basis of an ideal `I` induces a large but explicit free
//! resolution of `I`. Its generators are indexed by wedges of
//! non-multiplicative variables, right factors and basis elements
//! ([`MorseElement`]). An acyclic matching on these generators collapses
//! the resolution onto the critical ones; the surviving differentials are
//! read off from weighted paths in the Morse graph ([`MorseGraph`]).
//!
//! From there:
//!
//! - [`resolution`] returns the Morse resolution as matrices,
//! - [`minimal_resolution`] prunes unit entries until it is minimal,
//! - [`betti_diagram`] computes graded Betti numbers from scalar paths only,
//! - [`pseudo_betti_diagram`] counts critical generators per bidegree.
//!
//! # Example
//!
//! ```
//! use involute_janet::InvolutiveMill;
//! use involute_poly::{MonomialOrder, SparsePoly};
//! use involute_resolution::betti_diagram;
//! use involute_rings::Q;
//!
//! let x0 = SparsePoly::<Q>::var(0, 2, MonomialOrder::Grevlex);
//! let x1 = SparsePoly::<Q>::var(1, 2, MonomialOrder::Grevlex);
//! let mill = InvolutiveMill::from_generators(vec![x0, x1]).unwrap();
//!
//! let betti = betti_diagram(&mill).unwrap();
//! assert_eq!(betti.rows(), &[vec![1, 2, 1]]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod betti;
pub mod bitset;
pub mod error;
pub mod minimization;
pub mod morse_element;
pub mod morse_graph;
pub mod morse_paths;
pub mod resolve;
pub mod std_rep;
pub mod variant;

#[cfg(test)]
mod proptests;

pub use betti::BettiDiagram;
pub use bitset::VarMask;
pub use error::ResolutionError;
pub use minimization::ResolutionMinimization;
pub use morse_element::{BasisEntry, MorseElement};
pub use morse_graph::{MorseGraph, ResolutionMap};
pub use morse_paths::MorsePaths;
pub use resolve::{betti_diagram, minimal_resolution, pseudo_betti_diagram, resolution};
pub use std_rep::StandardRepresentationContainer;
pub use variant::{ConstantPaths, GraphVariant, PolynomialPaths};

//! # Involute
//!
//! Free resolutions of polynomial ideals from Pommaret bases, reduced with
//! algebraic discrete Morse theory.
//!
//! ## Features
//!
//! - **Coefficients**: exact rationals and prime fields
//! - **Involutive bases**: Janet and Pommaret completion on top of a
//!   parallel Buchberger
//! - **Morse reduction**: explicit differentials of a free resolution
//!   without computing syzygies
//! - **Invariants**: minimal resolutions and graded Betti tables
//!
//! ## Quick Start
//!
//! ```
//! use involute::prelude::*;
//!
//! let n = 2;
//! let order = MonomialOrder::Grevlex;
//! let x0_sq = SparsePoly::<Q>::monomial(Monomial::new(&[2, 0]), Q::from_i64(1), n, order);
//! let x1_sq = SparsePoly::<Q>::monomial(Monomial::new(&[0, 2]), Q::from_i64(1), n, order);
//!
//! let mill = InvolutiveMill::from_generators(vec![x0_sq, x1_sq]).unwrap();
//! let betti = betti_diagram(&mill).unwrap();
//! assert_eq!(betti.totals(), vec![1, 2, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use involute_janet as janet;
pub use involute_linalg as linalg;
pub use involute_poly as poly;
pub use involute_resolution as resolution;
pub use involute_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use involute_janet::{InvolutiveDivision, InvolutiveMill, MillConfig, MillError};
    pub use involute_linalg::dense_matrix::DenseMatrix;
    pub use involute_poly::{Monomial, MonomialOrder, SparsePoly};
    pub use involute_resolution::{
        betti_diagram, minimal_resolution, pseudo_betti_diagram, resolution, BettiDiagram,
        MorseGraph, ResolutionError,
    };
    pub use involute_rings::{Field, FiniteField, Ring, GF32003, Q};
}

//! # involute-linalg
//!
//! Dense matrices for the involute resolution engine.
//!
//! Resolutions are handed out as lists of differential matrices whose
//! entries are polynomials, and the minimization step edits them in place
//! (column extraction, row operations, row and column deletion). Betti
//! numbers need ranks of scalar blocks, which `DenseMatrix::rank` covers
//! for any field.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::DenseMatrix;

//! # involute-rings
//!
//! Coefficient rings for the involute resolution engine.
//!
//! This crate provides:
//! - Capability traits: `Ring`, `Field`
//! - Exact rationals `Q` backed by `dashu`
//! - Prime fields `FiniteField<P>`
//!
//! The resolution engine only ever talks to coefficients through these
//! traits, so any commutative ring implementing them can be plugged in.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::{FiniteField, GF32003};
pub use rationals::Q;
pub use traits::{Field, Ring};

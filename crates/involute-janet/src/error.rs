//! Errors raised while building or querying an involutive basis.

use thiserror::Error;

/// Errors from [`crate::InvolutiveMill`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MillError {
    /// No generators were supplied.
    #[error("an ideal needs at least one generator")]
    EmptyGenerators,

    /// Generators live in polynomial rings of different sizes.
    #[error("generator {index} has {found} variables, expected {expected}")]
    VariableCountMismatch {
        /// Position of the offending generator.
        index: usize,
        /// Variable count of the first generator.
        expected: usize,
        /// Variable count of the offending generator.
        found: usize,
    },

    /// A polynomial outside the ideal was given a standard representation.
    #[error("polynomial is not in the ideal: {0}")]
    NotInIdeal(String),

    /// Involutive completion ran past the configured degree bound.
    #[error("involutive completion exceeded degree {limit}")]
    CompletionDegreeExceeded {
        /// The configured bound.
        limit: u32,
    },
}

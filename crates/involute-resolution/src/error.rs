//! Errors raised by the resolution entry points.

use thiserror::Error;

use involute_janet::MillError;
use involute_poly::MonomialOrder;

/// Why a resolution or Betti table could not be computed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The mill does not use the degree reverse lexicographic order.
    #[error("resolutions need degrevlex, the mill uses {0}")]
    WrongMonomialOrder(MonomialOrder),

    /// The involutive basis is not a Pommaret basis.
    #[error("the involutive basis is not a Pommaret basis")]
    NotPommaretBasis,

    /// Graded invariants were requested for an inhomogeneous ideal.
    #[error("graded Betti numbers need homogeneous generators")]
    NotHomogeneous,

    /// A standard representation failed.
    #[error(transparent)]
    Mill(#[from] MillError),
}

//! Entry points from an involutive mill to resolutions and Betti tables.

use tracing::warn;

use involute_janet::InvolutiveMill;
use involute_linalg::dense_matrix::DenseMatrix;
use involute_poly::{MonomialOrder, SparsePoly};
use involute_rings::Field;

use crate::betti::BettiDiagram;
use crate::error::ResolutionError;
use crate::morse_graph::MorseGraph;

fn check_mill<F: Field>(
    mill: &InvolutiveMill<F>,
    need_homogeneous: bool,
) -> Result<(), ResolutionError> {
    if mill.order() != MonomialOrder::Grevlex {
        warn!(order = %mill.order(), "rejecting mill with non-degrevlex order");
        return Err(ResolutionError::WrongMonomialOrder(mill.order()));
    }
    if !mill.is_pommaret_basis() {
        warn!(division = %mill.division(), "rejecting mill without a Pommaret basis");
        return Err(ResolutionError::NotPommaretBasis);
    }
    if need_homogeneous && !mill.is_homogeneous() {
        warn!("rejecting mill with inhomogeneous generators");
        return Err(ResolutionError::NotHomogeneous);
    }
    Ok(())
}

/// Graded Betti numbers of `P/I` for the ideal of `mill`.
///
/// # Errors
///
/// The mill must use degrevlex, hold a Pommaret basis, and have
/// homogeneous generators.
pub fn betti_diagram<F: Field + Send + Sync>(
    mill: &InvolutiveMill<F>,
) -> Result<BettiDiagram, ResolutionError> {
    check_mill(mill, true)?;
    Ok(MorseGraph::new(mill).compute_betti_numbers()?)
}

/// Ranks of the Morse resolution per bidegree; an upper bound for
/// [`betti_diagram`].
///
/// # Errors
///
/// Same preconditions as [`betti_diagram`].
pub fn pseudo_betti_diagram<F: Field>(
    mill: &InvolutiveMill<F>,
) -> Result<BettiDiagram, ResolutionError> {
    check_mill(mill, true)?;
    Ok(MorseGraph::new(mill).compute_pseudo_betti_numbers())
}

/// The minimal free resolution as differential matrices `M_0, M_1, ...`.
///
/// # Errors
///
/// Same preconditions as [`betti_diagram`].
pub fn minimal_resolution<F: Field>(
    mill: &InvolutiveMill<F>,
) -> Result<Vec<DenseMatrix<SparsePoly<F>>>, ResolutionError> {
    check_mill(mill, true)?;
    Ok(MorseGraph::new(mill).compute_minimal_resolution()?)
}

/// The (generally non-minimal) Morse resolution.
///
/// Works for inhomogeneous ideals too.
///
/// # Errors
///
/// The mill must use degrevlex and hold a Pommaret basis.
pub fn resolution<F: Field>(
    mill: &InvolutiveMill<F>,
) -> Result<Vec<DenseMatrix<SparsePoly<F>>>, ResolutionError> {
    check_mill(mill, false)?;
    Ok(MorseGraph::new(mill).compute_resolution()?)
}

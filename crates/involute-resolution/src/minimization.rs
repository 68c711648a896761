//! Pruning a free resolution down to a minimal one.
//!
//! A unit entry in a differential means a generator of `F_i` maps onto a
//! generator of `F_{i-1}` up to a unit. Both generators split off as a
//! trivial complex; eliminating them and correcting the neighbouring
//! entries keeps the complex exact. When no unit is left anywhere the
//! resolution is minimal.

use tracing::{debug, trace};

use involute_linalg::dense_matrix::DenseMatrix;
use involute_rings::Ring;

/// The differentials `M_0, M_1, ...` of a resolution, minimized in place.
///
/// `M_0` is the `1 x s` row of generators; `M_i` has one row per generator
/// of `F_{i-1}` and one column per generator of `F_i`.
#[derive(Clone, Debug)]
pub struct ResolutionMinimization<R: Ring> {
    matrices: Vec<DenseMatrix<R>>,
}

impl<R: Ring> ResolutionMinimization<R> {
    /// Wraps the differentials of a resolution.
    #[must_use]
    pub fn new(matrices: Vec<DenseMatrix<R>>) -> Self {
        Self { matrices }
    }

    /// First unit entry in column-major order.
    #[must_use]
    pub fn find_pivot(matrix: &DenseMatrix<R>) -> Option<(usize, usize)> {
        (0..matrix.num_cols()).find_map(|c| {
            (0..matrix.num_rows()).find_map(|r| matrix[(r, c)].is_unit().then_some((r, c)))
        })
    }

    /// Eliminates unit entries until none are left; returns how many pairs
    /// of generators were removed.
    pub fn minimize(&mut self) -> usize {
        let mut removed = 0;
        for i in 1..self.matrices.len() {
            while let Some((r, c)) = Self::find_pivot(&self.matrices[i]) {
                trace!(map = i, row = r, col = c, "eliminating unit");
                self.eliminate(i, r, c);
                removed += 1;
            }
        }
        while self.matrices.len() > 1 && self.matrices.last().is_some_and(|m| m.num_cols() == 0) {
            self.matrices.pop();
        }
        debug!(removed, maps = self.matrices.len(), "minimized resolution");
        removed
    }

    fn eliminate(&mut self, i: usize, r: usize, c: usize) {
        let Some(inv) = self.matrices[i][(r, c)].unit_inverse() else {
            return;
        };
        let m = &mut self.matrices[i];
        let pivot_col = m.col(c);
        m.delete_col(c);
        for (row, entry) in pivot_col.iter().enumerate() {
            if row == r || entry.is_zero() {
                continue;
            }
            let factor = -(entry.clone() * inv.clone());
            m.add_scaled_row(row, r, &factor);
        }
        m.delete_row(r);

        self.matrices[i - 1].delete_col(r);
        if let Some(next) = self.matrices.get_mut(i + 1) {
            next.delete_row(c);
        }
    }

    /// The current differentials.
    #[must_use]
    pub fn matrices(&self) -> &[DenseMatrix<R>] {
        &self.matrices
    }

    /// Consumes the minimizer, returning the differentials.
    #[must_use]
    pub fn into_matrices(self) -> Vec<DenseMatrix<R>> {
        self.matrices
    }
}

//! The Morse graph of the involutive resolution and its reduction.
//!
//! Three phases turn a Pommaret basis into a free resolution:
//!
//! 1. **General basis**: enumerate the critical elements
//!    `x_k ⊗ 1 · h` with `k` a set of non-multiplicative variables of `h`.
//! 2. **Basic graph**: for every critical element record the terms of its
//!    differential in the involutive resolution. Edges are stored at their
//!    target, keyed by the critical source.
//! 3. **Reduction**: walk the graph from the largest element down. Each
//!    queen is replaced by the faces of its king, weighted by the paths
//!    that reached it; every other non-critical element is dropped. When
//!    the walk ends only critical elements remain and their incoming
//!    paths are the differentials of the Morse resolution.
//!
//! Every target produced while reducing a queen is strictly smaller than
//! the queen, so a single descending pass suffices.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use involute_janet::{InvolutiveMill, MillError};
use involute_linalg::dense_matrix::DenseMatrix;
use involute_poly::{MonomialOrder, SparsePoly};
use involute_rings::{Field, Ring};

use crate::betti::BettiDiagram;
use crate::bitset::VarMask;
use crate::minimization::ResolutionMinimization;
use crate::morse_element::{push_representation, BasisEntry, MorseElement};
use crate::morse_paths::MorsePaths;
use crate::std_rep::StandardRepresentationContainer;
use crate::variant::{ConstantPaths, GraphVariant, PolynomialPaths};

/// Incoming paths of every live vertex, ordered by [`MorseElement`].
pub type ResolutionMap<C> = BTreeMap<MorseElement, MorsePaths<C>>;

/// Builds and reduces the Morse graph of one involutive basis.
pub struct MorseGraph<'a, F: Field> {
    basis: Vec<BasisEntry<F>>,
    container: StandardRepresentationContainer<'a, F>,
    num_vars: usize,
    order: MonomialOrder,
}

impl<'a, F: Field> MorseGraph<'a, F> {
    /// A graph over the basis of `mill`.
    #[must_use]
    pub fn new(mill: &'a InvolutiveMill<F>) -> Self {
        Self {
            basis: BasisEntry::from_mill(mill),
            container: StandardRepresentationContainer::new(mill),
            num_vars: mill.num_vars(),
            order: mill.order(),
        }
    }

    /// The basis entries, in basis order.
    #[must_use]
    pub fn basis(&self) -> &[BasisEntry<F>] {
        &self.basis
    }

    /// The memoized standard representations gathered so far.
    #[must_use]
    pub fn container(&self) -> &StandardRepresentationContainer<'a, F> {
        &self.container
    }

    /// All critical elements: basis elements in basis order, then wedge
    /// size, then subsets of the non-multiplicative variables in
    /// lexicographic order.
    #[must_use]
    pub fn compute_general_basis(&self) -> Vec<MorseElement> {
        let mut general = Vec::new();
        for entry in &self.basis {
            general.extend(
                critical_wedges(entry)
                    .into_iter()
                    .map(|wedge| MorseElement::with_identity(wedge, entry)),
            );
        }
        debug!(critical = general.len(), "enumerated critical elements");
        general
    }

    /// The involutive differentials of `general` with polynomial weights.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_basic_graph(
        &mut self,
        general: &[MorseElement],
    ) -> Result<ResolutionMap<SparsePoly<F>>, MillError> {
        self.basic_graph::<PolynomialPaths>(general)
    }

    /// The involutive differentials of `general`, scalar edges only.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_basic_constant_graph(
        &mut self,
        general: &[MorseElement],
    ) -> Result<ResolutionMap<F>, MillError> {
        self.basic_graph::<ConstantPaths>(general)
    }

    fn basic_graph<V: GraphVariant<F>>(
        &mut self,
        general: &[MorseElement],
    ) -> Result<ResolutionMap<V::Coeff>, MillError> {
        let mut map: ResolutionMap<V::Coeff> = general
            .iter()
            .map(|e| (e.clone(), MorsePaths::new()))
            .collect();

        for source in general {
            for (target, weight) in source.basic_maps::<F, V>(&self.basis, &mut self.container)? {
                map.entry(target)
                    .or_default()
                    .add_path(source.clone(), weight);
            }
        }

        debug!(vertices = map.len(), "built basic Morse graph");
        Ok(map)
    }

    /// Reduces a polynomial-weighted graph in place.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn direct_morse_reduction(
        &mut self,
        map: &mut ResolutionMap<SparsePoly<F>>,
    ) -> Result<(), MillError> {
        self.reduce::<PolynomialPaths>(map)
    }

    /// Reduces a scalar-weighted graph in place.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn constant_direct_morse_reduction(
        &mut self,
        map: &mut ResolutionMap<F>,
    ) -> Result<(), MillError> {
        self.reduce::<ConstantPaths>(map)
    }

    fn reduce<V: GraphVariant<F>>(
        &mut self,
        map: &mut ResolutionMap<V::Coeff>,
    ) -> Result<(), MillError> {
        let mut queens = 0usize;
        let mut dropped = 0usize;
        let mut cursor = map.keys().next_back().cloned();

        while let Some(current) = cursor {
            if !current.is_basis_element() {
                if let Some(paths) = map.remove(&current) {
                    if current.is_reducible() && !paths.is_empty() {
                        queens += 1;
                        let mut targets = self.left_minimization::<V>(&current);
                        self.right_minimization::<V>(&current, &mut targets)?;
                        for (target, factor) in targets {
                            let entry = map.entry(target).or_default();
                            for (source, weight) in paths.paths() {
                                entry.add_path(source.clone(), weight.clone() * factor.clone());
                            }
                        }
                    } else {
                        dropped += 1;
                    }
                }
            }
            cursor = map.range(..current).next_back().map(|(k, _)| k.clone());
        }

        debug!(queens, dropped, remaining = map.len(), "Morse reduction finished");
        Ok(())
    }

    /// The face `x_k ⊗ m / x_a · h` of the king, weighted by `x_a`.
    fn left_minimization<V: GraphVariant<F>>(
        &self,
        queen: &MorseElement,
    ) -> Vec<(MorseElement, V::Coeff)> {
        let mut targets = Vec::new();
        let Some(a) = queen.max_type_one() else {
            return targets;
        };
        if let Some(x_a) = V::variable(a, self.num_vars, self.order) {
            let mut target = queen.clone();
            if target.divide_right_factor_by(a) {
                targets.push((target, x_a));
            }
        }
        targets
    }

    /// Faces of the king through non-multiplicative wedge variables, with
    /// `x_v · m / x_a · h` rewritten in its standard representation.
    fn right_minimization<V: GraphVariant<F>>(
        &mut self,
        queen: &MorseElement,
        targets: &mut Vec<(MorseElement, V::Coeff)>,
    ) -> Result<(), MillError> {
        let Some(a) = queen.max_type_one() else {
            return Ok(());
        };
        let Some(reduced) = queen.right_factor().div_var(a) else {
            return Ok(());
        };
        let entry = &self.basis[queen.basis_index()];
        let king_wedge = {
            let mut w = queen.wedge().clone();
            w.set(a, true);
            w
        };

        for v in queen.wedge().indices().filter(|&v| queen.non_mult().test(v)) {
            let sign = queen.epsilon(v, a);
            let product = entry
                .element
                .mul_monomial(&reduced.mul_var(v), &F::one());
            let rep = self.container.standard_representation(&product)?;
            let wedge = king_wedge.flipped(v);
            push_representation::<F, V>(targets, rep, &wedge, &self.basis, sign, self.order);
        }
        Ok(())
    }

    /// The differentials between critical elements as matrices.
    ///
    /// `M_0` is the row of basis polynomials; `M_i` has a row for every
    /// critical element with `i - 1` wedge variables and a column for every
    /// one with `i`, both in the order of `general`.
    #[must_use]
    pub fn maps_as_matrices(
        &self,
        map: &ResolutionMap<SparsePoly<F>>,
        general: &[MorseElement],
    ) -> Vec<DenseMatrix<SparsePoly<F>>> {
        let levels = critical_levels(general);
        let mut matrices = vec![DenseMatrix::row_vector(
            self.basis.iter().map(|e| e.element.clone()).collect(),
        )];

        for pair in levels.windows(2) {
            let (rows, cols) = (&pair[0], &pair[1]);
            let mut m = DenseMatrix::zeros(rows.len(), cols.len());
            for (r, row) in rows.iter().enumerate() {
                let Some(paths) = map.get(*row) else {
                    continue;
                };
                for (c, col) in cols.iter().enumerate() {
                    m[(r, c)] = paths.get_path(col);
                }
            }
            matrices.push(m);
        }

        while matrices.len() > 1 && matrices.last().is_some_and(|m| m.num_cols() == 0) {
            matrices.pop();
        }
        matrices
    }

    /// The Morse resolution of the ideal.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_resolution(&mut self) -> Result<Vec<DenseMatrix<SparsePoly<F>>>, MillError> {
        let general = self.compute_general_basis();
        let mut map = self.compute_basic_graph(&general)?;
        self.direct_morse_reduction(&mut map)?;
        let matrices = self.maps_as_matrices(&map, &general);
        let (hits, misses) = self.container.stats();
        info!(
            basis = self.basis.len(),
            critical = general.len(),
            maps = matrices.len(),
            cache_hits = hits,
            cache_misses = misses,
            "computed Morse resolution"
        );
        Ok(matrices)
    }

    /// The Morse resolution with every unit entry pruned away.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_minimal_resolution(
        &mut self,
    ) -> Result<Vec<DenseMatrix<SparsePoly<F>>>, MillError> {
        let mut minimizer = ResolutionMinimization::new(self.compute_resolution()?);
        minimizer.minimize();
        Ok(minimizer.into_matrices())
    }

    /// Graded Betti numbers of `P/I`.
    ///
    /// The number of critical elements in each bidegree is corrected by the
    /// ranks of the scalar blocks of the reduced differential entering and
    /// leaving that bidegree.
    ///
    /// # Errors
    ///
    /// Propagates failures of the standard representation.
    pub fn compute_betti_numbers(&mut self) -> Result<BettiDiagram, MillError>
    where
        F: Send + Sync,
    {
        let general = self.compute_general_basis();
        let mut map = self.compute_basic_constant_graph(&general)?;
        self.constant_direct_morse_reduction(&mut map)?;

        let mut blocks: FxHashMap<(usize, u32), Vec<&MorseElement>> = FxHashMap::default();
        for e in &general {
            blocks
                .entry((e.count_wedge_basis(), e.internal_degree()))
                .or_default()
                .push(e);
        }

        // rank of the scalar block F_i -> F_{i-1} in internal degree j
        let mut keys: Vec<(usize, u32)> = blocks.keys().copied().filter(|(i, _)| *i > 0).collect();
        keys.sort_unstable();
        let ranks: FxHashMap<(usize, u32), usize> = keys
            .par_iter()
            .map(|&(i, j)| {
                let rank = blocks.get(&(i - 1, j)).map_or(0, |rows| {
                    scalar_block(&map, rows, &blocks[&(i, j)]).rank()
                });
                ((i, j), rank)
            })
            .collect();

        let entries = blocks.iter().map(|(&(i, j), cells)| {
            let outgoing = ranks.get(&(i, j)).copied().unwrap_or(0);
            let incoming = ranks.get(&(i + 1, j)).copied().unwrap_or(0);
            ((i, j), cells.len().saturating_sub(outgoing + incoming))
        });
        let diagram = BettiDiagram::from_ideal_betti(entries);
        info!(
            projective_dimension = diagram.projective_dimension(),
            regularity = diagram.regularity(),
            "computed Betti numbers"
        );
        Ok(diagram)
    }

    /// Critical element counts per bidegree, without rank corrections.
    #[must_use]
    pub fn compute_pseudo_betti_numbers(&self) -> BettiDiagram {
        let mut counts: FxHashMap<(usize, u32), usize> = FxHashMap::default();
        for e in self.compute_general_basis() {
            *counts
                .entry((e.count_wedge_basis(), e.internal_degree()))
                .or_default() += 1;
        }
        BettiDiagram::from_ideal_betti(counts)
    }
}

fn critical_levels(general: &[MorseElement]) -> Vec<Vec<&MorseElement>> {
    let mut levels: Vec<Vec<&MorseElement>> = Vec::new();
    for e in general.iter().filter(|e| e.is_basis_element()) {
        let i = e.count_wedge_basis();
        if levels.len() <= i {
            levels.resize_with(i + 1, Vec::new);
        }
        levels[i].push(e);
    }
    levels
}

fn scalar_block<F: Field>(
    map: &ResolutionMap<F>,
    rows: &[&MorseElement],
    cols: &[&MorseElement],
) -> DenseMatrix<F> {
    let mut m = DenseMatrix::zeros(rows.len(), cols.len());
    for (r, row) in rows.iter().enumerate() {
        if let Some(paths) = map.get(*row) {
            for (c, col) in cols.iter().enumerate() {
                m[(r, c)] = paths.get_path(col);
            }
        }
    }
    m
}

fn critical_wedges<F: Field>(entry: &BasisEntry<F>) -> Vec<VarMask> {
    (0..=entry.non_mult.count())
        .flat_map(|size| entry.non_mult.subsets_of_size(size))
        .collect()
}

//! Incoming edges of a single vertex in the Morse graph.

use std::collections::BTreeMap;

use involute_rings::Ring;

use crate::morse_element::MorseElement;

/// The weighted sources pointing at one Morse element.
///
/// An entry `(s, w)` means the differential of the critical cell `s`
/// contains `w` times the owning element. Zero weights are never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorsePaths<C> {
    paths: BTreeMap<MorseElement, C>,
}

impl<C> Default for MorsePaths<C> {
    fn default() -> Self {
        Self {
            paths: BTreeMap::new(),
        }
    }
}

impl<C: Ring> MorsePaths<C> {
    /// No incoming edges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to the edge from `source`, dropping it if it cancels.
    pub fn add_path(&mut self, source: MorseElement, weight: C) {
        if weight.is_zero() {
            return;
        }
        match self.paths.get_mut(&source) {
            Some(existing) => {
                let sum = existing.clone() + weight;
                if sum.is_zero() {
                    self.paths.remove(&source);
                } else {
                    *existing = sum;
                }
            }
            None => {
                self.paths.insert(source, weight);
            }
        }
    }

    /// The weight of the edge from `source`, zero if absent.
    #[must_use]
    pub fn get_path(&self, source: &MorseElement) -> C {
        self.paths.get(source).cloned().unwrap_or_else(C::zero)
    }

    /// All edges, ordered by source.
    pub fn paths(&self) -> impl Iterator<Item = (&MorseElement, &C)> {
        self.paths.iter()
    }

    /// Number of stored edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if nothing points here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

//! Memoized standard representations.
//!
//! The same products `x_v * m * h` come up again and again while the Morse
//! graph is reduced, so involutive reduction results are cached by the
//! polynomial being represented.

use rustc_hash::FxHashMap;
use tracing::trace;

use involute_janet::{InvolutiveMill, MillError};
use involute_poly::SparsePoly;
use involute_rings::Field;

/// Cache of standard representations with respect to one mill.
pub struct StandardRepresentationContainer<'a, F: Field> {
    mill: &'a InvolutiveMill<F>,
    cache: FxHashMap<SparsePoly<F>, Vec<SparsePoly<F>>>,
    hits: usize,
    misses: usize,
}

impl<'a, F: Field> StandardRepresentationContainer<'a, F> {
    /// An empty cache over `mill`.
    #[must_use]
    pub fn new(mill: &'a InvolutiveMill<F>) -> Self {
        Self {
            mill,
            cache: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// The mill whose basis the representations refer to.
    #[must_use]
    pub fn mill(&self) -> &'a InvolutiveMill<F> {
        self.mill
    }

    /// The standard representation of `f`, one coefficient per basis element.
    ///
    /// # Errors
    ///
    /// Propagates [`MillError::NotInIdeal`] when `f` is outside the ideal.
    pub fn standard_representation(
        &mut self,
        f: &SparsePoly<F>,
    ) -> Result<&[SparsePoly<F>], MillError> {
        if self.cache.contains_key(f) {
            self.hits += 1;
        } else {
            self.misses += 1;
            trace!(poly = %f, "computing standard representation");
            let rep = self.mill.standard_representation(f)?;
            self.cache.insert(f.clone(), rep);
        }
        Ok(self.cache.get(f).map_or(&[][..], Vec::as_slice))
    }

    /// Number of cached representations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Lookups answered from the cache and lookups that had to reduce.
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// Drops every cached representation.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use involute_poly::{Monomial, MonomialOrder};
    use involute_rings::Q;

    #[test]
    fn test_cache_reuses_representations() {
        let gens = vec![
            SparsePoly::var(0, 2, MonomialOrder::Grevlex),
            SparsePoly::var(1, 2, MonomialOrder::Grevlex),
        ];
        let mill = InvolutiveMill::<Q>::from_generators(gens).unwrap();
        let mut container = StandardRepresentationContainer::new(&mill);

        let f = SparsePoly::monomial(
            Monomial::new(&[1, 1]),
            Q::from_i64(1),
            2,
            MonomialOrder::Grevlex,
        );
        let first = container.standard_representation(&f).unwrap().to_vec();
        let second = container.standard_representation(&f).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), mill.len());
        assert_eq!(container.stats(), (1, 1));
        assert_eq!(container.len(), 1);

        container.clear();
        assert!(container.is_empty());
    }

    #[test]
    fn test_outside_ideal_is_an_error() {
        let gens = vec![SparsePoly::var(0, 2, MonomialOrder::Grevlex)];
        let mill = InvolutiveMill::<Q>::from_generators(gens).unwrap();
        let mut container = StandardRepresentationContainer::new(&mill);
        let y = SparsePoly::var(1, 2, MonomialOrder::Grevlex);
        assert!(matches!(
            container.standard_representation(&y),
            Err(MillError::NotInIdeal(_))
        ));
    }
}

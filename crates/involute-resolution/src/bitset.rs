//! Fixed-length bit masks over the variables of the polynomial ring.
//!
//! A mask encodes a subset of `{0, ..., n-1}`; it is used both for the
//! exterior (wedge) part of a Morse element and for the non-multiplicative
//! variables of a basis element. Read as a squarefree monomial, the set
//! `{i, j}` stands for `x_i * x_j`.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

use involute_poly::Monomial;

const BITS: usize = 64;

/// A subset of the variable indices `0..len`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VarMask {
    len: usize,
    blocks: SmallVec<[u64; 1]>,
}

impl VarMask {
    /// The empty subset of `0..len`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            blocks: SmallVec::from_elem(0, len.div_ceil(BITS)),
        }
    }

    /// Builds a mask from one flag per variable.
    #[must_use]
    pub fn from_bools(flags: &[bool]) -> Self {
        Self::from_indices(
            flags.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i),
            flags.len(),
        )
    }

    /// Builds a mask containing exactly `indices`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = usize>, len: usize) -> Self {
        let mut mask = Self::new(len);
        for i in indices {
            mask.set(i, true);
        }
        mask
    }

    /// The variables dividing `m`.
    #[must_use]
    pub fn from_monomial_support(m: &Monomial, len: usize) -> Self {
        Self::from_indices(m.support(), len)
    }

    /// Number of variables the mask ranges over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the mask ranges over no variables at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Membership test; indices past the end are never set.
    #[must_use]
    pub fn test(&self, i: usize) -> bool {
        i < self.len && self.blocks[i / BITS] >> (i % BITS) & 1 == 1
    }

    /// Sets or clears bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len, "bit {i} out of range for mask of length {}", self.len);
        let bit = 1u64 << (i % BITS);
        if value {
            self.blocks[i / BITS] |= bit;
        } else {
            self.blocks[i / BITS] &= !bit;
        }
    }

    /// Toggles bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    pub fn flip(&mut self, i: usize) {
        let current = self.test(i);
        self.set(i, !current);
    }

    /// Returns a copy with bit `i` toggled.
    #[must_use]
    pub fn flipped(&self, i: usize) -> Self {
        let mut mask = self.clone();
        mask.flip(i);
        mask
    }

    /// The complement within `0..len`.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self::from_indices((0..self.len).filter(|&i| !self.test(i)), self.len)
    }

    /// Number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns true if no bit is set.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Set indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(|&i| self.test(i))
    }

    /// Largest set index.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.blocks.iter().enumerate().rev().find_map(|(k, &b)| {
            (b != 0).then(|| k * BITS + (BITS - 1 - b.leading_zeros() as usize))
        })
    }

    /// Returns true if every set bit of `self` is set in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.blocks
            .iter()
            .zip(other.blocks.iter().chain(std::iter::repeat(&0)))
            .all(|(a, b)| a & !b == 0)
    }

    /// Bits set in both masks.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            len: self.len,
            blocks: self
                .blocks
                .iter()
                .zip(other.blocks.iter().chain(std::iter::repeat(&0)))
                .map(|(a, b)| a & b)
                .collect(),
        }
    }

    /// Number of set bits with index strictly below `i`.
    #[must_use]
    pub fn count_below(&self, i: usize) -> usize {
        let i = i.min(self.len);
        let full = i / BITS;
        let mut total: usize = self.blocks[..full]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum();
        let rest = i % BITS;
        if rest > 0 {
            total += (self.blocks[full] & ((1u64 << rest) - 1)).count_ones() as usize;
        }
        total
    }

    /// Number of set bits with index strictly between `i` and `j`.
    #[must_use]
    pub fn count_between(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        if hi == lo {
            return 0;
        }
        self.count_below(hi) - self.count_below(lo + 1)
    }

    /// The squarefree monomial `prod_{i in mask} x_i`.
    #[must_use]
    pub fn to_monomial(&self) -> Monomial {
        let exps: Vec<u16> = (0..self.len).map(|i| u16::from(self.test(i))).collect();
        Monomial::new(&exps)
    }

    /// Degree reverse lex comparison of the squarefree monomials.
    ///
    /// Larger sets are larger; among equal sizes the set containing the
    /// highest index where the two differ is the smaller one.
    #[must_use]
    pub fn cmp_revlex(&self, other: &Self) -> Ordering {
        match self.count().cmp(&other.count()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let n = self.blocks.len().max(other.blocks.len());
        for k in (0..n).rev() {
            let a = self.blocks.get(k).copied().unwrap_or(0);
            let b = other.blocks.get(k).copied().unwrap_or(0);
            let diff = a ^ b;
            if diff != 0 {
                let top = 1u64 << (BITS - 1 - diff.leading_zeros() as usize);
                return if a & top != 0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }
        Ordering::Equal
    }

    /// All subsets of this mask with exactly `size` elements.
    ///
    /// Subsets come out in lexicographic order of their sorted index lists.
    #[must_use]
    pub fn subsets_of_size(&self, size: usize) -> Vec<VarMask> {
        let elements: Vec<usize> = self.indices().collect();
        let mut out = Vec::new();
        let mut chosen = Vec::with_capacity(size);
        self.collect_subsets(&elements, 0, size, &mut chosen, &mut out);
        out
    }

    fn collect_subsets(
        &self,
        elements: &[usize],
        start: usize,
        size: usize,
        chosen: &mut Vec<usize>,
        out: &mut Vec<VarMask>,
    ) {
        if chosen.len() == size {
            out.push(Self::from_indices(chosen.iter().copied(), self.len));
            return;
        }
        for pos in start..elements.len() {
            if elements.len() - pos < size - chosen.len() {
                break;
            }
            chosen.push(elements[pos]);
            self.collect_subsets(elements, pos + 1, size, chosen, out);
            chosen.pop();
        }
    }
}

impl fmt::Debug for VarMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for VarMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, i) in self.indices().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{i}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_test() {
        let mut mask = VarMask::new(70);
        mask.set(3, true);
        mask.set(65, true);
        assert!(mask.test(3));
        assert!(mask.test(65));
        assert!(!mask.test(4));
        assert!(!mask.test(200));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.max_index(), Some(65));
        mask.flip(3);
        assert!(!mask.test(3));
        assert_eq!(mask.indices().collect::<Vec<_>>(), vec![65]);
    }

    #[test]
    fn test_from_bools_and_complement() {
        let mask = VarMask::from_bools(&[true, false, true]);
        assert_eq!(mask.indices().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(mask.complement().indices().collect::<Vec<_>>(), vec![1]);
        assert!(VarMask::new(5).is_all_zero());
        assert_eq!(VarMask::new(5).max_index(), None);
    }

    #[test]
    fn test_counting() {
        let mask = VarMask::from_indices([0, 2, 3, 5], 6);
        assert_eq!(mask.count_below(3), 2);
        assert_eq!(mask.count_between(0, 5), 2);
        assert_eq!(mask.count_between(5, 0), 2);
        assert_eq!(mask.count_between(2, 3), 0);
        assert_eq!(mask.count_between(4, 4), 0);
    }

    #[test]
    fn test_subset_and_intersection() {
        let a = VarMask::from_indices([1, 2], 4);
        let b = VarMask::from_indices([0, 1, 2], 4);
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
        assert_eq!(b.intersection(&VarMask::from_indices([2, 3], 4)), VarMask::from_indices([2], 4));
    }

    #[test]
    fn test_monomial_conversion() {
        let mask = VarMask::from_indices([0, 2], 3);
        assert_eq!(mask.to_monomial(), Monomial::new(&[1, 0, 1]));
        let support = VarMask::from_monomial_support(&Monomial::new(&[0, 3, 1]), 3);
        assert_eq!(support, VarMask::from_indices([1, 2], 3));
    }

    #[test]
    fn test_revlex_matches_grevlex() {
        let a = VarMask::from_indices([0, 1], 3);
        let b = VarMask::from_indices([0, 2], 3);
        assert_eq!(a.cmp_revlex(&b), a.to_monomial().cmp_grevlex(&b.to_monomial()));
        assert_eq!(a.cmp_revlex(&b), Ordering::Greater);
        let c = VarMask::from_indices([2], 3);
        assert_eq!(c.cmp_revlex(&a), Ordering::Less);
    }

    #[test]
    fn test_subsets_of_size() {
        let mask = VarMask::from_indices([0, 2, 3], 4);
        let pairs: Vec<Vec<usize>> = mask
            .subsets_of_size(2)
            .iter()
            .map(|s| s.indices().collect())
            .collect();
        assert_eq!(pairs, vec![vec![0, 2], vec![0, 3], vec![2, 3]]);
        assert_eq!(mask.subsets_of_size(0), vec![VarMask::new(4)]);
        assert!(mask.subsets_of_size(4).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(VarMask::from_indices([1, 3], 4).to_string(), "{1,3}");
    }
}

use std::{collections::BTreeSet, hash::Hash};

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A partition groups elements of type `I` into disjoint blocks. During minimization the
/// blocks are the classes of states that are (so far) considered equivalent.
///
/// Two partitions are equal if they consist of the same blocks, regardless of the order
/// in which the blocks are stored.
#[derive(Debug, Clone)]
pub struct Partition<I: Hash + Eq>(Vec<BTreeSet<I>>);

impl<I: Hash + Eq> std::ops::Deref for Partition<I> {
    type Target = Vec<BTreeSet<I>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Partition<I> {
    type Item = &'a BTreeSet<I>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I: Hash + Eq> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}
impl<I: Hash + Eq> Eq for Partition<I> {}

impl<I: Hash + Eq + Ord + Clone> Partition<I> {
    /// Returns the size of the partition, i.e. the number of blocks.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Builds a new partition from an iterator that yields iterators which yield
    /// elements of type `I`. Empty blocks are dropped.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(iter: Y) -> Self {
        Self(
            iter.into_iter()
                .map(|it| it.into_iter().collect::<BTreeSet<_>>())
                .filter(|block| !block.is_empty())
                .collect(),
        )
    }

    /// Computes a lookup table that sends every element to the position of the block
    /// containing it.
    pub fn block_lookup(&self) -> Map<I, usize> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, block)| block.iter().map(move |x| (x.clone(), i)))
            .collect()
    }

    /// Returns the position of the block that contains `element`, if there is one.
    pub fn block_of(&self, element: &I) -> Option<usize> {
        self.0.iter().position(|block| block.contains(element))
    }

    /// Verifies that `self` is a partition of the given elements: no block is empty and
    /// every element occurs in exactly one block.
    pub fn is_partition_of<'a, E>(&self, elements: E) -> bool
    where
        I: 'a,
        E: IntoIterator<Item = &'a I>,
    {
        if self.0.iter().any(|block| block.is_empty()) {
            return false;
        }
        let elements: Set<&I> = elements.into_iter().collect();
        let total: usize = self.0.iter().map(|block| block.len()).sum();
        let covered: Set<&I> = self.0.iter().flatten().collect();
        total == covered.len() && covered == elements
    }
}

impl<I: Hash + Eq + Ord> From<Vec<BTreeSet<I>>> for Partition<I> {
    fn from(value: Vec<BTreeSet<I>>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Partition;

    #[test]
    fn partition_equality_ignores_order() {
        let left = Partition::new([vec![0, 1], vec![2], vec![3, 4]]);
        let right = Partition::new([vec![3, 4], vec![1, 0], vec![2]]);
        assert_eq!(left, right);

        let coarser = Partition::new([vec![0, 1, 2], vec![3, 4]]);
        assert_ne!(left, coarser);
    }

    #[test]
    fn empty_blocks_are_dropped() {
        let p = Partition::new([vec![0, 1], vec![], vec![2]]);
        assert_eq!(p.size(), 2);
        assert!(p.is_partition_of(&[0, 1, 2]));
    }

    #[test]
    fn partition_validity() {
        let p = Partition::new([vec!['a', 'b'], vec!['c']]);
        assert!(p.is_partition_of(&['a', 'b', 'c']));
        assert!(!p.is_partition_of(&['a', 'b']));
        assert!(!p.is_partition_of(&['a', 'b', 'c', 'd']));

        let overlapping = Partition::new([vec!['a', 'b'], vec!['b', 'c']]);
        assert!(!overlapping.is_partition_of(&['a', 'b', 'c']));

        let lookup = p.block_lookup();
        assert_eq!(lookup[&'a'], lookup[&'b']);
        assert_ne!(lookup[&'a'], lookup[&'c']);
        assert_eq!(p.block_of(&'c'), Some(lookup[&'c']));
        assert_eq!(p.block_of(&'z'), None);
    }
}

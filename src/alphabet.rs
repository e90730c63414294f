use std::{fmt::Debug, hash::Hash};

use crate::Show;

/// A symbol of an alphabet, which is also the type of the letters of a word that is fed to
/// a [`crate::Dfa`]. Symbols are opaque, we only need to compare, order and hash them.
pub trait Symbol: Clone + Eq + Ord + Hash + Debug + Show {}
impl<S: Clone + Eq + Ord + Hash + Debug + Show> Symbol for S {}

/// A finite alphabet. The symbols are kept sorted and free of duplicates, and this order
/// is what we refer to as the alphabet order, e.g. when computing transition signatures
/// during minimization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet<S>(Vec<S>);

impl<S: Symbol> Alphabet<S> {
    /// Creates a new alphabet from the given symbols, duplicates are removed.
    pub fn new<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut symbols: Vec<_> = symbols.into_iter().collect();
        symbols.sort();
        symbols.dedup();
        Self(symbols)
    }

    /// Returns an iterator over all symbols in the alphabet, in alphabet order.
    pub fn universe(&self) -> std::slice::Iter<'_, S> {
        self.0.iter()
    }

    /// Returns true if the given symbol is present in the alphabet.
    pub fn contains(&self, symbol: &S) -> bool {
        self.0.binary_search(symbol).is_ok()
    }

    /// Returns the position of `symbol` in the alphabet order.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.0.binary_search(symbol).ok()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Combines `self` with `other` into an alphabet containing the symbols of both.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.0.iter().chain(other.0.iter()).cloned())
    }
}

impl Alphabet<char> {
    /// Creates a new alphabet of the given size. The symbols are just the first `size` letters
    /// of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }
}

impl<S> std::ops::Index<usize> for Alphabet<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, S> IntoIterator for &'a Alphabet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: Show> Show for Alphabet<S> {
    fn show(&self) -> String {
        S::show_collection(self.0.iter())
    }
}

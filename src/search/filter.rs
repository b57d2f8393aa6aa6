//! Dictionary pre-pass
//!
//! Drops candidate words containing a letter absent from the board before
//! the trie is built. Pure optimization: the trie-pruned traversal would
//! reject those words anyway because no cell carries the missing letter, so
//! the pre-pass must never change the result set (asserted in the engine
//! tests).

use crate::core::Grid;

/// The set of distinct lowercase letters present on a board, as a 26-bit
/// mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// An empty letter set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Collect the distinct letters of a grid
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut set = Self::empty();
        for letter in grid.letters() {
            set.insert(letter);
        }
        set
    }

    /// Add a lowercase ASCII letter; other bytes are ignored
    pub const fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << (letter - b'a');
        }
    }

    /// Whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// Whether every letter of `word` is in the set
    ///
    /// Bytes outside `a-z` count as absent, so words violating the
    /// lowercase contract are filtered out here just as the trie skips them
    /// at insertion.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        word.bytes().all(|letter| self.contains(letter))
    }

    /// Number of distinct letters in the set
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no letters
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Keep only the dictionary entries spellable from the board's letters
pub fn filter_dictionary<'a, S: AsRef<str>>(
    dictionary: &'a [S],
    letters: LetterSet,
) -> Vec<&'a str> {
    dictionary
        .iter()
        .map(std::convert::AsRef::as_ref)
        .filter(|word| letters.can_spell(word))
        .collect()
}

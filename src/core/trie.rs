//! Dictionary prefix tree
//!
//! Stores the candidate dictionary so the grid traversal can test "does any
//! word continue with this letter?" in O(1) per step. Built once per search
//! and read-only during traversal.

/// A single trie node
///
/// Children are held in a fixed 26-slot array indexed by alphabet position,
/// so a child lookup is one array access. The flag marks whether the path
/// from the root to this node spells a complete dictionary word.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; 26],
    is_word: bool,
}

impl TrieNode {
    /// Get the child for a lowercase ASCII letter, if any word continues
    /// with it
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        if letter.is_ascii_lowercase() {
            self.children[usize::from(letter - b'a')].as_deref()
        } else {
            None
        }
    }

    /// Whether the path from the root to this node is a complete word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }
}

/// A prefix tree over the dictionary
///
/// Owns the root node exclusively; only insertion is exposed, and only
/// during the build phase. There is no removal operation.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a word iterator
    ///
    /// # Examples
    /// ```
    /// use gridhunt::core::Trie;
    ///
    /// let trie = Trie::from_words(["cat", "cats"]);
    /// assert_eq!(trie.word_count(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, creating missing nodes along its path
    ///
    /// The input contract is a nonempty sequence of lowercase ASCII letters;
    /// callers sanitize upstream (see `wordlists::loader`). Words violating
    /// the contract are skipped entirely, so they silently fail to match
    /// rather than corrupting the tree.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return;
        }

        let mut node = &mut self.root;
        for letter in word.bytes() {
            node = node.children[usize::from(letter - b'a')].get_or_insert_default();
        }

        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// The root node (the empty prefix)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words inserted
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Check whether a word was inserted
    ///
    /// Walks the tree letter by letter; used by tests and callers that want
    /// membership without a grid search.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for letter in word.bytes() {
            match node.child(letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word
    }
}

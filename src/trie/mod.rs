//! Character trie over the vocabulary
//!
//! Encodes the word set as a character-keyed tree and answers adjacency
//! queries by wildcard traversal, without ever materializing the word graph.

mod adjacency;
mod node;

pub use adjacency::AdjacentWords;
pub use node::TrieNode;

use crate::core::Word;
use std::fmt;

/// Error type for trie operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    DuplicateWord(String),
    MissingChild(char),
    DuplicateChild(char),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateWord(word) => write!(f, "Word '{word}' already exists"),
            Self::MissingChild(c) => write!(f, "No child node for character '{c}'"),
            Self::DuplicateChild(c) => write!(f, "Child node for character '{c}' already exists"),
        }
    }
}

impl std::error::Error for TrieError {}

/// The vocabulary trie
///
/// Built once during ingestion, then shared read-only by the adjacency
/// oracle and the searches. Lookups never mutate the structure.
#[derive(Debug, Clone, Default)]
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

    /// Number of complete words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the trie stores no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Root node (shared access, used by the adjacency oracle)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert a word into the trie
    ///
    /// Creates internal nodes along the path and marks the final node
    /// terminal, promoting an existing internal node in place.
    ///
    /// # Errors
    /// Returns `TrieError::DuplicateWord` if the word is already present and
    /// `fail_on_duplicate` is set; with the flag clear a duplicate insert is
    /// a no-op.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// let word = Word::new("time").unwrap();
    /// trie.insert(&word, true).unwrap();
    ///
    /// assert!(trie.contains(&word));
    /// assert!(trie.insert(&word, true).is_err());
    /// ```
    pub fn insert(&mut self, word: &Word, fail_on_duplicate: bool) -> Result<(), TrieError> {
        let mut current = &mut self.root;
        for &character in word.bytes() {
            current = current
                .children_mut()
                .entry(character)
                .or_insert_with(TrieNode::internal);
        }

        if current.is_terminal() {
            if fail_on_duplicate {
                return Err(TrieError::DuplicateWord(word.text().to_string()));
            }
            return Ok(());
        }

        current.promote();
        self.word_count += 1;
        Ok(())
    }

    /// Whether the word is stored as a complete word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let mut current = &self.root;
        for &character in word.bytes() {
            match current.get(character) {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.is_terminal()
    }

    /// Lazily enumerate words adjacent to `word`
    ///
    /// Yields every stored word of the same length differing from `word` in
    /// exactly one character position. The word itself is never yielded. The
    /// sequence order follows wildcard position, then child-map iteration
    /// order; callers needing a stable order must sort.
    #[must_use]
    pub fn adjacent_words(&self, word: &Word) -> AdjacentWords<'_> {
        AdjacentWords::new(self, word.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut trie = Trie::new();
        trie.insert(&word("time"), true).unwrap();
        trie.insert(&word("tame"), true).unwrap();

        assert!(trie.contains(&word("time")));
        assert!(trie.contains(&word("tame")));
        assert!(!trie.contains(&word("lime")));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn prefix_is_not_a_word() {
        let mut trie = Trie::new();
        trie.insert(&word("times"), true).unwrap();

        assert!(!trie.contains(&word("time")));
        assert!(trie.contains(&word("times")));
    }

    #[test]
    fn inserting_prefix_promotes_existing_node() {
        let mut trie = Trie::new();
        trie.insert(&word("times"), true).unwrap();
        trie.insert(&word("time"), true).unwrap();

        // The promoted node keeps its subtree
        assert!(trie.contains(&word("time")));
        assert!(trie.contains(&word("times")));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn duplicate_insert_fails_when_requested() {
        let mut trie = Trie::new();
        trie.insert(&word("time"), true).unwrap();

        assert_eq!(
            trie.insert(&word("time"), true),
            Err(TrieError::DuplicateWord("time".to_string()))
        );
    }

    #[test]
    fn duplicate_insert_is_noop_when_allowed() {
        let mut trie = Trie::new();
        trie.insert(&word("time"), false).unwrap();
        trie.insert(&word("time"), false).unwrap();

        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn empty_trie_has_no_words() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.contains(&word("a")));
    }
}

//! Vocabulary ingestion
//!
//! Builds the trie and the substitution statistics from a word sequence.
//! Each accepted word is inserted exactly once; before insertion the
//! adjacency oracle is queried against the already-accepted words, and every
//! discovered edge is recorded in the statistics in both ordered directions,
//! so the tables do not depend on insertion order.

use crate::core::{Word, single_substitution};
use crate::scoring::SubstitutionStats;
use crate::trie::{Trie, TrieError};

/// A built vocabulary: trie, word list, and substitution statistics
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    trie: Trie,
    words: Vec<Word>,
    stats: SubstitutionStats,
}

impl Vocabulary {
    /// Build a vocabulary from candidate words
    ///
    /// Words rejected by `should_include` and duplicates are skipped.
    ///
    /// # Errors
    /// Returns `TrieError` if an insertion fails.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::wordlists::Vocabulary;
    ///
    /// let words = ["cat", "cot", "cogs"]
    ///     .iter()
    ///     .map(|s| Word::new(*s).unwrap());
    /// let vocabulary = Vocabulary::build(words, |w| w.len() == 3).unwrap();
    ///
    /// assert_eq!(vocabulary.len(), 2);
    /// ```
    pub fn build<I, F>(candidates: I, mut should_include: F) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = Word>,
        F: FnMut(&Word) -> bool,
    {
        let mut trie = Trie::new();
        let mut words = Vec::new();
        let mut stats = SubstitutionStats::new();

        for word in candidates {
            if !should_include(&word) || trie.contains(&word) {
                continue;
            }

            // The trie holds exactly the already-accepted words at this
            // point, so the oracle yields edges into the accepted set
            let neighbors: Vec<Word> = trie.adjacent_words(&word).collect();
            for neighbor in &neighbors {
                let into = single_substitution(neighbor, &word)
                    .expect("adjacent words differ in exactly one position");
                let out_of = single_substitution(&word, neighbor)
                    .expect("adjacent words differ in exactly one position");
                stats.record(into);
                stats.record(out_of);
            }

            trie.insert(&word, true)?;
            words.push(word);
        }

        Ok(Self { trie, words, stats })
    }

    /// The adjacency trie
    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Accepted words, in acceptance order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Substitution frequency statistics over the accepted words
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &SubstitutionStats {
        &self.stats
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were accepted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a word was accepted into the vocabulary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.trie.contains(word)
    }
}

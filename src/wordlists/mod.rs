//! Word lists and vocabulary ingestion
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and vocabulary construction (trie plus substitution statistics).

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{WORDS, WORDS_COUNT};
pub use vocabulary::Vocabulary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty(), "empty line in embedded list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn embedded_list_covers_common_ladder_lengths() {
        for length in [3, 4] {
            let count = WORDS.iter().filter(|w| w.len() == length).count();
            assert!(count > 50, "only {count} embedded words of length {length}");
        }
    }
}

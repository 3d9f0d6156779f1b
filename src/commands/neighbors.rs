//! Neighbor listing command
//!
//! Lists the vocabulary words adjacent to a query word.

use crate::core::Word;
use crate::wordlists::Vocabulary;

/// Result of a neighbor query
pub struct NeighborsResult {
    pub word: Word,
    pub neighbors: Vec<Word>,
    pub in_vocabulary: bool,
}

/// List the words adjacent to `word`, sorted alphabetically
///
/// The query word itself need not be in the vocabulary.
///
/// # Errors
///
/// Returns an error if `word` is not a valid word.
pub fn run_neighbors(word: &str, vocabulary: &Vocabulary) -> Result<NeighborsResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word '{word}': {e}"))?;

    let mut neighbors: Vec<Word> = vocabulary.trie().adjacent_words(&word).collect();
    neighbors.sort();

    let in_vocabulary = vocabulary.contains(&word);
    Ok(NeighborsResult {
        word,
        neighbors,
        in_vocabulary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(words: &[&str]) -> Vocabulary {
        let words = words.iter().map(|w| Word::new(*w).unwrap());
        Vocabulary::build(words, |_| true).unwrap()
    }

    #[test]
    fn neighbors_are_sorted() {
        let vocabulary = vocabulary(&["limb", "line", "lime", "time", "timo", "tame", "tile"]);

        let result = run_neighbors("time", &vocabulary).unwrap();
        let texts: Vec<&str> = result.neighbors.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["lime", "tame", "tile", "timo"]);
        assert!(result.in_vocabulary);
    }

    #[test]
    fn unknown_query_word_is_allowed() {
        let vocabulary = vocabulary(&["cot", "bat"]);

        let result = run_neighbors("cat", &vocabulary).unwrap();
        assert!(!result.in_vocabulary);
        assert_eq!(result.neighbors.len(), 2);
    }

    #[test]
    fn invalid_word_rejected() {
        let vocabulary = vocabulary(&["cat"]);
        assert!(run_neighbors("", &vocabulary).is_err());
        assert!(run_neighbors("c4t", &vocabulary).is_err());
    }
}

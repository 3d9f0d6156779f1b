//! Path finding command
//!
//! Runs one search algorithm for a source/destination pair and returns the
//! path with its exploration statistics.

use crate::core::Word;
use crate::scoring::{PriorityCalculator, Weights};
use crate::search::{Algorithm, PathFinder, SearchOutcome};
use crate::wordlists::Vocabulary;
use std::time::{Duration, Instant};

/// Configuration for a path search
pub struct FindConfig {
    pub source: String,
    pub destination: String,
    pub algorithm: Algorithm,
    pub weights: Weights,
}

impl FindConfig {
    #[must_use]
    pub fn new(source: String, destination: String) -> Self {
        Self {
            source,
            destination,
            algorithm: Algorithm::Informed,
            weights: Weights::default(),
        }
    }
}

/// Result of a path search
pub struct FindResult {
    pub source: Word,
    pub destination: Word,
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

/// Result of a longest-path search
pub struct LongestResult {
    pub source: Word,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

/// Run a directed path search
///
/// # Errors
///
/// Returns an error if either endpoint is invalid or absent from the
/// vocabulary, if the endpoints are incompatible (equal or mismatched in
/// length), or if the weight configuration is all zero.
pub fn run_find(config: &FindConfig, vocabulary: &Vocabulary) -> Result<FindResult, String> {
    let source = parse_member(&config.source, vocabulary)?;
    let destination = parse_member(&config.destination, vocabulary)?;

    let stats = vocabulary.stats();
    // No simple path can be longer than the vocabulary itself
    let max_distance = vocabulary.len().max(1);
    let calculator = PriorityCalculator::new(max_distance, config.weights, stats)
        .map_err(|e| e.to_string())?;
    let finder = PathFinder::new(vocabulary.trie(), calculator);

    let start = Instant::now();
    let outcome = match config.algorithm {
        Algorithm::Informed => finder.find_informed(&source, &destination),
        Algorithm::Shortest => finder.find_shortest(&source, &destination),
        Algorithm::Bidirectional => finder.find_bidirectional(&source, &destination),
        // Longest ignores the destination; it explores from the source only
        Algorithm::Longest => Ok(finder.find_longest(&source)),
    }
    .map_err(|e| e.to_string())?;
    let duration = start.elapsed();

    Ok(FindResult {
        source,
        destination,
        algorithm: config.algorithm,
        outcome,
        duration,
    })
}

/// Run the exhaustive longest-path search from a source word
///
/// # Errors
///
/// Returns an error if the source is invalid or absent from the vocabulary.
pub fn run_longest(
    source: &str,
    weights: Weights,
    vocabulary: &Vocabulary,
) -> Result<LongestResult, String> {
    let source = parse_member(source, vocabulary)?;

    let max_distance = vocabulary.len().max(1);
    let calculator = PriorityCalculator::new(max_distance, weights, vocabulary.stats())
        .map_err(|e| e.to_string())?;
    let finder = PathFinder::new(vocabulary.trie(), calculator);

    let start = Instant::now();
    let outcome = finder.find_longest(&source);
    let duration = start.elapsed();

    Ok(LongestResult {
        source,
        outcome,
        duration,
    })
}

fn parse_member(text: &str, vocabulary: &Vocabulary) -> Result<Word, String> {
    let word = Word::new(text).map_err(|e| format!("Invalid word '{text}': {e}"))?;
    if !vocabulary.contains(&word) {
        return Err(format!("Word '{word}' is not in the vocabulary"));
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(words: &[&str]) -> Vocabulary {
        let words = words.iter().map(|w| Word::new(*w).unwrap());
        Vocabulary::build(words, |_| true).unwrap()
    }

    #[test]
    fn find_runs_each_algorithm() {
        let vocabulary = vocabulary(&["cold", "cord", "card", "ward", "warm"]);

        for algorithm in [
            Algorithm::Informed,
            Algorithm::Shortest,
            Algorithm::Bidirectional,
        ] {
            let mut config = FindConfig::new("cold".to_string(), "warm".to_string());
            config.algorithm = algorithm;

            let result = run_find(&config, &vocabulary).unwrap();
            assert!(result.outcome.found(), "{algorithm} found no path");
            assert_eq!(result.outcome.path.len(), 5);
        }
    }

    #[test]
    fn find_rejects_unknown_words() {
        let vocabulary = vocabulary(&["cat", "cot"]);

        let config = FindConfig::new("cat".to_string(), "zzz".to_string());
        let result = run_find(&config, &vocabulary);
        assert!(result.is_err());
    }

    #[test]
    fn find_rejects_invalid_words() {
        let vocabulary = vocabulary(&["cat", "cot"]);

        let config = FindConfig::new("c4t".to_string(), "cot".to_string());
        assert!(run_find(&config, &vocabulary).is_err());
    }

    #[test]
    fn find_rejects_equal_endpoints() {
        let vocabulary = vocabulary(&["cat", "cot"]);

        let config = FindConfig::new("cat".to_string(), "cat".to_string());
        assert!(run_find(&config, &vocabulary).is_err());
    }

    #[test]
    fn longest_returns_the_chain() {
        let vocabulary = vocabulary(&["cat", "cot", "cog", "dog"]);

        let result = run_longest("cat", Weights::default(), &vocabulary).unwrap();
        assert_eq!(result.outcome.path.len(), 4);
        assert_eq!(result.source.text(), "cat");
    }

    #[test]
    fn reports_no_path_without_failing() {
        let vocabulary = vocabulary(&["time", "wolf", "golf"]);

        let config = FindConfig::new("time".to_string(), "golf".to_string());
        let result = run_find(&config, &vocabulary).unwrap();
        assert!(!result.outcome.found());
    }
}

//! Algorithm comparison command
//!
//! Runs the three destination-directed algorithms on the same pair and
//! reports path lengths and exploration costs side by side. Makes the
//! informed search's non-optimal early exit observable against the two
//! optimal searches.

use super::find::{FindConfig, run_find};
use crate::core::Word;
use crate::scoring::Weights;
use crate::search::{Algorithm, SearchOutcome};
use crate::wordlists::Vocabulary;
use std::time::Duration;

/// One algorithm's row in the comparison
pub struct CompareRow {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

/// Result of comparing all directed algorithms on one pair
pub struct CompareResult {
    pub source: Word,
    pub destination: Word,
    pub rows: Vec<CompareRow>,
}

/// Run informed, shortest and bidirectional searches on the same pair
///
/// # Errors
///
/// Returns an error if the endpoints are invalid, absent from the
/// vocabulary, or incompatible.
pub fn run_compare(
    source: &str,
    destination: &str,
    weights: Weights,
    vocabulary: &Vocabulary,
) -> Result<CompareResult, String> {
    let mut rows = Vec::new();
    let mut endpoints: Option<(Word, Word)> = None;

    for algorithm in [
        Algorithm::Informed,
        Algorithm::Shortest,
        Algorithm::Bidirectional,
    ] {
        let mut config = FindConfig::new(source.to_string(), destination.to_string());
        config.algorithm = algorithm;
        config.weights = weights;

        let result = run_find(&config, vocabulary)?;
        endpoints.get_or_insert((result.source, result.destination));
        rows.push(CompareRow {
            algorithm,
            outcome: result.outcome,
            duration: result.duration,
        });
    }

    let (source, destination) = endpoints.ok_or_else(|| "No algorithms ran".to_string())?;
    Ok(CompareResult {
        source,
        destination,
        rows,
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
    fn compare_runs_three_algorithms() {
        let vocabulary = vocabulary(&["cold", "cord", "card", "ward", "warm"]);

        let result = run_compare("cold", "warm", Weights::default(), &vocabulary).unwrap();
        assert_eq!(result.rows.len(), 3);
        for row in &result.rows {
            assert!(row.outcome.found());
        }
    }

    #[test]
    fn optimal_algorithms_agree_on_length() {
        let vocabulary = vocabulary(&[
            "time", "tile", "tale", "tame", "lime", "lame", "line", "lane",
        ]);

        let result = run_compare("time", "lane", Weights::default(), &vocabulary).unwrap();
        let shortest = result
            .rows
            .iter()
            .find(|r| r.algorithm == Algorithm::Shortest)
            .unwrap();
        let bidirectional = result
            .rows
            .iter()
            .find(|r| r.algorithm == Algorithm::Bidirectional)
            .unwrap();
        assert_eq!(
            shortest.outcome.path.len(),
            bidirectional.outcome.path.len()
        );
    }

    #[test]
    fn compare_propagates_endpoint_errors() {
        let vocabulary = vocabulary(&["cat", "cot"]);
        assert!(run_compare("cat", "cat", Weights::default(), &vocabulary).is_err());
        assert!(run_compare("cat", "zzz", Weights::default(), &vocabulary).is_err());
    }
}

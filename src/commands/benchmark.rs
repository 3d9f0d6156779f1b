//! Benchmark command
//!
//! Measures search performance across randomly sampled word pairs. Pairs are
//! evaluated in parallel; the trie and statistics are shared read-only, and
//! every search call owns its working state, so this stays within the
//! single-threaded contract of the individual algorithms.

use crate::core::Word;
use crate::scoring::{PriorityCalculator, Weights};
use crate::search::{Algorithm, PathFinder};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub pairs_tested: usize,
    pub solved: usize,
    pub average_path_words: f64,
    pub average_edges: f64,
    pub max_edges: u64,
    pub path_length_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Outcome summary for one benchmarked pair
struct PairOutcome {
    found: bool,
    path_words: usize,
    edges_explored: u64,
}

/// Run a benchmark over randomly sampled word pairs
///
/// Pairs are drawn without replacement within each pair; a vocabulary with
/// fewer than two words yields an empty result.
#[must_use]
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    algorithm: Algorithm,
    pair_count: usize,
    weights: Weights,
) -> BenchmarkResult {
    let pairs = sample_pairs(vocabulary.words(), pair_count);

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let max_distance = vocabulary.len().max(1);
    let start = Instant::now();

    let outcomes: Vec<PairOutcome> = pairs
        .par_iter()
        .map(|(source, destination)| {
            let result = search_pair(vocabulary, algorithm, max_distance, weights, source, destination);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    summarize(&outcomes, duration)
}

fn search_pair(
    vocabulary: &Vocabulary,
    algorithm: Algorithm,
    max_distance: usize,
    weights: Weights,
    source: &Word,
    destination: &Word,
) -> PairOutcome {
    let calculator = PriorityCalculator::new(max_distance, weights, vocabulary.stats())
        .expect("benchmark weights validated by the caller");
    let finder = PathFinder::new(vocabulary.trie(), calculator);

    let outcome = match algorithm {
        Algorithm::Informed => finder.find_informed(source, destination),
        Algorithm::Shortest => finder.find_shortest(source, destination),
        Algorithm::Bidirectional => finder.find_bidirectional(source, destination),
        Algorithm::Longest => Ok(finder.find_longest(source)),
    };

    match outcome {
        Ok(outcome) => PairOutcome {
            found: outcome.found(),
            path_words: outcome.path.len(),
            edges_explored: outcome.edges_explored,
        },
        // Sampled endpoints can collide or mismatch in mixed-length lists
        Err(_) => PairOutcome {
            found: false,
            path_words: 0,
            edges_explored: 0,
        },
    }
}

fn sample_pairs(words: &[Word], pair_count: usize) -> Vec<(Word, Word)> {
    if words.len() < 2 {
        return Vec::new();
    }

    let mut rng = rand::rng();
    let mut pairs = Vec::with_capacity(pair_count);
    for _ in 0..pair_count {
        let picked: Vec<&Word> = words.choose_multiple(&mut rng, 2).collect();
        if let [a, b] = picked[..] {
            pairs.push((a.clone(), b.clone()));
        }
    }
    pairs
}

fn summarize(outcomes: &[PairOutcome], duration: Duration) -> BenchmarkResult {
    let pairs_tested = outcomes.len();
    let solved = outcomes.iter().filter(|o| o.found).count();
    let total_edges: u64 = outcomes.iter().map(|o| o.edges_explored).sum();
    let max_edges = outcomes.iter().map(|o| o.edges_explored).max().unwrap_or(0);
    let solved_words: usize = outcomes
        .iter()
        .filter(|o| o.found)
        .map(|o| o.path_words)
        .sum();

    let mut path_length_distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in outcomes.iter().filter(|o| o.found) {
        *path_length_distribution.entry(outcome.path_words).or_insert(0) += 1;
    }

    BenchmarkResult {
        pairs_tested,
        solved,
        average_path_words: if solved == 0 {
            0.0
        } else {
            solved_words as f64 / solved as f64
        },
        average_edges: if pairs_tested == 0 {
            0.0
        } else {
            total_edges as f64 / pairs_tested as f64
        },
        max_edges,
        path_length_distribution,
        duration,
        pairs_per_second: if duration.as_secs_f64() > 0.0 {
            pairs_tested as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(words: &[&str]) -> Vocabulary {
        let words = words.iter().map(|w| Word::new(*w).unwrap());
        Vocabulary::build(words, |_| true).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let vocabulary = vocabulary(&["cat", "cot", "cog", "dog", "bat", "bog"]);

        let result = run_benchmark(&vocabulary, Algorithm::Shortest, 10, Weights::default());
        assert_eq!(result.pairs_tested, 10);
        assert!(result.solved <= result.pairs_tested);
    }

    #[test]
    fn benchmark_on_tiny_vocabulary_is_empty() {
        let vocabulary = vocabulary(&["cat"]);

        let result = run_benchmark(&vocabulary, Algorithm::Informed, 5, Weights::default());
        assert_eq!(result.pairs_tested, 0);
        assert_eq!(result.solved, 0);
    }

    #[test]
    fn distribution_counts_solved_pairs() {
        let vocabulary = vocabulary(&["cat", "cot", "cog", "dog"]);

        let result = run_benchmark(&vocabulary, Algorithm::Bidirectional, 20, Weights::default());
        let distribution_sum: usize = result.path_length_distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn connected_vocabulary_solves_everything() {
        // Fully connected chain; every sampled pair has a path
        let vocabulary = vocabulary(&["cat", "cot", "cog"]);

        let result = run_benchmark(&vocabulary, Algorithm::Shortest, 10, Weights::default());
        assert_eq!(result.solved, result.pairs_tested);
        assert!(result.average_path_words >= 2.0);
    }
}

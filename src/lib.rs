//! Word Ladder
//!
//! A word ladder path finder. The vocabulary lives in a character trie that
//! answers "which words are one substitution away?" without materializing
//! the word graph, and four search strategies walk that implicit graph:
//! informed priority search, Dijkstra-style shortest path, bidirectional
//! BFS, and exhaustive longest path.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::scoring::{PriorityCalculator, Weights};
//! use word_ladder::search::PathFinder;
//! use word_ladder::wordlists::Vocabulary;
//!
//! let words = ["cold", "cord", "card", "ward", "warm"]
//!     .iter()
//!     .map(|s| Word::new(*s).unwrap());
//! let vocabulary = Vocabulary::build(words, |_| true).unwrap();
//!
//! let calculator =
//!     PriorityCalculator::new(vocabulary.len(), Weights::default(), vocabulary.stats()).unwrap();
//! let finder = PathFinder::new(vocabulary.trie(), calculator);
//!
//! let outcome = finder
//!     .find_shortest(&Word::new("cold").unwrap(), &Word::new("warm").unwrap())
//!     .unwrap();
//! assert_eq!(outcome.path.len(), 5);
//! ```

// Core domain types
pub mod core;

// Vocabulary trie and adjacency oracle
pub mod trie;

// Order-statistic priority queue
pub mod queue;

// Heuristic priority scoring
pub mod scoring;

// Path-finding algorithms
pub mod search;

// Word lists and vocabulary ingestion
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Path-finding algorithms over the word graph
//!
//! Four strategies share one adjacency source (the trie oracle): an informed
//! priority-driven search, a Dijkstra-style shortest-path search, a
//! bidirectional breadth-first search, and an exhaustive longest-path search.
//! Each call owns its queue/visited/predecessor state exclusively and
//! discards it on return.

mod bidirectional;
mod informed;
mod longest;
mod shortest;

use crate::core::Word;
use crate::queue::QueueError;
use crate::scoring::{PriorityCalculator, ScoreError};
use crate::trie::Trie;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for path-finding calls
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    SameEndpoints,
    LengthMismatch { source: usize, destination: usize },
    Queue(QueueError),
    Score(ScoreError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameEndpoints => write!(f, "Source and destination must differ"),
            Self::LengthMismatch {
                source,
                destination,
            } => write!(
                f,
                "Source and destination differ in length ({source} vs {destination})"
            ),
            Self::Queue(e) => write!(f, "Queue operation failed: {e}"),
            Self::Score(e) => write!(f, "Priority calculation failed: {e}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<QueueError> for SearchError {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}

impl From<ScoreError> for SearchError {
    fn from(e: ScoreError) -> Self {
        Self::Score(e)
    }
}

/// Result of one search call
///
/// An empty path means no path was found; `edges_explored` counts every
/// adjacency relationship examined, found or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Vec<Word>,
    pub edges_explored: u64,
}

impl SearchOutcome {
    /// Whether a path was found
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges in the path (one less than the word count)
    #[must_use]
    pub fn path_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// The available search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Heuristic priority search; fast, path not guaranteed shortest
    Informed,
    /// Dijkstra-style search; minimum edge count guaranteed
    Shortest,
    /// Two breadth-first frontiers meeting in the middle
    Bidirectional,
    /// Exhaustive longest simple path from the source
    Longest,
}

impl Algorithm {
    /// Create an algorithm from a name string
    ///
    /// Supported names: "informed", "shortest", "dijkstra", "bidirectional",
    /// "bfs", "longest". Defaults to informed if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "shortest" | "dijkstra" => Self::Shortest,
            "bidirectional" | "bfs" => Self::Bidirectional,
            "longest" => Self::Longest,
            _ => Self::Informed,
        }
    }

    /// Stable display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Informed => "informed",
            Self::Shortest => "shortest",
            Self::Bidirectional => "bidirectional",
            Self::Longest => "longest",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runs the four search algorithms against one trie
///
/// The trie and statistics are borrowed read-only; every call builds and
/// discards its own working state, so one finder can serve many calls.
pub struct PathFinder<'a> {
    trie: &'a Trie,
    calculator: PriorityCalculator<'a>,
}

impl<'a> PathFinder<'a> {
    /// Create a finder over a trie with a configured calculator
    #[must_use]
    pub const fn new(trie: &'a Trie, calculator: PriorityCalculator<'a>) -> Self {
        Self { trie, calculator }
    }

    /// Informed priority search
    ///
    /// Returns the first path discovered, which the heuristic usually but
    /// not always makes shortest: the search stops on the edge that reaches
    /// the destination rather than when the destination is dequeued.
    ///
    /// # Errors
    /// Returns `SearchError` on equal endpoints, mismatched lengths, or a
    /// distance exceeding the calculator's configured maximum.
    pub fn find_informed(
        &self,
        source: &Word,
        destination: &Word,
    ) -> Result<SearchOutcome, SearchError> {
        validate_endpoints(source, destination)?;
        informed::search(self.trie, &self.calculator, source, destination)
    }

    /// Dijkstra-style shortest-path search
    ///
    /// Runs until the destination itself is dequeued, so the returned path
    /// has minimum edge count.
    ///
    /// # Errors
    /// Returns `SearchError` on equal endpoints or mismatched lengths.
    pub fn find_shortest(
        &self,
        source: &Word,
        destination: &Word,
    ) -> Result<SearchOutcome, SearchError> {
        validate_endpoints(source, destination)?;
        shortest::search(self.trie, source, destination)
    }

    /// Bidirectional breadth-first search
    ///
    /// # Errors
    /// Returns `SearchError` on equal endpoints or mismatched lengths.
    pub fn find_bidirectional(
        &self,
        source: &Word,
        destination: &Word,
    ) -> Result<SearchOutcome, SearchError> {
        validate_endpoints(source, destination)?;
        Ok(bidirectional::search(self.trie, source, destination))
    }

    /// Exhaustive longest simple path from `source`
    ///
    /// Explores every simple path by depth-first recursion; exponential in
    /// the worst case and intended for small graphs only. Always returns a
    /// path (at minimum the source alone).
    #[must_use]
    pub fn find_longest(&self, source: &Word) -> SearchOutcome {
        longest::search(self.trie, source)
    }
}

fn validate_endpoints(source: &Word, destination: &Word) -> Result<(), SearchError> {
    if source == destination {
        return Err(SearchError::SameEndpoints);
    }
    if source.len() != destination.len() {
        return Err(SearchError::LengthMismatch {
            source: source.len(),
            destination: destination.len(),
        });
    }
    Ok(())
}

/// Walk predecessors from the destination back to the source
///
/// Returns an empty path if the chain is broken (destination never reached).
fn reconstruct(
    predecessor: &FxHashMap<Word, Word>,
    source: &Word,
    destination: &Word,
) -> Vec<Word> {
    let mut path = vec![destination.clone()];
    let mut current = destination;

    while current != source {
        match predecessor.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

//! Bidirectional breadth-first search
//!
//! Two unweighted BFS frontiers, one rooted at the source and one at the
//! destination, each with its own visited set, predecessor map and FIFO
//! queue. Each round advances both frontiers by exactly one queued vertex;
//! a neighbor already visited by the opposite frontier is the join vertex
//! and ends the search.

use super::SearchOutcome;
use crate::core::Word;
use crate::trie::Trie;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

struct Frontier {
    queue: VecDeque<Word>,
    visited: FxHashSet<Word>,
    predecessor: FxHashMap<Word, Word>,
}

impl Frontier {
    fn rooted_at(root: &Word) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root.clone());
        let mut visited = FxHashSet::default();
        visited.insert(root.clone());
        Self {
            queue,
            visited,
            predecessor: FxHashMap::default(),
        }
    }

    /// Expand one vertex; returns the join vertex if the other frontier has
    /// already visited one of its neighbors
    fn expand(
        &mut self,
        trie: &Trie,
        other: &Frontier,
        current: &Word,
        edges_explored: &mut u64,
    ) -> Option<Word> {
        for neighbor in trie.adjacent_words(current) {
            *edges_explored += 1;

            if other.visited.contains(&neighbor) {
                self.predecessor.insert(neighbor.clone(), current.clone());
                return Some(neighbor);
            }

            if self.visited.insert(neighbor.clone()) {
                self.predecessor.insert(neighbor.clone(), current.clone());
                self.queue.push_back(neighbor);
            }
        }
        None
    }
}

pub(super) fn search(trie: &Trie, source: &Word, destination: &Word) -> SearchOutcome {
    let mut forward = Frontier::rooted_at(source);
    let mut backward = Frontier::rooted_at(destination);
    let mut edges_explored = 0u64;
    let mut join: Option<Word> = None;

    while join.is_none() && !(forward.queue.is_empty() && backward.queue.is_empty()) {
        if let Some(current) = forward.queue.pop_front() {
            join = forward.expand(trie, &backward, &current, &mut edges_explored);
        }
        if join.is_none() {
            if let Some(current) = backward.queue.pop_front() {
                join = backward.expand(trie, &forward, &current, &mut edges_explored);
            }
        }
    }

    let path = join.map_or_else(Vec::new, |join| {
        assemble(&forward, &backward, source, &join)
    });

    SearchOutcome {
        path,
        edges_explored,
    }
}

/// Join the forward half (source → join vertex) with the reversed backward
/// half (join vertex → destination, join vertex itself excluded)
fn assemble(forward: &Frontier, backward: &Frontier, source: &Word, join: &Word) -> Vec<Word> {
    let mut path = vec![join.clone()];
    let mut current = join;
    while current != source {
        match forward.predecessor.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();

    let mut current = join;
    while let Some(next) = backward.predecessor.get(current) {
        path.push(next.clone());
        current = next;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn build(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            trie.insert(&word(w), true).unwrap();
        }
        trie
    }

    #[test]
    fn meets_in_the_middle() {
        let trie = build(&["cold", "cord", "card", "ward", "warm"]);

        let outcome = search(&trie, &word("cold"), &word("warm"));
        assert_eq!(
            outcome.path,
            vec![word("cold"), word("cord"), word("card"), word("ward"), word("warm")]
        );
    }

    #[test]
    fn adjacent_endpoints() {
        let trie = build(&["cat", "cot"]);

        let outcome = search(&trie, &word("cat"), &word("cot"));
        assert_eq!(outcome.path, vec![word("cat"), word("cot")]);
    }

    #[test]
    fn join_vertex_appears_once() {
        let trie = build(&["cat", "cot", "cog", "dog", "dot"]);

        let outcome = search(&trie, &word("cat"), &word("dog"));
        assert!(outcome.found());
        for w in &outcome.path {
            assert_eq!(outcome.path.iter().filter(|x| *x == w).count(), 1);
        }
        assert_eq!(outcome.path.first(), Some(&word("cat")));
        assert_eq!(outcome.path.last(), Some(&word("dog")));
    }

    #[test]
    fn matches_unidirectional_shortest_length() {
        let trie = build(&[
            "time", "tile", "tale", "tame", "lime", "lame", "line", "lane",
        ]);

        let bidirectional = search(&trie, &word("time"), &word("lane"));
        let shortest = super::super::shortest::search(&trie, &word("time"), &word("lane")).unwrap();
        assert_eq!(bidirectional.path.len(), shortest.path.len());
    }

    #[test]
    fn disconnected_graph_returns_empty() {
        let trie = build(&["time", "wolf"]);

        let outcome = search(&trie, &word("time"), &word("wolf"));
        assert!(!outcome.found());
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn counts_edges_from_both_frontiers() {
        let trie = build(&["cat", "cot", "cog"]);

        let outcome = search(&trie, &word("cat"), &word("cog"));
        assert!(outcome.found());
        assert!(outcome.edges_explored >= 2);
    }
}

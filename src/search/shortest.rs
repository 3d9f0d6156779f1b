//! Dijkstra-style shortest-path search
//!
//! Same queue/visited/predecessor machinery as the informed search, but the
//! priority is the plain distance from the source scaled into the queue's
//! unit range. The loop runs until the destination itself is dequeued, which
//! guarantees minimum edge count; there is no early exit on edge discovery.

use super::{SearchError, SearchOutcome, reconstruct};
use crate::core::Word;
use crate::queue::PriorityQueue;
use crate::trie::Trie;
use rustc_hash::{FxHashMap, FxHashSet};

/// Scales integer distances into [0.0, 1.0]; any two distinct distances
/// below the denominator order correctly
const PRIORITY_DENOMINATOR: f64 = 1000.0;

pub(super) fn search(
    trie: &Trie,
    source: &Word,
    destination: &Word,
) -> Result<SearchOutcome, SearchError> {
    let mut queue = PriorityQueue::new();
    let mut visited: FxHashSet<Word> = FxHashSet::default();
    let mut predecessor: FxHashMap<Word, Word> = FxHashMap::default();
    let mut distance: FxHashMap<Word, usize> = FxHashMap::default();
    let mut edges_explored = 0u64;
    let mut found = false;

    queue.enqueue(source.clone(), 0.0)?;
    distance.insert(source.clone(), 0);

    while !queue.is_empty() {
        let current = queue.dequeue_min()?;

        if current == *destination {
            found = true;
            break;
        }

        visited.insert(current.clone());
        let current_distance = distance.get(&current).copied().unwrap_or(0);

        for neighbor in trie.adjacent_words(&current) {
            edges_explored += 1;

            if visited.contains(&neighbor) {
                continue;
            }

            let next_distance = current_distance + 1;
            let priority = next_distance as f64 / PRIORITY_DENOMINATOR;

            if queue.contains(&neighbor) {
                if priority < queue.priority_of(&neighbor)? {
                    queue.remove(&neighbor)?;
                    queue.enqueue(neighbor.clone(), priority)?;
                    predecessor.insert(neighbor.clone(), current.clone());
                    distance.insert(neighbor, next_distance);
                }
            } else {
                queue.enqueue(neighbor.clone(), priority)?;
                predecessor.insert(neighbor.clone(), current.clone());
                distance.insert(neighbor, next_distance);
            }
        }
    }

    let path = if found {
        reconstruct(&predecessor, source, destination)
    } else {
        Vec::new()
    };

    Ok(SearchOutcome {
        path,
        edges_explored,
    })
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
    fn finds_the_minimum_edge_count() {
        // Two routes from "cat" to "cog": direct via "cot" (2 edges) and a
        // detour via "bat"/"bot" that must lose
        let trie = build(&["cat", "cot", "cog", "bat", "bot", "bog"]);

        let outcome = search(&trie, &word("cat"), &word("cog")).unwrap();
        assert_eq!(outcome.path, vec![word("cat"), word("cot"), word("cog")]);
    }

    #[test]
    fn runs_until_destination_is_dequeued() {
        let trie = build(&["cat", "cot"]);

        let outcome = search(&trie, &word("cat"), &word("cot")).unwrap();
        assert_eq!(outcome.path.len(), 2);
        // The destination's own neighbors are never expanded
        assert_eq!(outcome.edges_explored, 1);
    }

    #[test]
    fn chain_graph_path() {
        let trie = build(&["cold", "cord", "card", "ward", "warm"]);

        let outcome = search(&trie, &word("cold"), &word("warm")).unwrap();
        assert_eq!(outcome.path.len(), 5);
        assert_eq!(outcome.path.first(), Some(&word("cold")));
        assert_eq!(outcome.path.last(), Some(&word("warm")));
    }

    #[test]
    fn no_path_returns_empty() {
        let trie = build(&["time", "wolf"]);

        let outcome = search(&trie, &word("time"), &word("wolf")).unwrap();
        assert!(!outcome.found());
    }

    #[test]
    fn source_not_in_vocabulary_still_bridges() {
        // "cat" itself is not stored; its stored neighbors carry the search
        let trie = build(&["cot", "cog"]);

        let outcome = search(&trie, &word("cat"), &word("cog")).unwrap();
        assert_eq!(outcome.path, vec![word("cat"), word("cot"), word("cog")]);
    }
}

//! Informed priority search
//!
//! Explores words in heuristic priority order and terminates on the edge
//! that discovers the destination, without enqueuing it. The early exit
//! makes the search fast but means the returned path is not guaranteed
//! shortest under every weight configuration.

use super::{SearchError, SearchOutcome, reconstruct};
use crate::core::Word;
use crate::queue::PriorityQueue;
use crate::scoring::PriorityCalculator;
use crate::trie::Trie;
use rustc_hash::{FxHashMap, FxHashSet};

pub(super) fn search(
    trie: &Trie,
    calculator: &PriorityCalculator<'_>,
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

    'searching: while !queue.is_empty() {
        let current = queue.dequeue_min()?;
        visited.insert(current.clone());
        let current_distance = distance.get(&current).copied().unwrap_or(0);

        for neighbor in trie.adjacent_words(&current) {
            edges_explored += 1;

            if neighbor == *destination {
                // Early exit on the discovery edge; the destination is never
                // enqueued as a vertex of its own
                predecessor.insert(destination.clone(), current);
                found = true;
                break 'searching;
            }

            if visited.contains(&neighbor) {
                continue;
            }

            let next_distance = current_distance + 1;
            let priority =
                calculator.calculate(&current, &neighbor, destination, next_distance)?;

            if queue.contains(&neighbor) {
                // Reroute only on a strict improvement
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

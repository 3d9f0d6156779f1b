//! Exhaustive longest-path search
//!
//! Depth-first exploration of every simple path from the source, keeping the
//! longest seen. No revisiting of a word already on the current path. Cost
//! is exponential in the worst case; there is no built-in depth or time
//! bound, so callers wanting one must impose it externally.

use super::SearchOutcome;
use crate::core::Word;
use crate::trie::Trie;

pub(super) fn search(trie: &Trie, source: &Word) -> SearchOutcome {
    let mut path = vec![source.clone()];
    let mut best = path.clone();
    let mut edges_explored = 0u64;

    extend(trie, source, &mut path, &mut best, &mut edges_explored);

    SearchOutcome {
        path: best,
        edges_explored,
    }
}

fn extend(
    trie: &Trie,
    current: &Word,
    path: &mut Vec<Word>,
    best: &mut Vec<Word>,
    edges_explored: &mut u64,
) {
    for neighbor in trie.adjacent_words(current) {
        *edges_explored += 1;

        // Simple paths only
        if path.contains(&neighbor) {
            continue;
        }

        path.push(neighbor.clone());
        extend(trie, &neighbor, path, best, edges_explored);
        path.pop();
    }

    if path.len() > best.len() {
        best.clone_from(path);
    }
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
    fn follows_the_whole_chain() {
        let trie = build(&["cat", "cot", "cog", "dog"]);

        let outcome = search(&trie, &word("cat"));
        assert_eq!(
            outcome.path,
            vec![word("cat"), word("cot"), word("cog"), word("dog")]
        );
    }

    #[test]
    fn isolated_source_returns_itself() {
        let trie = build(&["time", "wolf"]);

        let outcome = search(&trie, &word("time"));
        assert_eq!(outcome.path, vec![word("time")]);
        assert_eq!(outcome.edges_explored, 0);
    }

    #[test]
    fn takes_the_longer_branch() {
        // From "cat": one branch is just "bat"; the other runs three deep
        let trie = build(&["cat", "bat", "cot", "cog", "dog"]);

        let outcome = search(&trie, &word("cat"));
        assert!(outcome.path.len() >= 4);
        assert_eq!(outcome.path.first(), Some(&word("cat")));
    }

    #[test]
    fn path_is_simple() {
        let trie = build(&["cat", "cot", "cog", "cag", "bat", "bot", "bog"]);

        let outcome = search(&trie, &word("cat"));
        for w in &outcome.path {
            assert_eq!(outcome.path.iter().filter(|x| *x == w).count(), 1);
        }
    }

    #[test]
    fn cycle_does_not_loop_forever() {
        // cat–cot–bot–bat–cat forms a 4-cycle
        let trie = build(&["cat", "cot", "bot", "bat"]);

        let outcome = search(&trie, &word("cat"));
        assert_eq!(outcome.path.len(), 4);
    }
}

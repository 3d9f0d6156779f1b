//! Adjacency oracle
//!
//! Lazily enumerates the stored words adjacent to a query word. For each
//! "wildcard" position the traversal matches the query exactly up to that
//! position, branches into every child at the wildcard, then walks the
//! remaining suffix deterministically. A candidate is yielded when the full
//! length is consumed on a terminal node and the wildcard resolved to a
//! different character than the query's.

use super::{Trie, TrieNode};
use crate::core::Word;
use std::collections::hash_map;

/// Lazy iterator over words adjacent to a query word
///
/// Produced by [`Trie::adjacent_words`]. Restartable by asking the trie for
/// a fresh iterator; iteration never mutates the trie.
pub struct AdjacentWords<'t> {
    trie: &'t Trie,
    word: Word,
    wildcard: usize,
    branch: Option<hash_map::Iter<'t, u8, TrieNode>>,
}

impl<'t> AdjacentWords<'t> {
    pub(super) fn new(trie: &'t Trie, word: Word) -> Self {
        Self {
            trie,
            word,
            wildcard: 0,
            branch: None,
        }
    }
}

/// Walk `bytes` down from `node`, returning the node reached (exact match)
fn descend<'t>(mut node: &'t TrieNode, bytes: &[u8]) -> Option<&'t TrieNode> {
    for &character in bytes {
        node = node.get(character)?;
    }
    Some(node)
}

impl Iterator for AdjacentWords<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let length = self.word.len();

        loop {
            if let Some(iter) = self.branch.as_mut() {
                let bytes = self.word.bytes();
                let wildcard = self.wildcard;
                let original = bytes[wildcard];

                for (&character, child) in iter.by_ref() {
                    // The zero-edit candidate is the query word itself
                    if character == original {
                        continue;
                    }
                    let Some(end) = descend(child, &bytes[wildcard + 1..]) else {
                        continue;
                    };
                    if end.is_terminal() {
                        let mut candidate = bytes.to_vec();
                        candidate[wildcard] = character;
                        return Some(Word::from_validated_bytes(candidate));
                    }
                }

                // Branch exhausted, move to the next wildcard position
                self.branch = None;
                self.wildcard += 1;
            }

            if self.wildcard >= length {
                return None;
            }

            let prefix = &self.word.bytes()[..self.wildcard];
            match descend(self.trie.root(), prefix) {
                Some(node) => self.branch = Some(node.children().iter()),
                // No stored word shares this prefix
                None => self.wildcard += 1,
            }
        }
    }
}

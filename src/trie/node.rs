//! Trie node as a tagged variant
//!
//! A node is either `Internal` (path spells a prefix only) or `Terminal`
//! (path spells a complete vocabulary word). Both variants own a map from
//! character to child node; `promote` upgrades an internal node in place
//! while keeping its children.

use super::TrieError;
use rustc_hash::FxHashMap;

/// A node in the vocabulary trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    /// Root-to-node path spells a prefix of one or more words
    Internal { children: FxHashMap<u8, TrieNode> },
    /// Root-to-node path spells a complete vocabulary word
    Terminal { children: FxHashMap<u8, TrieNode> },
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::internal()
    }
}

impl TrieNode {
    /// Create an internal node with no children
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal {
            children: FxHashMap::default(),
        }
    }

    /// Create a terminal node with no children
    #[must_use]
    pub fn terminal() -> Self {
        Self::Terminal {
            children: FxHashMap::default(),
        }
    }

    /// Whether this node marks a complete word
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }

    /// Upgrade an internal node to terminal, keeping all children
    ///
    /// No-op on a node that is already terminal.
    pub fn promote(&mut self) {
        if let Self::Internal { children } = self {
            let children = std::mem::take(children);
            *self = Self::Terminal { children };
        }
    }

    /// Child map (shared access)
    #[inline]
    #[must_use]
    pub const fn children(&self) -> &FxHashMap<u8, TrieNode> {
        match self {
            Self::Internal { children } | Self::Terminal { children } => children,
        }
    }

    /// Child map (exclusive access)
    #[inline]
    pub fn children_mut(&mut self) -> &mut FxHashMap<u8, TrieNode> {
        match self {
            Self::Internal { children } | Self::Terminal { children } => children,
        }
    }

    /// Look up a child by character, `None` if absent
    #[inline]
    #[must_use]
    pub fn get(&self, character: u8) -> Option<&TrieNode> {
        self.children().get(&character)
    }

    /// Look up a child by character
    ///
    /// # Errors
    /// Returns `TrieError::MissingChild` if no child exists for `character`.
    pub fn child(&self, character: u8) -> Result<&TrieNode, TrieError> {
        self.children()
            .get(&character)
            .ok_or(TrieError::MissingChild(character as char))
    }

    /// Insert a child node for a character
    ///
    /// # Errors
    /// Returns `TrieError::DuplicateChild` if a child already exists for
    /// `character`.
    pub fn add_child(&mut self, character: u8, node: TrieNode) -> Result<(), TrieError> {
        let children = self.children_mut();
        if children.contains_key(&character) {
            return Err(TrieError::DuplicateChild(character as char));
        }
        children.insert(character, node);
        Ok(())
    }

    /// Remove and return the child node for a character
    ///
    /// # Errors
    /// Returns `TrieError::MissingChild` if no child exists for `character`.
    pub fn remove_child(&mut self, character: u8) -> Result<TrieNode, TrieError> {
        self.children_mut()
            .remove(&character)
            .ok_or(TrieError::MissingChild(character as char))
    }
}

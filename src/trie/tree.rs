//! Array-backed trie over the letters A-Z

use super::node::{letter_to_slot, slot_index, TrieNode, NODE_SIZE_BYTES, ROOT};
use crate::fingerprint::Fingerprint;
use crate::{store, Result};
use std::path::Path;

/// A case-insensitive set of alphabetic words
///
/// All nodes live in one growable vector; links between them are indices
/// into it. The root sits at index 0 and the store only ever grows, one
/// node per newly seen letter position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Create a trie holding only the root
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Build a trie from a sequence of words
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Wrap an already validated node store. `nodes` must hold the root.
    pub(crate) fn from_nodes(nodes: Vec<TrieNode>) -> Self {
        debug_assert!(!nodes.is_empty());
        Trie { nodes }
    }

    /// The node store in index order
    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    /// Number of nodes, root included
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Encoded size of the node store, excluding the count prefix
    pub fn size_bytes(&self) -> usize {
        self.nodes.len() * NODE_SIZE_BYTES
    }

    /// Insert a word.
    ///
    /// The whole word is checked before anything is written, so a word with
    /// a non-letter fails with `OutOfRange` and leaves the trie untouched.
    /// The empty string is accepted and changes nothing.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let slots = word_slots(word)?;
        if let Some(last) = self.walk_or_extend(&slots, |_| {})? {
            self.nodes[last].mark_word();
        }
        Ok(())
    }

    /// Insert every non-empty contiguous substring of `word`
    pub fn insert_substrings(&mut self, word: &str) -> Result<()> {
        let slots = word_slots(word)?;
        // Walking each suffix and marking every node on the way is the same
        // as inserting each substring that starts there.
        for start in 0..slots.len() {
            let mut nodes = Vec::with_capacity(slots.len() - start);
            self.walk_or_extend(&slots[start..], |idx| nodes.push(idx))?;
            for idx in nodes {
                self.nodes[idx].mark_word();
            }
        }
        Ok(())
    }

    /// Check whether exactly this word was inserted.
    ///
    /// A prefix of an inserted word is not contained unless it was inserted
    /// itself. The empty string is never contained.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let slots = word_slots(word)?;
        if slots.is_empty() {
            return Ok(false);
        }

        let mut current = ROOT;
        for &slot in &slots {
            match self.nodes[current].child_at(slot) {
                ROOT => return Ok(false),
                next => current = next,
            }
        }
        Ok(self.nodes[current].is_word())
    }

    /// BLAKE3 digest of the serialized node store
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        Ok(Fingerprint::digest(&store::encode(self)?))
    }

    /// Persist to a zstd-compressed file at the default level
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        store::save(self, path, store::DEFAULT_COMPRESSION_LEVEL)
    }

    /// Load a trie persisted with [`Trie::to_file`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        store::load(path)
    }

    // === Internal helpers ===

    /// Follow `slots` from the root, appending nodes for missing letters.
    ///
    /// Calls `visit` with each node index reached and returns the last one,
    /// or `None` when `slots` is empty.
    fn walk_or_extend(
        &mut self,
        slots: &[usize],
        mut visit: impl FnMut(usize),
    ) -> Result<Option<usize>> {
        let mut current = ROOT;
        for &slot in slots {
            current = match self.nodes[current].child_at(slot) {
                ROOT => {
                    let idx = self.nodes.len();
                    let link = slot_index(idx)?;
                    self.nodes.push(TrieNode::for_slot(slot));
                    self.nodes[current].set_child_at(slot, link);
                    idx
                }
                next => next,
            };
            visit(current);
        }
        Ok((!slots.is_empty()).then_some(current))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

/// Map every character of `word` to its slot, failing on the first non-letter
fn word_slots(word: &str) -> Result<Vec<usize>> {
    word.chars().map(letter_to_slot).collect()
}

//! Array-backed word trie
//!
//! Nodes are stored in a single vector and refer to their children by
//! index. Index 0 is the root and doubles as the "no child" marker.

mod node;
mod tree;

pub use node::{letter_to_slot, TrieNode, ALPHABET_SIZE, NODE_SIZE_BYTES, ROOT};
pub use tree::Trie;

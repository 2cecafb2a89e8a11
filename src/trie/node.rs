//! Trie node layout and letter-slot mapping

use crate::{Error, Result};

/// Number of child slots per node, one per letter A-Z
pub const ALPHABET_SIZE: usize = 26;

/// Encoded width of one node: 2 byte label, 1 byte flag, 26 x i32 children
pub const NODE_SIZE_BYTES: usize = 2 + 1 + ALPHABET_SIZE * 4;

/// Index of the root node. Never a valid child, so it doubles as "no child".
pub const ROOT: usize = 0;

/// Map a letter to its child slot, folding case.
///
/// Anything outside `A-Z` / `a-z` is rejected with [`Error::OutOfRange`].
pub fn letter_to_slot(c: char) -> Result<usize> {
    if c.is_ascii_alphabetic() {
        Ok((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        Err(Error::OutOfRange { ch: c })
    }
}

/// Narrow a node index to the width of a child slot
pub(crate) fn slot_index(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| Error::IndexOverflow(index))
}

/// One node of the trie
///
/// Children are indices into the owning node store. A slot holding `0`
/// has no child, since index 0 is the root and nothing links back to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode {
    /// Upper-case ASCII code of the letter this node was reached by (0 for the root)
    pub(crate) label: u16,
    pub(crate) word: bool,
    pub(crate) children: [u32; ALPHABET_SIZE],
}

impl TrieNode {
    /// Create the root node
    pub fn root() -> Self {
        TrieNode {
            label: 0,
            word: false,
            children: [0; ALPHABET_SIZE],
        }
    }

    /// Create an unmarked node for the letter at `slot`
    pub(crate) fn for_slot(slot: usize) -> Self {
        TrieNode {
            label: u16::from(b'A') + slot as u16,
            word: false,
            children: [0; ALPHABET_SIZE],
        }
    }

    /// The letter this node represents, or `None` for the root
    pub fn label(&self) -> Option<char> {
        match self.label {
            0 => None,
            code => char::from_u32(u32::from(code)),
        }
    }

    /// Child index for letter `c` (0 when absent)
    pub fn get_child(&self, c: char) -> Result<usize> {
        Ok(self.child_at(letter_to_slot(c)?))
    }

    /// Point the slot for letter `c` at `index`
    pub fn set_child(&mut self, c: char, index: usize) -> Result<()> {
        let slot = letter_to_slot(c)?;
        self.set_child_at(slot, slot_index(index)?);
        Ok(())
    }

    pub fn has_child(&self, c: char) -> Result<bool> {
        Ok(self.get_child(c)? != 0)
    }

    /// Mark a complete word as ending here. Idempotent.
    pub fn mark_word(&mut self) {
        self.word = true;
    }

    pub fn is_word(&self) -> bool {
        self.word
    }

    pub(crate) fn child_at(&self, slot: usize) -> usize {
        self.children[slot] as usize
    }

    pub(crate) fn set_child_at(&mut self, slot: usize, index: u32) {
        self.children[slot] = index;
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        TrieNode::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_to_slot_folds_case() {
        assert_eq!(letter_to_slot('a').unwrap(), 0);
        assert_eq!(letter_to_slot('A').unwrap(), 0);
        assert_eq!(letter_to_slot('z').unwrap(), 25);
        assert_eq!(letter_to_slot('Q').unwrap(), letter_to_slot('q').unwrap());
    }

    #[test]
    fn test_letter_to_slot_rejects_non_letters() {
        for c in ['@', '[', '`', '{', '1', ' ', '-', 'é'] {
            assert!(matches!(letter_to_slot(c), Err(Error::OutOfRange { ch }) if ch == c));
        }
    }

    #[test]
    fn test_child_slots() {
        let mut node = TrieNode::root();
        assert!(!node.has_child('b').unwrap());

        node.set_child('B', 7).unwrap();
        assert!(node.has_child('b').unwrap());
        assert_eq!(node.get_child('b').unwrap(), 7);
        assert_eq!(node.get_child('c').unwrap(), 0);
        assert!(node.set_child('!', 1).is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_set_child_rejects_oversized_index() {
        let mut node = TrieNode::root();
        node.set_child('a', 3).unwrap();

        let err = node.set_child('a', 1 << 32).unwrap_err();
        assert!(matches!(err, Error::IndexOverflow(i) if i == 1 << 32));
        assert_eq!(node.get_child('a').unwrap(), 3);

        node.set_child('a', u32::MAX as usize).unwrap();
        assert_eq!(node.get_child('a').unwrap(), u32::MAX as usize);
    }

    #[test]
    fn test_mark_word_idempotent() {
        let mut node = TrieNode::for_slot(2);
        assert_eq!(node.label(), Some('C'));
        assert!(!node.is_word());
        node.mark_word();
        node.mark_word();
        assert!(node.is_word());
    }

    #[test]
    fn test_node_size() {
        assert_eq!(NODE_SIZE_BYTES, 107);
        assert_eq!(TrieNode::root().label(), None);
    }
}

//! Fixed-width binary encoding of the node store
//!
//! Layout (all integers little-endian):
//! ```text
//! [COUNT: 4 bytes]      i32 node count
//! [NODES: COUNT x 107]
//!   - label:    2 bytes (u16 letter code, 0 for the root)
//!   - word:     1 byte  (0 = no, anything else = yes)
//!   - children: 26 x 4 bytes (i32 node index, 0 = absent)
//! ```
//! There is no padding and no per-node length prefix.

use crate::trie::{Trie, TrieNode, ALPHABET_SIZE, NODE_SIZE_BYTES};
use crate::{Error, Result};
use bytes::{Buf, BufMut};

const COUNT_SIZE: usize = 4;

/// Serialize the node store. Equal tries always give equal bytes.
pub fn encode(trie: &Trie) -> Result<Vec<u8>> {
    let count = i32::try_from(trie.size()).map_err(|_| Error::TooLarge(trie.size()))?;

    let mut buf = Vec::with_capacity(COUNT_SIZE + trie.size_bytes());
    buf.put_i32_le(count);
    for node in trie.nodes() {
        encode_node(node, &mut buf);
    }
    Ok(buf)
}

/// Rebuild a trie from [`encode`] output.
///
/// Nodes come back in their original order, so child indices stay valid.
/// Every nonzero child index must point forward, past its parent and
/// inside the store; any other link, short read or trailing data is
/// rejected.
pub fn decode(data: &[u8]) -> Result<Trie> {
    let mut buf = data;

    ensure_remaining(&buf, COUNT_SIZE)?;
    let count = buf.get_i32_le();
    let count = usize::try_from(count)
        .map_err(|_| Error::Corruption(format!("Negative node count: {}", count)))?;
    if count == 0 {
        return Err(Error::Corruption("Node store has no root".into()));
    }

    // A bogus count must not drive a huge allocation before the data runs out.
    ensure_remaining(&buf, count.saturating_mul(NODE_SIZE_BYTES))?;

    let mut nodes = Vec::with_capacity(count);
    for index in 0..count {
        nodes.push(decode_node(&mut buf, index, count)?);
    }

    if buf.has_remaining() {
        return Err(Error::Corruption(format!(
            "{} trailing bytes after {} nodes",
            buf.remaining(),
            count
        )));
    }

    Ok(Trie::from_nodes(nodes))
}

fn encode_node(node: &TrieNode, buf: &mut impl BufMut) {
    buf.put_u16_le(node.label);
    buf.put_u8(u8::from(node.word));
    for &child in &node.children {
        // Indices are below the node count, which already fit in an i32.
        buf.put_i32_le(child as i32);
    }
}

/// Decode the node at `index`. Insertion only links to nodes appended after
/// the parent, so any nonzero child must lie in `(index, count)`.
fn decode_node(buf: &mut impl Buf, index: usize, count: usize) -> Result<TrieNode> {
    ensure_remaining(&*buf, NODE_SIZE_BYTES)?;

    let label = buf.get_u16_le();
    let word = buf.get_u8() != 0;
    let mut children = [0u32; ALPHABET_SIZE];
    for child in children.iter_mut() {
        let raw = buf.get_i32_le();
        *child = match u32::try_from(raw) {
            Ok(0) => 0,
            Ok(idx) if (idx as usize) > index && (idx as usize) < count => idx,
            _ => {
                return Err(Error::Corruption(format!(
                    "Node {} links to child {} (must be in {}..{})",
                    index,
                    raw,
                    index + 1,
                    count
                )))
            }
        };
    }

    Ok(TrieNode {
        label,
        word,
        children,
    })
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(Error::Truncated {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

//! # wordtrie
//!
//! An array-backed trie for case-insensitive word membership, with a compact
//! compressed on-disk format.
//!
//! Building a trie from a large word list is slow compared to reading one
//! back, so a built index can be saved once and reloaded on demand.
//!
//! ## Core Concepts
//!
//! - **Node store**: every node lives in one vector; children are indices into it
//! - **Root**: index 0, which is also the "no child" marker in a child slot
//! - **Word flag**: set on the node where an inserted word ends
//! - **Index file**: the node store as fixed-width records, zstd-compressed
//!
//! ## Example
//!
//! ```
//! use wordtrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("Abash")?;
//! assert!(trie.contains("abash")?);
//! assert!(!trie.contains("aba")?);
//! # Ok::<(), wordtrie::Error>(())
//! ```

pub mod config;
pub mod fingerprint;
pub mod store;
pub mod trie;
pub mod wordlist;

mod error;

pub use config::Config;
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use trie::{letter_to_slot, Trie, TrieNode, NODE_SIZE_BYTES};
pub use wordlist::InsertMode;

//! Error types for wordtrie

use thiserror::Error;

/// Result type alias for wordtrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wordtrie operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A character outside A-Z / a-z reached a slot lookup
    #[error("Character out of range: {ch:?} (only ASCII letters are allowed)")]
    OutOfRange { ch: char },

    #[error("Unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("Corruption detected: {0}")]
    Corruption(String),

    #[error("Node index {0} does not fit in a child slot")]
    IndexOverflow(usize),

    #[error("Trie too large to serialize: {0} nodes")]
    TooLarge(usize),

    #[error("Config error: {0}")]
    Config(String),
}

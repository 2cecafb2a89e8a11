//! Persistence for tries
//!
//! The node store is flattened to a fixed-width byte stream and compressed
//! with zstd on disk.

mod codec;
mod file_store;

pub use codec::{decode, encode};
pub use file_store::{compress, decompress, load, save, DEFAULT_COMPRESSION_LEVEL};

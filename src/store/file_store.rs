//! Compressed trie files
//!
//! A trie file is the [`codec`](super::codec) byte stream run through zstd
//! as a single frame. Nothing else is stored: no header, no checksum.

use super::codec;
use crate::trie::Trie;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

/// zstd level used when none is configured
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Serialize and compress a trie in memory
pub fn compress(trie: &Trie, level: i32) -> Result<Vec<u8>> {
    let raw = codec::encode(trie)?;
    Ok(zstd::encode_all(raw.as_slice(), level)?)
}

/// Decompress and decode bytes produced by [`compress`] or [`save`]
pub fn decompress(data: &[u8]) -> Result<Trie> {
    let raw = zstd::decode_all(data)?;
    codec::decode(&raw)
}

/// Write a trie to `path`, replacing any existing file
pub fn save(trie: &Trie, path: impl AsRef<Path>, level: i32) -> Result<()> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("trie_save", path = %path.display(), level).entered();
    let start = Instant::now();

    let raw = codec::encode(trie)?;

    let file = File::create(path)?;
    let mut encoder = zstd::stream::Encoder::new(BufWriter::new(file), level)?;
    encoder.write_all(&raw)?;
    let mut writer = encoder.finish()?;
    writer.flush()?;

    tracing::debug!(
        nodes = trie.size(),
        raw_bytes = raw.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "saved trie"
    );
    Ok(())
}

/// Read a trie written by [`save`].
///
/// Missing files, bad zstd frames and malformed node data all fail; no
/// partially loaded trie is ever returned.
pub fn load(path: impl AsRef<Path>) -> Result<Trie> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("trie_load", path = %path.display()).entered();
    let start = Instant::now();

    let file = File::open(path)?;
    let mut decoder = zstd::stream::Decoder::new(file)?;
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw)?;

    let trie = codec::decode(&raw)?;

    tracing::debug!(
        nodes = trie.size(),
        raw_bytes = raw.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded trie"
    );
    Ok(trie)
}

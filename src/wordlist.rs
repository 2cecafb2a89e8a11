//! Line-oriented word list ingestion

use crate::trie::Trie;
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// How each line of a word list is added to the trie
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsertMode {
    /// The line itself
    #[default]
    Word,
    /// Every non-empty substring of the line
    Substrings,
}

impl Trie {
    /// Insert one word per line from `reader`, returning the number of lines read.
    ///
    /// Line endings (`\n` or `\r\n`) are stripped. Blank lines are accepted
    /// and add nothing. Stops at the first line containing a non-letter.
    pub fn insert_lines(&mut self, reader: impl BufRead) -> Result<usize> {
        self.insert_lines_with(reader, InsertMode::Word)
    }

    /// Like [`Trie::insert_lines`], choosing how each line is inserted
    pub fn insert_lines_with(&mut self, reader: impl BufRead, mode: InsertMode) -> Result<usize> {
        let mut count = 0;
        for line in reader.lines() {
            let line = line?;
            match mode {
                InsertMode::Word => self.insert(&line)?,
                InsertMode::Substrings => self.insert_substrings(&line)?,
            }
            count += 1;
        }
        Ok(count)
    }
}

/// Build a trie from the word list at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Trie> {
    load_with(path, InsertMode::Word)
}

/// Build a trie from the word list at `path` using `mode`
pub fn load_with(path: impl AsRef<Path>, mode: InsertMode) -> Result<Trie> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("wordlist_load", path = %path.display(), ?mode).entered();
    let start = Instant::now();

    let reader = BufReader::new(File::open(path)?);
    let mut trie = Trie::new();
    let lines = trie.insert_lines_with(reader, mode)?;

    tracing::info!(
        lines,
        nodes = trie.size(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "built trie from word list"
    );
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_insert_lines_handles_crlf() {
        let mut trie = Trie::new();
        let count = trie
            .insert_lines(Cursor::new("abash\r\nabjectedness\r\n\r\nbounteousness\n"))
            .unwrap();
        assert_eq!(count, 4);
        assert!(trie.contains("abash").unwrap());
        assert!(trie.contains("abjectedness").unwrap());
        assert!(trie.contains("bounteousness").unwrap());
        assert!(!trie.contains("abas").unwrap());
    }

    #[test]
    fn test_insert_lines_substrings() {
        let mut trie = Trie::new();
        trie.insert_lines_with(Cursor::new("abc\n"), InsertMode::Substrings)
            .unwrap();
        assert!(trie.contains("bc").unwrap());
        assert!(!trie.contains("ac").unwrap());
    }

    #[test]
    fn test_insert_lines_stops_on_bad_line() {
        let mut trie = Trie::new();
        let err = trie
            .insert_lines(Cursor::new("good\nbad word\nlater\n"))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { ch: ' ' }));
        assert!(trie.contains("good").unwrap());
        assert!(!trie.contains("later").unwrap());
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat\ncar\ncart\n").unwrap();

        let trie = load(&path).unwrap();
        assert!(trie.contains("CART").unwrap());
        assert!(!trie.contains("ca").unwrap());
        assert_eq!(trie.size(), 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(load(dir.path().join("none.txt")), Err(Error::Io(_))));
    }
}

//! Corpus I/O: loading an ordered word list from a file or stdin.
//!
//! This is an external collaborator, not part of the core algorithm: it
//! only ever hands the core an ordered [`Keyset`] of byte strings.

use crate::error::BuildError;
use crate::keyset::Keyset;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Error produced while loading a corpus: either the input could not be
/// read, or one of its lines was not a valid word.
#[derive(Debug)]
pub enum CorpusError {
    /// Reading from the underlying file or stream failed.
    Io(io::Error),
    /// A line was rejected by [`Keyset::push_str`] (contained a null byte).
    InvalidWord(BuildError),
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Io(e) => write!(f, "failed to read corpus: {e}"),
            CorpusError::InvalidWord(e) => write!(f, "invalid word in corpus: {e}"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io(e) => Some(e),
            CorpusError::InvalidWord(e) => Some(e),
        }
    }
}

impl From<io::Error> for CorpusError {
    fn from(e: io::Error) -> Self {
        CorpusError::Io(e)
    }
}

/// Reads one word per line from `input` into a fresh [`Keyset`], in order.
///
/// Lines are taken verbatim (no trimming of anything but the line
/// terminator); a blank line produces an empty-string word.
pub fn read_words<R: BufRead>(input: R) -> Result<Keyset, CorpusError> {
    let mut keyset = Keyset::new();
    for line in input.lines() {
        let line = line?;
        keyset.push_str(&line).map_err(CorpusError::InvalidWord)?;
    }
    Ok(keyset)
}

/// Reads a corpus from a file path, buffering the read.
pub fn read_words_from_path<P: AsRef<Path>>(path: P) -> Result<Keyset, CorpusError> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

//! Keyset for collecting keys to build a dictionary.
//!
//! A keyset is just an ordered list of owned byte strings: there are no
//! weighted keys or zero-copy key borrowing to support here.

use crate::double_array::DoubleArray;
use crate::error::BuildError;

/// Collects an ordered sequence of byte strings for [`DoubleArray::build`].
///
/// Words are assigned record numbers in push order: the `i`th word pushed
/// becomes record `i`.
#[derive(Debug, Clone, Default)]
pub struct Keyset {
    words: Vec<Vec<u8>>,
}

impl Keyset {
    /// Creates an empty keyset.
    pub fn new() -> Self {
        Keyset { words: Vec::new() }
    }

    /// Appends a string, rejecting embedded null bytes eagerly.
    ///
    /// Duplicate detection happens later, during [`DoubleArray::build`]
    /// (it requires seeing the whole corpus), but a null byte is a defect
    /// in the single word being pushed and can be caught right away.
    pub fn push_str(&mut self, word: &str) -> Result<(), BuildError> {
        self.push_bytes(word.as_bytes())
    }

    /// Appends a byte string, rejecting embedded null bytes eagerly.
    pub fn push_bytes(&mut self, word: &[u8]) -> Result<(), BuildError> {
        if word.contains(&0) {
            return Err(BuildError::NullByte(word.to_vec()));
        }
        self.words.push(word.to_vec());
        Ok(())
    }

    /// Number of words collected so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words have been collected yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Builds a [`DoubleArray`] from the collected words.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateKey`] if the same word was pushed
    /// twice, or equals an existing tail-compressed word.
    pub fn build(&self) -> Result<DoubleArray, BuildError> {
        DoubleArray::build(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyset_new_is_empty() {
        let keyset = Keyset::new();
        assert!(keyset.is_empty());
        assert_eq!(keyset.len(), 0);
    }

    #[test]
    fn test_push_str_tracks_len() {
        let mut keyset = Keyset::new();
        keyset.push_str("apple").unwrap();
        keyset.push_str("banana").unwrap();
        assert_eq!(keyset.len(), 2);
    }

    #[test]
    fn test_push_bytes_rejects_null() {
        let mut keyset = Keyset::new();
        let err = keyset.push_bytes(&[b'a', 0, b'b']).unwrap_err();
        assert_eq!(err, BuildError::NullByte(vec![b'a', 0, b'b']));
        assert!(keyset.is_empty());
    }

    #[test]
    fn test_build_assigns_record_numbers_in_push_order() {
        let mut keyset = Keyset::new();
        keyset.push_str("apple").unwrap();
        keyset.push_str("banana").unwrap();
        keyset.push_str("cherry").unwrap();

        let da = keyset.build().unwrap();
        assert_eq!(da.lookup(b"apple"), 0);
        assert_eq!(da.lookup(b"banana"), 1);
        assert_eq!(da.lookup(b"cherry"), 2);
    }

    #[test]
    fn test_build_reports_duplicate() {
        let mut keyset = Keyset::new();
        keyset.push_str("apple").unwrap();
        keyset.push_str("apple").unwrap();

        let err = keyset.build().unwrap_err();
        assert_eq!(err, BuildError::DuplicateKey(b"apple".to_vec()));
    }
}

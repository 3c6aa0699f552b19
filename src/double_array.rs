//! Double-array encoding of a [`TempTrie`], and the runtime lookup
//! automaton that walks it.

use crate::error::BuildError;
use crate::temp_trie::{TempTrie, ROOT};
use std::collections::HashMap;

/// Sentinel returned by [`DoubleArray::lookup`] when the query is not in
/// the dictionary.
pub const NOT_FOUND: i32 = -1;

/// High bit of a `base`/`check` slot: when set, the slot holds a record
/// number (in the low 31 bits) rather than a transition offset.
const TERMINAL_BIT: u32 = 0x8000_0000;
const RECORD_MASK: u32 = 0x7FFF_FFFF;

/// A sentinel written to `check[1]` so the root slot is never mistaken for
/// a free slot during placement search.
const ROOT_CHECK_SENTINEL: u32 = 0xFFFF_FFFF;

/// An immutable, static exact-match dictionary encoded as a double array
/// with tail compression.
///
/// Build once from an ordered set of byte strings with [`DoubleArray::build`];
/// afterwards `base`, `check`, and `tails` never change, so concurrent
/// [`DoubleArray::lookup`] calls from any number of threads need no
/// synchronization.
#[derive(Debug, Clone)]
pub struct DoubleArray {
    base: Vec<u32>,
    check: Vec<u32>,
    tails: HashMap<u32, Vec<u8>>,
}

impl DoubleArray {
    /// Builds a dictionary from an ordered sequence of byte strings.
    /// `words[i]` is assigned record number `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateKey`] if the same string appears
    /// twice (or equals an existing tail-compressed word), or
    /// [`BuildError::NullByte`] if a string contains byte value 0.
    pub fn build<W: AsRef<[u8]>>(words: &[W]) -> Result<DoubleArray, BuildError> {
        let mut temp = TempTrie::new();
        for (i, word) in words.iter().enumerate() {
            temp.add(word.as_ref(), i as u32)?;
        }
        temp.expand_root_if_tail();

        // subtree_width_sum is only a sizing *hint*: it bounds the total
        // number of slots a tight packing would need, but placement offsets
        // are derived from raw byte values, so an early node with a small
        // child set sitting at a high byte can still probe well past this
        // hint. `lower` grows `base`/`check` on demand past it.
        let hint = (temp.subtree_width_sum(ROOT) + 2).max(2);
        let mut base = vec![0u32; hint];
        let mut check = vec![0u32; hint];
        check[1] = ROOT_CHECK_SENTINEL;

        let mut cursor = PlacementCursor {
            write_search_start: 2,
            write_end: 2,
        };
        lower(1, ROOT, &temp, &mut base, &mut check, &mut cursor);
        debug_assert_eq!(base.len(), check.len());

        base.truncate(cursor.write_end);
        check.truncate(cursor.write_end);

        Ok(DoubleArray {
            base,
            check,
            tails: temp.collect_tails(),
        })
    }

    /// Looks up `query`, returning its record number or [`NOT_FOUND`].
    ///
    /// Runs in `O(query.len())` plus, for tail-compressed entries, one
    /// suffix comparison. Never allocates, never panics: malformed queries
    /// and any (should-be-unreachable) inconsistency in `check` are both
    /// reported as [`NOT_FOUND`] rather than propagated as an error.
    pub fn lookup(&self, query: &[u8]) -> i32 {
        let mut prev: usize = 1;
        let mut pos: usize = 0;

        loop {
            let c: u32 = match pos.cmp(&query.len()) {
                std::cmp::Ordering::Less => query[pos] as u32,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => return NOT_FOUND,
            };

            let Some(&base_prev) = self.base.get(prev) else {
                return NOT_FOUND;
            };
            let Some(i) = (base_prev as usize).checked_add(c as usize) else {
                return NOT_FOUND;
            };
            if i >= self.check.len() || self.check[i] as usize != prev {
                return NOT_FOUND;
            }

            let bv = self.base[i];
            if bv & TERMINAL_BIT != 0 {
                let record = bv & RECORD_MASK;
                if c == 0 {
                    return record as i32;
                }
                return match self.tails.get(&record) {
                    Some(tail) if tail.as_slice() == &query[pos + 1..] => record as i32,
                    _ => NOT_FOUND,
                };
            }

            prev = i;
            pos += 1;
        }
    }

    /// Number of slots in `base`/`check` (their shared length).
    pub fn size_in_slots(&self) -> usize {
        self.base.len()
    }

    /// Number of tail-compressed suffixes stored in `tails`.
    pub fn tails_count(&self) -> usize {
        self.tails.len()
    }

    /// Memory footprint of the `base` array, in bytes.
    pub fn base_memory_bytes(&self) -> usize {
        self.base.len() * std::mem::size_of::<u32>()
    }

    /// Memory footprint of the `check` array, in bytes.
    pub fn check_memory_bytes(&self) -> usize {
        self.check.len() * std::mem::size_of::<u32>()
    }

    /// Memory footprint of the `tails` side table, in bytes.
    ///
    /// An approximation: counts each suffix's bytes plus its `u32` key,
    /// without accounting for `HashMap`'s own bucket overhead.
    pub fn tails_memory_bytes(&self) -> usize {
        self.tails
            .iter()
            .map(|(_, suffix)| std::mem::size_of::<u32>() + suffix.len())
            .sum()
    }

    /// Total memory footprint across `base`, `check`, and `tails`.
    pub fn total_memory_bytes(&self) -> usize {
        self.base_memory_bytes() + self.check_memory_bytes() + self.tails_memory_bytes()
    }
}

/// Cursors threaded through the recursive lowering pass.
struct PlacementCursor {
    /// Monotonically non-decreasing hint for where to begin the next
    /// placement search.
    write_search_start: usize,
    /// One past the highest slot index ever written.
    write_end: usize,
}

/// Grows `base`/`check` so that index `len - 1` is valid, if they aren't
/// already that long. Placement offsets are derived from raw byte values
/// (up to 255), so the working arrays can need to grow well past whatever
/// the initial sizing hint provided, even for small dictionaries.
fn ensure_capacity(base: &mut Vec<u32>, check: &mut Vec<u32>, len: usize) {
    if base.len() < len {
        base.resize(len, 0);
        check.resize(len, 0);
    }
}

/// Lowers the subtree rooted at `node_id` (in `trie`) into `base`/`check`,
/// writing its own state at `da_pos` and recursing into its children.
fn lower(
    da_pos: usize,
    node_id: usize,
    trie: &TempTrie,
    base: &mut Vec<u32>,
    check: &mut Vec<u32>,
    cursor: &mut PlacementCursor,
) {
    if trie.is_tail(node_id) {
        base[da_pos] = TERMINAL_BIT | trie.tail_record(node_id);
        return;
    }

    let record = trie.record(node_id);
    let children = trie.children(node_id);
    let (min_b, _max_b, width) = trie.outgoing_range(node_id);
    let min_b = min_b as usize;

    // No record and no children: only reachable for the root of an empty
    // dictionary (every other node is filled in the instant it's created).
    // There's nothing to place, so just give it a harmless, positive base.
    if width == 0 {
        base[da_pos] = 1;
        return;
    }

    ensure_capacity(base, check, cursor.write_search_start + 1);
    while check[cursor.write_search_start] != 0 {
        cursor.write_search_start += 1;
        ensure_capacity(base, check, cursor.write_search_start + 1);
    }

    let mut write_top = std::cmp::max(cursor.write_search_start, min_b + 1);
    loop {
        ensure_capacity(base, check, write_top + width);
        let record_slot_free = record.is_none() || check[write_top] == 0;
        let children_fit = children
            .iter()
            .all(|&(c, _)| check[write_top + (c as usize - min_b)] == 0);
        if record_slot_free && children_fit {
            break;
        }
        write_top += 1;
    }

    for &(c, _) in &children {
        check[write_top + (c as usize - min_b)] = da_pos as u32;
    }
    if let Some(rec) = record {
        base[write_top] = TERMINAL_BIT | rec;
        check[write_top] = da_pos as u32;
    }
    base[da_pos] = (write_top - min_b) as u32;

    for &(c, child_id) in &children {
        lower(
            write_top + (c as usize - min_b),
            child_id,
            trie,
            base,
            check,
            cursor,
        );
    }

    cursor.write_end = std::cmp::max(cursor.write_end, write_top + width);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let da = DoubleArray::build::<&str>(&[]).unwrap();
        assert_eq!(da.lookup(b"anything"), NOT_FOUND);
    }

    #[test]
    fn test_single_short_word() {
        let da = DoubleArray::build(&["a"]).unwrap();
        assert_eq!(da.lookup(b"a"), 0);
        assert_eq!(da.lookup(b""), NOT_FOUND);
        assert_eq!(da.lookup(b"ab"), NOT_FOUND);
        assert_eq!(da.lookup(b"b"), NOT_FOUND);
    }

    #[test]
    fn test_prefix_relationship() {
        let da = DoubleArray::build(&["a", "ab", "abc"]).unwrap();
        assert_eq!(da.lookup(b"a"), 0);
        assert_eq!(da.lookup(b"ab"), 1);
        assert_eq!(da.lookup(b"abc"), 2);
        assert_eq!(da.lookup(b"abcd"), NOT_FOUND);
        assert_eq!(da.lookup(b"abd"), NOT_FOUND);
    }

    #[test]
    fn test_branching_and_tail_compression() {
        let words = ["a", "ab", "aaa", "abc", "abcd", "abz"];
        let da = DoubleArray::build(&words).unwrap();
        for (i, w) in words.iter().enumerate() {
            assert_eq!(da.lookup(w.as_bytes()), i as i32);
        }
        assert_eq!(da.lookup(b"abcde"), NOT_FOUND);
        assert_eq!(da.lookup(b"abd"), NOT_FOUND);
        assert!(da.tails_count() >= 1);
    }

    #[test]
    fn test_tail_expansion_cascade() {
        let da = DoubleArray::build(&["abcd", "abce"]).unwrap();
        assert_eq!(da.lookup(b"abcd"), 0);
        assert_eq!(da.lookup(b"abce"), 1);
        assert_eq!(da.lookup(b"abc"), NOT_FOUND);
    }

    #[test]
    fn test_non_ascii_bytes() {
        let da = DoubleArray::build(&["猫", "犬", "猫耳"]).unwrap();
        assert_eq!(da.lookup("猫".as_bytes()), 0);
        assert_eq!(da.lookup("犬".as_bytes()), 1);
        assert_eq!(da.lookup("猫耳".as_bytes()), 2);
        let mut bogus = "猫".as_bytes().to_vec();
        bogus.push(b'd');
        assert_eq!(da.lookup(&bogus), NOT_FOUND);
    }

    #[test]
    fn test_duplicate_insertion_is_a_build_error() {
        let err = DoubleArray::build(&["a", "b", "a"]).unwrap_err();
        assert_eq!(err, BuildError::DuplicateKey(b"a".to_vec()));
    }

    #[test]
    fn test_null_byte_is_a_build_error() {
        let words: [&[u8]; 1] = [&[b'a', 0, b'b']];
        let err = DoubleArray::build(&words).unwrap_err();
        assert_eq!(err, BuildError::NullByte(vec![b'a', 0, b'b']));
    }

    #[test]
    fn test_shared_first_byte_forces_array_growth() {
        // "ab" and "ac" share byte 'a' (0x61) as their only common prefix,
        // with no record sitting at the branch node itself. The placement
        // offset for that branch's children is anchored near byte 'a', far
        // past what subtree_width_sum's hint would preallocate for a
        // two-word dictionary.
        let da = DoubleArray::build(&["ab", "ac"]).unwrap();
        assert_eq!(da.lookup(b"ab"), 0);
        assert_eq!(da.lookup(b"ac"), 1);
        assert_eq!(da.lookup(b"a"), NOT_FOUND);
        assert_eq!(da.lookup(b"ad"), NOT_FOUND);
    }

    #[test]
    fn test_first_record_with_descendants() {
        // Record 0 must not be confused with "no record" once the node
        // also has children.
        let da = DoubleArray::build(&["a", "ab"]).unwrap();
        assert_eq!(da.lookup(b"a"), 0);
        assert_eq!(da.lookup(b"ab"), 1);
    }

    #[test]
    fn test_order_independence_of_semantics() {
        let forward = DoubleArray::build(&["a", "ab", "aaa", "abc", "abcd", "abz"]).unwrap();
        let backward = DoubleArray::build(&["abz", "abcd", "abc", "aaa", "ab", "a"]).unwrap();

        // Layouts differ, but each word still looks up to *some* valid
        // record, and the set of (word, record) pairs each build answers
        // matches its own insertion order.
        let forward_words = ["a", "ab", "aaa", "abc", "abcd", "abz"];
        for (i, w) in forward_words.iter().enumerate() {
            assert_eq!(forward.lookup(w.as_bytes()), i as i32);
        }
        let backward_words = ["abz", "abcd", "abc", "aaa", "ab", "a"];
        for (i, w) in backward_words.iter().enumerate() {
            assert_eq!(backward.lookup(w.as_bytes()), i as i32);
        }
    }

    #[test]
    fn test_check_consistency_invariant() {
        let da = DoubleArray::build(&["a", "ab", "aaa", "abc", "abcd", "abz"]).unwrap();
        for i in 2..da.check.len() {
            let p = da.check[i];
            if p == 0 {
                continue;
            }
            let p = p as usize;
            assert!(p < da.base.len(), "check[{i}] = {p} is out of range");
            let base_p = da.base[p] & RECORD_MASK;
            let found = (0u32..=255).any(|c| base_p as usize + c as usize == i);
            assert!(found, "no byte c reproduces check[{i}] from base[{p}]");
        }
    }

    #[test]
    fn test_base_positivity_invariant() {
        let da = DoubleArray::build(&["a", "ab", "aaa", "abc", "abcd", "abz"]).unwrap();
        for (i, &b) in da.base.iter().enumerate() {
            if i < 2 || b == 0 {
                continue;
            }
            if b & TERMINAL_BIT != 0 {
                continue;
            }
            assert!(b >= 1, "base[{i}] = {b} should be >= 1");
        }
    }
}

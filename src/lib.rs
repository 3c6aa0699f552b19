//! # datrie
//!
//! A static double-array trie with tail compression (DA-Trie+TAIL): an
//! in-memory exact-match dictionary. Build once from an ordered set of byte
//! strings, then answer `lookup(query) -> record_no | NOT_FOUND` in time
//! proportional to the query length.
//!
//! ## Shape of the crate
//!
//! - [`TempTrie`] is the mutable, arena-backed trie used only during
//!   construction, with per-node tail compression for unique suffixes.
//! - [`DoubleArray`] is the immutable result: two parallel `base`/`check`
//!   arrays plus a `tails` side table, produced by lowering a `TempTrie`.
//!   It is the only type queried at lookup time.
//! - [`Keyset`] collects an ordered word list to hand to
//!   [`DoubleArray::build`]; [`corpus`] loads one from a file or stdin.
//!
//! ## Example
//!
//! ```
//! use datrie::{DoubleArray, NOT_FOUND};
//!
//! let words = ["a", "ab", "abc"];
//! let dict = DoubleArray::build(&words).unwrap();
//!
//! assert_eq!(dict.lookup(b"a"), 0);
//! assert_eq!(dict.lookup(b"ab"), 1);
//! assert_eq!(dict.lookup(b"abc"), 2);
//! assert_eq!(dict.lookup(b"abcd"), NOT_FOUND);
//! ```
//!
//! ## Non-goals
//!
//! Mutation after build, prefix enumeration, longest-match or
//! common-prefix queries, persistence to disk, Unicode normalization, and
//! concurrent modification are all out of scope. Once built, a
//! [`DoubleArray`] is immutable and safe to query from any number of
//! threads concurrently.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod corpus;
pub mod double_array;
pub mod error;
pub mod keyset;
pub mod temp_trie;

pub use double_array::{DoubleArray, NOT_FOUND};
pub use error::BuildError;
pub use keyset::Keyset;
pub use temp_trie::TempTrie;

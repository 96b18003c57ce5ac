//! This crate provides a binary bitwise trie for fixed-width integer keys (by default `u32`, such
//! as IPv4 addresses). Any lookup performs a *closest match*: if the key is not stored, the search
//! returns the entry whose key shares the longest bit-prefix with the query, resolving ties in the
//! direction in which the query left the trie.
//!
//! # Description of the Tree
//!
//! The tree is structured as follows: Each node consists of a container for a potential entry
//! (`Option`), and two optional children. A node is a leaf iff it has no children, and only leaves
//! hold an entry. Traversing the tree is done by looking at the bits of the key, starting at the
//! most significant one, one bit per level. If the bit is not set, we take the left branch, and
//! otherwise, we take the right one.
//!
//! A key is stored at the first level where its bits differ from the bits of all other keys. When
//! a new key reaches a leaf holding a different key, the leaf is split: one inner node is created
//! for every further bit on which both keys agree, followed by two new leaves. The tree is never
//! rebalanced, and keys are never removed. Its depth is therefore bounded by the key width.
//!
//! # Closest match
//!
//! [`BitTrie::search`] follows the bits of the query as long as the corresponding branch exists.
//! At the first node where the branch is missing, it takes the other one and keeps preferring the
//! direction of the missing bit on the way down. If the query wanted a `0`, the result is the
//! smallest key above the query, and if it wanted a `1`, the largest key below it.
//!
//! ```
//! # use bit_trie::*;
//! # fn main() -> Result<()> {
//! let mut trie: BitTrie<u32, _> = BitTrie::new();
//! trie.insert(0x0000_0000, "A");
//! trie.insert(0x0000_0001, "B");
//! trie.insert(0xffff_ffff, "C");
//! assert_eq!(trie.search(0x0000_0000)?.value(), &"A");
//! assert_eq!(trie.search(0x0000_0002)?.value(), &"B");
//! assert_eq!(trie.search(0x8000_0000)?.value(), &"C");
//! # Ok(())
//! # }
//! ```
//!
//! # Operations on the tree
//!
//! The following are the computational complexities of the functions, where `n` is the number of
//! elements in the tree, and `w` is the width of the key in bits.
//!
//! | Operation                          | Complexity |
//! |------------------------------------|------------|
//! | `insert`, `insert_range`           | `O(w)`     |
//! | `search`, `get`, `contains_key`    | `O(w)`     |
//! | `show`, `iter`                     | `O(n w)`   |
//! | `clear` (calling the release hook) | `O(n w)`   |
//! | `size`, `node_count`, `height`     | `O(1)`     |
//!
//! Inserting a key that is already present keeps the existing entry, but it is still counted by
//! [`BitTrie::size`].

#![deny(missing_docs)]

mod error;
mod fmt;
mod inner;
mod key;
#[cfg(test)]
mod fuzzing;

pub mod ip;
pub mod loader;
pub mod trie;

pub use error::{Error, Result};
pub use inner::Entry;
pub use key::{Key, BITS_PER_BYTE, BITS_PER_WORD, BYTES_PER_WORD};
pub use trie::BitTrie;

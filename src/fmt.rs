//! Formatting implementation for the BitTrie

use std::fmt::{Debug, Formatter, Result};

use super::*;

impl<K: Debug, T: Debug> Debug for BitTrie<K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.root {
            Some(root) => DebugNode(self, root).fmt(f),
            None => f.debug_map().finish(),
        }
    }
}

/// Leaves are written as a single-element map, branches as a tuple of their children, where a
/// missing child is written as `_`.
struct DebugNode<'a, K, T>(&'a BitTrie<K, T>, usize);

struct Missing;

impl Debug for Missing {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("_")
    }
}

impl<K: Debug, T: Debug> Debug for DebugNode<'_, K, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let trie = self.0;
        let node = &trie.table[self.1];
        match (node.entry.as_ref(), node.left, node.right) {
            (Some(entry), _, _) => f.debug_map().entry(&entry.key, &entry.value).finish(),
            (None, Some(left), Some(right)) => f
                .debug_tuple("")
                .field(&Self(trie, left))
                .field(&Self(trie, right))
                .finish(),
            (None, Some(left), None) => f
                .debug_tuple("")
                .field(&Self(trie, left))
                .field(&Missing)
                .finish(),
            (None, None, Some(right)) => f
                .debug_tuple("")
                .field(&Missing)
                .field(&Self(trie, right))
                .finish(),
            (None, None, None) => f.write_str("()"),
        }
    }
}

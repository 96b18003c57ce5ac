//! The node arena of a BitTrie.

use std::{
    collections::TryReserveError,
    ops::{Index, IndexMut},
};

use crate::key::{is_bit_set, Key};

/// A key together with the value stored for it. Every leaf of the trie owns exactly one entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, T> {
    pub(crate) key: K,
    pub(crate) value: T,
}

impl<K: Copy, T> Entry<K, T> {
    pub(crate) fn new(key: K, value: T) -> Self {
        Self { key, value }
    }

    /// The key of the entry.
    pub fn key(&self) -> K {
        self.key
    }

    /// A reference to the value of the entry.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Split the entry into its key and value.
    pub fn into_parts(self) -> (K, T) {
        (self.key, self.value)
    }
}

/// A binary node. It is a leaf iff both children are missing, and only leaves hold an entry.
#[derive(Clone)]
pub(crate) struct Node<K, T> {
    pub(crate) entry: Option<Entry<K, T>>,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<K, T> Node<K, T> {
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The arena holding all nodes of a trie, addressed by their index.
#[derive(Clone)]
pub(crate) struct Table<K, T>(Vec<Node<K, T>>);

impl<K, T> Default for Table<K, T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K, T> Index<usize> for Table<K, T> {
    type Output = Node<K, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<K, T> IndexMut<usize> for Table<K, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

pub(crate) enum Direction {
    /// A leaf is reached.
    Reached,
    /// Enter the next index and search again.
    Enter { next: usize },
    /// The child selected by the key is missing. `right` is the direction the key asked for.
    Missing { right: bool },
}

pub(crate) enum DirectionForInsert {
    /// A leaf with the same key is reached.
    Duplicate,
    /// Enter the next index and insert again.
    Enter { next: usize },
    /// Insert a new leaf as the child at the given position.
    NewLeaf { right: bool },
    /// A leaf with a different key is reached. It must become a branch.
    Split,
}

impl<K, T> Table<K, T> {
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(capacity)?;
        Ok(Self(nodes))
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear()
    }

    /// Push a new node without children and return its index.
    pub(crate) fn new_node(&mut self, entry: Option<Entry<K, T>>) -> usize {
        self.0.push(Node {
            entry,
            left: None,
            right: None,
        });
        self.0.len() - 1
    }

    /// Get the child of a node, either to the left or the right
    #[inline(always)]
    pub(crate) fn get_child(&self, idx: usize, right: bool) -> Option<usize> {
        if right {
            self[idx].right
        } else {
            self[idx].left
        }
    }

    /// set the child of a node (either to the left or the right), and return the index of the old child.
    #[inline(always)]
    pub(crate) fn set_child(&mut self, idx: usize, child: usize, right: bool) -> Option<usize> {
        if right {
            self[idx].right.replace(child)
        } else {
            self[idx].left.replace(child)
        }
    }
}

impl<K: Key, T> Table<K, T> {
    /// Get the directions from some node `cur` to get closer to the key `repr`. `mask` selects the
    /// bit that decides the branch at `cur`.
    #[inline(always)]
    pub(crate) fn get_direction(&self, cur: usize, repr: K::R, mask: K::R) -> Direction {
        if self[cur].is_leaf() {
            Direction::Reached
        } else {
            let right = is_bit_set(repr, mask);
            match self.get_child(cur, right) {
                Some(next) => Direction::Enter { next },
                None => Direction::Missing { right },
            }
        }
    }

    /// Get the directions from some node `cur` to insert the key `repr`.
    #[inline(always)]
    pub(crate) fn get_direction_for_insert(
        &self,
        cur: usize,
        repr: K::R,
        mask: K::R,
    ) -> DirectionForInsert {
        let node = &self[cur];
        if node.is_leaf() {
            match &node.entry {
                Some(entry) if entry.key.repr() == repr => DirectionForInsert::Duplicate,
                _ => DirectionForInsert::Split,
            }
        } else {
            let right = is_bit_set(repr, mask);
            match self.get_child(cur, right) {
                Some(next) => DirectionForInsert::Enter { next },
                None => DirectionForInsert::NewLeaf { right },
            }
        }
    }
}

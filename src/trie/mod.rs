//! Implementation of the bitwise trie.

use std::{io::Write, sync::Arc};

#[cfg(feature = "ipnet")]
use std::net::Ipv4Addr;

#[cfg(feature = "ipnet")]
use ipnet::Ipv4Net;
use tracing::{error, trace};

use crate::inner::{Direction, DirectionForInsert, Table};
use crate::key::is_bit_set;
use crate::{Entry, Error, Key, Result};

mod iter;

pub use iter::*;

/// Callback that writes a single entry to a sink.
pub type Renderer<K, T> =
    Arc<dyn Fn(&Entry<K, T>, &mut dyn Write) -> std::io::Result<()> + Send + Sync>;

/// Callback that receives every entry still stored in the trie when it is torn down.
pub type Release<K, T> = Arc<dyn Fn(Entry<K, T>) + Send + Sync>;

/// Binary trie over the bits of fixed-width keys, offering closest-match lookup.
///
/// Each key is stored at a leaf, at the first level where its bits differ from all other keys.
/// Inner nodes never store an entry.
pub struct BitTrie<K, T> {
    pub(crate) table: Table<K, T>,
    pub(crate) root: Option<usize>,
    inserts: usize,
    height: usize,
    renderer: Option<Renderer<K, T>>,
    release: Option<Release<K, T>>,
}

impl<K, T> Default for BitTrie<K, T> {
    fn default() -> Self {
        Self {
            table: Table::default(),
            root: None,
            inserts: 0,
            height: 0,
            renderer: None,
            release: None,
        }
    }
}

impl<K: Clone, T: Clone> Clone for BitTrie<K, T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            root: self.root,
            inserts: self.inserts,
            height: self.height,
            renderer: self.renderer.clone(),
            release: self.release.clone(),
        }
    }
}

impl<K, T> BitTrie<K, T> {
    /// Create an empty trie without any callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trie with space for `capacity` nodes. Fails if the memory cannot be
    /// reserved.
    ///
    /// ```
    /// # use bit_trie::*;
    /// let trie: BitTrie<u32, ()> = BitTrie::try_with_capacity(64).unwrap();
    /// assert!(trie.is_empty());
    /// assert!(BitTrie::<u32, ()>::try_with_capacity(usize::MAX).is_err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut trie = Self::default();
        trie.table = Table::try_with_capacity(capacity)?;
        Ok(trie)
    }

    /// Set the function used by [`Self::show`] and [`Self::show_value`] to display an entry.
    pub fn with_renderer<F>(mut self, render: F) -> Self
    where
        F: Fn(&Entry<K, T>, &mut dyn Write) -> std::io::Result<()> + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(render));
        self
    }

    /// Set the function that releases each stored entry when the trie is cleared or dropped.
    /// Without it, the entries are simply dropped.
    pub fn with_release<F>(mut self, release: F) -> Self
    where
        F: Fn(Entry<K, T>) + Send + Sync + 'static,
    {
        self.release = Some(Arc::new(release));
        self
    }

    /// The number of insertions performed on the trie. Inserting a key that is already present
    /// still counts.
    ///
    /// ```
    /// # use bit_trie::*;
    /// let mut trie: BitTrie<u32, _> = BitTrie::new();
    /// trie.insert(1, "a");
    /// trie.insert(1, "b");
    /// assert_eq!(trie.size(), 2);
    /// assert_eq!(trie.get(1), Some(&"a"));
    /// ```
    pub fn size(&self) -> usize {
        self.inserts
    }

    /// The number of inner nodes, computed as the total number of nodes minus [`Self::size`].
    pub fn node_count(&self) -> usize {
        self.table.len().saturating_sub(self.inserts)
    }

    /// The total number of nodes (leaves and inner nodes) in the trie.
    pub fn total_nodes(&self) -> usize {
        self.table.len()
    }

    /// The maximum number of bit-levels from the root to any leaf ever reached by an insertion.
    /// A trie with a single leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the trie holds no entry.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Display a single entry with the renderer. Without a renderer, nothing is written and
    /// [`Error::MissingRenderer`] is returned.
    pub fn show_value<W: Write>(&self, entry: &Entry<K, T>, sink: &mut W) -> Result<()> {
        let render = self.get_renderer()?;
        let sink: &mut dyn Write = sink;
        render(entry, sink)?;
        Ok(())
    }

    /// Display all entries in ascending key order with the renderer. Without a renderer, nothing is
    /// written and [`Error::MissingRenderer`] is returned.
    ///
    /// ```
    /// # use bit_trie::*;
    /// # fn main() -> Result<()> {
    /// let mut trie = BitTrie::<u32, &str>::new()
    ///     .with_renderer(|e, w| writeln!(w, "{} -> {}", e.key(), e.value()));
    /// trie.insert(20, "b");
    /// trie.insert(10, "a");
    /// let mut out = Vec::new();
    /// trie.show(&mut out)?;
    /// assert_eq!(String::from_utf8(out).unwrap(), "10 -> a\n20 -> b\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn show<W: Write>(&self, sink: &mut W) -> Result<()> {
        let render = self.get_renderer()?;
        let sink: &mut dyn Write = sink;
        for entry in self.iter() {
            render(entry, sink)?;
        }
        Ok(())
    }

    fn get_renderer(&self) -> Result<&Renderer<K, T>> {
        self.renderer.as_ref().ok_or_else(|| {
            error!("no display function defined");
            Error::MissingRenderer
        })
    }

    /// Remove all entries, handing each of them to the release function (if any) in post-order,
    /// and reset all statistics.
    pub fn clear(&mut self) {
        self.release_all();
        self.table.clear();
        self.root = None;
        self.inserts = 0;
        self.height = 0;
    }

    fn release_all(&mut self) {
        let (Some(release), Some(root)) = (self.release.clone(), self.root) else {
            return;
        };
        let mut stack = vec![(root, false)];
        while let Some((idx, visited)) = stack.pop() {
            if visited {
                if let Some(entry) = self.table[idx].entry.take() {
                    release(entry);
                }
                continue;
            }
            stack.push((idx, true));
            if let Some(right) = self.table[idx].right {
                stack.push((right, false));
            }
            if let Some(left) = self.table[idx].left {
                stack.push((left, false));
            }
        }
    }
}

impl<K: Key, T> BitTrie<K, T> {
    /// Insert a new entry, unless the key is already present. An existing entry is never replaced.
    ///
    /// ```
    /// # use bit_trie::*;
    /// let mut trie: BitTrie<u32, _> = BitTrie::new();
    /// trie.insert(10, "a");
    /// trie.insert(20, "b");
    /// trie.insert(10, "c");
    /// assert_eq!(trie.get(10), Some(&"a"));
    /// assert_eq!(trie.height(), 28);
    /// ```
    pub fn insert(&mut self, key: K, value: T) {
        self.inserts += 1;

        let Some(mut idx) = self.root else {
            self.root = Some(self.table.new_node(Some(Entry::new(key, value))));
            self.height = 1;
            return;
        };

        let repr = key.repr();
        let mut mask = K::top_bit();
        let mut depth = 0;
        let depth = loop {
            match self.table.get_direction_for_insert(idx, repr, mask) {
                DirectionForInsert::Enter { next } => {
                    idx = next;
                    mask = mask >> 1;
                    depth += 1;
                }
                DirectionForInsert::NewLeaf { right } => {
                    let leaf = self.table.new_node(Some(Entry::new(key, value)));
                    self.table.set_child(idx, leaf, right);
                    break depth + 1;
                }
                DirectionForInsert::Split => {
                    break self.split(idx, Entry::new(key, value), mask, depth);
                }
                DirectionForInsert::Duplicate => {
                    trace!("ignoring insertion of a key that is already present");
                    break depth;
                }
            }
        };

        self.height = self.height.max(depth);
    }

    /// Turn the leaf at `idx` (at the given depth) into a branch that distinguishes its entry from
    /// `entry`. Both keys agree on all bits above `mask`. Returns the depth of the new leaves.
    fn split(&mut self, idx: usize, entry: Entry<K, T>, mut mask: K::R, mut depth: usize) -> usize {
        let Some(old) = self.table[idx].entry.take() else {
            return depth;
        };
        let old_repr = old.key.repr();
        let new_repr = entry.key.repr();
        let mut cur = idx;
        loop {
            depth += 1;
            let old_right = is_bit_set(old_repr, mask);
            let new_right = is_bit_set(new_repr, mask);
            if old_right == new_right {
                let next = self.table.new_node(None);
                self.table.set_child(cur, next, new_right);
                cur = next;
                mask = mask >> 1;
            } else {
                let old_leaf = self.table.new_node(Some(old));
                let new_leaf = self.table.new_node(Some(entry));
                self.table.set_child(cur, old_leaf, old_right);
                self.table.set_child(cur, new_leaf, new_right);
                trace!(depth = depth, "split leaf into a new branch");
                return depth;
            }
        }
    }

    /// Insert a copy of `value` under both `lower` and `upper`, such that a lookup anywhere in
    /// between finds one of the two bounds.
    pub fn insert_range(&mut self, lower: K, upper: K, value: T)
    where
        T: Clone,
    {
        self.insert(lower, value.clone());
        self.insert(upper, value);
    }

    /// Find the entry whose key matches `key` most closely. If the key is present, its entry is
    /// returned. Otherwise, the search follows the bits of `key` as far as possible. At the first
    /// node where the branch for the next bit is missing, it descends to a leaf, always preferring
    /// the branch in the direction of that missing bit. Searching an empty trie is an error.
    ///
    /// ```
    /// # use bit_trie::*;
    /// # fn main() -> Result<()> {
    /// let mut trie: BitTrie<u32, _> = BitTrie::new();
    /// trie.insert(10, "a");
    /// trie.insert(20, "b");
    /// trie.insert(30, "c");
    /// assert_eq!(trie.search(20)?.value(), &"b");
    /// assert_eq!(trie.search(25)?.key(), 30);
    /// assert_eq!(trie.search(0)?.key(), 10);
    /// assert!(matches!(BitTrie::<u32, ()>::new().search(1), Err(Error::EmptyTrie)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn search(&self, key: K) -> Result<&Entry<K, T>> {
        let mut idx = self.root.ok_or(Error::EmptyTrie)?;
        let repr = key.repr();
        let mut mask = K::top_bit();
        loop {
            match self.table.get_direction(idx, repr, mask) {
                Direction::Reached => return Ok(self.leaf_entry(idx)),
                Direction::Enter { next } => {
                    idx = next;
                    mask = mask >> 1;
                }
                Direction::Missing { right } => return Ok(self.closest_match(idx, right)),
            }
        }
    }

    /// Descend from `idx` to a leaf, preferring the right branch if `right`, and the left one
    /// otherwise.
    fn closest_match(&self, mut idx: usize, right: bool) -> &Entry<K, T> {
        loop {
            let node = &self.table[idx];
            if node.is_leaf() {
                return self.leaf_entry(idx);
            }
            idx = match (self.table.get_child(idx, right), self.table.get_child(idx, !right)) {
                (Some(next), _) | (None, Some(next)) => next,
                (None, None) => unreachable!(),
            };
        }
    }

    fn leaf_entry(&self, idx: usize) -> &Entry<K, T> {
        match &self.table[idx].entry {
            Some(entry) => entry,
            None => unreachable!("leaf {idx} without an entry"),
        }
    }

    /// Get the value stored exactly at `key`.
    pub fn get(&self, key: K) -> Option<&T> {
        self.search(key)
            .ok()
            .filter(|entry| entry.key.repr() == key.repr())
            .map(|entry| &entry.value)
    }

    /// Check if a key is present in the trie.
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(feature = "ipnet")]
impl<K: Key + From<Ipv4Addr>, T: Clone> BitTrie<K, T> {
    /// Insert a copy of `value` under the first and the last address of `net`.
    ///
    /// ```
    /// # use bit_trie::*;
    /// # use ipnet::Ipv4Net;
    /// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    /// let mut trie: BitTrie<u32, _> = BitTrie::new();
    /// trie.insert_net("10.0.0.0/8".parse::<Ipv4Net>()?, "ten");
    /// assert_eq!(trie.get(0x0a00_0000), Some(&"ten"));
    /// assert_eq!(trie.get(0x0aff_ffff), Some(&"ten"));
    /// assert_eq!(trie.size(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert_net(&mut self, net: Ipv4Net, value: T) {
        self.insert_range(net.network().into(), net.broadcast().into(), value)
    }
}

impl<K, T> Drop for BitTrie<K, T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

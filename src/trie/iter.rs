//! Module that contains the implementation for the iterators

use crate::*;

/// An iterator over all entries of a [`BitTrie`] in ascending key order.
#[derive(Clone)]
pub struct Iter<'a, K, T> {
    pub(crate) trie: &'a BitTrie<K, T>,
    pub(crate) nodes: Vec<usize>,
}

impl<'a, K, T> Iterator for Iter<'a, K, T> {
    type Item = &'a Entry<K, T>;

    fn next(&mut self) -> Option<&'a Entry<K, T>> {
        while let Some(cur) = self.nodes.pop() {
            let node = &self.trie.table[cur];
            if let Some(right) = node.right {
                self.nodes.push(right);
            }
            if let Some(left) = node.left {
                self.nodes.push(left);
            }
            if let Some(entry) = &node.entry {
                return Some(entry);
            }
        }
        None
    }
}

/// An iterator over all keys of a [`BitTrie`] in ascending order.
#[derive(Clone)]
pub struct Keys<'a, K, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<'a, K: Copy, T> Iterator for Keys<'a, K, T> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|e| e.key)
    }
}

/// An iterator over all values of a [`BitTrie`] in ascending order of their keys.
#[derive(Clone)]
pub struct Values<'a, K, T> {
    pub(crate) inner: Iter<'a, K, T>,
}

impl<'a, K, T> Iterator for Values<'a, K, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|e| &e.value)
    }
}

/// An iterator over all owned entries of a [`BitTrie`] in ascending key order. Entries that are
/// never yielded are released together with the trie.
pub struct IntoIter<K, T> {
    trie: BitTrie<K, T>,
    nodes: Vec<usize>,
}

impl<K, T> Iterator for IntoIter<K, T> {
    type Item = Entry<K, T>;

    fn next(&mut self) -> Option<Entry<K, T>> {
        while let Some(cur) = self.nodes.pop() {
            let node = &mut self.trie.table[cur];
            if let Some(right) = node.right {
                self.nodes.push(right);
            }
            if let Some(left) = node.left {
                self.nodes.push(left);
            }
            if let Some(entry) = node.entry.take() {
                return Some(entry);
            }
        }
        None
    }
}

impl<K, T> IntoIterator for BitTrie<K, T> {
    type Item = Entry<K, T>;

    type IntoIter = IntoIter<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        let nodes = self.root.into_iter().collect();
        IntoIter { trie: self, nodes }
    }
}

impl<'a, K, T> IntoIterator for &'a BitTrie<K, T> {
    type Item = &'a Entry<K, T>;

    type IntoIter = Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, T> BitTrie<K, T> {
    /// An iterator visiting all entries in ascending key order.
    ///
    /// ```
    /// # use bit_trie::*;
    /// let mut trie: BitTrie<u32, _> = BitTrie::new();
    /// trie.insert(0xffff_ffff, "c");
    /// trie.insert(0, "a");
    /// trie.insert(1, "b");
    /// assert_eq!(
    ///     trie.iter().map(|e| (e.key(), *e.value())).collect::<Vec<_>>(),
    ///     vec![(0, "a"), (1, "b"), (0xffff_ffff, "c")]
    /// );
    /// ```
    pub fn iter(&self) -> Iter<'_, K, T> {
        Iter {
            trie: self,
            nodes: self.root.into_iter().collect(),
        }
    }

    /// An iterator visiting all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, T> {
        Keys { inner: self.iter() }
    }

    /// An iterator visiting all values in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, T> {
        Values { inner: self.iter() }
    }
}

impl<K: Key, T> FromIterator<(K, T)> for BitTrie<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut trie = BitTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Key, T> Extend<(K, T)> for BitTrie<K, T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(k, v)| self.insert(k, v));
    }
}

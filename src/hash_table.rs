//! HashTable: fixed bucket array of chains routed by a universal hash.

use crate::chain::Chain;
use crate::key::IntKey;
use crate::params::HashParams;
use core::fmt;

/// An integer multiset with `bucket_count` chained buckets.
///
/// The bucket count is fixed by the [`HashParams`] the table is built from;
/// there is no resizing. Duplicate inserts add another entry, and `remove`
/// drops one entry at a time.
pub struct HashTable<K = i64> {
    params: HashParams,
    buckets: Box<[Chain<K>]>,
    len: usize,
}

impl<K: IntKey> HashTable<K> {
    /// Allocate `params.bucket_count()` empty buckets.
    pub fn new(params: HashParams) -> Self {
        let buckets = (0..params.bucket_count()).map(|_| Chain::new()).collect();
        Self {
            params,
            buckets,
            len: 0,
        }
    }

    pub fn params(&self) -> &HashParams {
        &self.params
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push `key` onto the front of its bucket. Always succeeds; an
    /// existing equal key is kept and a second entry is added.
    pub fn insert(&mut self, key: K) {
        let b = self.params.hash(key);
        self.buckets[b].push(key);
        self.len += 1;
    }

    pub fn search(&self, key: K) -> bool {
        self.buckets[self.params.hash(key)].contains(&key)
    }

    /// Remove one entry equal to `key`. Returns `false` if none was stored.
    pub fn remove(&mut self, key: K) -> bool {
        let b = self.params.hash(key);
        let removed = self.buckets[b].delete(&key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// How many entries equal to `key` are stored.
    pub fn count(&self, key: K) -> usize {
        self.buckets[self.params.hash(key)]
            .iter()
            .filter(|&&v| v == key)
            .count()
    }

    pub fn bucket(&self, index: usize) -> Option<&Chain<K>> {
        self.buckets.get(index)
    }

    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Chain::len)
    }

    /// Length of the longest chain; 0 for an empty table.
    pub fn max_chain_len(&self) -> usize {
        self.chain_lengths().max().unwrap_or(0)
    }

    /// Remove every entry, keeping the bucket array and parameters.
    pub fn clear(&mut self) {
        for c in self.buckets.iter_mut() {
            c.clear();
        }
        self.len = 0;
    }

    /// Free every chain, then the bucket array, then the table.
    pub fn release(self) {
        for c in self.buckets.into_vec() {
            c.release();
        }
    }

    /// Entries in bucket order; within a bucket, most recent insert first.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            it: self.buckets.iter().flatten(),
            remaining: self.len,
        }
    }
}

impl<K: IntKey> Extend<K> for HashTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<K: IntKey> fmt::Debug for HashTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over every stored entry of a `HashTable`.
pub struct Iter<'a, K> {
    it: core::iter::Flatten<core::slice::Iter<'a, Chain<K>>>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let v = self.it.next()?;
        self.remaining -= 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<'a, K: IntKey> IntoIterator for &'a HashTable<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

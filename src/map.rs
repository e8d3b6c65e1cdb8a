//! # String-Keyed Map
//!
//! A hash table from text keys to text values with separate chaining and a
//! bucket count fixed at construction. There is no rehashing; chains simply
//! grow. This is the structure behind loaded configuration files.
//!
//! ## Layout
//!
//! ```text
//! buckets: [ chain 0 ] -> (key, value) (key, value)
//!          [ chain 1 ] -> (key, value)
//!          [ chain 2 ] ->
//!          ...
//! ```
//!
//! Bucket selection is `djb2(key) % bucket_count`, the same hash the
//! [`TextBuf`] type exposes.
//!
//! ## Duplicate Keys
//!
//! `insert` never rejects or replaces: a second pair with an existing key is
//! appended behind the first, and `get` scans each chain front to back, so
//! the **earliest** inserted pair wins lookups. Later duplicates only become
//! visible through [`StrMap::iter`].

use crate::text::{djb2, TextBuf};

#[derive(Debug)]
pub struct StrMap {
    buckets: Box<[Vec<(TextBuf, TextBuf)>]>,
    len: usize,
}

impl StrMap {
    /// Map with `bucket_count` fixed chains, all empty.
    pub fn new(bucket_count: usize) -> StrMap {
        assert!(bucket_count > 0, "bucket count must be positive");
        StrMap {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Copies `key` and `value` into owned buffers and appends the pair to
    /// its chain. Duplicate keys coexist; see the module notes.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.insert_bufs(TextBuf::from(key), TextBuf::from(value));
    }

    /// `insert` for already-built buffers, moving them without copying.
    pub fn insert_bufs(&mut self, key: TextBuf, value: TextBuf) {
        let index = self.bucket_index(key.as_bytes());
        self.buckets[index].push((key, value));
        self.len += 1;
    }

    /// Value of the earliest-inserted pair with this key, if any.
    pub fn get(&self, key: &str) -> Option<&TextBuf> {
        let index = self.bucket_index(key.as_bytes());
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.as_bytes() == key.as_bytes())
            .map(|(_, v)| v)
    }

    /// Number of stored pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// All pairs in bucket order, then chain order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&TextBuf, &TextBuf)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }

    fn bucket_index(&self, key: &[u8]) -> usize {
        (djb2(key) % self.buckets.len() as u64) as usize
    }
}

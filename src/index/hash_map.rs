//! Separately chained hash map keyed by strings, with occurrence counting.
//!
//! Each entry remembers how many times its key was `put`. A repeated `put`
//! bumps that counter and keeps the value from the first insertion. The
//! logical `size` counts every successful `put` (including bumps) minus
//! every `remove`, and the bucket array doubles whenever `size / capacity`
//! reaches 1.0. A rebuilt entry starts over at one occurrence.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::types::{WordStatError, WsResult, DEFAULT_CAPACITY};

/// A live key/value pair plus the number of times the key was inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    key: String,
    value: V,
    occurrences: usize,
}

impl<V> Entry<V> {
    fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            occurrences: 1,
        }
    }

    /// The key this entry is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value stored by the first insertion of this key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// How many times the key was `put` since the entry was (re)built.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }
}

/// Chain of entries sharing one slot. Head is the most recent new key.
type Bucket<V> = VecDeque<Entry<V>>;

/// Deterministic 32-bit polynomial hash (`h = 31 * h + c`) over the key's
/// code points. May be negative; callers take the absolute value.
pub fn hash_key(key: &str) -> i32 {
    key.chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}

/// String-keyed map with separate chaining and load-factor driven growth.
#[derive(Debug, Clone)]
pub struct HashMap<V> {
    buckets: Vec<Bucket<V>>,
    size: usize,
}

impl<V> HashMap<V> {
    /// Create an empty map with the default capacity of 500 buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty map with `capacity` buckets. Zero is allowed; the
    /// first `put` grows the table.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, VecDeque::new);
        Self { buckets, size: 0 }
    }

    /// Signed-capacity constructor for callers holding untrusted input.
    pub fn try_with_capacity(capacity: i64) -> WsResult<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            WordStatError::InvalidArgument(format!(
                "capacity must be non-negative, got {capacity}"
            ))
        })?;
        Ok(Self::with_capacity(capacity))
    }

    /// Number of `put` calls minus number of `remove` calls.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `size()` is zero.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `size / capacity`.
    pub fn load_factor(&self) -> f64 {
        match (self.size, self.capacity()) {
            (0, _) => 0.0,
            (_, 0) => f64::INFINITY,
            (size, capacity) => size as f64 / capacity as f64,
        }
    }

    /// Insert `key`, or count one more occurrence of it if already present.
    /// On a repeated key `value` is dropped and the first value is kept.
    pub fn put(&mut self, key: &str, value: V) {
        self.insert(Cow::Borrowed(key), value);
    }

    /// The value stored by the first insertion of `key`.
    pub fn get(&self, key: &str) -> WsResult<&V> {
        self.get_entry(key).map(Entry::value)
    }

    /// Whether an entry for `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// The whole entry for `key`, including its occurrence count.
    pub(crate) fn get_entry(&self, key: &str) -> WsResult<&Entry<V>> {
        self.find(key)
            .ok_or_else(|| WordStatError::NotFound(key.to_string()))
    }

    /// Remove `key` and return its stored value. `size` drops by exactly
    /// one no matter how many occurrences the entry carried.
    pub fn remove(&mut self, key: &str) -> WsResult<V> {
        let removed = match self.bucket_index(key) {
            Some(index) => {
                let bucket = &mut self.buckets[index];
                bucket
                    .iter()
                    .position(|e| e.key == key)
                    .and_then(|pos| bucket.remove(pos))
            }
            None => None,
        };
        let entry = removed.ok_or_else(|| WordStatError::NotFound(key.to_string()))?;
        self.size -= 1;
        self.maintain_load();
        Ok(entry.value)
    }

    /// Iterate `(key, value)` over live entries. Bucket order is
    /// unspecified; within a bucket, newest key first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries().map(|e| (e.key(), e.value()))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry<V>> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    fn bucket_index(&self, key: &str) -> Option<usize> {
        let capacity = self.capacity() as u64;
        if capacity == 0 {
            return None;
        }
        let hash = i64::from(hash_key(key)).unsigned_abs();
        Some((hash % capacity) as usize)
    }

    fn find(&self, key: &str) -> Option<&Entry<V>> {
        let index = self.bucket_index(key)?;
        self.buckets[index].iter().find(|e| e.key == key)
    }

    fn insert(&mut self, key: Cow<'_, str>, value: V) {
        if self.capacity() == 0 {
            self.rehash(1);
        }
        let Some(index) = self.bucket_index(&key) else {
            return;
        };
        let bucket = &mut self.buckets[index];
        match bucket.iter_mut().find(|e| e.key == *key) {
            Some(existing) => existing.occurrences += 1,
            None => bucket.push_front(Entry::new(key.into_owned(), value)),
        }
        self.size += 1;
        self.maintain_load();
    }

    fn maintain_load(&mut self) {
        if self.load_factor() >= 1.0 {
            let doubled = match self.capacity() {
                0 => 1,
                capacity => capacity * 2,
            };
            self.rehash(doubled);
        }
    }

    /// Rebuild into `new_capacity` buckets by re-putting every live entry.
    /// Keys and values survive; occurrence counts restart at one. `size`
    /// is left as is.
    fn rehash(&mut self, new_capacity: usize) {
        log::debug!(
            "rehashing table: capacity {} -> {}, size {}",
            self.capacity(),
            new_capacity,
            self.size
        );
        let mut fresh = Self::with_capacity(new_capacity);
        for bucket in std::mem::take(&mut self.buckets) {
            // Tail first so each rebuilt chain keeps its head-to-tail order.
            for entry in bucket.into_iter().rev() {
                fresh.insert(Cow::Owned(entry.key), entry.value);
            }
        }
        self.buckets = fresh.buckets;
    }
}

impl<V> Default for HashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Order-preserving multi-map.
//!
//! Groupings live in an arena (`slots`); a hash table of bucket heads indexes
//! into it, and each slot carries two links:
//! - `hash_next`: the next slot in the same hash bucket,
//! - `next`: the next slot in first-seen key order. The chain is circular:
//!   `slots[last].next` is the first grouping.
//!
//! Growing the table rewrites bucket heads and `hash_next` links only, so
//! grouping identities and their first-seen order survive every resize.

use seqkit_core::compare::{DefaultEq, EqualityComparer};
use seqkit_core::config::SeqConfig;
use seqkit_core::grouping::Grouping;
use seqkit_core::key::JoinKey;

struct Slot<K, V> {
    hash: u64,
    grouping: Grouping<K, V>,
    hash_next: Option<usize>,
    next: usize,
}

pub struct Lookup<K, V, C = DefaultEq> {
    comparer: C,
    buckets: Vec<Option<usize>>,
    slots: Vec<Slot<K, V>>,
    last: Option<usize>,
    elements: usize,
}

impl<K, V> Lookup<K, V, DefaultEq>
where
    K: Eq + std::hash::Hash,
{
    pub fn new() -> Self {
        Self::with_comparer(DefaultEq)
    }
}

impl<K, V> Default for Lookup<K, V, DefaultEq>
where
    K: Eq + std::hash::Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Lookup<K, V, C>
where
    C: EqualityComparer<K>,
{
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_config(comparer, SeqConfig::global())
    }

    pub fn with_config(comparer: C, config: &SeqConfig) -> Self {
        let buckets = config.lookup_initial_buckets.max(1);
        Self {
            comparer,
            buckets: vec![None; buckets],
            slots: Vec::new(),
            last: None,
            elements: 0,
        }
    }

    /// Consume `source` eagerly, grouping `elem_fn(item)` under `key_fn(&item)`.
    pub fn create<I, T, FK, FE>(source: I, mut key_fn: FK, mut elem_fn: FE, comparer: C) -> Self
    where
        I: IntoIterator<Item = T>,
        FK: FnMut(&T) -> K,
        FE: FnMut(T) -> V,
    {
        let mut lookup = Self::with_comparer(comparer);
        for item in source {
            let key = key_fn(&item);
            lookup.push(key, elem_fn(item));
        }
        lookup.freeze();
        lookup
    }

    /// Like [`Lookup::create`], but elements whose key is absent are
    /// skipped: a join can never match on an absent key.
    pub fn create_for_join<I, T, FK, FE>(
        source: I,
        mut key_fn: FK,
        mut elem_fn: FE,
        comparer: C,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        FK: FnMut(&T) -> K,
        FE: FnMut(T) -> V,
        K: JoinKey,
    {
        let mut lookup = Self::with_comparer(comparer);
        for item in source {
            let key = key_fn(&item);
            if key.is_absent() {
                continue;
            }
            lookup.push(key, elem_fn(item));
        }
        lookup.freeze();
        lookup
    }

    /// Append `value` to the grouping for `key`, creating the grouping if this
    /// is the first time `key` is seen. Returns the grouping's ordinal
    /// (its position in first-seen order).
    pub fn push(&mut self, key: K, value: V) -> usize {
        let hash = self.comparer.hash_key(&key);
        let idx = match self.find(&key, hash) {
            Some(idx) => idx,
            None => self.insert_grouping(key, hash),
        };
        self.slots[idx].grouping.push(value);
        self.elements += 1;
        idx
    }

    /// Ordinal of the grouping for `key`, if any.
    pub fn group_index(&self, key: &K) -> Option<usize> {
        self.find(key, self.comparer.hash_key(key))
    }

    /// Elements grouped under `key`; an unknown key yields an empty slice.
    pub fn get(&self, key: &K) -> &[V] {
        match self.group_index(key) {
            Some(idx) => self.slots[idx].grouping.elements(),
            None => &[],
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.group_index(key).is_some()
    }

    /// Grouping by ordinal.
    pub fn group(&self, index: usize) -> Option<&Grouping<K, V>> {
        self.slots.get(index).map(|s| &s.grouping)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total number of grouped elements across all keys.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Trim every grouping to its exact size. Called once no more elements
    /// can arrive.
    pub fn freeze(&mut self) {
        for slot in &mut self.slots {
            slot.grouping.freeze();
        }
        self.slots.shrink_to_fit();
    }

    /// Groupings in first-seen key order.
    pub fn iter(&self) -> Groupings<'_, K, V, C> {
        Groupings {
            lookup: self,
            cursor: self.last.map(|l| self.slots[l].next),
            remaining: self.slots.len(),
        }
    }

    /// One result per grouping, in first-seen key order.
    pub fn apply_result_selector<'a, R, F>(&'a self, mut f: F) -> impl Iterator<Item = R> + 'a
    where
        F: FnMut(&K, &[V]) -> R + 'a,
        R: 'a,
    {
        self.iter().map(move |g| f(g.key(), g.elements()))
    }

    /// Consume the lookup into its groupings, in first-seen key order.
    pub fn into_groupings(self) -> Vec<Grouping<K, V>> {
        let count = self.slots.len();
        let start = self.last.map(|l| self.slots[l].next);
        let mut links = Vec::with_capacity(count);
        let mut cells: Vec<Option<Grouping<K, V>>> = Vec::with_capacity(count);
        for slot in self.slots {
            links.push(slot.next);
            cells.push(Some(slot.grouping));
        }

        let mut out = Vec::with_capacity(count);
        let mut cursor = start;
        while let Some(idx) = cursor {
            match cells[idx].take() {
                Some(g) => out.push(g),
                None => break,
            }
            cursor = Some(links[idx]);
        }
        out
    }

    /// Consuming form of [`Lookup::apply_result_selector`].
    pub fn into_results<R, F>(self, mut f: F) -> impl Iterator<Item = R>
    where
        F: FnMut(K, Vec<V>) -> R,
    {
        self.into_groupings().into_iter().map(move |g| {
            let (k, v) = g.into_parts();
            f(k, v)
        })
    }

    fn find(&self, key: &K, hash: u64) -> Option<usize> {
        let mut cursor = self.buckets[self.bucket_of(hash)];
        while let Some(idx) = cursor {
            let slot = &self.slots[idx];
            if slot.hash == hash && self.comparer.equals(slot.grouping.key(), key) {
                return Some(idx);
            }
            cursor = slot.hash_next;
        }
        None
    }

    fn insert_grouping(&mut self, key: K, hash: u64) -> usize {
        if self.slots.len() == self.buckets.len() {
            self.resize();
        }

        let idx = self.slots.len();
        let bucket = self.bucket_of(hash);
        let next = match self.last {
            Some(last) => {
                let first = self.slots[last].next;
                self.slots[last].next = idx;
                first
            }
            None => idx,
        };
        self.slots.push(Slot {
            hash,
            grouping: Grouping::new(key, Vec::new()),
            hash_next: self.buckets[bucket],
            next,
        });
        self.buckets[bucket] = Some(idx);
        self.last = Some(idx);
        idx
    }

    fn resize(&mut self) {
        let new_size = self.slots.len() * 2 + 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.buckets.len(),
            to = new_size,
            groups = self.slots.len(),
            "lookup rehash"
        );

        let mut buckets = vec![None; new_size];
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let b = (slot.hash % new_size as u64) as usize;
            slot.hash_next = buckets[b];
            buckets[b] = Some(idx);
        }
        self.buckets = buckets;
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }
}

/// Borrowing iterator over groupings in first-seen key order.
pub struct Groupings<'a, K, V, C> {
    lookup: &'a Lookup<K, V, C>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Groupings<'a, K, V, C> {
    type Item = &'a Grouping<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.cursor?;
        let slot = &self.lookup.slots[idx];
        self.remaining -= 1;
        self.cursor = Some(slot.next);
        Some(&slot.grouping)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Groupings<'a, K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a Lookup<K, V, C>
where
    C: EqualityComparer<K>,
{
    type Item = &'a Grouping<K, V>;
    type IntoIter = Groupings<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for Lookup<K, V, C>
where
    C: EqualityComparer<K>,
{
    type Item = Grouping<K, V>;
    type IntoIter = std::vec::IntoIter<Grouping<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_groupings().into_iter()
    }
}

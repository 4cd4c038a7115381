//! Predicate- and key-driven batching.

use std::collections::VecDeque;
use std::iter::Fuse;

use seqkit_core::compare::EqualityComparer;
use seqkit_core::error::{Error, Result};
use seqkit_core::key::JoinKey;
use seqkit_mem::lookup::Lookup;

/// Groups adjacent elements into buckets. Each element after a bucket's
/// first either extends the bucket (`pred(&candidate, &bucket)` is true) or
/// seals it and starts the next one. An empty source yields no buckets.
pub struct BatchWhile<I, P>
where
    I: Iterator,
{
    source: Fuse<I>,
    bucket: Vec<I::Item>,
    pred: P,
}

impl<I, P> BatchWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &[I::Item]) -> bool,
{
    pub fn new(source: I, pred: P) -> Self {
        Self {
            source: source.fuse(),
            bucket: Vec::new(),
            pred,
        }
    }
}

impl<I, P> Iterator for BatchWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &[I::Item]) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.bucket.is_empty() {
            self.bucket.push(self.source.next()?);
        }
        loop {
            match self.source.next() {
                Some(item) if (self.pred)(&item, &self.bucket) => self.bucket.push(item),
                Some(item) => return Some(std::mem::replace(&mut self.bucket, vec![item])),
                None => return Some(std::mem::take(&mut self.bucket)),
            }
        }
    }
}

/// Key-aligned round robin: yields one row per complete set of accepted
/// keys, ordered like the accepted keys.
///
/// Elements are queued per key; a row is emitted as soon as every queue has
/// an element. Elements with an absent or unaccepted key are dropped, and
/// rows still incomplete when the source ends are discarded.
pub struct BatchBy<I, K, F, C>
where
    I: Iterator,
{
    source: Fuse<I>,
    keys: Lookup<K, usize, C>,
    queues: Vec<VecDeque<I::Item>>,
    filled: usize,
    key_fn: F,
}

impl<I, K, F, C> BatchBy<I, K, F, C>
where
    I: Iterator,
    K: JoinKey,
    F: FnMut(&I::Item) -> K,
    C: EqualityComparer<K>,
{
    /// Fails with `InvalidArgument` when `accepted` is empty or repeats a
    /// key.
    pub fn new<A>(source: I, accepted: A, key_fn: F, comparer: C) -> Result<Self>
    where
        A: IntoIterator<Item = K>,
    {
        let mut keys = Lookup::with_comparer(comparer);
        for (pos, key) in accepted.into_iter().enumerate() {
            if keys.contains_key(&key) {
                return Err(Error::invalid_argument(
                    "accepted_keys",
                    format!("key at position {pos} duplicates an earlier key"),
                ));
            }
            keys.push(key, pos);
        }
        if keys.is_empty() {
            return Err(Error::invalid_argument(
                "accepted_keys",
                "at least one key is required",
            ));
        }
        keys.freeze();

        let mut queues = Vec::with_capacity(keys.len());
        queues.resize_with(keys.len(), VecDeque::new);
        Ok(Self {
            source: source.fuse(),
            keys,
            queues,
            filled: 0,
            key_fn,
        })
    }

    /// Number of accepted keys, i.e. the length of every row.
    pub fn width(&self) -> usize {
        self.queues.len()
    }

    fn take_row(&mut self) -> Vec<I::Item> {
        let mut row = Vec::with_capacity(self.queues.len());
        self.filled = 0;
        for queue in &mut self.queues {
            row.extend(queue.pop_front());
            if !queue.is_empty() {
                self.filled += 1;
            }
        }
        row
    }
}

impl<I, K, F, C> Iterator for BatchBy<I, K, F, C>
where
    I: Iterator,
    K: JoinKey,
    F: FnMut(&I::Item) -> K,
    C: EqualityComparer<K>,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.filled == self.queues.len() {
            return Some(self.take_row());
        }
        loop {
            let item = self.source.next()?;
            let key = (self.key_fn)(&item);
            if key.is_absent() {
                continue;
            }
            let Some(slot) = self.keys.group_index(&key) else {
                continue;
            };
            let queue = &mut self.queues[slot];
            queue.push_back(item);
            if queue.len() == 1 {
                self.filled += 1;
                if self.filled == self.queues.len() {
                    return Some(self.take_row());
                }
            }
        }
    }
}

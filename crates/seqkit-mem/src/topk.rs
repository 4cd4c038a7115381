//! Bounded sorted candidate list for top-K selection.
//!
//! Candidates are kept best-first. A new candidate is placed by binary
//! search after every retained candidate it does not beat (upper bound), and
//! it only displaces the current worst when strictly better, so equal keys
//! keep arrival order.

use std::cmp::Ordering;

use seqkit_core::compare::{Comparer, Direction};

use crate::tracking::PeakTracker;

pub struct TopK<T, C> {
    k: usize,
    items: Vec<T>,
    comparer: C,
    direction: Direction,
    peak: PeakTracker,
}

impl<T, C> TopK<T, C>
where
    C: Comparer<T>,
{
    pub fn new(k: usize, comparer: C, direction: Direction) -> Self {
        Self {
            k,
            items: Vec::with_capacity(k.min(1024)),
            comparer,
            direction,
            peak: PeakTracker::new("topk"),
        }
    }

    /// Offer a candidate. Returns the element that fell out: the displaced
    /// worst candidate, or `item` itself when it did not make the cut.
    pub fn offer(&mut self, item: T) -> Option<T> {
        if self.k == 0 {
            return Some(item);
        }

        let mut displaced = None;
        if self.items.len() == self.k {
            let beats_worst = match self.items.last() {
                Some(worst) => self.cmp(&item, worst) == Ordering::Less,
                None => true,
            };
            if !beats_worst {
                return Some(item);
            }
            displaced = self.items.pop();
        }

        let pos = self
            .items
            .partition_point(|x| self.cmp(x, &item) != Ordering::Greater);
        self.items.insert(pos, item);
        self.peak.record(self.items.len());
        displaced
    }

    pub fn worst(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.k
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Retained candidates, best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.items
    }

    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self.direction.compare(&self.comparer, a, b)
    }
}

/// Orders `(key, value)` pairs by key only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<C>(pub C);

impl<K, V, C> Comparer<(K, V)> for ByKey<C>
where
    C: Comparer<K>,
{
    fn compare(&self, a: &(K, V), b: &(K, V)) -> Ordering {
        self.0.compare(&a.0, &b.0)
    }
}

//! Bounded circular queue with random access over the retained window.
//!
//! Indices are logical: 0 is the oldest retained element. Physical storage
//! wraps via `(first + index) % capacity`. With a `max_count`, pushing onto a
//! full queue evicts the oldest element; `max_count == Some(0)` retains
//! nothing at all.

use crate::tracking::PeakTracker;

const MIN_GROW: usize = 4;
const INITIAL_BOUNDED: usize = 16;

#[derive(Debug, Clone)]
pub struct LookbackQueue<T> {
    buf: Vec<Option<T>>,
    first: usize,
    count: usize,
    max_count: Option<usize>,
    peak: PeakTracker,
}

impl<T> LookbackQueue<T> {
    /// `None` retains unbounded history.
    pub fn new(max_count: Option<usize>) -> Self {
        let initial = match max_count {
            Some(max) => max.min(INITIAL_BOUNDED),
            None => 0,
        };
        let mut buf = Vec::with_capacity(initial);
        buf.resize_with(initial, || None);
        Self {
            buf,
            first: 0,
            count: 0,
            max_count,
            peak: PeakTracker::new("lookback"),
        }
    }

    pub fn bounded(max_count: usize) -> Self {
        Self::new(Some(max_count))
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Append `item` as the newest element. Returns the element evicted to
    /// respect `max_count`, if any (the pushed item itself when nothing can
    /// be retained).
    pub fn push(&mut self, item: T) -> Option<T> {
        let mut evicted = None;
        match self.max_count {
            Some(0) => return Some(item),
            Some(max) if self.count == max => evicted = self.pop_front(),
            _ => {}
        }

        if self.count == self.buf.len() {
            self.grow();
        }
        let cap = self.buf.len();
        let slot = (self.first + self.count) % cap;
        self.buf[slot] = Some(item);
        self.count += 1;
        self.peak.record(self.count);
        evicted
    }

    /// Remove and return the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.buf[self.first].take();
        self.first = (self.first + 1) % self.buf.len();
        self.count -= 1;
        item
    }

    /// Element at logical `index` (0 = oldest retained).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.buf[(self.first + index) % self.buf.len()].as_ref()
    }

    pub fn newest(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Physical slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Largest number of elements retained at once.
    pub fn peak_len(&self) -> usize {
        self.peak.peak()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.first = 0;
    }

    fn grow(&mut self) {
        let mut new_cap = (self.buf.len() * 2).max(MIN_GROW);
        if let Some(max) = self.max_count {
            new_cap = new_cap.min(max);
        }

        let mut buf: Vec<Option<T>> = Vec::with_capacity(new_cap);
        for i in 0..self.count {
            let idx = (self.first + i) % self.buf.len();
            buf.push(self.buf[idx].take());
        }
        buf.resize_with(new_cap, || None);
        self.buf = buf;
        self.first = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_retains_everything() {
        let mut q = LookbackQueue::unbounded();
        for i in 0..100 {
            assert_eq!(q.push(i), None);
        }
        assert_eq!(q.len(), 100);
        assert_eq!(q.get(0), Some(&0));
        assert_eq!(q.get(99), Some(&99));
        assert_eq!(q.get(100), None);
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let mut q = LookbackQueue::bounded(3);
        assert_eq!(q.push('a'), None);
        assert_eq!(q.push('b'), None);
        assert_eq!(q.push('c'), None);
        assert_eq!(q.push('d'), Some('a'));
        assert_eq!(q.push('e'), Some('b'));

        assert_eq!(q.len(), 3);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec!['c', 'd', 'e']);
        assert_eq!(q.newest(), Some(&'e'));
        assert_eq!(q.capacity(), 3);
        assert_eq!(q.peak_len(), 3);
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut q = LookbackQueue::bounded(0);
        assert_eq!(q.push(1), Some(1));
        assert!(q.is_empty());
        assert_eq!(q.get(0), None);
    }

    #[test]
    fn test_wraparound_after_pops_and_growth() {
        let mut q = LookbackQueue::unbounded();
        for i in 0..4 {
            q.push(i);
        }
        assert_eq!(q.pop_front(), Some(0));
        assert_eq!(q.pop_front(), Some(1));
        // Wraps physically, then forces a grow with first != 0.
        for i in 4..10 {
            q.push(i);
        }
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), (2..10).collect::<Vec<_>>());
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.pop_front(), None);
    }
}

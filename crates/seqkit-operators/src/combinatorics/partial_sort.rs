//! Top-K selection without sorting the whole input.
//!
//! The source is drained into a [`TopK`] on the first pull; the retained
//! candidates are then yielded best first. Equal keys keep arrival order.

use std::vec;

use seqkit_core::compare::{Comparer, Direction};
use seqkit_mem::topk::{ByKey, TopK};

enum State<P, T> {
    Pending(P),
    Sorted(vec::IntoIter<T>),
}

pub struct PartialSort<I: Iterator, C> {
    k: usize,
    direction: Direction,
    state: State<(I, C), I::Item>,
}

impl<I, C> PartialSort<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    pub fn new(source: I, k: usize, comparer: C, direction: Direction) -> Self {
        Self {
            k,
            direction,
            state: State::Pending((source, comparer)),
        }
    }
}

impl<I, C> Iterator for PartialSort<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let State::Pending(_) = self.state {
            let drained = State::Sorted(Vec::new().into_iter());
            if let State::Pending((source, comparer)) = std::mem::replace(&mut self.state, drained) {
                let mut top = TopK::new(self.k, comparer, self.direction);
                for item in source {
                    top.offer(item);
                }
                self.state = State::Sorted(top.into_sorted_vec().into_iter());
            }
        }
        match &mut self.state {
            State::Sorted(it) => it.next(),
            State::Pending(_) => None,
        }
    }
}

/// [`PartialSort`] ordering by a projected key; each key is computed once.
pub struct PartialSortByKey<I: Iterator, K, F, C> {
    k: usize,
    direction: Direction,
    state: State<(I, F, C), (K, I::Item)>,
}

impl<I, K, F, C> PartialSortByKey<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    pub fn new(source: I, k: usize, key_fn: F, comparer: C, direction: Direction) -> Self {
        Self {
            k,
            direction,
            state: State::Pending((source, key_fn, comparer)),
        }
    }
}

impl<I, K, F, C> Iterator for PartialSortByKey<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let State::Pending(_) = self.state {
            let drained = State::Sorted(Vec::new().into_iter());
            if let State::Pending((source, mut key_fn, comparer)) =
                std::mem::replace(&mut self.state, drained)
            {
                let mut top = TopK::new(self.k, ByKey(comparer), self.direction);
                for item in source {
                    top.offer((key_fn(&item), item));
                }
                self.state = State::Sorted(top.into_sorted_vec().into_iter());
            }
        }
        match &mut self.state {
            State::Sorted(it) => it.next().map(|(_, item)| item),
            State::Pending(_) => None,
        }
    }
}

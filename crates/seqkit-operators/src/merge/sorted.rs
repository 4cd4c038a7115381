//! N-way merge of inputs sorted in the same direction.
//!
//! Two strategies produce identical output:
//! - `Scan` keeps live cursors in input order and scans all heads per element.
//! - `Heap` keeps a min-heap of (head, input index).
//!
//! Ties always go to the lowest-indexed input (`sequence` first, then
//! `others` in order), and an exhausted cursor is dropped immediately.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use seqkit_core::compare::{Comparer, Direction};
use seqkit_core::config::MergeStrategy;

use crate::metrics;

struct Directed<C> {
    comparer: C,
    direction: Direction,
}

impl<C> Directed<C> {
    fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        C: Comparer<T>,
    {
        self.direction.compare(&self.comparer, a, b)
    }
}

/// Entry in the merge heap.
///
/// Ordered by head (reversed for min-heap behavior), then by input index.
struct HeapEntry<T, C> {
    head: T,
    source: usize,
    order: Rc<Directed<C>>,
}

impl<T, C: Comparer<T>> PartialEq for HeapEntry<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C: Comparer<T>> Eq for HeapEntry<T, C> {}

impl<T, C: Comparer<T>> PartialOrd for HeapEntry<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Comparer<T>> Ord for HeapEntry<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .compare(&other.head, &self.head)
            .then_with(|| other.source.cmp(&self.source))
    }
}

enum State<I: Iterator, C> {
    /// No `others`: the sequence is handed through untouched.
    Passthrough(I),
    /// Cursors not yet primed; priming happens on first pull.
    Pending(Vec<I>),
    Scan(Vec<(I, I::Item)>),
    Heap {
        cursors: Vec<Option<I>>,
        heap: BinaryHeap<HeapEntry<I::Item, C>>,
    },
    Done,
}

pub struct SortedMerge<I: Iterator, C> {
    state: State<I, C>,
    order: Rc<Directed<C>>,
    strategy: MergeStrategy,
}

impl<I, C> SortedMerge<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    pub fn new<O>(
        sequence: I,
        others: O,
        direction: Direction,
        comparer: C,
        strategy: MergeStrategy,
    ) -> Self
    where
        O: IntoIterator<Item = I>,
    {
        let others: Vec<I> = others.into_iter().collect();
        let state = if others.is_empty() {
            State::Passthrough(sequence)
        } else {
            let mut all = Vec::with_capacity(others.len() + 1);
            all.push(sequence);
            all.extend(others);
            State::Pending(all)
        };
        Self {
            state,
            order: Rc::new(Directed {
                comparer,
                direction,
            }),
            strategy,
        }
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    fn prime(&mut self, sources: Vec<I>) {
        match self.strategy {
            MergeStrategy::Scan => {
                let mut cursors = Vec::with_capacity(sources.len());
                for mut it in sources {
                    if let Some(head) = it.next() {
                        cursors.push((it, head));
                    }
                }
                self.state = State::Scan(cursors);
            }
            MergeStrategy::Heap => {
                let mut cursors = Vec::with_capacity(sources.len());
                let mut heap = BinaryHeap::with_capacity(sources.len());
                for (source, mut it) in sources.into_iter().enumerate() {
                    match it.next() {
                        Some(head) => {
                            heap.push(HeapEntry {
                                head,
                                source,
                                order: Rc::clone(&self.order),
                            });
                            cursors.push(Some(it));
                        }
                        None => cursors.push(None),
                    }
                }
                self.state = State::Heap { cursors, heap };
            }
        }
    }

    fn next_scan(cursors: &mut Vec<(I, I::Item)>, order: &Directed<C>) -> Option<I::Item> {
        if cursors.is_empty() {
            return None;
        }
        let mut best = 0;
        for i in 1..cursors.len() {
            if order.compare(&cursors[i].1, &cursors[best].1) == Ordering::Less {
                best = i;
            }
        }

        let (it, head) = &mut cursors[best];
        match it.next() {
            Some(next) => Some(std::mem::replace(head, next)),
            None => {
                let (_, head) = cursors.remove(best);
                metrics::emit("sorted_merge", "cursor_drained", cursors.len());
                Some(head)
            }
        }
    }

    fn next_heap(
        cursors: &mut [Option<I>],
        heap: &mut BinaryHeap<HeapEntry<I::Item, C>>,
    ) -> Option<I::Item> {
        let HeapEntry {
            head,
            source,
            order,
        } = heap.pop()?;

        let advanced = cursors[source].as_mut().and_then(|it| it.next());
        match advanced {
            Some(next) => heap.push(HeapEntry {
                head: next,
                source,
                order,
            }),
            None => {
                cursors[source] = None;
                metrics::emit("sorted_merge", "cursor_drained", heap.len());
            }
        }
        Some(head)
    }
}

impl<I, C> Iterator for SortedMerge<I, C>
where
    I: Iterator,
    C: Comparer<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let State::Pending(_) = self.state {
            if let State::Pending(sources) = std::mem::replace(&mut self.state, State::Done) {
                self.prime(sources);
            }
        }

        let item = match &mut self.state {
            State::Passthrough(it) => return it.next(),
            State::Pending(_) | State::Done => return None,
            State::Scan(cursors) => Self::next_scan(cursors, &self.order),
            State::Heap { cursors, heap } => Self::next_heap(cursors, heap),
        };
        if item.is_none() {
            self.state = State::Done;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        fn add(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
            let upper = match (a.1, b.1) {
                (Some(x), Some(y)) => x.checked_add(y),
                _ => None,
            };
            (a.0.saturating_add(b.0), upper)
        }

        match &self.state {
            State::Passthrough(it) => it.size_hint(),
            State::Pending(sources) => sources
                .iter()
                .map(|it| it.size_hint())
                .fold((0, Some(0)), add),
            State::Scan(cursors) => cursors
                .iter()
                .map(|(it, _)| add(it.size_hint(), (1, Some(1))))
                .fold((0, Some(0)), add),
            State::Heap { cursors, heap } => cursors
                .iter()
                .flatten()
                .map(|it| it.size_hint())
                .fold((heap.len(), Some(heap.len())), add),
            State::Done => (0, Some(0)),
        }
    }
}

//! Hash joins over two sequences.
//!
//! Every variant builds a [`Lookup`] over the second sequence's keys on first
//! pull, then streams the first sequence against it. Absent keys (see
//! [`JoinKey`]) never match: such elements surface as unmatched rows.

pub mod group;
pub mod outer;

pub use group::FullGroupJoin;
pub use outer::{right_join, FullJoin, LeftJoin, RightJoin};

use std::iter::Fuse;

use seqkit_core::compare::EqualityComparer;
use seqkit_core::key::JoinKey;
use seqkit_mem::lookup::Lookup;

/// Two-argument result projection.
///
/// Implemented for every `FnMut(A, B) -> R`; [`Flipped`] adapts a selector
/// written for `(A, B)` to be called with `(B, A)`.
pub trait PairSelector<A, B, R> {
    fn select(&mut self, a: A, b: B) -> R;
}

impl<A, B, R, F> PairSelector<A, B, R> for F
where
    F: FnMut(A, B) -> R,
{
    fn select(&mut self, a: A, b: B) -> R {
        self(a, b)
    }
}

/// Swaps the argument order of the wrapped selector.
#[derive(Debug, Clone, Copy)]
pub struct Flipped<F>(pub F);

impl<A, B, R, F> PairSelector<B, A, R> for Flipped<F>
where
    F: PairSelector<A, B, R>,
{
    fn select(&mut self, b: B, a: A) -> R {
        self.0.select(a, b)
    }
}

/// The second sequence, materialized and indexed by key.
pub(crate) struct BuildSide<K, B, C> {
    rows: Vec<B>,
    row_group: Vec<Option<usize>>,
    index: Lookup<K, usize, C>,
    matched: Vec<bool>,
}

impl<K, B, C> BuildSide<K, B, C>
where
    K: JoinKey,
    C: EqualityComparer<K>,
{
    pub(crate) fn build<J, SK>(second: J, mut key_fn: SK, comparer: C) -> Self
    where
        J: Iterator<Item = B>,
        SK: FnMut(&B) -> K,
    {
        let mut index = Lookup::with_comparer(comparer);
        let mut rows = Vec::new();
        let mut row_group = Vec::new();
        for (pos, row) in second.enumerate() {
            let key = key_fn(&row);
            let group = if key.is_absent() {
                None
            } else {
                Some(index.push(key, pos))
            };
            rows.push(row);
            row_group.push(group);
        }
        index.freeze();
        let matched = vec![false; index.len()];
        Self {
            rows,
            row_group,
            index,
            matched,
        }
    }

    /// Group ordinal matching `key`; marks it as matched.
    pub(crate) fn probe(&mut self, key: &K) -> Option<usize> {
        if key.is_absent() {
            return None;
        }
        let group = self.index.group_index(key)?;
        self.matched[group] = true;
        Some(group)
    }

    /// Row positions of a group, in second-sequence order.
    pub(crate) fn positions(&self, group: usize) -> &[usize] {
        self.index.group(group).map_or(&[], |g| g.elements())
    }

    pub(crate) fn row(&self, pos: usize) -> &B {
        &self.rows[pos]
    }

    /// Rows whose key no probe ever matched, in second-sequence order.
    pub(crate) fn into_unmatched(self) -> Vec<B> {
        let matched = self.matched;
        self.rows
            .into_iter()
            .zip(self.row_group)
            .filter_map(|(row, group)| match group {
                Some(g) if matched[g] => None,
                _ => Some(row),
            })
            .collect()
    }
}

enum Side<J, SK, C, K, B> {
    Pending(J, SK, C),
    Built(BuildSide<K, B, C>),
    Done,
}

/// One matched first-sequence element walking its group's rows.
struct Cursor<A> {
    item: A,
    group: usize,
    next: usize,
}

/// Outcome of one probe step.
pub(crate) enum Step<A, B> {
    Matched(A, B),
    Unmatched(A),
}

/// Streams the first sequence against the built second side.
pub(crate) struct Probe<I, J, K, FK, SK, C>
where
    I: Iterator,
    J: Iterator,
{
    first: Fuse<I>,
    first_key: FK,
    side: Side<J, SK, C, K, J::Item>,
    cursor: Option<Cursor<I::Item>>,
}

impl<I, J, K, FK, SK, C> Probe<I, J, K, FK, SK, C>
where
    I: Iterator,
    J: Iterator,
    I::Item: Clone,
    J::Item: Clone,
    K: JoinKey,
    FK: FnMut(&I::Item) -> K,
    SK: FnMut(&J::Item) -> K,
    C: EqualityComparer<K>,
{
    pub(crate) fn new(first: I, second: J, first_key: FK, second_key: SK, comparer: C) -> Self {
        Self {
            first: first.fuse(),
            first_key,
            side: Side::Pending(second, second_key, comparer),
            cursor: None,
        }
    }

    /// Next matched pair or unmatched first element; `None` once the first
    /// sequence is drained.
    pub(crate) fn step(&mut self) -> Option<Step<I::Item, J::Item>> {
        if let Side::Pending(..) = self.side {
            if let Side::Pending(second, key_fn, comparer) =
                std::mem::replace(&mut self.side, Side::Done)
            {
                self.side = Side::Built(BuildSide::build(second, key_fn, comparer));
            }
        }
        let build = match &mut self.side {
            Side::Built(build) => build,
            _ => return None,
        };

        loop {
            if let Some(Cursor { item, group, next }) = self.cursor.take() {
                let positions = build.positions(group);
                if let Some(&pos) = positions.get(next) {
                    let row = build.row(pos).clone();
                    if next + 1 < positions.len() {
                        let out = Step::Matched(item.clone(), row);
                        self.cursor = Some(Cursor {
                            item,
                            group,
                            next: next + 1,
                        });
                        return Some(out);
                    }
                    return Some(Step::Matched(item, row));
                }
            }

            let item = self.first.next()?;
            let key = (self.first_key)(&item);
            match build.probe(&key) {
                Some(group) => {
                    self.cursor = Some(Cursor {
                        item,
                        group,
                        next: 0,
                    })
                }
                None => return Some(Step::Unmatched(item)),
            }
        }
    }

    /// Finish probing and hand back the unmatched second rows. Later calls
    /// return an empty list.
    pub(crate) fn take_unmatched(&mut self) -> Vec<J::Item> {
        self.cursor = None;
        match std::mem::replace(&mut self.side, Side::Done) {
            Side::Pending(second, key_fn, comparer) => {
                BuildSide::build(second, key_fn, comparer).into_unmatched()
            }
            Side::Built(build) => build.into_unmatched(),
            Side::Done => Vec::new(),
        }
    }

    pub(crate) fn first_size_hint(&self) -> (usize, Option<usize>) {
        self.first.size_hint()
    }
}

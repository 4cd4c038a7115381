//! Split a sequence into partitions of requested sizes.
//!
//! Each requested size reads that many elements into a buffer. A partition
//! cut short by the end of the source is yielded at its actual length; a
//! positive request that reads nothing ends the output. A request of zero
//! yields an empty partition without touching the source.
//!
//! After the sizes run out, [`Underflow`] decides what happens to whatever
//! is left: `Stop` drops it, `Rest` yields one final [`Remainder`].

use std::cell::RefCell;
use std::iter::{Chain, Fuse, Once, Skip};

use serde::{Deserialize, Serialize};

use crate::metrics;

/// What to do with source elements left after the last requested partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Underflow {
    #[default]
    Stop,
    Rest,
}

/// Restartable view of everything after the requested partitions.
///
/// The first enumeration continues the live cursor; every later one replays
/// a fresh clone of the source, skipping what the partitions consumed.
pub struct Remainder<I: Iterator> {
    live: RefCell<Option<(I::Item, Fuse<I>)>>,
    origin: I,
    consumed: usize,
}

impl<I> Remainder<I>
where
    I: Iterator + Clone,
{
    pub fn iter(&self) -> RemainderIter<I> {
        match self.live.borrow_mut().take() {
            Some((head, rest)) => RemainderIter::Live(std::iter::once(head).chain(rest)),
            None => {
                metrics::emit("partition", "remainder_replay", self.consumed);
                RemainderIter::Replay(self.origin.clone().skip(self.consumed))
            }
        }
    }
}

impl<I: Iterator> Remainder<I> {
    /// Number of source elements consumed before the remainder starts.
    pub fn offset(&self) -> usize {
        self.consumed
    }
}

/// Consuming enumeration; replays from the owned source without cloning it.
impl<I: Iterator> IntoIterator for Remainder<I> {
    type Item = I::Item;
    type IntoIter = RemainderIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        match self.live.into_inner() {
            Some((head, rest)) => RemainderIter::Live(std::iter::once(head).chain(rest)),
            None => {
                metrics::emit("partition", "remainder_replay", self.consumed);
                RemainderIter::Replay(self.origin.skip(self.consumed))
            }
        }
    }
}

impl<'a, I> IntoIterator for &'a Remainder<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type IntoIter = RemainderIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub enum RemainderIter<I: Iterator> {
    Live(Chain<Once<I::Item>, Fuse<I>>),
    Replay(Skip<I>),
}

impl<I: Iterator> Iterator for RemainderIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self {
            RemainderIter::Live(it) => it.next(),
            RemainderIter::Replay(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            RemainderIter::Live(it) => it.size_hint(),
            RemainderIter::Replay(it) => it.size_hint(),
        }
    }
}

/// One yielded partition.
pub enum Part<I: Iterator> {
    Chunk(Vec<I::Item>),
    Rest(Remainder<I>),
}

impl<I: Iterator> Part<I> {
    pub fn into_vec(self) -> Vec<I::Item> {
        match self {
            Part::Chunk(v) => v,
            Part::Rest(r) => r.into_iter().collect(),
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Part::Rest(_))
    }

    pub fn as_chunk(&self) -> Option<&[I::Item]> {
        match self {
            Part::Chunk(v) => Some(v),
            Part::Rest(_) => None,
        }
    }
}

pub struct Partition<I, Z>
where
    I: Iterator,
{
    /// `None` once the source is exhausted or handed to a remainder.
    source: Option<Fuse<I>>,
    origin: Option<I>,
    sizes: Fuse<Z>,
    underflow: Underflow,
    consumed: usize,
}

impl<I, Z> Partition<I, Z>
where
    I: Iterator + Clone,
    Z: Iterator<Item = usize>,
{
    /// `Underflow::Rest` keeps a clone of `source` so the remainder can be
    /// replayed.
    pub fn new(source: I, sizes: Z, underflow: Underflow) -> Self {
        let origin = match underflow {
            Underflow::Rest => Some(source.clone()),
            Underflow::Stop => None,
        };
        Self::with_origin(source, origin, sizes, underflow)
    }
}

impl<I, Z> Partition<I, Z>
where
    I: Iterator,
    Z: Iterator<Item = usize>,
{
    /// `Underflow::Stop` partitioning; the source never needs to be cloned.
    pub fn stop(source: I, sizes: Z) -> Self {
        Self::with_origin(source, None, sizes, Underflow::Stop)
    }

    fn with_origin(source: I, origin: Option<I>, sizes: Z, underflow: Underflow) -> Self {
        Self {
            source: Some(source.fuse()),
            origin,
            sizes: sizes.fuse(),
            underflow,
            consumed: 0,
        }
    }

    pub fn underflow(&self) -> Underflow {
        self.underflow
    }

    fn chunk(&mut self, size: usize) -> Option<Part<I>> {
        if size == 0 {
            return Some(Part::Chunk(Vec::new()));
        }
        let source = self.source.as_mut()?;
        let mut buf = Vec::with_capacity(size.min(1024));
        buf.extend(source.by_ref().take(size));
        if buf.is_empty() {
            self.source = None;
            return None;
        }
        self.consumed += buf.len();
        Some(Part::Chunk(buf))
    }

    fn remainder(&mut self) -> Option<Part<I>> {
        let mut rest = self.source.take()?;
        let origin = self.origin.take()?;
        let head = rest.next()?;
        Some(Part::Rest(Remainder {
            live: RefCell::new(Some((head, rest))),
            origin,
            consumed: self.consumed,
        }))
    }
}

impl<I, Z> Iterator for Partition<I, Z>
where
    I: Iterator,
    Z: Iterator<Item = usize>,
{
    type Item = Part<I>;

    fn next(&mut self) -> Option<Part<I>> {
        self.source.as_ref()?;
        match self.sizes.next() {
            Some(size) => self.chunk(size),
            None => {
                if self.underflow == Underflow::Rest {
                    self.remainder()
                } else {
                    self.source = None;
                    None
                }
            }
        }
    }
}

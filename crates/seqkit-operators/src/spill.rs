//! Spill a head prefix into every following element.
//!
//! The head (a fixed count, or the longest prefix satisfying a predicate) is
//! collected once and projected by `head_fn`; each remaining element is then
//! yielded as `result(&head, item)`. A source with nothing after the head
//! yields nothing.

use std::iter::Fuse;

/// Decides, element by element, whether the head continues.
pub trait HeadRule<T> {
    /// `taken` is the number of elements already in the head.
    fn extends(&mut self, item: &T, taken: usize) -> bool;
}

/// Head of exactly `n` elements (fewer if the source is shorter).
#[derive(Debug, Clone, Copy)]
pub struct HeadCount(pub usize);

impl<T> HeadRule<T> for HeadCount {
    fn extends(&mut self, _item: &T, taken: usize) -> bool {
        taken < self.0
    }
}

/// Head made of the longest prefix satisfying the predicate.
#[derive(Debug, Clone, Copy)]
pub struct HeadWhile<P>(pub P);

impl<T, P> HeadRule<T> for HeadWhile<P>
where
    P: FnMut(&T) -> bool,
{
    fn extends(&mut self, item: &T, _taken: usize) -> bool {
        (self.0)(item)
    }
}

enum State<HF, H> {
    Head(HF),
    Body(H),
    Done,
}

pub struct Spill<I, S, HF, H, RF>
where
    I: Iterator,
{
    source: Fuse<I>,
    rule: S,
    state: State<HF, H>,
    result: RF,
}

pub type SpillHead<I, HF, H, RF> = Spill<I, HeadCount, HF, H, RF>;
pub type SpillSpan<I, P, HF, H, RF> = Spill<I, HeadWhile<P>, HF, H, RF>;

impl<I, S, HF, H, RF> Spill<I, S, HF, H, RF>
where
    I: Iterator,
    S: HeadRule<I::Item>,
    HF: FnOnce(Vec<I::Item>) -> H,
{
    pub fn new(source: I, rule: S, head_fn: HF, result: RF) -> Self {
        Self {
            source: source.fuse(),
            rule,
            state: State::Head(head_fn),
            result,
        }
    }

    /// Collect the head; returns the first element after it, if any.
    fn spill(&mut self, head_fn: HF) -> Option<I::Item> {
        let mut head = Vec::new();
        let mut first_body = None;
        for item in self.source.by_ref() {
            if self.rule.extends(&item, head.len()) {
                head.push(item);
            } else {
                first_body = Some(item);
                break;
            }
        }
        self.state = State::Body(head_fn(head));
        first_body
    }
}

/// Head of the first `count` elements.
pub fn spill_head<I, HF, H, RF>(source: I, count: usize, head_fn: HF, result: RF) -> SpillHead<I, HF, H, RF>
where
    I: Iterator,
    HF: FnOnce(Vec<I::Item>) -> H,
{
    Spill::new(source, HeadCount(count), head_fn, result)
}

/// Head of the longest prefix satisfying `pred`.
pub fn spill_span<I, P, HF, H, RF>(
    source: I,
    pred: P,
    head_fn: HF,
    result: RF,
) -> SpillSpan<I, P, HF, H, RF>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    HF: FnOnce(Vec<I::Item>) -> H,
{
    Spill::new(source, HeadWhile(pred), head_fn, result)
}

impl<I, S, HF, H, RF, R> Iterator for Spill<I, S, HF, H, RF>
where
    I: Iterator,
    S: HeadRule<I::Item>,
    HF: FnOnce(Vec<I::Item>) -> H,
    RF: FnMut(&H, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let item = if let State::Head(_) = self.state {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Head(head_fn) => self.spill(head_fn),
                _ => None,
            }
        } else {
            self.source.next()
        };

        match (&self.state, item) {
            (State::Body(head), Some(item)) => Some((self.result)(head, item)),
            _ => None,
        }
    }
}

//! Two-way ordered merge.
//!
//! Repeatedly compares the head key of each input: equal heads are combined
//! by `both` and both inputs advance; otherwise the smaller head is projected
//! by its own selector and only that input advances. Once one input is
//! drained, the other's tail is projected element by element.

use std::cmp::Ordering;
use std::iter::Fuse;

use seqkit_core::compare::Comparer;

/// Tag for callers that prefer matching over three projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Merged<A, B> {
    First(A),
    Second(B),
    Both(A, B),
}

impl<A, B> Merged<A, B> {
    /// Collapse into one value with the same three projections the untagged
    /// merge takes.
    pub fn project<R>(
        self,
        first: impl FnOnce(A) -> R,
        second: impl FnOnce(B) -> R,
        both: impl FnOnce(A, B) -> R,
    ) -> R {
        match self {
            Merged::First(a) => first(a),
            Merged::Second(b) => second(b),
            Merged::Both(a, b) => both(a, b),
        }
    }
}

pub struct OrderedMerge<I, J, K, FK, SK, FS, SS, BS, C>
where
    I: Iterator,
    J: Iterator,
{
    first: Fuse<I>,
    second: Fuse<J>,
    first_head: Option<(K, I::Item)>,
    second_head: Option<(K, J::Item)>,
    first_key: FK,
    second_key: SK,
    first_sel: FS,
    second_sel: SS,
    both_sel: BS,
    comparer: C,
}

/// An [`OrderedMerge`] yielding [`Merged`] tags.
pub type TaggedMerge<I, J, K, FK, SK, C> = OrderedMerge<
    I,
    J,
    K,
    FK,
    SK,
    fn(<I as Iterator>::Item) -> Merged<<I as Iterator>::Item, <J as Iterator>::Item>,
    fn(<J as Iterator>::Item) -> Merged<<I as Iterator>::Item, <J as Iterator>::Item>,
    fn(
        <I as Iterator>::Item,
        <J as Iterator>::Item,
    ) -> Merged<<I as Iterator>::Item, <J as Iterator>::Item>,
    C,
>;

impl<I, J, K, FK, SK, FS, SS, BS, C> OrderedMerge<I, J, K, FK, SK, FS, SS, BS, C>
where
    I: Iterator,
    J: Iterator,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first: I,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        second_sel: SS,
        both_sel: BS,
        comparer: C,
    ) -> Self {
        Self {
            first: first.fuse(),
            second: second.fuse(),
            first_head: None,
            second_head: None,
            first_key,
            second_key,
            first_sel,
            second_sel,
            both_sel,
            comparer,
        }
    }
}

impl<I, J, K, FK, SK, C> TaggedMerge<I, J, K, FK, SK, C>
where
    I: Iterator,
    J: Iterator,
{
    pub fn tagged(first: I, second: J, first_key: FK, second_key: SK, comparer: C) -> Self {
        Self::new(
            first,
            second,
            first_key,
            second_key,
            Merged::First,
            Merged::Second,
            Merged::Both,
            comparer,
        )
    }
}

impl<I, J, K, FK, SK, FS, SS, BS, C, R> Iterator for OrderedMerge<I, J, K, FK, SK, FS, SS, BS, C>
where
    I: Iterator,
    J: Iterator,
    FK: FnMut(&I::Item) -> K,
    SK: FnMut(&J::Item) -> K,
    FS: FnMut(I::Item) -> R,
    SS: FnMut(J::Item) -> R,
    BS: FnMut(I::Item, J::Item) -> R,
    C: Comparer<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let a = match self.first_head.take() {
            Some(head) => Some(head),
            None => self.first.next().map(|x| ((self.first_key)(&x), x)),
        };
        let b = match self.second_head.take() {
            Some(head) => Some(head),
            None => self.second.next().map(|y| ((self.second_key)(&y), y)),
        };

        match (a, b) {
            (None, None) => None,
            (Some((_, x)), None) => Some((self.first_sel)(x)),
            (None, Some((_, y))) => Some((self.second_sel)(y)),
            (Some((ka, x)), Some((kb, y))) => match self.comparer.compare(&ka, &kb) {
                Ordering::Equal => Some((self.both_sel)(x, y)),
                Ordering::Less => {
                    self.second_head = Some((kb, y));
                    Some((self.first_sel)(x))
                }
                Ordering::Greater => {
                    self.first_head = Some((ka, x));
                    Some((self.second_sel)(y))
                }
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (la, ua) = self.first.size_hint();
        let (lb, ub) = self.second.size_hint();
        let ha = usize::from(self.first_head.is_some());
        let hb = usize::from(self.second_head.is_some());
        let (la, lb) = (la.saturating_add(ha), lb.saturating_add(hb));
        // Each output consumes at most one element from each side.
        let upper = match (ua, ub) {
            (Some(ua), Some(ub)) => ua
                .checked_add(ha)
                .and_then(|a| ub.checked_add(hb).and_then(|b| a.checked_add(b))),
            _ => None,
        };
        (la.max(lb), upper)
    }
}

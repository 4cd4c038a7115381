//! Left, right and full outer joins.
//!
//! Matches are yielded as a cross product per key group, in the order the
//! matching rows appear in the second sequence.

use seqkit_core::compare::EqualityComparer;
use seqkit_core::key::JoinKey;

use super::{Flipped, PairSelector, Probe, Step};

/// Left outer join: every first element appears, matched or not.
pub struct LeftJoin<I, J, K, FK, SK, FS, BS, C>
where
    I: Iterator,
    J: Iterator,
{
    probe: Probe<I, J, K, FK, SK, C>,
    first_sel: FS,
    both_sel: BS,
}

impl<I, J, K, FK, SK, FS, BS, C> LeftJoin<I, J, K, FK, SK, FS, BS, C>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first: I,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        both_sel: BS,
        comparer: C,
    ) -> Self {
        Self {
            probe: Probe::new(first, second, first_key, second_key, comparer),
            first_sel,
            both_sel,
        }
    }
}

impl<I, J, K, FK, SK, FS, BS, C, R> Iterator for LeftJoin<I, J, K, FK, SK, FS, BS, C>
where
    I: Iterator,
    J: Iterator,
    I::Item: Clone,
    J::Item: Clone,
    K: JoinKey,
    FK: FnMut(&I::Item) -> K,
    SK: FnMut(&J::Item) -> K,
    FS: FnMut(I::Item) -> R,
    BS: PairSelector<I::Item, J::Item, R>,
    C: EqualityComparer<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        match self.probe.step()? {
            Step::Matched(a, b) => Some(self.both_sel.select(a, b)),
            Step::Unmatched(a) => Some((self.first_sel)(a)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.probe.first_size_hint().0, None)
    }
}

/// Right outer join: a [`LeftJoin`] driven by the second sequence, with the
/// both-selector still receiving `(first, second)`.
pub type RightJoin<I, J, K, FK, SK, SS, BS, C> = LeftJoin<J, I, K, SK, FK, SS, Flipped<BS>, C>;

/// Build a [`RightJoin`]. Output order follows `second`; second elements
/// without a match go through `second_sel`.
#[allow(clippy::too_many_arguments)]
pub fn right_join<I, J, K, FK, SK, SS, BS, C>(
    first: I,
    second: J,
    first_key: FK,
    second_key: SK,
    second_sel: SS,
    both_sel: BS,
    comparer: C,
) -> RightJoin<I, J, K, FK, SK, SS, BS, C>
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
    LeftJoin::new(
        second,
        first,
        second_key,
        first_key,
        second_sel,
        Flipped(both_sel),
        comparer,
    )
}

enum Phase<B> {
    Probing,
    Unmatched(std::vec::IntoIter<B>),
}

/// Full outer join: the left join, followed by every second element whose
/// key no first element matched, in second-sequence order.
pub struct FullJoin<I, J, K, FK, SK, FS, SS, BS, C>
where
    I: Iterator,
    J: Iterator,
{
    probe: Probe<I, J, K, FK, SK, C>,
    phase: Phase<J::Item>,
    first_sel: FS,
    second_sel: SS,
    both_sel: BS,
}

impl<I, J, K, FK, SK, FS, SS, BS, C> FullJoin<I, J, K, FK, SK, FS, SS, BS, C>
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
            probe: Probe::new(first, second, first_key, second_key, comparer),
            phase: Phase::Probing,
            first_sel,
            second_sel,
            both_sel,
        }
    }
}

impl<I, J, K, FK, SK, FS, SS, BS, C, R> Iterator for FullJoin<I, J, K, FK, SK, FS, SS, BS, C>
where
    I: Iterator,
    J: Iterator,
    I::Item: Clone,
    J::Item: Clone,
    K: JoinKey,
    FK: FnMut(&I::Item) -> K,
    SK: FnMut(&J::Item) -> K,
    FS: FnMut(I::Item) -> R,
    SS: FnMut(J::Item) -> R,
    BS: PairSelector<I::Item, J::Item, R>,
    C: EqualityComparer<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Phase::Probing = self.phase {
            match self.probe.step() {
                Some(Step::Matched(a, b)) => return Some(self.both_sel.select(a, b)),
                Some(Step::Unmatched(a)) => return Some((self.first_sel)(a)),
                None => {
                    self.phase = Phase::Unmatched(self.probe.take_unmatched().into_iter());
                }
            }
        }
        match &mut self.phase {
            Phase::Unmatched(rest) => rest.next().map(&mut self.second_sel),
            Phase::Probing => None,
        }
    }
}

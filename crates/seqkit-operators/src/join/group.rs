//! Full group join: both sides grouped, one result per distinct key.

use seqkit_core::compare::EqualityComparer;
use seqkit_core::key::JoinKey;
use seqkit_mem::lookup::Lookup;

struct Plan<K, A, B> {
    /// First-side groups, each with the ordinal of its second-side match.
    firsts: std::vec::IntoIter<(K, Vec<A>, Option<usize>)>,
    /// Second-side groups by ordinal; taken as they are consumed.
    seconds: Vec<Option<(K, Vec<B>)>>,
    /// Next second-side ordinal to consider once `firsts` is drained.
    rest: usize,
}

enum State<I, J, FK, SK, C, K, A, B> {
    Pending {
        first: I,
        second: J,
        first_key: FK,
        second_key: SK,
        comparer: C,
    },
    Running(Plan<K, A, B>),
    Done,
}

/// Yields `selector(key, first_group, second_group)` for every key in the
/// first sequence (first-seen order), then for every key found only in the
/// second sequence (second-sequence first-seen order).
///
/// Elements whose key is absent are dropped from both sides, so no group is
/// ever formed for an absent key.
pub struct FullGroupJoin<I, J, K, FK, SK, RS, C>
where
    I: Iterator,
    J: Iterator,
{
    state: State<I, J, FK, SK, C, K, I::Item, J::Item>,
    selector: RS,
}

impl<I, J, K, FK, SK, RS, C> FullGroupJoin<I, J, K, FK, SK, RS, C>
where
    I: Iterator,
    J: Iterator,
    K: JoinKey,
    FK: FnMut(&I::Item) -> K,
    SK: FnMut(&J::Item) -> K,
    C: EqualityComparer<K> + Clone,
{
    pub fn new(first: I, second: J, first_key: FK, second_key: SK, selector: RS, comparer: C) -> Self {
        Self {
            state: State::Pending {
                first,
                second,
                first_key,
                second_key,
                comparer,
            },
            selector,
        }
    }

    fn plan(
        first: I,
        second: J,
        first_key: FK,
        second_key: SK,
        comparer: C,
    ) -> Plan<K, I::Item, J::Item> {
        let seconds = Lookup::create_for_join(second, second_key, |b| b, comparer.clone());
        let firsts = Lookup::create_for_join(first, first_key, |a| a, comparer);

        let matches: Vec<Option<usize>> = firsts.iter().map(|g| seconds.group_index(g.key())).collect();
        let firsts: Vec<(K, Vec<I::Item>, Option<usize>)> = firsts
            .into_groupings()
            .into_iter()
            .zip(matches)
            .map(|(g, m)| {
                let (k, v) = g.into_parts();
                (k, v, m)
            })
            .collect();
        let seconds = seconds
            .into_groupings()
            .into_iter()
            .map(|g| Some(g.into_parts()))
            .collect();

        Plan {
            firsts: firsts.into_iter(),
            seconds,
            rest: 0,
        }
    }
}

impl<I, J, K, FK, SK, RS, C, R> Iterator for FullGroupJoin<I, J, K, FK, SK, RS, C>
where
    I: Iterator,
    J: Iterator,
    K: JoinKey,
    FK: FnMut(&I::Item) -> K,
    SK: FnMut(&J::Item) -> K,
    RS: FnMut(K, Vec<I::Item>, Vec<J::Item>) -> R,
    C: EqualityComparer<K> + Clone,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let State::Pending { .. } = self.state {
            if let State::Pending {
                first,
                second,
                first_key,
                second_key,
                comparer,
            } = std::mem::replace(&mut self.state, State::Done)
            {
                self.state = State::Running(Self::plan(first, second, first_key, second_key, comparer));
            }
        }

        let plan = match &mut self.state {
            State::Running(plan) => plan,
            _ => return None,
        };

        if let Some((key, firsts, matched)) = plan.firsts.next() {
            let seconds = matched
                .and_then(|m| plan.seconds.get_mut(m).and_then(Option::take))
                .map(|(_, v)| v)
                .unwrap_or_default();
            return Some((self.selector)(key, firsts, seconds));
        }

        while plan.rest < plan.seconds.len() {
            let idx = plan.rest;
            plan.rest += 1;
            if let Some((key, seconds)) = plan.seconds[idx].take() {
                return Some((self.selector)(key, Vec::new(), seconds));
            }
        }

        self.state = State::Done;
        None
    }
}

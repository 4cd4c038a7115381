//! `SeqExt`: every operator as a chainable method on any `Iterator`.
//!
//! Methods only construct operators; nothing is pulled until the result is
//! iterated (except `to_lookup`, which is eager by contract).

use std::hash::Hash;
use std::iter::Fuse;

use seqkit_core::compare::{Comparer, DefaultEq, Direction, EqualityComparer, Natural};
use seqkit_core::config::SeqConfig;
use seqkit_core::error::Result;
use seqkit_core::key::JoinKey;
use seqkit_mem::lookup::Lookup;

use crate::batch::{BatchBy, BatchWhile};
use crate::bind::BindByIndex;
use crate::combinatorics::{PartialSort, PartialSortByKey, Permutations, Subsets, SubsetsOfSize};
use crate::errors::IgnoreErrors;
use crate::join::{right_join, FullGroupJoin, FullJoin, LeftJoin, RightJoin};
use crate::merge::{OrderedMerge, SortedMerge, TaggedMerge};
use crate::partition::{Partition, Underflow};
use crate::spill::{spill_head, spill_span, SpillHead, SpillSpan};
use crate::zip::{Defaulted, EquiZip, Padded, ZipLongest, ZipShortest};

pub trait SeqExt: Iterator + Sized {
    // ---- merge -------------------------------------------------------------

    /// Two-way merge of inputs sorted by a shared key, natural key order.
    #[allow(clippy::too_many_arguments)]
    fn ordered_merge_by<J, K, FK, SK, FS, SS, BS, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        second_sel: SS,
        both_sel: BS,
    ) -> OrderedMerge<Self, J::IntoIter, K, FK, SK, FS, SS, BS, Natural>
    where
        J: IntoIterator,
        K: Ord,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        FS: FnMut(Self::Item) -> R,
        SS: FnMut(J::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        OrderedMerge::new(
            self,
            second.into_iter(),
            first_key,
            second_key,
            first_sel,
            second_sel,
            both_sel,
            Natural,
        )
    }

    /// [`SeqExt::ordered_merge_by`] with an explicit key comparer.
    #[allow(clippy::too_many_arguments)]
    fn ordered_merge_with<J, K, FK, SK, FS, SS, BS, C, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        second_sel: SS,
        both_sel: BS,
        comparer: C,
    ) -> OrderedMerge<Self, J::IntoIter, K, FK, SK, FS, SS, BS, C>
    where
        J: IntoIterator,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        FS: FnMut(Self::Item) -> R,
        SS: FnMut(J::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
        C: Comparer<K>,
    {
        OrderedMerge::new(
            self,
            second.into_iter(),
            first_key,
            second_key,
            first_sel,
            second_sel,
            both_sel,
            comparer,
        )
    }

    /// Two-way merge yielding [`crate::Merged`] tags.
    fn ordered_merge_tagged<J, K, FK, SK>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
    ) -> TaggedMerge<Self, J::IntoIter, K, FK, SK, Natural>
    where
        J: IntoIterator,
        K: Ord,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
    {
        TaggedMerge::<Self, J::IntoIter, K, FK, SK, Natural>::tagged(
            self,
            second.into_iter(),
            first_key,
            second_key,
            Natural,
        )
    }

    /// N-way merge of inputs sorted in `direction`. With no `others`, the
    /// sequence passes through unchanged.
    fn sorted_merge<O>(self, direction: Direction, others: O) -> SortedMerge<Self, Natural>
    where
        O: IntoIterator<Item = Self>,
        Self::Item: Ord,
    {
        self.sorted_merge_with_config(direction, Natural, others, SeqConfig::global())
    }

    fn sorted_merge_by<O, C>(self, direction: Direction, comparer: C, others: O) -> SortedMerge<Self, C>
    where
        O: IntoIterator<Item = Self>,
        C: Comparer<Self::Item>,
    {
        self.sorted_merge_with_config(direction, comparer, others, SeqConfig::global())
    }

    fn sorted_merge_with_config<O, C>(
        self,
        direction: Direction,
        comparer: C,
        others: O,
        config: &SeqConfig,
    ) -> SortedMerge<Self, C>
    where
        O: IntoIterator<Item = Self>,
        C: Comparer<Self::Item>,
    {
        SortedMerge::new(self, others, direction, comparer, config.merge_strategy)
    }

    // ---- lookup & joins ----------------------------------------------------

    /// Eagerly group the sequence; absent keys form their own group.
    fn to_lookup<K, V, FK, FE>(self, key_fn: FK, elem_fn: FE) -> Lookup<K, V>
    where
        K: Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        FE: FnMut(Self::Item) -> V,
    {
        Lookup::create(self, key_fn, elem_fn, DefaultEq)
    }

    fn to_lookup_with<K, V, FK, FE, C>(self, key_fn: FK, elem_fn: FE, comparer: C) -> Lookup<K, V, C>
    where
        FK: FnMut(&Self::Item) -> K,
        FE: FnMut(Self::Item) -> V,
        C: EqualityComparer<K>,
    {
        Lookup::create(self, key_fn, elem_fn, comparer)
    }

    fn left_join<J, K, FK, SK, FS, BS, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        both_sel: BS,
    ) -> LeftJoin<Self, J::IntoIter, K, FK, SK, FS, BS, DefaultEq>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
        K: JoinKey + Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        FS: FnMut(Self::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        LeftJoin::new(self, second.into_iter(), first_key, second_key, first_sel, both_sel, DefaultEq)
    }

    #[allow(clippy::too_many_arguments)]
    fn left_join_with<J, K, FK, SK, FS, BS, C, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        both_sel: BS,
        comparer: C,
    ) -> LeftJoin<Self, J::IntoIter, K, FK, SK, FS, BS, C>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
        K: JoinKey,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K>,
        FS: FnMut(Self::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        LeftJoin::new(self, second.into_iter(), first_key, second_key, first_sel, both_sel, comparer)
    }

    fn right_join<J, K, FK, SK, SS, BS, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        second_sel: SS,
        both_sel: BS,
    ) -> RightJoin<Self, J::IntoIter, K, FK, SK, SS, BS, DefaultEq>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
        K: JoinKey + Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        SS: FnMut(J::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        right_join(self, second.into_iter(), first_key, second_key, second_sel, both_sel, DefaultEq)
    }

    #[allow(clippy::too_many_arguments)]
    fn right_join_with<J, K, FK, SK, SS, BS, C, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        second_sel: SS,
        both_sel: BS,
        comparer: C,
    ) -> RightJoin<Self, J::IntoIter, K, FK, SK, SS, BS, C>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
        K: JoinKey,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K>,
        SS: FnMut(J::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        right_join(self, second.into_iter(), first_key, second_key, second_sel, both_sel, comparer)
    }

    #[allow(clippy::too_many_arguments)]
    fn full_join<J, K, FK, SK, FS, SS, BS, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        second_sel: SS,
        both_sel: BS,
    ) -> FullJoin<Self, J::IntoIter, K, FK, SK, FS, SS, BS, DefaultEq>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
        K: JoinKey + Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        FS: FnMut(Self::Item) -> R,
        SS: FnMut(J::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        FullJoin::new(
            self,
            second.into_iter(),
            first_key,
            second_key,
            first_sel,
            second_sel,
            both_sel,
            DefaultEq,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn full_join_with<J, K, FK, SK, FS, SS, BS, C, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        first_sel: FS,
        second_sel: SS,
        both_sel: BS,
        comparer: C,
    ) -> FullJoin<Self, J::IntoIter, K, FK, SK, FS, SS, BS, C>
    where
        J: IntoIterator,
        Self::Item: Clone,
        J::Item: Clone,
        K: JoinKey,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K>,
        FS: FnMut(Self::Item) -> R,
        SS: FnMut(J::Item) -> R,
        BS: FnMut(Self::Item, J::Item) -> R,
    {
        FullJoin::new(
            self,
            second.into_iter(),
            first_key,
            second_key,
            first_sel,
            second_sel,
            both_sel,
            comparer,
        )
    }

    fn full_group_join<J, K, FK, SK, RS, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        selector: RS,
    ) -> FullGroupJoin<Self, J::IntoIter, K, FK, SK, RS, DefaultEq>
    where
        J: IntoIterator,
        K: JoinKey + Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        RS: FnMut(K, Vec<Self::Item>, Vec<J::Item>) -> R,
    {
        FullGroupJoin::new(self, second.into_iter(), first_key, second_key, selector, DefaultEq)
    }

    fn full_group_join_with<J, K, FK, SK, RS, C, R>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        selector: RS,
        comparer: C,
    ) -> FullGroupJoin<Self, J::IntoIter, K, FK, SK, RS, C>
    where
        J: IntoIterator,
        K: JoinKey,
        FK: FnMut(&Self::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        C: EqualityComparer<K> + Clone,
        RS: FnMut(K, Vec<Self::Item>, Vec<J::Item>) -> R,
    {
        FullGroupJoin::new(self, second.into_iter(), first_key, second_key, selector, comparer)
    }

    // ---- binding, partitioning, batching ------------------------------------

    /// Bind requested indices to elements, using the configured default
    /// lookback window.
    fn bind_by_index<X, M, S, R>(self, indices: X, match_sel: M, missing_sel: S) -> BindByIndex<Self, X::IntoIter, M, S>
    where
        X: IntoIterator<Item = isize>,
        M: FnMut(Self::Item, usize) -> R,
        S: FnMut(isize) -> R,
    {
        BindByIndex::with_config(self, indices.into_iter(), SeqConfig::global(), match_sel, missing_sel)
    }

    /// `lookback == None` keeps unbounded history; `Some(0)` keeps none.
    fn bind_by_index_with_lookback<X, M, S, R>(
        self,
        indices: X,
        lookback: Option<usize>,
        match_sel: M,
        missing_sel: S,
    ) -> BindByIndex<Self, X::IntoIter, M, S>
    where
        X: IntoIterator<Item = isize>,
        M: FnMut(Self::Item, usize) -> R,
        S: FnMut(isize) -> R,
    {
        BindByIndex::new(self, indices.into_iter(), lookback, match_sel, missing_sel)
    }

    /// `Underflow::Rest` replays the remainder from a clone of the source,
    /// hence the `Clone` bound. See [`SeqExt::partitions_stop`] otherwise.
    fn partitions<Z>(self, sizes: Z, underflow: Underflow) -> Partition<Self, Z::IntoIter>
    where
        Self: Clone,
        Z: IntoIterator<Item = usize>,
    {
        Partition::new(self, sizes.into_iter(), underflow)
    }

    /// Partitions with `Underflow::Stop`, for sources that cannot be cloned.
    fn partitions_stop<Z>(self, sizes: Z) -> Partition<Self, Z::IntoIter>
    where
        Z: IntoIterator<Item = usize>,
    {
        Partition::stop(self, sizes.into_iter())
    }

    fn batch_while<P>(self, pred: P) -> BatchWhile<Self, P>
    where
        P: FnMut(&Self::Item, &[Self::Item]) -> bool,
    {
        BatchWhile::new(self, pred)
    }

    /// Fails immediately when `accepted` is empty or repeats a key.
    fn batch_by<A, K, F>(self, accepted: A, key_fn: F) -> Result<BatchBy<Self, K, F, DefaultEq>>
    where
        A: IntoIterator<Item = K>,
        K: JoinKey + Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        BatchBy::new(self, accepted, key_fn, DefaultEq)
    }

    fn batch_by_with<A, K, F, C>(self, accepted: A, key_fn: F, comparer: C) -> Result<BatchBy<Self, K, F, C>>
    where
        A: IntoIterator<Item = K>,
        K: JoinKey,
        F: FnMut(&Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        BatchBy::new(self, accepted, key_fn, comparer)
    }

    fn spill_head<HF, H, RF, R>(self, count: usize, head_fn: HF, result: RF) -> SpillHead<Self, HF, H, RF>
    where
        HF: FnOnce(Vec<Self::Item>) -> H,
        RF: FnMut(&H, Self::Item) -> R,
    {
        spill_head(self, count, head_fn, result)
    }

    fn spill_span<P, HF, H, RF, R>(self, pred: P, head_fn: HF, result: RF) -> SpillSpan<Self, P, HF, H, RF>
    where
        P: FnMut(&Self::Item) -> bool,
        HF: FnOnce(Vec<Self::Item>) -> H,
        RF: FnMut(&H, Self::Item) -> R,
    {
        spill_span(self, pred, head_fn, result)
    }

    // ---- combinatorics ---------------------------------------------------------

    fn permutations(self) -> Permutations<Self>
    where
        Self::Item: Clone,
    {
        Permutations::new(self)
    }

    fn subsets(self) -> Subsets<Self>
    where
        Self::Item: Clone,
    {
        Subsets::new(self)
    }

    /// The size bound is checked on the first pull.
    fn subsets_of_size(self, size: usize) -> SubsetsOfSize<Self>
    where
        Self::Item: Clone,
    {
        SubsetsOfSize::new(self, size)
    }

    fn partial_sort(self, k: usize, direction: Direction) -> PartialSort<Self, Natural>
    where
        Self::Item: Ord,
    {
        PartialSort::new(self, k, Natural, direction)
    }

    fn partial_sort_by<C>(self, k: usize, comparer: C, direction: Direction) -> PartialSort<Self, C>
    where
        C: Comparer<Self::Item>,
    {
        PartialSort::new(self, k, comparer, direction)
    }

    fn partial_sort_by_key<K, F>(self, k: usize, key_fn: F, direction: Direction) -> PartialSortByKey<Self, K, F, Natural>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        PartialSortByKey::new(self, k, key_fn, Natural, direction)
    }

    // ---- zips ------------------------------------------------------------------

    fn zip_shortest<J, F, R>(self, other: J, f: F) -> ZipShortest<(Self, J::IntoIter), F>
    where
        J: IntoIterator,
        F: FnMut(Self::Item, J::Item) -> R,
    {
        ZipShortest::new((self, other.into_iter()), f)
    }

    fn zip_longest<J, F, R>(self, other: J, f: F) -> ZipLongest<(Fuse<Self>, Fuse<J::IntoIter>), F, Padded>
    where
        J: IntoIterator,
        F: FnMut(Option<Self::Item>, Option<J::Item>) -> R,
    {
        ZipLongest::new((self.fuse(), other.into_iter().fuse()), f)
    }

    fn zip_longest_default<J, F, R>(
        self,
        other: J,
        f: F,
    ) -> ZipLongest<(Fuse<Self>, Fuse<J::IntoIter>), F, Defaulted>
    where
        J: IntoIterator,
        Self::Item: Default,
        J::Item: Default,
        F: FnMut(Self::Item, J::Item) -> R,
    {
        ZipLongest::new((self.fuse(), other.into_iter().fuse()), f)
    }

    fn equi_zip<J, F, R>(self, other: J, f: F) -> EquiZip<(Fuse<Self>, Fuse<J::IntoIter>), F>
    where
        J: IntoIterator,
        F: FnMut(Self::Item, J::Item) -> R,
    {
        EquiZip::new((self.fuse(), other.into_iter().fuse()), f)
    }

    // ---- errors ----------------------------------------------------------------

    fn ignore_errors<T, E, P>(self, ignore: P) -> IgnoreErrors<Self, P>
    where
        Self: Iterator<Item = std::result::Result<T, E>>,
        P: FnMut(&E) -> bool,
    {
        IgnoreErrors::new(self, ignore)
    }
}

impl<I: Iterator> SeqExt for I {}

#![forbid(unsafe_code)]
//! seqkit-operators: lazy, stateful sequence operators over `Iterator`.
//!
//! Design intent:
//! - Every operator is a plain struct implementing `Iterator`; nothing runs
//!   until the consumer pulls. Buffering operators materialize their inputs
//!   on the first `next()`, never at construction.
//! - Operators own their input iterators, so dropping an operator (normal
//!   end, early break, unwinding) releases every upstream cursor.
//! - All buffering goes through `seqkit-mem` structures.
//! - `SeqExt` exposes everything as chainable methods.

pub mod batch;
pub mod bind;
pub mod combinatorics;
pub mod errors;
pub mod join;
pub mod merge;
pub mod metrics;
pub mod partition;
pub mod spill;
pub mod traits;
pub mod zip;

pub use batch::{BatchBy, BatchWhile};
pub use bind::BindByIndex;
pub use combinatorics::{PartialSort, PartialSortByKey, Permutations, Subsets, SubsetsOfSize};
pub use errors::IgnoreErrors;
pub use join::{right_join, Flipped, FullGroupJoin, FullJoin, LeftJoin, PairSelector, RightJoin};
pub use merge::{Merged, OrderedMerge, SortedMerge, TaggedMerge};
pub use partition::{Part, Partition, Remainder, RemainderIter, Underflow};
pub use spill::{spill_head, spill_span, HeadCount, HeadRule, HeadWhile, Spill, SpillHead, SpillSpan};
pub use traits::SeqExt;
pub use zip::{
    equi_zip2, equi_zip3, equi_zip4, zip_longest2, zip_longest3, zip_longest4, zip_longest_default2,
    zip_longest_default3, zip_longest_default4, zip_shortest2, zip_shortest3, zip_shortest4,
    Defaulted, EquiZip, Padded, ZipLongest, ZipShortest,
};

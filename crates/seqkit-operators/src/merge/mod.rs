//! Ordered merges over pre-sorted inputs.
//!
//! Precondition for every operator here: inputs are already sorted under the
//! comparer (and direction) the caller passes. Unsorted inputs are not
//! detected; the output is then simply unspecified.

pub mod ordered;
pub mod sorted;

pub use ordered::{Merged, OrderedMerge, TaggedMerge};
pub use sorted::SortedMerge;

//! Combinatorial generators over finite sequences.
//!
//! All of these snapshot their source on the first pull, so they only make
//! sense for finite inputs.

pub mod counter;
pub mod partial_sort;
pub mod permutations;
pub mod subsets;

pub use counter::{Combinations, NestedCounter};
pub use partial_sort::{PartialSort, PartialSortByKey};
pub use permutations::Permutations;
pub use subsets::{Subsets, SubsetsOfSize};

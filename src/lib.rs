#![forbid(unsafe_code)]
//! seqkit: lazy, stateful sequence operators over `Iterator`.
//!
//! Re-exports the workspace crates so callers depend on one name:
//! - capabilities and configuration from `seqkit-core`,
//! - buffering structures from `seqkit-mem`,
//! - every operator plus the `SeqExt` extension trait from `seqkit-operators`.

pub use seqkit_core::{
    Comparer, DefaultEq, Direction, EqualityComparer, Error, Grouping, JoinKey, KeyedEq,
    MergeStrategy, Natural, Result, SeqConfig,
};
pub use seqkit_mem::{LookbackQueue, Lookup, PeakTracker, TopK};
pub use seqkit_operators::*;

pub mod prelude {
    pub use seqkit_core::prelude::*;
    pub use seqkit_mem::Lookup;
    pub use seqkit_operators::{Merged, Part, SeqExt, Underflow};
}

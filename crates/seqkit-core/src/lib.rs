#![forbid(unsafe_code)]
//! seqkit-core: shared vocabulary for the seqkit operator crates.
//!
//! Design intent:
//! - No iteration logic lives here; only the capabilities operators are
//!   parameterized over (comparers, key absence, groupings) plus the error
//!   taxonomy and runtime configuration.
//! - Keep this crate dependency-light so `seqkit-mem` and
//!   `seqkit-operators` can share it without pulling each other in.

pub mod compare;
pub mod config;
pub mod error;
pub mod grouping;
pub mod key;
pub mod prelude;

pub use compare::{Comparer, DefaultEq, Direction, EqualityComparer, KeyedEq, Natural};
pub use config::{MergeStrategy, SeqConfig};
pub use error::{Error, Result};
pub use grouping::Grouping;
pub use key::JoinKey;

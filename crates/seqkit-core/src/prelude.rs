//! Convenient re-exports for downstream crates.

pub use crate::compare::{Comparer, DefaultEq, Direction, EqualityComparer, KeyedEq, Natural};
pub use crate::config::{MergeStrategy, SeqConfig};
pub use crate::error::{Error, Result};
pub use crate::grouping::Grouping;
pub use crate::key::JoinKey;

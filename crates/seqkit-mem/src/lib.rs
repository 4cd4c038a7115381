#![forbid(unsafe_code)]
//! seqkit-mem: the buffering structures operators own during one iteration.
//!
//! Every structure here is owned by exactly one operator iteration and is
//! never shared across threads, so nothing locks. Operators that need to
//! hold history (joins, index binding, top-K selection) build on these
//! instead of ad-hoc vectors so growth and eviction rules live in one place.

pub mod lookback;
pub mod lookup;
pub mod topk;
pub mod tracking;

pub use lookback::LookbackQueue;
pub use lookup::Lookup;
pub use topk::TopK;
pub use tracking::PeakTracker;

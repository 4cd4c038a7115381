//! Operator event hooks.
//!
//! Operators report cursor exhaustion, remainder replays, and length
//! mismatches here. With the `tracing` feature off, every hook is a no-op.

#[cfg(feature = "tracing")]
pub fn emit(op: &'static str, event: &'static str, value: usize) {
    tracing::trace!(op, event, value, "seqkit");
}

#[cfg(not(feature = "tracing"))]
pub fn emit(_op: &'static str, _event: &'static str, _value: usize) { /* no-op */
}

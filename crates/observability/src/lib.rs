//! Tracing/logging setup shared by embedding processes and tests.
//!
//! The aging engine emits structured `tracing` events (one debug event per
//! end-of-day pass, one trace event per aged item); this crate wires a
//! subscriber to them.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

//! Capacity policy: when and how the backing buffer grows and shrinks.
//!
//! The policy is hysteretic: the buffer doubles when an insert finds it
//! full, but only halves once removals leave it at most quarter-full.
//! The gap between the two triggers means an insert/remove sequence
//! oscillating at a capacity boundary never alternates a grow with a
//! shrink on every call, which keeps the per-operation cost amortized
//! O(1).
//!
//! The exact thresholds are internal to the list. Callers observe them
//! only through [`ArrayList::capacity`](crate::ArrayList::capacity) and
//! must not treat specific values as contractual.

/// Multiplier applied to the capacity on growth.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// A shrink fires when `len * SHRINK_TRIGGER_RATIO <= capacity`.
pub(crate) const SHRINK_TRIGGER_RATIO: usize = 4;

/// Capacity after an insert into a full buffer of `capacity` slots.
///
/// Doubles, with a floor of one slot so a capacity-0 list can grow.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    (capacity * GROWTH_FACTOR).max(1)
}

/// Whether a remove that left `len` live elements in a buffer of
/// `capacity` slots should shrink the buffer.
///
/// Quarter-full trigger with a floor: a 1-slot buffer never shrinks.
pub(crate) fn should_shrink(len: usize, capacity: usize) -> bool {
    capacity > 1 && len * SHRINK_TRIGGER_RATIO <= capacity
}

/// Capacity after a shrink of a buffer of `capacity` slots.
///
/// Halves, with a floor of one slot. When [`should_shrink`] holds, the
/// result is always at least `len`, so a shrink can never evict live
/// elements.
pub(crate) fn shrunk_capacity(capacity: usize) -> usize {
    (capacity / GROWTH_FACTOR).max(1)
}

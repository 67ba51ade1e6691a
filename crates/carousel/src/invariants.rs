//! Debug assertion macros for container invariants.
//!
//! These macros provide runtime checks for the structural invariants both
//! containers maintain. They are only active in debug builds
//! (`debug_assert!`), so there is zero overhead in release builds.

// =============================================================================
// Bounded count
// =============================================================================

/// Assert that the occupied count does not exceed the backing capacity.
///
/// **Invariant**: `0 ≤ count ≤ capacity`
///
/// Used after every operation that changes `count` or reallocates storage.
macro_rules! debug_assert_bounded_count {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "bounded-count invariant violated: count {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

// =============================================================================
// Logical index range
// =============================================================================

/// Assert that a logical index is within the addressable range.
///
/// **Invariant**: `index ≤ count`. Index `count` itself is addressable
/// because insertion at the back targets the first vacant slot.
///
/// Used in: `RingDeque::slot()` before computing the wrap mapping.
macro_rules! debug_assert_logical_index {
    ($index:expr, $count:expr) => {
        debug_assert!(
            $index <= $count,
            "logical index {} is beyond the occupied range of {} items",
            $index,
            $count
        )
    };
}

// =============================================================================
// Sorted prefix
// =============================================================================

/// Assert that two neighboring priorities are in order under a comparer.
///
/// **Invariant**: for `i < j` in the occupied prefix,
/// `comparer.compare(p[i], p[j]) ≤ 0`.
///
/// Used in: `PriorityQueue::enqueue()` on the neighbors of a fresh insertion.
/// The `Compare` trait must be in scope at the call site.
macro_rules! debug_assert_ordered_pair {
    ($comparer:expr, $lhs:expr, $rhs:expr) => {
        debug_assert!(
            $comparer.compare($lhs, $rhs) != core::cmp::Ordering::Greater,
            "sorted-prefix invariant violated: an element orders above its right neighbor"
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_logical_index;
pub(crate) use debug_assert_ordered_pair;

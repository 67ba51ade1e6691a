//! Growable array primitives shared by the containers.
//!
//! Both containers keep their items in a fixed-length boxed slice of
//! `Option` slots and track the occupied region themselves. The helpers
//! here cover the shared mechanics: reallocating to an exact new length,
//! opening a gap for an insertion (with or without growing), finding an
//! ordered insertion point, and scanning backward with a caller-supplied
//! match.
//!
//! Range preconditions are validated with plain asserts; a violated
//! precondition is a caller bug, never a silent truncation.

use std::cmp::Ordering;
use std::mem;

/// Allocates a boxed slice of `len` default slots.
///
/// A length of zero allocates nothing.
pub fn new_slots<E: Default>(len: usize) -> Box<[E]> {
    let mut slots = Vec::with_capacity(len);
    slots.resize_with(len, E::default);
    slots.into_boxed_slice()
}

/// Replaces `array` with a slice of exactly `new_len` slots, moving the
/// first `count` elements over and default-filling the rest.
///
/// # Panics
///
/// Panics if `count > array.len()` or `new_len < count`.
pub fn resize<E: Default>(array: &mut Box<[E]>, count: usize, new_len: usize) {
    assert!(
        count <= array.len(),
        "count {count} exceeds the array length {}",
        array.len()
    );
    assert!(new_len >= count, "length {new_len} cannot hold {count} items");

    let mut resized = new_slots(new_len);
    for (slot, old) in resized.iter_mut().zip(array.iter_mut().take(count)) {
        *slot = mem::take(old);
    }
    *array = resized;
}

/// Grow-and-insert in one step: replaces `array` with a slice of `new_len`
/// slots holding the first `count` elements with `value` spliced in at
/// `index`.
///
/// # Panics
///
/// Panics if `count > array.len()`, `new_len <= array.len()`, or
/// `index > count`.
pub fn resize_and_insert<E: Default>(
    array: &mut Box<[E]>,
    count: usize,
    new_len: usize,
    index: usize,
    value: E,
) {
    assert!(
        count <= array.len(),
        "count {count} exceeds the array length {}",
        array.len()
    );
    assert!(
        new_len > array.len(),
        "length {new_len} must exceed the current length {}",
        array.len()
    );
    assert!(index <= count, "insertion index {index} exceeds count {count}");

    let mut resized = new_slots(new_len);
    for i in 0..index {
        resized[i] = mem::take(&mut array[i]);
    }
    for i in index..count {
        resized[i + 1] = mem::take(&mut array[i]);
    }
    resized[index] = value;
    *array = resized;
}

/// In-place insert into an array with spare capacity: shifts `[index, count)`
/// right by one and writes `value` at `index`. The vacant slot at `count` is
/// consumed.
///
/// # Panics
///
/// Panics if `count >= array.len()` or `index > count`.
pub fn insert_within<E>(array: &mut [E], count: usize, index: usize, value: E) {
    assert!(
        count < array.len(),
        "count {count} leaves no spare slot in an array of length {}",
        array.len()
    );
    assert!(index <= count, "insertion index {index} exceeds count {count}");

    array[index..=count].rotate_right(1);
    array[index] = value;
}

/// Binary lower-bound search over a sorted region.
///
/// `cmp` reports how the probe value compares with the element it is given.
/// Returns the smallest index whose element is not below the probe, which is
/// the insertion point that keeps the region sorted while placing the probe
/// before any equal elements, or `sorted.len()` if every element is below
/// it. O(log n).
pub fn lower_bound_by<E>(sorted: &[E], mut cmp: impl FnMut(&E) -> Ordering) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&sorted[mid]) == Ordering::Greater {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Backward linear scan: the index of the last element matching `matches`,
/// or `None`.
pub fn last_index_of_by<E>(slice: &[E], matches: impl FnMut(&E) -> bool) -> Option<usize> {
    slice.iter().rposition(matches)
}

/// The doubling growth policy used by both containers when their backing
/// array is exhausted: 4 slots when empty, twice the occupied count
/// otherwise.
pub fn grown_capacity(count: usize) -> usize {
    if count == 0 {
        4
    } else {
        count * 2
    }
}

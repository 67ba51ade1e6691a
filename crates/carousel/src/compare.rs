//! Ordering comparers for the priority queue.

use std::cmp::Ordering;

/// A total order over `T`, supplied to the priority queue at construction.
///
/// A comparer is a value rather than a bare function pointer so stateful
/// orders (weight tables, collation data) can ride along with the queue.
/// Closures of the shape `Fn(&T, &T) -> Ordering` implement it automatically.
pub trait Compare<T> {
    /// Compares `lhs` with `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// The natural order of `T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Reverses another comparer (the natural order by default).
///
/// The priority queue dequeues the item that orders *last* under its
/// comparer, so wrapping the order in `Descending` produces a queue that
/// dequeues the smallest priority first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Descending<C = NaturalOrder>(pub C);

impl<T, C: Compare<T>> Compare<T> for Descending<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

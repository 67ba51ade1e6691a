//! A priority queue backed by a single sorted array of entries.
//!
//! Entries are kept sorted low-to-high by priority over the occupied prefix
//! `[0, count)`. The front of the queue is the high end of the array, so
//! dequeue and peek always touch the last occupied slot and run in O(1);
//! enqueue binary-searches for the insertion point and shifts at most
//! `count` entries.
//!
//! Because the lower-bound search places a new entry before any existing
//! equal-priority entries and the queue drains from the high end, items that
//! share a priority leave the queue in the order they arrived.

use std::fmt;

use crate::array;
use crate::compare::{Compare, NaturalOrder};
use crate::error::CollectionError;
use crate::invariants::{debug_assert_bounded_count, debug_assert_ordered_pair};
use crate::version::Version;

/// A priority with its item, stored as one record so the pair stays in
/// lockstep through every shift and reallocation.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    item: T,
}

/// Unwraps a slot inside the occupied prefix.
fn occupied<T, P>(slot: &Option<Entry<T, P>>) -> &Entry<T, P> {
    match slot {
        Some(entry) => entry,
        None => unreachable!("vacant slot inside the occupied prefix"),
    }
}

/// A queue that dequeues the item whose priority orders *last* under its
/// comparer.
///
/// `C` supplies the total order over priorities and defaults to the natural
/// order of `P`. With the natural order the largest priority dequeues first;
/// wrap the order in [`Descending`](crate::Descending) for a queue that
/// dequeues the smallest priority first. Items with equal priorities dequeue
/// in arrival order either way.
///
/// The queue grows by doubling (4 slots when empty) whenever an enqueue
/// finds the backing array full, and never shrinks implicitly.
///
/// # Example
///
/// ```
/// use carousel::{Descending, NaturalOrder, PriorityQueue};
///
/// let mut queue = PriorityQueue::with_comparer(Descending::<NaturalOrder>::default());
/// queue.enqueue("a", 5);
/// queue.enqueue("b", 1);
/// queue.enqueue("c", 3);
///
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert_eq!(queue.dequeue(), Ok("c"));
/// assert_eq!(queue.dequeue(), Ok("a"));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, P, C = NaturalOrder> {
    slots: Box<[Option<Entry<T, P>>]>,
    count: usize,
    comparer: C,
    version: Version,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// An empty queue over the natural priority order, with no capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty queue over the natural priority order.
    ///
    /// A capacity of zero performs no allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparer(capacity, NaturalOrder)
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, C> PriorityQueue<T, P, C> {
    /// An empty queue ordered by `comparer`, with no capacity.
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_capacity_and_comparer(0, comparer)
    }

    /// An empty queue ordered by `comparer`.
    ///
    /// A capacity of zero performs no allocation.
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            slots: array::new_slots(capacity),
            count: 0,
            comparer,
            version: Version::default(),
        }
    }

    /// The comparer ordering items in the queue by their priorities.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The allocated capacity of the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Places an item in the queue at the position its priority dictates.
    ///
    /// O(log n) search plus an O(n) worst-case shift.
    pub fn enqueue(&mut self, item: T, priority: P)
    where
        C: Compare<P>,
    {
        let index = array::lower_bound_by(&self.slots[..self.count], |slot| {
            self.comparer.compare(&priority, &occupied(slot).priority)
        });

        let entry = Some(Entry { priority, item });
        if self.count == self.capacity() {
            let grown = array::grown_capacity(self.count);
            array::resize_and_insert(&mut self.slots, self.count, grown, index, entry);
        } else {
            array::insert_within(&mut self.slots, self.count, index, entry);
        }
        self.count += 1;
        self.version.bump();

        debug_assert_bounded_count!(self.count, self.capacity());
        if index > 0 {
            debug_assert_ordered_pair!(
                self.comparer,
                &occupied(&self.slots[index - 1]).priority,
                &occupied(&self.slots[index]).priority
            );
        }
        if index + 1 < self.count {
            debug_assert_ordered_pair!(
                self.comparer,
                &occupied(&self.slots[index]).priority,
                &occupied(&self.slots[index + 1]).priority
            );
        }
    }

    /// Removes the item at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the queue holds no items.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.try_dequeue().ok_or(CollectionError::Empty)
    }

    /// Removes the item at the front of the queue, or `None` if the queue is
    /// empty. The vacated slot is cleared so the value is released promptly.
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let entry = self.slots[self.count - 1].take()?;
        self.count -= 1;
        self.version.bump();
        Some(entry.item)
    }

    /// The item at the front of the queue, without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the queue holds no items.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.try_peek().ok_or(CollectionError::Empty)
    }

    /// The item at the front of the queue, or `None` if the queue is empty.
    pub fn try_peek(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.count - 1].as_ref().map(|entry| &entry.item)
    }

    /// The front item together with its priority, or `None` if the queue is
    /// empty.
    pub fn try_peek_with_priority(&self) -> Option<(&T, &P)> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.count - 1]
            .as_ref()
            .map(|entry| (&entry.item, &entry.priority))
    }

    /// Removes all items from the queue. The capacity is retained.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut().take(self.count) {
            *slot = None;
        }
        self.count = 0;
        self.version.bump();
    }

    /// Reallocates the backing array to exactly `capacity` slots.
    ///
    /// Setting the capacity to zero resets the queue to the non-allocating
    /// empty state. The logical contents are untouched, so the version is
    /// not bumped and live cursors stay valid.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityTooSmall`] if `capacity` would not hold the
    /// items already queued.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        if capacity < self.count {
            return Err(CollectionError::CapacityTooSmall {
                requested: capacity,
                count: self.count,
            });
        }
        if capacity != self.capacity() {
            array::resize(&mut self.slots, self.count, capacity);
        }
        Ok(())
    }

    /// Iterates items front to back, i.e. in the order they would dequeue.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            slots: &self.slots[..self.count],
        }
    }

    /// A detached cursor positioned before the front of the queue.
    pub fn cursor(&self) -> PriorityCursor {
        PriorityCursor {
            index: self.count,
            version: self.version,
        }
    }
}

impl<T: fmt::Debug, P, C> fmt::Debug for PriorityQueue<T, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, P, C> IntoIterator for &'a PriorityQueue<T, P, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`PriorityQueue`], front first.
///
/// The queue begins toward the end of the backing array, so the iterator
/// starts there and walks backward.
pub struct Iter<'a, T, P> {
    slots: &'a [Option<Entry<T, P>>],
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (last, rest) = self.slots.split_last()?;
        self.slots = rest;
        Some(&occupied(last).item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

/// A detached cursor over a [`PriorityQueue`], walking front to back.
///
/// The cursor holds no borrow; the queue is passed to every step. A snapshot
/// of the queue's version is taken at creation and on [`reset`](Self::reset),
/// and each step compares it with the queue's current version, so a
/// structural mutation made between steps surfaces as
/// [`CollectionError::Modified`] instead of an inconsistent walk. A cursor
/// must only be used with the queue that created it.
#[derive(Debug, Clone)]
pub struct PriorityCursor {
    index: usize,
    version: Version,
}

impl PriorityCursor {
    /// Advances to the next item, front first. `Ok(None)` once the walk is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Modified`] if the queue has been structurally
    /// mutated since the cursor was created or last reset.
    pub fn next<'a, T, P, C>(
        &mut self,
        queue: &'a PriorityQueue<T, P, C>,
    ) -> Result<Option<&'a T>, CollectionError> {
        if self.version != queue.version {
            return Err(CollectionError::Modified);
        }
        if self.index == 0 {
            return Ok(None);
        }
        self.index -= 1;
        Ok(queue.slots[self.index].as_ref().map(|entry| &entry.item))
    }

    /// Restarts the walk and re-synchronizes with the queue's current
    /// version.
    pub fn reset<T, P, C>(&mut self, queue: &PriorityQueue<T, P, C>) {
        self.index = queue.count;
        self.version = queue.version;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Descending;

    #[test]
    fn dequeues_in_ascending_order_under_a_descending_comparer() {
        let mut queue = PriorityQueue::with_comparer(Descending::<NaturalOrder>::default());
        queue.enqueue("a", 5);
        queue.enqueue("b", 1);
        queue.enqueue("c", 3);

        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Err(CollectionError::Empty));
    }

    #[test]
    fn natural_order_dequeues_the_largest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("low", 1);
        queue.enqueue("high", 9);
        queue.enqueue("mid", 5);

        assert_eq!(queue.dequeue(), Ok("high"));
        assert_eq!(queue.dequeue(), Ok("mid"));
        assert_eq!(queue.dequeue(), Ok("low"));
    }

    #[test]
    fn equal_priorities_dequeue_in_arrival_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("first", 7);
        queue.enqueue("second", 7);
        queue.enqueue("third", 7);

        assert_eq!(queue.dequeue(), Ok("first"));
        assert_eq!(queue.dequeue(), Ok("second"));
        assert_eq!(queue.dequeue(), Ok("third"));
    }

    #[test]
    fn capacity_doubles_from_four() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.capacity(), 0);

        queue.enqueue('x', 0);
        assert_eq!(queue.capacity(), 4);

        for i in 1..=4 {
            queue.enqueue('x', i);
        }
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn set_capacity_rejects_values_below_count() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('a', 1);
        queue.enqueue('b', 2);

        assert_eq!(
            queue.set_capacity(1),
            Err(CollectionError::CapacityTooSmall {
                requested: 1,
                count: 2
            })
        );
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn set_capacity_reallocates_exactly() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('a', 1);
        queue.set_capacity(10).unwrap();
        assert_eq!(queue.capacity(), 10);
        assert_eq!(queue.dequeue(), Ok('a'));

        queue.set_capacity(0).unwrap();
        assert_eq!(queue.capacity(), 0);
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.peek(), Err(CollectionError::Empty));
        assert_eq!(queue.try_peek(), None);

        queue.enqueue("only", 1);
        assert_eq!(queue.peek(), Ok(&"only"));
        assert_eq!(queue.try_peek_with_priority(), Some((&"only", &1)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn try_dequeue_on_empty_leaves_the_queue_unchanged() {
        let mut queue = PriorityQueue::<char, i32>::new();
        assert_eq!(queue.try_dequeue(), None);
        assert_eq!(queue.len(), 0);

        let mut cursor = queue.cursor();
        assert_eq!(cursor.next(&queue), Ok(None));
    }

    #[test]
    fn clear_retains_the_capacity() {
        let mut queue = PriorityQueue::new();
        for i in 0..5 {
            queue.enqueue(i, i);
        }
        let capacity = queue.capacity();

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), capacity);
    }

    #[test]
    fn iter_yields_the_dequeue_order() {
        let mut queue = PriorityQueue::with_comparer(Descending::<NaturalOrder>::default());
        queue.enqueue("a", 5);
        queue.enqueue("b", 1);
        queue.enqueue("c", 3);

        let order: Vec<_> = queue.iter().copied().collect();
        assert_eq!(order, ["b", "c", "a"]);
        assert_eq!(queue.iter().len(), 3);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn cursor_walks_front_to_back() {
        let mut queue = PriorityQueue::with_comparer(Descending::<NaturalOrder>::default());
        queue.enqueue(10, 10);
        queue.enqueue(20, 20);

        let mut cursor = queue.cursor();
        assert_eq!(cursor.next(&queue), Ok(Some(&10)));
        assert_eq!(cursor.next(&queue), Ok(Some(&20)));
        assert_eq!(cursor.next(&queue), Ok(None));
    }

    #[test]
    fn cursor_fails_after_a_structural_mutation() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('a', 1);

        let mut cursor = queue.cursor();
        queue.enqueue('b', 2);
        assert_eq!(cursor.next(&queue), Err(CollectionError::Modified));

        cursor.reset(&queue);
        assert_eq!(cursor.next(&queue), Ok(Some(&'b')));
    }

    #[test]
    fn cursor_survives_a_capacity_change() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('a', 1);

        let mut cursor = queue.cursor();
        queue.set_capacity(16).unwrap();
        assert_eq!(cursor.next(&queue), Ok(Some(&'a')));
    }

    #[test]
    fn debug_formats_as_a_list() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1, 1);
        queue.enqueue(2, 2);
        assert_eq!(format!("{queue:?}"), "[2, 1]");
    }

    #[test]
    fn closure_comparers_order_the_queue() {
        let mut queue =
            PriorityQueue::with_comparer(|lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len()));
        queue.enqueue(1, "aaa");
        queue.enqueue(2, "a");
        queue.enqueue(3, "aa");

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(2));
    }
}

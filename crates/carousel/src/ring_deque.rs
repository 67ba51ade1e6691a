//! A double-ended queue over a circular, growable array.
//!
//! Logical index `i` lives at physical slot `(start + i) % capacity`; the
//! occupied region is the `count` slots starting at `start` and wrapping
//! around the end of the array. Operations at either end are O(1) amortized.
//! Arbitrary insertion and removal shift whichever logical sub-range is
//! shorter, moving slots one by one through the wrap mapping.
//!
//! Growth allocates a doubled array (4 slots when empty) and repacks the
//! logical sequence to the front, resetting `start` to zero. The array never
//! shrinks implicitly; [`RingDeque::set_capacity`] is the only way down.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::array;
use crate::error::CollectionError;
use crate::invariants::{debug_assert_bounded_count, debug_assert_logical_index};
use crate::version::Version;

/// A circular, growable double-ended queue with random access.
///
/// One concrete container serving several roles at once: pushes and pops at
/// both ends, list-style indexed access and arbitrary insert/remove, plus
/// [`Queue`](crate::Queue) and [`Stack`](crate::Stack) capability views over
/// the same state.
///
/// Vacated slots are cleared immediately so removed values are released as
/// soon as they leave the deque.
///
/// # Example
///
/// ```
/// use carousel::RingDeque;
///
/// let mut deque = RingDeque::with_capacity(2);
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_back(3); // grows to 4 slots
///
/// assert_eq!(deque.capacity(), 4);
/// assert_eq!(deque.try_pop_front(), Some(1));
/// assert_eq!(deque[0], 2);
/// ```
#[derive(Clone)]
pub struct RingDeque<T> {
    slots: Box<[Option<T>]>,
    start: usize,
    count: usize,
    version: Version,
}

impl<T> RingDeque<T> {
    /// An empty deque with no capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty deque with room for `capacity` items.
    ///
    /// A capacity of zero performs no allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: array::new_slots(capacity),
            start: 0,
            count: 0,
            version: Version::default(),
        }
    }

    /// The number of items in the deque.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the deque holds no items.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The allocated capacity of the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Physical slot of logical index `index`.
    fn slot(&self, index: usize) -> usize {
        debug_assert_logical_index!(index, self.count);
        (self.start + index) % self.slots.len()
    }

    /// One physical step backward, wrapping at the front of the array.
    fn retreat(&self, index: usize) -> usize {
        let capacity = self.slots.len();
        (index + capacity - 1) % capacity
    }

    /// One physical step forward, wrapping at the end of the array.
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Moves the logical sequence into a fresh array of `capacity` slots
    /// starting at physical zero, leaving a hole at logical `gap` for a
    /// pending insertion (`gap == count` leaves no hole).
    fn repack_with_gap(&mut self, capacity: usize, gap: usize) {
        let mut slots: Box<[Option<T>]> = array::new_slots(capacity);
        for i in 0..self.count {
            let from = self.slot(i);
            let to = if i < gap { i } else { i + 1 };
            slots[to] = self.slots[from].take();
        }
        self.slots = slots;
        self.start = 0;
    }

    /// Prepends an item. O(1) unless the deque has to grow.
    pub fn push_front(&mut self, item: T) {
        if self.count == self.capacity() {
            self.repack_with_gap(array::grown_capacity(self.count), 0);
            self.slots[0] = Some(item);
        } else {
            self.start = self.retreat(self.start);
            self.slots[self.start] = Some(item);
        }
        self.count += 1;
        self.version.bump();
        debug_assert_bounded_count!(self.count, self.capacity());
    }

    /// Appends an item. O(1) unless the deque has to grow.
    pub fn push_back(&mut self, item: T) {
        if self.count == self.capacity() {
            self.repack_with_gap(array::grown_capacity(self.count), self.count);
            self.slots[self.count] = Some(item);
        } else {
            let at = self.slot(self.count);
            self.slots[at] = Some(item);
        }
        self.count += 1;
        self.version.bump();
        debug_assert_bounded_count!(self.count, self.capacity());
    }

    /// Inserts an item at logical `index`, shifting the shorter of the two
    /// surrounding sub-ranges.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index > len()`. The check
    /// precedes any mutation.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
        if index > self.count {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.count,
            });
        }

        if self.count == self.capacity() {
            self.repack_with_gap(array::grown_capacity(self.count), index);
            self.slots[index] = Some(item);
        } else if index <= self.count / 2 {
            // Open the gap by shifting the prefix one slot toward the front.
            self.start = self.retreat(self.start);
            for i in 0..index {
                let to = self.slot(i);
                let from = self.slot(i + 1);
                self.slots[to] = self.slots[from].take();
            }
            let at = self.slot(index);
            self.slots[at] = Some(item);
        } else {
            // Open the gap by shifting the suffix one slot toward the back.
            for i in (index..self.count).rev() {
                let from = self.slot(i);
                let to = self.slot(i + 1);
                self.slots[to] = self.slots[from].take();
            }
            let at = self.slot(index);
            self.slots[at] = Some(item);
        }
        self.count += 1;
        self.version.bump();
        debug_assert_bounded_count!(self.count, self.capacity());
        Ok(())
    }

    /// Removes and returns the item at logical `index`, shifting the shorter
    /// of the two surrounding sub-ranges to close the gap.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index >= len()`. The check
    /// precedes any mutation.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.count {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.count,
            });
        }

        let at = self.slot(index);
        let Some(removed) = self.slots[at].take() else {
            unreachable!("vacant slot inside the occupied region");
        };

        if index < self.count / 2 {
            // Close the gap by shifting the prefix one slot toward the back.
            for i in (0..index).rev() {
                let from = self.slot(i);
                let to = self.slot(i + 1);
                self.slots[to] = self.slots[from].take();
            }
            self.start = self.advance(self.start);
        } else {
            for i in index + 1..self.count {
                let from = self.slot(i);
                let to = self.slot(i - 1);
                self.slots[to] = self.slots[from].take();
            }
        }
        self.count -= 1;
        self.version.bump();
        Ok(removed)
    }

    /// The first item.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the deque holds no items.
    pub fn peek_front(&self) -> Result<&T, CollectionError> {
        self.try_peek_front().ok_or(CollectionError::Empty)
    }

    /// The first item, or `None` if the deque is empty.
    pub fn try_peek_front(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.start].as_ref()
    }

    /// Removes and returns the first item.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the deque holds no items.
    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        self.try_pop_front().ok_or(CollectionError::Empty)
    }

    /// Removes and returns the first item, or `None` if the deque is empty.
    pub fn try_pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.slots[self.start].take()?;
        self.start = self.advance(self.start);
        self.count -= 1;
        self.version.bump();
        Some(item)
    }

    /// The last item.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the deque holds no items.
    pub fn peek_back(&self) -> Result<&T, CollectionError> {
        self.try_peek_back().ok_or(CollectionError::Empty)
    }

    /// The last item, or `None` if the deque is empty.
    pub fn try_peek_back(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.slots[self.slot(self.count - 1)].as_ref()
    }

    /// Removes and returns the last item.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the deque holds no items.
    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        self.try_pop_back().ok_or(CollectionError::Empty)
    }

    /// Removes and returns the last item, or `None` if the deque is empty.
    pub fn try_pop_back(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let at = self.slot(self.count - 1);
        let item = self.slots[at].take()?;
        self.count -= 1;
        self.version.bump();
        Some(item)
    }

    /// The item at logical `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.slots[self.slot(index)].as_ref()
    }

    /// Mutable access to the item at logical `index`, or `None` if out of
    /// range. In-place value mutation is not a structural change and leaves
    /// live cursors valid.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.count {
            return None;
        }
        let at = self.slot(index);
        self.slots[at].as_mut()
    }

    /// Replaces the item at logical `index`, returning the previous value.
    /// Value replacement is not a structural change and does not bump the
    /// version.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, CollectionError> {
        let len = self.count;
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, item)),
            None => Err(CollectionError::IndexOutOfRange { index, len }),
        }
    }

    /// Removes all items. The capacity and start position are retained.
    pub fn clear(&mut self) {
        for i in 0..self.count {
            let at = self.slot(i);
            self.slots[at] = None;
        }
        self.count = 0;
        self.version.bump();
    }

    /// Whether any item equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// The logical index of the first item equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_by(|candidate| candidate == item)
    }

    /// The logical index of the first item matching `matches`.
    pub fn index_of_by(&self, mut matches: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(|candidate| matches(candidate))
    }

    /// The logical index of the last item equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.last_index_of_by(|candidate| candidate == item)
    }

    /// The logical index of the last item matching `matches`.
    ///
    /// Scans backward over the one or two contiguous physical runs that make
    /// up the logical sequence.
    pub fn last_index_of_by(&self, mut matches: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut matches_slot =
            |slot: &Option<T>| slot.as_ref().is_some_and(|candidate| matches(candidate));
        let capacity = self.slots.len();

        if self.start + self.count <= capacity {
            let run = &self.slots[self.start..self.start + self.count];
            return array::last_index_of_by(run, &mut matches_slot);
        }

        // Wrapped: the trailing physical run holds the logical tail.
        let split = capacity - self.start;
        let wrapped = &self.slots[..self.start + self.count - capacity];
        if let Some(i) = array::last_index_of_by(wrapped, &mut matches_slot) {
            return Some(split + i);
        }
        array::last_index_of_by(&self.slots[self.start..], &mut matches_slot)
    }

    /// Removes the first item equal to `item`. Returns whether a match was
    /// found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_by(|candidate| candidate == item).is_some()
    }

    /// Removes and returns the first item matching `matches`.
    pub fn remove_by(&mut self, matches: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.index_of_by(matches)?;
        self.remove_at(index).ok()
    }

    /// Clones the logical sequence into the front of `dest`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DestinationTooSmall`] if `dest` cannot hold
    /// `len()` items; nothing is written in that case.
    pub fn copy_to_slice(&self, dest: &mut [T]) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        if dest.len() < self.count {
            return Err(CollectionError::DestinationTooSmall {
                needed: self.count,
                len: dest.len(),
            });
        }
        for (slot, item) in dest.iter_mut().zip(self.iter()) {
            *slot = item.clone();
        }
        Ok(())
    }

    /// The logical sequence as a freshly allocated `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Reallocates the backing array to exactly `capacity` slots, repacking
    /// the logical sequence to the front.
    ///
    /// The logical contents are untouched, so the version is not bumped and
    /// live cursors stay valid.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityTooSmall`] if `capacity` would not hold
    /// the items already stored.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        if capacity < self.count {
            return Err(CollectionError::CapacityTooSmall {
                requested: capacity,
                count: self.count,
            });
        }
        if capacity != self.capacity() {
            self.repack_with_gap(capacity, self.count);
        }
        Ok(())
    }

    /// Iterates the logical sequence front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            index: 0,
        }
    }

    /// A detached cursor positioned before the first item.
    pub fn cursor(&self) -> RingCursor {
        RingCursor {
            index: 0,
            version: self.version,
        }
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {index} is out of range for a deque of {} items",
                self.count
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.count;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} is out of range for a deque of {len} items"),
        }
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`RingDeque`], front to back.
pub struct Iter<'a, T> {
    deque: &'a RingDeque<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.deque.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.count - self.index.min(self.deque.count);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A detached cursor over a [`RingDeque`], walking front to back.
///
/// The cursor holds no borrow; the deque is passed to every step. A snapshot
/// of the deque's version is taken at creation and on [`reset`](Self::reset),
/// and each step compares it with the deque's current version, so a
/// structural mutation made between steps surfaces as
/// [`CollectionError::Modified`] instead of an inconsistent walk. A cursor
/// must only be used with the deque that created it.
#[derive(Debug, Clone)]
pub struct RingCursor {
    index: usize,
    version: Version,
}

impl RingCursor {
    /// Advances to the next item in logical order. `Ok(None)` once the walk
    /// is exhausted.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Modified`] if the deque has been structurally
    /// mutated since the cursor was created or last reset.
    pub fn next<'a, T>(&mut self, deque: &'a RingDeque<T>) -> Result<Option<&'a T>, CollectionError> {
        if self.version != deque.version {
            return Err(CollectionError::Modified);
        }
        let item = deque.get(self.index);
        if item.is_some() {
            self.index += 1;
        }
        Ok(item)
    }

    /// Restarts the walk and re-synchronizes with the deque's current
    /// version.
    pub fn reset<T>(&mut self, deque: &RingDeque<T>) {
        self.index = 0;
        self.version = deque.version;
    }
}

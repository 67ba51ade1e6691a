//! Capability views over the containers.
//!
//! One concrete container can serve several narrow roles at once: the ring
//! deque is simultaneously a queue (enqueue at the back, dequeue at the
//! front) and a stack (push and pop at the front), and the priority queue is
//! a queue whose dequeue order follows priorities. Each view is a trait over
//! the same shared state, so mutations through one view are observed by all
//! of them, including by live cursors. Where the same verb appears in more
//! than one view (`peek`), fully qualified call syntax selects the view:
//! `Queue::peek(&deque)` vs `Stack::peek(&deque)`.

use crate::compare::Compare;
use crate::error::CollectionError;
use crate::priority_queue::PriorityQueue;
use crate::ring_deque::RingDeque;

/// First-in-first-out view: items enter at the back and leave at the front.
pub trait Queue<T> {
    /// Adds an item at the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes the item at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the queue holds no items.
    fn dequeue(&mut self) -> Result<T, CollectionError>;

    /// Removes the item at the front of the queue, or `None` if empty.
    fn try_dequeue(&mut self) -> Option<T>;

    /// The item at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the queue holds no items.
    fn peek(&self) -> Result<&T, CollectionError>;

    /// The item at the front of the queue, or `None` if empty.
    fn try_peek(&self) -> Option<&T>;
}

/// Last-in-first-out view: items enter and leave at the top.
pub trait Stack<T> {
    /// Adds an item at the top of the stack.
    fn push(&mut self, item: T);

    /// Removes the item at the top of the stack.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the stack holds no items.
    fn pop(&mut self) -> Result<T, CollectionError>;

    /// Removes the item at the top of the stack, or `None` if empty.
    fn try_pop(&mut self) -> Option<T>;

    /// The item at the top of the stack.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] if the stack holds no items.
    fn peek(&self) -> Result<&T, CollectionError>;

    /// The item at the top of the stack, or `None` if empty.
    fn try_peek(&self) -> Option<&T>;
}

impl<T> Queue<T> for RingDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.pop_front()
    }

    fn try_dequeue(&mut self) -> Option<T> {
        self.try_pop_front()
    }

    fn peek(&self) -> Result<&T, CollectionError> {
        self.peek_front()
    }

    fn try_peek(&self) -> Option<&T> {
        self.try_peek_front()
    }
}

impl<T> Stack<T> for RingDeque<T> {
    fn push(&mut self, item: T) {
        self.push_front(item);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        self.pop_front()
    }

    fn try_pop(&mut self) -> Option<T> {
        self.try_pop_front()
    }

    fn peek(&self) -> Result<&T, CollectionError> {
        self.peek_front()
    }

    fn try_peek(&self) -> Option<&T> {
        self.try_peek_front()
    }
}

/// The priority queue as a plain queue: items enqueue with the default
/// priority, so among themselves they dequeue in arrival order.
impl<T, P: Default, C: Compare<P>> Queue<T> for PriorityQueue<T, P, C> {
    fn enqueue(&mut self, item: T) {
        self.enqueue(item, P::default());
    }

    fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.dequeue()
    }

    fn try_dequeue(&mut self) -> Option<T> {
        self.try_dequeue()
    }

    fn peek(&self) -> Result<&T, CollectionError> {
        self.peek()
    }

    fn try_peek(&self) -> Option<&T> {
        self.try_peek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deque_as_a_queue_is_fifo() {
        let mut deque = RingDeque::new();
        Queue::enqueue(&mut deque, 1);
        Queue::enqueue(&mut deque, 2);
        Queue::enqueue(&mut deque, 3);

        assert_eq!(Queue::peek(&deque), Ok(&1));
        assert_eq!(Queue::dequeue(&mut deque), Ok(1));
        assert_eq!(Queue::dequeue(&mut deque), Ok(2));
        assert_eq!(Queue::try_dequeue(&mut deque), Some(3));
        assert_eq!(Queue::try_dequeue(&mut deque), None);
        assert_eq!(Queue::dequeue(&mut deque), Err(CollectionError::Empty));
    }

    #[test]
    fn deque_as_a_stack_is_lifo() {
        let mut deque = RingDeque::new();
        Stack::push(&mut deque, 1);
        Stack::push(&mut deque, 2);
        Stack::push(&mut deque, 3);

        assert_eq!(Stack::peek(&deque), Ok(&3));
        assert_eq!(Stack::pop(&mut deque), Ok(3));
        assert_eq!(Stack::pop(&mut deque), Ok(2));
        assert_eq!(Stack::try_pop(&mut deque), Some(1));
        assert_eq!(Stack::try_pop(&mut deque), None);
        assert_eq!(Stack::pop(&mut deque), Err(CollectionError::Empty));
    }

    #[test]
    fn views_share_one_state() {
        let mut deque = RingDeque::new();
        Queue::enqueue(&mut deque, 'a'); // back
        Stack::push(&mut deque, 'b'); // front
        Queue::enqueue(&mut deque, 'c'); // back

        assert_eq!(deque.to_vec(), ['b', 'a', 'c']);
        // Queue and stack both operate on the front.
        assert_eq!(Queue::peek(&deque), Ok(&'b'));
        assert_eq!(Stack::peek(&deque), Ok(&'b'));
    }

    #[test]
    fn mutation_through_any_view_invalidates_cursors() {
        let mut deque = RingDeque::new();
        deque.push_back(1);

        let mut cursor = deque.cursor();
        Stack::push(&mut deque, 0);
        assert_eq!(cursor.next(&deque), Err(CollectionError::Modified));
    }

    #[test]
    fn priority_queue_as_a_plain_queue_is_fifo() {
        let mut queue = PriorityQueue::<&str, i32>::new();
        Queue::enqueue(&mut queue, "first");
        Queue::enqueue(&mut queue, "second");
        Queue::enqueue(&mut queue, "third");

        assert_eq!(Queue::peek(&queue), Ok(&"first"));
        assert_eq!(Queue::dequeue(&mut queue), Ok("first"));
        assert_eq!(Queue::dequeue(&mut queue), Ok("second"));
        assert_eq!(Queue::dequeue(&mut queue), Ok("third"));
    }
}

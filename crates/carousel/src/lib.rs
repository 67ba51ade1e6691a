//! Carousel - Array-Backed Sequential Containers
//!
//! Two resizable, mutation-tracked containers built on the same raw
//! material: a boxed slice of `Option` slots, an occupied-region count,
//! and a mutation version.
//!
//! - [`RingDeque`]: a circular, growable double-ended queue with random
//!   access, arbitrary insert/remove, and queue/stack capability views.
//! - [`PriorityQueue`]: a sorted-array queue that dequeues the item whose
//!   priority orders last under a configurable comparer, with FIFO ordering
//!   among equal priorities.
//!
//! Both grow by doubling (4 slots when empty) when full and never shrink
//! implicitly. Every structural mutation bumps a version counter; detached
//! cursors snapshot it and fail with [`CollectionError::Modified`] if the
//! container changes under them, instead of silently walking inconsistent
//! state.
//!
//! # Example
//!
//! ```
//! use carousel::{Descending, NaturalOrder, PriorityQueue, RingDeque};
//!
//! // Smallest priority first: wrap the order in `Descending`.
//! let mut queue = PriorityQueue::with_comparer(Descending::<NaturalOrder>::default());
//! queue.enqueue("a", 5);
//! queue.enqueue("b", 1);
//! queue.enqueue("c", 3);
//! assert_eq!(queue.dequeue(), Ok("b"));
//!
//! let mut deque = RingDeque::with_capacity(2);
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_back(3); // grows to 4 slots
//! assert_eq!(deque.try_pop_front(), Some(1));
//! assert_eq!(deque.to_vec(), [2, 3]);
//! ```

pub mod array;
mod compare;
mod error;
mod invariants;
mod priority_queue;
mod ring_deque;
mod version;
mod views;

pub use compare::{Compare, Descending, NaturalOrder};
pub use error::CollectionError;
pub use priority_queue::{Iter as PriorityIter, PriorityCursor, PriorityQueue};
pub use ring_deque::{Iter as RingIter, RingCursor, RingDeque};
pub use views::{Queue, Stack};

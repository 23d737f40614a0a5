//! # Queue Collections
//!
//! Three generic linear containers, each with a clearly defined iteration
//! contract: a double-ended queue, a FIFO queue, and a randomized queue.
//!
//! This crate provides `Deque`, `Queue`, and `RandomizedQueue`. All three are
//! single-threaded, unbounded containers that own their elements and hand them
//! back by value on removal.
//!
//! ## Key Features
//!
//! * **`Deque`:** Doubly-linked storage with O(1) insertion and removal at both
//!   ends and a forward, front-to-back iterator.
//! * **`Queue`:** Singly-linked FIFO storage with O(1) enqueue and dequeue.
//! * **`RandomizedQueue`:** Contiguous storage with O(1) amortized insertion,
//!   O(1) amortized *uniformly random* removal, O(1) random sampling, and
//!   iterators that yield a random permutation of the elements.
//! * **Injectable randomness:** `RandomizedQueue` is generic over any
//!   [`rand::Rng`], so tests can substitute a seeded or stubbed source.
//! * **Explicit capacity policy:** the randomized queue doubles its capacity
//!   when full and halves it at one-quarter occupancy (never below 1), so a
//!   drained queue releases its memory.
//!
//! ## Examples
//!
//! ### Deque
//!
//! ```rust
//! use queue_collections::Deque;
//!
//! let mut deque = Deque::new();
//! deque.push_front(2);
//! deque.push_front(1);
//! deque.push_back(3);
//!
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.pop_back(), Some(3));
//! ```
//!
//! ### Queue
//!
//! ```rust
//! use queue_collections::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.dequeue(), Some("b"));
//! assert_eq!(queue.dequeue(), None);
//! ```
//!
//! ### RandomizedQueue
//!
//! ```rust
//! use queue_collections::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::with_seed(7);
//! for i in 0..5 {
//!     queue.enqueue(i);
//! }
//!
//! // Removal order is random, but the multiset of elements is preserved.
//! let mut drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
//! drained.sort_unstable();
//! assert_eq!(drained, vec![0, 1, 2, 3, 4]);
//! assert_eq!(queue.capacity(), 1);
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod queue;
pub mod randomized;

// --- Re-exports ---

pub use deque::Deque;
pub use queue::{AnyQueue, Queue};
pub use randomized::RandomizedQueue;

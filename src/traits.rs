//! Common trait for priority queues
//!
//! [`PriorityQueue`] is the minimal surface shared by this crate's
//! [`BinaryHeap`](crate::BinaryHeap) and `std::collections::BinaryHeap`. Code
//! written against it works with either, which is how the test suite checks
//! this crate's heap against the standard library's.
//!
//! Which element counts as "first" is up to the implementation: this crate's heap
//! yields the least element under its comparator, while the standard heap yields
//! the greatest element under `Ord`.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::{BinaryHeap, PriorityQueue};
//!
//! fn drain_all<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
//!     let mut out = Vec::with_capacity(queue.len());
//!     while let Some(value) = queue.pop() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut ours = BinaryHeap::new();
//! let mut std_heap = std::collections::BinaryHeap::new();
//! for value in [3, 1, 2] {
//!     PriorityQueue::push(&mut ours, value);
//!     PriorityQueue::push(&mut std_heap, value);
//! }
//!
//! assert_eq!(drain_all(&mut ours), vec![1, 2, 3]);
//! assert_eq!(drain_all(&mut std_heap), vec![3, 2, 1]);
//! ```

use crate::binary_heap::BinaryHeap;

/// Base trait for priority queues
pub trait PriorityQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for binary heaps.
    fn push(&mut self, item: T);

    /// Returns the first element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the first element
    ///
    /// # Time Complexity
    /// O(log n) for binary heaps.
    fn pop(&mut self) -> Option<T>;

    /// Removes every element
    fn clear(&mut self);
}

impl<T> PriorityQueue<T> for BinaryHeap<T> {
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }
}

impl<T: Ord> PriorityQueue<T> for std::collections::BinaryHeap<T> {
    fn len(&self) -> usize {
        std::collections::BinaryHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        std::collections::BinaryHeap::is_empty(self)
    }

    fn push(&mut self, item: T) {
        std::collections::BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        std::collections::BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        std::collections::BinaryHeap::pop(self)
    }

    fn clear(&mut self) {
        std::collections::BinaryHeap::clear(self)
    }
}

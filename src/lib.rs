//! Binary Heap with a Pluggable Comparator
//!
//! This crate provides an array-backed binary heap whose ordering is a runtime
//! value rather than a trait bound on the element type. The same element type can
//! be kept in a min-heap, a max-heap, or a heap ordered by any caller-supplied
//! three-way comparison.
//!
//! # Features
//!
//! - **Natural order**: `BinaryHeap::new()` (min-heap) and `BinaryHeap::with_order(false)` (max-heap)
//! - **Custom order**: `BinaryHeap::from_fn` for three-way comparisons, `BinaryHeap::from_less` for strict-less predicates
//! - **Comparator-based membership**: `count_of` and `contains` match elements the comparator deems equal
//! - **Independent copies**: `Clone` gives the copy its own storage and the same comparator
//! - **std interop**: `FromIterator`, `Extend`, and conversion from `std::collections::BinaryHeap`
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.count_of(&3), 1);
//!
//! let mut copy = heap.clone();
//! copy.clear();
//! assert_eq!(heap.len(), 3);
//! ```
//!
//! # Concurrency
//!
//! The heap has no internal locking. A heap shared between threads must be
//! wrapped in a lock by the caller, for reads as well as writes.

pub mod binary_heap;
pub mod compare;
pub mod stdlib_compat;
pub mod traits;

pub use binary_heap::BinaryHeap;
pub use compare::Comparator;
pub use traits::PriorityQueue;

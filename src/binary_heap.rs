//! Array-backed binary heap ordered by a [`Comparator`]
//!
//! The heap stores its elements in a `Vec` interpreted as a complete binary tree:
//! the element at index `i` has its parent at `(i - 1) / 2` and its children at
//! `2i + 1` and `2i + 2`. The comparator is fixed at construction, and after every
//! mutating call no parent compares `Greater` than either of its children.
//!
//! The element that compares least under the comparator is always at the root, so
//! an ascending comparator gives a min-heap and a descending one a max-heap.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `peek`           | O(1)       |
//! | `len`            | O(1)       |
//! | `count_of`       | O(n)       |
//! | `contains`       | O(n)       |
//! | `clear`          | O(n)       |
//! | `from_vec`       | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! for value in [10, 2, 8, 5, 7] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&2));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.len(), 3);
//!
//! // Max-heap under the natural order
//! let mut max = BinaryHeap::with_order(false);
//! max.push(10);
//! max.push(1);
//! assert_eq!(max.pop(), Some(10));
//! ```
//!
//! Elements without a natural order take an explicit comparator:
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! struct Job {
//!     value: u32,
//! }
//!
//! let mut heap = BinaryHeap::from_less(|a: &Job, b: &Job| a.value < b.value);
//! heap.push(Job { value: 1 });
//! heap.push(Job { value: 10 });
//! heap.push(Job { value: 3 });
//! assert_eq!(heap.pop().map(|job| job.value), Some(1));
//! ```

use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::fmt;
use std::vec;

use log::trace;

use crate::compare::Comparator;

/// A binary heap with a runtime comparator
///
/// `pop` and `peek` yield the element that compares least under the heap's
/// comparator. No order is guaranteed among elements the comparator considers
/// equal.
pub struct BinaryHeap<T> {
    data: Vec<T>,
    comparator: Comparator<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty min-heap under the natural order of `T`
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates an empty heap under the natural order of `T`
    ///
    /// `ascending = true` gives a min-heap, `false` a max-heap.
    pub fn with_order(ascending: bool) -> Self {
        Self::with_comparator(Comparator::natural(ascending))
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Comparator::ascending())
    }
}

impl<T> BinaryHeap<T> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            data: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, comparator: Comparator<T>) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Creates an empty heap ordered by a three-way comparison function
    ///
    /// See [`Comparator::from_fn`] for the `'static` requirement on `compare`.
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_comparator(Comparator::from_fn(compare))
    }

    /// Creates an empty heap ordered by a strict-less predicate
    ///
    /// The element for which `less` holds against every other element is popped
    /// first.
    pub fn from_less<F>(less: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::with_comparator(Comparator::from_less(less))
    }

    /// Builds a heap from arbitrary contents in O(n)
    pub fn from_vec(data: Vec<T>, comparator: Comparator<T>) -> Self {
        let mut heap = Self { data, comparator };
        heap.rebuild();
        heap
    }

    /// The comparator this heap was built with
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// Returns the number of elements in the heap
    #[doc(alias = "count")]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the least element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the least element
    ///
    /// Returns `None` on an empty heap, leaving it unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Counts the elements the comparator considers equal to `value`
    ///
    /// Equivalence comes from the comparator, not from `PartialEq`: elements that
    /// compare `Equal` match even if they differ in fields the comparator ignores.
    /// Equal elements are not contiguous in the backing array, so this is a full
    /// scan.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn count_of(&self, value: &T) -> usize {
        self.data
            .iter()
            .filter(|item| self.comparator.equivalent(item, value))
            .count()
    }

    /// Returns true if some element compares equal to `value`
    ///
    /// # Time Complexity
    /// O(n)
    pub fn contains(&self, value: &T) -> bool {
        self.data
            .iter()
            .any(|item| self.comparator.equivalent(item, value))
    }

    /// Drops every element
    ///
    /// Capacity is kept, so refilling the heap does not reallocate.
    #[doc(alias = "remove_all")]
    pub fn clear(&mut self) {
        trace!("clearing binary heap of {} elements", self.data.len());
        self.data.clear();
    }

    /// Removes every element, yielding them in storage order
    ///
    /// The heap is empty once the iterator is dropped.
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        trace!("draining binary heap of {} elements", self.data.len());
        self.data.drain(..)
    }

    /// Iterates over the elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The backing storage, root first
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its storage in arbitrary order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in pop order
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap into an iterator that pops lazily
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { heap: self }
    }

    /// Number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Reserves room for `additional` more elements, reporting allocation failure
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Releases unused capacity
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns true if no parent compares greater than its children
    ///
    /// Always true unless the comparator breaks the total-preorder contract.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.comparator.compare(&self.data[parent], &self.data[i]) != Ordering::Greater
        })
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if self.less(child, index) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Restore the heap property over the whole storage, bottom-up
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copying a heap gives it its own backing storage; elements are cloned with
/// `T::clone`, so reference-counted elements stay shared with the source.
impl<T: Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comparator: self.comparator.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.comparator = source.comparator.clone();
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("comparator", &self.comparator)
            .finish()
    }
}

/// Owning iterator yielding elements in pop order
///
/// Created by [`BinaryHeap::into_iter_sorted`].
#[derive(Debug)]
pub struct IntoIterSorted<T> {
    heap: BinaryHeap<T>,
}

impl<T> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIterSorted<T> {}

impl<T> std::iter::FusedIterator for IntoIterSorted<T> {}

//! Standard library compatibility layer
//!
//! Conversion and iterator traits that let [`BinaryHeap`] stand in for
//! `std::collections::BinaryHeap`.
//!
//! # Differences from std's BinaryHeap
//!
//! - **Min-heap by default**: heaps collected from an iterator or built from an
//!   array use the ascending natural order, while `std`'s heap is a max-heap.
//! - **Conversion keeps pop order**: converting a `std` heap produces a heap with the
//!   descending natural order, so both pop the same sequence.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! let heap: BinaryHeap<i32> = vec![5, 3, 7].into_iter().collect();
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike std's max-heap
//!
//! let mut std_heap = std::collections::BinaryHeap::from([5, 3, 7]);
//! let mut converted = BinaryHeap::from(std_heap.clone());
//! assert_eq!(converted.pop(), std_heap.pop());
//! ```

use crate::binary_heap::BinaryHeap;
use crate::compare::Comparator;

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryHeap::from_vec(iter.into_iter().collect(), Comparator::ascending())
    }
}

impl<T> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for BinaryHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the heap in arbitrary order; see
    /// [`BinaryHeap::into_iter_sorted`] for pop order.
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinaryHeap<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> From<BinaryHeap<T>> for Vec<T> {
    fn from(heap: BinaryHeap<T>) -> Vec<T> {
        heap.into_vec()
    }
}

impl<T: Ord> From<std::collections::BinaryHeap<T>> for BinaryHeap<T> {
    /// Keeps std's max-first pop order by using the descending natural order
    fn from(heap: std::collections::BinaryHeap<T>) -> Self {
        BinaryHeap::from_vec(heap.into_vec(), Comparator::descending())
    }
}

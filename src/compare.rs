//! Three-way comparators for heap ordering
//!
//! A [`Comparator`] is a first-class ordering value that the heap stores next to
//! its backing array. It lets the same element type be ordered naturally (via
//! [`Ord`]) or by an arbitrary caller-supplied function, without the element type
//! having to implement any ordering trait itself.
//!
//! # Contract
//!
//! Every comparator is expected to be a total preorder: antisymmetric in the sense
//! that `compare(a, b)` is the inverse of `compare(b, a)`, and transitive. The heap
//! never checks this. A comparator that breaks the contract only affects the order
//! in which elements are popped, never the heap's bookkeeping.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::Comparator;
//! use std::cmp::Ordering;
//!
//! let asc = Comparator::<i32>::ascending();
//! assert_eq!(asc.compare(&1, &2), Ordering::Less);
//!
//! let desc = asc.reversed();
//! assert_eq!(desc.compare(&1, &2), Ordering::Greater);
//!
//! // Derived from a strict-less predicate
//! let by_len = Comparator::from_less(|a: &String, b: &String| a.len() < b.len());
//! assert!(by_len.equivalent(&"ab".to_string(), &"cd".to_string()));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

enum Strategy<T> {
    /// Natural order through a plain function pointer
    Natural(fn(&T, &T) -> Ordering),
    /// Caller-supplied ordering
    Custom(Arc<CompareFn<T>>),
}

/// A shareable three-way ordering over `T`
///
/// Cloning a comparator is O(1): custom functions are reference counted and
/// natural orders are plain function pointers.
pub struct Comparator<T> {
    strategy: Strategy<T>,
    reversed: bool,
}

impl<T: Ord> Comparator<T> {
    /// Natural order of `T`; `ascending = false` inverts it
    pub fn natural(ascending: bool) -> Self {
        Self {
            strategy: Strategy::Natural(<T as Ord>::cmp),
            reversed: !ascending,
        }
    }

    /// Natural ascending order (min-heap polarity)
    pub fn ascending() -> Self {
        Self::natural(true)
    }

    /// Natural descending order (max-heap polarity)
    pub fn descending() -> Self {
        Self::natural(false)
    }
}

impl<T> Comparator<T> {
    /// Wraps a three-way comparison function
    ///
    /// The function must be `'static`, so it cannot borrow local state. State it
    /// needs to read, such as a distance table, can be shared through an `Arc`
    /// (with a lock if the caller keeps mutating it). Natural orders have no such
    /// bound.
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            strategy: Strategy::Custom(Arc::new(compare)),
            reversed: false,
        }
    }

    /// Derives a three-way comparison from a strict-less predicate
    ///
    /// The predicate is called at most twice per comparison: `less(a, b)` gives
    /// `Less`, otherwise `less(b, a)` gives `Greater`, otherwise the elements are
    /// `Equal`. The same `'static` requirement as [`Comparator::from_fn`] applies.
    pub fn from_less<F>(less: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
    }

    /// Compares two elements
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let (a, b) = if self.reversed { (b, a) } else { (a, b) };
        match &self.strategy {
            Strategy::Natural(cmp) => cmp(a, b),
            Strategy::Custom(compare) => compare(a, b),
        }
    }

    /// Returns true if the comparator considers `a` and `b` equal
    ///
    /// This is the equivalence used by membership queries, which may be coarser
    /// than the element type's own `PartialEq`.
    #[inline]
    pub fn equivalent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns the inverse ordering, sharing the underlying function
    pub fn reversed(&self) -> Self {
        let mut flipped = self.clone();
        flipped.reversed = !self.reversed;
        flipped
    }

    /// Polarity of a natural comparator, `None` for custom ones
    pub fn is_ascending(&self) -> Option<bool> {
        match &self.strategy {
            Strategy::Natural(_) => Some(!self.reversed),
            Strategy::Custom(_) => None,
        }
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        let strategy = match &self.strategy {
            Strategy::Natural(cmp) => Strategy::Natural(*cmp),
            Strategy::Custom(compare) => Strategy::Custom(Arc::clone(compare)),
        };
        Self {
            strategy,
            reversed: self.reversed,
        }
    }
}

impl<T: Ord> Default for Comparator<T> {
    fn default() -> Self {
        Self::ascending()
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            Strategy::Natural(_) => f
                .debug_struct("Comparator::Natural")
                .field("ascending", &!self.reversed)
                .finish(),
            Strategy::Custom(_) => f
                .debug_struct("Comparator::Custom")
                .field("reversed", &self.reversed)
                .finish(),
        }
    }
}

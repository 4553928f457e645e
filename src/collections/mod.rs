//! # Container Primitives
//!
//! Ordered, insertion-order sequences and a FIFO queue. Everything above this
//! module (the network's vertex registry, path results, traversal frontiers)
//! is built from these types.
//!
//! ## Variants
//!
//! | Type | Storage | `add_to_rear` | `remove_last` |
//! |------|---------|---------------|---------------|
//! | `ArrayUnorderedList` | contiguous buffer | O(1) amortized | O(1) |
//! | `LinkedUnorderedList` | node arena + index links | O(1) (tail-tracked) | O(n) |
//! | `LinkedQueue` | `LinkedUnorderedList` | O(1) `enqueue` | n/a |
//!
//! Iteration borrows the container, so structural mutation while an
//! iterator is alive does not compile.

pub mod array_list;
pub mod linked_list;
pub mod queue;

pub use array_list::ArrayUnorderedList;
pub use linked_list::LinkedUnorderedList;
pub use queue::LinkedQueue;

use crate::Result;

// ============================================================================
// UnorderedList Trait
// ============================================================================

/// The shared contract of both list variants.
///
/// "Unordered" refers to the absence of a sort key: elements keep the order
/// they were inserted in, and callers choose the end they insert at.
pub trait UnorderedList<T> {
    /// Single-pass iterator over the list, front to rear.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Insert at the logical rear.
    fn add_to_rear(&mut self, value: T);

    /// Insert at the logical front.
    fn add_to_front(&mut self, value: T);

    /// Remove and return the first element equal to `value`.
    ///
    /// Fails with `Error::ElementNotFound` if no element matches.
    fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq;

    fn remove_first(&mut self) -> Result<T>;

    fn remove_last(&mut self) -> Result<T>;

    /// Front element, or `Error::EmptyCollection`.
    fn first(&self) -> Result<&T>;

    /// Rear element, or `Error::EmptyCollection`.
    fn last(&self) -> Result<&T>;

    fn len(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Zero-based position of the first element equal to `value`.
    fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }
}

// ============================================================================
// Tests
// ============================================================================

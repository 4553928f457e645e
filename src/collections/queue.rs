//! FIFO queue over the linked list.

use super::{LinkedUnorderedList, UnorderedList};
use super::linked_list::Iter;
use crate::{Error, Result};

const NAME: &str = "LinkedQueue";

/// First-in, first-out queue with O(1) `enqueue` and `dequeue`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedQueue<T> {
    list: LinkedUnorderedList<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self { list: LinkedUnorderedList::new() }
    }

    /// Append at the rear.
    pub fn enqueue(&mut self, value: T) {
        self.list.add_to_rear(value);
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.list.is_empty() {
            return Err(Error::EmptyCollection(NAME));
        }
        self.list.remove_first()
    }

    /// Peek at the front element without removing it.
    pub fn first(&self) -> Result<&T> {
        if self.list.is_empty() {
            return Err(Error::EmptyCollection(NAME));
        }
        self.list.first()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Front-to-rear view of the waiting elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { list: iter.into_iter().collect() }
    }
}

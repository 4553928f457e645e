//! Array-backed unordered list.

use serde::{Deserialize, Serialize};

use super::UnorderedList;
use crate::{Error, Result};

pub(crate) const NAME: &str = "ArrayUnorderedList";

/// An insertion-ordered list stored in one contiguous buffer.
///
/// Positional access (`get`) is O(1), which is what the network's vertex
/// registry relies on: a vertex's registry position is its matrix index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayUnorderedList<T> {
    items: Vec<T>,
}

impl<T> ArrayUnorderedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Element at `index`, front = 0.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Remove the element at `index`, shifting later elements down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(Error::ElementNotFound(NAME));
        }
        Ok(self.items.remove(index))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for ArrayUnorderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnorderedList<T> for ArrayUnorderedList<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    fn add_to_rear(&mut self, value: T) {
        self.items.push(value);
    }

    fn add_to_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let index = self.position(value).ok_or(Error::ElementNotFound(NAME))?;
        Ok(self.items.remove(index))
    }

    fn remove_first(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection(NAME));
        }
        Ok(self.items.remove(0))
    }

    fn remove_last(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyCollection(NAME))
    }

    fn first(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyCollection(NAME))
    }

    fn last(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyCollection(NAME))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayUnorderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for ArrayUnorderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for ArrayUnorderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for ArrayUnorderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// ============================================================================
// Tests
// ============================================================================

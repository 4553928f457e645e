//! Singly linked unordered list over an index arena.
//!
//! Nodes live in one `Vec` and link to each other by slot index instead of
//! by pointer. Freed slots are chained into a free list and reused by the
//! next insertion, so a long-lived queue does not grow its arena without
//! bound.

use super::UnorderedList;
use crate::{Error, Result};

pub(crate) const NAME: &str = "LinkedUnorderedList";

#[derive(Debug, Clone)]
struct Node<T> {
    /// `None` only while the slot sits on the free list.
    value: Option<T>,
    next: Option<usize>,
}

/// A tail-tracked singly linked list.
#[derive(Debug, Clone)]
pub struct LinkedUnorderedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> LinkedUnorderedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        match self.free {
            Some(slot) => {
                self.free = self.nodes[slot].next;
                self.nodes[slot] = Node { value: Some(value), next };
                slot
            }
            None => {
                self.nodes.push(Node { value: Some(value), next });
                self.nodes.len() - 1
            }
        }
    }

    /// Detach `slot` (whose predecessor is `prev`) and return its value.
    fn unlink(&mut self, prev: Option<usize>, slot: usize) -> T {
        let next = self.nodes[slot].next;
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        if self.tail == Some(slot) {
            self.tail = prev;
        }

        let value = self.nodes[slot]
            .value
            .take()
            .expect("linked slot always holds a value");
        self.nodes[slot].next = self.free;
        self.free = Some(slot);
        self.len -= 1;
        value
    }

    fn value_at(&self, slot: usize) -> &T {
        self.nodes[slot]
            .value
            .as_ref()
            .expect("linked slot always holds a value")
    }
}

impl<T> Default for LinkedUnorderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedUnorderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> UnorderedList<T> for LinkedUnorderedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn add_to_rear(&mut self, value: T) {
        let slot = self.alloc(value, None);
        match self.tail {
            Some(t) => self.nodes[t].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    fn add_to_front(&mut self, value: T) {
        let slot = self.alloc(value, self.head);
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
    }

    fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if self.value_at(slot) == value {
                return Ok(self.unlink(prev, slot));
            }
            prev = Some(slot);
            cursor = self.nodes[slot].next;
        }
        Err(Error::ElementNotFound(NAME))
    }

    fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyCollection(NAME))?;
        Ok(self.unlink(None, head))
    }

    /// O(n): a singly linked list has to walk to the tail's predecessor.
    fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyCollection(NAME))?;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if slot == tail {
                break;
            }
            prev = Some(slot);
            cursor = self.nodes[slot].next;
        }
        Ok(self.unlink(prev, tail))
    }

    fn first(&self) -> Result<&T> {
        self.head
            .map(|slot| self.value_at(slot))
            .ok_or(Error::EmptyCollection(NAME))
    }

    fn last(&self) -> Result<&T> {
        self.tail
            .map(|slot| self.value_at(slot))
            .ok_or(Error::EmptyCollection(NAME))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Borrowing front-to-rear iterator.
pub struct Iter<'a, T> {
    list: &'a LinkedUnorderedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.cursor?;
        let node = &self.list.nodes[slot];
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Consuming iterator; drains from the front.
pub struct IntoIter<T>(LinkedUnorderedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedUnorderedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedUnorderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedUnorderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.add_to_rear(value);
        }
        list
    }
}

// ============================================================================
// Tests
// ============================================================================

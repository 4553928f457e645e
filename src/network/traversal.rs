//! Breadth-first and depth-first vertex orders, plus connectivity.

use std::fmt;

use crate::collections::{ArrayUnorderedList, LinkedQueue, LinkedUnorderedList, UnorderedList};
use super::Network;

/// Vertices of a network in a precomputed visiting order.
pub struct Traversal<'a, V> {
    network: &'a Network<V>,
    order: std::vec::IntoIter<usize>,
}

impl<'a, V> Iterator for Traversal<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let index = self.order.next()?;
        self.network.vertices.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<V: PartialEq + fmt::Debug> Network<V> {
    /// Breadth-first order from `start`. Neighbours are discovered in
    /// registry order. Empty if `start` is unregistered.
    pub fn iter_bfs(&self, start: &V) -> Traversal<'_, V> {
        let order = match self.index_of(start) {
            Some(i) => self.bfs_order(i),
            None => ArrayUnorderedList::new(),
        };
        Traversal { network: self, order: order.into_iter() }
    }

    /// Depth-first preorder from `start`, always descending into the
    /// lowest-index unvisited neighbour. Empty if `start` is unregistered.
    pub fn iter_dfs(&self, start: &V) -> Traversal<'_, V> {
        let order = match self.index_of(start) {
            Some(i) => self.dfs_order(i),
            None => ArrayUnorderedList::new(),
        };
        Traversal { network: self, order: order.into_iter() }
    }

    /// Whether every vertex is reachable from every other. An empty
    /// network is not connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        self.bfs_order(0).len() == self.vertices.len()
    }

    fn bfs_order(&self, start: usize) -> ArrayUnorderedList<usize> {
        let n = self.vertices.len();
        let mut visited = vec![false; n];
        let mut order = ArrayUnorderedList::with_capacity(n);
        let mut queue = LinkedQueue::new();

        visited[start] = true;
        queue.enqueue(start);
        while let Ok(u) = queue.dequeue() {
            order.add_to_rear(u);
            for (v, _) in self.matrix.neighbors(u, n) {
                if !visited[v] {
                    visited[v] = true;
                    queue.enqueue(v);
                }
            }
        }
        order
    }

    fn dfs_order(&self, start: usize) -> ArrayUnorderedList<usize> {
        let n = self.vertices.len();
        let mut visited = vec![false; n];
        let mut order = ArrayUnorderedList::with_capacity(n);
        // Used as a stack: push and pop at the front.
        let mut stack = LinkedUnorderedList::new();

        visited[start] = true;
        order.add_to_rear(start);
        stack.add_to_front(start);
        while let Ok(&top) = stack.first() {
            let next = self
                .matrix
                .neighbors(top, n)
                .map(|(v, _)| v)
                .find(|&v| !visited[v]);
            match next {
                Some(v) => {
                    visited[v] = true;
                    order.add_to_rear(v);
                    stack.add_to_front(v);
                }
                None => {
                    if stack.remove_first().is_err() {
                        break;
                    }
                }
            }
        }
        order
    }
}

//! Dijkstra over the adjacency matrix.
//!
//! Frontier selection is a linear scan over unsettled vertices, so one run
//! costs O(V²). Among equal tentative distances the lowest registry index is
//! settled first, and a predecessor is replaced only on strict improvement,
//! so the reconstructed path is deterministic.

use std::fmt;

use tracing::trace;

use crate::collections::{ArrayUnorderedList, LinkedUnorderedList, UnorderedList};
use super::{Network, Path, UNREACHABLE};

/// Distances and predecessors from one source.
struct Dijkstra {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
}

impl<V: PartialEq + fmt::Debug> Network<V> {
    fn dijkstra(&self, source: usize) -> Dijkstra {
        let n = self.vertices.len();
        let mut dist = vec![UNREACHABLE; n];
        let mut prev = vec![None; n];
        let mut settled = vec![false; n];
        dist[source] = 0.0;

        loop {
            let mut current = None;
            let mut best = UNREACHABLE;
            for (i, &d) in dist.iter().enumerate() {
                if !settled[i] && d < best {
                    best = d;
                    current = Some(i);
                }
            }
            let Some(u) = current else { break };
            settled[u] = true;

            for (v, w) in self.matrix.neighbors(u, n) {
                if settled[v] {
                    continue;
                }
                let candidate = dist[u] + w;
                if candidate < dist[v] {
                    dist[v] = candidate;
                    prev[v] = Some(u);
                }
            }
        }

        trace!(
            source,
            reached = dist.iter().filter(|d| d.is_finite()).count(),
            "dijkstra complete"
        );
        Dijkstra { dist, prev }
    }

    /// Total weight of the cheapest route from `a` to `b`.
    ///
    /// `0.0` when `a == b`; `UNREACHABLE` when there is no route or either
    /// vertex is unregistered.
    pub fn shortest_path_weight(&self, a: &V, b: &V) -> f64 {
        let (Some(i), Some(j)) = (self.index_of(a), self.index_of(b)) else {
            return UNREACHABLE;
        };
        if i == j {
            return 0.0;
        }
        self.dijkstra(i).dist[j]
    }
}

impl<V: PartialEq + Clone + fmt::Debug> Network<V> {
    /// Cheapest route from `a` to `b`, both ends included.
    ///
    /// Empty exactly when `shortest_path_weight(a, b)` is `UNREACHABLE`.
    pub fn shortest_path(&self, a: &V, b: &V) -> Path<V> {
        let (Some(i), Some(j)) = (self.index_of(a), self.index_of(b)) else {
            return Path::unreachable();
        };
        if i == j {
            return Path::single(self.vertices.as_slice()[i].clone());
        }

        let Dijkstra { dist, prev } = self.dijkstra(i);
        if dist[j] == UNREACHABLE {
            return Path::unreachable();
        }

        // Walk predecessors back from the target, pushing to the front.
        let mut order = LinkedUnorderedList::new();
        let mut cursor = Some(j);
        while let Some(k) = cursor {
            order.add_to_front(k);
            cursor = prev[k];
        }

        let vertices: ArrayUnorderedList<V> = order
            .into_iter()
            .map(|k| self.vertices.as_slice()[k].clone())
            .collect();
        Path::from_parts(vertices, dist[j])
    }

    /// The vertices of `shortest_path(a, b)`, front to rear.
    pub fn iter_shortest_path(&self, a: &V, b: &V) -> std::vec::IntoIter<V> {
        self.shortest_path(a, b).into_iter()
    }
}

//! # Weighted Undirected Network
//!
//! A vertex registry (`ArrayUnorderedList`) paired with a symmetric
//! `AdjacencyMatrix`. A vertex's position in the registry is its row and
//! column in the matrix; the matrix doubles whenever the registry outgrows
//! it.
//!
//! ## Sentinels
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `NO_EDGE` | `+∞` | matrix cell with no edge |
//! | `UNREACHABLE` | `+∞` | `shortest_path_weight` when no path exists |
//! | `MAX_WEIGHT` | `1e12` | largest weight `add_edge` accepts |
//!
//! "No path" covers both a disconnected target and an unregistered
//! endpoint. In every such case `shortest_path_weight` returns
//! `UNREACHABLE` and `shortest_path` returns the empty `Path`. Neither is
//! an error.
//!
//! Edge weights are capped at `MAX_WEIGHT` so that no sum of weights along
//! a simple path can overflow to `+∞` and be mistaken for `UNREACHABLE`.
//!
//! ## Limitations
//!
//! - **Linear vertex lookup**: every operation locates its vertices by
//!   equality scan over the registry, O(V).
//! - **O(V²) Dijkstra**: the frontier is a linear scan for the minimum
//!   tentative distance, not a heap. Graphs here are tens of vertices.

pub mod matrix;
pub mod path;
mod shortest_path;
mod traversal;

pub use matrix::{AdjacencyMatrix, NO_EDGE};
pub use path::Path;
pub use traversal::Traversal;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collections::{ArrayUnorderedList, UnorderedList};
use crate::{Error, Result};

/// Weight reported for a pair of vertices with no path between them.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Largest edge weight `add_edge` accepts.
pub const MAX_WEIGHT: f64 = 1.0e12;

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Starting matrix dimension. Zero is treated as one.
    pub initial_capacity: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { initial_capacity: 10 }
    }
}

// ============================================================================
// Network
// ============================================================================

/// Undirected graph with non-negative edge weights.
#[derive(Debug, Clone)]
pub struct Network<V> {
    vertices: ArrayUnorderedList<V>,
    matrix: AdjacencyMatrix,
}

impl<V: PartialEq + fmt::Debug> Network<V> {
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        let capacity = config.initial_capacity.max(1);
        Self {
            vertices: ArrayUnorderedList::with_capacity(capacity),
            matrix: AdjacencyMatrix::new(capacity),
        }
    }

    // ========================================================================
    // Vertices
    // ========================================================================

    /// Register `vertex`. Returns `false` (and changes nothing) if an equal
    /// vertex is already registered.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        if self.vertices.len() == self.matrix.dimension() {
            self.matrix.grow();
        }
        trace!(index = self.vertices.len(), vertex = ?vertex, "registering vertex");
        self.vertices.add_to_rear(vertex);
        true
    }

    /// Unregister `vertex`, dropping all its edges. Later vertices shift
    /// down one registry slot, their mutual weights intact.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<V> {
        let index = self.require(vertex)?;
        let removed = self.matrix.remove_index(index, self.vertices.len());
        debug_assert!(removed, "registry index outside the matrix");
        debug!(index, vertex = ?vertex, "removing vertex");
        self.vertices.remove_at(index)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Registry position of `vertex`.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.position(vertex)
    }

    /// Vertex at registry position `index`.
    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Registered vertices in registration order.
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Current matrix dimension; always `>= vertex_count()`.
    pub fn capacity(&self) -> usize {
        self.matrix.dimension()
    }

    fn require(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex)
            .ok_or_else(|| Error::VertexNotFound(format!("{vertex:?}")))
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Set the weight between `a` and `b` in both directions.
    ///
    /// Calling again on the same pair overwrites the old weight. Weights
    /// outside `0.0..=MAX_WEIGHT` (NaN included) fail with
    /// `Error::InvalidWeight`.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: f64) -> Result<()> {
        if !(0.0..=MAX_WEIGHT).contains(&weight) {
            return Err(Error::InvalidWeight(weight));
        }
        let i = self.require(a)?;
        let j = self.require(b)?;

        if let Some(previous) = self.matrix.weight(i, j) {
            debug!(from = ?a, to = ?b, previous, weight, "overwriting edge weight");
        }
        self.matrix.set_symmetric(i, j, weight);
        Ok(())
    }

    /// Clear the edge between `a` and `b`. Returns whether one existed.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<bool> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        let existed = self.matrix.weight(i, j).is_some();
        self.matrix.set_symmetric(i, j, NO_EDGE);
        Ok(existed)
    }

    /// Direct edge weight from the matrix, ignoring any cheaper detour.
    pub fn edge_weight(&self, a: &V, b: &V) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.matrix.weight(i, j)
    }

    /// Number of undirected edges (a self-edge counts once).
    pub fn edge_count(&self) -> usize {
        let n = self.vertices.len();
        (0..n)
            .map(|i| self.matrix.neighbors(i, n).filter(|&(j, _)| j >= i).count())
            .sum()
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

impl<V: PartialEq + fmt::Debug> Default for Network<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

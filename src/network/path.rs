//! Path: an ordered vertex sequence with its total weight.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::{ArrayUnorderedList, UnorderedList};
use super::UNREACHABLE;

/// A shortest-path result: `start, …, end` inclusive.
///
/// Computed per query and owned by the caller. An unreachable query yields
/// the empty path, whose weight is `UNREACHABLE`.
///
/// In serialized form an unreachable weight is written as `null`, since
/// formats such as JSON have no infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<V> {
    vertices: ArrayUnorderedList<V>,
    #[serde(with = "weight_or_null")]
    weight: f64,
}

mod weight_or_null {
    use super::*;

    pub fn serialize<S: Serializer>(weight: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        weight.is_finite().then_some(*weight).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(UNREACHABLE))
    }
}

impl<V> Path<V> {
    pub fn unreachable() -> Self {
        Self { vertices: ArrayUnorderedList::new(), weight: UNREACHABLE }
    }

    pub fn single(vertex: V) -> Self {
        let mut vertices = ArrayUnorderedList::with_capacity(1);
        vertices.add_to_rear(vertex);
        Self { vertices, weight: 0.0 }
    }

    pub(crate) fn from_parts(vertices: ArrayUnorderedList<V>, weight: f64) -> Self {
        Self { vertices, weight }
    }

    /// Number of vertices, endpoints included.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn start(&self) -> Option<&V> {
        self.vertices.first().ok()
    }

    pub fn end(&self) -> Option<&V> {
        self.vertices.last().ok()
    }

    /// The vertex after `start`: where a walker should step next.
    pub fn next_hop(&self) -> Option<&V> {
        self.vertices.get(1)
    }

    pub fn vertices(&self) -> &ArrayUnorderedList<V> {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

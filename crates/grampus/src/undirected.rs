//! Undirected graph: a symmetric-edge wrapper around [`DirectedGraph`].

use crate::directed::DirectedGraph;
use crate::error::{Error, Result};
use crate::vertex::{Vertex, VertexId};
use grampus_adt::{Queue, Stack};
use std::hash::Hash;

/// An undirected graph.
///
/// Every logical edge is stored underneath as two directed edges, inserted
/// atomically: when the reverse direction cannot be added the forward
/// direction is rolled back, so the two stores never diverge and
/// [`UndirectedGraph::edge_count`] (half the directed count) stays exact.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L> {
    inner: DirectedGraph<L>,
}

impl<L> UndirectedGraph<L> {
    pub fn new() -> Self {
        Self {
            inner: DirectedGraph::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Number of logical (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Read-only access to a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.inner.vertex(id)
    }
}

impl<L> UndirectedGraph<L>
where
    L: Eq + Hash + Clone,
{
    pub fn add_vertex(&mut self, label: L) -> bool {
        self.inner.add_vertex(label)
    }

    pub fn vertex_id(&self, label: &L) -> Option<VertexId> {
        self.inner.vertex_id(label)
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.inner.contains_vertex(label)
    }

    /// Vertex labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.inner.labels()
    }

    pub fn remove_vertex(&mut self, label: &L) -> bool {
        self.inner.remove_vertex(label)
    }

    /// Adds an unweighted (weight 0) edge between `begin` and `end`.
    pub fn add_edge(&mut self, begin: &L, end: &L) -> bool {
        self.add_edge_with_weight(begin, end, 0.0)
    }

    /// Adds the edge in both directions, or not at all. Self-loops are
    /// rejected (the reverse insert would be a duplicate).
    pub fn add_edge_with_weight(&mut self, begin: &L, end: &L, weight: f64) -> bool {
        if !self.inner.add_edge_with_weight(begin, end, weight) {
            return false;
        }
        if !self.inner.add_edge_with_weight(end, begin, weight) {
            // Half-inserted symmetric edge: roll the forward direction back.
            self.inner.remove_edge(begin, end);
            return false;
        }
        true
    }

    /// Symmetric by construction: the direction of the arguments does not
    /// matter.
    pub fn has_edge(&self, a: &L, b: &L) -> bool {
        self.inner.has_edge(a, b)
    }

    pub fn breadth_first_traversal(&self, origin: &L) -> Queue<L> {
        self.inner.breadth_first_traversal(origin)
    }

    pub fn depth_first_traversal(&self, origin: &L) -> Queue<L> {
        self.inner.depth_first_traversal(origin)
    }

    pub fn shortest_path(&self, begin: &L, end: &L, path: &mut Stack<L>) -> Result<usize> {
        self.inner.shortest_path(begin, end, path)
    }

    pub fn cheapest_path(&self, begin: &L, end: &L, path: &mut Stack<L>) -> Result<f64> {
        self.inner.cheapest_path(begin, end, path)
    }

    /// Always fails: topological order is undefined for a cyclic/undirected
    /// structure.
    pub fn topological_order(&self) -> Result<Stack<L>> {
        Err(Error::TopologicalOrderUndefined)
    }
}

impl<L> Default for UndirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

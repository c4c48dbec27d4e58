//! Directed graph: label index, vertex arena, and structural mutation.

use crate::vertex::{Vertex, VertexArena, VertexId};
use grampus_adt::Dictionary;
use std::hash::Hash;
use tracing::trace;

/// A directed graph over caller-supplied vertex labels.
///
/// Labels identify vertices: no two vertices share an equal label. Structural
/// queries and mutations signal "not found" / "already present" with `false`
/// rather than an error, so callers are expected to check return values.
///
/// Invariants: the edge count equals the sum of all vertices' edge-list
/// lengths, and every edge target is a vertex currently present in the
/// graph.
#[derive(Debug, Clone)]
pub struct DirectedGraph<L> {
    labels: Dictionary<L, VertexId>,
    arena: VertexArena<L>,
    edge_count: usize,
}

impl<L> DirectedGraph<L> {
    pub fn new() -> Self {
        Self {
            labels: Dictionary::new(),
            arena: VertexArena::new(),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.arena.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.arena.clear();
        self.edge_count = 0;
    }

    /// Read-only access to a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.arena.get(id)
    }

    pub(crate) fn id_bound(&self) -> usize {
        self.arena.id_bound()
    }
}

impl<L> DirectedGraph<L>
where
    L: Eq + Hash + Clone,
{
    /// Inserts a new isolated vertex; `false` if the label is already taken.
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.labels.contains(&label) {
            return false;
        }
        let id = self.arena.insert(label.clone());
        self.labels.add(label, id);
        true
    }

    /// Resolves a label to its vertex handle.
    pub fn vertex_id(&self, label: &L) -> Option<VertexId> {
        self.labels.get(label).copied()
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.labels.contains(label)
    }

    /// Vertex labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.labels.keys()
    }

    /// Adds an unweighted (weight 0) edge `begin -> end`.
    pub fn add_edge(&mut self, begin: &L, end: &L) -> bool {
        self.add_edge_with_weight(begin, end, 0.0)
    }

    /// Adds `begin -> end` with the given weight. Fails silently (`false`)
    /// when either label is unknown or the edge already exists.
    pub fn add_edge_with_weight(&mut self, begin: &L, end: &L, weight: f64) -> bool {
        let (Some(begin_id), Some(end_id)) = (self.vertex_id(begin), self.vertex_id(end)) else {
            return false;
        };
        let Some(begin_vertex) = self.arena.get_mut(begin_id) else {
            return false;
        };
        let added = begin_vertex.connect(end_id, weight);
        if added {
            self.edge_count += 1;
        }
        added
    }

    pub fn has_edge(&self, begin: &L, end: &L) -> bool {
        match (self.vertex_id(begin), self.vertex_id(end)) {
            (Some(begin_id), Some(end_id)) => self
                .arena
                .get(begin_id)
                .is_some_and(|v| v.has_edge(end_id)),
            _ => false,
        }
    }

    /// Removes a vertex together with every edge into and out of it.
    /// Returns `false` when the label is absent.
    pub fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(id) = self.labels.remove(label) else {
            return false;
        };
        if let Some(removed) = self.arena.remove(id) {
            self.edge_count -= removed.neighbor_count();
        }
        // Purge incoming edges synchronously: every remaining edge target
        // must point at a vertex that is still present.
        for (_, vertex) in self.arena.iter_mut() {
            if vertex.disconnect(id) {
                self.edge_count -= 1;
            }
        }
        trace!(
            vertices = self.arena.len(),
            edges = self.edge_count,
            "removed vertex"
        );
        true
    }

    /// Removes the edge `begin -> end` if present. Used by the undirected
    /// wrapper to roll back a half-inserted symmetric edge.
    pub(crate) fn remove_edge(&mut self, begin: &L, end: &L) -> bool {
        let (Some(begin_id), Some(end_id)) = (self.vertex_id(begin), self.vertex_id(end)) else {
            return false;
        };
        let Some(begin_vertex) = self.arena.get_mut(begin_id) else {
            return false;
        };
        if begin_vertex.disconnect(end_id) {
            self.edge_count -= 1;
            return true;
        }
        false
    }
}

impl<L> Default for DirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

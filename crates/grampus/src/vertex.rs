//! Vertex/edge model and the arena that owns it.
//!
//! Edges store [`VertexId`] handles rather than references, so the structure
//! carries no ownership cycles. The graph keeps the invariant that every
//! edge target is a vertex currently present in the arena (incoming edges
//! are purged synchronously when a vertex is removed).

/// Stable handle to a vertex slot.
///
/// Slots are never reused while the graph lives, so a handle stays valid
/// across unrelated removals and is only invalidated by removing its own
/// vertex or clearing the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A weighted directed edge, owned by its source vertex. No identity beyond
/// its position in the source's edge list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    pub(crate) target: VertexId,
    pub(crate) weight: f64,
}

/// A labeled vertex and its outgoing edges, in insertion order.
///
/// The label is immutable for the life of the vertex; all structural
/// mutation goes through the owning graph so the edge counter stays in sync.
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    label: L,
    edges: Vec<Edge>,
}

impl<L> Vertex<L> {
    pub(crate) fn new(label: L) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Adds an edge to `target`. A duplicate target is rejected: the first
    /// write wins and the stored weight is not updated.
    pub(crate) fn connect(&mut self, target: VertexId, weight: f64) -> bool {
        if self.has_edge(target) {
            return false;
        }
        self.edges.push(Edge { target, weight });
        true
    }

    /// Removes the edge to `target`; reports whether one was removed.
    pub(crate) fn disconnect(&mut self, target: VertexId) -> bool {
        let Some(pos) = self.edges.iter().position(|e| e.target == target) else {
            return false;
        };
        self.edges.remove(pos);
        true
    }

    pub fn has_edge(&self, target: VertexId) -> bool {
        self.edges.iter().any(|e| e.target == target)
    }

    pub fn neighbor_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_neighbor(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Neighbor handles in edge-insertion order. Each call returns a fresh
    /// iterator over the current edge list, parallel to
    /// [`Vertex::edge_weights`].
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().map(|e| e.target)
    }

    /// Edge weights in edge-insertion order, parallel to
    /// [`Vertex::neighbors`].
    pub fn edge_weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(|e| e.weight)
    }
}

/// Slab of vertices addressed by [`VertexId`].
///
/// Removal vacates the slot instead of shifting later entries, which is what
/// keeps handles stable. Vacant slots are skipped during iteration and the
/// occupied count is tracked separately.
#[derive(Debug, Clone)]
pub(crate) struct VertexArena<L> {
    slots: Vec<Option<Vertex<L>>>,
    occupied: usize,
}

impl<L> VertexArena<L> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            occupied: 0,
        }
    }

    pub(crate) fn insert(&mut self, label: L) -> VertexId {
        let id = VertexId(self.slots.len());
        self.slots.push(Some(Vertex::new(label)));
        self.occupied += 1;
        id
    }

    pub(crate) fn remove(&mut self, id: VertexId) -> Option<Vertex<L>> {
        let vertex = self.slots.get_mut(id.index())?.take()?;
        self.occupied -= 1;
        Some(vertex)
    }

    pub(crate) fn get(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.slots.get(id.index())?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<L>> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Exclusive upper bound for `VertexId::index`, vacant slots included.
    /// Sizes the per-call traversal state tables.
    pub(crate) fn id_bound(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (VertexId, &mut Vertex<L>)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|v| (VertexId(i), v)))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.occupied = 0;
    }
}

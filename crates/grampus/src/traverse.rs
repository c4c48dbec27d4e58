//! Traversal and path-finding over a [`DirectedGraph`].
//!
//! Every query builds a fresh [`TraversalState`] table (visited flags,
//! accumulated costs, predecessor links) indexed by vertex handle. Nothing
//! transient is stored on the vertices themselves, so queries take `&self`
//! and interleaved queries on one graph cannot corrupt each other.

use crate::directed::DirectedGraph;
use crate::error::{Error, Result};
use crate::vertex::{Vertex, VertexId};
use grampus_adt::{PriorityQueue, Queue, Stack};
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::debug;

/// Per-call traversal bookkeeping, indexed by `VertexId`.
#[derive(Debug)]
pub(crate) struct TraversalState {
    visited: Vec<bool>,
    cost: Vec<f64>,
    predecessor: Vec<Option<VertexId>>,
}

impl TraversalState {
    fn new(id_bound: usize) -> Self {
        Self {
            visited: vec![false; id_bound],
            cost: vec![0.0; id_bound],
            predecessor: vec![None; id_bound],
        }
    }

    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        self.visited[id.index()]
    }

    fn visit(&mut self, id: VertexId) {
        self.visited[id.index()] = true;
    }

    fn cost(&self, id: VertexId) -> f64 {
        self.cost[id.index()]
    }

    fn set_cost(&mut self, id: VertexId, cost: f64) {
        self.cost[id.index()] = cost;
    }

    fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessor[id.index()]
    }

    fn set_predecessor(&mut self, id: VertexId, predecessor: VertexId) {
        self.predecessor[id.index()] = Some(predecessor);
    }
}

impl<L> Vertex<L> {
    /// First neighbor not yet visited in `state`, in edge-insertion order.
    pub(crate) fn first_unvisited_neighbor(&self, state: &TraversalState) -> Option<VertexId> {
        self.neighbors().find(|&n| !state.is_visited(n))
    }
}

/// Min-queue entry for the weighted search, ordered by accumulated cost.
///
/// Entries are never updated in place; a vertex may be queued several times
/// and stale entries are discarded on extraction once the vertex is
/// finalized ("lazy deletion" instead of decrease-key).
#[derive(Debug, Clone, Copy)]
struct PathEntry {
    vertex: VertexId,
    cost: f64,
    predecessor: Option<VertexId>,
}

impl PartialEq for PathEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl Eq for PathEntry {}

impl PartialOrd for PathEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

impl<L> DirectedGraph<L>
where
    L: Eq + Hash + Clone,
{
    /// Breadth-first traversal from `origin`: layer by layer, ties broken by
    /// edge-insertion order. Returns an empty queue when `origin` is absent.
    pub fn breadth_first_traversal(&self, origin: &L) -> Queue<L> {
        let mut order = Queue::new();
        let Some(origin_id) = self.vertex_id(origin) else {
            return order;
        };

        let mut state = TraversalState::new(self.id_bound());
        let mut frontier: Queue<VertexId> = Queue::new();

        state.visit(origin_id);
        order.enqueue(origin.clone());
        frontier.enqueue(origin_id);

        while let Some(front) = frontier.dequeue() {
            let Some(vertex) = self.vertex(front) else {
                continue;
            };
            for neighbor in vertex.neighbors() {
                if state.is_visited(neighbor) {
                    continue;
                }
                state.visit(neighbor);
                if let Some(v) = self.vertex(neighbor) {
                    order.enqueue(v.label().clone());
                }
                frontier.enqueue(neighbor);
            }
        }
        order
    }

    /// Depth-first traversal from `origin`, driven by the "first unvisited
    /// neighbor" rule: peek the stack top, visit and push its first
    /// unvisited neighbor (edge order), pop once none remains. Returns an
    /// empty queue when `origin` is absent.
    pub fn depth_first_traversal(&self, origin: &L) -> Queue<L> {
        let mut order = Queue::new();
        let Some(origin_id) = self.vertex_id(origin) else {
            return order;
        };

        let mut state = TraversalState::new(self.id_bound());
        let mut stack: Stack<VertexId> = Stack::new();

        state.visit(origin_id);
        order.enqueue(origin.clone());
        stack.push(origin_id);

        while let Ok(&top) = stack.peek() {
            let next = self
                .vertex(top)
                .and_then(|v| v.first_unvisited_neighbor(&state));
            match next {
                Some(neighbor) => {
                    state.visit(neighbor);
                    if let Some(v) = self.vertex(neighbor) {
                        order.enqueue(v.label().clone());
                    }
                    stack.push(neighbor);
                }
                None => {
                    let _ = stack.pop();
                }
            }
        }
        order
    }

    /// Unweighted shortest path (fewest edges) from `begin` to `end`.
    ///
    /// BFS recording predecessors, stopping as soon as `end` is first
    /// visited. On success the path's labels are pushed onto `path` so that
    /// popping yields them in begin→end order, and the number of edges on
    /// the path (vertices on the path minus one) is returned. `begin ==
    /// end` is a zero-length path. `path` is not touched on error.
    pub fn shortest_path(&self, begin: &L, end: &L, path: &mut Stack<L>) -> Result<usize> {
        let (Some(begin_id), Some(end_id)) = (self.vertex_id(begin), self.vertex_id(end)) else {
            return Err(Error::VertexNotFound);
        };
        debug!(vertices = self.vertex_count(), "shortest-path query");

        let mut state = TraversalState::new(self.id_bound());
        state.visit(begin_id);

        let mut done = begin_id == end_id;
        let mut frontier: Queue<VertexId> = Queue::new();
        frontier.enqueue(begin_id);

        while !done {
            let Some(front) = frontier.dequeue() else {
                break;
            };
            let Some(vertex) = self.vertex(front) else {
                continue;
            };
            for neighbor in vertex.neighbors() {
                if state.is_visited(neighbor) {
                    continue;
                }
                state.visit(neighbor);
                state.set_predecessor(neighbor, front);
                frontier.enqueue(neighbor);
                if neighbor == end_id {
                    done = true;
                    break;
                }
            }
        }

        if !done {
            return Err(Error::Unreachable);
        }
        Ok(self.push_predecessor_chain(end_id, &state, path))
    }

    /// Weighted cheapest path from `begin` to `end` (Dijkstra with a
    /// lazy-deletion min-queue).
    ///
    /// Edge weights must be non-negative; the result is unspecified
    /// otherwise. Same `path` and error contract as
    /// [`DirectedGraph::shortest_path`]; `begin == end` costs 0.
    pub fn cheapest_path(&self, begin: &L, end: &L, path: &mut Stack<L>) -> Result<f64> {
        let (Some(begin_id), Some(end_id)) = (self.vertex_id(begin), self.vertex_id(end)) else {
            return Err(Error::VertexNotFound);
        };
        debug!(vertices = self.vertex_count(), "cheapest-path query");

        let mut state = TraversalState::new(self.id_bound());
        let mut queue: PriorityQueue<PathEntry> = PriorityQueue::new();
        queue.add(PathEntry {
            vertex: begin_id,
            cost: 0.0,
            predecessor: None,
        });

        let mut done = false;
        while !done {
            let Some(entry) = queue.remove() else {
                break;
            };
            if state.is_visited(entry.vertex) {
                // Stale entry for an already-finalized vertex.
                continue;
            }
            state.visit(entry.vertex);
            state.set_cost(entry.vertex, entry.cost);
            if let Some(predecessor) = entry.predecessor {
                state.set_predecessor(entry.vertex, predecessor);
            }

            if entry.vertex == end_id {
                done = true;
            } else if let Some(vertex) = self.vertex(entry.vertex) {
                for (neighbor, weight) in vertex.neighbors().zip(vertex.edge_weights()) {
                    if !state.is_visited(neighbor) {
                        queue.add(PathEntry {
                            vertex: neighbor,
                            cost: entry.cost + weight,
                            predecessor: Some(entry.vertex),
                        });
                    }
                }
            }
        }

        if !done {
            return Err(Error::Unreachable);
        }
        let cost = state.cost(end_id);
        self.push_predecessor_chain(end_id, &state, path);
        Ok(cost)
    }

    /// Walks predecessors from `end` back to the query origin, pushing each
    /// label so that popping `path` yields origin→end order. Returns the
    /// number of edges on the chain.
    fn push_predecessor_chain(
        &self,
        end: VertexId,
        state: &TraversalState,
        path: &mut Stack<L>,
    ) -> usize {
        let mut length = 0;
        let mut current = Some(end);
        while let Some(id) = current {
            if let Some(vertex) = self.vertex(id) {
                path.push(vertex.label().clone());
            }
            current = state.predecessor(id);
            length += 1;
        }
        length - 1
    }
}

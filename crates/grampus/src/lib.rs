//! Labeled in-memory graph engine.
//!
//! Vertices carry caller-supplied labels (any `Eq + Hash + Clone` type) and
//! own an ordered list of weighted directed edges. [`DirectedGraph`] exposes
//! structure mutation plus breadth-first / depth-first traversal and
//! unweighted / weighted path queries; [`UndirectedGraph`] layers a
//! symmetric-edge invariant on top of it.
//!
//! Traversal results come back as [`adt::Queue`] values and path results are
//! pushed onto a caller-supplied [`adt::Stack`]; both are meant to be drained
//! to empty by the caller.
//!
//! Every traversal owns its transient bookkeeping (visited flags, costs,
//! predecessor links), so queries borrow the graph immutably and cannot
//! corrupt one another. The engine itself is single-threaded and provides no
//! locking; mutation requires exclusive access.

mod directed;
mod error;
mod traverse;
mod undirected;
mod vertex;

pub use directed::DirectedGraph;
pub use error::{Error, Result};
pub use undirected::UndirectedGraph;
pub use vertex::{Vertex, VertexId};

pub use grampus_adt as adt;

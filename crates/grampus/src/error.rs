pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A path query named a label with no vertex behind it.
    #[error("vertex is not in the graph")]
    VertexNotFound,

    /// Both endpoints exist but no path connects them.
    #[error("no path between the requested vertices")]
    Unreachable,

    /// Topological order is undefined when edges have no direction.
    #[error("Topological sort is not allowed in an undirected graph.")]
    TopologicalOrderUndefined,
}

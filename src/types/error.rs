//! Error types for the edgewise library.

use thiserror::Error;

/// All errors that can occur in the edgewise library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a vertex that is not in the graph.
    #[error("Vertex '{0}' not found")]
    VertexNotFound(String),

    /// A vertex with this id already exists.
    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// The ordered pair (u, v) already has an edge and overwrite was not requested.
    #[error("Edge {u} -> {v} already exists")]
    DuplicateEdge { u: String, v: String },

    /// There is no edge between the given pair.
    #[error("Edge {u} -> {v} not found")]
    EdgeNotFound { u: String, v: String },

    /// A weighted graph requires a weight for every edge.
    #[error("Edge {u} -> {v} needs a weight in a weighted graph")]
    MissingWeight { u: String, v: String },

    /// Kruskal only applies to undirected weighted graphs.
    #[error("Minimum spanning tree requires an undirected weighted graph")]
    MstRequiresUndirectedWeighted,

    /// Maximum flow only applies to directed graphs.
    #[error("Maximum flow requires a directed graph")]
    FlowRequiresDirected,

    /// The first line of a graph file did not declare valid direction/weight flags.
    #[error("Invalid header line: '{0}'")]
    InvalidHeader(String),

    /// A body line of a graph file had the wrong shape.
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for edgewise operations.
pub type GraphResult<T> = Result<T, GraphError>;

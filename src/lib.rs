//! edgewise — an in-memory graph engine with classic graph algorithms.
//!
//! Supports directed/undirected and weighted/unweighted graphs over string
//! vertex ids, with traversal and connectivity queries, Kruskal minimum
//! spanning trees, Dijkstra/Floyd-Warshall/Bellman-Ford shortest paths
//! (including all tied shortest paths and negative-cycle extraction), and
//! Edmonds-Karp maximum flow. Graphs round-trip through a plain text
//! edge-list format.

pub mod algo;
pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used items at the crate root
pub use algo::{
    all_shortest_paths, bellman_ford, dijkstra, floyd_warshall, kruskal, max_flow, n_periphery,
    DisjointSet, MinimumSpanningTree, ShortestPathTree, ShortestPaths,
};
pub use format::{GraphReader, GraphWriter};
pub use graph::{
    all_paths, connected_components, eccentricity, graph_center,
    main_component_and_boundary_edges, ComponentReport, Eccentricity, Graph, GraphBuilder,
    GraphCenter,
};
pub use types::{Edge, GraphError, GraphResult, UNREACHABLE};

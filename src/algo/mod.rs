//! Graph algorithms operating on the core data structure.

pub mod bellman_ford;
pub mod dijkstra;
pub mod disjoint_set;
pub mod floyd_warshall;
pub mod max_flow;
pub mod mst;

pub use bellman_ford::bellman_ford;
pub use dijkstra::{all_shortest_paths, dijkstra, ShortestPathTree, ShortestPaths};
pub use disjoint_set::DisjointSet;
pub use floyd_warshall::{floyd_warshall, n_periphery};
pub use max_flow::max_flow;
pub use mst::{kruskal, MinimumSpanningTree};

//! In-memory graph operations — the core data structure.

pub mod builder;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use graph::Graph;
pub use traversal::{
    all_paths, connected_components, eccentricity, graph_center,
    main_component_and_boundary_edges, ComponentReport, Eccentricity, GraphCenter,
};

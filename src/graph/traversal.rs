//! Traversal and connectivity queries: path enumeration, eccentricity,
//! graph center, connected components.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::types::{Edge, GraphError, GraphResult};

use super::Graph;

/// Eccentricity of a single vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eccentricity {
    /// Maximum hop-distance over all reachable vertices.
    pub max_hops: u32,
    /// Vertices that could not be reached from the start vertex. Non-empty
    /// means the graph is disconnected from this vertex's point of view.
    pub unreachable: Vec<String>,
}

/// Radius and center of the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphCenter {
    /// Minimum eccentricity over all vertices.
    pub radius: u32,
    /// All vertices attaining the radius.
    pub center: Vec<String>,
}

/// The largest connected component and the edges falling outside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentReport {
    /// Vertices of the largest component.
    pub main_component: Vec<String>,
    /// Edges with at least one endpoint outside the main component.
    pub boundary_edges: Vec<Edge>,
}

/// Enumerate every simple path (no repeated vertex) from `u` to `v`.
///
/// Depth-first exploration; exponential in the worst case, intended for
/// small graphs.
pub fn all_paths(graph: &Graph, u: &str, v: &str) -> GraphResult<Vec<Vec<String>>> {
    if !graph.contains_vertex(u) {
        return Err(GraphError::VertexNotFound(u.to_string()));
    }
    if !graph.contains_vertex(v) {
        return Err(GraphError::VertexNotFound(v.to_string()));
    }

    let mut paths = Vec::new();
    let mut path = Vec::new();
    collect_paths(graph, u, v, &mut path, &mut paths);
    log::debug!("all_paths {} -> {}: {} path(s)", u, v, paths.len());
    Ok(paths)
}

fn collect_paths(
    graph: &Graph,
    current: &str,
    target: &str,
    path: &mut Vec<String>,
    paths: &mut Vec<Vec<String>>,
) {
    path.push(current.to_string());

    if current == target {
        paths.push(path.clone());
    } else if let Ok(neighbors) = graph.neighbors(current) {
        for (neighbor, _) in neighbors {
            if !path.iter().any(|p| p == neighbor) {
                collect_paths(graph, neighbor, target, path, paths);
            }
        }
    }

    path.pop();
}

/// BFS hop-distances from `start`, ignoring weights.
fn bfs_hops(graph: &Graph, start: &str) -> IndexMap<String, u32> {
    let mut distances: IndexMap<String, u32> = IndexMap::new();
    let mut queue = VecDeque::new();

    distances.insert(start.to_string(), 0);
    queue.push_back(start.to_string());

    while let Some(vertex) = queue.pop_front() {
        let current = distances[&vertex];
        if let Ok(neighbors) = graph.neighbors(&vertex) {
            for (neighbor, _) in neighbors {
                if !distances.contains_key(neighbor) {
                    distances.insert(neighbor.clone(), current + 1);
                    queue.push_back(neighbor.clone());
                }
            }
        }
    }

    distances
}

/// Eccentricity of `start`: the maximum hop-distance over reachable
/// vertices, with unreachable vertices reported separately.
pub fn eccentricity(graph: &Graph, start: &str) -> GraphResult<Eccentricity> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start.to_string()));
    }

    let distances = bfs_hops(graph, start);
    let max_hops = distances.values().copied().max().unwrap_or(0);
    let unreachable = graph
        .vertices()
        .filter(|v| !distances.contains_key(*v))
        .map(str::to_string)
        .collect();

    Ok(Eccentricity {
        max_hops,
        unreachable,
    })
}

/// Radius and center: eccentricity of every vertex, minimum value, and all
/// vertices attaining it. Unreachable vertices are excluded from each
/// vertex's maximum, so disconnected graphs still get a finite center.
pub fn graph_center(graph: &Graph) -> GraphResult<GraphCenter> {
    let mut eccentricities: IndexMap<String, u32> = IndexMap::new();
    for vertex in graph.vertices() {
        let ecc = eccentricity(graph, vertex)?;
        eccentricities.insert(vertex.to_string(), ecc.max_hops);
    }

    let radius = eccentricities.values().copied().min().unwrap_or(0);
    let center = eccentricities
        .into_iter()
        .filter(|(_, e)| *e == radius)
        .map(|(v, _)| v)
        .collect();

    Ok(GraphCenter { radius, center })
}

/// Partition vertices into maximal reachable sets by BFS over the adjacency
/// exactly as stored (mirrored lists for undirected graphs, out-neighbors
/// for directed ones).
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let mut visited: IndexSet<String> = IndexSet::new();
    let mut components = Vec::new();

    for start in graph.vertices() {
        if visited.contains(start) {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        visited.insert(start.to_string());
        queue.push_back(start.to_string());

        while let Some(vertex) = queue.pop_front() {
            component.push(vertex.clone());
            if let Ok(neighbors) = graph.neighbors(&vertex) {
                for (neighbor, _) in neighbors {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }

        components.push(component);
    }

    components
}

/// The largest component by vertex count, plus every edge with an endpoint
/// outside it.
pub fn main_component_and_boundary_edges(graph: &Graph) -> ComponentReport {
    let components = connected_components(graph);
    let main_component = components
        .into_iter()
        .max_by_key(Vec::len)
        .unwrap_or_default();

    let member: IndexSet<&str> = main_component.iter().map(String::as_str).collect();
    let boundary_edges = graph
        .edges()
        .filter(|e| !member.contains(e.u.as_str()) || !member.contains(e.v.as_str()))
        .collect();

    ComponentReport {
        main_component,
        boundary_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn diamond() -> Graph {
        // A - B - D and A - C - D
        GraphBuilder::new()
            .edge("A", "B")
            .edge("A", "C")
            .edge("B", "D")
            .edge("C", "D")
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_paths_diamond() {
        let g = diamond();
        let mut paths = all_paths(&g, "A", "D").unwrap();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                vec!["A".to_string(), "B".to_string(), "D".to_string()],
                vec!["A".to_string(), "C".to_string(), "D".to_string()],
            ]
        );
    }

    #[test]
    fn test_all_paths_no_route() {
        let g = GraphBuilder::new()
            .directed(true)
            .edge("A", "B")
            .vertex("C")
            .build()
            .unwrap();
        assert!(all_paths(&g, "B", "C").unwrap().is_empty());
    }

    #[test]
    fn test_all_paths_unknown_vertex() {
        let g = diamond();
        assert!(matches!(
            all_paths(&g, "A", "Z"),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_eccentricity_path_graph() {
        // A - B - C: ecc(A) = 2, ecc(B) = 1
        let g = GraphBuilder::new().edge("A", "B").edge("B", "C").build().unwrap();
        assert_eq!(eccentricity(&g, "A").unwrap().max_hops, 2);
        assert_eq!(eccentricity(&g, "B").unwrap().max_hops, 1);
    }

    #[test]
    fn test_eccentricity_reports_unreachable() {
        let g = GraphBuilder::new().edge("A", "B").vertex("C").build().unwrap();
        let ecc = eccentricity(&g, "A").unwrap();
        assert_eq!(ecc.max_hops, 1);
        assert_eq!(ecc.unreachable, vec!["C".to_string()]);
    }

    #[test]
    fn test_graph_center_path() {
        let g = GraphBuilder::new().edge("A", "B").edge("B", "C").build().unwrap();
        let center = graph_center(&g).unwrap();
        assert_eq!(center.radius, 1);
        assert_eq!(center.center, vec!["B".to_string()]);
    }

    #[test]
    fn test_connected_components() {
        let g = GraphBuilder::new()
            .edge("A", "B")
            .edge("C", "D")
            .vertex("E")
            .build()
            .unwrap();
        let components = connected_components(&g);
        assert_eq!(components.len(), 3);
        assert_eq!(components[0], vec!["A".to_string(), "B".to_string()]);
        assert_eq!(components[2], vec!["E".to_string()]);
    }

    #[test]
    fn test_main_component_boundary_edges() {
        let g = GraphBuilder::new()
            .weighted(true)
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("B", "C", 1.0)
            .weighted_edge("X", "Y", 5.0)
            .build()
            .unwrap();
        let report = main_component_and_boundary_edges(&g);
        assert_eq!(
            report.main_component,
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert_eq!(report.boundary_edges.len(), 1);
        assert_eq!(report.boundary_edges[0].u, "X");
    }
}

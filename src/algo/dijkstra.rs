//! Single-source shortest paths with tie-aware predecessor tracking.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, UNREACHABLE};

/// Shortest-path tree from one source.
///
/// `predecessors` maps each vertex to *every* predecessor achieving its best
/// distance, forming a multi-parent DAG that encodes all tied shortest
/// paths. Unreachable vertices keep distance [`UNREACHABLE`] and an empty
/// predecessor set.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathTree {
    /// Best known distance per vertex.
    pub distances: HashMap<String, f64>,
    /// Predecessor set per vertex on some shortest path.
    pub predecessors: HashMap<String, Vec<String>>,
}

/// The minimum distance between two vertices and every path achieving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    /// Length of the shortest path, [`UNREACHABLE`] when none exists.
    pub distance: f64,
    /// All minimal paths, each ordered source -> target. Empty when the
    /// target is unreachable.
    pub paths: Vec<Vec<String>>,
}

/// Min-heap entry ordered by tentative distance.
#[derive(Debug, Clone, PartialEq)]
struct QueueEntry {
    distance: f64,
    vertex: String,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for BinaryHeap's max-heap semantics; vertex id breaks
        // distance ties so ordering is total.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm from `source`.
///
/// Precondition: edge weights must be non-negative; the result is undefined
/// otherwise (use [`bellman_ford`](super::bellman_ford) for graphs that may
/// carry negative weights). Unweighted graphs are traversed with unit edge
/// cost.
///
/// Relaxation keeps the full predecessor set: a strictly shorter distance
/// resets the set to the current vertex, an equal distance appends it.
pub fn dijkstra(graph: &Graph, source: &str) -> GraphResult<ShortestPathTree> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::VertexNotFound(source.to_string()));
    }

    let mut distances: HashMap<String, f64> = graph
        .vertices()
        .map(|v| (v.to_string(), UNREACHABLE))
        .collect();
    let mut predecessors: HashMap<String, Vec<String>> = graph
        .vertices()
        .map(|v| (v.to_string(), Vec::new()))
        .collect();
    let mut heap = BinaryHeap::new();

    distances.insert(source.to_string(), 0.0);
    heap.push(QueueEntry {
        distance: 0.0,
        vertex: source.to_string(),
    });

    while let Some(QueueEntry { distance, vertex }) = heap.pop() {
        // Stale heap entry for an already-settled vertex.
        if distance > distances[&vertex] {
            continue;
        }

        if let Ok(neighbors) = graph.neighbors(&vertex) {
            for (neighbor, weight) in neighbors {
                let candidate = distance + weight.unwrap_or(1.0);
                let best = distances[neighbor];

                if candidate < best {
                    distances.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), vec![vertex.clone()]);
                    heap.push(QueueEntry {
                        distance: candidate,
                        vertex: neighbor.clone(),
                    });
                } else if candidate == best && candidate != UNREACHABLE {
                    if let Some(set) = predecessors.get_mut(neighbor) {
                        set.push(vertex.clone());
                    }
                }
            }
        }
    }

    Ok(ShortestPathTree {
        distances,
        predecessors,
    })
}

/// Every shortest path from `source` to `target`, reconstructed by
/// unwinding the predecessor sets of [`dijkstra`].
///
/// An unreachable target yields an empty path set and distance
/// [`UNREACHABLE`]; that is a normal outcome, not an error.
pub fn all_shortest_paths(graph: &Graph, source: &str, target: &str) -> GraphResult<ShortestPaths> {
    if !graph.contains_vertex(target) {
        return Err(GraphError::VertexNotFound(target.to_string()));
    }

    let tree = dijkstra(graph, source)?;
    let distance = tree.distances[target];
    if distance == UNREACHABLE {
        return Ok(ShortestPaths {
            distance,
            paths: Vec::new(),
        });
    }

    let mut paths = Vec::new();
    let mut suffix = Vec::new();
    expand_paths(&tree, source, target, &mut suffix, &mut paths);
    log::debug!(
        "all_shortest_paths {} -> {}: distance {}, {} path(s)",
        source,
        target,
        distance,
        paths.len()
    );
    Ok(ShortestPaths { distance, paths })
}

/// Walk the predecessor DAG from `current` back to `source`, emitting each
/// completed path in forward order. The DAG is acyclic because distances
/// strictly order vertex visitation, which bounds the recursion.
fn expand_paths(
    tree: &ShortestPathTree,
    source: &str,
    current: &str,
    suffix: &mut Vec<String>,
    paths: &mut Vec<Vec<String>>,
) {
    suffix.push(current.to_string());

    if current == source {
        let mut path = suffix.clone();
        path.reverse();
        paths.push(path);
    } else if let Some(predecessors) = tree.predecessors.get(current) {
        for predecessor in predecessors {
            expand_paths(tree, source, predecessor, suffix, paths);
        }
    }

    suffix.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn weighted_square() -> Graph {
        // Two equal-cost routes A -> D: via B and via C, both length 3.
        GraphBuilder::new()
            .directed(true)
            .weighted(true)
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("A", "C", 2.0)
            .weighted_edge("B", "D", 2.0)
            .weighted_edge("C", "D", 1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_dijkstra_distances() {
        let g = weighted_square();
        let tree = dijkstra(&g, "A").unwrap();
        assert_eq!(tree.distances["A"], 0.0);
        assert_eq!(tree.distances["B"], 1.0);
        assert_eq!(tree.distances["C"], 2.0);
        assert_eq!(tree.distances["D"], 3.0);
    }

    #[test]
    fn test_dijkstra_tied_predecessors() {
        let g = weighted_square();
        let tree = dijkstra(&g, "A").unwrap();
        let mut preds = tree.predecessors["D"].clone();
        preds.sort();
        assert_eq!(preds, vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_all_shortest_paths_ties() {
        let g = weighted_square();
        let result = all_shortest_paths(&g, "A", "D").unwrap();
        assert_eq!(result.distance, 3.0);

        let mut paths = result.paths;
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
    fn test_path_weights_match_distance() {
        let g = weighted_square();
        let result = all_shortest_paths(&g, "A", "D").unwrap();
        for path in &result.paths {
            let mut total = 0.0;
            for pair in path.windows(2) {
                total += g.edge_weight(&pair[0], &pair[1]).unwrap().unwrap();
            }
            assert_eq!(total, result.distance);
        }
    }

    #[test]
    fn test_unreachable_target() {
        let g = GraphBuilder::new()
            .directed(true)
            .weighted(true)
            .weighted_edge("A", "B", 1.0)
            .vertex("Z")
            .build()
            .unwrap();
        let result = all_shortest_paths(&g, "A", "Z").unwrap();
        assert_eq!(result.distance, UNREACHABLE);
        assert!(result.paths.is_empty());
    }

    #[test]
    fn test_source_to_itself() {
        let g = weighted_square();
        let result = all_shortest_paths(&g, "A", "A").unwrap();
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.paths, vec![vec!["A".to_string()]]);
    }

    #[test]
    fn test_unweighted_hop_costs() {
        let g = GraphBuilder::new()
            .edge("A", "B")
            .edge("B", "C")
            .build()
            .unwrap();
        let tree = dijkstra(&g, "A").unwrap();
        assert_eq!(tree.distances["C"], 2.0);
    }

    #[test]
    fn test_unknown_source() {
        let g = weighted_square();
        assert!(matches!(
            dijkstra(&g, "Z"),
            Err(GraphError::VertexNotFound(_))
        ));
    }
}

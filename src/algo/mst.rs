//! Minimum spanning tree via Kruskal's algorithm.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult};

use super::DisjointSet;

/// Result of a Kruskal run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimumSpanningTree {
    /// Selected edges, in the order Kruskal accepted them.
    pub edges: Vec<Edge>,
    /// Sum of the selected edge weights.
    pub total_weight: f64,
}

/// Kruskal's algorithm: sort the deduplicated edge list ascending by weight
/// and greedily accept edges joining distinct union-find classes.
///
/// Equal-weight edges keep the order of the edge list (stable sort), so the
/// result is deterministic for a fixed input. Requires an undirected
/// weighted graph.
pub fn kruskal(graph: &Graph) -> GraphResult<MinimumSpanningTree> {
    if graph.directed() || !graph.weighted() {
        return Err(GraphError::MstRequiresUndirectedWeighted);
    }

    let mut edges: Vec<Edge> = graph.edges().collect();
    edges.sort_by(|a, b| a.weight_or(0.0).total_cmp(&b.weight_or(0.0)));

    let mut classes = DisjointSet::new(graph.vertices());
    let mut selected = Vec::new();
    let mut total_weight = 0.0;

    for edge in edges {
        if !classes.same_set(&edge.u, &edge.v) {
            classes.union(&edge.u, &edge.v);
            total_weight += edge.weight_or(0.0);
            selected.push(edge);
        }
    }

    log::debug!(
        "kruskal: {} edge(s), total weight {}",
        selected.len(),
        total_weight
    );
    Ok(MinimumSpanningTree {
        edges: selected,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_kruskal_triangle() {
        // A-B (1), B-C (1), A-C (5): the MST is A-B + B-C, weight 2.
        let g = GraphBuilder::new()
            .weighted(true)
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("B", "C", 1.0)
            .weighted_edge("A", "C", 5.0)
            .build()
            .unwrap();

        let mst = kruskal(&g).unwrap();
        assert_eq!(mst.edges.len(), 2);
        assert_eq!(mst.total_weight, 2.0);
        assert!(mst.edges.iter().all(|e| e.weight_or(0.0) == 1.0));
    }

    #[test]
    fn test_kruskal_spanning_size_and_acyclic() {
        let g = GraphBuilder::new()
            .weighted(true)
            .weighted_edge("A", "B", 4.0)
            .weighted_edge("A", "C", 1.0)
            .weighted_edge("B", "C", 2.0)
            .weighted_edge("B", "D", 5.0)
            .weighted_edge("C", "D", 8.0)
            .build()
            .unwrap();

        let mst = kruskal(&g).unwrap();
        assert_eq!(mst.edges.len(), g.vertex_count() - 1);

        // Re-running union-find over the output must never see two
        // endpoints already in the same class (acyclicity).
        let mut check = DisjointSet::new(g.vertices());
        for edge in &mst.edges {
            assert!(!check.same_set(&edge.u, &edge.v));
            check.union(&edge.u, &edge.v);
        }
    }

    #[test]
    fn test_kruskal_disconnected_forest() {
        let g = GraphBuilder::new()
            .weighted(true)
            .weighted_edge("A", "B", 1.0)
            .weighted_edge("C", "D", 2.0)
            .build()
            .unwrap();
        let mst = kruskal(&g).unwrap();
        // One tree per component.
        assert_eq!(mst.edges.len(), 2);
    }

    #[test]
    fn test_kruskal_preconditions() {
        let directed = GraphBuilder::new()
            .directed(true)
            .weighted(true)
            .weighted_edge("A", "B", 1.0)
            .build()
            .unwrap();
        assert!(matches!(
            kruskal(&directed),
            Err(GraphError::MstRequiresUndirectedWeighted)
        ));

        let unweighted = GraphBuilder::new().edge("A", "B").build().unwrap();
        assert!(matches!(
            kruskal(&unweighted),
            Err(GraphError::MstRequiresUndirectedWeighted)
        ));
    }
}

//! All-pairs shortest distances and the N-periphery query.

use indexmap::IndexMap;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, UNREACHABLE};

/// Floyd-Warshall triple relaxation over the vertex set.
///
/// Returns the full distance table keyed source -> target, with
/// [`UNREACHABLE`] for disconnected pairs. Unweighted graphs relax with unit
/// edge cost. Assumes no negative cycles; run
/// [`bellman_ford`](super::bellman_ford) first when that is not known.
pub fn floyd_warshall(graph: &Graph) -> IndexMap<String, IndexMap<String, f64>> {
    let vertices: Vec<&str> = graph.vertices().collect();
    let n = vertices.len();

    // Dense matrix keyed by vertex position; converted to maps at the end.
    let mut dist = vec![vec![UNREACHABLE; n]; n];
    let index: IndexMap<&str, usize> = vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();

    for (i, vertex) in vertices.iter().enumerate() {
        dist[i][i] = 0.0;
        if let Ok(neighbors) = graph.neighbors(vertex) {
            for (neighbor, weight) in neighbors {
                if let Some(&j) = index.get(neighbor.as_str()) {
                    dist[i][j] = weight.unwrap_or(1.0);
                }
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == UNREACHABLE {
                continue;
            }
            for j in 0..n {
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }

    vertices
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let row = vertices
                .iter()
                .enumerate()
                .map(|(j, v)| (v.to_string(), dist[i][j]))
                .collect();
            (u.to_string(), row)
        })
        .collect()
}

/// Vertices whose shortest distance from `source` strictly exceeds `n`.
/// Unreachable vertices always qualify.
pub fn n_periphery(graph: &Graph, source: &str, n: f64) -> GraphResult<Vec<String>> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::VertexNotFound(source.to_string()));
    }

    let distances = floyd_warshall(graph);
    let row = &distances[source];
    Ok(row
        .iter()
        .filter(|(_, d)| **d > n)
        .map(|(v, _)| v.clone())
        .collect())
}

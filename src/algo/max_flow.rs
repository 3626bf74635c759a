//! Maximum flow via Edmonds-Karp (BFS-based Ford-Fulkerson).

use std::collections::{HashMap, VecDeque};

use indexmap::{IndexMap, IndexSet};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Maximum flow from `source` to `sink` on a directed graph.
///
/// Edge weights act as capacities (unit capacity on unweighted graphs). A
/// residual view is built with forward capacity equal to the weight and
/// reverse capacity zero; BFS repeatedly finds an augmenting path, pushes
/// the bottleneck, and updates both residual directions until no augmenting
/// path remains.
///
/// Undirected graphs are a structural-precondition error, never a silent
/// approximation.
pub fn max_flow(graph: &Graph, source: &str, sink: &str) -> GraphResult<f64> {
    if !graph.directed() {
        return Err(GraphError::FlowRequiresDirected);
    }
    if !graph.contains_vertex(source) {
        return Err(GraphError::VertexNotFound(source.to_string()));
    }
    if !graph.contains_vertex(sink) {
        return Err(GraphError::VertexNotFound(sink.to_string()));
    }

    // Residual capacities plus an adjacency view that includes the reverse
    // direction of every arc.
    let mut capacity: HashMap<(String, String), f64> = HashMap::new();
    let mut residual_adj: IndexMap<String, IndexSet<String>> = IndexMap::new();

    for edge in graph.edges() {
        capacity.insert((edge.u.clone(), edge.v.clone()), edge.weight_or(1.0));
        residual_adj
            .entry(edge.u.clone())
            .or_default()
            .insert(edge.v.clone());
        residual_adj
            .entry(edge.v.clone())
            .or_default()
            .insert(edge.u.clone());
    }

    let mut flow: HashMap<(String, String), f64> = HashMap::new();
    let mut total = 0.0;

    while let Some((path, bottleneck)) =
        augmenting_path(source, sink, &capacity, &flow, &residual_adj)
    {
        for pair in path.windows(2) {
            let forward = (pair[0].clone(), pair[1].clone());
            let backward = (pair[1].clone(), pair[0].clone());
            *flow.entry(forward).or_insert(0.0) += bottleneck;
            *flow.entry(backward).or_insert(0.0) -= bottleneck;
        }
        total += bottleneck;
    }

    log::debug!("max_flow {} -> {}: {}", source, sink, total);
    Ok(total)
}

fn residual(
    capacity: &HashMap<(String, String), f64>,
    flow: &HashMap<(String, String), f64>,
    u: &str,
    v: &str,
) -> f64 {
    let key = (u.to_string(), v.to_string());
    capacity.get(&key).copied().unwrap_or(0.0) - flow.get(&key).copied().unwrap_or(0.0)
}

/// BFS over positive residual capacities; returns the path and its
/// bottleneck, or `None` when the sink is no longer reachable.
fn augmenting_path(
    source: &str,
    sink: &str,
    capacity: &HashMap<(String, String), f64>,
    flow: &HashMap<(String, String), f64>,
    residual_adj: &IndexMap<String, IndexSet<String>>,
) -> Option<(Vec<String>, f64)> {
    let mut parent: HashMap<String, String> = HashMap::new();
    let mut visited: IndexSet<&str> = IndexSet::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source.to_string());

    'bfs: while let Some(u) = queue.pop_front() {
        if let Some(neighbors) = residual_adj.get(&u) {
            for v in neighbors {
                if !visited.contains(v.as_str()) && residual(capacity, flow, &u, v) > 0.0 {
                    parent.insert(v.clone(), u.clone());
                    if v == sink {
                        break 'bfs;
                    }
                    visited.insert(v.as_str());
                    queue.push_back(v.clone());
                }
            }
        }
    }

    parent.get(sink)?;

    // Rebuild the path sink -> source and compute the bottleneck.
    let mut path = vec![sink.to_string()];
    let mut current = sink.to_string();
    while current != source {
        current = parent.get(&current)?.clone();
        path.push(current.clone());
    }
    path.reverse();

    let mut bottleneck = f64::INFINITY;
    for pair in path.windows(2) {
        bottleneck = bottleneck.min(residual(capacity, flow, &pair[0], &pair[1]));
    }

    Some((path, bottleneck))
}

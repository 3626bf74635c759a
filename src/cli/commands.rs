//! CLI command implementations.
//!
//! Each command loads the graph file, runs one engine operation, prints the
//! result (text or JSON) and, for mutations, saves the graph back.

use std::path::Path;

use crate::algo::{all_shortest_paths, bellman_ford, kruskal, max_flow, n_periphery};
use crate::format::{GraphReader, GraphWriter};
use crate::graph::{
    all_paths, connected_components, graph_center, main_component_and_boundary_edges, Graph,
};
use crate::types::{GraphResult, UNREACHABLE};

/// Create a new empty graph file.
pub fn cmd_new(path: &Path, directed: bool, weighted: bool) -> GraphResult<()> {
    let graph = Graph::new(directed, weighted);
    GraphWriter::write_to_file(&graph, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display summary information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.directed(),
            "weighted": graph.weighted(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        println!("{}", serde_json::to_string_pretty(&info).unwrap_or_default());
    } else {
        println!("File: {}", path.display());
        println!(
            "Type: {} {}",
            if graph.directed() { "directed" } else { "undirected" },
            if graph.weighted() { "weighted" } else { "unweighted" },
        );
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the adjacency list.
pub fn cmd_show(path: &Path) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    for vertex in graph.vertices() {
        let entries: Vec<String> = graph
            .neighbors(vertex)?
            .iter()
            .map(|(n, w)| match w {
                Some(w) => format!("{} ({})", n, w),
                None => n.clone(),
            })
            .collect();
        println!("{}: {}", vertex, entries.join(", "));
    }
    Ok(())
}

/// Add a vertex and save.
pub fn cmd_add_vertex(path: &Path, id: &str) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.add_vertex(id)?;
    GraphWriter::write_to_file(&graph, path)?;
    println!("Added vertex {}", id);
    Ok(())
}

/// Add an edge and save.
pub fn cmd_add_edge(
    path: &Path,
    u: &str,
    v: &str,
    weight: Option<f64>,
    overwrite: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.add_edge(u, v, weight, overwrite)?;
    GraphWriter::write_to_file(&graph, path)?;
    println!("Added edge {} - {}", u, v);
    Ok(())
}

/// Remove a vertex (and its incident edges) and save.
pub fn cmd_remove_vertex(path: &Path, id: &str) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.remove_vertex(id)?;
    GraphWriter::write_to_file(&graph, path)?;
    println!("Removed vertex {}", id);
    Ok(())
}

/// Remove an edge and save.
pub fn cmd_remove_edge(path: &Path, u: &str, v: &str) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.remove_edge(u, v)?;
    GraphWriter::write_to_file(&graph, path)?;
    println!("Removed edge {} - {}", u, v);
    Ok(())
}

/// List the deduplicated edge set.
pub fn cmd_edges(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let edges: Vec<_> = graph.edges().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&edges).unwrap_or_default());
    } else {
        for edge in edges {
            println!("{}", edge);
        }
    }
    Ok(())
}

/// Vertices with a strictly lower in-degree than the target.
pub fn cmd_lower_indegree(path: &Path, target: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let vertices = graph.in_degree_comparison(target)?;
    print_vertex_list(&vertices, json);
    Ok(())
}

/// Vertices with an edge into the target.
pub fn cmd_incoming(path: &Path, target: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let vertices = graph.incoming_neighbors(target)?;
    print_vertex_list(&vertices, json);
    Ok(())
}

/// Build the reciprocal subgraph and write it to a new file.
pub fn cmd_reciprocal(path: &Path, output: &Path) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let reciprocal = graph.reciprocal_subgraph();
    GraphWriter::write_to_file(&reciprocal, output)?;
    println!(
        "Wrote reciprocal subgraph ({} edges) to {}",
        reciprocal.edge_count(),
        output.display()
    );
    Ok(())
}

/// Enumerate all simple paths between two vertices.
pub fn cmd_paths(path: &Path, u: &str, v: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let paths = all_paths(&graph, u, v)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&paths).unwrap_or_default());
    } else if paths.is_empty() {
        println!("No path from {} to {}", u, v);
    } else {
        for p in paths {
            println!("{}", p.join(" -> "));
        }
    }
    Ok(())
}

/// Radius and center of the graph.
pub fn cmd_center(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let result = graph_center(&graph)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
    } else {
        println!("Radius: {}", result.radius);
        println!("Center: {}", result.center.join(", "));
    }
    Ok(())
}

/// Connected components plus the main component and its boundary edges.
pub fn cmd_components(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let components = connected_components(&graph);
    let report = main_component_and_boundary_edges(&graph);
    if json {
        let value = serde_json::json!({
            "components": components,
            "main_component": report.main_component,
            "boundary_edges": report.boundary_edges,
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        for (i, component) in components.iter().enumerate() {
            println!("Component {}: {}", i + 1, component.join(", "));
        }
        println!("Main component: {}", report.main_component.join(", "));
        for edge in &report.boundary_edges {
            println!("Boundary edge: {}", edge);
        }
    }
    Ok(())
}

/// Minimum spanning tree via Kruskal.
pub fn cmd_mst(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let mst = kruskal(&graph)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&mst).unwrap_or_default());
    } else {
        for edge in &mst.edges {
            println!("{}", edge);
        }
        println!("Total weight: {}", mst.total_weight);
    }
    Ok(())
}

/// Shortest distance and all shortest paths between two vertices.
pub fn cmd_shortest(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let result = all_shortest_paths(&graph, source, target)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
    } else if result.distance == UNREACHABLE {
        println!("No path from {} to {}", source, target);
    } else {
        println!("Distance: {}", result.distance);
        for p in &result.paths {
            println!("{}", p.join(" -> "));
        }
    }
    Ok(())
}

/// Vertices farther than N from the source (all-pairs based).
pub fn cmd_periphery(path: &Path, source: &str, n: f64, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let vertices = n_periphery(&graph, source, n)?;
    print_vertex_list(&vertices, json);
    Ok(())
}

/// Negative cycles reachable from the source.
pub fn cmd_negative_cycles(path: &Path, source: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let cycles = bellman_ford(&graph, source)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cycles).unwrap_or_default());
    } else if cycles.is_empty() {
        println!("No negative cycles reachable from {}", source);
    } else {
        for cycle in cycles {
            println!("{}", cycle.join(" -> "));
        }
    }
    Ok(())
}

/// Maximum flow between a source and a sink.
pub fn cmd_max_flow(path: &Path, source: &str, sink: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let value = max_flow(&graph, source, sink)?;
    if json {
        let result = serde_json::json!({ "source": source, "sink": sink, "max_flow": value });
        println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
    } else {
        println!("Max flow {} -> {}: {}", source, sink, value);
    }
    Ok(())
}

fn print_vertex_list(vertices: &[String], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&vertices).unwrap_or_default()
        );
    } else if vertices.is_empty() {
        println!("(none)");
    } else {
        println!("{}", vertices.join(", "));
    }
}

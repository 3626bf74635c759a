//! Reads graph files in the text edge-list format.

use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Reader for the text graph format.
///
/// The first line declares `{directed|undirected} {weighted|unweighted}`.
/// Every following non-blank line is either a single token (an isolated
/// vertex), two tokens `u v` (unweighted edge) or three tokens `u v w`
/// (weighted edge). Any malformed line aborts the whole load; a partially
/// populated graph is never returned.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file from disk.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a graph from its textual representation.
    pub fn parse(text: &str) -> GraphResult<Graph> {
        let mut lines = text.lines().enumerate();

        let (_, header) = lines
            .next()
            .ok_or_else(|| GraphError::InvalidHeader(String::new()))?;
        let (directed, weighted) = parse_header(header)?;
        let mut graph = Graph::new(directed, weighted);

        // First pass: collect the records so every vertex (including ones
        // that only appear as edge endpoints) exists before edges are wired.
        let mut records: Vec<Record> = Vec::new();
        for (index, line) in lines {
            let number = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match (tokens.as_slice(), weighted) {
                ([], _) => continue,
                ([vertex], _) => records.push(Record::Vertex(vertex.to_string())),
                ([u, v], false) => {
                    records.push(Record::Edge(u.to_string(), v.to_string(), None))
                }
                ([u, v, raw], true) => {
                    let weight: f64 = raw.parse().map_err(|_| GraphError::MalformedLine {
                        line: number,
                        reason: format!("invalid weight '{}'", raw),
                    })?;
                    records.push(Record::Edge(u.to_string(), v.to_string(), Some(weight)))
                }
                ([_, _], true) => {
                    return Err(GraphError::MalformedLine {
                        line: number,
                        reason: "weighted graph edge is missing its weight".to_string(),
                    })
                }
                _ => {
                    return Err(GraphError::MalformedLine {
                        line: number,
                        reason: format!("unexpected number of tokens ({})", tokens.len()),
                    })
                }
            }
        }

        for record in &records {
            match record {
                Record::Vertex(v) => register(&mut graph, v)?,
                Record::Edge(u, v, _) => {
                    register(&mut graph, u)?;
                    register(&mut graph, v)?;
                }
            }
        }
        for record in &records {
            if let Record::Edge(u, v, weight) = record {
                graph.add_edge(u, v, *weight, false)?;
            }
        }

        log::debug!(
            "loaded graph: {} vertices, {} edges, directed={}, weighted={}",
            graph.vertex_count(),
            graph.edge_count(),
            directed,
            weighted
        );
        Ok(graph)
    }
}

enum Record {
    Vertex(String),
    Edge(String, String, Option<f64>),
}

fn parse_header(header: &str) -> GraphResult<(bool, bool)> {
    let tokens: Vec<String> = header
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    let [direction, weight] = tokens.as_slice() else {
        return Err(GraphError::InvalidHeader(header.to_string()));
    };

    let directed = match direction.as_str() {
        "directed" => true,
        "undirected" => false,
        _ => return Err(GraphError::InvalidHeader(header.to_string())),
    };
    let weighted = match weight.as_str() {
        "weighted" => true,
        "unweighted" => false,
        _ => return Err(GraphError::InvalidHeader(header.to_string())),
    };
    Ok((directed, weighted))
}

/// Vertices may appear many times across records; only the first mention
/// creates them.
fn register(graph: &mut Graph, vertex: &str) -> GraphResult<()> {
    if !graph.contains_vertex(vertex) {
        graph.add_vertex(vertex)?;
    }
    Ok(())
}

//! Writes graphs in the text edge-list format.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Writer for the text graph format.
///
/// Emits the header line, then one line per vertex without outgoing entries
/// (so isolated vertices survive the round-trip) and one line per
/// deduplicated edge — undirected edges appear exactly once, in canonical
/// endpoint order.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to a file on disk.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(Self::to_text(graph).as_bytes())?;
        Ok(())
    }

    /// Render a graph to its textual representation.
    pub fn to_text(graph: &Graph) -> String {
        let mut out = String::new();
        let direction = if graph.directed() {
            "directed"
        } else {
            "undirected"
        };
        let weight = if graph.weighted() {
            "weighted"
        } else {
            "unweighted"
        };
        let _ = writeln!(out, "{} {}", direction, weight);

        for vertex in graph.vertices() {
            if graph
                .neighbors(vertex)
                .map(|n| n.is_empty())
                .unwrap_or(true)
            {
                let _ = writeln!(out, "{}", vertex);
            }
        }
        for edge in graph.edges() {
            match edge.weight {
                Some(w) => {
                    let _ = writeln!(out, "{} {} {}", edge.u, edge.v, w);
                }
                None => {
                    let _ = writeln!(out, "{} {}", edge.u, edge.v);
                }
            }
        }

        out
    }
}

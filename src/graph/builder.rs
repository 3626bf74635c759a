//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Unlike the strict mutation API, the builder registers unknown endpoints
/// automatically, which keeps test and demo setup short.
pub struct GraphBuilder {
    directed: bool,
    weighted: bool,
    vertices: Vec<String>,
    edges: Vec<(String, String, Option<f64>)>,
}

impl GraphBuilder {
    /// Create a builder for an undirected unweighted graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            weighted: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set whether the graph is directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set whether the graph is weighted.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Add an isolated vertex.
    pub fn vertex(mut self, id: impl Into<String>) -> Self {
        self.vertices.push(id.into());
        self
    }

    /// Add an unweighted edge, registering both endpoints.
    pub fn edge(mut self, u: impl Into<String>, v: impl Into<String>) -> Self {
        self.edges.push((u.into(), v.into(), None));
        self
    }

    /// Add a weighted edge, registering both endpoints.
    pub fn weighted_edge(
        mut self,
        u: impl Into<String>,
        v: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.edges.push((u.into(), v.into(), Some(weight)));
        self
    }

    /// Build the final graph through the checked mutation API.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.directed, self.weighted);
        for vertex in &self.vertices {
            if !graph.contains_vertex(vertex) {
                graph.add_vertex(vertex.clone())?;
            }
        }
        for (u, v, _) in &self.edges {
            for endpoint in [u, v] {
                if !graph.contains_vertex(endpoint) {
                    graph.add_vertex(endpoint.clone())?;
                }
            }
        }
        for (u, v, weight) in &self.edges {
            graph.add_edge(u, v, *weight, false)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! The core adjacency-list graph structure.

use indexmap::IndexMap;

use crate::types::{Edge, GraphError, GraphResult};

/// An in-memory graph with directed/undirected and weighted/unweighted
/// variants.
///
/// Vertices are identified by strings. The adjacency map preserves insertion
/// order, so iteration over vertices and edges is deterministic for a fixed
/// mutation sequence.
///
/// Invariants maintained by the mutation API:
/// - unweighted graphs never store a weight; weighted graphs always do,
/// - undirected non-loop edges are mirrored with equal weight,
/// - both endpoints of an edge exist before the edge does,
/// - at most one edge per ordered pair,
/// - a failed mutation leaves the graph untouched.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    adjacency: IndexMap<String, Vec<(String, Option<f64>)>>,
}

impl Graph {
    /// Create an empty graph with the given flags.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            adjacency: IndexMap::new(),
        }
    }

    /// Whether edges have orientation.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Whether edges carry weights.
    pub fn weighted(&self) -> bool {
        self.weighted
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Whether a vertex with this id exists.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// All vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// The ordered out-neighbor list of a vertex.
    pub fn neighbors(&self, id: &str) -> GraphResult<&[(String, Option<f64>)]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_string()))
    }

    /// Whether the ordered pair (u, v) has an edge.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .map(|adj| adj.iter().any(|(n, _)| n == v))
            .unwrap_or(false)
    }

    /// The weight stored for the ordered pair (u, v), if the edge exists.
    /// `Some(None)` means the edge exists in an unweighted graph.
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<Option<f64>> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|(n, _)| n == v)
            .map(|(_, w)| *w)
    }

    // ==================== Mutation ====================

    /// Add a vertex with an empty adjacency list.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> GraphResult<()> {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Add an edge between two existing vertices.
    ///
    /// Fails without mutating when either endpoint is missing, when the
    /// weight is missing on a weighted graph, or when the ordered pair
    /// already has an edge and `overwrite` is false. With `overwrite`, an
    /// existing edge's weight is replaced instead.
    ///
    /// Undirected non-loop edges are mirrored into both adjacency lists.
    pub fn add_edge(
        &mut self,
        u: &str,
        v: &str,
        weight: Option<f64>,
        overwrite: bool,
    ) -> GraphResult<()> {
        if !self.adjacency.contains_key(u) {
            return Err(GraphError::VertexNotFound(u.to_string()));
        }
        if !self.adjacency.contains_key(v) {
            return Err(GraphError::VertexNotFound(v.to_string()));
        }

        let weight = if self.weighted {
            match weight {
                Some(w) => Some(w),
                None => {
                    return Err(GraphError::MissingWeight {
                        u: u.to_string(),
                        v: v.to_string(),
                    })
                }
            }
        } else {
            // Unweighted graphs ignore any supplied weight.
            None
        };

        let exists = self.has_edge(u, v);
        if exists && !overwrite {
            return Err(GraphError::DuplicateEdge {
                u: u.to_string(),
                v: v.to_string(),
            });
        }

        if exists {
            self.set_entry(u, v, weight);
            if !self.directed && u != v {
                self.set_entry(v, u, weight);
            }
        } else {
            self.push_entry(u, v, weight);
            if !self.directed && u != v {
                self.push_entry(v, u, weight);
            }
        }

        Ok(())
    }

    /// Remove a vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<()> {
        if self.adjacency.shift_remove(id).is_none() {
            return Err(GraphError::VertexNotFound(id.to_string()));
        }
        for adj in self.adjacency.values_mut() {
            adj.retain(|(n, _)| n != id);
        }
        Ok(())
    }

    /// Remove the edge on the ordered pair (u, v), and its mirror for
    /// undirected graphs.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> GraphResult<()> {
        if !self.adjacency.contains_key(u) {
            return Err(GraphError::VertexNotFound(u.to_string()));
        }
        if !self.adjacency.contains_key(v) {
            return Err(GraphError::VertexNotFound(v.to_string()));
        }
        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound {
                u: u.to_string(),
                v: v.to_string(),
            });
        }

        if let Some(adj) = self.adjacency.get_mut(u) {
            adj.retain(|(n, _)| n != v);
        }
        if !self.directed && u != v {
            if let Some(adj) = self.adjacency.get_mut(v) {
                adj.retain(|(n, _)| n != u);
            }
        }
        Ok(())
    }

    // ==================== Edge enumeration ====================

    /// A lazy, deduplicated view of all edges.
    ///
    /// Directed graphs yield every stored arc. Undirected graphs yield each
    /// logical edge once, with endpoints in canonical (sorted) order; the
    /// mirroring invariant guarantees the canonical orientation is stored.
    /// The sequence is recomputed on every call.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(move |(u, adj)| {
            adj.iter().filter_map(move |(v, w)| {
                if self.directed || u.as_str() <= v.as_str() {
                    Some(Edge::new(u.clone(), v.clone(), *w))
                } else {
                    None
                }
            })
        })
    }

    // ==================== Degree queries ====================

    /// In-degree of every vertex (for undirected graphs this equals the
    /// degree, since mirrored entries count as incoming references).
    pub fn in_degrees(&self) -> IndexMap<String, usize> {
        let mut degrees: IndexMap<String, usize> = self
            .adjacency
            .keys()
            .map(|v| (v.clone(), 0usize))
            .collect();
        for adj in self.adjacency.values() {
            for (neighbor, _) in adj {
                if let Some(count) = degrees.get_mut(neighbor) {
                    *count += 1;
                }
            }
        }
        degrees
    }

    /// All vertices whose in-degree is strictly less than `target`'s.
    pub fn in_degree_comparison(&self, target: &str) -> GraphResult<Vec<String>> {
        let degrees = self.in_degrees();
        let target_degree = *degrees
            .get(target)
            .ok_or_else(|| GraphError::VertexNotFound(target.to_string()))?;
        Ok(degrees
            .into_iter()
            .filter(|(_, d)| *d < target_degree)
            .map(|(v, _)| v)
            .collect())
    }

    /// All vertices v with an edge v -> target.
    pub fn incoming_neighbors(&self, target: &str) -> GraphResult<Vec<String>> {
        if !self.adjacency.contains_key(target) {
            return Err(GraphError::VertexNotFound(target.to_string()));
        }
        Ok(self
            .adjacency
            .iter()
            .filter(|(_, adj)| adj.iter().any(|(n, _)| n == target))
            .map(|(v, _)| v.clone())
            .collect())
    }

    // ==================== Derived graphs ====================

    /// A new directed graph keeping only mutually-confirmed arcs: u -> v is
    /// kept iff both u -> v and v -> u exist, with the u -> v weight.
    pub fn reciprocal_subgraph(&self) -> Graph {
        let mut result = Graph::new(true, self.weighted);
        for vertex in self.adjacency.keys() {
            result.adjacency.insert(vertex.clone(), Vec::new());
        }
        for (u, adj) in &self.adjacency {
            for (v, w) in adj {
                if self.has_edge(v, u) {
                    if let Some(list) = result.adjacency.get_mut(u) {
                        list.push((v.clone(), *w));
                    }
                }
            }
        }
        result
    }

    // ==================== Internal helpers ====================

    fn push_entry(&mut self, u: &str, v: &str, weight: Option<f64>) {
        if let Some(adj) = self.adjacency.get_mut(u) {
            adj.push((v.to_string(), weight));
        }
    }

    fn set_entry(&mut self, u: &str, v: &str, weight: Option<f64>) {
        if let Some(adj) = self.adjacency.get_mut(u) {
            if let Some(entry) = adj.iter_mut().find(|(n, _)| n == v) {
                entry.1 = weight;
            }
        }
    }
}

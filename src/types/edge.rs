//! The deduplicated edge view returned by graph queries.

use serde::Serialize;

/// A single edge as reported by [`Graph::edges`](crate::graph::Graph::edges)
/// and by algorithm results.
///
/// For undirected graphs the endpoints are in canonical (sorted) order, so
/// each logical edge appears exactly once. The weight is `None` for
/// unweighted graphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// First endpoint (source for directed graphs).
    pub u: String,
    /// Second endpoint (target for directed graphs).
    pub v: String,
    /// Edge weight, absent in unweighted graphs.
    pub weight: Option<f64>,
}

impl Edge {
    /// Create a new edge view.
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }

    /// The stored weight, or `default` when the graph is unweighted.
    pub fn weight_or(&self, default: f64) -> f64 {
        self.weight.unwrap_or(default)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} - {} ({})", self.u, self.v, w),
            None => write!(f, "{} - {}", self.u, self.v),
        }
    }
}

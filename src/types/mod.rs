//! All data types for the edgewise library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Sentinel distance for unreachable vertices in shortest-path results.
pub const UNREACHABLE: f64 = f64::INFINITY;

//! Shortest Path - incrementally built directed graphs with Dijkstra queries
//!
//! Callers add vertices and edges one at a time through a [`GraphStore`],
//! receiving opaque ids, then ask for the lowest-cost path between any two
//! vertices. Paths come back as both the vertex sequence and the edge
//! sequence, in traversal order.
//!
//! ```
//! use shortest_path::{GraphStore, MutableGraph};
//!
//! let mut store = GraphStore::new();
//! let a = store.add_vertex();
//! let b = store.add_vertex();
//! let ab = store.add_edge(a, b, 4).unwrap();
//!
//! let path = store.shortest_path(a, b).unwrap();
//! assert_eq!(path.vertices, vec![a, b]);
//! assert_eq!(path.edges, vec![ab]);
//! assert_eq!(path.cost, 4);
//! ```

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, Path, ShortestPathAlgorithm, ShortestPathTree};
/// Re-export main types for convenient use
pub use graph::{Connection, Cost, EdgeId, Graph, GraphStore, MutableGraph, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex ID: {0}")]
    UnknownVertex(VertexId),

    #[error("No path found from {from} to {to}")]
    NoPathFound { from: VertexId, to: VertexId },

    #[error("Path cost from {from} to {to} does not fit in the cost type")]
    CostOverflow { from: VertexId, to: VertexId },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

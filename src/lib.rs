//! Weighted SSSP - Dijkstra's single-source shortest path over two frontiers
//!
//! The same greedy search runs over either an array-scan frontier
//! (O(V) per extraction) or a binary-heap frontier (O(log V) per
//! extraction). Results are backward-linked [`Path`] chains that
//! [`reverse_path`] turns into forward routes.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_path_array, shortest_path_heap, ArrayDijkstra, Dijkstra, HeapDijkstra},
    path::{reverse_path, Path},
    SearchOutcome, SearchStats, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Edge, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight on edge from {from} to {to}: {weight}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

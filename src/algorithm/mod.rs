pub mod traits;
pub mod path;
pub mod dijkstra;

pub use traits::{SearchOutcome, SearchStats, ShortestPathAlgorithm};

pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::{DirectedGraph, Edge, Vertex, VertexId};

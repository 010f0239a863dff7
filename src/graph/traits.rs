use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::graph::directed::VertexId;

/// Edge weight usable by the shortest path engine.
///
/// Any non-negative, summable, totally ordered type qualifies: the primitive
/// integers (non-negative values only for the signed ones) and
/// `OrderedFloat<f32>` / `OrderedFloat<f64>`.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two weights, or `None` when it does not fit in the type
    fn checked_total(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_total(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate to infinity instead of wrapping
impl Weight for OrderedFloat<f32> {
    fn checked_total(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for OrderedFloat<f64> {
    fn checked_total(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists.
    /// With parallel edges the smallest weight is returned.
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<T, W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex carrying `value` to the graph and returns its ID
    fn add_vertex(&mut self, value: T) -> VertexId;

    /// Appends a directed edge from `from` to `to`.
    ///
    /// Parallel edges are kept. Nothing is validated here: an unknown
    /// endpoint or a negative weight is a caller error.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W);
}

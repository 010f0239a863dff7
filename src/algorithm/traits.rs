use crate::algorithm::path::Path;
use crate::graph::{Graph, VertexId, Weight};

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Path records pushed onto the frontier
    pub insertions: usize,

    /// Records taken off the frontier, stale ones included
    pub extractions: usize,

    /// Extracted records skipped because their destination was already settled
    pub stale_skips: usize,

    /// Largest frontier size seen
    pub peak_frontier: usize,

    /// Whether the search stopped as soon as the target was extracted
    pub early_exit: bool,
}

/// Result of one source-to-destination search
#[derive(Debug, Clone)]
pub struct SearchOutcome<W> {
    /// Cheapest route found, linked backward from the destination; `None` when unreachable
    pub path: Option<Path<W>>,

    pub stats: SearchStats,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Searches for the cheapest route from `source` to `destination`
    fn search(&self, graph: &G, source: VertexId, destination: VertexId) -> SearchOutcome<W>;

    /// Cheapest route from `source` to `destination`, linked backward
    fn shortest_path(&self, graph: &G, source: VertexId, destination: VertexId) -> Option<Path<W>> {
        self.search(graph, source, destination).path
    }
}


use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::algorithm::path::{Path, PathId, PathStore};
use crate::algorithm::{SearchOutcome, SearchStats, ShortestPathAlgorithm};
use crate::data_structures::{Frontier, FrontierEntry, LinearFrontier, PriorityFrontier};
use crate::graph::{Graph, VertexId, Weight};

/// Dijkstra's algorithm, parameterised by the frontier that holds candidate routes.
///
/// Every search runs the same loop: seed the frontier with one record per
/// outgoing edge of the source, repeatedly extract the cheapest record,
/// expand its destination's edges into new records, and retire it. With an
/// ordered frontier the first record extracted for the target is optimal
/// and the search returns right there; otherwise the retired records are
/// scanned for the cheapest one reaching the target.
///
/// Weights must be non-negative. Nothing checks that here.
#[derive(Debug)]
pub struct Dijkstra<F> {
    /// Stop as soon as an ordered frontier yields the target
    early_exit: bool,
    frontier: PhantomData<fn() -> F>,
}

/// O(V²) variant: every extraction scans the whole frontier
pub type ArrayDijkstra<W> = Dijkstra<LinearFrontier<W>>;

/// O((V + E) log V) variant backed by a binary heap
pub type HeapDijkstra<W> = Dijkstra<PriorityFrontier<W>>;

impl<F> Dijkstra<F> {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            early_exit: true,
            frontier: PhantomData,
        }
    }

    /// Enable or disable stopping at the first extraction of the target.
    ///
    /// Only ordered frontiers honour this; the array frontier always runs
    /// to exhaustion.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

impl<F> Default for Dijkstra<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for Dijkstra<F> {
    fn clone(&self) -> Self {
        Dijkstra {
            early_exit: self.early_exit,
            frontier: PhantomData,
        }
    }
}

/// State owned by a single in-flight search
struct Search<'g, W, G, F> {
    graph: &'g G,
    store: PathStore<W>,
    frontier: F,
    /// Records extracted and expanded, in extraction order
    finalized: Vec<PathId>,
    /// Vertices whose cheapest route is already known
    settled: Vec<bool>,
    stats: SearchStats,
}

impl<'g, W, G, F> Search<'g, W, G, F>
where
    W: Weight,
    G: Graph<W>,
    F: Frontier<W>,
{
    fn new(graph: &'g G) -> Self {
        Search {
            graph,
            store: PathStore::new(),
            frontier: F::default(),
            finalized: Vec::new(),
            settled: vec![false; graph.vertex_count()],
            stats: SearchStats::default(),
        }
    }

    fn is_settled(&self, vertex: VertexId) -> bool {
        // Dangling destinations count as settled so they are never expanded
        self.settled.get(vertex.index()).copied().unwrap_or(true)
    }

    fn settle(&mut self, vertex: VertexId) {
        if let Some(flag) = self.settled.get_mut(vertex.index()) {
            *flag = true;
        }
    }

    fn push(&mut self, total: W, destination: VertexId, previous: Option<PathId>) {
        let id = self.store.push(total, destination, previous);
        self.frontier.insert(FrontierEntry::new(total, id));
        self.stats.insertions += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    fn seed(&mut self, source: VertexId) {
        self.settle(source);
        let graph = self.graph;
        for (next, weight) in graph.outgoing_edges(source) {
            self.push(weight, next, None);
        }
    }

    fn expand(&mut self, id: PathId, total: W, vertex: VertexId) {
        let graph = self.graph;
        for (next, weight) in graph.outgoing_edges(vertex) {
            if self.is_settled(next) {
                continue;
            }
            match total.checked_total(weight) {
                Some(sum) => self.push(sum, next, Some(id)),
                None => warn!(
                    "skipping edge {} -> {}: total {:?} + {:?} overflows",
                    vertex, next, total, weight
                ),
            }
        }
    }

    /// Runs the frontier loop; returns the winning record if it was found early
    fn run(&mut self, destination: VertexId, early_exit: bool) -> Option<PathId> {
        while let Some(entry) = self.frontier.extract_minimum() {
            self.stats.extractions += 1;
            let Some(record) = self.store.get(entry.path).copied() else {
                continue;
            };
            if self.is_settled(record.destination) {
                self.stats.stale_skips += 1;
                continue;
            }
            trace!(
                "{} frontier: settling {} at {:?} ({} pending)",
                F::name(),
                record.destination,
                record.total,
                self.frontier.len()
            );
            self.settle(record.destination);

            if early_exit && record.destination == destination {
                self.stats.early_exit = true;
                return Some(entry.path);
            }

            self.expand(entry.path, record.total, record.destination);
            self.finalized.push(entry.path);
        }
        None
    }

    /// Cheapest retired record reaching `destination`
    fn resolve(&self, destination: VertexId) -> Option<PathId> {
        self.finalized
            .iter()
            .filter_map(|&id| self.store.get(id).map(|record| (id, record)))
            .filter(|(_, record)| record.destination == destination)
            .min_by_key(|(_, record)| record.total)
            .map(|(id, _)| id)
    }
}

impl<W, G, F> ShortestPathAlgorithm<W, G> for Dijkstra<F>
where
    W: Weight,
    G: Graph<W>,
    F: Frontier<W>,
{
    fn name(&self) -> &'static str {
        if F::ORDERED_EXTRACTION {
            "Dijkstra (heap)"
        } else {
            "Dijkstra (array)"
        }
    }

    fn search(&self, graph: &G, source: VertexId, destination: VertexId) -> SearchOutcome<W> {
        if !graph.has_vertex(source) || !graph.has_vertex(destination) {
            warn!(
                "search from {} to {} skipped: endpoint not in graph of {} vertices",
                source,
                destination,
                graph.vertex_count()
            );
            return SearchOutcome {
                path: None,
                stats: SearchStats::default(),
            };
        }

        let mut search: Search<'_, W, G, F> = Search::new(graph);
        search.seed(source);

        let early_exit = self.early_exit && F::ORDERED_EXTRACTION;
        let winner = match search.run(destination, early_exit) {
            Some(id) => Some(id),
            None => search.resolve(destination),
        };
        let path = winner.and_then(|id| search.store.materialize(id));

        debug!(
            "{} search {} -> {}: total {:?}, {} records, {} extractions ({} stale), peak {}",
            F::name(),
            source,
            destination,
            path.as_ref().map(Path::total),
            search.store.len(),
            search.stats.extractions,
            search.stats.stale_skips,
            search.stats.peak_frontier
        );

        SearchOutcome {
            path,
            stats: search.stats,
        }
    }
}

/// Shortest path using the array-scan frontier, linked backward from `destination`
pub fn shortest_path_array<W, G>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
) -> Option<Path<W>>
where
    W: Weight,
    G: Graph<W>,
{
    ArrayDijkstra::<W>::new().shortest_path(graph, source, destination)
}

/// Shortest path using the binary-heap frontier, linked backward from `destination`
pub fn shortest_path_heap<W, G>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
) -> Option<Path<W>>
where
    W: Weight,
    G: Graph<W>,
{
    HeapDijkstra::<W>::new().shortest_path(graph, source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    fn diamond() -> (DirectedGraph<char, u32>, Vec<VertexId>) {
        let mut graph = DirectedGraph::new();
        let ids: Vec<VertexId> = "abcd".chars().map(|c| graph.add_vertex(c)).collect();
        graph.add_edge(ids[0], ids[1], 1);
        graph.add_edge(ids[0], ids[2], 4);
        graph.add_edge(ids[1], ids[2], 1);
        graph.add_edge(ids[2], ids[3], 1);
        graph.add_edge(ids[1], ids[3], 5);
        (graph, ids)
    }

    #[test]
    fn heap_search_exits_early() {
        let (graph, ids) = diamond();
        let outcome = HeapDijkstra::<u32>::new().search(&graph, ids[0], ids[1]);

        assert_eq!(outcome.path.as_ref().map(Path::total), Some(1));
        assert!(outcome.stats.early_exit);
        assert!(outcome.stats.extractions < outcome.stats.insertions);
    }

    #[test]
    fn array_search_runs_to_exhaustion() {
        let (graph, ids) = diamond();
        let outcome = ArrayDijkstra::<u32>::new().search(&graph, ids[0], ids[1]);

        assert_eq!(outcome.path.as_ref().map(Path::total), Some(1));
        assert!(!outcome.stats.early_exit);
        assert_eq!(outcome.stats.extractions, outcome.stats.insertions);
    }

    #[test]
    fn disabling_early_exit_keeps_the_answer() {
        let (graph, ids) = diamond();
        let eager = HeapDijkstra::<u32>::new().search(&graph, ids[0], ids[3]);
        let exhaustive = HeapDijkstra::<u32>::new()
            .with_early_exit(false)
            .search(&graph, ids[0], ids[3]);

        assert_eq!(eager.path.as_ref().map(Path::total), Some(3));
        assert_eq!(eager.path, exhaustive.path);
        assert!(!exhaustive.stats.early_exit);
    }

    #[test]
    fn cycles_terminate() {
        let mut graph: DirectedGraph<u8, u32> = DirectedGraph::new();
        let a = graph.add_vertex(0);
        let b = graph.add_vertex(1);
        let c = graph.add_vertex(2);
        let unreachable = graph.add_vertex(3);
        graph.add_edge(a, b, 2);
        graph.add_edge(b, a, 2);
        graph.add_edge(b, c, 3);
        graph.add_edge(c, b, 1);

        assert_eq!(shortest_path_array(&graph, a, c).map(|p| p.total()), Some(5));
        assert_eq!(shortest_path_heap(&graph, a, c).map(|p| p.total()), Some(5));
        assert!(shortest_path_array(&graph, a, unreachable).is_none());
        assert!(shortest_path_heap(&graph, a, unreachable).is_none());
    }

    #[test]
    fn overflowing_totals_are_dropped() {
        let half = u32::MAX / 2 + 1;
        let mut graph: DirectedGraph<u8, u32> = DirectedGraph::new();
        let a = graph.add_vertex(0);
        let b = graph.add_vertex(1);
        let c = graph.add_vertex(2);
        graph.add_edge(a, b, half);
        graph.add_edge(b, c, half);

        assert_eq!(shortest_path_heap(&graph, a, b).map(|p| p.total()), Some(half));
        assert!(shortest_path_heap(&graph, a, c).is_none());
        assert!(shortest_path_array(&graph, a, c).is_none());

        graph.add_edge(a, c, u32::MAX);
        assert_eq!(shortest_path_heap(&graph, a, c).map(|p| p.total()), Some(u32::MAX));
        assert_eq!(shortest_path_array(&graph, a, c).map(|p| p.total()), Some(u32::MAX));
    }

    #[test]
    fn foreign_endpoints_are_unreachable() {
        let (graph, ids) = diamond();
        let ghost = VertexId::new(42);

        assert!(shortest_path_heap(&graph, ids[0], ghost).is_none());
        assert!(shortest_path_array(&graph, ghost, ids[0]).is_none());
    }

    #[test]
    fn dangling_edges_are_ignored() {
        let mut graph: DirectedGraph<u8, u32> = DirectedGraph::new();
        let a = graph.add_vertex(0);
        let b = graph.add_vertex(1);
        graph.add_edge(a, VertexId::new(9), 1);
        graph.add_edge(a, b, 4);

        assert_eq!(shortest_path_heap(&graph, a, b).map(|p| p.total()), Some(4));
        assert_eq!(shortest_path_array(&graph, a, b).map(|p| p.total()), Some(4));
    }

    type CharGraph = DirectedGraph<char, u32>;

    #[test]
    fn algorithm_names() {
        let heap = HeapDijkstra::<u32>::new();
        let array = ArrayDijkstra::<u32>::new();
        assert_eq!(
            <HeapDijkstra<u32> as ShortestPathAlgorithm<u32, CharGraph>>::name(&heap),
            "Dijkstra (heap)"
        );
        assert_eq!(
            <ArrayDijkstra<u32> as ShortestPathAlgorithm<u32, CharGraph>>::name(&array),
            "Dijkstra (array)"
        );
    }
}

use std::env;
use std::time::{Duration, Instant};

use log::info;
use rayon::prelude::*;
use weighted_sssp::graph::generators::random_graph;
use weighted_sssp::graph::{DirectedGraph, Graph, VertexId};
use weighted_sssp::{ArrayDijkstra, HeapDijkstra, ShortestPathAlgorithm};

type BenchGraph = DirectedGraph<usize, u64>;

/// Configuration for the benchmark run
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Graph sizes to test
    sizes: Vec<usize>,
    /// Average number of edges per vertex
    edge_factor: f64,
    /// Independent searches per graph, run in parallel
    queries: usize,
    max_weight: u64,
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: vec![100, 500, 1_000, 2_000, 5_000],
            edge_factor: 4.0,
            queries: 32,
            max_weight: 100,
            seed: 2024,
        }
    }
}

impl BenchmarkConfig {
    /// Positional overrides: `benchmark [sizes,comma,separated] [edge_factor] [queries]`
    fn from_args(args: &[String]) -> Self {
        let mut config = BenchmarkConfig::default();
        if let Some(sizes) = args.get(1) {
            let parsed: Vec<usize> = sizes
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if !parsed.is_empty() {
                config.sizes = parsed;
            }
        }
        if let Some(factor) = args.get(2).and_then(|s| s.parse().ok()) {
            config.edge_factor = factor;
        }
        if let Some(queries) = args.get(3).and_then(|s| s.parse().ok()) {
            config.queries = queries;
        }
        config
    }
}

// Runs `queries` searches over one shared graph; each search owns its own frontier
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &BenchGraph,
    pairs: &[(VertexId, VertexId)],
) -> (Duration, Vec<Option<u64>>)
where
    A: ShortestPathAlgorithm<u64, BenchGraph> + Sync,
{
    let start = Instant::now();
    let totals: Vec<Option<u64>> = pairs
        .par_iter()
        .map(|&(source, target)| algorithm.shortest_path(graph, source, target).map(|p| p.total()))
        .collect();
    let duration = start.elapsed();

    info!(
        "{}: {} searches in {:?}, {} reachable",
        algorithm.name(),
        pairs.len(),
        duration,
        totals.iter().filter(|t| t.is_some()).count()
    );

    (duration, totals)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);

    println!("=====================================================");
    println!("Benchmark: array frontier vs heap frontier");
    println!("Edge factor: {} edges per vertex (on average)", config.edge_factor);
    println!("Queries per graph: {}", config.queries);
    println!("=====================================================");

    let array = ArrayDijkstra::<u64>::new();
    let heap = HeapDijkstra::<u64>::new();
    let mut results = Vec::new();

    for (round, &size) in config.sizes.iter().enumerate() {
        if size < 2 {
            println!("Skipping graph of {} vertices", size);
            continue;
        }
        let edges = (config.edge_factor * size as f64) as usize;
        let graph = random_graph(size, edges, config.max_weight, config.seed + round as u64);
        println!("\nGraph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let pairs: Vec<(VertexId, VertexId)> = (0..config.queries)
            .map(|q| {
                let source = (q * 7919) % size;
                let target = (q * 104_729 + size / 2) % size;
                (VertexId::new(source), VertexId::new(target))
            })
            .filter(|(source, target)| source != target)
            .collect();

        let (array_time, array_totals) = benchmark_algorithm(&array, &graph, &pairs);
        let (heap_time, heap_totals) = benchmark_algorithm(&heap, &graph, &pairs);

        let mismatches = array_totals.iter().zip(&heap_totals).filter(|(a, h)| a != h).count();
        if mismatches > 0 {
            println!("WARNING: {} searches disagree on the shortest total", mismatches);
        }

        let speedup = array_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - heap vs array: {:.2}x", speedup);
        results.push((size, array_time, heap_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Array (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, array_time, heap_time, speedup) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            array_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }
}

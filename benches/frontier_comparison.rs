use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weighted_sssp::graph::generators::random_graph;
use weighted_sssp::graph::VertexId;
use weighted_sssp::{ArrayDijkstra, HeapDijkstra, ShortestPathAlgorithm};

fn frontier_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    let array = ArrayDijkstra::<u64>::new();
    let heap = HeapDijkstra::<u64>::new();

    for size in [100usize, 1_000, 5_000] {
        let graph = random_graph(size, size * 4, 100, 17);
        let source = VertexId::new(0);
        let target = VertexId::new(size - 1);

        group.bench_with_input(BenchmarkId::new("array", size), &graph, |b, graph| {
            b.iter(|| array.shortest_path(black_box(graph), source, target))
        });
        group.bench_with_input(BenchmarkId::new("heap", size), &graph, |b, graph| {
            b.iter(|| heap.shortest_path(black_box(graph), source, target))
        });
    }

    group.finish();
}

criterion_group!(benches, frontier_comparison);
criterion_main!(benches);

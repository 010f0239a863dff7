use crate::graph::{DirectedGraph, MutableGraph, VertexId};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random directed graph with `vertices` vertices and `edges` edges.
///
/// Weights are drawn uniformly from `1..=max_weight`. The same seed always
/// produces the same graph, so failures seen in a test or a benchmark can be
/// replayed. Self-loops are skipped, so the edge count may come out slightly
/// lower than requested.
pub fn random_graph(
    vertices: usize,
    edges: usize,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(vertices);
    let mut rng = StdRng::seed_from_u64(seed);

    for value in 0..vertices {
        graph.add_vertex(value);
    }
    if vertices == 0 {
        return graph;
    }

    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            graph.add_edge(VertexId::new(u), VertexId::new(v), weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid where every cell links to its eight
/// neighbours: cardinal moves cost 1.0 and diagonal moves cost 1.4.
///
/// Vertex payloads are the `(x, y)` coordinates; the vertex for a cell is
/// `VertexId::new(y * width + x)`.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<(usize, usize), OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));
        }
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = VertexId::new(y * width + x);
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = VertexId::new(ny as usize * width + nx as usize);
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let first = random_graph(50, 200, 20, 7);
        let second = random_graph(50, 200, 20, 7);

        assert_eq!(first.vertex_count(), 50);
        assert_eq!(first.edge_count(), second.edge_count());
        for v in 0..50 {
            let v = VertexId::new(v);
            let a: Vec<_> = first.outgoing_edges(v).collect();
            let b: Vec<_> = second.outgoing_edges(v).collect();
            assert_eq!(a, b);
            assert!(a.iter().all(|&(target, weight)| target != v && (1..=20).contains(&weight)));
        }
    }

    #[test]
    fn grid_graph_connects_eight_neighbours() {
        let graph = grid_graph(3, 3);
        let centre = VertexId::new(4);

        assert_eq!(graph.vertex_count(), 9);
        assert_eq!(graph.outgoing_edges(centre).count(), 8);
        assert_eq!(graph.outgoing_edges(VertexId::new(0)).count(), 3);
        assert_eq!(graph.value(centre), Some(&(1, 1)));
        assert_eq!(graph.get_edge_weight(VertexId::new(0), centre), Some(OrderedFloat(1.4)));
    }

    #[test]
    fn empty_random_graph() {
        let graph = random_graph(0, 10, 5, 1);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}

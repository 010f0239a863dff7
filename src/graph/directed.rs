use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};
use std::fmt;

/// Identity of a vertex inside one [`DirectedGraph`].
///
/// Two vertices are the same vertex exactly when their IDs match, whatever
/// their payloads hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Position of the vertex in its graph's vertex list
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A directed, weighted link owned by its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub weight: W,
    pub destination: VertexId,
}

/// A graph node: payload plus outgoing edges in insertion order
#[derive(Debug, Clone)]
pub struct Vertex<T, W> {
    id: VertexId,
    value: T,
    edges: Vec<Edge<W>>,
}

impl<T, W> Vertex<T, W> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<T, W> {
    /// Vertex arena; a vertex's ID is its index here
    vertices: Vec<Vertex<T, W>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl<T, W> DirectedGraph<T, W>
where
    T: fmt::Debug,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.vertices.get(id.index())
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T, W>> + '_ {
        self.vertices.iter()
    }

    /// Payload of a vertex
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::value)
    }

    /// Finds the first vertex whose payload equals `value`
    pub fn find(&self, value: &T) -> Option<VertexId>
    where
        T: PartialEq,
    {
        self.vertices
            .iter()
            .find(|vertex| vertex.value == *value)
            .map(|vertex| vertex.id)
    }

    /// Adds an edge after checking both endpoints and the weight
    pub fn try_add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to.index()));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight {
                from: from.index(),
                to: to.index(),
                weight: format!("{:?}", weight),
            });
        }

        let vertex = self
            .vertices
            .get_mut(from.index())
            .ok_or(Error::InvalidVertex(from.index()))?;
        vertex.edges.push(Edge {
            weight,
            destination: to,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.edges.iter())
            .all(|edge| edge.weight >= W::zero())
    }

    /// Checks every edge for a dangling destination or a negative weight.
    ///
    /// The search engine assumes both hold; run this at the construction
    /// boundary when the graph comes from untrusted input.
    pub fn validate(&self) -> Result<()> {
        for vertex in &self.vertices {
            for edge in &vertex.edges {
                if !self.has_vertex(edge.destination) {
                    return Err(Error::InvalidEdge(
                        vertex.id.index(),
                        edge.destination.index(),
                    ));
                }
                if edge.weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: vertex.id.index(),
                        to: edge.destination.index(),
                        weight: format!("{:?}", edge.weight),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<T, W> Default for DirectedGraph<T, W>
where
    T: fmt::Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<W> for DirectedGraph<T, W>
where
    T: fmt::Debug,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(vertex) = self.vertices.get(vertex.index()) {
            Box::new(vertex.edges.iter().map(|edge| (edge.destination, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }
}

impl<T, W> MutableGraph<T, W> for DirectedGraph<T, W>
where
    T: fmt::Debug,
    W: Weight,
{
    fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            id,
            value,
            edges: Vec::new(),
        });
        id
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        match self.vertices.get_mut(from.index()) {
            Some(vertex) => {
                vertex.edges.push(Edge {
                    weight,
                    destination: to,
                });
                self.edge_count += 1;
            }
            None => log::warn!("dropping edge {} -> {}: source is not in the graph", from, to),
        }
    }
}

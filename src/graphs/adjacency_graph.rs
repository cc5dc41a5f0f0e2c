use std::mem::size_of;

use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, Graph, TaillessEdge, Vertex, Weight};
use crate::error::GraphError;

/// Undirected weighted graph stored as one adjacency sequence per vertex.
///
/// The number of vertices is fixed at construction. Self-loops and parallel
/// edges are kept as inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<TaillessEdge>>,
}

impl AdjacencyGraph {
    pub fn new(number_of_vertices: u32) -> AdjacencyGraph {
        AdjacencyGraph {
            adjacency: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<AdjacencyGraph, GraphError> {
        let mut graph = AdjacencyGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `{tail, head}`: `head` is appended to the
    /// adjacency of `tail` and `tail` to the adjacency of `head`.
    pub fn add_edge(
        &mut self,
        tail: Vertex,
        head: Vertex,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        self.insert_edge(tail, head, weight);
        Ok(())
    }

    /// Both endpoints must be in range.
    pub(crate) fn insert_edge(&mut self, tail: Vertex, head: Vertex, weight: Weight) {
        self.adjacency[tail as usize].push(TaillessEdge::new(head, weight));
        self.adjacency[head as usize].push(TaillessEdge::new(tail, weight));
    }

    /// Heap bytes held by the adjacency sequences, including unused capacity.
    pub fn allocated_bytes(&self) -> usize {
        self.adjacency.capacity() * size_of::<Vec<TaillessEdge>>()
            + self
                .adjacency
                .iter()
                .map(|edges| edges.capacity() * size_of::<TaillessEdge>())
                .sum::<usize>()
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_vertices(&self) -> u32 {
        self.adjacency.len() as u32
    }

    fn neighbors(&self, vertex: Vertex) -> Result<&[TaillessEdge], GraphError> {
        self.adjacency
            .get(vertex as usize)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            })
    }

    fn number_of_adjacency_entries(&self) -> u64 {
        self.adjacency.iter().map(|edges| edges.len() as u64).sum()
    }
}

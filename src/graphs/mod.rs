use std::ops::Range;

use crate::error::GraphError;

pub mod adjacency_graph;
pub mod edge;
pub mod graph_factory;
pub mod graph_functions;

pub use adjacency_graph::AdjacencyGraph;
pub use edge::{TaillessEdge, WeightedEdge};

pub type Vertex = u32;
pub type Weight = u32;

/// Read access to an undirected weighted graph.
///
/// Every undirected edge is visible from both of its endpoints, so iterating
/// the adjacency of all vertices yields each edge twice.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Adjacency sequence of `vertex` in insertion order.
    fn neighbors(&self, vertex: Vertex) -> Result<&[TaillessEdge], GraphError>;

    /// Edges leaving `tail`, failing like [`Graph::neighbors`] for a vertex
    /// that is not part of the graph.
    fn edges(
        &self,
        tail: Vertex,
    ) -> Result<Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>, GraphError> {
        // Define a struct for iterating over edges with the same tail. Struct is needed
        // as tail would otherwise not live enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edge_iter = self.neighbors(tail)?.iter();

        Ok(Box::new(EdgeIterator { edge_iter, tail }))
    }

    /// Number of stored adjacency entries, i.e. twice the number of edges.
    fn number_of_adjacency_entries(&self) -> u64;

    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex < self.number_of_vertices() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            })
        }
    }
}

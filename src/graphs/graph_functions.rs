use std::collections::VecDeque;

use itertools::Itertools;
use rayon::prelude::*;

use super::{edge::WeightedEdge, Graph, Vertex, Weight};
use crate::error::GraphError;

/// All adjacency entries as edges. Every undirected edge appears once per
/// direction.
pub fn all_edges(graph: &dyn Graph) -> Result<Vec<WeightedEdge>, GraphError> {
    graph
        .vertices()
        .map(|vertex| graph.edges(vertex))
        .flatten_ok()
        .collect()
}

/// Each undirected edge once, with `tail <= head`. Self-loops are reported
/// once per insertion.
pub fn undirected_edges(graph: &dyn Graph) -> Result<Vec<WeightedEdge>, GraphError> {
    let mut self_loop_entries = 0usize;
    graph
        .vertices()
        .map(|vertex| graph.edges(vertex))
        .flatten_ok()
        .filter_ok(|edge| {
            if edge.is_self_loop() {
                // a self-loop is stored twice in its own adjacency
                self_loop_entries += 1;
                self_loop_entries % 2 == 1
            } else {
                edge.tail < edge.head
            }
        })
        .collect()
}

/// Flattened multiset of stored edge weights, each undirected edge counted
/// twice.
pub fn edge_weights(graph: &dyn Graph) -> Result<Vec<Weight>, GraphError> {
    let weights_per_vertex = graph
        .vertices()
        .into_par_iter()
        .map(|vertex| {
            let neighbors = graph.neighbors(vertex)?;
            Ok(neighbors.iter().map(|edge| edge.weight).collect_vec())
        })
        .collect::<Result<Vec<_>, GraphError>>()?;
    Ok(weights_per_vertex.concat())
}

/// Ratio of stored adjacency entries to `V * (V - 1)`. `None` for graphs with
/// fewer than two vertices.
pub fn graph_density(graph: &dyn Graph) -> Option<f64> {
    if graph.number_of_vertices() < 2 {
        return None;
    }
    let number_of_vertices = graph.number_of_vertices() as f64;
    let max_entries = number_of_vertices * (number_of_vertices - 1.0);
    Some(graph.number_of_adjacency_entries() as f64 / max_entries)
}

pub fn average_degree(graph: &dyn Graph) -> Option<f64> {
    if graph.number_of_vertices() == 0 {
        return None;
    }
    Some(graph.number_of_adjacency_entries() as f64 / graph.number_of_vertices() as f64)
}

/// Vertices reachable from `start` in breadth first order, `start` included.
pub fn reachable_vertices(graph: &dyn Graph, start: Vertex) -> Result<Vec<Vertex>, GraphError> {
    graph.check_vertex(start)?;

    let mut seen = vec![false; graph.number_of_vertices() as usize];
    let mut queue = VecDeque::from([start]);
    let mut reachable = Vec::new();
    seen[start as usize] = true;

    while let Some(tail) = queue.pop_front() {
        reachable.push(tail);
        for edge in graph.neighbors(tail)? {
            if !seen[edge.head as usize] {
                seen[edge.head as usize] = true;
                queue.push_back(edge.head);
            }
        }
    }

    Ok(reachable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::AdjacencyGraph;

    #[test]
    fn density_counts_both_directions() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(0, 2, 1).unwrap();

        assert_eq!(graph_density(&graph), Some(1.0));
    }

    #[test]
    fn density_is_undefined_below_two_vertices() {
        assert_eq!(graph_density(&AdjacencyGraph::new(0)), None);
        assert_eq!(graph_density(&AdjacencyGraph::new(1)), None);
    }

    #[test]
    fn undirected_edges_reports_each_edge_once() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(2, 0, 4).unwrap();
        graph.add_edge(1, 1, 6).unwrap();

        let edges = undirected_edges(&graph).unwrap();
        assert_eq!(
            edges,
            vec![WeightedEdge::new(0, 2, 4), WeightedEdge::new(1, 1, 6)]
        );
        assert_eq!(all_edges(&graph).unwrap().len(), 4);
    }

    #[test]
    fn reachable_vertices_stay_in_component() {
        let mut graph = AdjacencyGraph::new(5);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(3, 4, 1).unwrap();

        assert_eq!(reachable_vertices(&graph, 0).unwrap(), vec![0, 1, 2]);
        assert_eq!(reachable_vertices(&graph, 4).unwrap(), vec![4, 3]);
        assert!(reachable_vertices(&graph, 5).is_err());
    }
}

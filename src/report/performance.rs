use std::{
    mem::size_of,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tracing::{info, warn};

use super::{
    statistics::Statistics,
    table::{display_option, display_seconds},
};
use crate::{
    config::{QueueKind, VisitedKind},
    error::GraphError,
    graphs::{
        graph_functions::{edge_weights, graph_density},
        AdjacencyGraph, Graph, Vertex, Weight,
    },
    spanning::{
        collections::{frontier_queue::FrontierQueue, visited_vertices::VisitedVertices},
        prim::prim_with,
        SpanningTree,
    },
};

/// Wraps a frontier queue and records how it is used.
pub struct InstrumentedFrontier<'a> {
    queue: &'a mut dyn FrontierQueue,
    pub number_of_inserts: usize,
    pub number_of_pops: usize,
    pub peak_len: usize,
}

impl<'a> InstrumentedFrontier<'a> {
    pub fn new(queue: &'a mut dyn FrontierQueue) -> Self {
        InstrumentedFrontier {
            queue,
            number_of_inserts: 0,
            number_of_pops: 0,
            peak_len: 0,
        }
    }
}

impl<'a> FrontierQueue for InstrumentedFrontier<'a> {
    fn clear(&mut self) {
        self.number_of_inserts = 0;
        self.number_of_pops = 0;
        self.peak_len = 0;
        self.queue.clear()
    }

    fn insert(&mut self, vertex: Vertex, weight: Weight) {
        self.number_of_inserts += 1;
        self.queue.insert(vertex, weight);
        self.peak_len = self.peak_len.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<(Vertex, Weight)> {
        let entry = self.queue.pop()?;
        self.number_of_pops += 1;
        Some(entry)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn entry_bytes(&self) -> usize {
        self.queue.entry_bytes()
    }
}

/// One line of the benchmark report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct PerformanceRow {
    #[tabled(rename = "Vertices")]
    pub vertices: u32,
    #[tabled(rename = "Graph Type")]
    pub graph_type: String,
    #[tabled(rename = "Execution Time (s)", display_with = "display_seconds")]
    pub execution_time: f64,
    #[tabled(rename = "Space Complexity (bytes)")]
    pub memory_bytes: usize,
    #[tabled(rename = "Graph Density", display_with = "display_option")]
    pub density: Option<f64>,
    #[tabled(rename = "Mean Edge Weight", display_with = "display_option")]
    pub weight_mean: Option<f64>,
    #[tabled(rename = "Median Edge Weight", display_with = "display_option")]
    pub weight_median: Option<f64>,
    #[tabled(
        rename = "Edge Weight Standard Deviation",
        display_with = "display_option"
    )]
    pub weight_standard_deviation: Option<f64>,
    #[tabled(rename = "Tree Vertices")]
    pub tree_vertices: usize,
    #[tabled(rename = "Tree Weight")]
    pub tree_weight: u64,
    #[tabled(rename = "Frontier Peak")]
    pub frontier_peak: usize,
}

/// Estimated bytes held while computing `tree`: adjacency storage, the tree,
/// the visited markers and the frontier at its largest.
pub fn memory_footprint(
    graph: &AdjacencyGraph,
    tree: &SpanningTree,
    visited: &dyn VisitedVertices,
    frontier_peak_bytes: usize,
) -> usize {
    size_of::<AdjacencyGraph>()
        + graph.allocated_bytes()
        + size_of::<SpanningTree>()
        + tree.allocated_bytes()
        + visited.allocated_bytes()
        + frontier_peak_bytes
}

/// Times a spanning tree computation from vertex 0 and describes the input
/// graph.
pub fn analyze_performance(
    graph: &AdjacencyGraph,
    queue_kind: QueueKind,
    visited_kind: VisitedKind,
) -> Result<(PerformanceRow, SpanningTree), GraphError> {
    let mut queue = queue_kind.frontier();
    let mut visited = visited_kind.visited(graph);
    let mut frontier = InstrumentedFrontier::new(&mut *queue);

    let start = Instant::now();
    let tree = prim_with(graph, &mut frontier, &mut *visited, 0)?;
    let execution_time: Duration = start.elapsed();

    let frontier_peak = frontier.peak_len;
    let frontier_inserts = frontier.number_of_inserts;
    let frontier_pops = frontier.number_of_pops;
    let frontier_peak_bytes = frontier_peak * frontier.entry_bytes();
    if tree.len() < graph.number_of_vertices() as usize {
        warn!(
            vertices = graph.number_of_vertices(),
            tree_vertices = tree.len(),
            "graph is not connected, tree only spans the component of vertex 0"
        );
    }

    let statistics = Statistics::from_weights(&edge_weights(graph)?);
    let row = PerformanceRow {
        vertices: graph.number_of_vertices(),
        graph_type: "Undirected".to_string(),
        execution_time: execution_time.as_secs_f64(),
        memory_bytes: memory_footprint(graph, &tree, &*visited, frontier_peak_bytes),
        density: graph_density(graph),
        weight_mean: statistics.mean,
        weight_median: statistics.median,
        weight_standard_deviation: statistics.standard_deviation,
        tree_vertices: tree.len(),
        tree_weight: tree.total_weight(),
        frontier_peak,
    };

    info!(
        vertices = row.vertices,
        execution_time = ?execution_time,
        tree_weight = row.tree_weight,
        frontier_inserts,
        frontier_pops,
        stale_pops = frontier_pops.saturating_sub(tree.len()),
        "analyzed graph"
    );

    Ok((row, tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanning::collections::frontier_queue::FrontierQueueBinaryHeap;

    fn triangle() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(0, 2, 3).unwrap();
        graph
    }

    #[test]
    fn row_describes_graph_and_tree() {
        let (row, tree) =
            analyze_performance(&triangle(), QueueKind::BinaryHeap, VisitedKind::Vec).unwrap();

        assert_eq!(row.vertices, 3);
        assert_eq!(row.graph_type, "Undirected");
        assert_eq!(row.density, Some(1.0));
        assert_eq!(row.weight_mean, Some(8.0 / 3.0));
        assert_eq!(row.weight_median, Some(3.0));
        assert_eq!(row.tree_vertices, 3);
        assert_eq!(row.tree_weight, 4);
        assert_eq!(tree.total_weight(), 4);
        assert!(row.memory_bytes > 0);
        assert!(row.execution_time >= 0.0);
    }

    #[test]
    fn decrease_key_bounds_frontier() {
        let mut graph = AdjacencyGraph::new(2);
        for weight in (1..=10).rev() {
            graph.add_edge(0, 1, weight).unwrap();
        }

        let (lazy, _) =
            analyze_performance(&graph, QueueKind::BinaryHeap, VisitedKind::Vec).unwrap();
        let (keyed, _) = analyze_performance(&graph, QueueKind::Keyed, VisitedKind::BitSet).unwrap();

        assert_eq!(lazy.frontier_peak, 10);
        assert_eq!(keyed.frontier_peak, 1);
        assert_eq!(lazy.tree_weight, keyed.tree_weight);
    }

    #[test]
    fn empty_graph_has_no_statistics() {
        let (row, tree) = analyze_performance(
            &AdjacencyGraph::new(0),
            QueueKind::BinaryHeap,
            VisitedKind::Vec,
        )
        .unwrap();

        assert!(tree.is_empty());
        assert_eq!(row.density, None);
        assert_eq!(row.weight_mean, None);
        assert_eq!(row.weight_standard_deviation, None);
    }

    #[test]
    fn counting_frontier_tracks_usage() {
        let mut queue = FrontierQueueBinaryHeap::new();
        let mut frontier = InstrumentedFrontier::new(&mut queue);
        frontier.insert(0, 1);
        frontier.insert(1, 1);
        frontier.pop();

        assert_eq!(frontier.number_of_inserts, 2);
        assert_eq!(frontier.number_of_pops, 1);
        assert_eq!(frontier.peak_len, 2);
        assert_eq!(frontier.len(), 1);
    }
}

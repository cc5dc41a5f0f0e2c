use tracing::debug;

use super::{
    collections::{
        frontier_queue::{FrontierQueue, FrontierQueueBinaryHeap},
        visited_vertices::{VisitedVertices, VisitedVerticesVec},
    },
    SpanningTree,
};
use crate::{
    error::GraphError,
    graphs::{Graph, Vertex},
};

/// Minimum spanning tree of the component containing vertex 0.
pub fn prim(graph: &dyn Graph) -> Result<SpanningTree, GraphError> {
    prim_from(graph, 0)
}

/// Minimum spanning tree of the component containing `start`.
///
/// An empty graph yields an empty tree whatever `start` is. Otherwise `start`
/// has to be a vertex of the graph.
pub fn prim_from(graph: &dyn Graph, start: Vertex) -> Result<SpanningTree, GraphError> {
    let mut queue = FrontierQueueBinaryHeap::new();
    let mut visited = VisitedVerticesVec::new(graph);
    prim_with(graph, &mut queue, &mut visited, start)
}

/// Runs Prim's algorithm from `start` with caller owned collections.
///
/// `queue` and `visited` are not cleared, neither before nor after the run.
/// Vertices already marked in `visited` are treated as part of another tree
/// and are never entered. `queue` is empty when the function returns.
/// `visited` has to cover exactly the vertices of `graph`.
pub fn prim_with(
    graph: &dyn Graph,
    queue: &mut dyn FrontierQueue,
    visited: &mut dyn VisitedVertices,
    start: Vertex,
) -> Result<SpanningTree, GraphError> {
    let mut tree = SpanningTree::new();
    if graph.number_of_vertices() == 0 {
        return Ok(tree);
    }
    check_visited(graph, visited)?;
    graph.check_vertex(start)?;

    queue.insert(start, 0);

    while let Some((tail, weight)) = queue.pop() {
        // entries of vertices that joined the tree after being queued are stale
        if visited.visit(tail) {
            continue;
        }

        tree.push(tail, weight);

        for edge in graph.neighbors(tail)? {
            if !visited.is_visited(edge.head) {
                queue.insert(edge.head, edge.weight);
            }
        }
    }

    debug!(
        start,
        tree_vertices = tree.len(),
        tree_weight = tree.total_weight(),
        "prim finished"
    );

    Ok(tree)
}

/// Minimum spanning forest: one tree per connected component, each grown
/// from the smallest vertex not covered by an earlier tree.
pub fn minimum_spanning_forest(graph: &dyn Graph) -> Result<Vec<SpanningTree>, GraphError> {
    let mut queue = FrontierQueueBinaryHeap::new();
    let mut visited = VisitedVerticesVec::new(graph);
    minimum_spanning_forest_with(graph, &mut queue, &mut visited)
}

/// Minimum spanning forest with caller owned collections. Vertices already
/// marked in `visited` are skipped.
pub fn minimum_spanning_forest_with(
    graph: &dyn Graph,
    queue: &mut dyn FrontierQueue,
    visited: &mut dyn VisitedVertices,
) -> Result<Vec<SpanningTree>, GraphError> {
    check_visited(graph, visited)?;

    let mut forest = Vec::new();
    for seed in graph.vertices() {
        if visited.is_visited(seed) {
            continue;
        }
        forest.push(prim_with(graph, queue, visited, seed)?);
    }

    debug!(trees = forest.len(), "spanning forest finished");
    Ok(forest)
}

fn check_visited(graph: &dyn Graph, visited: &dyn VisitedVertices) -> Result<(), GraphError> {
    if visited.len() != graph.number_of_vertices() as usize {
        return Err(GraphError::VisitedSizeMismatch {
            marked_vertices: visited.len(),
            number_of_vertices: graph.number_of_vertices(),
        });
    }
    Ok(())
}

use ahash::{HashSet, HashSetExt};

use super::SpanningTree;
use crate::graphs::{graph_functions::reachable_vertices, Graph, Vertex};

/// Checks that `tree` is a well formed result of growing a spanning tree from
/// `start`. Minimality is not checked.
pub fn validate_spanning_tree(
    graph: &dyn Graph,
    start: Vertex,
    tree: &SpanningTree,
) -> Result<(), String> {
    if graph.number_of_vertices() == 0 {
        if tree.is_empty() {
            return Ok(());
        }
        return Err("tree of an empty graph is not empty".to_string());
    }

    let reachable = reachable_vertices(graph, start).map_err(|error| error.to_string())?;

    // Ensure the tree starts at its root with no incoming edge.
    match tree.entries().first() {
        Some(root) if root.vertex == start && root.weight == 0 => {}
        Some(root) => {
            return Err(format!(
                "tree starts with ({}, {}) instead of ({}, 0)",
                root.vertex, root.weight, start
            ))
        }
        None => return Err("tree is empty".to_string()),
    }

    let mut in_tree = HashSet::with_capacity(tree.len());
    for entry in tree.entries() {
        if in_tree.contains(&entry.vertex) {
            return Err(format!("vertex {} appears twice", entry.vertex));
        }

        // Check that an edge of this weight joins the vertex to the tree.
        let mut edges = graph.edges(entry.vertex).map_err(|error| error.to_string())?;
        if !in_tree.is_empty()
            && !edges.any(|edge| edge.weight == entry.weight && in_tree.contains(&edge.head))
        {
            return Err(format!(
                "no edge of weight {} joins {} to the tree",
                entry.weight, entry.vertex
            ));
        }

        in_tree.insert(entry.vertex);
    }

    if tree.len() != reachable.len() {
        return Err(format!(
            "tree has {} vertices but {} are reachable from {}",
            tree.len(),
            reachable.len(),
            start
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::AdjacencyGraph,
        spanning::{prim::prim, TreeEntry},
    };

    fn path_graph() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 5).unwrap();
        graph
    }

    fn tree(entries: &[(Vertex, u32)]) -> SpanningTree {
        entries
            .iter()
            .map(|&(vertex, weight)| TreeEntry::new(vertex, weight))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn prim_result_is_valid() {
        let graph = path_graph();
        assert_eq!(validate_spanning_tree(&graph, 0, &prim(&graph).unwrap()), Ok(()));
    }

    #[test]
    fn detects_malformed_trees() {
        let graph = path_graph();

        assert!(validate_spanning_tree(&graph, 0, &tree(&[(1, 0), (0, 2), (2, 5)])).is_err());
        assert!(validate_spanning_tree(&graph, 0, &tree(&[(0, 0), (1, 2), (1, 2)])).is_err());
        assert!(validate_spanning_tree(&graph, 0, &tree(&[(0, 0), (2, 5), (1, 5)])).is_err());
        assert!(validate_spanning_tree(&graph, 0, &tree(&[(0, 0), (1, 2)])).is_err());
        assert!(validate_spanning_tree(&graph, 0, &SpanningTree::new()).is_err());
    }

    #[test]
    fn empty_graph_needs_empty_tree() {
        let graph = AdjacencyGraph::new(0);
        assert!(validate_spanning_tree(&graph, 0, &SpanningTree::new()).is_ok());
        assert!(validate_spanning_tree(&graph, 0, &tree(&[(0, 0)])).is_err());
    }
}

#![allow(dead_code)]

use prim_mst::graphs::{graph_functions::undirected_edges, AdjacencyGraph, Graph, Vertex};

// https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
pub fn get_small_graph() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(11);
    for (tail, head, weight) in [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ] {
        graph.add_edge(tail, head, weight).unwrap();
    }
    graph
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);
        if px == py {
            return false;
        }
        match self.rank[px].cmp(&self.rank[py]) {
            std::cmp::Ordering::Less => self.parent[px] = py,
            std::cmp::Ordering::Greater => self.parent[py] = px,
            std::cmp::Ordering::Equal => {
                self.parent[py] = px;
                self.rank[px] += 1;
            }
        }
        true
    }
}

/// Weight of a minimum spanning tree of the component of `start`, computed
/// with Kruskal's algorithm as an independent reference.
pub fn kruskal_weight(graph: &AdjacencyGraph, start: Vertex) -> u64 {
    let mut edges = undirected_edges(graph).unwrap();
    edges.sort_by_key(|edge| edge.weight);

    let mut union_find = UnionFind::new(graph.number_of_vertices() as usize);
    let mut weights = Vec::new();
    for edge in edges {
        if union_find.union(edge.tail as usize, edge.head as usize) {
            weights.push((edge.tail, edge.weight));
        }
    }

    let root = union_find.find(start as usize);
    weights
        .into_iter()
        .filter(|&(tail, _)| union_find.find(tail as usize) == root)
        .map(|(_, weight)| weight as u64)
        .sum()
}

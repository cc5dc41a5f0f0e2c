use std::mem::{size_of, size_of_val};

use fixedbitset::FixedBitSet;

use crate::graphs::{Graph, Vertex};

/// Marks vertices that already joined a spanning tree.
pub trait VisitedVertices {
    /// Marks `vertex` and returns whether it was marked before.
    fn visit(&mut self, vertex: Vertex) -> bool;

    fn is_visited(&self, vertex: Vertex) -> bool;

    fn clear(&mut self);

    /// Number of vertices that can be marked.
    fn len(&self) -> usize;

    fn allocated_bytes(&self) -> usize;
}

pub struct VisitedVerticesVec {
    visited: Vec<bool>,
}

impl VisitedVerticesVec {
    pub fn new(graph: &dyn Graph) -> Self {
        VisitedVerticesVec {
            visited: vec![false; graph.number_of_vertices() as usize],
        }
    }
}

impl VisitedVertices for VisitedVerticesVec {
    fn visit(&mut self, vertex: Vertex) -> bool {
        let is_visited = self.visited[vertex as usize];
        self.visited[vertex as usize] = true;
        is_visited
    }

    fn is_visited(&self, vertex: Vertex) -> bool {
        self.visited[vertex as usize]
    }

    fn clear(&mut self) {
        self.visited.fill(false);
    }

    fn len(&self) -> usize {
        self.visited.len()
    }

    fn allocated_bytes(&self) -> usize {
        self.visited.capacity() * size_of::<bool>()
    }
}

pub struct VisitedVerticesBitSet {
    visited: FixedBitSet,
}

impl VisitedVerticesBitSet {
    pub fn new(graph: &dyn Graph) -> Self {
        VisitedVerticesBitSet {
            visited: FixedBitSet::with_capacity(graph.number_of_vertices() as usize),
        }
    }
}

impl VisitedVertices for VisitedVerticesBitSet {
    fn visit(&mut self, vertex: Vertex) -> bool {
        self.visited.put(vertex as usize)
    }

    fn is_visited(&self, vertex: Vertex) -> bool {
        self.visited.contains(vertex as usize)
    }

    fn clear(&mut self) {
        self.visited.clear()
    }

    fn len(&self) -> usize {
        self.visited.len()
    }

    fn allocated_bytes(&self) -> usize {
        size_of_val(self.visited.as_slice())
    }
}

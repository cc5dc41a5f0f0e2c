use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::graphs::{Vertex, Weight};

pub mod collections;
pub mod prim;
pub mod validation;

/// A vertex together with the weight of the edge that pulled it into the tree.
/// The root carries weight 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeEntry {
    pub vertex: Vertex,
    pub weight: Weight,
}

impl TreeEntry {
    pub fn new(vertex: Vertex, weight: Weight) -> TreeEntry {
        TreeEntry { vertex, weight }
    }
}

/// Vertices of a minimum spanning tree in the order they joined it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    entries: Vec<TreeEntry>,
}

impl SpanningTree {
    pub fn new() -> SpanningTree {
        SpanningTree::default()
    }

    pub fn push(&mut self, vertex: Vertex, weight: Weight) {
        self.entries.push(TreeEntry::new(vertex, weight));
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.entries.iter().map(|entry| entry.vertex)
    }

    pub fn root(&self) -> Option<Vertex> {
        self.entries.first().map(|entry| entry.vertex)
    }

    /// Sum of all connecting edge weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|entry| entry.weight as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn allocated_bytes(&self) -> usize {
        self.entries.capacity() * size_of::<TreeEntry>()
    }
}

impl From<Vec<TreeEntry>> for SpanningTree {
    fn from(entries: Vec<TreeEntry>) -> Self {
        SpanningTree { entries }
    }
}

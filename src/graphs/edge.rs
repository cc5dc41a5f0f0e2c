use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }
}

/// Adjacency entry: the neighbor and the weight of the connecting edge. The
/// tail is implied by the adjacency sequence the entry is stored in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn new(head: Vertex, weight: Weight) -> TaillessEdge {
        TaillessEdge { head, weight }
    }

    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

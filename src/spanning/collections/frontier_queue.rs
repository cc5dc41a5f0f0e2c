use std::{cmp::Reverse, collections::BinaryHeap, mem::size_of};

use keyed_priority_queue::{Entry, KeyedPriorityQueue};

use crate::graphs::{Vertex, Weight};

/// A min priority queue of candidate `(vertex, weight)` pairs, the frontier of
/// a growing spanning tree.
///
/// Entries are popped by ascending weight. Equal weights are popped by
/// ascending vertex, which makes tree construction order deterministic.
///
/// The implementing structs might or might not use a decrease key operation.
pub trait FrontierQueue {
    /// Clears all stored entries, preparing for a new run.
    fn clear(&mut self);

    fn insert(&mut self, vertex: Vertex, weight: Weight);

    /// Removes and returns the entry with the smallest weight or none if the
    /// queue is empty.
    fn pop(&mut self) -> Option<(Vertex, Weight)>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Estimated bytes one queued entry occupies.
    fn entry_bytes(&self) -> usize;
}

/// Binary heap without decrease key. A vertex may be inserted several times;
/// outdated entries stay in the heap until they are popped.
#[derive(Clone)]
pub struct FrontierQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Weight, Vertex)>>,
}

impl Default for FrontierQueueBinaryHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontierQueueBinaryHeap {
    pub fn new() -> Self {
        FrontierQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl FrontierQueue for FrontierQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, weight: Weight) {
        self.heap.push(Reverse((weight, vertex)));
    }

    fn pop(&mut self) -> Option<(Vertex, Weight)> {
        let Reverse((weight, vertex)) = self.heap.pop()?;

        Some((vertex, weight))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn entry_bytes(&self) -> usize {
        size_of::<Reverse<(Weight, Vertex)>>()
    }
}

/// Keyed queue with decrease key. Holds at most one entry per vertex, so its
/// size is bounded by the number of vertices.
pub struct FrontierQueueKeyed {
    queue: KeyedPriorityQueue<Vertex, Reverse<(Weight, Vertex)>>,
}

impl Default for FrontierQueueKeyed {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontierQueueKeyed {
    pub fn new() -> Self {
        FrontierQueueKeyed {
            queue: KeyedPriorityQueue::new(),
        }
    }
}

impl FrontierQueue for FrontierQueueKeyed {
    fn clear(&mut self) {
        self.queue = KeyedPriorityQueue::new();
    }

    fn insert(&mut self, vertex: Vertex, weight: Weight) {
        match self.queue.entry(vertex) {
            Entry::Vacant(entry) => {
                entry.set_priority(Reverse((weight, vertex)));
            }
            Entry::Occupied(entry) => {
                if Reverse((weight, vertex)) > *entry.get_priority() {
                    entry.set_priority(Reverse((weight, vertex)));
                }
            }
        };
    }

    fn pop(&mut self) -> Option<(Vertex, Weight)> {
        let (vertex, Reverse((weight, _))) = self.queue.pop()?;
        Some((vertex, weight))
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn entry_bytes(&self) -> usize {
        // heap slot plus key map slot
        size_of::<(Vertex, Reverse<(Weight, Vertex)>)>() + size_of::<(Vertex, usize)>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut dyn FrontierQueue) -> Vec<(Vertex, Weight)> {
        std::iter::from_fn(|| queue.pop()).collect()
    }

    #[test]
    fn binary_heap_pops_by_weight_then_vertex() {
        let mut queue = FrontierQueueBinaryHeap::new();
        queue.insert(4, 2);
        queue.insert(1, 7);
        queue.insert(3, 2);
        queue.insert(0, 9);

        assert_eq!(drain(&mut queue), vec![(3, 2), (4, 2), (1, 7), (0, 9)]);
    }

    #[test]
    fn binary_heap_keeps_outdated_entries() {
        let mut queue = FrontierQueueBinaryHeap::new();
        queue.insert(1, 5);
        queue.insert(1, 3);

        assert_eq!(queue.len(), 2);
        assert_eq!(drain(&mut queue), vec![(1, 3), (1, 5)]);
    }

    #[test]
    fn keyed_queue_only_decreases() {
        let mut queue = FrontierQueueKeyed::new();
        queue.insert(1, 5);
        queue.insert(1, 3);
        queue.insert(1, 8);
        queue.insert(2, 3);

        assert_eq!(queue.len(), 2);
        assert_eq!(drain(&mut queue), vec![(1, 3), (2, 3)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_empties_queues() {
        let mut heap = FrontierQueueBinaryHeap::new();
        let mut keyed = FrontierQueueKeyed::new();
        for queue in [&mut heap as &mut dyn FrontierQueue, &mut keyed] {
            queue.insert(0, 1);
            queue.clear();
            assert!(queue.is_empty());
            assert_eq!(queue.pop(), None);
        }
    }
}

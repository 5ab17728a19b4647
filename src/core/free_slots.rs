use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority queue over free slot numbers.
#[derive(Debug, Default, Clone)]
pub struct FreeSlots {
    heap: BinaryHeap<Reverse<usize>>,
}

impl FreeSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every slot in `1..=capacity` free.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: (1..=capacity).map(Reverse).collect(),
        }
    }

    /// Removes and returns the lowest free slot number.
    pub fn take_nearest(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(slot)| slot)
    }

    pub fn release(&mut self, slot: usize) {
        self.heap.push(Reverse(slot));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

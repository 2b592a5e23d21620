//! Best-first frontier ordered by bound.
//!
//! Equal bounds pop in insertion order, so a given input always yields the
//! same expansion sequence.

use super::node::SearchNode;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct FrontierEntry {
    seq: u64,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // `BinaryHeap` is a max-heap: greatest bound first, then lowest seq.
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .bound
            .total_cmp(&other.node.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pending nodes, highest bound first.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. O(log m).
    pub fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { seq, node });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the node with the greatest bound.
    pub fn pop_max(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier ever reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graphs::Weight;

pub mod heap_queue;
pub mod keyed_queue;

/// A mutable min-priority queue over nodes.
///
/// Nodes with equal priority leave the queue in the order they were added.
/// Decreasing a priority keeps the node's place among its equals, so the
/// first discovered node wins every tie.
pub trait MinimumPriorityQueue<N> {
    /// Inserts a node that is not yet queued.
    fn add(&mut self, node: N, priority: Weight);

    /// Lowers the priority of a queued node. Only ever called with a
    /// priority strictly smaller than the current one.
    fn decrease_priority(&mut self, node: &N, priority: Weight);

    /// Removes and returns the node with the smallest priority.
    fn extract_minimum(&mut self) -> Option<N>;

    /// The node with the smallest priority, without removing it.
    fn min(&self) -> Option<&N>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A new, empty queue with the same configuration as `self`.
    fn spawn(&self) -> Self
    where
        Self: Sized;
}

/// Ordering key of a queued node: priority first, insertion order second.
///
/// The ordering is flipped so that max-heaps pop the smallest key.
#[derive(Clone, Copy, Debug)]
pub struct QueueKey {
    pub priority: Weight,
    pub sequence: u64,
}

impl QueueKey {
    pub fn new(priority: Weight, sequence: u64) -> QueueKey {
        QueueKey { priority, sequence }
    }
}

impl Ord for QueueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on both fields.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueKey {}

/// Queue implementation selectable at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum QueueKind {
    /// Addressable heap with in-place decrease-key.
    #[default]
    Keyed,
    /// Binary heap that re-inserts on decrease-key and skips stale entries.
    Heap,
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::QueueKey;

    #[test]
    fn smaller_priority_pops_first() {
        let mut heap = BinaryHeap::from([QueueKey::new(3.0, 0), QueueKey::new(1.5, 1)]);
        assert_eq!(heap.pop().map(|key| key.priority), Some(1.5));
    }

    #[test]
    fn equal_priority_pops_in_insertion_order() {
        let mut heap = BinaryHeap::from([
            QueueKey::new(2.0, 7),
            QueueKey::new(2.0, 3),
            QueueKey::new(2.0, 5),
        ]);
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|key| key.sequence)).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }
}

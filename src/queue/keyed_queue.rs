use ahash::RandomState;
use priority_queue::PriorityQueue;

use super::{MinimumPriorityQueue, QueueKey};
use crate::graphs::{Node, Weight};

/// Addressable heap backed by the `priority-queue` crate.
#[derive(Clone)]
pub struct KeyedQueue<N: Node> {
    queue: PriorityQueue<N, QueueKey, RandomState>,
    capacity: usize,
    next_sequence: u64,
}

impl<N: Node> Default for KeyedQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> KeyedQueue<N> {
    pub fn new() -> KeyedQueue<N> {
        Self::with_capacity(0)
    }

    /// Every queue spawned from this one preallocates `capacity` slots.
    pub fn with_capacity(capacity: usize) -> KeyedQueue<N> {
        KeyedQueue {
            queue: PriorityQueue::with_capacity_and_default_hasher(capacity),
            capacity,
            next_sequence: 0,
        }
    }
}

impl<N: Node> MinimumPriorityQueue<N> for KeyedQueue<N> {
    fn add(&mut self, node: N, priority: Weight) {
        let key = QueueKey::new(priority, self.next_sequence);
        self.next_sequence += 1;
        self.queue.push(node, key);
    }

    fn decrease_priority(&mut self, node: &N, priority: Weight) {
        let Some(sequence) = self.queue.get_priority(node).map(|key| key.sequence) else {
            return;
        };
        self.queue
            .change_priority(node, QueueKey::new(priority, sequence));
    }

    fn extract_minimum(&mut self) -> Option<N> {
        let (node, _) = self.queue.pop()?;
        Some(node)
    }

    fn min(&self) -> Option<&N> {
        let (node, _) = self.queue.peek()?;
        Some(node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn spawn(&self) -> Self {
        Self::with_capacity(self.capacity)
    }
}

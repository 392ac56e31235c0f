use std::{cmp::Ordering, collections::BinaryHeap};

use ahash::{HashMap, HashMapExt};

use super::{MinimumPriorityQueue, QueueKey};
use crate::graphs::{Node, Weight};

#[derive(Clone)]
struct HeapEntry<N> {
    key: QueueKey,
    node: N,
}

// Entries are ordered by key only; the node takes no part in the ordering.
impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for HeapEntry<N> {}

/// Binary heap without decrease-key.
///
/// Decreasing a priority pushes a second entry; the outdated one stays in the
/// heap and is dropped once it reaches the top. The top entry is always live.
#[derive(Clone)]
pub struct HeapQueue<N: Node> {
    heap: BinaryHeap<HeapEntry<N>>,
    keys: HashMap<N, QueueKey>,
    capacity: usize,
    next_sequence: u64,
}

impl<N: Node> Default for HeapQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> HeapQueue<N> {
    pub fn new() -> HeapQueue<N> {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> HeapQueue<N> {
        HeapQueue {
            heap: BinaryHeap::with_capacity(capacity),
            keys: HashMap::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    fn drop_stale_entries(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.keys.get(&top.node) == Some(&top.key) {
                break;
            }
            self.heap.pop();
        }
    }
}

impl<N: Node> MinimumPriorityQueue<N> for HeapQueue<N> {
    fn add(&mut self, node: N, priority: Weight) {
        let key = QueueKey::new(priority, self.next_sequence);
        self.next_sequence += 1;
        self.keys.insert(node.clone(), key);
        self.heap.push(HeapEntry { key, node });
        self.drop_stale_entries();
    }

    fn decrease_priority(&mut self, node: &N, priority: Weight) {
        let Some(old_key) = self.keys.get_mut(node) else {
            return;
        };
        let key = QueueKey::new(priority, old_key.sequence);
        *old_key = key;
        self.heap.push(HeapEntry {
            key,
            node: node.clone(),
        });
        self.drop_stale_entries();
    }

    fn extract_minimum(&mut self) -> Option<N> {
        let HeapEntry { node, .. } = self.heap.pop()?;
        self.keys.remove(&node);
        self.drop_stale_entries();
        Some(node)
    }

    fn min(&self) -> Option<&N> {
        self.heap.peek().map(|entry| &entry.node)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn spawn(&self) -> Self {
        Self::with_capacity(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_entries_are_skipped() {
        let mut queue = HeapQueue::new();
        queue.add(0u32, 9.0);
        queue.add(1u32, 5.0);
        queue.decrease_priority(&0, 4.0);
        queue.decrease_priority(&0, 1.0);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.min(), Some(&0));
        assert_eq!(queue.extract_minimum(), Some(0));
        assert_eq!(queue.min(), Some(&1));
        assert_eq!(queue.extract_minimum(), Some(1));
        // the entries at 9.0 and 4.0 are gone with their node
        assert_eq!(queue.extract_minimum(), None);
        assert!(queue.heap.is_empty());
    }

    #[test]
    fn ties_resolve_in_insertion_order() {
        let mut queue = HeapQueue::new();
        for node in ["x", "y", "z"] {
            queue.add(node, 1.0);
        }

        assert_eq!(queue.extract_minimum(), Some("x"));
        assert_eq!(queue.extract_minimum(), Some("y"));
        assert_eq!(queue.extract_minimum(), Some("z"));
    }

    #[test]
    fn spawn_keeps_capacity_only() {
        let mut queue = HeapQueue::with_capacity(8);
        queue.add('q', 0.0);

        let spawned = queue.spawn();
        assert!(spawned.is_empty());
        assert_eq!(spawned.capacity, 8);
    }
}

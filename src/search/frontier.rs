use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use crate::{
    error::GraphError,
    graphs::{Graph, Node, Weight, WeightFunction},
    queue::MinimumPriorityQueue,
};

/// Direction in which a frontier walks the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Follows outgoing edges, away from the origin.
    Forward,
    /// Follows incoming edges, towards the origin.
    Backward,
}

impl Direction {
    pub fn neighbors<G: Graph>(
        self,
        graph: &G,
        node: &G::Node,
    ) -> Result<Vec<G::Node>, GraphError> {
        match self {
            Direction::Forward => graph.children(node),
            Direction::Backward => graph.parents(node),
        }
    }

    /// Weight of the edge between `current` and its `neighbor`, oriented the
    /// way the edge exists in the graph.
    pub fn edge_weight<N, W: WeightFunction<N>>(
        self,
        weight_function: &W,
        current: &N,
        neighbor: &N,
    ) -> Weight {
        match self {
            Direction::Forward => weight_function.weight(current, neighbor),
            Direction::Backward => weight_function.weight(neighbor, current),
        }
    }
}

/// Predecessor of a discovered node in its search tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predecessor<N> {
    /// The node is the origin of the search.
    Root,
    Vertex(N),
}

/// State of one search direction: the OPEN queue, the CLOSED set and the
/// tentative distances and predecessors of all discovered nodes.
///
/// A frontier lives for exactly one query. Every discovered node is either
/// open or closed, and a closed node's distance never changes again.
pub struct Frontier<N: Node, Q> {
    open: Q,
    closed: HashSet<N>,
    distances: HashMap<N, Weight>,
    predecessors: HashMap<N, Predecessor<N>>,
}

impl<N: Node, Q: MinimumPriorityQueue<N>> Frontier<N, Q> {
    /// Starts a frontier at `origin`. `open` is expected to be empty, usually
    /// freshly spawned from a prototype.
    pub fn new(mut open: Q, origin: N, priority: Weight) -> Frontier<N, Q> {
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();
        distances.insert(origin.clone(), 0.0);
        predecessors.insert(origin.clone(), Predecessor::Root);
        open.add(origin, priority);

        Frontier {
            open,
            closed: HashSet::new(),
            distances,
            predecessors,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    /// Tentative distance of the open node with the smallest priority.
    pub fn min_distance(&self) -> Option<Weight> {
        self.open
            .min()
            .and_then(|node| self.distances.get(node).copied())
    }

    /// Removes the open node with the smallest priority and returns it with
    /// its distance. The node is not closed yet.
    pub fn extract_minimum(&mut self) -> Option<(N, Weight)> {
        let node = self.open.extract_minimum()?;
        let distance = self.distances.get(&node).copied()?;
        Some((node, distance))
    }

    pub fn close(&mut self, node: N) {
        self.closed.insert(node);
    }

    pub fn is_closed(&self, node: &N) -> bool {
        self.closed.contains(node)
    }

    pub fn distance(&self, node: &N) -> Option<Weight> {
        self.distances.get(node).copied()
    }

    /// Returns true if `distance` beats what is known about `node`, which is
    /// always the case for an undiscovered node.
    pub fn improves(&self, node: &N, distance: Weight) -> bool {
        self.distances
            .get(node)
            .map_or(true, |&current| distance < current)
    }

    /// Records `distance` and `predecessor` for `node` and queues it with
    /// `priority`. Callers check [`Frontier::improves`] first.
    pub fn relax(&mut self, node: N, predecessor: N, distance: Weight, priority: Weight) {
        self.predecessors
            .insert(node.clone(), Predecessor::Vertex(predecessor));
        if self.distances.insert(node.clone(), distance).is_some() {
            self.open.decrease_priority(&node, priority);
        } else {
            self.open.add(node, priority);
        }
    }

    /// Number of discovered nodes, open or closed.
    pub fn explored(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    pub fn number_of_closed(&self) -> usize {
        self.closed.len()
    }

    /// Walks the predecessors from `node` back to the origin. The returned
    /// vertices start at `node` and end at the origin.
    pub fn trace(&self, node: &N) -> Vec<N> {
        let mut vertices = vec![node.clone()];
        let mut current = node;
        while let Some(Predecessor::Vertex(predecessor)) = self.predecessors.get(current) {
            vertices.push(predecessor.clone());
            current = predecessor;
        }
        vertices
    }

    /// Distances of all closed nodes.
    pub fn into_settled_distances(self) -> HashMap<N, Weight> {
        let Frontier {
            closed, distances, ..
        } = self;
        distances
            .into_iter()
            .filter(|(node, _)| closed.contains(node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::keyed_queue::KeyedQueue;

    #[test]
    fn origin_is_open_with_distance_zero() {
        let frontier = Frontier::new(KeyedQueue::new(), 'a', 7.0);

        assert_eq!(frontier.distance(&'a'), Some(0.0));
        assert_eq!(frontier.min_distance(), Some(0.0));
        assert_eq!(frontier.explored(), 1);
        assert_eq!(frontier.trace(&'a'), vec!['a']);
    }

    #[test]
    fn relax_and_trace() {
        let mut frontier = Frontier::new(KeyedQueue::new(), 'a', 0.0);
        let (node, distance) = frontier.extract_minimum().unwrap();
        frontier.close(node);
        assert_eq!(distance, 0.0);

        frontier.relax('b', 'a', 4.0, 4.0);
        frontier.relax('c', 'a', 1.0, 1.0);
        assert!(frontier.improves(&'b', 3.0));
        assert!(!frontier.improves(&'b', 4.0));
        frontier.relax('b', 'c', 2.0, 2.0);

        assert_eq!(frontier.explored(), 3);
        assert_eq!(frontier.extract_minimum(), Some(('c', 1.0)));
        assert_eq!(frontier.trace(&'b'), vec!['b', 'c', 'a']);
        assert!(frontier.is_closed(&'a'));
        assert!(!frontier.is_closed(&'b'));
    }
}

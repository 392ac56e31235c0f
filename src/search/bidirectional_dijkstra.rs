use std::sync::{atomic::AtomicBool, Arc};

use tracing::{debug, trace};

use super::{
    check_cancellation, check_endpoints,
    frontier::{Direction, Frontier},
    traceback::path_from_bidirectional_search,
    Path, PathFinder,
};
use crate::{
    error::SearchError,
    graphs::{Graph, Node, Weight, WeightFunction},
    queue::{keyed_queue::KeyedQueue, MinimumPriorityQueue},
};

/// Dijkstra's algorithm run simultaneously forward from the source and
/// backward from the target.
///
/// Each step expands the direction that has discovered fewer nodes. Whenever
/// a relaxed node is already closed on the other side, the two tree paths
/// through it form a source-target path, and the cheapest one seen so far is
/// kept. The search stops once the smallest open distances of both
/// directions add up to at least that path's weight: every path not found
/// yet has to cross both open sets and therefore cannot be cheaper.
pub struct BidirectionalDijkstraPathFinder<'a, G, W, Q> {
    graph: &'a G,
    weight_function: W,
    queue: Q,
    cancellation: Option<Arc<AtomicBool>>,
}

/// Cheapest source-target path found so far, as the node where its forward
/// and backward halves meet.
struct Meeting<N> {
    distance: Weight,
    touch_node: Option<N>,
}

impl<N> Meeting<N> {
    fn new() -> Meeting<N> {
        Meeting {
            distance: Weight::INFINITY,
            touch_node: None,
        }
    }

    fn offer(&mut self, node: &N, distance: Weight)
    where
        N: Clone,
    {
        if distance < self.distance {
            self.distance = distance;
            self.touch_node = Some(node.clone());
        }
    }
}

impl<'a, G: Graph, W> BidirectionalDijkstraPathFinder<'a, G, W, KeyedQueue<G::Node>> {
    pub fn new(graph: &'a G, weight_function: W) -> Self {
        BidirectionalDijkstraPathFinder {
            graph,
            weight_function,
            queue: KeyedQueue::new(),
            cancellation: None,
        }
    }
}

impl<'a, G, W, Q> BidirectionalDijkstraPathFinder<'a, G, W, Q> {
    /// Uses `queue` as prototype; every query spawns two empty copies of it.
    pub fn with_queue<R>(self, queue: R) -> BidirectionalDijkstraPathFinder<'a, G, W, R> {
        BidirectionalDijkstraPathFinder {
            graph: self.graph,
            weight_function: self.weight_function,
            queue,
            cancellation: self.cancellation,
        }
    }

    pub fn with_cancellation(mut self, cancellation: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(cancellation);
        self
    }
}

impl<'a, G, W, Q> BidirectionalDijkstraPathFinder<'a, G, W, Q>
where
    G: Graph,
    W: WeightFunction<G::Node>,
    Q: MinimumPriorityQueue<G::Node>,
{
    /// Closes the minimum of `frontier` and relaxes its neighbors. A relaxed
    /// neighbor that `opposite` has already closed is offered to `meeting`.
    fn expand(
        &self,
        direction: Direction,
        frontier: &mut Frontier<G::Node, Q>,
        opposite: &Frontier<G::Node, Q>,
        meeting: &mut Meeting<G::Node>,
    ) -> Result<(), SearchError> {
        let Some((current, distance_current)) = frontier.extract_minimum() else {
            return Ok(());
        };
        trace!(?direction, node = ?current, distance = distance_current, "bidirectional expanding");
        frontier.close(current.clone());

        for neighbor in direction.neighbors(self.graph, &current)? {
            if frontier.is_closed(&neighbor) {
                continue;
            }

            let tentative_distance = distance_current
                + direction.edge_weight(&self.weight_function, &current, &neighbor);
            if !frontier.improves(&neighbor, tentative_distance) {
                continue;
            }

            if opposite.is_closed(&neighbor) {
                if let Some(opposite_distance) = opposite.distance(&neighbor) {
                    meeting.offer(&neighbor, tentative_distance + opposite_distance);
                }
            }

            frontier.relax(neighbor, current.clone(), tentative_distance, tentative_distance);
        }

        Ok(())
    }
}

impl<'a, G, W, Q> PathFinder for BidirectionalDijkstraPathFinder<'a, G, W, Q>
where
    G: Graph,
    W: WeightFunction<G::Node>,
    Q: MinimumPriorityQueue<G::Node>,
{
    type Node = G::Node;

    fn shortest_path(
        &self,
        source: &G::Node,
        target: &G::Node,
    ) -> Result<Option<Path<G::Node>>, SearchError> {
        check_endpoints(self.graph, source, target)?;

        // The meeting test needs two distinct origins.
        if source == target {
            return Ok(Some(Path {
                vertices: vec![source.clone()],
                distance: 0.0,
            }));
        }

        let forward_queue = self.queue.spawn();
        let backward_queue = forward_queue.spawn();
        let mut forward = Frontier::new(forward_queue, source.clone(), 0.0);
        let mut backward = Frontier::new(backward_queue, target.clone(), 0.0);
        let mut meeting = Meeting::new();

        loop {
            check_cancellation(&self.cancellation)?;

            let (Some(forward_min), Some(backward_min)) =
                (forward.min_distance(), backward.min_distance())
            else {
                break;
            };

            if forward_min + backward_min >= meeting.distance {
                return Ok(meeting_path(&meeting, &forward, &backward, source, target));
            }

            if forward.explored() < backward.explored() {
                self.expand(Direction::Forward, &mut forward, &backward, &mut meeting)?;
            } else {
                self.expand(Direction::Backward, &mut backward, &forward, &mut meeting)?;
            }
        }

        // An exhausted direction has closed every node it can reach, so a
        // meeting recorded by then is already the cheapest one.
        debug!(
            ?source,
            ?target,
            forward_exhausted = forward.is_exhausted(),
            backward_exhausted = backward.is_exhausted(),
            "bidirectional dijkstra exhausted frontier"
        );
        Ok(meeting_path(&meeting, &forward, &backward, source, target))
    }
}

fn meeting_path<N: Node, Q: MinimumPriorityQueue<N>>(
    meeting: &Meeting<N>,
    forward: &Frontier<N, Q>,
    backward: &Frontier<N, Q>,
    source: &N,
    target: &N,
) -> Option<Path<N>> {
    let touch_node = meeting.touch_node.as_ref()?;
    debug!(
        ?source,
        ?target,
        ?touch_node,
        distance = meeting.distance,
        expanded = forward.number_of_closed() + backward.number_of_closed(),
        "bidirectional dijkstra met"
    );
    Some(Path {
        vertices: path_from_bidirectional_search(touch_node, forward, backward),
        distance: meeting.distance,
    })
}

use std::sync::{atomic::AtomicBool, Arc};

use tracing::{debug, trace};

use super::{
    check_cancellation, check_endpoints,
    frontier::{Direction, Frontier},
    traceback::path_from_frontier,
    Path, PathFinder,
};
use crate::{
    error::SearchError,
    graphs::{Graph, WeightFunction},
    heuristics::HeuristicFunction,
    queue::{keyed_queue::KeyedQueue, MinimumPriorityQueue},
};

/// Best-first search guided by a heuristic estimate of the remaining cost.
///
/// Nodes are expanded in order of `distance + estimate`. The target is
/// reported as soon as it is extracted from the queue, so the result is only
/// optimal if the heuristic never overestimates. Closed nodes are never
/// reopened, which additionally requires a consistent heuristic.
pub struct AStarPathFinder<'a, G, W, H, Q> {
    graph: &'a G,
    weight_function: W,
    heuristic: H,
    queue: Q,
    cancellation: Option<Arc<AtomicBool>>,
}

impl<'a, G: Graph, W, H> AStarPathFinder<'a, G, W, H, KeyedQueue<G::Node>> {
    pub fn new(graph: &'a G, weight_function: W, heuristic: H) -> Self {
        AStarPathFinder {
            graph,
            weight_function,
            heuristic,
            queue: KeyedQueue::new(),
            cancellation: None,
        }
    }
}

impl<'a, G, W, H, Q> AStarPathFinder<'a, G, W, H, Q> {
    /// Uses `queue` as prototype; every query spawns an empty copy of it.
    pub fn with_queue<R>(self, queue: R) -> AStarPathFinder<'a, G, W, H, R> {
        AStarPathFinder {
            graph: self.graph,
            weight_function: self.weight_function,
            heuristic: self.heuristic,
            queue,
            cancellation: self.cancellation,
        }
    }

    /// Queries return [`SearchError::Cancelled`] once `cancellation` is set.
    pub fn with_cancellation(mut self, cancellation: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(cancellation);
        self
    }
}

impl<'a, G, W, H, Q> PathFinder for AStarPathFinder<'a, G, W, H, Q>
where
    G: Graph,
    W: WeightFunction<G::Node>,
    H: HeuristicFunction<G::Node>,
    Q: MinimumPriorityQueue<G::Node>,
{
    type Node = G::Node;

    fn shortest_path(
        &self,
        source: &G::Node,
        target: &G::Node,
    ) -> Result<Option<Path<G::Node>>, SearchError> {
        check_endpoints(self.graph, source, target)?;

        let mut frontier = Frontier::new(
            self.queue.spawn(),
            source.clone(),
            self.heuristic.estimate(source, target),
        );

        loop {
            check_cancellation(&self.cancellation)?;

            let Some((current, distance_current)) = frontier.extract_minimum() else {
                break;
            };

            if &current == target {
                debug!(
                    ?source,
                    ?target,
                    distance = distance_current,
                    expanded = frontier.number_of_closed(),
                    "astar reached target"
                );
                return Ok(Some(Path {
                    vertices: path_from_frontier(&frontier, &current),
                    distance: distance_current,
                }));
            }

            trace!(node = ?current, distance = distance_current, "astar expanding");
            frontier.close(current.clone());
            for child in Direction::Forward.neighbors(self.graph, &current)? {
                if frontier.is_closed(&child) {
                    continue;
                }

                let tentative_distance =
                    distance_current + self.weight_function.weight(&current, &child);
                if !frontier.improves(&child, tentative_distance) {
                    continue;
                }

                let priority = tentative_distance + self.heuristic.estimate(&child, target);
                frontier.relax(child, current.clone(), tentative_distance, priority);
            }
        }

        debug!(
            ?source,
            ?target,
            expanded = frontier.number_of_closed(),
            "astar exhausted frontier"
        );
        Ok(None)
    }
}

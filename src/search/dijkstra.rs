use ahash::HashMap;

use super::{astar::AStarPathFinder, check_endpoints, frontier::{Direction, Frontier}};
use crate::{
    error::SearchError,
    graphs::{Graph, Weight, WeightFunction},
    heuristics::ZeroHeuristic,
    queue::{keyed_queue::KeyedQueue, MinimumPriorityQueue},
};

/// Unidirectional Dijkstra, which is A* without an estimate.
pub type DijkstraPathFinder<'a, G, W, Q> = AStarPathFinder<'a, G, W, ZeroHeuristic, Q>;

pub fn dijkstra<G: Graph, W>(
    graph: &G,
    weight_function: W,
) -> DijkstraPathFinder<'_, G, W, KeyedQueue<G::Node>> {
    AStarPathFinder::new(graph, weight_function, ZeroHeuristic)
}

/// Distances from `origin` to every node it can reach, or, walking
/// `Direction::Backward`, from every node that can reach `origin`.
pub fn one_to_all<G, W, Q>(
    graph: &G,
    weight_function: &W,
    queue: &Q,
    origin: &G::Node,
    direction: Direction,
) -> Result<HashMap<G::Node, Weight>, SearchError>
where
    G: Graph,
    W: WeightFunction<G::Node>,
    Q: MinimumPriorityQueue<G::Node>,
{
    check_endpoints(graph, origin, origin)?;

    let mut frontier = Frontier::new(queue.spawn(), origin.clone(), 0.0);
    while let Some((current, distance_current)) = frontier.extract_minimum() {
        frontier.close(current.clone());
        for neighbor in direction.neighbors(graph, &current)? {
            if frontier.is_closed(&neighbor) {
                continue;
            }

            let tentative_distance = distance_current
                + direction.edge_weight(weight_function, &current, &neighbor);
            if frontier.improves(&neighbor, tentative_distance) {
                frontier.relax(neighbor, current.clone(), tentative_distance, tentative_distance);
            }
        }
    }

    Ok(frontier.into_settled_distances())
}

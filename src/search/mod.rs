use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    error::SearchError,
    graphs::{Graph, Node, Weight, WeightFunction},
    heuristics::{HeuristicFunction, ZeroHeuristic},
    queue::MinimumPriorityQueue,
};

pub mod astar;
pub mod bidirectional_dijkstra;
pub mod dijkstra;
pub mod frontier;
pub mod traceback;

use astar::AStarPathFinder;
use bidirectional_dijkstra::BidirectionalDijkstraPathFinder;

/// A path from a source to a target vertex together with its total weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<N> {
    pub vertices: Vec<N>,
    pub distance: Weight,
}

/// Point-to-point shortest path search.
///
/// Implementors keep only immutable configuration. Every call allocates its
/// own search state, so one finder can answer any number of queries, also
/// from several threads at once.
pub trait PathFinder {
    type Node: Node;

    /// Returns a minimum weight path from `source` to `target`, or `None` if
    /// `target` cannot be reached.
    fn shortest_path(
        &self,
        source: &Self::Node,
        target: &Self::Node,
    ) -> Result<Option<Path<Self::Node>>, SearchError>;

    fn shortest_path_distance(
        &self,
        source: &Self::Node,
        target: &Self::Node,
    ) -> Result<Option<Weight>, SearchError> {
        Ok(self
            .shortest_path(source, target)?
            .map(|path| path.distance))
    }

    /// The vertices of a shortest path from `source` to `target`, both
    /// included. Empty if there is no path.
    fn search(
        &self,
        source: &Self::Node,
        target: &Self::Node,
    ) -> Result<Vec<Self::Node>, SearchError> {
        Ok(self
            .shortest_path(source, target)?
            .map(|path| path.vertices)
            .unwrap_or_default())
    }
}

/// Rejects endpoints the graph does not know before any state is allocated.
pub(crate) fn check_endpoints<G: Graph>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> Result<(), SearchError> {
    if !graph.contains(source) {
        return Err(SearchError::unknown_node("source", source));
    }
    if !graph.contains(target) {
        return Err(SearchError::unknown_node("target", target));
    }
    Ok(())
}

pub(crate) fn check_cancellation(cancellation: &Option<Arc<AtomicBool>>) -> Result<(), SearchError> {
    match cancellation {
        Some(flag) if flag.load(Ordering::Relaxed) => Err(SearchError::Cancelled),
        _ => Ok(()),
    }
}

/// Search strategy, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum Algorithm {
    AStar,
    BidirectionalDijkstra,
    Dijkstra,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 3] {
        [
            Algorithm::AStar,
            Algorithm::BidirectionalDijkstra,
            Algorithm::Dijkstra,
        ]
    }

    /// Builds a finder for this strategy. The heuristic is only used by
    /// [`Algorithm::AStar`].
    pub fn path_finder<'a, G, W, H, Q>(
        self,
        graph: &'a G,
        weight_function: W,
        heuristic: H,
        queue: Q,
    ) -> AnyPathFinder<'a, G, W, H, Q>
    where
        G: Graph,
    {
        match self {
            Algorithm::AStar => AnyPathFinder::AStar(
                AStarPathFinder::new(graph, weight_function, heuristic).with_queue(queue),
            ),
            Algorithm::BidirectionalDijkstra => AnyPathFinder::BidirectionalDijkstra(
                BidirectionalDijkstraPathFinder::new(graph, weight_function).with_queue(queue),
            ),
            Algorithm::Dijkstra => AnyPathFinder::Dijkstra(
                AStarPathFinder::new(graph, weight_function, ZeroHeuristic).with_queue(queue),
            ),
        }
    }
}

/// One of the available finders, chosen through [`Algorithm::path_finder`].
pub enum AnyPathFinder<'a, G: Graph, W, H, Q> {
    AStar(AStarPathFinder<'a, G, W, H, Q>),
    BidirectionalDijkstra(BidirectionalDijkstraPathFinder<'a, G, W, Q>),
    Dijkstra(AStarPathFinder<'a, G, W, ZeroHeuristic, Q>),
}

impl<'a, G: Graph, W, H, Q> AnyPathFinder<'a, G, W, H, Q> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AnyPathFinder::AStar(_) => Algorithm::AStar,
            AnyPathFinder::BidirectionalDijkstra(_) => Algorithm::BidirectionalDijkstra,
            AnyPathFinder::Dijkstra(_) => Algorithm::Dijkstra,
        }
    }

    pub fn with_cancellation(self, cancellation: Arc<AtomicBool>) -> Self {
        match self {
            AnyPathFinder::AStar(finder) => {
                AnyPathFinder::AStar(finder.with_cancellation(cancellation))
            }
            AnyPathFinder::BidirectionalDijkstra(finder) => {
                AnyPathFinder::BidirectionalDijkstra(finder.with_cancellation(cancellation))
            }
            AnyPathFinder::Dijkstra(finder) => {
                AnyPathFinder::Dijkstra(finder.with_cancellation(cancellation))
            }
        }
    }
}

impl<'a, G, W, H, Q> PathFinder for AnyPathFinder<'a, G, W, H, Q>
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
        match self {
            AnyPathFinder::AStar(finder) => finder.shortest_path(source, target),
            AnyPathFinder::BidirectionalDijkstra(finder) => finder.shortest_path(source, target),
            AnyPathFinder::Dijkstra(finder) => finder.shortest_path(source, target),
        }
    }
}

//! Point-to-point shortest paths in directed, non-negatively weighted graphs.
//!
//! Two interchangeable strategies implement [`PathFinder`]: heuristic guided
//! [`AStarPathFinder`] and [`BidirectionalDijkstraPathFinder`]. Finders are
//! plain configuration; every query builds its own search state from a
//! spawned copy of the configured [`MinimumPriorityQueue`].

pub mod error;
pub mod graphs;
pub mod heuristics;
pub mod queue;
pub mod search;
pub mod utility;

pub use error::{GraphError, SearchError};
pub use graphs::{Graph, Node, Weight, WeightFunction};
pub use heuristics::{HeuristicFunction, ZeroHeuristic};
pub use queue::{heap_queue::HeapQueue, keyed_queue::KeyedQueue, MinimumPriorityQueue, QueueKind};
pub use search::{
    astar::AStarPathFinder, bidirectional_dijkstra::BidirectionalDijkstraPathFinder,
    dijkstra::dijkstra, Algorithm, AnyPathFinder, Path, PathFinder,
};

use std::sync::{atomic::AtomicBool, Arc};

use path_finders::{
    AStarPathFinder, Algorithm, BidirectionalDijkstraPathFinder, Graph, GraphError, HeapQueue,
    KeyedQueue, Path, PathFinder, SearchError, Weight, ZeroHeuristic,
};

/// Small graph over letters, adjacency is reported in insertion order.
struct LetterGraph {
    nodes: Vec<char>,
    edges: Vec<(char, char, Weight)>,
}

impl LetterGraph {
    fn new(nodes: &str, edges: &[(char, char, Weight)]) -> LetterGraph {
        LetterGraph {
            nodes: nodes.chars().collect(),
            edges: edges.to_vec(),
        }
    }

    fn weight(&self, tail: &char, head: &char) -> Weight {
        self.edges
            .iter()
            .find(|(t, h, _)| t == tail && h == head)
            .map(|&(_, _, weight)| weight)
            .unwrap_or(Weight::INFINITY)
    }
}

impl Graph for LetterGraph {
    type Node = char;

    fn contains(&self, node: &char) -> bool {
        self.nodes.contains(node)
    }

    fn children(&self, node: &char) -> Result<Vec<char>, GraphError> {
        Ok(self
            .edges
            .iter()
            .filter(|(tail, _, _)| tail == node)
            .map(|&(_, head, _)| head)
            .collect())
    }

    fn parents(&self, node: &char) -> Result<Vec<char>, GraphError> {
        Ok(self
            .edges
            .iter()
            .filter(|(_, head, _)| head == node)
            .map(|&(tail, _, _)| tail)
            .collect())
    }
}

/// Fails whenever the adjacency of `broken` is requested.
struct BrokenGraph {
    inner: LetterGraph,
    broken: char,
}

impl Graph for BrokenGraph {
    type Node = char;

    fn contains(&self, node: &char) -> bool {
        self.inner.contains(node)
    }

    fn children(&self, node: &char) -> Result<Vec<char>, GraphError> {
        if *node == self.broken {
            return Err(GraphError::new(node, "adjacency store unavailable"));
        }
        self.inner.children(node)
    }

    fn parents(&self, node: &char) -> Result<Vec<char>, GraphError> {
        if *node == self.broken {
            return Err(GraphError::new(node, "adjacency store unavailable"));
        }
        self.inner.parents(node)
    }
}

fn diamond() -> LetterGraph {
    LetterGraph::new(
        "ABCDE",
        &[('A', 'B', 1.0), ('A', 'C', 4.0), ('B', 'D', 1.0), ('C', 'D', 1.0)],
    )
}

/// Runs `check` against every algorithm on `graph`, with both queues.
fn for_each_finder(graph: &LetterGraph, check: impl Fn(&dyn PathFinder<Node = char>)) {
    let weight_function = |tail: &char, head: &char| graph.weight(tail, head);
    for algorithm in Algorithm::all() {
        check(&algorithm.path_finder(graph, weight_function, ZeroHeuristic, KeyedQueue::new()));
        check(&algorithm.path_finder(graph, weight_function, ZeroHeuristic, HeapQueue::new()));
    }
}

#[test]
fn cheaper_detour() {
    let graph = diamond();
    for_each_finder(&graph, |finder| {
        assert_eq!(finder.search(&'A', &'D').unwrap(), vec!['A', 'B', 'D']);
        assert_eq!(finder.shortest_path_distance(&'A', &'D').unwrap(), Some(2.0));
    });
}

#[test]
fn single_edge() {
    let graph = LetterGraph::new("AB", &[('A', 'B', 5.0)]);
    for_each_finder(&graph, |finder| {
        assert_eq!(
            finder.shortest_path(&'A', &'B').unwrap(),
            Some(Path {
                vertices: vec!['A', 'B'],
                distance: 5.0
            })
        );
        assert!(finder.search(&'B', &'A').unwrap().is_empty());
    });
}

#[test]
fn unreachable_target() {
    let graph = diamond();
    for_each_finder(&graph, |finder| {
        assert_eq!(finder.shortest_path(&'A', &'E').unwrap(), None);
        assert!(finder.search(&'A', &'E').unwrap().is_empty());
        assert!(finder.search(&'E', &'A').unwrap().is_empty());
    });
}

#[test]
fn source_is_target() {
    let graph = diamond();
    for_each_finder(&graph, |finder| {
        assert_eq!(
            finder.shortest_path(&'C', &'C').unwrap(),
            Some(Path {
                vertices: vec!['C'],
                distance: 0.0
            })
        );
        // isolated, but still a valid node
        assert_eq!(finder.search(&'E', &'E').unwrap(), vec!['E']);
    });
}

#[test]
fn unknown_endpoints_are_rejected() {
    let graph = diamond();
    for_each_finder(&graph, |finder| {
        assert!(matches!(
            finder.search(&'Z', &'A'),
            Err(SearchError::InvalidArgument(_))
        ));
        assert!(matches!(
            finder.search(&'A', &'Z'),
            Err(SearchError::InvalidArgument(_))
        ));
    });
}

#[test]
fn zero_weight_edges() {
    let graph = LetterGraph::new(
        "ABCD",
        &[('A', 'B', 0.0), ('B', 'C', 0.0), ('A', 'C', 1.0), ('C', 'D', 0.0)],
    );
    for_each_finder(&graph, |finder| {
        assert_eq!(finder.search(&'A', &'D').unwrap(), vec!['A', 'B', 'C', 'D']);
        assert_eq!(finder.shortest_path_distance(&'A', &'D').unwrap(), Some(0.0));
    });
}

#[test]
fn equal_cost_paths_resolve_the_same_way_every_time() {
    let graph = LetterGraph::new(
        "ABCD",
        &[('A', 'B', 1.0), ('A', 'C', 1.0), ('B', 'D', 1.0), ('C', 'D', 1.0)],
    );
    for_each_finder(&graph, |finder| {
        let first = finder.search(&'A', &'D').unwrap();
        // the node discovered first wins ties
        assert_eq!(first, vec!['A', 'B', 'D']);
        for _ in 0..10 {
            assert_eq!(finder.search(&'A', &'D').unwrap(), first);
        }
    });
}

#[test]
fn astar_with_admissible_estimate() {
    let graph = diamond();
    // remaining hops, each edge weighs at least one
    let estimate = |node: &char, target: &char| match (node, target) {
        (_, t) if node == t => 0.0,
        ('A', 'D') => 2.0,
        (_, 'D') => 1.0,
        _ => 0.0,
    };
    let finder = AStarPathFinder::new(&graph, |tail: &char, head: &char| graph.weight(tail, head), estimate);

    assert_eq!(finder.search(&'A', &'D').unwrap(), vec!['A', 'B', 'D']);
    assert_eq!(finder.shortest_path_distance(&'A', &'D').unwrap(), Some(2.0));
}

#[test]
fn graph_errors_are_propagated() {
    let graph = BrokenGraph {
        inner: diamond(),
        broken: 'B',
    };
    let weight_function = |tail: &char, head: &char| graph.inner.weight(tail, head);

    let astar = AStarPathFinder::new(&graph, weight_function, ZeroHeuristic);
    let bidirectional = BidirectionalDijkstraPathFinder::new(&graph, weight_function);

    for result in [astar.search(&'A', &'D'), bidirectional.search(&'A', &'D')] {
        match result {
            Err(SearchError::Graph(error)) => {
                assert_eq!(error.node(), "'B'");
                assert!(std::error::Error::source(&error).is_some());
            }
            other => panic!("expected a graph error, got {:?}", other),
        }
    }

    // queries that never touch the broken node still succeed
    assert_eq!(astar.search(&'C', &'D').unwrap(), vec!['C', 'D']);
}

#[test]
fn cancelled_search_stops() {
    let graph = diamond();
    let cancelled = Arc::new(AtomicBool::new(true));
    let weight_function = |tail: &char, head: &char| graph.weight(tail, head);

    for algorithm in Algorithm::all() {
        let finder = algorithm
            .path_finder(&graph, weight_function, ZeroHeuristic, KeyedQueue::new())
            .with_cancellation(cancelled.clone());
        assert!(matches!(
            finder.search(&'A', &'D'),
            Err(SearchError::Cancelled)
        ));
    }

    let running = Arc::new(AtomicBool::new(false));
    let finder = BidirectionalDijkstraPathFinder::new(&graph, weight_function)
        .with_cancellation(running);
    assert_eq!(finder.search(&'A', &'D').unwrap(), vec!['A', 'B', 'D']);
}

#[test]
fn finder_is_reusable_across_queries() {
    let graph = diamond();
    for_each_finder(&graph, |finder| {
        assert_eq!(finder.search(&'A', &'D').unwrap(), vec!['A', 'B', 'D']);
        assert!(finder.search(&'A', &'E').unwrap().is_empty());
        assert_eq!(finder.search(&'C', &'D').unwrap(), vec!['C', 'D']);
        assert_eq!(finder.search(&'A', &'D').unwrap(), vec!['A', 'B', 'D']);
    });
}

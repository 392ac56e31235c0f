use std::{fmt::Debug, hash::Hash};

use crate::error::GraphError;

pub mod edge;
pub mod graph_functions;
pub mod reversible_vec_graph;

pub type Vertex = u32;
pub type Weight = f64;

/// Identity of a node. Equality and hash must stay stable for the duration of
/// a single search.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

/// Adjacency view of a directed graph.
///
/// The search engines never mutate a graph, so one graph may back any number
/// of concurrent queries.
pub trait Graph {
    type Node: Node;

    /// Returns true if `node` is a valid identity for this graph.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Heads of all edges leaving `node`.
    fn children(&self, node: &Self::Node) -> Result<Vec<Self::Node>, GraphError>;

    /// Tails of all edges entering `node`.
    fn parents(&self, node: &Self::Node) -> Result<Vec<Self::Node>, GraphError>;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;

    fn contains(&self, node: &Self::Node) -> bool {
        (**self).contains(node)
    }

    fn children(&self, node: &Self::Node) -> Result<Vec<Self::Node>, GraphError> {
        (**self).children(node)
    }

    fn parents(&self, node: &Self::Node) -> Result<Vec<Self::Node>, GraphError> {
        (**self).parents(node)
    }
}

/// Cost of traversing the edge `tail -> head`.
///
/// Weights must be non-negative and finite for every edge reachable through
/// [`Graph::children`] or [`Graph::parents`]. Negative weights are not
/// rejected; they make the returned paths meaningless but never panic.
pub trait WeightFunction<N> {
    fn weight(&self, tail: &N, head: &N) -> Weight;
}

impl<N, F> WeightFunction<N> for F
where
    F: Fn(&N, &N) -> Weight,
{
    fn weight(&self, tail: &N, head: &N) -> Weight {
        self(tail, head)
    }
}

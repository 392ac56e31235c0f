use serde::{Deserialize, Serialize};

use super::{
    edge::{HeadlessEdge, TaillessEdge, WeightedEdge},
    Graph, Vertex, Weight, WeightFunction,
};
use crate::error::GraphError;

/// In-memory directed graph over dense vertex ids that keeps both edge
/// directions, so it can be walked forward and backward.
///
/// Edge lists are sorted by the opposite endpoint. Adding an edge that
/// already exists keeps the cheaper of the two weights.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReversibleVecGraph {
    out_edges: Vec<Vec<TaillessEdge>>,
    in_edges: Vec<Vec<HeadlessEdge>>,
}

impl Default for ReversibleVecGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ReversibleVecGraph {
    pub fn new() -> Self {
        ReversibleVecGraph {
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    /// Graph with `number_of_vertices` isolated vertices.
    pub fn with_vertices(number_of_vertices: u32) -> Self {
        ReversibleVecGraph {
            out_edges: vec![Vec::new(); number_of_vertices as usize],
            in_edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(edges: &[WeightedEdge]) -> ReversibleVecGraph {
        let mut graph = ReversibleVecGraph::new();
        edges.iter().for_each(|edge| graph.set_edge(edge));
        graph
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.number_of_vertices()
    }

    pub fn out_edges(&self, vertex: Vertex) -> &[TaillessEdge] {
        self.out_edges
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn in_edges(&self, vertex: Vertex) -> &[HeadlessEdge] {
        self.in_edges
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight> {
        let edges = self.out_edges(tail);
        let idx = edges
            .binary_search_by_key(&head, |edge| edge.head())
            .ok()?;
        Some(edges[idx].weight())
    }

    /// Edge weights as a standalone closure that can be handed to a finder
    /// alongside a reference to the graph.
    pub fn weight_function(&self) -> impl Fn(&Vertex, &Vertex) -> Weight + Copy + Send + Sync + '_ {
        move |tail: &Vertex, head: &Vertex| WeightFunction::weight(self, tail, head)
    }

    pub fn set_edge(&mut self, edge: &WeightedEdge) {
        let needed = edge.tail().max(edge.head()) as usize + 1;
        if self.out_edges.len() < needed {
            self.out_edges.resize(needed, Vec::new());
            self.in_edges.resize(needed, Vec::new());
        }

        self.add_out_edge(edge);
        self.add_in_edge(edge);
    }

    fn add_out_edge(&mut self, edge: &WeightedEdge) {
        let out_edges = &mut self.out_edges[edge.tail() as usize];
        match out_edges.binary_search_by_key(&edge.head(), |out_edge| out_edge.head()) {
            Ok(idx) => {
                if edge.weight() < out_edges[idx].weight() {
                    out_edges[idx].set_weight(edge.weight());
                }
            }
            Err(idx) => out_edges.insert(idx, edge.tailless()),
        }
    }

    fn add_in_edge(&mut self, edge: &WeightedEdge) {
        let in_edges = &mut self.in_edges[edge.head() as usize];
        match in_edges.binary_search_by_key(&edge.tail(), |in_edge| in_edge.tail()) {
            Ok(idx) => {
                if edge.weight() < in_edges[idx].weight() {
                    in_edges[idx].set_weight(edge.weight());
                }
            }
            Err(idx) => in_edges.insert(idx, edge.headless()),
        }
    }
}

impl Graph for ReversibleVecGraph {
    type Node = Vertex;

    fn contains(&self, node: &Vertex) -> bool {
        *node < self.number_of_vertices()
    }

    fn children(&self, node: &Vertex) -> Result<Vec<Vertex>, GraphError> {
        Ok(self.out_edges(*node).iter().map(TaillessEdge::head).collect())
    }

    fn parents(&self, node: &Vertex) -> Result<Vec<Vertex>, GraphError> {
        Ok(self.in_edges(*node).iter().map(HeadlessEdge::tail).collect())
    }
}

/// Weight of the stored edge, `+infinity` if there is none.
impl WeightFunction<Vertex> for ReversibleVecGraph {
    fn weight(&self, tail: &Vertex, head: &Vertex) -> Weight {
        self.get_weight(*tail, *head).unwrap_or(Weight::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge::new(tail, head, weight).unwrap()
    }

    #[test]
    fn keeps_cheapest_parallel_edge() {
        let graph = ReversibleVecGraph::from_edges(&[edge(0, 1, 4.0), edge(0, 1, 2.0), edge(0, 1, 3.0)]);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.get_weight(0, 1), Some(2.0));
        assert_eq!(graph.in_edges(1)[0].weight(), 2.0);
    }

    #[test]
    fn adjacency_in_both_directions() {
        let graph = ReversibleVecGraph::from_edges(&[edge(2, 0, 1.0), edge(0, 1, 1.0), edge(2, 1, 5.0)]);

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.children(&2).unwrap(), vec![0, 1]);
        assert_eq!(graph.parents(&1).unwrap(), vec![0, 2]);
        assert!(graph.parents(&2).unwrap().is_empty());
        assert_eq!(graph.weight(&2, &1), 5.0);
        assert_eq!(graph.weight(&1, &2), Weight::INFINITY);
    }

    #[test]
    fn isolated_vertices_are_contained() {
        let graph = ReversibleVecGraph::with_vertices(4);

        assert!(graph.contains(&3));
        assert!(!graph.contains(&4));
        assert!(graph.children(&3).unwrap().is_empty());
        // out of range vertices have no adjacency
        assert!(graph.out_edges(17).is_empty());
    }
}

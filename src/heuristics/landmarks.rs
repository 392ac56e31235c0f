use ahash::HashMap;
use indicatif::ParallelProgressIterator;
use rand::{seq::IteratorRandom, Rng};
use rayon::prelude::*;

use super::HeuristicFunction;
use crate::{
    error::SearchError,
    graphs::{reversible_vec_graph::ReversibleVecGraph, Vertex, Weight},
    queue::keyed_queue::KeyedQueue,
    search::{dijkstra::one_to_all, frontier::Direction},
    utility::get_progressbar,
};

/// Exact distances from and to one landmark vertex.
#[derive(Clone, Debug)]
pub struct Landmark {
    /// `to_weight[v]` is the distance from the landmark to `v`.
    pub to_weight: Vec<Weight>,
    /// `from_weight[v]` is the distance from `v` to the landmark.
    pub from_weight: Vec<Weight>,
}

impl Landmark {
    pub fn new(graph: &ReversibleVecGraph, vertex: Vertex) -> Result<Landmark, SearchError> {
        let queue = KeyedQueue::with_capacity(graph.number_of_vertices() as usize);
        let to_weight = one_to_all(graph, graph, &queue, &vertex, Direction::Forward)?;
        let from_weight = one_to_all(graph, graph, &queue, &vertex, Direction::Backward)?;

        let dense = |distances: &HashMap<Vertex, Weight>| -> Vec<Weight> {
            graph
                .vertices()
                .map(|v| distances.get(&v).copied().unwrap_or(Weight::INFINITY))
                .collect()
        };

        Ok(Landmark {
            to_weight: dense(&to_weight),
            from_weight: dense(&from_weight),
        })
    }

    /// Lower bound on the distance from `vertex` to `target` by the triangle
    /// inequality. Bounds that involve an unreachable vertex are skipped.
    pub fn lower_bound(&self, vertex: Vertex, target: Vertex) -> Weight {
        let get = |weights: &[Weight], v: Vertex| {
            weights
                .get(v as usize)
                .copied()
                .filter(|weight| weight.is_finite())
        };

        let mut bound: Weight = 0.0;
        if let (Some(to_target), Some(to_vertex)) =
            (get(&self.to_weight, target), get(&self.to_weight, vertex))
        {
            bound = bound.max(to_target - to_vertex);
        }
        if let (Some(from_vertex), Some(from_target)) =
            (get(&self.from_weight, vertex), get(&self.from_weight, target))
        {
            bound = bound.max(from_vertex - from_target);
        }
        bound
    }
}

/// ALT heuristic: the best triangle inequality bound over a set of
/// landmarks.
#[derive(Clone, Debug, Default)]
pub struct Landmarks {
    pub landmarks: Vec<Landmark>,
}

impl Landmarks {
    pub fn for_vertices(
        graph: &ReversibleVecGraph,
        vertices: &[Vertex],
    ) -> Result<Landmarks, SearchError> {
        let landmarks = vertices
            .par_iter()
            .progress_with(get_progressbar(
                "Generating landmarks",
                vertices.len() as u64,
            ))
            .map(|&vertex| Landmark::new(graph, vertex))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Landmarks { landmarks })
    }

    pub fn random<R: Rng>(
        graph: &ReversibleVecGraph,
        number_of_landmarks: u32,
        rng: &mut R,
    ) -> Result<Landmarks, SearchError> {
        let vertices = graph
            .vertices()
            .choose_multiple(rng, number_of_landmarks as usize);
        Self::for_vertices(graph, &vertices)
    }
}

impl HeuristicFunction<Vertex> for Landmarks {
    fn estimate(&self, node: &Vertex, target: &Vertex) -> Weight {
        self.landmarks
            .iter()
            .map(|landmark| landmark.lower_bound(*node, *target))
            .fold(0.0, Weight::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::edge::WeightedEdge;

    #[test]
    fn bound_from_a_line() {
        // 0 -> 1 -> 2 -> 3, each edge weighs 2
        let edges: Vec<_> = (0..3)
            .map(|v| WeightedEdge::new(v, v + 1, 2.0).unwrap())
            .collect();
        let graph = ReversibleVecGraph::from_edges(&edges);
        let landmarks = Landmarks::for_vertices(&graph, &[0]).unwrap();

        assert_eq!(landmarks.estimate(&1, &3), 4.0);
        assert_eq!(landmarks.estimate(&3, &3), 0.0);
        // 3 cannot reach 1, but the landmark only knows a trivial bound
        assert_eq!(landmarks.estimate(&3, &1), 0.0);
    }
}

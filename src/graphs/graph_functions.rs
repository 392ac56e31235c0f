use itertools::Itertools;
use rand::Rng;

use super::{edge::WeightedEdge, reversible_vec_graph::ReversibleVecGraph, Vertex, Weight};
use crate::search::Path;

/// Generates a graph with `number_of_vertices` vertices and up to
/// `number_of_edges` random edges. Weights are whole numbers in
/// `0..=max_weight`, so path weights add up without rounding.
pub fn random_graph<R: Rng>(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
    rng: &mut R,
) -> ReversibleVecGraph {
    let mut graph = ReversibleVecGraph::with_vertices(number_of_vertices);
    if number_of_vertices < 2 {
        return graph;
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight) as Weight;
        if let Some(edge) = WeightedEdge::new(tail, head, weight) {
            graph.set_edge(&edge);
        }
    }

    graph
}

pub fn random_pairs<R: Rng>(
    graph: &ReversibleVecGraph,
    number_of_pairs: u32,
    rng: &mut R,
) -> Vec<(Vertex, Vertex)> {
    if graph.number_of_vertices() == 0 {
        return Vec::new();
    }

    (0..number_of_pairs)
        .map(|_| {
            (
                rng.gen_range(0..graph.number_of_vertices()),
                rng.gen_range(0..graph.number_of_vertices()),
            )
        })
        .collect()
}

/// Sum of the edge weights along `vertices`, `None` if two consecutive
/// vertices are not connected by an edge.
pub fn path_weight(graph: &ReversibleVecGraph, vertices: &[Vertex]) -> Option<Weight> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| graph.get_weight(tail, head))
        .sum()
}

/// Check if a path is correct for a given request.
pub fn validate_path(
    graph: &ReversibleVecGraph,
    source: Vertex,
    target: Vertex,
    path: &Option<Path<Vertex>>,
    expected: Option<Weight>,
) -> Result<(), String> {
    let Some(path) = path else {
        if expected.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(expected) = expected else {
        return Err("a path was found where there should be none".to_string());
    };

    if path.vertices.first() != Some(&source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let Some(true_weight) = path_weight(graph, &path.vertices) else {
        return Err(format!("path {:?} uses an edge not in the graph", path.vertices));
    };

    if path.distance != expected || true_weight != expected {
        return Err(format!(
            "wrong path weight: reported {}, walked {}, expected {}",
            path.distance, true_weight, expected
        ));
    }

    Ok(())
}

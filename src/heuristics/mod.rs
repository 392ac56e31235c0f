use crate::graphs::Weight;

pub mod landmarks;

/// Estimate of the remaining cost from `node` to `target`.
///
/// A* only returns shortest paths if the estimate never exceeds the true
/// remaining cost. If it additionally satisfies the triangle inequality, a
/// node is never improved after it has been expanded. Neither property is
/// checked.
pub trait HeuristicFunction<N> {
    fn estimate(&self, node: &N, target: &N) -> Weight;
}

impl<N, F> HeuristicFunction<N> for F
where
    F: Fn(&N, &N) -> Weight,
{
    fn estimate(&self, node: &N, target: &N) -> Weight {
        self(node, target)
    }
}

/// Always estimates zero, which turns A* into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N> HeuristicFunction<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _target: &N) -> Weight {
        0.0
    }
}

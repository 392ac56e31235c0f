use super::frontier::Frontier;
use crate::{graphs::Node, queue::MinimumPriorityQueue};

/// Path from the origin of `frontier` to `target`.
pub fn path_from_frontier<N, Q>(frontier: &Frontier<N, Q>, target: &N) -> Vec<N>
where
    N: Node,
    Q: MinimumPriorityQueue<N>,
{
    let mut vertices = frontier.trace(target);
    vertices.reverse();
    vertices
}

/// Joins the forward tree path `source -> touch_node` with the backward tree
/// path `touch_node -> target`, keeping a single copy of `touch_node`.
pub fn path_from_bidirectional_search<N, Q>(
    touch_node: &N,
    forward: &Frontier<N, Q>,
    backward: &Frontier<N, Q>,
) -> Vec<N>
where
    N: Node,
    Q: MinimumPriorityQueue<N>,
{
    let mut vertices = path_from_frontier(forward, touch_node);
    vertices.extend(backward.trace(touch_node).into_iter().skip(1));
    vertices
}

use std::{error::Error, fmt::Debug};

use thiserror::Error;

/// Boxed error raised by a graph while enumerating adjacency.
pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// A graph could not enumerate the neighbors of a node.
#[derive(Debug, Error)]
#[error("failed to enumerate neighbors of {node}")]
pub struct GraphError {
    node: String,
    #[source]
    source: BoxedError,
}

impl GraphError {
    pub fn new(node: &impl Debug, source: impl Into<BoxedError>) -> GraphError {
        GraphError {
            node: format!("{:?}", node),
            source: source.into(),
        }
    }

    /// Debug representation of the node whose neighbors were requested.
    pub fn node(&self) -> &str {
        &self.node
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// Source or target is not a node of the searched graph. Raised before
    /// any search state is allocated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("search was cancelled")]
    Cancelled,
}

impl SearchError {
    pub(crate) fn unknown_node(role: &str, node: &impl Debug) -> SearchError {
        SearchError::InvalidArgument(format!("the {} node {:?} is not in the graph", role, node))
    }
}

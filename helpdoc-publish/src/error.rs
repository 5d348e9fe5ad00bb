//! Publishing errors
//!
//! A render either succeeds completely or fails with the first error found; there is no partial
//! output.

use helpdoc_dom::{ElementKind, NodeId, TreeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// A required sub-element is absent, e.g. a definition without a term
    #[error("{kind} {node} is malformed: {message}")]
    Structural {
        node: NodeId,
        kind: ElementKind,
        message: String,
    },

    /// The node cannot be published with the current setup, e.g. no publisher is registered
    /// for its kind
    #[error("cannot publish {node}: {message}")]
    Configuration { node: NodeId, message: String },

    /// The node is not part of the tree
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl PublishError {
    /// The node the error was raised for.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            PublishError::Structural { node, .. } | PublishError::Configuration { node, .. } => {
                Some(*node)
            }
            PublishError::Tree(TreeError::UnknownNode(node)) => Some(*node),
            PublishError::Tree(_) => None,
        }
    }
}

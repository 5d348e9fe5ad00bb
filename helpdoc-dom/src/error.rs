//! Error types for element tree construction

use crate::elements::ElementKind;
use crate::tree::NodeId;
use thiserror::Error;

/// Errors raised while attaching nodes to an [ElementTree](crate::ElementTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id does not address a node of this tree
    #[error("node {0} does not exist in the element tree")]
    UnknownNode(NodeId),

    /// The child already has a parent
    #[error("node {child} is already attached to {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    /// Attaching would make a node its own ancestor
    #[error("attaching {child} below {parent} would create a cycle")]
    WouldCycle { child: NodeId, parent: NodeId },

    /// The parent does not accept children of this kind in that slot
    #[error("{parent} cannot hold {child} as {slot}")]
    InvalidChild {
        parent: ElementKind,
        child: ElementKind,
        slot: &'static str,
    },
}

//! Indentation
//!
//!     [Indent] is the left margin applied by the [WordWrapper](crate::WordWrapper): `width`
//!     spaces start the first line, and continuation lines get `marker_offset` more. When a marker
//!     such as `1)` is the first token of the first line, the offset is the room the marker takes
//!     there, so wrapped lines line up under the text instead of under the marker.
//!
//!     The resolution helpers implement the ancestor walk shared by the publishers. They are
//!     plain functions so each publisher can compose them into its own `indent_width`.

use crate::context::PublishContext;
use crate::error::PublishError;
use helpdoc_dom::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indent {
    width: usize,
    marker_offset: usize,
}

impl Indent {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            marker_offset: 0,
        }
    }

    /// An indent whose continuation lines hang `marker_offset` columns to the right.
    pub fn hanging(width: usize, marker_offset: usize) -> Self {
        Self {
            width,
            marker_offset,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn marker_offset(&self) -> usize {
        self.marker_offset
    }

    /// Leading spaces of the first line.
    pub fn first_line_width(&self) -> usize {
        self.width
    }

    /// Leading spaces of every line after the first.
    pub fn continuation_width(&self) -> usize {
        self.width + self.marker_offset
    }
}

/// Indent of a non-container block.
///
/// A root block sits at 0. A block held directly by a container sits at the container's own
/// indent; the container's child increment is meant for its sub-containers, not for its content.
/// Any other block sits at its parent's child indent.
pub fn resolve_block_indent(cx: &PublishContext<'_>, node: NodeId) -> Result<usize, PublishError> {
    let tree = cx.tree();
    tree.element(node)?;
    match tree.parent(node) {
        None => Ok(0),
        Some(parent) if tree.is_container(parent) => cx.indent_width(parent),
        Some(parent) => cx.indent_width_for_child(parent),
    }
}

/// Indent of a container: its parent container's child indent, or 0 at the root.
///
/// Only container ancestors are consulted, so nothing between two containers can add to the
/// nesting.
pub fn resolve_container_indent(
    cx: &PublishContext<'_>,
    node: NodeId,
) -> Result<usize, PublishError> {
    let tree = cx.tree();
    tree.element(node)?;
    match tree.parent_container(node) {
        Some(parent) => cx.indent_width_for_child(parent),
        None => Ok(0),
    }
}

//! List publishers
//!
//!     A list publishes its items joined by the block separator; a list nested directly as an
//!     item is published in place, one level deeper. An item's marker sits at the list's indent
//!     and its content one level in:
//!
//!         1) First paragraph of the item, wrapped so that continuation lines
//!           line up with the content below.
//!
//!           Second paragraph.
//!
//!     An item whose first block is not a paragraph gets its marker on a line of its own.

use super::kind_mismatch;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::{resolve_block_indent, Indent};
use crate::marker::create_list_marker;
use crate::publisher::ElementPublisher;
use helpdoc_dom::{ElementKind, NodeId};

pub struct ListPublisher;

impl ElementPublisher for ListPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let list = tree
            .element(node)?
            .as_list()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::List))?;
        cx.publish_blocks(&list.items)
    }

    fn indent_width_for_child(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<usize, PublishError> {
        Ok(resolve_block_indent(cx, node)? + cx.config().list.indent_width_for_child)
    }
}

pub struct ListItemPublisher;

impl ElementPublisher for ListItemPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let item = tree
            .element(node)?
            .as_list_item()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::ListItem))?;

        let marker = create_list_marker(
            tree.list_type_of_item(node),
            tree.list_item_ordinal(node).unwrap_or(0),
            cx.config().list.unordered_marker,
        );
        let Some(marker) = marker else {
            return cx.publish_blocks(&item.blocks);
        };

        let indent = self.indent_width(cx, node)?;
        let Some((first, rest)) = item.blocks.split_first() else {
            return Ok(format!("{}{}", " ".repeat(indent), marker));
        };

        let head = match tree.element(*first)?.as_paragraph() {
            Some(paragraph) => {
                let content_indent = self.indent_width_for_child(cx, node)?;
                let mut tokens = vec![marker];
                tokens.extend(cx.render_inlines(*first, &paragraph.inlines)?);
                // Continuation lines join the content column, whatever the marker width.
                let hanging = Indent::hanging(indent, content_indent.saturating_sub(indent));
                cx.wrapper(hanging).wrap(tokens)
            }
            None => format!("{}{}\n{}", " ".repeat(indent), marker, cx.publish(*first)?),
        };

        let rest = cx.publish_blocks(rest)?;
        if rest.is_empty() {
            Ok(head)
        } else {
            Ok(format!("{}{}{}", head, cx.config().block_separator(), rest))
        }
    }

    /// The owning list's indent; the marker is not shifted.
    fn indent_width(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<usize, PublishError> {
        let tree = cx.tree();
        tree.element(node)?;
        match tree.parent(node) {
            Some(list) => cx.indent_width(list),
            None => Ok(0),
        }
    }

    fn indent_width_for_child(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<usize, PublishError> {
        let tree = cx.tree();
        tree.element(node)?;
        match tree.parent(node) {
            Some(list) => cx.indent_width_for_child(list),
            None => Ok(cx.config().list.indent_width_for_child),
        }
    }
}

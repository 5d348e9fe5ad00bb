//! Definition publishers
//!
//!     A definition is its term, wrapped at the definition's indent with an optional marker in
//!     front, then its descriptions one level in:
//!
//!         2) 'shiftwidth'
//!           Number of spaces to use for each step of (auto)indent.
//!
//!     Marker style and ordinal come from the enclosing definition list. A definition without a
//!     term or without descriptions cannot be published.

use super::kind_mismatch;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::{resolve_block_indent, Indent};
use crate::marker::create_list_marker;
use crate::publisher::ElementPublisher;
use helpdoc_dom::{ElementKind, NodeId};
use unicode_width::UnicodeWidthStr;

pub struct DefinitionListPublisher;

impl ElementPublisher for DefinitionListPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let list = tree
            .element(node)?
            .as_definition_list()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::DefinitionList))?;
        cx.publish_blocks(&list.definitions)
    }
}

pub struct DefinitionPublisher;

impl ElementPublisher for DefinitionPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let definition = tree
            .element(node)?
            .as_definition()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::Definition))?;

        let structural = |message: &str| PublishError::Structural {
            node,
            kind: ElementKind::Definition,
            message: message.to_string(),
        };
        let term = definition.term.ok_or_else(|| structural("missing term"))?;
        let descriptions = definition
            .descriptions
            .as_deref()
            .ok_or_else(|| structural("missing descriptions"))?;
        let term_paragraph = tree
            .element(term)?
            .as_paragraph()
            .ok_or_else(|| kind_mismatch(tree, term, ElementKind::Paragraph))?;

        let marker = create_list_marker(
            tree.definition_list_type(node),
            tree.definition_index(node).unwrap_or(0),
            cx.config().list.unordered_marker,
        );

        let width = self.indent_width(cx, node)?;
        let mut tokens = Vec::with_capacity(term_paragraph.inlines.len() + 1);
        let indent = match marker {
            Some(marker) => {
                let indent = Indent::hanging(width, marker.width() + 1);
                tokens.push(marker);
                indent
            }
            None => Indent::new(width),
        };
        tokens.extend(cx.render_inlines(term, &term_paragraph.inlines)?);

        let term = cx.wrapper(indent).wrap(tokens);
        let descriptions = cx.publish_blocks(descriptions)?;
        Ok(format!("{}\n{}", term, descriptions))
    }

    fn indent_width_for_child(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<usize, PublishError> {
        Ok(resolve_block_indent(cx, node)? + cx.config().definition.descriptions_indent_width)
    }
}

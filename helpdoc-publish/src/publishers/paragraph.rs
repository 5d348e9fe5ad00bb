use super::kind_mismatch;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::Indent;
use crate::publisher::ElementPublisher;
use helpdoc_dom::{ElementKind, NodeId};

/// Word wraps the inlines of a paragraph at its indent.
pub struct ParagraphPublisher;

impl ElementPublisher for ParagraphPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let paragraph = tree
            .element(node)?
            .as_paragraph()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::Paragraph))?;

        let indent = Indent::new(cx.indent_width(node)?);
        let tokens = cx.render_inlines(node, &paragraph.inlines)?;
        Ok(cx.wrapper(indent).wrap(tokens))
    }
}

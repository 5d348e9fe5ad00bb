//! Document publisher
//!
//! The root container of a help file. Top-level sections are separated by a rule spanning the
//! display width, and the file ends with a modeline so the pager opens it as help:
//!
//!     ==============================================================================
//!     vim:tw=78:ts=8:ft=help:norl:

use super::container::{compose_container, container_indent_width_for_child, ContainerLayout};
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::resolve_container_indent;
use crate::publisher::ElementPublisher;
use helpdoc_dom::NodeId;

pub struct DocumentPublisher;

impl DocumentPublisher {
    pub fn modeline(display_width: usize) -> String {
        format!("vim:tw={}:ts=8:ft=help:norl:", display_width)
    }
}

impl ContainerLayout for DocumentPublisher {
    fn publish_footer(
        &self,
        cx: &PublishContext<'_>,
        _node: NodeId,
    ) -> Result<Option<String>, PublishError> {
        let config = cx.config();
        if !config.document.emit_modeline {
            return Ok(None);
        }
        Ok(Some(Self::modeline(config.display_width)))
    }

    fn sub_container_separator(&self, cx: &PublishContext<'_>) -> Option<String> {
        let config = cx.config();
        let rule: String = std::iter::repeat(config.document.section_rule)
            .take(config.display_width)
            .collect();
        Some(format!("{}{}\n", config.block_separator(), rule))
    }
}

impl ElementPublisher for DocumentPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        compose_container(self, cx, node)
    }

    fn indent_width(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<usize, PublishError> {
        resolve_container_indent(cx, node)
    }

    fn indent_width_for_child(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<usize, PublishError> {
        container_indent_width_for_child(cx, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublishConfig;
    use helpdoc_dom::{Container, ElementTree, Paragraph};

    #[test]
    fn test_modeline() {
        assert_eq!(DocumentPublisher::modeline(78), "vim:tw=78:ts=8:ft=help:norl:");
    }

    #[test]
    fn test_sections_are_ruled() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(Container::new("demo.txt").into_document());
        for caption in ["One", "Two"] {
            let section = tree.insert(Container::new(caption));
            tree.add_sub_container(doc, section).unwrap();
        }
        let config = PublishConfig::default().with_display_width(10);

        let output = crate::publish(&tree, doc, &config).unwrap();
        assert_eq!(
            output,
            "demo.txt\n\
             \n\n==========\n  One\n\
             \n\n==========\n  Two\n\
             \n\n==========\nvim:tw=10:ts=8:ft=help:norl:"
        );
    }

    #[test]
    fn test_modeline_can_be_disabled() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(Container::new("demo.txt").into_document());
        let p = tree.insert(Paragraph::from_text("Hello."));
        tree.add_top_element(doc, p).unwrap();
        let mut config = PublishConfig::default();
        config.document.emit_modeline = false;

        let output = crate::publish(&tree, doc, &config).unwrap();
        assert_eq!(output, "demo.txt\nHello.");
    }
}

//! Unwrapped text blocks
//!
//! Preformatted paragraphs pass through untouched between delimiter lines. Code blocks follow
//! the help-file example convention: an opening `>`, the lines shifted right, a closing `<`.

use super::kind_mismatch;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::publisher::ElementPublisher;
use helpdoc_dom::{ElementKind, NodeId};

pub struct PreformattedPublisher;

impl ElementPublisher for PreformattedPublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let preformatted = tree
            .element(node)?
            .as_preformatted()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::PreformattedParagraph))?;

        let delimiter = cx.config().preformatted.delimiter.as_str();
        let mut lines = Vec::with_capacity(preformatted.lines().count() + 2);
        lines.push(delimiter);
        lines.extend(preformatted.lines());
        lines.push(delimiter);
        Ok(lines.join("\n"))
    }
}

pub struct CodePublisher;

impl ElementPublisher for CodePublisher {
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError> {
        let tree = cx.tree();
        let code = tree
            .element(node)?
            .as_code()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::Code))?;

        let rules = &cx.config().code;
        let indent = cx.indent_width(node)?;
        let pad = " ".repeat(indent);
        let line_pad = " ".repeat(indent + rules.indent_width);

        let mut lines = vec![format!("{}{}", pad, rules.open_marker)];
        for line in code.lines() {
            if line.trim().is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{}", line_pad, line));
            }
        }
        lines.push(format!("{}{}", pad, rules.close_marker));
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PublishConfig, PublisherRegistry};
    use helpdoc_dom::{Code, Container, ElementTree, PreformattedParagraph};

    fn render(tree: &ElementTree, node: NodeId, config: &PublishConfig) -> String {
        let registry = PublisherRegistry::with_defaults();
        PublishContext::new(tree, &registry, config)
            .publish(node)
            .unwrap()
    }

    #[test]
    fn test_preformatted_is_not_wrapped() {
        let mut tree = ElementTree::new();
        let text = "a very long line that would certainly be wrapped\n  keep   spacing";
        let node = tree.insert(PreformattedParagraph::new(text));
        let config = PublishConfig::default().with_display_width(10);
        assert_eq!(
            render(&tree, node, &config),
            format!(">>>\n{}\n>>>", text)
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let mut tree = ElementTree::new();
        let node = tree.insert(PreformattedParagraph::new("x"));
        let mut config = PublishConfig::default();
        config.preformatted.delimiter = "```".to_string();
        assert_eq!(render(&tree, node, &config), "```\nx\n```");
    }

    #[test]
    fn test_code_block_in_section() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(Container::new("doc").into_document());
        let section = tree.insert(Container::new("section"));
        tree.add_sub_container(doc, section).unwrap();
        let code = tree.insert(Code::new("let x = 1;\n\nx + 1"));
        tree.add_top_element(section, code).unwrap();

        assert_eq!(
            render(&tree, code, &PublishConfig::default()),
            "  >\n      let x = 1;\n\n      x + 1\n  <"
        );
    }
}

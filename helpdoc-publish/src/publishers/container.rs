//! Container composition
//!
//!     A container publishes as up to four parts, in order. A part that yields nothing is left
//!     out along with its separator:
//!         1. header: the caption wrapped at the container's indent, then the header separator
//!         2. top elements: the blocks directly under the caption
//!         3. sub-containers: each nested section, joined by the sub-container separator and
//!            preceded by one more
//!         4. footer: preceded by the sub-container separator
//!
//!     [ContainerLayout] exposes each part as a hook with the plain-container behavior as its
//!     default. Container variants (documents, contents tables) override the hooks they need
//!     and share [compose_container] for the assembly.

use super::kind_mismatch;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::{resolve_container_indent, Indent};
use crate::publisher::ElementPublisher;
use helpdoc_dom::{Container, ElementKind, NodeId};

pub trait ContainerLayout {
    fn publish_header(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<Option<String>, PublishError> {
        publish_caption(cx, node)
    }

    fn publish_top_elements(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<Option<String>, PublishError> {
        let container = container_payload(cx, node)?;
        let published = cx.publish_blocks(&container.top_elements)?;
        Ok(non_empty(published))
    }

    /// Published sub-containers, or `None` when there are none.
    fn publish_sub_containers_internal(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<Option<Vec<String>>, PublishError> {
        let container = container_payload(cx, node)?;
        if container.sub_containers.is_empty() {
            return Ok(None);
        }
        let published = container
            .sub_containers
            .iter()
            .map(|sub| cx.publish(*sub))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(published))
    }

    fn publish_footer(
        &self,
        _cx: &PublishContext<'_>,
        _node: NodeId,
    ) -> Result<Option<String>, PublishError> {
        Ok(None)
    }

    /// Separator override between sub-containers; `None` keeps the block separator.
    fn sub_container_separator(&self, _cx: &PublishContext<'_>) -> Option<String> {
        None
    }
}

/// Assembles the parts produced by `layout` for `node`.
pub fn compose_container<L: ContainerLayout + ?Sized>(
    layout: &L,
    cx: &PublishContext<'_>,
    node: NodeId,
) -> Result<String, PublishError> {
    let separator = layout
        .sub_container_separator(cx)
        .unwrap_or_else(|| cx.config().block_separator());
    let mut output = String::new();

    if let Some(header) = layout.publish_header(cx, node)? {
        output.push_str(&header);
    }
    if let Some(top_elements) = layout.publish_top_elements(cx, node)? {
        output.push_str(&top_elements);
    }
    if let Some(sub_containers) = layout.publish_sub_containers_internal(cx, node)? {
        output.push_str(&separator);
        output.push_str(&sub_containers.join(&separator));
    }
    if let Some(footer) = layout.publish_footer(cx, node)? {
        output.push_str(&separator);
        output.push_str(&footer);
    }

    Ok(output)
}

/// Caption wrapped at the node's indent, followed by the header separator. `None` for an
/// empty caption.
pub fn publish_caption(
    cx: &PublishContext<'_>,
    node: NodeId,
) -> Result<Option<String>, PublishError> {
    let tree = cx.tree();
    let caption = tree
        .element(node)?
        .caption()
        .ok_or_else(|| kind_mismatch(tree, node, ElementKind::Container))?;

    let indent = Indent::new(cx.indent_width(node)?);
    let wrapped = cx.wrapper(indent).wrap([caption]);
    if wrapped.is_empty() {
        return Ok(None);
    }
    Ok(Some(wrapped + &cx.config().header_separator()))
}

/// Child indent shared by every container variant.
pub(crate) fn container_indent_width_for_child(
    cx: &PublishContext<'_>,
    node: NodeId,
) -> Result<usize, PublishError> {
    Ok(resolve_container_indent(cx, node)? + cx.config().container.indent_width_for_child)
}

pub(crate) fn container_payload<'a>(
    cx: &PublishContext<'a>,
    node: NodeId,
) -> Result<&'a Container, PublishError> {
    let tree = cx.tree();
    tree.element(node)?
        .as_container()
        .ok_or_else(|| kind_mismatch(tree, node, ElementKind::Container))
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Publisher of plain sections.
pub struct ContainerPublisher;

impl ContainerLayout for ContainerPublisher {}

impl ElementPublisher for ContainerPublisher {
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
    use crate::{PublishConfig, PublisherRegistry};
    use helpdoc_dom::{ElementTree, Paragraph};

    fn section_tree() -> (ElementTree, NodeId, NodeId) {
        let mut tree = ElementTree::new();
        let outer = tree.insert(Container::new("Outer"));
        let p = tree.insert(Paragraph::from_text("outer text"));
        tree.add_top_element(outer, p).unwrap();
        let inner = tree.insert(Container::new("Inner"));
        tree.add_sub_container(outer, inner).unwrap();
        let q = tree.insert(Paragraph::from_text("inner text"));
        tree.add_top_element(inner, q).unwrap();
        (tree, outer, inner)
    }

    #[test]
    fn test_compose_header_top_and_sub_containers() {
        let (tree, outer, _) = section_tree();
        let registry = PublisherRegistry::with_defaults();
        let config = PublishConfig::default();
        let output = PublishContext::new(&tree, &registry, &config)
            .publish(outer)
            .unwrap();
        assert_eq!(output, "Outer\nouter text\n\n  Inner\n  inner text");
    }

    #[test]
    fn test_indent_for_child_adds_increment() {
        let (tree, outer, inner) = section_tree();
        let registry = PublisherRegistry::with_defaults();
        let config = PublishConfig::default();
        let cx = PublishContext::new(&tree, &registry, &config);
        assert_eq!(cx.indent_width(outer).unwrap(), 0);
        assert_eq!(cx.indent_width_for_child(outer).unwrap(), 2);
        assert_eq!(cx.indent_width(inner).unwrap(), 2);
        assert_eq!(cx.indent_width_for_child(inner).unwrap(), 4);
    }

    #[test]
    fn test_empty_caption_has_no_header() {
        let mut tree = ElementTree::new();
        let c = tree.insert(Container::new(""));
        let p = tree.insert(Paragraph::from_text("body"));
        tree.add_top_element(c, p).unwrap();
        let output = crate::publish(&tree, c, &PublishConfig::default()).unwrap();
        assert_eq!(output, "body");
    }

    #[test]
    fn test_caption_only() {
        let mut tree = ElementTree::new();
        let c = tree.insert(Container::new("Lonely"));
        let output = crate::publish(&tree, c, &PublishConfig::default()).unwrap();
        assert_eq!(output, "Lonely\n");
    }

    struct Signed;

    impl ContainerLayout for Signed {
        fn publish_footer(
            &self,
            _cx: &PublishContext<'_>,
            _node: NodeId,
        ) -> Result<Option<String>, PublishError> {
            Ok(Some("-- signed".to_string()))
        }

        fn sub_container_separator(&self, _cx: &PublishContext<'_>) -> Option<String> {
            Some("\n~~\n".to_string())
        }
    }

    #[test]
    fn test_layout_hooks() {
        let (tree, outer, _) = section_tree();
        let registry = PublisherRegistry::with_defaults();
        let config = PublishConfig::default();
        let cx = PublishContext::new(&tree, &registry, &config);
        let output = compose_container(&Signed, &cx, outer).unwrap();
        assert_eq!(
            output,
            "Outer\nouter text\n~~\n  Inner\n  inner text\n~~\n-- signed"
        );
    }
}

//! Contents table publisher
//!
//!     A contents table is a container variant whose only content is an index of the visible
//!     containers of its document. Each entry is a head (indent plus hierarchical index) and
//!     the caption:
//!
//!         CONTENTS
//!           1 Introduction
//!           2 Usage
//!             2.1 Options
//!                 2.1.1 Colors
//!
//!     Invisible containers are left out, and their visible descendants take their place under
//!     the nearest visible ancestor, both for the numbering and for the indentation. Nested
//!     entries are indented to start one column after their parent's head, so they line up
//!     under the parent's caption rather than by a fixed step.
//!
//!     A contents table never has sub-containers or a footer.

use super::container::{
    compose_container, container_indent_width_for_child, non_empty, ContainerLayout,
};
use super::kind_mismatch;
use crate::config::ContentsTableRules;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::resolve_container_indent;
use crate::publisher::ElementPublisher;
use helpdoc_dom::{ElementKind, ElementTree, NodeId};
use log::debug;
use unicode_width::UnicodeWidthStr;

pub struct ContentsTablePublisher;

impl ContentsTablePublisher {
    /// Index lines for every visible container of the document holding `node`.
    pub fn publish_contents_table(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<String, PublishError> {
        let tree = cx.tree();
        let rules = &cx.config().contents_table;
        let root = tree.root_of(node);
        let listed: Vec<NodeId> = tree
            .descendant_containers(root)
            .into_iter()
            .filter(|container| tree.is_visible_on_contents_table(*container))
            .collect();
        debug!("contents table {} lists {} containers", node, listed.len());

        let mut entries = Vec::with_capacity(listed.len());
        for container in &listed {
            let caption = tree
                .element(*container)?
                .caption()
                .ok_or_else(|| kind_mismatch(tree, *container, ElementKind::Container))?;
            let head = create_contents_table_head(tree, rules, &listed, *container);
            entries.push(format!("{} {}", head, caption));
        }

        Ok(entries.join(&"\n".repeat(rules.line_space_height + 1)))
    }
}

/// Indent plus index of a listed container.
pub fn create_contents_table_head(
    tree: &ElementTree,
    rules: &ContentsTableRules,
    listed: &[NodeId],
    container: NodeId,
) -> String {
    let indent_width = match listed_ancestor(tree, listed, container) {
        Some(ancestor) => create_contents_table_head(tree, rules, listed, ancestor).width() + 1,
        None => rules.table_margin,
    };
    format!(
        "{}{}",
        " ".repeat(indent_width),
        create_index(tree, rules, listed, container)
    )
}

/// Hierarchical index of a listed container, e.g. `2.1.3`.
///
/// The walk stops at the first ancestor that is not listed, so the document root (or a visible
/// root container) never contributes an ordinal.
pub fn create_index(
    tree: &ElementTree,
    rules: &ContentsTableRules,
    listed: &[NodeId],
    container: NodeId,
) -> String {
    let mut ordinals = Vec::new();
    let mut current = Some(container);
    while let Some(node) = current {
        let parent = listed_ancestor(tree, listed, node);
        if let Some(ordinal) = listed_ordinal(tree, listed, parent, node) {
            ordinals.push(ordinal.to_string());
        }
        current = parent;
    }
    ordinals.reverse();
    format!(
        "{}{}",
        ordinals.join(&rules.index_separator),
        rules.index_suffix
    )
}

/// Nearest ancestor that is itself an entry of the table.
fn listed_ancestor(tree: &ElementTree, listed: &[NodeId], node: NodeId) -> Option<NodeId> {
    tree.ancestors(node)
        .find(|ancestor| listed.contains(ancestor))
}

/// 1-based position of `node` among the entries nested under `parent`.
fn listed_ordinal(
    tree: &ElementTree,
    listed: &[NodeId],
    parent: Option<NodeId>,
    node: NodeId,
) -> Option<usize> {
    listed
        .iter()
        .filter(|sibling| listed_ancestor(tree, listed, **sibling) == parent)
        .position(|sibling| *sibling == node)
        .map(|position| position + 1)
}

impl ContainerLayout for ContentsTablePublisher {
    /// The caption at column 0, never wrapped.
    fn publish_header(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<Option<String>, PublishError> {
        let tree = cx.tree();
        let caption = tree
            .element(node)?
            .caption()
            .ok_or_else(|| kind_mismatch(tree, node, ElementKind::ContentsTable))?;
        if caption.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!("{}{}", caption, cx.config().header_separator())))
    }

    fn publish_top_elements(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<Option<String>, PublishError> {
        Ok(non_empty(self.publish_contents_table(cx, node)?))
    }

    fn publish_sub_containers_internal(
        &self,
        _cx: &PublishContext<'_>,
        _node: NodeId,
    ) -> Result<Option<Vec<String>>, PublishError> {
        Ok(None)
    }
}

impl ElementPublisher for ContentsTablePublisher {
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
    use helpdoc_dom::Container;

    fn section(tree: &mut ElementTree, parent: NodeId, caption: &str) -> NodeId {
        let node = tree.insert(Container::new(caption));
        tree.add_sub_container(parent, node).unwrap();
        node
    }

    #[test]
    fn test_index_numbering() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(Container::new("doc").into_document());
        let a = section(&mut tree, doc, "A");
        let b = section(&mut tree, doc, "B");
        let b1 = section(&mut tree, b, "B1");
        let b2 = section(&mut tree, b, "B2");
        let b2a = section(&mut tree, b2, "B2a");
        let listed = tree.descendant_containers(doc);
        let rules = ContentsTableRules::default();

        assert_eq!(create_index(&tree, &rules, &listed, a), "1");
        assert_eq!(create_index(&tree, &rules, &listed, b), "2");
        assert_eq!(create_index(&tree, &rules, &listed, b1), "2.1");
        assert_eq!(create_index(&tree, &rules, &listed, b2), "2.2");
        assert_eq!(create_index(&tree, &rules, &listed, b2a), "2.2.1");
    }

    #[test]
    fn test_visible_root_container_is_not_numbered() {
        let mut tree = ElementTree::new();
        let root = tree.insert(Container::new("root"));
        let a = section(&mut tree, root, "A");
        let a1 = section(&mut tree, a, "A1");
        let b = section(&mut tree, root, "B");
        let listed = tree.descendant_containers(root);
        let rules = ContentsTableRules::default();

        assert_eq!(create_index(&tree, &rules, &listed, a), "1");
        assert_eq!(create_index(&tree, &rules, &listed, a1), "1.1");
        assert_eq!(create_index(&tree, &rules, &listed, b), "2");
        assert_eq!(create_contents_table_head(&tree, &rules, &listed, a), "  1");
        assert_eq!(create_contents_table_head(&tree, &rules, &listed, a1), "    1.1");
    }

    #[test]
    fn test_index_format_is_configurable() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(Container::new("doc").into_document());
        let a = section(&mut tree, doc, "A");
        let a1 = section(&mut tree, a, "A1");
        let listed = tree.descendant_containers(doc);
        let rules = ContentsTableRules {
            index_separator: "-".to_string(),
            index_suffix: ".".to_string(),
            ..ContentsTableRules::default()
        };
        assert_eq!(create_index(&tree, &rules, &listed, a1), "1-1.");
    }

    #[test]
    fn test_heads_nest_under_parent_head() {
        let mut tree = ElementTree::new();
        let doc = tree.insert(Container::new("doc").into_document());
        let a = section(&mut tree, doc, "A");
        let a1 = section(&mut tree, a, "A1");
        let a1x = section(&mut tree, a1, "A1x");
        let listed = tree.descendant_containers(doc);
        let rules = ContentsTableRules::default();

        assert_eq!(create_contents_table_head(&tree, &rules, &listed, a), "  1");
        assert_eq!(create_contents_table_head(&tree, &rules, &listed, a1), "    1.1");
        assert_eq!(
            create_contents_table_head(&tree, &rules, &listed, a1x),
            "        1.1.1"
        );
    }
}

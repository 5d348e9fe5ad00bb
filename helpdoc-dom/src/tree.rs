//! Element tree arena
//!
//!     [ElementTree] owns every node of a document. Nodes are created detached with
//!     [ElementTree::insert] and then attached to a parent through one of the slot specific
//!     methods (`add_top_element`, `add_sub_container`, `add_list_item`, ...). Each node records
//!     its parent id, which gives publishers the upward queries they need without any owning
//!     back-pointers.
//!
//!     Attachment checks, in order:
//!     - both ids exist
//!     - the parent accepts the child's kind in that slot
//!     - the child is not the parent nor one of its ancestors
//!     - the child is still detached

use crate::elements::{Element, ElementKind, ListType};
use crate::error::TreeError;
use crate::traits::ElementNode;
use std::fmt;

/// Index of a node in an [ElementTree]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a detached node and returns its id.
    pub fn insert(&mut self, element: impl Into<Element>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element: element.into(),
            parent: None,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).map(|node| &node.element)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).map(|node| &mut node.element)
    }

    pub fn element(&self, id: NodeId) -> Result<&Element, TreeError> {
        self.get(id).ok_or(TreeError::UnknownNode(id))
    }

    pub fn kind(&self, id: NodeId) -> Result<ElementKind, TreeError> {
        self.element(id).map(ElementNode::kind)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), &node.element))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Ancestors of `id`, nearest first. The node itself is not included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Nearest ancestor that is a document, container or contents table.
    pub fn parent_container(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).find(|ancestor| self.is_container(*ancestor))
    }

    /// Topmost ancestor of `id`, or `id` itself when detached.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    pub fn is_container(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|e| e.kind().is_container())
    }

    pub fn is_visible_on_contents_table(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(Element::is_visible_on_contents_table)
    }

    /// Direct children of `id` in publishing order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let Some(element) = self.get(id) else {
            return Vec::new();
        };
        match element {
            Element::Document(c) | Element::Container(c) => c
                .top_elements
                .iter()
                .chain(c.sub_containers.iter())
                .copied()
                .collect(),
            Element::List(l) => l.items.clone(),
            Element::ListItem(i) => i.blocks.clone(),
            Element::DefinitionList(l) => l.definitions.clone(),
            Element::Definition(d) => d
                .term
                .iter()
                .chain(d.descriptions.iter().flatten())
                .copied()
                .collect(),
            Element::ContentsTable(_)
            | Element::Paragraph(_)
            | Element::Preformatted(_)
            | Element::Code(_) => Vec::new(),
        }
    }

    /// Sub-containers below `id`, recursively, in pre-order. `id` itself is not included.
    pub fn descendant_containers(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_sub_containers(id, &mut found);
        found
    }

    fn collect_sub_containers(&self, id: NodeId, found: &mut Vec<NodeId>) {
        if let Some(container) = self.get(id).and_then(Element::as_container) {
            for sub in &container.sub_containers {
                found.push(*sub);
                self.collect_sub_containers(*sub, found);
            }
        }
    }

    /// Ordinal of a list item among the `ListItem` siblings of its list.
    ///
    /// Lists nested directly as items are skipped, so they do not shift the numbering.
    pub fn list_item_ordinal(&self, item: NodeId) -> Option<usize> {
        let list = self.parent(item).and_then(|p| self.get(p))?.as_list()?;
        list.items
            .iter()
            .filter(|sibling| matches!(self.get(**sibling), Some(Element::ListItem(_))))
            .position(|sibling| *sibling == item)
    }

    /// Position of a definition in its definition list.
    pub fn definition_index(&self, definition: NodeId) -> Option<usize> {
        let list = self
            .parent(definition)
            .and_then(|p| self.get(p))?
            .as_definition_list()?;
        list.definitions.iter().position(|d| *d == definition)
    }

    /// Marker style inherited from the enclosing definition list.
    pub fn definition_list_type(&self, definition: NodeId) -> ListType {
        self.parent(definition)
            .and_then(|p| self.get(p))
            .and_then(Element::as_definition_list)
            .map_or(ListType::NoMarker, |list| list.list_type)
    }

    /// Marker style of the list owning `item`.
    pub fn list_type_of_item(&self, item: NodeId) -> ListType {
        self.parent(item)
            .and_then(|p| self.get(p))
            .and_then(Element::as_list)
            .map_or(ListType::NoMarker, |list| list.list_type)
    }

    pub fn add_top_element(&mut self, container: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.attach(
            container,
            child,
            "top element",
            |parent, child| parent.is_container() && parent != ElementKind::ContentsTable && child.is_flow_block(),
            |parent, child| {
                if let Some(c) = parent.as_container_mut() {
                    c.top_elements.push(child);
                }
            },
        )
    }

    pub fn add_sub_container(&mut self, container: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.attach(
            container,
            child,
            "sub-container",
            |parent, child| {
                matches!(parent, ElementKind::Document | ElementKind::Container)
                    && matches!(child, ElementKind::Container | ElementKind::ContentsTable)
            },
            |parent, child| {
                if let Some(c) = parent.as_container_mut() {
                    c.sub_containers.push(child);
                }
            },
        )
    }

    /// Appends a `ListItem`, or a nested `List`, to a list.
    pub fn add_list_item(&mut self, list: NodeId, item: NodeId) -> Result<(), TreeError> {
        self.attach(
            list,
            item,
            "list item",
            |parent, child| {
                parent == ElementKind::List
                    && matches!(child, ElementKind::ListItem | ElementKind::List)
            },
            |parent, child| {
                if let Element::List(l) = parent {
                    l.items.push(child);
                }
            },
        )
    }

    pub fn add_block(&mut self, item: NodeId, block: NodeId) -> Result<(), TreeError> {
        self.attach(
            item,
            block,
            "list item block",
            |parent, child| parent == ElementKind::ListItem && child.is_flow_block(),
            |parent, child| {
                if let Element::ListItem(i) = parent {
                    i.blocks.push(child);
                }
            },
        )
    }

    pub fn add_definition(&mut self, list: NodeId, definition: NodeId) -> Result<(), TreeError> {
        self.attach(
            list,
            definition,
            "definition",
            |parent, child| {
                parent == ElementKind::DefinitionList && child == ElementKind::Definition
            },
            |parent, child| {
                if let Element::DefinitionList(l) = parent {
                    l.definitions.push(child);
                }
            },
        )
    }

    /// Sets the term paragraph of a definition. A previous term is detached.
    pub fn set_term(&mut self, definition: NodeId, term: NodeId) -> Result<(), TreeError> {
        let previous = self
            .get(definition)
            .and_then(Element::as_definition)
            .and_then(|d| d.term);
        self.attach(
            definition,
            term,
            "term",
            |parent, child| parent == ElementKind::Definition && child == ElementKind::Paragraph,
            |parent, child| {
                if let Element::Definition(d) = parent {
                    d.term = Some(child);
                }
            },
        )?;
        if let Some(previous) = previous {
            self.nodes[previous.0].parent = None;
        }
        Ok(())
    }

    pub fn add_description(&mut self, definition: NodeId, block: NodeId) -> Result<(), TreeError> {
        self.attach(
            definition,
            block,
            "description",
            |parent, child| parent == ElementKind::Definition && child.is_flow_block(),
            |parent, child| {
                if let Element::Definition(d) = parent {
                    d.descriptions.get_or_insert_with(Vec::new).push(child);
                }
            },
        )
    }

    fn attach(
        &mut self,
        parent: NodeId,
        child: NodeId,
        slot: &'static str,
        accepts: impl FnOnce(ElementKind, ElementKind) -> bool,
        push: impl FnOnce(&mut Element, NodeId),
    ) -> Result<(), TreeError> {
        let parent_kind = self.kind(parent)?;
        let child_kind = self.kind(child)?;
        if !accepts(parent_kind, child_kind) {
            return Err(TreeError::InvalidChild {
                parent: parent_kind,
                child: child_kind,
                slot,
            });
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(TreeError::WouldCycle { child, parent });
        }
        if let Some(current) = self.parent(child) {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        push(&mut self.nodes[parent.0].element, child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }
}

/// Iterator over the ancestors of a node, nearest first
pub struct Ancestors<'a> {
    tree: &'a ElementTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

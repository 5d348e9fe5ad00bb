//! Container and contents-table elements
//!
//! A container is a section of a help file. It has a caption, the blocks that appear directly
//! under the caption ("top elements"), and nested sections ("sub-containers"). The document
//! itself is a container stored as [Element::Document](super::Element::Document).
//!
//! Containers are listed by contents tables unless they opt out with
//! [Container::hidden_from_contents_table]. Opting out only hides the container itself: its
//! visible descendants are still listed, nested under the nearest visible ancestor.
//!
//! Examples:
//!     Introduction
//!     Text directly under the caption is a top element.
//!
//!       Usage
//!       A sub-container, one level deeper.

use super::super::traits::{truncate_label, ElementNode};
use super::{Element, ElementKind};
use crate::tree::NodeId;

/// A captioned section with top elements and sub-containers
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub caption: String,
    pub top_elements: Vec<NodeId>,
    pub sub_containers: Vec<NodeId>,
    pub visible_on_contents_table: bool,
}

impl Container {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            top_elements: Vec::new(),
            sub_containers: Vec::new(),
            visible_on_contents_table: true,
        }
    }

    /// Builder: keep this container out of contents tables.
    pub fn hidden_from_contents_table(mut self) -> Self {
        self.visible_on_contents_table = false;
        self
    }

    /// Wraps the container as the root document element.
    pub fn into_document(self) -> Element {
        Element::Document(self)
    }
}

impl From<Container> for Element {
    fn from(value: Container) -> Self {
        Element::Container(value)
    }
}

impl ElementNode for Container {
    fn kind(&self) -> ElementKind {
        ElementKind::Container
    }

    fn display_label(&self) -> String {
        truncate_label(&self.caption, 50)
    }
}

/// Default caption of a contents table
pub const CONTENTS_CAPTION: &str = "CONTENTS";

/// A generated index of the visible containers of the enclosing document.
///
/// The table has no content of its own; publishers compute its entries from the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentsTable {
    pub caption: String,
}

impl ContentsTable {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
        }
    }
}

impl Default for ContentsTable {
    fn default() -> Self {
        Self::new(CONTENTS_CAPTION)
    }
}

impl ElementNode for ContentsTable {
    fn kind(&self) -> ElementKind {
        ElementKind::ContentsTable
    }

    fn display_label(&self) -> String {
        self.caption.clone()
    }
}

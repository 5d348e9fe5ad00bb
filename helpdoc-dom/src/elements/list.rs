//! List element
//!
//! A list is an ordered collection of items. Each item is a collection of blocks; the first
//! block carries the item marker. Lists nest in two ways: a list item can hold a list among its
//! blocks, or a list can take another list directly as one of its items. A directly nested list
//! takes no marker and no ordinal of its own.
//!
//! Examples:
//!     1) Groceries
//!
//!       1) Bread
//!
//!       2) Milk

use super::super::traits::ElementNode;
use super::ElementKind;
use crate::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker style of list items and definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListType {
    #[default]
    NoMarker,
    Unordered,
    Ordered,
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListType::NoMarker => "no_marker",
            ListType::Unordered => "unordered",
            ListType::Ordered => "ordered",
        };
        f.write_str(name)
    }
}

/// A list of items; `items` holds `ListItem` or nested `List` nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    pub list_type: ListType,
    pub items: Vec<NodeId>,
}

impl List {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            items: Vec::new(),
        }
    }
}

impl ElementNode for List {
    fn kind(&self) -> ElementKind {
        ElementKind::List
    }

    fn display_label(&self) -> String {
        format!("{} list, {} items", self.list_type, self.items.len())
    }
}

/// The blocks of a single list item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub blocks: Vec<NodeId>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElementNode for ListItem {
    fn kind(&self) -> ElementKind {
        ElementKind::ListItem
    }

    fn display_label(&self) -> String {
        format!("{} blocks", self.blocks.len())
    }
}

//! Definition lists
//!
//! A definition pairs a term (a paragraph) with one or more description blocks. Definitions
//! live in a definition list, which decides their marker style; a definition's ordinal is its
//! position in that list.
//!
//! The term and the descriptions are optional at construction time so that documents can be
//! assembled incrementally. Publishing a definition that still lacks either is a structural
//! error.
//!
//! Examples:
//!     1) 'tabstop'
//!       Number of spaces that a <Tab> in the file counts for.

use super::super::traits::ElementNode;
use super::list::ListType;
use super::ElementKind;
use crate::tree::NodeId;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefinitionList {
    pub list_type: ListType,
    pub definitions: Vec<NodeId>,
}

impl DefinitionList {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            definitions: Vec::new(),
        }
    }
}

impl ElementNode for DefinitionList {
    fn kind(&self) -> ElementKind {
        ElementKind::DefinitionList
    }

    fn display_label(&self) -> String {
        format!("{} definitions", self.definitions.len())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Definition {
    pub term: Option<NodeId>,
    pub descriptions: Option<Vec<NodeId>>,
}

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElementNode for Definition {
    fn kind(&self) -> ElementKind {
        ElementKind::Definition
    }

    fn display_label(&self) -> String {
        let descriptions = self.descriptions.as_ref().map_or(0, Vec::len);
        match self.term {
            Some(term) => format!("term {}, {} descriptions", term, descriptions),
            None => format!("no term, {} descriptions", descriptions),
        }
    }
}

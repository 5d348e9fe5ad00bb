//! Element payloads for helpdoc documents
//!
//!     There are two families of elements: blocks and inlines.
//!
//!     Blocks:
//!         Blocks take at least a full line of output and are nodes of the
//!         [ElementTree](crate::ElementTree). Their payloads reference their children by
//!         [NodeId](crate::NodeId).
//!         - Document and Container: a caption, top elements and sub-containers. See [container].
//!         - ContentsTable: an index of the visible containers of the document. See [container].
//!         - Paragraph: inline content that gets word wrapped. See [paragraph].
//!         - PreformattedParagraph and Code: text that is never wrapped. See [preformatted].
//!         - List and ListItem: marked, nestable item collections. See [list].
//!         - DefinitionList and Definition: terms with descriptions. See [definition].
//!
//!     Inlines:
//!         Inlines are leaves held by a paragraph. They are plain values rather than tree nodes,
//!         since they carry no structure of their own. See [inline].

pub mod container;
pub mod definition;
pub mod inline;
pub mod list;
pub mod paragraph;
pub mod preformatted;

pub use container::{Container, ContentsTable};
pub use definition::{Definition, DefinitionList};
pub use inline::{Inline, InlineKind};
pub use list::{List, ListItem, ListType};
pub use paragraph::Paragraph;
pub use preformatted::{Code, PreformattedParagraph};

use crate::traits::ElementNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying the kind of a block element. Publishers are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Document,
    Container,
    ContentsTable,
    Paragraph,
    PreformattedParagraph,
    Code,
    List,
    ListItem,
    DefinitionList,
    Definition,
}

impl ElementKind {
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Document,
        ElementKind::Container,
        ElementKind::ContentsTable,
        ElementKind::Paragraph,
        ElementKind::PreformattedParagraph,
        ElementKind::Code,
        ElementKind::List,
        ElementKind::ListItem,
        ElementKind::DefinitionList,
        ElementKind::Definition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Document => "Document",
            ElementKind::Container => "Container",
            ElementKind::ContentsTable => "ContentsTable",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::PreformattedParagraph => "PreformattedParagraph",
            ElementKind::Code => "Code",
            ElementKind::List => "List",
            ElementKind::ListItem => "ListItem",
            ElementKind::DefinitionList => "DefinitionList",
            ElementKind::Definition => "Definition",
        }
    }

    /// Whether elements of this kind act as sectioning containers (caption plus sub-containers).
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ElementKind::Document | ElementKind::Container | ElementKind::ContentsTable
        )
    }

    /// Whether elements of this kind may appear in a block collection
    /// (container top elements, list item blocks, definition descriptions).
    pub fn is_flow_block(&self) -> bool {
        matches!(
            self,
            ElementKind::Paragraph
                | ElementKind::PreformattedParagraph
                | ElementKind::Code
                | ElementKind::List
                | ElementKind::DefinitionList
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A block element payload stored in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// The root container of a help file
    Document(Container),
    Container(Container),
    ContentsTable(ContentsTable),
    Paragraph(Paragraph),
    Preformatted(PreformattedParagraph),
    Code(Code),
    List(List),
    ListItem(ListItem),
    DefinitionList(DefinitionList),
    Definition(Definition),
}

impl Element {
    /// Container payload of a `Document` or `Container` element.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Element::Document(c) | Element::Container(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Element::Document(c) | Element::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_contents_table(&self) -> Option<&ContentsTable> {
        match self {
            Element::ContentsTable(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Element::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_preformatted(&self) -> Option<&PreformattedParagraph> {
        match self {
            Element::Preformatted(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<&Code> {
        match self {
            Element::Code(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Element::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_item(&self) -> Option<&ListItem> {
        match self {
            Element::ListItem(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_definition_list(&self) -> Option<&DefinitionList> {
        match self {
            Element::DefinitionList(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_definition(&self) -> Option<&Definition> {
        match self {
            Element::Definition(d) => Some(d),
            _ => None,
        }
    }

    /// Caption of container-like elements.
    pub fn caption(&self) -> Option<&str> {
        match self {
            Element::Document(c) | Element::Container(c) => Some(&c.caption),
            Element::ContentsTable(t) => Some(&t.caption),
            _ => None,
        }
    }

    /// Whether the element is listed by a contents table. Only plain containers can be.
    pub fn is_visible_on_contents_table(&self) -> bool {
        match self {
            Element::Container(c) => c.visible_on_contents_table,
            _ => false,
        }
    }
}

impl ElementNode for Element {
    fn kind(&self) -> ElementKind {
        match self {
            Element::Document(_) => ElementKind::Document,
            Element::Container(_) => ElementKind::Container,
            Element::ContentsTable(_) => ElementKind::ContentsTable,
            Element::Paragraph(_) => ElementKind::Paragraph,
            Element::Preformatted(_) => ElementKind::PreformattedParagraph,
            Element::Code(_) => ElementKind::Code,
            Element::List(_) => ElementKind::List,
            Element::ListItem(_) => ElementKind::ListItem,
            Element::DefinitionList(_) => ElementKind::DefinitionList,
            Element::Definition(_) => ElementKind::Definition,
        }
    }

    fn display_label(&self) -> String {
        match self {
            Element::Document(c) | Element::Container(c) => c.display_label(),
            Element::ContentsTable(t) => t.display_label(),
            Element::Paragraph(p) => p.display_label(),
            Element::Preformatted(p) => p.display_label(),
            Element::Code(c) => c.display_label(),
            Element::List(l) => l.display_label(),
            Element::ListItem(i) => i.display_label(),
            Element::DefinitionList(l) => l.display_label(),
            Element::Definition(d) => d.display_label(),
        }
    }
}

macro_rules! impl_from_payload {
    ($($payload:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Element {
                fn from(value: $payload) -> Self {
                    Element::$variant(value)
                }
            }
        )*
    };
}

impl_from_payload! {
    ContentsTable => ContentsTable,
    Paragraph => Paragraph,
    PreformattedParagraph => Preformatted,
    Code => Code,
    List => List,
    ListItem => ListItem,
    DefinitionList => DefinitionList,
    Definition => Definition,
}

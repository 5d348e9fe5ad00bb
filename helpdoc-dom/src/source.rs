//! Serializable source format for element trees
//!
//!     Documents reach the engine already structured; this module is the serde representation
//!     of such a structure, so a tree can be stored as JSON (or any serde format) and rebuilt with
//!     [ElementTree::from_source]. It is a nested mirror of the arena: blocks are tagged by
//!     `"type"`, inlines are bare strings or `{"type": "tag", "text": "..."}` objects.
//!
//!     {
//!       "type": "document",
//!       "caption": "*example.txt*  An example",
//!       "sections": [
//!         { "type": "contents_table" },
//!         {
//!           "type": "container",
//!           "caption": "Introduction",
//!           "top": [ { "type": "paragraph", "inlines": ["See", {"type": "link", "text": "usage"}] } ]
//!         }
//!       ]
//!     }
//!
//!     List items are either an array of blocks or a nested list object. Definition terms and
//!     descriptions may be omitted; the tree keeps them absent and publishing reports it.

use crate::elements::{
    Code, Container, ContentsTable, Definition, DefinitionList, Element, Inline, InlineKind,
    List, ListItem, ListType, Paragraph, PreformattedParagraph,
};
use crate::error::TreeError;
use crate::tree::{ElementTree, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceElement {
    Document {
        caption: String,
        #[serde(default)]
        top: Vec<SourceElement>,
        #[serde(default)]
        sections: Vec<SourceElement>,
    },
    Container {
        caption: String,
        #[serde(default)]
        top: Vec<SourceElement>,
        #[serde(default)]
        sections: Vec<SourceElement>,
        #[serde(default = "visible_by_default")]
        visible_on_contents_table: bool,
    },
    ContentsTable {
        #[serde(default)]
        caption: Option<String>,
    },
    Paragraph {
        inlines: Vec<SourceInline>,
    },
    Preformatted {
        text: String,
    },
    Code {
        text: String,
    },
    List {
        list_type: ListType,
        items: Vec<SourceListItem>,
    },
    DefinitionList {
        list_type: ListType,
        definitions: Vec<SourceDefinition>,
    },
}

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceInline {
    Text(String),
    Decorated {
        #[serde(rename = "type")]
        kind: InlineKind,
        text: String,
    },
}

impl From<&SourceInline> for Inline {
    fn from(source: &SourceInline) -> Self {
        match source {
            SourceInline::Text(text) => Inline::Text(text.clone()),
            SourceInline::Decorated { kind, text } => match kind {
                InlineKind::Tag => Inline::Tag(text.clone()),
                InlineKind::Link => Inline::Link(text.clone()),
                InlineKind::Code => Inline::Code(text.clone()),
                InlineKind::Strong => Inline::Strong(text.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceListItem {
    Blocks(Vec<SourceElement>),
    Nested(SourceElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceDefinition {
    #[serde(default)]
    pub term: Option<Vec<SourceInline>>,
    #[serde(default)]
    pub descriptions: Option<Vec<SourceElement>>,
}

impl ElementTree {
    /// Builds a new tree from `source`, returning it together with the id of the root node.
    pub fn from_source(source: &SourceElement) -> Result<(ElementTree, NodeId), TreeError> {
        let mut tree = ElementTree::new();
        let root = tree.load(source)?;
        Ok((tree, root))
    }

    /// Inserts `source` and its descendants as a new detached subtree.
    pub fn load(&mut self, source: &SourceElement) -> Result<NodeId, TreeError> {
        match source {
            SourceElement::Document {
                caption,
                top,
                sections,
            } => {
                let id = self.insert(Element::Document(Container::new(caption.clone())));
                self.load_container_content(id, top, sections)?;
                Ok(id)
            }
            SourceElement::Container {
                caption,
                top,
                sections,
                visible_on_contents_table,
            } => {
                let mut container = Container::new(caption.clone());
                container.visible_on_contents_table = *visible_on_contents_table;
                let id = self.insert(container);
                self.load_container_content(id, top, sections)?;
                Ok(id)
            }
            SourceElement::ContentsTable { caption } => Ok(self.insert(match caption {
                Some(caption) => ContentsTable::new(caption.clone()),
                None => ContentsTable::default(),
            })),
            SourceElement::Paragraph { inlines } => {
                Ok(self.insert(Paragraph::new(inlines.iter().map(Inline::from).collect())))
            }
            SourceElement::Preformatted { text } => {
                Ok(self.insert(PreformattedParagraph::new(text.clone())))
            }
            SourceElement::Code { text } => Ok(self.insert(Code::new(text.clone()))),
            SourceElement::List { list_type, items } => {
                let list = self.insert(List::new(*list_type));
                for item in items {
                    let child = match item {
                        SourceListItem::Blocks(blocks) => {
                            let item = self.insert(ListItem::new());
                            for block in blocks {
                                let block = self.load(block)?;
                                self.add_block(item, block)?;
                            }
                            item
                        }
                        SourceListItem::Nested(nested) => self.load(nested)?,
                    };
                    self.add_list_item(list, child)?;
                }
                Ok(list)
            }
            SourceElement::DefinitionList {
                list_type,
                definitions,
            } => {
                let list = self.insert(DefinitionList::new(*list_type));
                for source in definitions {
                    let definition = self.load_definition(source)?;
                    self.add_definition(list, definition)?;
                }
                Ok(list)
            }
        }
    }

    fn load_container_content(
        &mut self,
        container: NodeId,
        top: &[SourceElement],
        sections: &[SourceElement],
    ) -> Result<(), TreeError> {
        for element in top {
            let child = self.load(element)?;
            self.add_top_element(container, child)?;
        }
        for section in sections {
            let child = self.load(section)?;
            self.add_sub_container(container, child)?;
        }
        Ok(())
    }

    fn load_definition(&mut self, source: &SourceDefinition) -> Result<NodeId, TreeError> {
        let definition = self.insert(Definition::new());
        if let Some(term) = &source.term {
            let term = self.insert(Paragraph::new(term.iter().map(Inline::from).collect()));
            self.set_term(definition, term)?;
        }
        if let Some(descriptions) = &source.descriptions {
            if descriptions.is_empty() {
                if let Some(Element::Definition(d)) = self.get_mut(definition) {
                    d.descriptions = Some(Vec::new());
                }
            }
            for block in descriptions {
                let block = self.load(block)?;
                self.add_description(definition, block)?;
            }
        }
        Ok(definition)
    }
}

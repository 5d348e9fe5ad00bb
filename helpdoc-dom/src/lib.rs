//! # helpdoc-dom
//!
//! The element tree consumed by the helpdoc publishing engine.
//!
//! Layout
//!
//!     Documents are built once, as a tree of typed nodes, and then handed read-only to the
//!     publishers. The tree is an arena: every node lives in [ElementTree] and is addressed by a
//!     [NodeId]. Parents own their children through the id collections stored in the element
//!     payloads, and every node keeps a non-owning `parent` id for upward queries (nearest
//!     container, enclosing list, ...).
//!
//!     .
//!     ├── elements        # Element payloads (paragraph, container, list, definition, ...)
//!     ├── error.rs        # TreeError
//!     ├── source.rs       # serde source format and tree loading
//!     ├── traits.rs       # ElementNode
//!     └── tree.rs         # ElementTree arena, attachment and navigation
//!
//!     Attachment is validated: a node can only be attached once, only to a parent that accepts its
//!     kind, and never below itself. A tree that was built successfully is therefore acyclic.

pub mod elements;
pub mod error;
pub mod source;
pub mod traits;
pub mod tree;

pub use elements::{
    Code, Container, ContentsTable, Definition, DefinitionList, Element, ElementKind, Inline,
    InlineKind, List, ListItem, ListType, Paragraph, PreformattedParagraph,
};
pub use error::TreeError;
pub use source::{SourceDefinition, SourceElement, SourceInline, SourceListItem};
pub use traits::ElementNode;
pub use tree::{ElementTree, NodeId};

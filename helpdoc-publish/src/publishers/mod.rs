//! Element publishers
//!
//! One module per element family. Each publisher is a unit struct implementing
//! [ElementPublisher](crate::ElementPublisher); the registry owns one instance per kind.
//!
//!     container.rs        # ContainerLayout, ContainerPublisher
//!     contents_table.rs   # ContentsTablePublisher, index numbering
//!     definition.rs       # DefinitionListPublisher, DefinitionPublisher
//!     document.rs         # DocumentPublisher
//!     inline.rs           # DelimitedInlinePublisher
//!     list.rs             # ListPublisher, ListItemPublisher
//!     paragraph.rs        # ParagraphPublisher
//!     preformatted.rs     # PreformattedPublisher, CodePublisher

pub mod container;
pub mod contents_table;
pub mod definition;
pub mod document;
pub mod inline;
pub mod list;
pub mod paragraph;
pub mod preformatted;

pub use container::{compose_container, ContainerLayout, ContainerPublisher};
pub use contents_table::ContentsTablePublisher;
pub use definition::{DefinitionListPublisher, DefinitionPublisher};
pub use document::DocumentPublisher;
pub use inline::DelimitedInlinePublisher;
pub use list::{ListItemPublisher, ListPublisher};
pub use paragraph::ParagraphPublisher;
pub use preformatted::{CodePublisher, PreformattedPublisher};

use crate::error::PublishError;
use helpdoc_dom::{ElementKind, ElementNode, ElementTree, NodeId};

/// Error for a publisher handed a node of another kind, e.g. through a misconfigured registry.
pub(crate) fn kind_mismatch(
    tree: &ElementTree,
    node: NodeId,
    expected: ElementKind,
) -> PublishError {
    let found = tree.element(node).map(|e| e.kind());
    PublishError::Configuration {
        node,
        message: match found {
            Ok(kind) => format!("expected {}, found {}", expected, kind),
            Err(_) => format!("expected {}", expected),
        },
    }
}

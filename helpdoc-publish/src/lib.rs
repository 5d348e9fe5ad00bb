//! Publishing engine for helpdoc element trees
//!
//!     This crate turns a read-only [ElementTree](helpdoc_dom::ElementTree) into fixed-width
//!     plain text in the style of terminal help files: wrapped paragraphs, indented sections,
//!     marked lists and definitions, and a generated table of contents.
//!
//! Architecture
//!
//!     - ElementPublisher: the capability every element kind implements (`publish`,
//!       `indent_width`, `indent_width_for_child`). See [publisher].
//!     - PublisherRegistry: maps element kinds to publishers, built once and passed in.
//!     - PublishContext: the tree, the registry and the configuration of one render. Publishers
//!       hold no state; everything they need comes through the context.
//!     - WordWrapper and Indent: greedy, indent-aware line folding. See [wrap] and [indent].
//!
//!     .
//!     ├── config.rs           # PublishConfig and its documented defaults
//!     ├── context.rs          # PublishContext
//!     ├── error.rs            # PublishError
//!     ├── indent.rs           # Indent, ancestor-walk indent resolution
//!     ├── marker.rs           # list and definition markers
//!     ├── publisher.rs        # ElementPublisher / InlinePublisher traits
//!     ├── publishers          # one module per element family
//!     ├── registry.rs         # PublisherRegistry
//!     └── wrap.rs             # WordWrapper
//!
//! Indentation
//!
//!     Indentation is never passed down while publishing. Each node derives its indent by asking
//!     its ancestors' publishers, so composing output and computing indents are two independent
//!     recursions over the same tree:
//!     - a container sits at its parent container's child indent
//!     - a block directly inside a container sits at the container's own indent
//!     - any other block sits at its parent's child indent
//!
//!     This is a pure lib: no I/O, no globals. Rendering the same tree twice yields the same bytes.

pub mod config;
pub mod context;
pub mod error;
pub mod indent;
pub mod marker;
pub mod publisher;
pub mod publishers;
pub mod registry;
pub mod wrap;

pub use config::{MarkSymbol, PublishConfig};
pub use context::PublishContext;
pub use error::PublishError;
pub use indent::Indent;
pub use publisher::{ElementPublisher, InlinePublisher};
pub use registry::PublisherRegistry;
pub use wrap::WordWrapper;

use helpdoc_dom::{ElementTree, NodeId};

/// Publishes `root` and everything below it with the default publishers.
pub fn publish(
    tree: &ElementTree,
    root: NodeId,
    config: &PublishConfig,
) -> Result<String, PublishError> {
    let registry = PublisherRegistry::with_defaults();
    PublishContext::new(tree, &registry, config).publish(root)
}

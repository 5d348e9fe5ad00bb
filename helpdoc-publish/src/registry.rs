//! Publisher registry
//!
//! Maps each element kind to the publisher responsible for it. A registry is built once, at
//! startup, and handed to every render through the [PublishContext](crate::PublishContext);
//! kinds without a publisher fail to publish with a configuration error.

use crate::publisher::{ElementPublisher, InlinePublisher};
use crate::publishers::{
    CodePublisher, ContainerPublisher, ContentsTablePublisher, DefinitionListPublisher,
    DefinitionPublisher, DelimitedInlinePublisher, DocumentPublisher, ListItemPublisher,
    ListPublisher, ParagraphPublisher, PreformattedPublisher,
};
use helpdoc_dom::{ElementKind, InlineKind};
use log::debug;
use std::collections::HashMap;

/// Registry of element and inline publishers
///
/// # Examples
///
/// ```ignore
/// let mut registry = PublisherRegistry::with_defaults();
/// registry.register(ElementKind::Paragraph, MyParagraphPublisher);
///
/// let output = PublishContext::new(&tree, &registry, &config).publish(root)?;
/// ```
pub struct PublisherRegistry {
    publishers: HashMap<ElementKind, Box<dyn ElementPublisher>>,
    inline_publishers: HashMap<InlineKind, Box<dyn InlinePublisher>>,
}

impl PublisherRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        PublisherRegistry {
            publishers: HashMap::new(),
            inline_publishers: HashMap::new(),
        }
    }

    /// Register the publisher of an element kind, replacing any previous one.
    pub fn register<P: ElementPublisher + 'static>(&mut self, kind: ElementKind, publisher: P) {
        debug!("registering publisher for {}", kind);
        self.publishers.insert(kind, Box::new(publisher));
    }

    /// Register the publisher of an inline kind, replacing any previous one.
    pub fn register_inline<P: InlinePublisher + 'static>(&mut self, kind: InlineKind, publisher: P) {
        debug!("registering inline publisher for {}", kind);
        self.inline_publishers.insert(kind, Box::new(publisher));
    }

    pub fn get(&self, kind: ElementKind) -> Option<&dyn ElementPublisher> {
        self.publishers.get(&kind).map(|p| p.as_ref())
    }

    pub fn inline(&self, kind: InlineKind) -> Option<&dyn InlinePublisher> {
        self.inline_publishers.get(&kind).map(|p| p.as_ref())
    }

    pub fn has(&self, kind: ElementKind) -> bool {
        self.publishers.contains_key(&kind)
    }

    /// Registered element kinds (sorted)
    pub fn kinds(&self) -> Vec<ElementKind> {
        let mut kinds: Vec<_> = self.publishers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Create a registry with the help-file publishers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(ElementKind::Document, DocumentPublisher);
        registry.register(ElementKind::Container, ContainerPublisher);
        registry.register(ElementKind::ContentsTable, ContentsTablePublisher);
        registry.register(ElementKind::Paragraph, ParagraphPublisher);
        registry.register(ElementKind::PreformattedParagraph, PreformattedPublisher);
        registry.register(ElementKind::Code, CodePublisher);
        registry.register(ElementKind::List, ListPublisher);
        registry.register(ElementKind::ListItem, ListItemPublisher);
        registry.register(ElementKind::DefinitionList, DefinitionListPublisher);
        registry.register(ElementKind::Definition, DefinitionPublisher);

        registry.register_inline(InlineKind::Tag, DelimitedInlinePublisher::tag());
        registry.register_inline(InlineKind::Link, DelimitedInlinePublisher::link());
        registry.register_inline(InlineKind::Code, DelimitedInlinePublisher::code());
        registry.register_inline(InlineKind::Strong, DelimitedInlinePublisher::strong());

        registry
    }
}

impl Default for PublisherRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

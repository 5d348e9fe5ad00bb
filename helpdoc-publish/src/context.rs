//! Render context
//!
//! A [PublishContext] bundles what one render reads: the tree, the registry and the
//! configuration. It is created by the caller and passed by reference through every publisher,
//! which keeps publishers free of global state. Nothing in it is mutated while publishing.

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::indent::Indent;
use crate::publisher::ElementPublisher;
use crate::registry::PublisherRegistry;
use crate::wrap::WordWrapper;
use helpdoc_dom::{ElementNode, ElementTree, Inline, NodeId};
use log::trace;

#[derive(Clone, Copy)]
pub struct PublishContext<'a> {
    tree: &'a ElementTree,
    registry: &'a PublisherRegistry,
    config: &'a PublishConfig,
}

impl<'a> PublishContext<'a> {
    pub fn new(
        tree: &'a ElementTree,
        registry: &'a PublisherRegistry,
        config: &'a PublishConfig,
    ) -> Self {
        Self {
            tree,
            registry,
            config,
        }
    }

    pub fn tree(&self) -> &'a ElementTree {
        self.tree
    }

    pub fn registry(&self) -> &'a PublisherRegistry {
        self.registry
    }

    pub fn config(&self) -> &'a PublishConfig {
        self.config
    }

    /// The publisher registered for the kind of `node`.
    pub fn publisher_for(&self, node: NodeId) -> Result<&'a dyn ElementPublisher, PublishError> {
        let kind = self.tree.kind(node)?;
        self.registry
            .get(kind)
            .ok_or_else(|| PublishError::Configuration {
                node,
                message: format!("no publisher registered for {}", kind),
            })
    }

    pub fn publish(&self, node: NodeId) -> Result<String, PublishError> {
        let publisher = self.publisher_for(node)?;
        if log::log_enabled!(log::Level::Trace) {
            let element = self.tree.element(node)?;
            trace!(
                "publishing {} {} ({})",
                element.kind(),
                node,
                element.display_label()
            );
        }
        publisher.publish(self, node)
    }

    pub fn indent_width(&self, node: NodeId) -> Result<usize, PublishError> {
        self.publisher_for(node)?.indent_width(self, node)
    }

    pub fn indent_width_for_child(&self, node: NodeId) -> Result<usize, PublishError> {
        self.publisher_for(node)?.indent_width_for_child(self, node)
    }

    /// Publishes a block collection, joining the non-empty results with the block separator.
    pub fn publish_blocks(&self, blocks: &[NodeId]) -> Result<String, PublishError> {
        let mut parts = Vec::with_capacity(blocks.len());
        for block in blocks {
            let published = self.publish(*block)?;
            if !published.is_empty() {
                parts.push(published);
            }
        }
        Ok(parts.join(&self.config.block_separator()))
    }

    /// Renders the inlines of `node` to wrapper tokens. Plain text passes through.
    pub fn render_inlines(
        &self,
        node: NodeId,
        inlines: &[Inline],
    ) -> Result<Vec<String>, PublishError> {
        inlines
            .iter()
            .map(|inline| match inline.kind() {
                None => Ok(inline.text().to_string()),
                Some(kind) => self
                    .registry
                    .inline(kind)
                    .map(|publisher| publisher.publish(inline.text()))
                    .ok_or_else(|| PublishError::Configuration {
                        node,
                        message: format!("no inline publisher registered for {}", kind),
                    }),
            })
            .collect()
    }

    /// A wrapper at the configured display width.
    pub fn wrapper(&self, indent: Indent) -> WordWrapper {
        WordWrapper::new(self.config.display_width, indent)
    }
}

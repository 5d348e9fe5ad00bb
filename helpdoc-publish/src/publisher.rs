//! Publisher traits
//!
//! Every element kind is rendered by an [ElementPublisher]. The trait is small on purpose: the
//! output contract (`publish`) and the two indent queries that descendants use to place
//! themselves. The default indent behavior is the shared ancestor walk from [crate::indent].

use crate::context::PublishContext;
use crate::error::PublishError;
use crate::indent::resolve_block_indent;
use helpdoc_dom::NodeId;

/// Renders one element kind.
///
/// Implementors are stateless; anything a render needs comes through the [PublishContext], so
/// one publisher instance can serve any number of renders.
pub trait ElementPublisher: Send + Sync {
    /// Renders `node` and everything below it.
    fn publish(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<String, PublishError>;

    /// Left margin of `node` itself.
    fn indent_width(&self, cx: &PublishContext<'_>, node: NodeId) -> Result<usize, PublishError> {
        resolve_block_indent(cx, node)
    }

    /// Left margin for content one level below `node`.
    fn indent_width_for_child(
        &self,
        cx: &PublishContext<'_>,
        node: NodeId,
    ) -> Result<usize, PublishError> {
        self.indent_width(cx, node)
    }
}

/// Renders the text of a decorated inline (tag, link, ...).
pub trait InlinePublisher: Send + Sync {
    fn publish(&self, text: &str) -> String;
}

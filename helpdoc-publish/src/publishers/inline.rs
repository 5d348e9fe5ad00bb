use crate::publisher::InlinePublisher;

/// Wraps inline text between two delimiters, e.g. `*tag*` or `|link|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedInlinePublisher {
    open: &'static str,
    close: &'static str,
}

impl DelimitedInlinePublisher {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    /// Help tag, the target of links: `*name*`
    pub const fn tag() -> Self {
        Self::new("*", "*")
    }

    /// Link to a tag: `|name|`
    pub const fn link() -> Self {
        Self::new("|", "|")
    }

    pub const fn code() -> Self {
        Self::new("`", "`")
    }

    pub const fn strong() -> Self {
        Self::new("_", "_")
    }
}

impl InlinePublisher for DelimitedInlinePublisher {
    fn publish(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

//! Inline elements
//!
//! Inlines are the leaves of a paragraph. Plain text passes through publishing unchanged, the
//! other variants are decorated by their inline publisher (`*tag*`, `|link|`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// A jump target
    Tag(String),
    /// A reference to a tag
    Link(String),
    Code(String),
    Strong(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(t)
            | Inline::Tag(t)
            | Inline::Link(t)
            | Inline::Code(t)
            | Inline::Strong(t) => t,
        }
    }

    /// Kind of a decorated inline, `None` for plain text.
    pub fn kind(&self) -> Option<InlineKind> {
        match self {
            Inline::Text(_) => None,
            Inline::Tag(_) => Some(InlineKind::Tag),
            Inline::Link(_) => Some(InlineKind::Link),
            Inline::Code(_) => Some(InlineKind::Code),
            Inline::Strong(_) => Some(InlineKind::Strong),
        }
    }
}

impl From<&str> for Inline {
    fn from(value: &str) -> Self {
        Inline::Text(value.to_string())
    }
}

impl From<String> for Inline {
    fn from(value: String) -> Self {
        Inline::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKind {
    Tag,
    Link,
    Code,
    Strong,
}

impl InlineKind {
    pub const ALL: [InlineKind; 4] = [
        InlineKind::Tag,
        InlineKind::Link,
        InlineKind::Code,
        InlineKind::Strong,
    ];
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InlineKind::Tag => "Tag",
            InlineKind::Link => "Link",
            InlineKind::Code => "InlineCode",
            InlineKind::Strong => "Strong",
        };
        f.write_str(name)
    }
}

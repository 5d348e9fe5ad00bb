//! Paragraph element
//!
//! A paragraph is a run of inline content. Publishers concatenate the inlines and word wrap them
//! to the display width, so line breaks in the source text carry no meaning.

use super::super::traits::{truncate_label, ElementNode};
use super::inline::Inline;
use super::ElementKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Inline::Text(text.into())])
    }

    /// Builder: append an inline.
    pub fn with(mut self, inline: Inline) -> Self {
        self.inlines.push(inline);
        self
    }

    pub fn push(&mut self, inline: Inline) {
        self.inlines.push(inline);
    }

    /// Raw text of all inlines joined by spaces, without inline decoration.
    pub fn plain_text(&self) -> String {
        self.inlines
            .iter()
            .map(Inline::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ElementNode for Paragraph {
    fn kind(&self) -> ElementKind {
        ElementKind::Paragraph
    }

    fn display_label(&self) -> String {
        truncate_label(&self.plain_text(), 50)
    }
}

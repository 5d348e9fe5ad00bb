//! Preformatted paragraphs and code blocks
//!
//! Both hold literal text that publishers never wrap. They differ only in how they are
//! delimited in the output.

use super::super::traits::{truncate_label, ElementNode};
use super::ElementKind;

/// Literal text, emitted line by line between delimiter lines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreformattedParagraph {
    pub text: String,
}

impl PreformattedParagraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl ElementNode for PreformattedParagraph {
    fn kind(&self) -> ElementKind {
        ElementKind::PreformattedParagraph
    }

    fn display_label(&self) -> String {
        format!("{} lines", self.text.lines().count())
    }
}

/// An example block, shown indented below its marker line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Code {
    pub text: String,
}

impl Code {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl ElementNode for Code {
    fn kind(&self) -> ElementKind {
        ElementKind::Code
    }

    fn display_label(&self) -> String {
        truncate_label(self.text.lines().next().unwrap_or(""), 50)
    }
}

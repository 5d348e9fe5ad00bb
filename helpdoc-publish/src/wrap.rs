//! Greedy word wrapping
//!
//!     The wrapper joins its tokens with single spaces and folds the resulting words into lines
//!     no wider than the display width, indent included. Words are never split: a word wider than
//!     the room left by the indent gets a line of its own and overflows it.
//!
//!     Widths are measured in terminal columns, so wide characters count double.

use crate::indent::Indent;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWrapper {
    display_width: usize,
    indent: Indent,
}

impl WordWrapper {
    pub fn new(display_width: usize, indent: Indent) -> Self {
        Self {
            display_width,
            indent,
        }
    }

    pub fn display_width(&self) -> usize {
        self.display_width
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Wraps already rendered tokens. An empty (or blank) token sequence yields an empty string.
    pub fn wrap<I, S>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stream = tokens
            .into_iter()
            .map(|token| token.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for word in stream.split_whitespace() {
            let word_width = word.width();
            let budget = self.display_width.saturating_sub(self.prefix_width(lines.len()));
            if !current.is_empty() && current_width + 1 + word_width > budget {
                lines.push(self.finish_line(lines.len(), &current));
                current.clear();
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        if !current.is_empty() {
            lines.push(self.finish_line(lines.len(), &current));
        }

        lines.join("\n")
    }

    fn prefix_width(&self, line_index: usize) -> usize {
        if line_index == 0 {
            self.indent.first_line_width()
        } else {
            self.indent.continuation_width()
        }
    }

    fn finish_line(&self, line_index: usize, text: &str) -> String {
        format!("{}{}", " ".repeat(self.prefix_width(line_index)), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens() {
        let wrapper = WordWrapper::new(20, Indent::new(4));
        assert_eq!(wrapper.wrap(Vec::<String>::new()), "");
        assert_eq!(wrapper.wrap(["  ", ""]), "");
    }

    #[test]
    fn test_single_line() {
        let wrapper = WordWrapper::new(20, Indent::new(0));
        assert_eq!(wrapper.wrap(["Hello", "world"]), "Hello world");
    }

    #[test]
    fn test_wraps_at_width() {
        let wrapper = WordWrapper::new(10, Indent::new(0));
        assert_eq!(wrapper.wrap(["aaa bbb ccc ddd"]), "aaa bbb\nccc ddd");
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        let wrapper = WordWrapper::new(7, Indent::new(0));
        assert_eq!(wrapper.wrap(["aaa bbb"]), "aaa bbb");
    }

    #[test]
    fn test_indent_counts_against_width() {
        let wrapper = WordWrapper::new(10, Indent::new(2));
        assert_eq!(wrapper.wrap(["aaa bbb ccc"]), "  aaa bbb\n  ccc");
    }

    #[test]
    fn test_hanging_indent() {
        let wrapper = WordWrapper::new(12, Indent::hanging(0, 3));
        assert_eq!(
            wrapper.wrap(["1)", "alpha beta gamma"]),
            "1) alpha\n   beta\n   gamma"
        );
    }

    #[test]
    fn test_long_word_is_not_split() {
        let wrapper = WordWrapper::new(8, Indent::new(2));
        assert_eq!(
            wrapper.wrap(["a", "abcdefghijkl", "b"]),
            "  a\n  abcdefghijkl\n  b"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        let wrapper = WordWrapper::new(40, Indent::new(0));
        assert_eq!(wrapper.wrap(["a  b\n c", "d"]), "a b c d");
    }

    #[test]
    fn test_wide_characters() {
        let wrapper = WordWrapper::new(6, Indent::new(0));
        assert_eq!(wrapper.wrap(["日本 語"]), "日本\n語");
    }
}

//! Common interface for element payloads

use crate::elements::ElementKind;

/// Uniform access to the identity of an element payload.
pub trait ElementNode {
    fn kind(&self) -> ElementKind;

    /// Short human readable label, used in logs and error messages.
    fn display_label(&self) -> String;
}

/// Shortens `text` to at most `max` characters, appending an ellipsis when cut.
pub(crate) fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

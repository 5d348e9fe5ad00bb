//! List markers
//!
//! Shared by list items and definitions: no marker, a constant symbol for unordered lists, or
//! `k)` for the k-th (1-based) entry of an ordered list.

use crate::config::MarkSymbol;
use helpdoc_dom::ListType;

pub fn create_list_marker(list_type: ListType, index: usize, symbol: MarkSymbol) -> Option<String> {
    match list_type {
        ListType::NoMarker => None,
        ListType::Unordered => Some(unordered_symbol(symbol).to_string()),
        ListType::Ordered => Some(ordered_symbol(index)),
    }
}

pub fn ordered_symbol(index: usize) -> String {
    format!("{})", index + 1)
}

pub fn unordered_symbol(symbol: MarkSymbol) -> &'static str {
    symbol.as_str()
}

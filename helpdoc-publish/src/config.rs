//! Publishing configuration
//!
//! Every knob the publishers consult, with the defaults of the help-file layout. The struct
//! deserializes with serde, missing keys keep their defaults, so configuration files only need
//! to name what they change.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Characters per line
    pub display_width: usize,
    pub container: ContainerRules,
    pub list: ListRules,
    pub definition: DefinitionRules,
    pub contents_table: ContentsTableRules,
    pub preformatted: PreformattedRules,
    pub code: CodeRules,
    pub document: DocumentRules,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            display_width: 78,
            container: ContainerRules::default(),
            list: ListRules::default(),
            definition: DefinitionRules::default(),
            contents_table: ContentsTableRules::default(),
            preformatted: PreformattedRules::default(),
            code: CodeRules::default(),
            document: DocumentRules::default(),
        }
    }
}

impl PublishConfig {
    pub fn with_display_width(mut self, display_width: usize) -> Self {
        self.display_width = display_width;
        self
    }

    /// Separator between blocks of a collection and between sub-containers.
    pub fn block_separator(&self) -> String {
        "\n".repeat(self.container.paragraph_bottom_margin + 1)
    }

    /// Separator between a container caption and what follows it.
    pub fn header_separator(&self) -> String {
        "\n".repeat(self.container.header_bottom_margin + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRules {
    pub indent_width_for_child: usize,
    pub header_bottom_margin: usize,
    pub paragraph_bottom_margin: usize,
}

impl Default for ContainerRules {
    fn default() -> Self {
        Self {
            indent_width_for_child: 2,
            header_bottom_margin: 0,
            paragraph_bottom_margin: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRules {
    pub indent_width_for_child: usize,
    pub unordered_marker: MarkSymbol,
}

impl Default for ListRules {
    fn default() -> Self {
        Self {
            indent_width_for_child: 2,
            unordered_marker: MarkSymbol::Bar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionRules {
    pub descriptions_indent_width: usize,
}

impl Default for DefinitionRules {
    fn default() -> Self {
        Self {
            descriptions_indent_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentsTableRules {
    /// Indent of top-level entries
    pub table_margin: usize,
    /// Blank lines between entries
    pub line_space_height: usize,
    pub index_separator: String,
    pub index_suffix: String,
}

impl Default for ContentsTableRules {
    fn default() -> Self {
        Self {
            table_margin: 2,
            line_space_height: 0,
            index_separator: ".".to_string(),
            index_suffix: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreformattedRules {
    pub delimiter: String,
}

impl Default for PreformattedRules {
    fn default() -> Self {
        Self {
            delimiter: ">>>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeRules {
    /// Extra indent of code lines relative to the block
    pub indent_width: usize,
    pub open_marker: String,
    pub close_marker: String,
}

impl Default for CodeRules {
    fn default() -> Self {
        Self {
            indent_width: 4,
            open_marker: ">".to_string(),
            close_marker: "<".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRules {
    /// Character of the rule line between top-level sections
    pub section_rule: char,
    /// Append a `vim:` modeline footer
    pub emit_modeline: bool,
}

impl Default for DocumentRules {
    fn default() -> Self {
        Self {
            section_rule: '=',
            emit_modeline: true,
        }
    }
}

/// Marker symbols for unordered lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkSymbol {
    #[default]
    Bar,
    Circle,
    Cross,
    Star,
}

impl MarkSymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkSymbol::Bar => "-",
            MarkSymbol::Circle => "o",
            MarkSymbol::Cross => "x",
            MarkSymbol::Star => "*",
        }
    }
}

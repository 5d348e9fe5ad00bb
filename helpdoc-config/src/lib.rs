//! Configuration for helpdoc.
//!
//! Every key and its default lives in `defaults/helpdoc.default.toml`, which is compiled in.
//! [`Loader`] stacks TOML files and dotted-key overrides on top of it and produces a validated
//! [`HelpdocConfig`].
//!
//! The `[publishing]` table deserializes straight into
//! [`PublishConfig`](helpdoc_publish::PublishConfig), so every publisher knob can be set from a
//! file or overridden with a dotted key such as `publishing.list.unordered_marker`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use helpdoc_publish::PublishConfig;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/helpdoc.default.toml");

/// Top-level configuration consumed by helpdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HelpdocConfig {
    pub publishing: PublishConfig,
    pub output: OutputConfig,
}

/// How rendered text is written out.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub trailing_newline: bool,
}

impl HelpdocConfig {
    /// Rejects settings no render can honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.publishing.display_width == 0 {
            return Err(ConfigError::Message(
                "publishing.display_width must be greater than 0".to_string(),
            ));
        }
        if self.publishing.preformatted.delimiter.is_empty() {
            return Err(ConfigError::Message(
                "publishing.preformatted.delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds a [`HelpdocConfig`] from layered sources.
///
/// Later layers win key by key: the embedded defaults, then each file in the order it was
/// added, then overrides. A layer only needs the keys it changes.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `defaults/helpdoc.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Adds a TOML layer that must exist; `build` fails when it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), true)
    }

    /// Adds a TOML layer that is skipped when absent, e.g. a per-user `~/.helpdoc.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_toml(path.as_ref(), false)
    }

    fn add_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Sets a dotted key, e.g. `publishing.list.unordered_marker`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Shorthand for overriding `publishing.display_width`.
    pub fn with_display_width(self, width: u32) -> Result<Self, ConfigError> {
        self.set_override("publishing.display_width", i64::from(width))
    }

    /// Merges the layers, then deserializes and validates the result.
    pub fn build(self) -> Result<HelpdocConfig, ConfigError> {
        let config: HelpdocConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration, validated.
pub fn load_defaults() -> Result<HelpdocConfig, ConfigError> {
    Loader::new().build()
}

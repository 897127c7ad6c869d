//! Configuration loader for docparse.
//!
//! `defaults/docparse.default.toml` is embedded into the binary so the documented
//! defaults and the runtime behavior stay in sync. User files and command line
//! settings are layered on top through [`Loader`] before deserializing into
//! [`DocparseConfig`].

use super::formats::OutputFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/docparse.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DocparseConfig {
    pub docstring: DocstringConfig,
    pub inspect: InspectConfig,
}

/// Parsing policy
#[derive(Debug, Clone, Deserialize)]
pub struct DocstringConfig {
    pub strict: bool,
    /// Indent unit, 0 to infer it per docstring
    pub indent: usize,
    pub clean: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: OutputFormat,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `docstring.strict` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DocparseConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<DocparseConfig, ConfigError> {
    Loader::new().build()
}

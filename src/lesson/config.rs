//! Configuration loading
//!
//! `defaults/lesson.default.toml` is embedded into the binary so documented
//! defaults and runtime behavior stay in sync. Callers layer user files and
//! overrides on top via [`Loader`] before deserializing into [`LessonConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::lesson::i18n::Language;

const DEFAULT_TOML: &str = include_str!("../../defaults/lesson.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LessonConfig {
    pub render: RenderConfig,
    pub i18n: I18nConfig,
    pub store: StoreConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub code_examples_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    pub default_language: Language,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub standalone_html: bool,
}

/// Layers user overrides over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults
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

    /// Layer an optional configuration file (ignored if absent)
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize and deserialize
    pub fn build(self) -> Result<LessonConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration with only the built-in defaults
pub fn load_defaults() -> Result<LessonConfig, ConfigError> {
    Loader::new().build()
}

//! Shared configuration loader for emmet.
//!
//! `defaults/emmet.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`EmmetConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use emmet::{NumberingPolicy, RenderMode, RenderOptions};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/emmet.default.toml");

/// Top-level configuration consumed by emmet applications.
#[derive(Debug, Clone, Deserialize)]
pub struct EmmetConfig {
    pub render: RenderConfig,
    pub cli: CliConfig,
}

/// Mirrors the knobs exposed by the tag renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_string: String,
    pub numbering: NumberingPolicy,
    pub jumps: bool,
}

impl RenderConfig {
    pub fn mode(&self) -> RenderMode {
        if self.jumps {
            RenderMode::Counting
        } else {
            RenderMode::Silent
        }
    }

    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(self.mode(), self.numbering).with_indent(self.indent_string.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub format: String,
}

/// Builds an [`EmmetConfig`] from layers; later layers win key by key.
///
/// The embedded defaults always come first, so every layer may be partial.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist (e.g. one named on the command line)
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layer a TOML file if present (e.g. a project's `.emmet.toml`)
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Set one dotted key, e.g. `render.numbering` to `"stacked"` for `--stacked`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers; unknown numbering names or wrong value types are errors
    pub fn build(self) -> Result<EmmetConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone
pub fn load_defaults() -> Result<EmmetConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.indent_string, "\t");
        assert_eq!(config.render.numbering, NumberingPolicy::Flat);
        assert!(!config.render.jumps);
        assert_eq!(config.cli.format, "tag");
    }

    #[test]
    fn default_render_options_match_library_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.options(), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.numbering", "stacked")
            .expect("override to apply")
            .set_override("render.jumps", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.numbering, NumberingPolicy::Stacked);
        assert_eq!(config.render.mode(), RenderMode::Counting);
    }

    #[test]
    fn rejects_unknown_numbering() {
        let result = Loader::new()
            .set_override("render.numbering", "spiral")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[render]\nindent_string = \"  \"").expect("write config");

        let config = Loader::new().with_file(file.path()).build().expect("config to build");
        assert_eq!(config.render.indent_string, "  ");
        // untouched keys keep their defaults
        assert_eq!(config.render.numbering, NumberingPolicy::Flat);
        assert_eq!(config.cli.format, "tag");
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/emmet.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.cli.format, "tag");
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new().with_file("/nonexistent/emmet.toml").build().is_err());
    }
}

//! Format registry
//!
//! Each format implements the `Formatter` trait and is registered by name with a
//! `FormatRegistry`.

use super::treeviz::TreevizFormat;
use crate::abbrev::ast::{snapshot_tree, Tree};
use crate::abbrev::rendering::{RenderOptions, TagRenderer};
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// Trait for tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tag", "treeviz")
    fn name(&self) -> &str;

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// The markup renderer as a format
#[derive(Debug, Clone, Default)]
pub struct TagFormat {
    renderer: TagRenderer,
}

impl TagFormat {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: TagRenderer::new(options),
        }
    }
}

impl Formatter for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(self.renderer.render(tree))
    }

    fn description(&self) -> &str {
        "Markup with optional snippet tab stops"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Formatter for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&snapshot_tree(tree))?)
    }

    fn description(&self) -> &str {
        "Tree snapshot as JSON"
    }
}

/// Registry of tree formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Registry with the built-in formats; `options` configures the tag format
    pub fn with_defaults(options: RenderOptions) -> Self {
        let mut registry = Self::new();
        registry.register(TagFormat::new(options));
        registry.register(TreevizFormat);
        registry.register(JsonFormat);
        registry
    }

    /// Register a formatter, replacing one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the named format
    pub fn serialize(&self, tree: &Tree, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(tree)
    }

    /// Registered format names, sorted
    pub fn list_formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(RenderOptions::default())
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.list_formats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::parsing::parse;
    use crate::abbrev::rendering::{NumberingPolicy, RenderMode};

    #[test]
    fn test_default_formats() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "tag", "treeviz"]);
        assert!(registry.has("tag"));
        assert!(!registry.has("yaml"));
    }

    #[test]
    fn test_serialize_with_tag() {
        let registry = FormatRegistry::with_defaults(RenderOptions::new(
            RenderMode::Counting,
            NumberingPolicy::Flat,
        ));
        let tree = parse("p").unwrap();
        assert_eq!(registry.serialize(&tree, "tag").unwrap(), "<p>$1</p>");
    }

    #[test]
    fn test_serialize_json() {
        let tree = parse("ul>li*2").unwrap();
        let json = FormatRegistry::default().serialize(&tree, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "ul");
        assert_eq!(value[0]["children"][1]["multiplicity"]["position"], 2);
    }

    #[test]
    fn test_unknown_format() {
        let tree = parse("p").unwrap();
        assert_eq!(
            FormatRegistry::default().serialize(&tree, "yaml"),
            Err(FormatError::FormatNotFound("yaml".to_string()))
        );
    }

    #[test]
    fn test_register_replaces() {
        struct Upper;
        impl Formatter for Upper {
            fn name(&self) -> &str {
                "tag"
            }
            fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
                Ok(tree.node(tree.roots()[0]).name().to_uppercase())
            }
        }

        let mut registry = FormatRegistry::default();
        registry.register(Upper);
        let tree = parse("p").unwrap();
        assert_eq!(registry.serialize(&tree, "tag").unwrap(), "P");
        assert_eq!(registry.get("tag").unwrap().description(), "");
    }
}

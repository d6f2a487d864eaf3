//! Rendering
//!
//! Serializes a [Tree] to indented markup. Two modes exist:
//!
//!     - silent    plain markup, used for live previews while typing
//!     - counting  every leaf (and every placeholder attribute) gets a `$N` tab
//!                 stop for a snippet engine to turn into interactive jumps
//!
//! The numbering policy decides which index replaces `$` placeholders in attribute
//! values; it is an explicit parameter of every render call.

pub mod jumps;
pub mod tag;

pub use jumps::JumpCounter;
pub use tag::TagRenderer;

use crate::abbrev::ast::{Multiplicity, Tree};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// No tab-stop markers
    #[default]
    Silent,
    /// `$N` tab-stop markers
    Counting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingPolicy {
    /// A node's index is its own position in its multiplication group
    #[default]
    Flat,
    /// Indices keep increasing across nested multiplication groups
    Stacked,
}

impl NumberingPolicy {
    /// Index used for `$` placeholders of a node, given its parent's index
    /// (1 for top-level nodes)
    pub fn index(self, multiplicity: Multiplicity, parent_index: usize) -> usize {
        match self {
            NumberingPolicy::Flat => multiplicity.position,
            NumberingPolicy::Stacked => {
                multiplicity.end * parent_index.saturating_sub(1) + multiplicity.position
            }
        }
    }
}

/// Everything a render pass needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub numbering: NumberingPolicy,
    /// One level of indentation
    pub indent: String,
}

impl RenderOptions {
    pub fn new(mode: RenderMode, numbering: NumberingPolicy) -> Self {
        Self {
            mode,
            numbering,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            numbering: NumberingPolicy::default(),
            indent: "\t".to_string(),
        }
    }
}

/// Render a tree with the default indentation unit (one tab per level)
pub fn render(tree: &Tree, mode: RenderMode, numbering: NumberingPolicy) -> String {
    TagRenderer::new(RenderOptions::new(mode, numbering)).render(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index_is_local_position() {
        let m = Multiplicity::new(2, 3);
        assert_eq!(NumberingPolicy::Flat.index(m, 1), 2);
        assert_eq!(NumberingPolicy::Flat.index(m, 5), 2);
    }

    #[test]
    fn test_stacked_index_accumulates() {
        // second item of a group of 3 inside the second parent: 3 * 1 + 2
        assert_eq!(NumberingPolicy::Stacked.index(Multiplicity::new(2, 3), 2), 5);
        // top-level nodes behave like flat
        assert_eq!(NumberingPolicy::Stacked.index(Multiplicity::new(2, 3), 1), 2);
    }

    #[test]
    fn test_options_deserialize_kebab_case() {
        let numbering: NumberingPolicy = serde_json::from_str("\"stacked\"").unwrap();
        assert_eq!(numbering, NumberingPolicy::Stacked);
        let mode: RenderMode = serde_json::from_str("\"counting\"").unwrap();
        assert_eq!(mode, RenderMode::Counting);
        assert_eq!(RenderOptions::default().indent, "\t");
    }
}

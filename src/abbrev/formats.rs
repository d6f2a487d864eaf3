//! Output formats
//!
//! All ways of turning a parsed [crate::abbrev::ast::Tree] into text go through the
//! [Formatter] trait so callers can select them by name:
//!
//!     - tag      the markup renderer (what a snippet engine consumes)
//!     - treeviz  one line per node, for inspecting how an abbreviation parsed
//!     - json     the tree snapshot as pretty-printed JSON

pub mod registry;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter, JsonFormat, TagFormat};
pub use treeviz::{to_treeviz_str, TreevizFormat};

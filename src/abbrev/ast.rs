//! Tag tree model
//!
//! Nodes live in an arena ([Tree]) and refer to each other through stable
//! [NodeId] handles. A node owns its children through the handle list; the parent
//! link is a navigation-only back reference kept in sync by the tree whenever a
//! node is attached.
//!
//! Structure:
//!     - attribute.rs  Attribute values, merge rules, placeholder substitution
//!     - node.rs       Node and Multiplicity
//!     - tree.rs       The arena and the root container
//!     - group.rs      NodeGroup / Operand and the broadcast operations
//!     - snapshot.rs   Normalized serializable view used by formats and tests

pub mod attribute;
pub mod group;
pub mod node;
pub mod snapshot;
pub mod tree;

pub use attribute::Attribute;
pub use group::{NodeGroup, Operand};
pub use node::{Multiplicity, Node};
pub use snapshot::{snapshot_node, snapshot_tree, TreeSnapshot};
pub use tree::{Container, NodeId, Tree};

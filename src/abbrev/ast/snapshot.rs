//! Tree snapshot - a normalized, owned representation of a parsed tree
//!
//! Snapshots drop arena handles and parent links and nest children by value, which
//! makes them suitable for serialization (json), for debug views (treeviz) and for
//! comparing the structure of two independently parsed trees.

use super::attribute::Attribute;
use super::node::Multiplicity;
use super::tree::{NodeId, Tree};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub multiplicity: Multiplicity,
    pub children: Vec<TreeSnapshot>,
}

/// Snapshot a node and all its descendants.
///
/// Recurses once per level, as do serializing and dropping the result. Trees from
/// [crate::abbrev::parsing::parse] are at most
/// [crate::abbrev::parsing::MAX_NESTING_DEPTH] levels deep.
pub fn snapshot_node(tree: &Tree, id: NodeId) -> TreeSnapshot {
    let node = tree.node(id);
    TreeSnapshot {
        name: node.name().to_string(),
        attributes: node.attributes().to_vec(),
        multiplicity: node.multiplicity(),
        children: node
            .children()
            .iter()
            .map(|child| snapshot_node(tree, *child))
            .collect(),
    }
}

/// Snapshot every top-level node in order
pub fn snapshot_tree(tree: &Tree) -> Vec<TreeSnapshot> {
    tree.roots()
        .iter()
        .map(|id| snapshot_node(tree, *id))
        .collect()
}

//! Node element
//!
//! A node is a single tag of the skeleton. Children and parent are [NodeId] handles
//! into the owning [super::Tree]; a node is never shared between two parents.

use super::attribute::Attribute;
use super::tree::NodeId;
use serde::{Deserialize, Serialize};

/// Position of a node inside its multiplication group
///
/// `position` is 1-based, `end` is the group size. Nodes that were never
/// multiplied are `1/1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplicity {
    pub position: usize,
    pub end: usize,
}

impl Multiplicity {
    pub fn new(position: usize, end: usize) -> Self {
        Self { position, end }
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) multiplicity: Multiplicity,
}

impl Node {
    /// Create a detached node without attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
            multiplicity: Multiplicity::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Structural parent, `None` for top-level nodes
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Add an attribute, merging with an existing one of the same name
    pub fn add_attribute(&mut self, attribute: Attribute) {
        match self.attributes.iter_mut().find(|a| a.name == attribute.name) {
            Some(existing) => existing.merge(attribute),
            None => self.attributes.push(attribute),
        }
    }

    /// Copy of this node's own data for use as a clone, without structural links
    pub(crate) fn detached_copy(&self, multiplicity: Multiplicity) -> Self {
        Self {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            children: Vec::new(),
            parent: None,
            multiplicity,
        }
    }
}

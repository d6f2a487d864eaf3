//! Arena tree and root container
//!
//! [Tree] owns every node of one parse. Top-level nodes hang off the root
//! container, which is not a node itself: it has no name, no attributes and no
//! parent. [Container] names either the root or a node, which is everything a
//! caller needs to say "append here".
//!
//! Invariant: for every node `n` with `parent == Some(p)`, `p.children` contains
//! `n` exactly once; for every node with `parent == None`, `roots` contains it
//! exactly once. All structural mutation goes through [Tree::attach] to keep it.

use super::attribute::Attribute;
use super::node::{Multiplicity, Node};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a node in a [Tree]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something nodes can be appended to: the root container or a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Root,
    Node(NodeId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level nodes in document order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// True when the root container holds no nodes
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the arena
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by handle.
    ///
    /// Handles are only minted by this tree, so lookups of handles obtained from
    /// it always succeed.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Children of a container in document order
    pub fn children(&self, container: Container) -> &[NodeId] {
        match container {
            Container::Root => &self.roots,
            Container::Node(id) => &self.node(id).children,
        }
    }

    /// The container holding `id`
    pub fn container_of(&self, id: NodeId) -> Container {
        match self.node(id).parent {
            Some(parent) => Container::Node(parent),
            None => Container::Root,
        }
    }

    /// The container one level above `container`. The root is its own parent.
    pub fn parent_container(&self, container: Container) -> Container {
        match container {
            Container::Root => Container::Root,
            Container::Node(id) => self.container_of(id),
        }
    }

    /// Number of nodes between `id` and the root container (top-level nodes are 0)
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// Append a new, empty node named `name` as the last child of `container`
    pub fn append(&mut self, container: Container, name: impl Into<String>) -> NodeId {
        self.attach(container, Node::new(name))
    }

    /// Add an attribute to a node, merging by name
    pub fn add_attribute(&mut self, id: NodeId, attribute: Attribute) {
        self.node_mut(id).add_attribute(attribute);
    }

    /// Store a detached node and link it as the last child of `container`
    fn attach(&mut self, container: Container, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = match container {
            Container::Root => None,
            Container::Node(parent) => Some(parent),
        };
        self.nodes.push(node);
        match container {
            Container::Root => self.roots.push(id),
            Container::Node(parent) => self.nodes[parent.0].children.push(id),
        }
        id
    }

    /// Deep-copy the subtree rooted at `template` into `container`.
    ///
    /// The copy gets `position` inside the template's multiplication group and
    /// inherits the template's group size. Descendants keep their own
    /// multiplicity. Parent links point at the new structural parents.
    pub fn clone_subtree(&mut self, template: NodeId, container: Container, position: usize) -> NodeId {
        let end = self.node(template).multiplicity.end;
        self.copy_into(template, container, Multiplicity::new(position, end))
    }

    /// Copies with an explicit work stack so deep subtrees don't exhaust the call
    /// stack. Children are popped in order, so each copy lists them as the template does.
    fn copy_into(&mut self, template: NodeId, container: Container, multiplicity: Multiplicity) -> NodeId {
        let copy = self.node(template).detached_copy(multiplicity);
        let root = self.attach(container, copy);

        let mut stack: Vec<(NodeId, NodeId)> = self
            .node(template)
            .children
            .iter()
            .rev()
            .map(|child| (*child, root))
            .collect();
        while let Some((source, parent)) = stack.pop() {
            let node = self.node(source);
            let copy = node.detached_copy(node.multiplicity);
            let clone = self.attach(Container::Node(parent), copy);
            stack.extend(self.node(source).children.iter().rev().map(|child| (*child, clone)));
        }
        root
    }

    /// Multiply a single node `count` times.
    ///
    /// The node itself becomes position 1 of a group of `count`; `count - 1`
    /// clones are appended to its container. Returns the whole group in order.
    pub fn multiply(&mut self, id: NodeId, count: usize) -> Vec<NodeId> {
        self.node_mut(id).multiplicity = Multiplicity::new(1, count);
        let container = self.container_of(id);

        let mut group = vec![id];
        for position in 2..=count {
            group.push(self.clone_subtree(id, container, position));
        }
        group
    }

    /// Nodes in the subtree rooted at `id`, itself included
    pub fn subtree_size(&self, id: NodeId) -> usize {
        let mut size = 0;
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            size += 1;
            stack.extend(self.node(id).children.iter().copied());
        }
        size
    }

    /// All nodes in document (pre-)order
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }
}

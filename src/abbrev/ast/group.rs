//! Node groups
//!
//! Multiplication turns one node into several, and every following operator has to
//! apply to all of them. [Operand] is what the parser holds as its current
//! position: either a single node or a [NodeGroup]. The broadcast operations below
//! accept either and always hand back a collapsed operand, so a group that ends up
//! with one member is a plain node again.

use super::attribute::Attribute;
use super::tree::{Container, NodeId, Tree};

/// Ordered set of nodes an operation is broadcast over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGroup(Vec<NodeId>);

impl NodeGroup {
    pub fn new(members: Vec<NodeId>) -> Self {
        Self(members)
    }

    pub fn members(&self) -> &[NodeId] {
        &self.0
    }

    /// Distinct containers of the members, in first-seen order
    pub fn parents(&self, tree: &Tree) -> Vec<Container> {
        dedup(self.0.iter().map(|id| tree.container_of(*id)))
    }
}

/// The left operand of an operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Node(NodeId),
    Group(NodeGroup),
}

impl Operand {
    /// Wrap results, unwrapping a single result to a plain node
    pub fn collapse(mut ids: Vec<NodeId>) -> Self {
        if ids.len() == 1 {
            Operand::Node(ids.remove(0))
        } else {
            Operand::Group(NodeGroup::new(ids))
        }
    }

    pub fn members(&self) -> &[NodeId] {
        match self {
            Operand::Node(id) => std::slice::from_ref(id),
            Operand::Group(group) => group.members(),
        }
    }

    /// Containers holding the operand's nodes
    pub fn parents(&self, tree: &Tree) -> Vec<Container> {
        match self {
            Operand::Node(id) => vec![tree.container_of(*id)],
            Operand::Group(group) => group.parents(tree),
        }
    }
}

impl Tree {
    /// Containers `levels` steps above the operand.
    ///
    /// Level 0 is the operand's nodes themselves, level 1 their parents, and every
    /// further level is the parent lookup of the node containers reached so far.
    /// Climbing above the top level stays at the root.
    pub fn containers_above(&self, operand: &Operand, levels: usize) -> Vec<Container> {
        if levels == 0 {
            return operand.members().iter().map(|id| Container::Node(*id)).collect();
        }

        let mut containers = operand.parents(self);
        for _ in 1..levels {
            let mut at_root = false;
            let mut nodes = Vec::new();
            for container in containers {
                match container {
                    Container::Root => at_root = true,
                    Container::Node(id) => nodes.push(id),
                }
            }
            containers = NodeGroup::new(nodes).parents(self);
            if at_root && !containers.contains(&Container::Root) {
                containers.push(Container::Root);
            }
        }
        containers
    }

    /// Append a fresh node named `name` to every container
    pub fn append_to_each(&mut self, containers: &[Container], name: &str) -> Operand {
        let created = containers
            .iter()
            .map(|container| self.append(*container, name))
            .collect();
        Operand::collapse(created)
    }

    /// Add an independent copy of `attribute` to every member
    pub fn add_attribute_to(&mut self, operand: &Operand, attribute: Attribute) -> Operand {
        for id in operand.members() {
            self.add_attribute(*id, attribute.clone());
        }
        Operand::collapse(operand.members().to_vec())
    }

    /// Multiply every member independently, each within its own container
    pub fn multiply_each(&mut self, operand: &Operand, count: usize) -> Operand {
        let mut result = Vec::new();
        for id in operand.members() {
            result.extend(self.multiply(*id, count));
        }
        Operand::collapse(result)
    }
}

fn dedup<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut unique = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

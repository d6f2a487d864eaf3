//! Fluent assertion API for parsed trees
//!
//! Tests describe the expected shape of a tree top-down instead of poking at arena
//! handles:
//!
//! ```text
//! assert_tree(&parse("ul>li*2")?)
//!     .root_count(1)
//!     .root(0, |ul| {
//!         ul.name("ul").child_count(2).child(1, |li| {
//!             li.name("li").multiplicity(2, 2);
//!         });
//!     });
//! ```
//!
//! Failures panic with the path of the node being checked, e.g. `root[0].child[1]`.

use crate::abbrev::ast::{Multiplicity, Node, NodeId, Tree};

/// Create an assertion builder for a tree
pub fn assert_tree(tree: &Tree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

pub struct TreeAssertion<'a> {
    tree: &'a Tree,
}

impl<'a> TreeAssertion<'a> {
    pub fn root_count(self, expected: usize) -> Self {
        let actual = self.tree.roots().len();
        assert_eq!(
            actual, expected,
            "tree: expected {expected} top-level nodes, found {actual}"
        );
        self
    }

    pub fn root<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let roots = self.tree.roots();
        assert!(
            index < roots.len(),
            "tree: root index {index} out of bounds ({} top-level nodes)",
            roots.len()
        );
        check(NodeAssertion::new(self.tree, roots[index], format!("root[{index}]")));
        self
    }

    /// Every node's parent link points back at a node listing it exactly once
    pub fn links_consistent(self) -> Self {
        for id in self.tree.preorder() {
            let node = self.tree.node(id);
            let siblings = match node.parent() {
                Some(parent) => self.tree.node(parent).children(),
                None => self.tree.roots(),
            };
            let occurrences = siblings.iter().filter(|s| **s == id).count();
            assert_eq!(
                occurrences, 1,
                "tree: node {id} ({}) appears {occurrences} times under its parent",
                node.name()
            );
        }
        self
    }
}

pub struct NodeAssertion<'a> {
    tree: &'a Tree,
    id: NodeId,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn new(tree: &'a Tree, id: NodeId, context: String) -> Self {
        Self { tree, id, context }
    }

    fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(self, expected: &str) -> Self {
        let actual = self.node().name();
        assert_eq!(
            actual, expected,
            "{}: expected name '{expected}', found '{actual}'",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node().children().len();
        assert_eq!(
            actual, expected,
            "{}: expected {expected} children, found {actual}",
            self.context
        );
        self
    }

    pub fn leaf(self) -> Self {
        self.child_count(0)
    }

    pub fn child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node().children();
        assert!(
            index < children.len(),
            "{}: child index {index} out of bounds ({} children)",
            self.context,
            children.len()
        );
        let context = format!("{}.child[{index}]", self.context);
        check(NodeAssertion::new(self.tree, children[index], context));
        self
    }

    /// Names of all children, in order
    pub fn child_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node()
            .children()
            .iter()
            .map(|c| self.tree.node(*c).name())
            .collect();
        assert_eq!(actual, expected, "{}: unexpected children", self.context);
        self
    }

    pub fn attribute(self, name: &str, expected: &[&str]) -> Self {
        let attribute = self.node().attribute(name).unwrap_or_else(|| {
            panic!("{}: expected attribute '{name}', found none", self.context)
        });
        assert_eq!(
            attribute.values, expected,
            "{}: unexpected values for '{name}'",
            self.context
        );
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        let actual = self.node().attributes().len();
        assert_eq!(
            actual, expected,
            "{}: expected {expected} attributes, found {actual}",
            self.context
        );
        self
    }

    pub fn no_attributes(self) -> Self {
        self.attribute_count(0)
    }

    pub fn multiplicity(self, position: usize, end: usize) -> Self {
        let actual = self.node().multiplicity();
        assert_eq!(
            actual,
            Multiplicity::new(position, end),
            "{}: unexpected multiplicity",
            self.context
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::parsing::parse;

    #[test]
    fn test_fluent_chain() {
        let tree = parse("ul#nav>li*2").unwrap();
        assert_tree(&tree)
            .root_count(1)
            .links_consistent()
            .root(0, |ul| {
                ul.name("ul")
                    .attribute("id", &["nav"])
                    .child_names(&["li", "li"])
                    .child(1, |li| {
                        li.name("li").leaf().no_attributes().multiplicity(2, 2);
                    });
            });
    }

    #[test]
    #[should_panic(expected = "root[0].child[0]: expected name 'span', found 'p'")]
    fn test_failure_reports_path() {
        let tree = parse("div>p").unwrap();
        assert_tree(&tree).root(0, |div| {
            div.child(0, |p| {
                p.name("span");
            });
        });
    }
}

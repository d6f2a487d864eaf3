//! Treeviz formatter for parsed trees
//!
//! One line per node, nesting shown with box-drawing connectors. Each line shows the
//! node in abbreviation-like notation plus its multiplication slot, which makes it
//! easy to see where an operator attached things:
//!
//! ```text
//! ⧉ 4 nodes
//! ├─ ul#nav
//! │ ├─ li.item$ (1/2)
//! │ └─ li.item$ (2/2)
//! └─ p
//! ```

use super::registry::{FormatError, Formatter};
use crate::abbrev::ast::attribute::{CLASS, ID};
use crate::abbrev::ast::{Attribute, Node, NodeId, Tree};

/// Label for a single node: name, `#id`, `.class` values, other attributes, slot
fn label(node: &Node) -> String {
    let mut label = node.name().to_string();
    for attribute in node.attributes() {
        label.push_str(&attribute_label(attribute));
    }
    let multiplicity = node.multiplicity();
    if multiplicity.end > 1 {
        label.push_str(&format!(" ({}/{})", multiplicity.position, multiplicity.end));
    }
    label
}

fn attribute_label(attribute: &Attribute) -> String {
    match attribute.name.as_str() {
        ID if !attribute.is_placeholder() => format!("#{}", attribute.values.join(" ")),
        CLASS => attribute.values.iter().map(|v| format!(".{v}")).collect(),
        _ if attribute.is_placeholder() => format!("[{}]", attribute.name),
        _ => format!("[{}]", attribute),
    }
}

/// Push `ids` so that the first one is popped first
fn push_siblings(stack: &mut Vec<(NodeId, String, bool)>, ids: &[NodeId], prefix: &str) {
    let count = ids.len();
    for (i, id) in ids.iter().enumerate().rev() {
        stack.push((*id, prefix.to_string(), i == count - 1));
    }
}

/// Render a tree as treeviz text
pub fn to_treeviz_str(tree: &Tree) -> String {
    let total = tree.node_count();
    let mut output = format!("⧉ {} node{}\n", total, if total == 1 { "" } else { "s" });

    let mut stack = Vec::new();
    push_siblings(&mut stack, tree.roots(), "");
    while let Some((id, prefix, is_last)) = stack.pop() {
        let node = tree.node(id);
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{}{} {}\n", prefix, connector, label(node)));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        push_siblings(&mut stack, node.children(), &child_prefix);
    }
    output
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormat;

impl Formatter for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "One line per node, showing attributes and multiplication slots"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::ast::Container;
    use crate::abbrev::parsing::parse;

    #[test]
    fn test_treeviz_layout() {
        let tree = parse("ul#nav>li.item$*2^p").unwrap();
        assert_eq!(
            to_treeviz_str(&tree),
            "⧉ 4 nodes\n\
             ├─ ul#nav\n\
             │ ├─ li.item$ (1/2)\n\
             │ └─ li.item$ (2/2)\n\
             └─ p\n"
        );
    }

    #[test]
    fn test_single_node() {
        let tree = parse("div.a.b").unwrap();
        assert_eq!(to_treeviz_str(&tree), "⧉ 1 node\n└─ div.a.b\n");
    }

    #[test]
    fn test_nested_prefixes() {
        let tree = parse("a>b>c^d+e").unwrap();
        assert_eq!(
            to_treeviz_str(&tree),
            concat!(
                "⧉ 5 nodes\n",
                "└─ a\n",
                "  ├─ b\n",
                "  │ └─ c\n",
                "  ├─ d\n",
                "  └─ e\n",
            )
        );
    }

    #[test]
    fn test_deep_chain() {
        let mut tree = Tree::new();
        let mut current = tree.append(Container::Root, "a");
        for _ in 0..2_000 {
            current = tree.append(Container::Node(current), "a");
        }
        let out = to_treeviz_str(&tree);
        assert!(out.starts_with("⧉ 2001 nodes\n└─ a\n  └─ a\n"));
        assert_eq!(out.lines().count(), 2_002);
    }

    #[test]
    fn test_other_attributes() {
        let mut tree = Tree::new();
        let a = tree.append(Container::Root, "a");
        tree.add_attribute(a, Attribute::new("title", "x"));
        tree.add_attribute(a, Attribute::placeholder("href"));
        assert_eq!(
            to_treeviz_str(&tree),
            "⧉ 1 node\n└─ a[title=\"x\"][href]\n"
        );
    }
}

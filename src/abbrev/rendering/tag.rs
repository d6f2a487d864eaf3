//! Tag rendering
//!
//! Walks the tree depth-first, pre-order:
//!
//! - one indentation unit per level of depth
//! - `<name attr="..">` opens the element
//! - an element with children breaks the line, renders the children one level
//!   deeper and closes on its own line
//! - a leaf closes on the same line, carrying the next tab stop in counting mode
//!
//! ## Example
//!
//! ```text
//! ul>li.item$*2   (counting, flat)
//!
//! <ul>
//!     <li class="item1">$1</li>
//!     <li class="item2">$2</li>
//! </ul>
//! ```

use super::jumps::JumpCounter;
use super::{RenderMode, RenderOptions};
use crate::abbrev::ast::{Attribute, NodeId, Tree};

/// Renders trees to markup according to a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct TagRenderer {
    options: RenderOptions,
}

impl TagRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render every top-level node, separated by newlines
    pub fn render(&self, tree: &Tree) -> String {
        let mut pass = RenderPass {
            options: &self.options,
            tree,
            output: String::new(),
            jumps: JumpCounter::new(),
        };
        for (i, root) in tree.roots().iter().enumerate() {
            if i > 0 {
                pass.output.push('\n');
            }
            pass.write_tree(*root);
        }
        pass.output
    }
}

/// Pending work of the depth-first walk
enum Step {
    Open {
        id: NodeId,
        depth: usize,
        parent_index: usize,
    },
    Close {
        id: NodeId,
        depth: usize,
    },
}

/// State of a single render call
struct RenderPass<'a> {
    options: &'a RenderOptions,
    tree: &'a Tree,
    output: String,
    jumps: JumpCounter,
}

impl RenderPass<'_> {
    fn counting(&self) -> bool {
        self.options.mode == RenderMode::Counting
    }

    fn push_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.options.indent);
        }
    }

    fn push_jump(&mut self) {
        let id = self.jumps.advance();
        self.output.push('$');
        self.output.push_str(&id.to_string());
    }

    /// Render one top-level node and its subtree. The walk keeps its own stack, so
    /// nesting depth is bounded by memory only.
    fn write_tree(&mut self, root: NodeId) {
        let mut stack = vec![Step::Open {
            id: root,
            depth: 0,
            parent_index: 1,
        }];

        let tree = self.tree;
        while let Some(step) = stack.pop() {
            match step {
                Step::Open {
                    id,
                    depth,
                    parent_index,
                } => {
                    if depth > 0 {
                        self.output.push('\n');
                    }
                    let index = self.write_open(id, depth, parent_index);
                    let children = tree.node(id).children();
                    if children.is_empty() {
                        if self.counting() {
                            self.push_jump();
                        }
                        self.write_close(id);
                    } else {
                        stack.push(Step::Close { id, depth });
                        stack.extend(children.iter().rev().map(|child| Step::Open {
                            id: *child,
                            depth: depth + 1,
                            parent_index: index,
                        }));
                    }
                }
                Step::Close { id, depth } => {
                    self.output.push('\n');
                    self.push_indent(depth);
                    self.write_close(id);
                }
            }
        }
    }

    /// Write `<name attr="..">` and return the node's numbering index
    fn write_open(&mut self, id: NodeId, depth: usize, parent_index: usize) -> usize {
        let tree = self.tree;
        let node = tree.node(id);
        let index = self.options.numbering.index(node.multiplicity(), parent_index);

        self.push_indent(depth);
        self.output.push('<');
        self.output.push_str(node.name());
        for attribute in node.attributes() {
            self.output.push(' ');
            self.write_attribute(attribute, index);
        }
        self.output.push('>');
        index
    }

    fn write_close(&mut self, id: NodeId) {
        self.output.push_str("</");
        self.output.push_str(self.tree.node(id).name());
        self.output.push('>');
    }

    fn write_attribute(&mut self, attribute: &Attribute, index: usize) {
        self.output.push_str(&attribute.name);
        self.output.push_str("=\"");
        if attribute.is_placeholder() {
            if self.counting() {
                self.push_jump();
            }
        } else {
            let values = attribute.rendered_values(index);
            self.output.push_str(&values.join(" "));
        }
        self.output.push('"');
    }
}

//! # emmet
//!
//! Expands emmet abbreviations into markup skeletons with snippet tab stops.
//!
//! An abbreviation such as `ul>li.item$$*3` is lexed, parsed into a tag tree and
//! rendered either as a plain preview or with `$N` tab-stop markers that a snippet
//! engine turns into interactive jump positions.
//!
//! ```text
//! ul>li.item$$*2   =>   <ul>
//!                       	<li class="item01">$1</li>
//!                       	<li class="item02">$2</li>
//!                       </ul>
//! ```
//!
//! File Layout
//!
//! src/abbrev
//!   ├── lexing       logos tokenizer for operators, reserved tokens and names
//!   ├── ast          arena tree: nodes, attributes, node groups, snapshots
//!   ├── parsing      operator dispatch and the two-phase parser state machine
//!   ├── rendering    tag renderer, jump counter, numbering policies
//!   ├── formats      pluggable output formats (tag, treeviz, json)
//!   └── testing      fluent assertions over parsed trees
//!
//! The library is pure: no I/O, no global state. Editor integration (buffers,
//! indentation characters, snippet expansion) belongs to the caller, see the
//! `emmet-cli` crate for a command-line one.

pub mod abbrev;

pub use abbrev::ast::{Attribute, Multiplicity, Node, NodeGroup, NodeId, Operand, Tree};
pub use abbrev::parsing::{parse, ParseError};
pub use abbrev::rendering::{render, NumberingPolicy, RenderMode, RenderOptions, TagRenderer};

//! Parser
//!
//! Turns an abbreviation into a [Tree]. The parser reads the token stream left to
//! right with one token of lookahead: an operator is only applied once the literal
//! following it is complete, which is known when the next operator (or the end of
//! input) arrives.
//!
//! Structure:
//!     - operators.rs  Operator kinds and the pending-operator value
//!     - parser.rs     The state machine
//!     - error.rs      Parse errors

pub mod error;
pub mod operators;
pub mod parser;

pub use error::ParseError;
pub use operators::{OperatorKind, PendingOperator};
pub use parser::{Parser, MAX_NESTING_DEPTH, MAX_NODES};

use crate::abbrev::ast::Tree;

/// Parse an abbreviation into a tag tree
///
/// The returned tree is the handle callers keep between a silent preview render and
/// the final counting render.
pub fn parse(abbreviation: &str) -> Result<Tree, ParseError> {
    Parser::new(abbreviation).parse()
}

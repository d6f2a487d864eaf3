//! Parse errors
//!
//! Every failure names what went wrong and, when it can be located, the byte
//! offset in the abbreviation so a caller can point at it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An operator with nothing to apply to: leading, trailing or doubled
    #[error("operator '{operator}' at offset {offset} has no operand")]
    DanglingOperator { operator: &'static str, offset: usize },

    /// The abbreviation produced no nodes
    #[error("abbreviation is empty")]
    EmptyAbbreviation,

    #[error("invalid multiplication count '{count}' at offset {offset}: expected a positive integer")]
    InvalidMultiplicationCount { count: String, offset: usize },

    #[error("unknown token '{token}' at offset {offset}")]
    UnknownToken { token: String, offset: usize },

    /// A child operator would nest deeper than the parser allows
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// A multiplication would grow the tree past the node budget
    #[error("multiplication at offset {offset} would exceed {limit} nodes")]
    TooManyNodes { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending input, if the error has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::DanglingOperator { offset, .. }
            | ParseError::InvalidMultiplicationCount { offset, .. }
            | ParseError::UnknownToken { offset, .. }
            | ParseError::NestingTooDeep { offset, .. }
            | ParseError::TooManyNodes { offset, .. } => Some(*offset),
            ParseError::EmptyAbbreviation => None,
        }
    }
}

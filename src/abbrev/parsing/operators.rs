//! Operator dispatch
//!
//! Every operator token maps to one [OperatorKind]. Positioning operators are
//! described by how many levels above the current node the new node is attached:
//!
//!     `>`  child    0 levels (inside the current node)
//!     `+`  sibling  1 level  (inside the current node's parent)
//!     `^`  climb    2 levels (inside the grandparent)
//!
//! A `^` that arrives while a positioning operator is still waiting for its literal
//! adds one more level to it, so `a>b>c^^d` attaches `d` next to `a`.

use crate::abbrev::lexing::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Child,
    Sibling,
    ClimbParent,
    IdAttribute,
    ClassAttribute,
    Multiply,
    /// Brackets, braces, parentheses and `@` directives
    ReservedInert,
}

impl OperatorKind {
    /// The operator a token stands for, `None` for name text
    pub fn from_token(token: &Token) -> Option<Self> {
        let kind = match token {
            Token::Child => OperatorKind::Child,
            Token::Sibling => OperatorKind::Sibling,
            Token::Climb => OperatorKind::ClimbParent,
            Token::Id => OperatorKind::IdAttribute,
            Token::Class => OperatorKind::ClassAttribute,
            Token::Multiply => OperatorKind::Multiply,
            Token::OpenBracket
            | Token::CloseBracket
            | Token::OpenBrace
            | Token::CloseBrace
            | Token::OpenParen
            | Token::CloseParen
            | Token::Directive(_) => OperatorKind::ReservedInert,
            Token::Text(_) => return None,
        };
        Some(kind)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Child => ">",
            OperatorKind::Sibling => "+",
            OperatorKind::ClimbParent => "^",
            OperatorKind::IdAttribute => "#",
            OperatorKind::ClassAttribute => ".",
            OperatorKind::Multiply => "*",
            OperatorKind::ReservedInert => "reserved",
        }
    }

    /// Levels above the current node for positioning operators
    pub fn levels(self) -> Option<usize> {
        match self {
            OperatorKind::Child => Some(0),
            OperatorKind::Sibling => Some(1),
            OperatorKind::ClimbParent => Some(2),
            OperatorKind::IdAttribute
            | OperatorKind::ClassAttribute
            | OperatorKind::Multiply
            | OperatorKind::ReservedInert => None,
        }
    }

    pub fn is_positional(self) -> bool {
        self.levels().is_some()
    }
}

/// An operator that has been read but not applied yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperator {
    kind: OperatorKind,
    extra_levels: usize,
    offset: usize,
}

impl PendingOperator {
    pub fn new(kind: OperatorKind, offset: usize) -> Self {
        Self {
            kind,
            extra_levels: 0,
            offset,
        }
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Byte offset of the operator in the abbreviation
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Stack a `^` onto this operator. Only positioning operators can climb.
    pub fn stack_climb(&mut self) -> bool {
        if self.kind.is_positional() {
            self.extra_levels += 1;
            true
        } else {
            false
        }
    }

    /// Total levels above the current node. Only meaningful for positioning operators.
    pub fn levels(&self) -> usize {
        self.kind.levels().unwrap_or(0) + self.extra_levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(OperatorKind::from_token(&Token::Child), Some(OperatorKind::Child));
        assert_eq!(
            OperatorKind::from_token(&Token::Directive("@-".to_string())),
            Some(OperatorKind::ReservedInert)
        );
        assert_eq!(OperatorKind::from_token(&Token::Text("div".to_string())), None);
    }

    #[test]
    fn test_climb_stacks_on_positioning_operators() {
        let mut climb = PendingOperator::new(OperatorKind::ClimbParent, 3);
        assert!(climb.stack_climb());
        assert!(climb.stack_climb());
        assert_eq!(climb.levels(), 4);
        assert_eq!(climb.offset(), 3);

        let mut child = PendingOperator::new(OperatorKind::Child, 0);
        assert!(child.stack_climb());
        assert_eq!(child.levels(), 1);
    }

    #[test]
    fn test_climb_does_not_stack_on_attributes() {
        let mut class = PendingOperator::new(OperatorKind::ClassAttribute, 0);
        assert!(!class.stack_climb());
        assert_eq!(class.levels(), 0);

        let mut multiply = PendingOperator::new(OperatorKind::Multiply, 0);
        assert!(!multiply.stack_climb());
    }
}

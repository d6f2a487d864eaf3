//! Two-phase parser state machine
//!
//! State:
//!     - current   the node (or group) the next operator applies to, `None` while
//!                 still at the root container
//!     - pending   the operator waiting for its literal
//!     - literal   name text read since the last operator
//!
//! When an operator arrives and a literal is buffered, the pending operator is
//! resolved first (materializing nodes or attributes), then the new operator
//! becomes pending. A literal buffered while still at the root becomes a top-level
//! node. Reserved tokens only act as literal boundaries.
//!
//! Two limits keep every successfully parsed tree renderable in all formats:
//! children nest at most [MAX_NESTING_DEPTH] levels below the top level, and
//! multiplication never grows the tree past [MAX_NODES] nodes.

use super::error::ParseError;
use super::operators::{OperatorKind, PendingOperator};
use crate::abbrev::ast::attribute::{CLASS, ID};
use crate::abbrev::ast::{Attribute, Container, Operand, Tree};
use crate::abbrev::lexing::{tokenize, Token};
use tracing::{debug, trace};

/// Deepest level a node may sit at; top-level nodes are at level 0
pub const MAX_NESTING_DEPTH: usize = 512;

/// Largest tree multiplication may produce
pub const MAX_NODES: usize = 100_000;

#[derive(Debug)]
pub struct Parser<'a> {
    source: &'a str,
    tree: Tree,
    current: Option<Operand>,
    pending: Option<PendingOperator>,
    literal: String,
    literal_offset: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tree: Tree::new(),
            current: None,
            pending: None,
            literal: String::new(),
            literal_offset: 0,
        }
    }

    /// Run the parser over the whole abbreviation
    pub fn parse(mut self) -> Result<Tree, ParseError> {
        debug!(abbreviation = self.source, "parsing abbreviation");

        for (token, span) in tokenize(self.source)? {
            match token {
                Token::Text(text) => self.push_literal(&text, span.start),
                token => match OperatorKind::from_token(&token) {
                    Some(OperatorKind::ReservedInert) | None => self.boundary(&token)?,
                    Some(kind) => self.operator(kind, span.start)?,
                },
            }
        }

        self.finish()
    }

    fn push_literal(&mut self, text: &str, offset: usize) {
        if self.literal.is_empty() {
            self.literal_offset = offset;
        }
        self.literal.push_str(text);
    }

    fn operator(&mut self, kind: OperatorKind, offset: usize) -> Result<(), ParseError> {
        if self.literal.is_empty() {
            if let Some(mut pending) = self.pending {
                if kind == OperatorKind::ClimbParent && pending.stack_climb() {
                    trace!(levels = pending.levels(), "stacked climb");
                    self.pending = Some(pending);
                    return Ok(());
                }
                return Err(dangling(pending.kind(), pending.offset()));
            }
        } else {
            self.flush()?;
        }

        if self.current.is_none() {
            return Err(dangling(kind, offset));
        }
        self.pending = Some(PendingOperator::new(kind, offset));
        Ok(())
    }

    /// Reserved tokens resolve what can be resolved and otherwise leave the state alone
    fn boundary(&mut self, token: &Token) -> Result<(), ParseError> {
        trace!(?token, "reserved token");
        self.flush()
    }

    fn finish(mut self) -> Result<Tree, ParseError> {
        if self.literal.is_empty() {
            if let Some(pending) = self.pending {
                return Err(dangling(pending.kind(), pending.offset()));
            }
        } else {
            self.flush()?;
        }

        if self.tree.is_empty() {
            return Err(ParseError::EmptyAbbreviation);
        }
        debug!(nodes = self.tree.node_count(), "parsed abbreviation");
        Ok(self.tree)
    }

    /// Apply the buffered literal to whatever can take it
    fn flush(&mut self) -> Result<(), ParseError> {
        if self.literal.is_empty() {
            return Ok(());
        }
        let literal = std::mem::take(&mut self.literal);

        match (self.pending.take(), self.current.take()) {
            (Some(pending), Some(current)) => {
                self.current = Some(self.apply(pending, current, literal)?);
            }
            (None, None) => {
                let id = self.tree.append(Container::Root, literal);
                self.current = Some(Operand::Node(id));
            }
            (Some(pending), None) => return Err(dangling(pending.kind(), pending.offset())),
            (None, current) => {
                trace!(literal = %literal, "discarding literal without operator");
                self.current = current;
            }
        }
        Ok(())
    }

    fn apply(
        &mut self,
        pending: PendingOperator,
        current: Operand,
        literal: String,
    ) -> Result<Operand, ParseError> {
        debug!(operator = pending.kind().symbol(), literal = %literal, "applying operator");

        let next = match pending.kind() {
            OperatorKind::Child | OperatorKind::Sibling | OperatorKind::ClimbParent => {
                let containers = self.tree.containers_above(&current, pending.levels());
                self.check_depth(&containers, pending.offset())?;
                self.tree.append_to_each(&containers, &literal)
            }
            OperatorKind::IdAttribute => self.tree.add_attribute_to(&current, Attribute::new(ID, literal)),
            OperatorKind::ClassAttribute => {
                self.tree.add_attribute_to(&current, Attribute::new(CLASS, literal))
            }
            OperatorKind::Multiply => {
                let count = parse_count(&literal, self.literal_offset)?;
                let copied: usize = current
                    .members()
                    .iter()
                    .map(|id| self.tree.subtree_size(*id))
                    .sum();
                let added = copied.saturating_mul(count - 1);
                if self.tree.node_count().saturating_add(added) > MAX_NODES {
                    return Err(ParseError::TooManyNodes {
                        limit: MAX_NODES,
                        offset: self.literal_offset,
                    });
                }
                self.tree.multiply_each(&current, count)
            }
            OperatorKind::ReservedInert => current,
        };
        Ok(next)
    }

    fn check_depth(&self, containers: &[Container], offset: usize) -> Result<(), ParseError> {
        for container in containers {
            if let Container::Node(id) = container {
                if self.tree.depth(*id) + 1 > MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                        offset,
                    });
                }
            }
        }
        Ok(())
    }
}

fn dangling(kind: OperatorKind, offset: usize) -> ParseError {
    ParseError::DanglingOperator {
        operator: kind.symbol(),
        offset,
    }
}

fn parse_count(literal: &str, offset: usize) -> Result<usize, ParseError> {
    let invalid = || ParseError::InvalidMultiplicationCount {
        count: literal.to_string(),
        offset,
    };
    if !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match literal.parse::<u32>() {
        Ok(count) if count > 0 => Ok(count as usize),
        _ => Err(invalid()),
    }
}

//! Token definitions for emmet abbreviations
//!
//! The tokens are defined using the logos derive macro. Operators are single
//! characters; reserved tokens are recognized so they never leak into names, but
//! carry no tree-building meaning (see [crate::abbrev::parsing::operators]).
use logos::Logos;

/// All possible tokens in an abbreviation
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    // Positioning
    #[token(">")]
    Child,
    #[token("+")]
    Sibling,
    #[token("^")]
    Climb,

    // Attributes
    #[token("#")]
    Id,
    #[token(".")]
    Class,

    #[token("*")]
    Multiply,

    // Reserved: custom attributes, text, grouping
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Reserved: numbering direction (`@-`) and offset (`@3`)
    #[regex(r"@(-|[0-9]+)?", |lex| lex.slice().to_string())]
    Directive(String),

    // Names and operator arguments (catch-all for non-special characters)
    #[regex(r"[^\s\x00-\x1f\x7f>+^#.*\[\]{}()@]+", |lex| lex.slice().to_string())]
    Text(String),
}

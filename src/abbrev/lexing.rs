//! Lexer
//!
//! Tokenization is done through the logos lexer library. Whitespace is skipped at
//! this stage, so `d iv > p` and `div>p` produce the same token stream.
//!
//! Names are not validated beyond excluding operator punctuation and control
//! characters: `item$$`, `data-x` or `h1` are all plain [Token::Text].

pub mod tokens;

pub use tokens::Token;

use crate::abbrev::parsing::ParseError;
use logos::Logos;

/// Tokenize an abbreviation with location information
///
/// Returns the tokens paired with their byte spans, or an
/// [ParseError::UnknownToken] for the first character the lexer cannot classify.
pub fn tokenize(source: &str) -> Result<Vec<(Token, logos::Span)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(ParseError::UnknownToken {
                    token: lexer.slice().to_string(),
                    offset: lexer.span().start,
                })
            }
        }
    }

    Ok(tokens)
}

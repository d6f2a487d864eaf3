//! Main module for emmet abbreviation handling
//!
//! The pipeline is: source -> [lexing] -> tokens -> [parsing] -> [ast::Tree] -> [rendering].
//! [formats] wraps the renderer and the debug views behind one registry.

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod rendering;
pub mod testing;

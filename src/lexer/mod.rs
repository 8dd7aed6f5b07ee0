//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens for a parser. It handles:
//!
//! - A hand-written byte scanner with sub-scanners for identifiers,
//!   numbers, quoted literals and comments
//! - Recognition of keywords, identifiers, literals and punctuation
//! - Byte spans on every token for error reporting
//! - An eagerly materialized token stream with bidirectional movement

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;

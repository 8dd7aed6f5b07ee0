use tracing::debug;

use crate::errors::errors::Error;

use super::{lexer::Lexer, tokens::Token};

/// Every token of a source, drained from a [`Lexer`] up front, with a cursor
/// that can move both ways.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    i: usize,
}

impl TokenStream {
    pub fn new(mut lexer: Lexer) -> Self {
        let tokens: Vec<Token> = lexer.by_ref().collect();
        let errors = lexer.take_errors();

        debug!(
            target: "erys::lexer",
            tokens = tokens.len(),
            errors = errors.len(),
            "Materialized token stream"
        );

        TokenStream {
            tokens,
            errors,
            i: 0,
        }
    }

    /// Returns the token under the cursor and moves past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.i)?;
        self.i += 1;
        Some(token)
    }

    /// Moves the cursor back one token and returns it.
    pub fn prev(&mut self) -> Option<&Token> {
        if self.i == 0 {
            return None;
        }

        self.i -= 1;
        self.tokens.get(self.i)
    }

    /// The token `next` would return, without moving.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.i)
    }

    pub fn position(&self) -> usize {
        self.i
    }

    pub fn reset(&mut self) {
        self.i = 0;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Errors the lexer recorded while the stream was drained.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Drops comment tokens and rewinds the cursor.
    pub fn without_trivia(self) -> Self {
        TokenStream {
            tokens: self
                .tokens
                .into_iter()
                .filter(|token| !token.is_skippable())
                .collect(),
            errors: self.errors,
            i: 0,
        }
    }
}

impl From<Lexer> for TokenStream {
    fn from(lexer: Lexer) -> Self {
        TokenStream::new(lexer)
    }
}

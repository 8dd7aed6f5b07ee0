use tracing::{debug, trace};

use crate::{
    config::{LexerConfig, MalformedNumber, QuoteSpan},
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::tokens::{
    punct_kind, Base, Comment, CommentKind, Literal, Token, RESERVED_LOOKUP,
};

/// Space, tab, `\n` or `\r`.
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

pub fn is_id_start(c: u8) -> bool {
    is_alpha(c) || c == b'_'
}

pub fn is_id_continue(c: u8) -> bool {
    is_alphanumeric(c) || c == b'_'
}

/// ASCII symbols that can appear as operators or delimiters.
pub fn is_punct(c: u8) -> bool {
    matches!(
        c,
        b'(' | b')'
            | b'['
            | b']'
            | b'{'
            | b'}'
            | b'.'
            | b','
            | b':'
            | b';'
            | b'='
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'!'
            | b'?'
            | b'<'
            | b'>'
            | b'&'
            | b'|'
            | b'~'
            | b'^'
            | b'\''
            | b'"'
            | b'\\'
    )
}

/// Whether a numeric run has passed its decimal point yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotState {
    NoDotSeen,
    DotAt(usize),
}

impl DotState {
    fn offset(self) -> Option<usize> {
        match self {
            DotState::NoDotSeen => None,
            DotState::DotAt(offset) => Some(offset),
        }
    }
}

/// Byte-oriented scanner over an owned source buffer.
///
/// Each call to [`Lexer::next_token`] produces at most one token. Once it
/// returns `None` it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    offset: usize,
    config: LexerConfig,
    finished: bool,
    errors: Vec<Error>,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: String, config: LexerConfig) -> Lexer {
        Lexer {
            source,
            offset: 0,
            config,
            finished: false,
            errors: vec![],
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Problems recorded while scanning, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.offset += 1;
        Some(c)
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_nth(0)
    }

    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.offset + n).copied()
    }

    pub fn consume(&mut self, n: usize) {
        self.offset += n;
    }

    /// Span of the `length` bytes just before the cursor. Call it before the
    /// cursor moves again.
    pub fn span_from_length(&self, length: usize) -> Span {
        Span::new(self.offset - length, length)
    }

    /// Consumes bytes while `predicate` holds, stopping at the first byte that
    /// fails it (which stays unconsumed) or at EOF.
    ///
    /// Returns whether EOF was reached along with the collected text.
    pub fn collect_while<P>(&mut self, mut predicate: P) -> (bool, String)
    where
        P: FnMut(u8) -> bool,
    {
        let start = self.offset;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.offset += 1;
        }

        (self.is_eof(), self.text(start, self.offset))
    }

    /// Scans the next token, or returns `None` when there are no more.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.scan_token();

        match &token {
            Some(token) => trace!(
                target: "erys::lexer",
                kind = ?token.kind(),
                span = %token.span(),
                "Scanned token"
            ),
            None => self.finished = true,
        }

        token
    }

    fn scan_token(&mut self) -> Option<Token> {
        loop {
            let ch = self.peek()?;

            if is_whitespace(ch) {
                self.consume(1);
                continue;
            }

            if is_id_start(ch) {
                return Some(self.lex_ident());
            }

            if is_digit(ch) {
                return self.lex_number();
            }

            if ch == b'\'' || ch == b'"' {
                return Some(self.lex_quoted(ch));
            }

            if self.config.comments && ch == b'/' {
                match self.peek_nth(1) {
                    Some(b'/') => return Some(self.lex_line_comment()),
                    Some(b'*') => return Some(self.lex_block_comment()),
                    _ => {}
                }
            }

            let byte = self.advance()?;
            let span = self.span_from_length(1);

            return Some(match punct_kind(byte) {
                Some(kind) => MK_TOKEN!(Punct, kind, span),
                None => Token::Unknown {
                    text: self.text(span.start, span.high_byte()),
                    span,
                },
            });
        }
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.offset;
        let (_, ident) = self.collect_while(is_id_continue);
        let span = self.span_from_length(self.offset - start);

        match RESERVED_LOOKUP.get(ident.as_str()) {
            Some(kind) => MK_TOKEN!(Keyword, *kind, span),
            None => Token::Ident { name: ident, span },
        }
    }

    fn lex_number(&mut self) -> Option<Token> {
        let start = self.offset;
        let mut dot = DotState::NoDotSeen;
        let mut is_valid = true;
        let mut index = start;

        let (_, digits) = self.collect_while(|c| {
            if !is_digit(c) && c != b'.' {
                return false;
            }

            if c == b'.' {
                if let DotState::DotAt(_) = dot {
                    is_valid = false;
                    return false;
                }
                dot = DotState::DotAt(index);
            }

            index += 1;
            true
        });

        if !is_valid {
            return self.malformed_number(start, dot);
        }

        let span = self.span_from_length(self.offset - start);
        let literal = match dot {
            DotState::NoDotSeen => Literal::Int {
                value: digits,
                base: Base::Decimal,
            },
            DotState::DotAt(_) => Literal::Float {
                value: digits,
                base: Base::Decimal,
            },
        };

        Some(Token::Literal { literal, span })
    }

    /// Handles a digit run that hit a second `.` at the cursor.
    fn malformed_number(&mut self, start: usize, dot: DotState) -> Option<Token> {
        let run = self.source.as_bytes()[self.offset..]
            .iter()
            .take_while(|&&c| is_digit(c) || c == b'.')
            .count();
        let span = Span::new(start, self.offset + run - start);
        let literal = self.text(span.start, span.high_byte());

        debug!(
            target: "erys::lexer",
            %literal,
            %span,
            first_dot = ?dot.offset(),
            mode = ?self.config.malformed_number,
            "Malformed number literal"
        );

        self.errors.push(Error::new(
            ErrorImpl::MalformedNumber {
                literal: literal.clone(),
            },
            span,
        ));

        match self.config.malformed_number {
            MalformedNumber::Suppress => None,
            MalformedNumber::ErrorToken => {
                self.consume(run);
                Some(Token::Unknown {
                    text: literal,
                    span,
                })
            }
        }
    }

    fn lex_quoted(&mut self, quote: u8) -> Token {
        let open = self.offset;
        let is_char = quote == b'\'';
        let mut broken = false;

        self.consume(1);
        let start = self.offset;

        // Escapes are validated in a later pass, so a `\` before the quote
        // does not protect it.
        let (eof, value) = self.collect_while(|c| {
            if c == b'\n' {
                broken = true;
                return false;
            }
            c != quote
        });

        let is_terminated = !(broken || eof);
        let mut span = self.span_from_length(self.offset - start);

        if is_terminated {
            self.consume(1);
        }

        if self.config.quote_span == QuoteSpan::Delimited {
            span = Span::new(open, self.offset - open);
        }

        let literal = if is_char {
            Literal::Char {
                value,
                is_terminated,
            }
        } else {
            Literal::String {
                value,
                is_terminated,
            }
        };

        Token::Literal { literal, span }
    }

    fn lex_line_comment(&mut self) -> Token {
        let start = self.offset;
        self.consume(2);

        // `///` documents, `////` does not
        let is_doc_comment = self.peek() == Some(b'/') && self.peek_nth(1) != Some(b'/');
        if is_doc_comment {
            self.consume(1);
        }

        let (_, mut content) = self.collect_while(|c| c != b'\n');

        // the `\r` of a `\r\n` break stays in the span but not the content
        if content.ends_with('\r') {
            content.pop();
        }

        Token::Comment {
            kind: CommentKind::Line,
            comment: Comment {
                is_doc_comment,
                content,
            },
            span: Span::new(start, self.offset - start),
        }
    }

    fn lex_block_comment(&mut self) -> Token {
        let start = self.offset;
        self.consume(2);

        // `/**` documents, `/**/` and `/***` do not
        let is_doc_comment =
            self.peek() == Some(b'*') && !matches!(self.peek_nth(1), Some(b'*') | Some(b'/'));
        if is_doc_comment {
            self.consume(1);
        }

        let content_start = self.offset;
        let mut content_end = self.offset;
        let mut depth = 1usize;

        while depth > 0 {
            match (self.peek(), self.peek_nth(1)) {
                (None, _) => break,
                (Some(b'/'), Some(b'*')) => {
                    depth += 1;
                    self.consume(2);
                }
                (Some(b'*'), Some(b'/')) => {
                    depth -= 1;
                    content_end = self.offset;
                    self.consume(2);
                }
                _ => self.consume(1),
            }
        }

        let span = Span::new(start, self.offset - start);

        if depth > 0 {
            content_end = self.offset;

            debug!(target: "erys::lexer", %span, depth, "Unterminated block comment");
            self.errors.push(Error::new(
                ErrorImpl::UnterminatedBlockComment { depth },
                span,
            ));
        }

        Token::Comment {
            kind: CommentKind::Block,
            comment: Comment {
                is_doc_comment,
                content: self.text(content_start, content_end),
            },
            span,
        }
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source.as_bytes()[start..end]).into_owned()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Lexes `source` to completion, failing on the first recorded scan error or
/// unterminated quoted literal.
pub fn tokenize(source: String, config: LexerConfig) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::with_config(source, config);
    let tokens: Vec<Token> = lex.by_ref().collect();

    if let Some(error) = lex.errors().first() {
        return Err(error.clone());
    }

    let unterminated = tokens.iter().find_map(|token| match token.literal() {
        Some(literal) if literal.is_terminated() == Some(false) => Some((literal, token.span())),
        _ => None,
    });

    if let Some((literal, span)) = unterminated {
        return Err(Error::new(
            ErrorImpl::UnterminatedLiteral {
                kind: String::from(literal.type_to_string()),
            },
            span,
        ));
    }

    Ok(tokens)
}

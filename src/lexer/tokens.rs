use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Span, MK_PUNCT_LOOKUP};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("continue", TokenKind::Continue);
        map.insert("break", TokenKind::Break);
        map.insert("fn", TokenKind::Fn);
        map.insert("extern", TokenKind::Extern);
        map.insert("struct", TokenKind::Struct);
        map.insert("as", TokenKind::As);
        map.insert("inout", TokenKind::InOut);
        map.insert("impl", TokenKind::Impl);
        map.insert("pub", TokenKind::Pub);
        map.insert("trait", TokenKind::Trait);
        map.insert("implements", TokenKind::Implements);
        map.insert("implicit", TokenKind::Implicit);
        map.insert("consume", TokenKind::Consume);
        map.insert("loop", TokenKind::Loop);
        map
    };
}

MK_PUNCT_LOOKUP! {
    b';' => Semicolon,
    b',' => Comma,
    b'.' => Dot,
    b'(' => OpenParen,
    b')' => CloseParen,
    b'[' => OpenBracket,
    b']' => CloseBracket,
    b'{' => OpenBrace,
    b'}' => CloseBrace,
    b'@' => At,
    b'#' => Pound,
    b'~' => Tilde,
    b'?' => Question,
    b':' => Colon,
    b'$' => Dollar,
    b'=' => Eq,
    b'!' => Bang,
    b'<' => Lt,
    b'>' => Gt,
    b'+' => Plus,
    b'-' => Minus,
    b'&' => And,
    b'|' => Or,
    b'*' => Star,
    b'/' => Slash,
    b'^' => Caret,
    b'%' => Percent,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `// comment`
    LineComment,
    /// `/* block comment */`, nesting: `/* /* */` is unterminated
    BlockComment,

    Ident,

    // Reserved
    Let,
    Mut,
    Return,
    If,
    Else,
    For,
    In,
    Continue,
    Break,
    Fn,
    Extern,
    Struct,
    As,
    InOut,
    Impl,
    Pub,
    Trait,
    Implements,
    Implicit,
    Consume,
    Loop,

    /// `12`, `12.34`, chars, strings
    Literal,

    Semicolon,
    Comma,
    Dot,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    At,
    Pound,
    Tilde,
    Question,
    Colon,
    Dollar,
    Eq,
    Bang,
    Lt,
    Gt,
    Plus,
    Minus,
    And,
    Or,
    Star,
    Slash,
    Caret,
    Percent,

    /// A byte the lexer does not expect
    Unknown,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    pub fn is_punct(&self) -> bool {
        punct_symbol(*self).is_some()
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    Char,
    String,
}

impl LiteralKind {
    pub fn is_number(&self) -> bool {
        matches!(self, LiteralKind::Int | LiteralKind::Float)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Base {
    /// `0b` prefix
    Binary,
    /// `0o` prefix
    Octal,
    /// `0x` prefix
    Hexadecimal,
    /// No prefix
    Decimal,
}

impl Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A scanned literal. `value` is the raw text, never unescaped or checked.
///
/// Numbers carry a base, quoted literals carry whether the closing quote
/// was found; never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int { value: String, base: Base },
    Float { value: String, base: Base },
    Char { value: String, is_terminated: bool },
    String { value: String, is_terminated: bool },
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Int { .. } => LiteralKind::Int,
            Literal::Float { .. } => LiteralKind::Float,
            Literal::Char { .. } => LiteralKind::Char,
            Literal::String { .. } => LiteralKind::String,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Literal::Int { value, .. }
            | Literal::Float { value, .. }
            | Literal::Char { value, .. }
            | Literal::String { value, .. } => value,
        }
    }

    pub fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    pub fn base(&self) -> Option<Base> {
        match self {
            Literal::Int { base, .. } | Literal::Float { base, .. } => Some(*base),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> Option<bool> {
        match self {
            Literal::Char { is_terminated, .. } | Literal::String { is_terminated, .. } => {
                Some(*is_terminated)
            }
            _ => None,
        }
    }

    pub fn type_to_string(&self) -> &'static str {
        match self.kind() {
            LiteralKind::Int => "int",
            LiteralKind::Float => "float",
            LiteralKind::Char => "char",
            LiteralKind::String => "string",
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Literal {}: {}", self.type_to_string(), self.value())?;

        match (self.base(), self.is_terminated()) {
            (Some(base), _) => write!(f, " (base {})", base),
            (_, Some(terminated)) => write!(f, " (terminated: {})", terminated),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CommentKind {
    Line,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    pub is_doc_comment: bool,
    /// Text between the delimiters, doc marker excluded.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Keyword { kind: TokenKind, span: Span },
    Punct { kind: TokenKind, span: Span },
    Ident { name: String, span: Span },
    Literal { literal: Literal, span: Span },
    Comment { kind: CommentKind, comment: Comment, span: Span },
    /// Unrecognized input, kept verbatim (lossy UTF-8) for diagnostics.
    Unknown { text: String, span: Span },
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword { kind, .. } | Token::Punct { kind, .. } => *kind,
            Token::Ident { .. } => TokenKind::Ident,
            Token::Literal { .. } => TokenKind::Literal,
            Token::Comment { kind: CommentKind::Line, .. } => TokenKind::LineComment,
            Token::Comment { kind: CommentKind::Block, .. } => TokenKind::BlockComment,
            Token::Unknown { .. } => TokenKind::Unknown,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Token::Keyword { span, .. }
            | Token::Punct { span, .. }
            | Token::Ident { span, .. }
            | Token::Literal { span, .. }
            | Token::Comment { span, .. }
            | Token::Unknown { span, .. } => *span,
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Token::Literal { literal, .. } => Some(literal),
            _ => None,
        }
    }

    pub fn ident(&self) -> Option<&str> {
        match self {
            Token::Ident { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            Token::Comment { comment, .. } => Some(comment),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal { .. })
    }

    pub fn is_ident(&self) -> bool {
        matches!(self, Token::Ident { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment { .. })
    }

    /// Tokens a parser can step over without changing meaning.
    pub fn is_skippable(&self) -> bool {
        self.is_comment()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Comment { comment, .. } => {
                write!(f, "Comment (doc: {})", comment.is_doc_comment)?
            }
            Token::Literal { literal, .. } => write!(f, "{}", literal)?,
            Token::Ident { name, .. } => write!(f, "Identifier: {}", name)?,
            Token::Keyword { .. } | Token::Punct { .. } | Token::Unknown { .. } => {
                write!(f, "Punct: {}", self.kind())?
            }
        }

        write!(f, " ({})", self.span())
    }
}

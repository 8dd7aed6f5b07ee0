//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers, floats and malformed runs)
//! - Char and string literals, terminated or not
//! - Punctuation and unknown bytes
//! - Line and nested block comments
//! - The cursor primitives and the token stream

use crate::{
    config::{LexerConfig, MalformedNumber, QuoteSpan},
    errors::errors::ErrorImpl,
    Span,
};

use super::{
    lexer::{
        is_alpha, is_alphanumeric, is_digit, is_id_continue, is_id_start, is_punct,
        is_whitespace, tokenize, Lexer,
    },
    stream::TokenStream,
    tokens::{Base, CommentKind, Literal, LiteralKind, Token, TokenKind},
};

fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source.to_string()).collect()
}

fn lex_with(source: &str, config: LexerConfig) -> Vec<Token> {
    Lexer::with_config(source.to_string(), config).collect()
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "let mut return if else for in continue break fn extern struct as inout \
                  impl pub trait implements implicit consume loop";
    let tokens = lex(source);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Mut,
            TokenKind::Return,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Continue,
            TokenKind::Break,
            TokenKind::Fn,
            TokenKind::Extern,
            TokenKind::Struct,
            TokenKind::As,
            TokenKind::InOut,
            TokenKind::Impl,
            TokenKind::Pub,
            TokenKind::Trait,
            TokenKind::Implements,
            TokenKind::Implicit,
            TokenKind::Consume,
            TokenKind::Loop,
        ]
    );
    assert!(tokens.iter().all(|token| matches!(token, Token::Keyword { .. })));
}

#[test]
fn test_keyword_precedence() {
    let tokens = lex("let lets");

    assert_eq!(
        tokens[0],
        Token::Keyword {
            kind: TokenKind::Let,
            span: Span::new(0, 3)
        }
    );
    assert_eq!(tokens[0].ident(), None);
    assert_eq!(
        tokens[1],
        Token::Ident {
            name: String::from("lets"),
            span: Span::new(4, 4)
        }
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar baz_123 _underscore CamelCase _");

    let names: Vec<&str> = tokens.iter().filter_map(Token::ident).collect();
    assert_eq!(names, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "_"]);
    assert_eq!(tokens[5].span(), Span::new(38, 1));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("123 12.34 0 12.");

    assert_eq!(
        tokens[0],
        Token::Literal {
            literal: Literal::Int {
                value: String::from("123"),
                base: Base::Decimal
            },
            span: Span::new(0, 3)
        }
    );
    assert_eq!(
        tokens[1],
        Token::Literal {
            literal: Literal::Float {
                value: String::from("12.34"),
                base: Base::Decimal
            },
            span: Span::new(4, 5)
        }
    );
    assert_eq!(tokens[2].literal().unwrap().kind(), LiteralKind::Int);
    assert_eq!(tokens[3].literal().unwrap().kind(), LiteralKind::Float);
    assert_eq!(tokens[3].literal().unwrap().value(), "12.");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_number_at_start_of_buffer_with_dot() {
    // a dot at offset 1 of a literal starting at offset 0
    let tokens = lex("0.5");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].literal().unwrap().kind(), LiteralKind::Float);
    assert_eq!(tokens[0].literal().unwrap().base(), Some(Base::Decimal));
    assert_eq!(tokens[0].literal().unwrap().is_terminated(), None);
}

#[test]
fn test_prefixed_number_has_no_base_handling() {
    let tokens = lex("0b101");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].literal().unwrap().value(), "0");
    assert_eq!(tokens[0].literal().unwrap().base(), Some(Base::Decimal));
    assert_eq!(tokens[1].ident(), Some("b101"));
}

#[test]
fn test_malformed_number_is_suppressed() {
    let mut lexer = Lexer::new(String::from("a 12.3.4 b"));

    assert_eq!(lexer.next_token().map(|token| token.kind()), Some(TokenKind::Ident));
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);

    assert_eq!(lexer.errors().len(), 1);
    let error = &lexer.errors()[0];
    assert_eq!(error.get_error_name(), "MalformedNumber");
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::MalformedNumber {
            literal: String::from("12.3.4")
        }
    );
    assert_eq!(error.get_span(), &Span::new(2, 6));
}

#[test]
fn test_malformed_number_as_error_token() {
    let config = LexerConfig::default().with_malformed_number(MalformedNumber::ErrorToken);
    let mut lexer = Lexer::with_config(String::from("a 12.3.4 b"), config);
    let tokens: Vec<Token> = lexer.by_ref().collect();

    assert_eq!(
        tokens[1],
        Token::Unknown {
            text: String::from("12.3.4"),
            span: Span::new(2, 6)
        }
    );
    assert_eq!(tokens[2].ident(), Some("b"));
    assert_eq!(tokens.len(), 3);
    assert_eq!(lexer.errors().len(), 1);
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex("\"abc\"");

    assert_eq!(
        tokens,
        vec![Token::Literal {
            literal: Literal::String {
                value: String::from("abc"),
                is_terminated: true
            },
            span: Span::new(1, 3)
        }]
    );
}

#[test]
fn test_tokenize_chars_and_mixed_quotes() {
    let tokens = lex("'a' \"it's\" '\"'");

    assert_eq!(
        tokens[0].literal(),
        Some(&Literal::Char {
            value: String::from("a"),
            is_terminated: true
        })
    );
    assert_eq!(tokens[1].literal().unwrap().value(), "it's");
    assert_eq!(tokens[1].literal().unwrap().kind(), LiteralKind::String);
    assert_eq!(tokens[2].literal().unwrap().value(), "\"");
    assert_eq!(tokens[2].literal().unwrap().kind(), LiteralKind::Char);
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_unterminated_string_at_eof() {
    let tokens = lex("\"abc");

    assert_eq!(
        tokens,
        vec![Token::Literal {
            literal: Literal::String {
                value: String::from("abc"),
                is_terminated: false
            },
            span: Span::new(1, 3)
        }]
    );
}

#[test]
fn test_string_broken_by_newline() {
    let tokens = lex("\"ab\nc\"");

    assert_eq!(
        tokens[0],
        Token::Literal {
            literal: Literal::String {
                value: String::from("ab"),
                is_terminated: false
            },
            span: Span::new(1, 2)
        }
    );
    assert_eq!(
        tokens[1],
        Token::Ident {
            name: String::from("c"),
            span: Span::new(4, 1)
        }
    );
    // the trailing quote opens a new, empty literal
    assert_eq!(tokens[2].literal().unwrap().is_terminated(), Some(false));
    assert_eq!(tokens[2].span(), Span::new(6, 0));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_string_escapes_are_not_interpreted() {
    let tokens = lex(r#""a\"b""#);

    assert_eq!(tokens[0].literal().unwrap().value(), "a\\");
    assert_eq!(tokens[0].literal().unwrap().is_terminated(), Some(true));
    assert_eq!(tokens[1].ident(), Some("b"));
}

#[test]
fn test_delimited_quote_spans() {
    let config = LexerConfig::default().with_quote_span(QuoteSpan::Delimited);

    let tokens = lex_with("x \"abc\" 'd", config);
    assert_eq!(tokens[1].span(), Span::new(2, 5));
    assert_eq!(tokens[1].literal().unwrap().value(), "abc");
    assert_eq!(tokens[2].span(), Span::new(8, 2));
    assert_eq!(tokens[2].literal().unwrap().is_terminated(), Some(false));
}

#[test]
fn test_tokenize_punctuation() {
    let source = ";,.()[]{}@#~?:$=!<>+-&|*/^%";
    let tokens = lex(source);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::At,
            TokenKind::Pound,
            TokenKind::Tilde,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::Dollar,
            TokenKind::Eq,
            TokenKind::Bang,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Caret,
            TokenKind::Percent,
        ]
    );

    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(token.span(), Span::new(i, 1));
        assert!(token.kind().is_punct());
    }
}

#[test]
fn test_tokenize_unknown_bytes() {
    let tokens = lex("\\ é");

    assert_eq!(
        tokens[0],
        Token::Unknown {
            text: String::from("\\"),
            span: Span::new(0, 1)
        }
    );
    // two-byte character, one token per byte
    assert_eq!(tokens[1].kind(), TokenKind::Unknown);
    assert_eq!(tokens[1].span(), Span::new(2, 1));
    assert_eq!(tokens[2].span(), Span::new(3, 1));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_line_comments() {
    let tokens = lex("// plain\n/// doc\n//// not doc\nx");

    assert_eq!(tokens[0].kind(), TokenKind::LineComment);
    assert_eq!(tokens[0].span(), Span::new(0, 8));
    assert_eq!(tokens[0].comment().unwrap().content, " plain");
    assert!(!tokens[0].comment().unwrap().is_doc_comment);

    assert!(tokens[1].comment().unwrap().is_doc_comment);
    assert_eq!(tokens[1].comment().unwrap().content, " doc");

    assert!(!tokens[2].comment().unwrap().is_doc_comment);
    assert_eq!(tokens[2].comment().unwrap().content, "// not doc");

    assert_eq!(tokens[3].ident(), Some("x"));
    assert!(tokens[..3].iter().all(Token::is_skippable));
}

#[test]
fn test_line_comment_before_crlf() {
    let tokens = lex("// x\r\ny");

    assert_eq!(tokens[0].comment().unwrap().content, " x");
    // the `\r` stays inside the span
    assert_eq!(tokens[0].span(), Span::new(0, 5));
    assert_eq!(tokens[1].ident(), Some("y"));
    assert_eq!(tokens[1].span(), Span::new(6, 1));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_tokenize_nested_block_comments() {
    let tokens = lex("/* a /* b */ c */x");

    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Comment {
            kind,
            comment,
            span,
        } => {
            assert_eq!(*kind, CommentKind::Block);
            assert_eq!(comment.content, " a /* b */ c ");
            assert!(!comment.is_doc_comment);
            assert_eq!(*span, Span::new(0, 17));
        }
        other => panic!("Expected block comment, got {}", other),
    }
    assert_eq!(tokens[1].span(), Span::new(17, 1));
}

#[test]
fn test_block_doc_comments() {
    let doc = lex("/** doc */");
    assert!(doc[0].comment().unwrap().is_doc_comment);
    assert_eq!(doc[0].comment().unwrap().content, " doc ");

    let empty = lex("/**/");
    assert!(!empty[0].comment().unwrap().is_doc_comment);
    assert_eq!(empty[0].comment().unwrap().content, "");

    let stars = lex("/***/");
    assert!(!stars[0].comment().unwrap().is_doc_comment);
    assert_eq!(stars[0].span(), Span::new(0, 5));
}

#[test]
fn test_unterminated_block_comment() {
    let mut lexer = Lexer::new(String::from("/* /* */ x"));

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind(), TokenKind::BlockComment);
    assert_eq!(token.span(), Span::new(0, 10));
    assert_eq!(lexer.next_token(), None);

    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(
        lexer.errors()[0].get_impl(),
        &ErrorImpl::UnterminatedBlockComment { depth: 1 }
    );
}

#[test]
fn test_comments_disabled() {
    let tokens = lex_with("a // b /* c", LexerConfig::default().with_comments(false));

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Ident,
            TokenKind::Slash,
            TokenKind::Slash,
            TokenKind::Ident,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn test_lone_slash_with_comments_enabled() {
    assert_eq!(kinds(&lex("a / b")), vec![TokenKind::Ident, TokenKind::Slash, TokenKind::Ident]);
}

#[test]
fn test_whitespace_only_and_empty() {
    for source in ["", " ", "  \t\r\n  \n"] {
        let mut lexer = Lexer::new(source.to_string());
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.next_token(), None);
        assert!(lexer.is_eof());
    }
}

#[test]
fn test_long_whitespace_run() {
    let source = format!("{}x", " ".repeat(200_000));
    let tokens = lex(&source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span(), Span::new(200_000, 1));
}

#[test]
fn test_cursor_primitives() {
    let mut lexer = Lexer::new(String::from("ab c"));

    assert_eq!(lexer.advance(), Some(b'a'));
    assert_eq!(lexer.peek(), Some(b'b'));
    assert_eq!(lexer.offset(), 1);

    assert_eq!(lexer.collect_while(is_id_continue), (false, String::from("b")));
    assert_eq!(lexer.offset(), 2);
    assert_eq!(lexer.span_from_length(1), Span::new(1, 1));

    lexer.consume(1);
    assert_eq!(lexer.collect_while(|_| true), (true, String::from("c")));
    assert!(lexer.is_eof());
    assert_eq!(lexer.advance(), None);
    assert_eq!(lexer.peek(), None);
}

#[test]
fn test_collect_while_stops_before_failing_byte() {
    let mut lexer = Lexer::new(String::from("123abc"));

    assert_eq!(lexer.collect_while(is_digit), (false, String::from("123")));
    assert_eq!(lexer.peek(), Some(b'a'));
    assert_eq!(lexer.collect_while(is_digit), (false, String::new()));
    assert_eq!(lexer.offset(), 3);
}

#[test]
fn test_character_classes() {
    for c in [b' ', b'\t', b'\n', b'\r'] {
        assert!(is_whitespace(c));
    }
    assert!(!is_whitespace(0x0b));
    assert!(!is_whitespace(0x0c));

    assert!(is_digit(b'0') && is_digit(b'9') && !is_digit(b'a'));
    assert!(is_alpha(b'z') && is_alpha(b'A') && !is_alpha(b'_'));
    assert!(is_alphanumeric(b'7') && !is_alphanumeric(b'-'));
    assert!(is_id_start(b'_') && !is_id_start(b'1'));
    assert!(is_id_continue(b'1') && is_id_continue(b'_'));
    assert!(!is_id_start(0xc3));

    assert!(is_punct(b'\\') && is_punct(b'"') && is_punct(b'^'));
    assert!(!is_punct(b'@') && !is_punct(b'a'));
}

#[test]
fn test_token_kind_classes() {
    assert!(TokenKind::Let.is_keyword());
    assert!(TokenKind::Loop.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(TokenKind::Percent.is_punct());
    assert!(!TokenKind::Unknown.is_punct());
    assert!(TokenKind::BlockComment.is_comment());
}

#[test]
fn test_token_display() {
    let tokens = lex("let foo 12 1.5 \"abc\" // c");

    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Punct: Let (0..3)",
            "Identifier: foo (4..7)",
            "Literal int: 12 (base Decimal) (8..10)",
            "Literal float: 1.5 (base Decimal) (11..14)",
            "Literal string: abc (terminated: true) (16..19)",
            "Comment (doc: false) (21..25)",
        ]
    );
}

#[test]
fn test_unknown_token_display() {
    let tokens = lex("\\ é");

    assert_eq!(tokens[0].to_string(), "Punct: Unknown (0..1)");
    assert_eq!(tokens[1].to_string(), "Punct: Unknown (2..3)");
}

#[test]
fn test_tokenize_small_program() {
    let source = "fn add(a, b) {\n  return a + b; // sum\n}";
    let tokens = lex(source);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Fn,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::Return,
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::LineComment,
            TokenKind::CloseBrace,
        ]
    );
}

#[test]
fn test_strict_tokenize() {
    let tokens = tokenize(String::from("let x = 1;"), LexerConfig::default()).unwrap();
    assert_eq!(tokens.len(), 5);

    let error = tokenize(String::from("let s = \"abc"), LexerConfig::default()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_span(), &Span::new(9, 3));

    let error = tokenize(String::from("1.2.3"), LexerConfig::default()).unwrap_err();
    assert_eq!(error.get_error_name(), "MalformedNumber");
}

#[test]
fn test_token_stream_cursor() {
    let mut stream = TokenStream::new(Lexer::new(String::from("a b c")));

    assert_eq!(stream.len(), 3);
    assert_eq!(stream.prev(), None);
    assert_eq!(stream.next().and_then(Token::ident), Some("a"));
    assert_eq!(stream.next().and_then(Token::ident), Some("b"));
    assert_eq!(stream.peek().and_then(Token::ident), Some("c"));
    assert_eq!(stream.prev().and_then(Token::ident), Some("b"));
    assert_eq!(stream.prev().and_then(Token::ident), Some("a"));
    assert_eq!(stream.prev(), None);
    assert_eq!(stream.position(), 0);

    assert!(stream.next().is_some());
    assert!(stream.next().is_some());
    assert!(stream.next().is_some());
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.position(), 3);
    assert_eq!(stream.prev().and_then(Token::ident), Some("c"));

    stream.reset();
    assert_eq!(stream.position(), 0);
}

#[test]
fn test_token_stream_trivia_and_errors() {
    let stream = TokenStream::from(Lexer::new(String::from("a /* x */ b /* open")));

    assert_eq!(stream.len(), 4);
    assert_eq!(stream.errors().len(), 1);

    let mut stream = stream.without_trivia();
    assert_eq!(stream.len(), 2);
    assert_eq!(stream.errors().len(), 1);
    assert_eq!(stream.next().and_then(Token::ident), Some("a"));
    assert_eq!(stream.next().and_then(Token::ident), Some("b"));
    assert_eq!(stream.next(), None);
}

#[test]
fn test_empty_token_stream() {
    let mut stream = TokenStream::new(Lexer::new(String::from("   ")));

    assert!(stream.is_empty());
    assert_eq!(stream.next(), None);
    assert_eq!(stream.prev(), None);
}

//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a payload-free Token (keyword or punctuation)
//! - `MK_PUNCT_LOOKUP!` - Creates the byte <-> kind tables for single-byte
//!   punctuation
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a payload-free Token instance.
///
/// # Arguments
///
/// * `$variant` - `Keyword` or `Punct`
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Punct, TokenKind::Semicolon, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($variant:ident, $kind:expr, $span:expr) => {
        Token::$variant {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates the lookup functions for single-byte punctuation.
///
/// Generates `punct_kind(u8) -> Option<TokenKind>` and
/// `punct_symbol(TokenKind) -> Option<char>` from one table, so the two
/// directions can never disagree.
///
/// # Example
///
/// ```ignore
/// MK_PUNCT_LOOKUP! {
///     b';' => Semicolon,
///     b',' => Comma,
/// }
/// ```
#[macro_export]
macro_rules! MK_PUNCT_LOOKUP {
    ($($byte:literal => $kind:ident),* $(,)?) => {
        /// The punctuation kind for `byte`, if it is a single-byte symbol.
        pub fn punct_kind(byte: u8) -> Option<TokenKind> {
            match byte {
                $($byte => Some(TokenKind::$kind),)*
                _ => None,
            }
        }

        /// The source symbol of a punctuation kind.
        pub fn punct_symbol(kind: TokenKind) -> Option<char> {
            match kind {
                $(TokenKind::$kind => Some($byte as char),)*
                _ => None,
            }
        }
    };
}

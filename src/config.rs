//! Lexer configuration - pure data, no global state.

/// What the lexer does when a numeric run contains a second `.`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedNumber {
    /// Produce no token and stop: the call and every later call return
    /// `None`. The error is still recorded on the lexer.
    #[default]
    Suppress,
    /// Consume the whole digit/dot run and emit it as an `Unknown` token.
    ErrorToken,
}

/// Which bytes a quoted literal's span covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteSpan {
    /// Only the text between the quotes.
    #[default]
    Content,
    /// The opening quote through the closing quote, if there is one.
    Delimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Recognize `//` and `/* */` comments. When off, `/` is always `Slash`.
    pub comments: bool,
    pub malformed_number: MalformedNumber,
    pub quote_span: QuoteSpan,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            comments: true,
            malformed_number: MalformedNumber::Suppress,
            quote_span: QuoteSpan::Content,
        }
    }
}

impl LexerConfig {
    /// Every non-whitespace byte of the input ends up in exactly one span.
    pub fn lossless() -> Self {
        Self {
            comments: true,
            malformed_number: MalformedNumber::ErrorToken,
            quote_span: QuoteSpan::Delimited,
        }
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_malformed_number(mut self, malformed_number: MalformedNumber) -> Self {
        self.malformed_number = malformed_number;
        self
    }

    pub fn with_quote_span(mut self, quote_span: QuoteSpan) -> Self {
        self.quote_span = quote_span;
        self
    }
}

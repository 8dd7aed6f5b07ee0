use std::fmt::Display;

use thiserror::Error;

use crate::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnterminatedBlockComment { .. } => "UnterminatedBlockComment",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::SpanOutOfBounds { .. } => "SpanOutOfBounds",
            ErrorImpl::InvalidPath { .. } => "InvalidPath",
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may contain at most one `.`",
                literal
            )),
            ErrorImpl::UnterminatedBlockComment { depth } => ErrorTip::Suggestion(format!(
                "{} block comment(s) still open at end of file, did you miss a `*/`?",
                depth
            )),
            ErrorImpl::UnterminatedLiteral { kind } => {
                ErrorTip::Suggestion(format!("Missing closing quote for {} literal", kind))
            }
            ErrorImpl::SpanOutOfBounds { .. } => ErrorTip::None,
            ErrorImpl::InvalidPath { path } => {
                ErrorTip::Suggestion(format!("`{}` is not a file", path))
            }
            ErrorImpl::UnreadableSource { reason, .. } => {
                ErrorTip::Suggestion(reason.clone())
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.span)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("malformed number literal: {literal:?}")]
    MalformedNumber { literal: String },
    #[error("unterminated block comment (depth {depth})")]
    UnterminatedBlockComment { depth: usize },
    #[error("unterminated {kind} literal")]
    UnterminatedLiteral { kind: String },
    #[error("span starting at {start} is past the end of a {source_len} byte source")]
    SpanOutOfBounds { start: usize, source_len: usize },
    #[error("invalid input path {path:?}")]
    InvalidPath { path: String },
    #[error("failed to read {path:?}: {reason}")]
    UnreadableSource { path: String, reason: String },
}

#![allow(clippy::module_inception)]

use std::{fmt, ops::Range};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    session::Session,
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod session;

/// A half-open byte range `[start, start + length)` into a source buffer.
///
/// Spans order by `start`, then by `length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        debug_assert!(
            start.checked_add(length).is_some(),
            "span {start}+{length} wraps around"
        );

        Span { start, length }
    }

    /// Returns a span with the same start as `span` and a new length.
    pub fn from_span_offset(span: Span, length: usize) -> Self {
        Span::new(span.start, length)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// One past the last byte covered by the span.
    pub fn high_byte(&self) -> usize {
        self.start + self.length
    }

    /// True if `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.high_byte() <= self.high_byte()
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.high_byte()
    }

    /// Resolves the span against `source` into line/column data.
    ///
    /// `line_beginnings` is the table of byte offsets at which each line
    /// starts (see [`Session::calculate_line_beginnings`]). Lines and columns
    /// are 1-based; columns count bytes. Fails if the span starts past the
    /// end of `source`.
    pub fn resolve(
        &self,
        source: &str,
        line_beginnings: &[usize],
        name: Option<&str>,
    ) -> Result<SpanContents, Error> {
        if self.start > source.len() {
            return Err(Error::new(
                ErrorImpl::SpanOutOfBounds {
                    start: self.start,
                    source_len: source.len(),
                },
                *self,
            ));
        }

        let line_index = line_beginnings
            .partition_point(|&beginning| beginning <= self.start)
            .saturating_sub(1);
        let line_start = line_beginnings.get(line_index).copied().unwrap_or(0);

        let end = self.high_byte().min(source.len());
        let excerpt = String::from_utf8_lossy(&source.as_bytes()[self.start..end]).into_owned();

        Ok(SpanContents {
            excerpt,
            line: line_index + 1,
            column: self.start - line_start + 1,
            byte_length: self.length,
            name: name.map(String::from),
        })
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end.saturating_sub(range.start))
    }
}

impl From<(usize, usize)> for Span {
    fn from(tuple: (usize, usize)) -> Self {
        Span::new(tuple.0, tuple.1)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.high_byte())
    }
}

/// A span resolved against its source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanContents {
    pub excerpt: String,
    pub line: usize,
    pub column: usize,
    pub byte_length: usize,
    pub name: Option<String>,
}


/// Renders `error` as a caret diagnostic against the session's source.
pub fn render_error(error: &Error, session: &Session) -> String {
    /*
        error: MalformedNumber (...)
        -> main.erys:1:9
           |
         1 | let a = 1.2.3;
           | --------^
    */

    let (bold_red, reset) = if session.use_color {
        ("\x1b[1;31m", "\x1b[0m")
    } else {
        ("", "")
    };

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{bold_red}error{reset}: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "{bold_red}error{reset}: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let file = session
        .relative_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| String::from("<input>"));

    let contents = match session.resolve(error.get_span()) {
        Ok(contents) => contents,
        Err(_) => {
            out.push_str(&format!("-> {}\n", file));
            return out;
        }
    };

    out.push_str(&format!("-> {}:{}:{}\n", file, contents.line, contents.column));

    let line_str = contents.line.to_string();
    let padding = line_str.len() + 2;
    let line_text = session.line_text(contents.line).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = (contents.column - 1).saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (&string[start..], start)
}

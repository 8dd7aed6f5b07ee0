//! Per-compilation source bookkeeping.
//!
//! A [`Session`] owns the raw source text, the table of line beginnings used
//! to turn byte offsets into line/column pairs, the (validated) path the
//! source was read from and the user's color preference. The lexer itself
//! never reads files; callers hand it `session.source`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use pathdiff::diff_paths;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, SpanContents,
};

#[derive(Debug, Clone)]
pub struct Session {
    pub source: String,
    pub line_beginnings: Vec<usize>,
    pub path: Option<PathBuf>,
    pub use_color: bool,
}

impl Session {
    pub fn new(source: String) -> Self {
        let line_beginnings = Session::calculate_line_beginnings(&source);

        Session {
            source,
            line_beginnings,
            path: None,
            use_color: true,
        }
    }

    /// Reads `path` and builds a session over its contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorImpl::UnreadableSource {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                },
                Span::default(),
            )
        })?;

        let mut session = Session::new(source);
        session.set_path(path)?;

        debug!(
            target: "erys::session",
            path = %path.display(),
            bytes = session.source.len(),
            lines = session.line_count(),
            "Loaded source"
        );

        Ok(session)
    }

    /// Byte offsets at which each line starts. Always begins with `0`.
    ///
    /// `\r\n` is a single break; a lone `\r` also ends a line.
    pub fn calculate_line_beginnings(source: &str) -> Vec<usize> {
        let bytes = source.as_bytes();
        let mut line_beginnings = vec![0];

        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_beginnings.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_beginnings.push(i + 1),
                _ => {}
            }
        }

        line_beginnings
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::new(
                ErrorImpl::InvalidPath {
                    path: path.display().to_string(),
                },
                Span::default(),
            ));
        }

        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn set_use_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_ref()?
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// The session path relative to the current directory, climbing out with
    /// `..` when the file lives elsewhere.
    pub fn relative_path(&self) -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;

        diff_paths(cwd.join(self.path.as_ref()?), &cwd)
    }

    pub fn line_count(&self) -> usize {
        self.line_beginnings.len()
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_beginnings.get(line.checked_sub(1)?)?;
        let end = self
            .line_beginnings
            .get(line)
            .copied()
            .unwrap_or(self.source.len());

        self.source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    pub fn resolve(&self, span: &Span) -> Result<SpanContents, Error> {
        span.resolve(&self.source, &self.line_beginnings, self.file_name().as_deref())
    }
}

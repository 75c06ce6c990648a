//! Parsed result of a single "error loading file" line.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::HyperlinkSpan;

/// Suffix an error-kind token must end with to be reported as-is.
pub const ERROR_NAME_SUFFIX: &str = "Error";

/// Reported when the parsed token is missing or doesn't look like an error kind.
pub const FALLBACK_ERROR_NAME: &str = "Error";

/// File location extracted from one line of test output.
///
/// Immutable; produced by [`ErrorLocator::parse`](super::ErrorLocator::parse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedErrorLocation {
    file_path: PathBuf,
    line_number: u32,
    column_number: Option<u32>,
    #[serde(rename = "error_name", serialize_with = "serialize_error_name")]
    parsed_error_name: Option<String>,
    hyperlink: HyperlinkSpan,
}

fn serialize_error_name<S: Serializer>(raw: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(normalize_error_name(raw.as_deref()))
}

fn normalize_error_name(raw: Option<&str>) -> &str {
    match raw {
        Some(name) if !name.contains(char::is_whitespace) && name.ends_with(ERROR_NAME_SUFFIX) => {
            name
        }
        _ => FALLBACK_ERROR_NAME,
    }
}

impl ParsedErrorLocation {
    pub fn new(
        file_path: PathBuf,
        line_number: u32,
        column_number: Option<u32>,
        parsed_error_name: Option<String>,
        hyperlink: HyperlinkSpan,
    ) -> Self {
        Self {
            file_path,
            line_number,
            column_number,
            parsed_error_name,
            hyperlink,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 1-based line number.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// 1-based column number, if the runner reported one.
    pub fn column_number(&self) -> Option<u32> {
        self.column_number
    }

    /// Error kind such as `TypeError`.
    ///
    /// The raw token is validated on every call: anything containing
    /// whitespace or not ending in `Error` reads as `"Error"`.
    pub fn error_name(&self) -> &str {
        normalize_error_name(self.parsed_error_name.as_deref())
    }

    /// Token exactly as it was cut out of the message text.
    pub fn parsed_error_name(&self) -> Option<&str> {
        self.parsed_error_name.as_deref()
    }

    pub fn hyperlink(&self) -> HyperlinkSpan {
        self.hyperlink
    }

    pub fn hyperlink_start(&self) -> usize {
        self.hyperlink.start
    }

    pub fn hyperlink_end(&self) -> usize {
        self.hyperlink.end
    }

    /// Substring of the source `line` that should become a navigation link.
    pub fn hyperlink_text<'a>(&self, line: &'a str) -> &'a str {
        self.hyperlink.slice(line)
    }
}

impl fmt::Display for ParsedErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_path.display(), self.line_number)?;
        if let Some(column) = self.column_number {
            write!(f, ":{}", column)?;
        }
        Ok(())
    }
}

mod document;

pub use document::ConfigDocument;

use std::fs;
use std::path::Path;

use crate::error::{ConfGuardError, Result};

/// How a line splits into key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Split at the first run of whitespace (`nameserver 192.168.1.2`).
    #[default]
    Whitespace,
    /// Split at the first occurrence of a character (`hosts: files dns`).
    Char(char),
}

/// Options controlling how a configuration file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    comment_char: Option<char>,
    separator: Separator,
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip everything from the first unescaped occurrence of `marker`.
    #[must_use]
    pub const fn with_comment_char(mut self, marker: char) -> Self {
        self.comment_char = Some(marker);
        self
    }

    #[must_use]
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }
}

/// Parse a configuration file from disk.
///
/// # Errors
/// Returns `FileNotFound` or `PermissionDenied` for the matching IO failures,
/// `FileRead` for any other read error, and `Parse` for a non-comment line
/// without the separator. An empty file is an empty document, not an error.
pub fn parse_path(path: &Path, options: ParseOptions) -> Result<ConfigDocument> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfGuardError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ConfGuardError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ConfGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_str(&content, options)
}

/// Parse configuration text line by line.
///
/// # Errors
/// Returns `Parse` naming the 1-based line number for a non-comment line
/// that lacks the separator. Lines never get dropped silently.
pub fn parse_str(content: &str, options: ParseOptions) -> Result<ConfigDocument> {
    let mut doc = ConfigDocument::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = strip_comment(raw_line, options.comment_char);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = split_line(line, options.separator).ok_or_else(|| {
            ConfGuardError::Parse {
                line: index + 1,
                text: line.to_string(),
            }
        })?;
        doc.push(key, value);
    }

    Ok(doc)
}

/// Cut the line at the first unescaped comment marker.
fn strip_comment(line: &str, marker: Option<char>) -> &str {
    let Some(marker) = marker else {
        return line;
    };

    let mut escaped = false;
    for (pos, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if ch == marker {
            return &line[..pos];
        }
    }
    line
}

fn split_line(line: &str, separator: Separator) -> Option<(&str, &str)> {
    let (key, value) = match separator {
        Separator::Whitespace => {
            let pos = line.find(char::is_whitespace)?;
            (&line[..pos], &line[pos..])
        }
        Separator::Char(sep) => {
            let pos = line.find(sep)?;
            (&line[..pos], &line[pos + sep.len_utf8()..])
        }
    };
    Some((key.trim(), value.trim()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error at line {line}: no separator in {text:?}")]
    Parse { line: usize, text: String },

    #[error("Invalid pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Matcher {matcher} cannot evaluate {subject} subject")]
    TypeMismatch {
        matcher: &'static str,
        subject: &'static str,
    },

    #[error("Failed to execute command: {program}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command {program} timed out after {timeout_secs}s")]
    CommandTimeout { program: String, timeout_secs: u64 },

    #[error("Duplicate control id: {0}")]
    DuplicateControl(String),

    #[error("Unknown control id: {0}")]
    UnknownControl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! Tool settings loaded from `.confguard.toml`.
//!
//! Settings cover where the inspected host files live and how the attribute
//! command is invoked. Everything has a default so a bare host scan works
//! without any settings file; CLI flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfGuardError, Result};

/// Default settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = ".confguard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Host files inspected by the built-in controls.
    #[serde(default)]
    pub paths: PathsSettings,

    /// External command invocation.
    #[serde(default)]
    pub command: CommandSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsSettings {
    /// Name-service switch configuration.
    #[serde(default = "default_nsswitch")]
    pub nsswitch: PathBuf,

    /// Resolver configuration.
    #[serde(default = "default_resolv")]
    pub resolv: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandSettings {
    /// Program queried for filesystem attribute flags.
    #[serde(default = "default_attr_program")]
    pub attr_program: String,

    /// Leading arguments; the target file path is appended as the final
    /// argument.
    #[serde(default)]
    pub attr_args: Vec<String>,

    /// Wall-clock timeout for each command invocation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_nsswitch() -> PathBuf {
    PathBuf::from("/etc/nsswitch.conf")
}

fn default_resolv() -> PathBuf {
    PathBuf::from("/etc/resolv.conf")
}

fn default_attr_program() -> String {
    "lsattr".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for PathsSettings {
    fn default() -> Self {
        Self {
            nsswitch: default_nsswitch(),
            resolv: default_resolv(),
        }
    }
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            attr_program: default_attr_program(),
            attr_args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, the default file, or defaults.
    ///
    /// # Errors
    /// An explicitly-passed path must exist; the default path is optional.
    /// Returns `TomlParse` for malformed content and `Config` for invalid
    /// values.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let settings = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfGuardError::Config(format!(
                        "settings file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => {
                let path = Path::new(DEFAULT_SETTINGS_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn validate(&self) -> Result<()> {
        if self.command.timeout_secs == 0 {
            return Err(ConfGuardError::Config(
                "command.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.command.attr_program.trim().is_empty() {
            return Err(ConfGuardError::Config(
                "command.attr_program must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

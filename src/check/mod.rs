mod evaluator;
mod outcome;

pub use evaluator::{BranchState, CheckEvaluator};
pub use outcome::{CheckOutcome, CheckStatus};

use std::path::PathBuf;

use crate::matcher::Matcher;
use crate::parser::ParseOptions;

/// Resolution-mode branch a check may be confined to.
///
/// One control run activates exactly one branch; checks tagged with the other
/// branch are skipped without touching their subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Host resolves names locally (no `dns` in the nsswitch hosts line).
    Local,
    /// Host resolves names through DNS.
    Dns,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Dns => write!(f, "dns"),
        }
    }
}

/// A configuration file together with the options to parse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub options: ParseOptions,
}

impl ConfigSource {
    #[must_use]
    pub const fn new(path: PathBuf, options: ParseOptions) -> Self {
        Self { path, options }
    }
}

/// What a check inspects. Resolved lazily, once per check.
#[derive(Debug, Clone, PartialEq)]
pub enum Subject {
    /// The whole parsed document.
    Document(ConfigSource),
    /// The value sequence recorded under a key (absent key resolves to the
    /// absence value).
    Values { source: ConfigSource, key: String },
    /// Values under a key, whitespace-tokenized (absent key resolves to an
    /// empty sequence).
    Tokens { source: ConfigSource, key: String },
    /// Derived boolean: whether the key's tokens contain the given token.
    HasToken {
        source: ConfigSource,
        key: String,
        token: String,
    },
    /// Derived count of values under a key.
    ValueCount {
        source: ConfigSource,
        key: String,
        distinct: bool,
    },
    /// Captured stdout of an external command.
    CommandStdout { program: String, args: Vec<String> },
}

/// One assertion inside a control.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub description: String,
    pub subject: Subject,
    pub matcher: Matcher,
    pub negated: bool,
    pub branch: Option<Branch>,
}

impl Check {
    #[must_use]
    pub fn new(description: impl Into<String>, subject: Subject, matcher: Matcher) -> Self {
        Self {
            description: description.into(),
            subject,
            matcher,
            negated: false,
            branch: None,
        }
    }

    /// Invert the matcher verdict (`should_not` form).
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Confine the check to one resolution branch.
    #[must_use]
    pub const fn on_branch(mut self, branch: Branch) -> Self {
        self.branch = Some(branch);
        self
    }

    /// Expectation text as reported in verdicts.
    #[must_use]
    pub fn expected(&self) -> String {
        let base = self.matcher.describe();
        if self.negated {
            format!("not {base}")
        } else {
            base
        }
    }
}

/// Status of a single evaluated check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    /// The check could not be evaluated (unreadable file, missing binary,
    /// timeout, matcher/subject mismatch). Distinct from an assertion that
    /// ran and failed.
    Error,
    /// The check's branch was not active; its subject was never resolved.
    Skipped,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
            Self::Error => write!(f, "error"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcome of one check, with the actual/expected detail for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub description: String,
    pub status: CheckStatus,
    /// Rendered actual value; `None` when the subject was never resolved.
    pub actual: Option<String>,
    /// Rendered expectation, e.g. `includes "dns"` or `not is empty`.
    pub expected: String,
    /// Error detail for `Error` outcomes.
    pub message: Option<String>,
}

impl CheckOutcome {
    #[must_use]
    pub fn passed(description: impl Into<String>, actual: String, expected: String) -> Self {
        Self {
            description: description.into(),
            status: CheckStatus::Passed,
            actual: Some(actual),
            expected,
            message: None,
        }
    }

    #[must_use]
    pub fn failed(description: impl Into<String>, actual: String, expected: String) -> Self {
        Self {
            description: description.into(),
            status: CheckStatus::Failed,
            actual: Some(actual),
            expected,
            message: None,
        }
    }

    #[must_use]
    pub fn error(description: impl Into<String>, expected: String, message: String) -> Self {
        Self {
            description: description.into(),
            status: CheckStatus::Error,
            actual: None,
            expected,
            message: Some(message),
        }
    }

    #[must_use]
    pub fn skipped(description: impl Into<String>, expected: String) -> Self {
        Self {
            description: description.into(),
            status: CheckStatus::Skipped,
            actual: None,
            expected,
            message: None,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.status, CheckStatus::Error)
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, CheckStatus::Skipped)
    }
}

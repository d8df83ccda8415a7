use crate::check::CheckOutcome;

use super::{Control, Severity};

/// Terminal status of one control run.
///
/// Failed outranks Errored: a control with both a failing assertion and an
/// unevaluable check reports Failed. Skipped checks never affect the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    Passed,
    Failed,
    Errored,
}

impl std::fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// Aggregated, immutable outcome of one control run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub control_id: String,
    pub title: String,
    pub severity: Severity,
    pub status: ControlStatus,
    pub checks: Vec<CheckOutcome>,
}

impl Verdict {
    #[must_use]
    pub fn from_outcomes(control: &Control, checks: Vec<CheckOutcome>) -> Self {
        let status = aggregate(&checks);
        Self {
            control_id: control.id.clone(),
            title: control.title.clone(),
            severity: control.severity,
            status,
            checks,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, ControlStatus::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, ControlStatus::Failed)
    }

    #[must_use]
    pub const fn is_errored(&self) -> bool {
        matches!(self.status, ControlStatus::Errored)
    }
}

fn aggregate(checks: &[CheckOutcome]) -> ControlStatus {
    if checks.iter().any(CheckOutcome::is_failed) {
        ControlStatus::Failed
    } else if checks.iter().any(CheckOutcome::is_error) {
        ControlStatus::Errored
    } else {
        ControlStatus::Passed
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;

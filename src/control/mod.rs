mod registry;
mod runner;
mod verdict;

pub use registry::ControlRegistry;
pub use runner::ControlRunner;
pub use verdict::{ControlStatus, Verdict};

use crate::check::{Check, Subject};
use crate::error::{ConfGuardError, Result};
use crate::matcher::Matcher;

/// Severity label from the compliance catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Where a control applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Host,
    Container,
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Container => write!(f, "container"),
        }
    }
}

/// Compliance-catalog identifiers carried as opaque data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlTags {
    pub srg_id: Option<String>,
    pub stig_id: Option<String>,
    pub cci: Vec<String>,
    pub nist: Vec<String>,
    pub subsystems: Vec<String>,
}

/// Branch-gating check: resolved once per control run, before any
/// branch-tagged check. A true matcher verdict activates the Dns branch,
/// false the Local branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchGate {
    pub description: String,
    pub subject: Subject,
    pub matcher: Matcher,
}

/// One compliance rule: catalog metadata plus its checks.
///
/// Controls are immutable once registered; each run parses its files fresh
/// and shares no state with other controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Human-oriented instructions for verifying the control manually.
    pub check_text: String,
    /// Human-oriented remediation instructions.
    pub fix_text: String,
    /// Impact score in [0.0, 1.0].
    pub impact: f64,
    pub severity: Severity,
    pub tags: ControlTags,
    pub applicability: Vec<Applicability>,
    pub gate: Option<BranchGate>,
    pub checks: Vec<Check>,
}

impl Control {
    /// Structural validation performed at registration time.
    ///
    /// # Errors
    /// Returns `Config` for an empty id, an impact outside [0.0, 1.0], or a
    /// branch-tagged check on a control without a gate.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ConfGuardError::Config(
                "control id must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.impact) {
            return Err(ConfGuardError::Config(format!(
                "control {}: impact {} outside [0.0, 1.0]",
                self.id, self.impact
            )));
        }
        if self.gate.is_none() && self.checks.iter().any(|c| c.branch.is_some()) {
            return Err(ConfGuardError::Config(format!(
                "control {}: branch-tagged check without a branch gate",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use serde::Serialize;

use crate::control::{ControlStatus, Verdict};
use crate::error::Result;

use super::VerdictFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    controls: Vec<ControlResult>,
}

#[derive(Serialize)]
struct Summary {
    total_controls: usize,
    passed: usize,
    failed: usize,
    errored: usize,
}

#[derive(Serialize)]
struct ControlResult {
    id: String,
    title: String,
    severity: String,
    status: String,
    checks: Vec<CheckRecord>,
}

#[derive(Serialize)]
struct CheckRecord {
    description: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<String>,
    expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl VerdictFormatter for JsonFormatter {
    fn format(&self, verdicts: &[Verdict]) -> Result<String> {
        let (passed, failed, errored) =
            verdicts
                .iter()
                .fold((0, 0, 0), |(p, f, e), v| match v.status {
                    ControlStatus::Passed => (p + 1, f, e),
                    ControlStatus::Failed => (p, f + 1, e),
                    ControlStatus::Errored => (p, f, e + 1),
                });

        let output = JsonOutput {
            summary: Summary {
                total_controls: verdicts.len(),
                passed,
                failed,
                errored,
            },
            controls: verdicts.iter().map(convert_verdict).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_verdict(verdict: &Verdict) -> ControlResult {
    ControlResult {
        id: verdict.control_id.clone(),
        title: verdict.title.clone(),
        severity: verdict.severity.to_string(),
        status: verdict.status.to_string(),
        checks: verdict
            .checks
            .iter()
            .map(|check| CheckRecord {
                description: check.description.clone(),
                status: check.status.to_string(),
                actual: check.actual.clone(),
                expected: check.expected.clone(),
                message: check.message.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

use crate::command::CommandRunner;
use crate::error::Result;
use crate::matcher::Value;
use crate::parser::parse_path;

use super::{Branch, Check, CheckOutcome, Subject};

/// Branch applicability for the control run a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchState {
    /// The control carries no branch gate; only unconditional checks run.
    Ungated,
    /// The gate resolved and selected this branch.
    Active(Branch),
    /// The gate could not be resolved; branch-tagged checks become errors.
    Unresolved,
}

/// Resolves subjects and applies matchers, turning checks into outcomes.
///
/// Every resolution failure is caught and converted into an `Error` outcome
/// so one broken subject never aborts the control's remaining checks.
pub struct CheckEvaluator<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> CheckEvaluator<'a> {
    #[must_use]
    pub const fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    #[must_use]
    pub fn evaluate(&self, check: &Check, branch: BranchState) -> CheckOutcome {
        let expected = check.expected();

        if let Some(required) = check.branch {
            match branch {
                BranchState::Active(active) if active == required => {}
                BranchState::Active(_) => {
                    return CheckOutcome::skipped(&check.description, expected);
                }
                BranchState::Unresolved => {
                    return CheckOutcome::error(
                        &check.description,
                        expected,
                        "branch applicability could not be determined".to_string(),
                    );
                }
                BranchState::Ungated => {
                    return CheckOutcome::error(
                        &check.description,
                        expected,
                        "check is branch-gated but the control has no gate".to_string(),
                    );
                }
            }
        }

        let value = match self.resolve(&check.subject) {
            Ok(value) => value,
            Err(err) => {
                return CheckOutcome::error(&check.description, expected, err.to_string());
            }
        };

        match check.matcher.evaluate(&value) {
            Ok(result) if result != check.negated => {
                CheckOutcome::passed(&check.description, value.render(), expected)
            }
            Ok(_) => CheckOutcome::failed(&check.description, value.render(), expected),
            Err(err) => CheckOutcome::error(&check.description, expected, err.to_string()),
        }
    }

    /// Resolve a subject to a matchable value. Parsing and command execution
    /// happen here, lazily, once per check.
    ///
    /// # Errors
    /// Propagates parse and command execution failures; callers convert them
    /// to `Error` outcomes.
    pub fn resolve(&self, subject: &Subject) -> Result<Value> {
        match subject {
            Subject::Document(source) => {
                Ok(Value::Document(parse_path(&source.path, source.options)?))
            }
            Subject::Values { source, key } => {
                let doc = parse_path(&source.path, source.options)?;
                if doc.contains_key(key) {
                    Ok(Value::Values(doc.values(key).to_vec()))
                } else {
                    Ok(Value::Absent)
                }
            }
            Subject::Tokens { source, key } => {
                let doc = parse_path(&source.path, source.options)?;
                Ok(Value::Values(doc.tokens(key)))
            }
            Subject::HasToken { source, key, token } => {
                let doc = parse_path(&source.path, source.options)?;
                Ok(Value::Bool(doc.tokens(key).contains(token)))
            }
            Subject::ValueCount {
                source,
                key,
                distinct,
            } => {
                let doc = parse_path(&source.path, source.options)?;
                Ok(Value::Count(doc.value_count(key, *distinct) as u64))
            }
            Subject::CommandStdout { program, args } => {
                let output = self.runner.run(program, args)?;
                Ok(Value::Text(output.stdout))
            }
        }
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;

use crate::check::{Branch, BranchState, CheckEvaluator};
use crate::command::CommandRunner;

use super::{BranchGate, Control, Verdict};

/// Sequences a control's checks and aggregates their outcomes.
///
/// A run moves `Created -> Evaluating -> {Passed, Failed, Errored}`: the
/// runner is constructed, the branch gate (if any) resolves on entry to
/// evaluation, every check evaluates in definition order, and the verdict's
/// status is the terminal state. Checks within one control run sequentially
/// because branch-tagged checks depend on the gate; distinct controls share
/// no mutable state and may run on parallel workers.
pub struct ControlRunner<'a> {
    evaluator: CheckEvaluator<'a>,
}

impl<'a> ControlRunner<'a> {
    #[must_use]
    pub const fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            evaluator: CheckEvaluator::new(runner),
        }
    }

    #[must_use]
    pub fn run(&self, control: &Control) -> Verdict {
        let branch = control
            .gate
            .as_ref()
            .map_or(BranchState::Ungated, |gate| self.resolve_gate(gate));

        let outcomes = control
            .checks
            .iter()
            .map(|check| self.evaluator.evaluate(check, branch))
            .collect();

        Verdict::from_outcomes(control, outcomes)
    }

    /// Resolve the gate to the active branch. A true matcher verdict selects
    /// the Dns branch, false the Local branch; a resolution failure leaves
    /// the branch undetermined and branch-tagged checks become errors.
    fn resolve_gate(&self, gate: &BranchGate) -> BranchState {
        let verdict = self
            .evaluator
            .resolve(&gate.subject)
            .and_then(|value| gate.matcher.evaluate(&value));

        match verdict {
            Ok(true) => BranchState::Active(Branch::Dns),
            Ok(false) => BranchState::Active(Branch::Local),
            Err(_) => BranchState::Unresolved,
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

use std::fmt::Write;

use crate::check::{CheckOutcome, CheckStatus};
use crate::control::{ControlStatus, Verdict};
use crate::error::Result;

use super::VerdictFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn control_icon(status: ControlStatus) -> &'static str {
        match status {
            ControlStatus::Passed => "✓",
            ControlStatus::Failed => "✗",
            ControlStatus::Errored => "!",
        }
    }

    const fn check_icon(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Passed => "✓",
            CheckStatus::Failed => "✗",
            CheckStatus::Error => "!",
            CheckStatus::Skipped => "-",
        }
    }

    fn colorize(&self, text: &str, color: &'static str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn control_color(status: ControlStatus) -> &'static str {
        match status {
            ControlStatus::Passed => ansi::GREEN,
            ControlStatus::Failed => ansi::RED,
            ControlStatus::Errored => ansi::YELLOW,
        }
    }

    const fn check_color(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Passed => ansi::GREEN,
            CheckStatus::Failed => ansi::RED,
            CheckStatus::Error => ansi::YELLOW,
            CheckStatus::Skipped => ansi::CYAN,
        }
    }

    fn write_check(&self, out: &mut String, check: &CheckOutcome) {
        let icon = self.colorize(
            Self::check_icon(check.status),
            Self::check_color(check.status),
        );
        let _ = write!(out, "  {icon} {}", check.description);

        match check.status {
            CheckStatus::Failed => {
                let actual = check.actual.as_deref().unwrap_or("(unknown)");
                let _ = write!(out, ": expected {}, got {actual}", check.expected);
            }
            CheckStatus::Error => {
                let message = check.message.as_deref().unwrap_or("unknown error");
                let _ = write!(out, ": {message}");
            }
            CheckStatus::Skipped => {
                let _ = write!(out, " (skipped)");
            }
            CheckStatus::Passed => {
                if self.verbose > 0 {
                    let actual = check.actual.as_deref().unwrap_or("(unknown)");
                    let _ = write!(out, ": {} ({actual})", check.expected);
                }
            }
        }
        out.push('\n');
    }
}

impl VerdictFormatter for TextFormatter {
    fn format(&self, verdicts: &[Verdict]) -> Result<String> {
        let mut out = String::new();

        for verdict in verdicts {
            let icon = self.colorize(
                Self::control_icon(verdict.status),
                Self::control_color(verdict.status),
            );
            let status = self.colorize(
                &verdict.status.to_string(),
                Self::control_color(verdict.status),
            );
            let _ = writeln!(
                out,
                "{icon} {} [{}] {} ({status})",
                verdict.control_id, verdict.severity, verdict.title
            );

            for check in &verdict.checks {
                self.write_check(&mut out, check);
            }
        }

        let (passed, failed, errored) =
            verdicts
                .iter()
                .fold((0, 0, 0), |(p, f, e), v| match v.status {
                    ControlStatus::Passed => (p + 1, f, e),
                    ControlStatus::Failed => (p, f + 1, e),
                    ControlStatus::Errored => (p, f, e + 1),
                });
        let _ = write!(
            out,
            "\n{} controls: {passed} passed, {failed} failed, {errored} errored",
            verdicts.len()
        );

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

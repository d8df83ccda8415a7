//! External command execution behind a trait seam.
//!
//! Controls only consume captured stdout and the exit code; the transport is
//! swappable so tests script command results without spawning processes.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{ConfGuardError, Result};

/// Captured result of one command invocation.
///
/// A non-zero exit code is not an error here; whether it matters is the
/// matcher's call. Only failure to execute (missing binary, timeout)
/// surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Stdout with trailing newlines trimmed.
    pub stdout: String,
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

/// Executes external commands and captures their output.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` once and capture stdout.
    ///
    /// # Errors
    /// Returns `CommandSpawn` if the binary cannot be started and
    /// `CommandTimeout` if it outlives the configured deadline.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Runs commands through `std::process` with a wall-clock timeout.
#[derive(Debug, Clone, Copy)]
pub struct SystemCommandRunner {
    timeout: Duration,
}

const POLL_INTERVAL: Duration = Duration::from_millis(20);

impl SystemCommandRunner {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let spawn_err = |source| ConfGuardError::CommandSpawn {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;

        // Drain stdout on a separate thread while polling for exit; a child
        // writing more than the pipe buffer would otherwise block on write
        // and sit there until the deadline kills it.
        let mut pipe = child.stdout.take();
        let reader = std::thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(pipe) = pipe.as_mut() {
                let _ = std::io::Read::read_to_end(pipe, &mut buf);
            }
            buf
        });

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if started.elapsed() > self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = reader.join();
                        return Err(ConfGuardError::CommandTimeout {
                            program: program.to_string(),
                            timeout_secs: self.timeout.as_secs(),
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(source) => return Err(spawn_err(source)),
            }
        };

        let bytes = reader.join().unwrap_or_default();
        let stdout = String::from_utf8_lossy(&bytes)
            .trim_end_matches(['\n', '\r'])
            .to_string();

        Ok(CommandOutput {
            stdout,
            exit_code: status.code(),
        })
    }
}

/// Test double returning a scripted result instead of spawning a process.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRunner {
    script: Script,
}

#[cfg(test)]
#[derive(Debug, Clone)]
enum Script {
    Output { stdout: String, exit_code: i32 },
    MissingBinary,
    TimedOut,
}

#[cfg(test)]
impl ScriptedRunner {
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            script: Script::Output {
                stdout: stdout.into(),
                exit_code: 0,
            },
        }
    }

    pub fn exit_code(stdout: impl Into<String>, exit_code: i32) -> Self {
        Self {
            script: Script::Output {
                stdout: stdout.into(),
                exit_code,
            },
        }
    }

    pub const fn missing_binary() -> Self {
        Self {
            script: Script::MissingBinary,
        }
    }

    pub const fn timed_out() -> Self {
        Self {
            script: Script::TimedOut,
        }
    }
}

#[cfg(test)]
impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, _args: &[String]) -> Result<CommandOutput> {
        match &self.script {
            Script::Output { stdout, exit_code } => Ok(CommandOutput {
                stdout: stdout.clone(),
                exit_code: Some(*exit_code),
            }),
            Script::MissingBinary => Err(ConfGuardError::CommandSpawn {
                program: program.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
            Script::TimedOut => Err(ConfGuardError::CommandTimeout {
                program: program.to_string(),
                timeout_secs: 0,
            }),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

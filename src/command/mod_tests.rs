use std::time::Duration;

use super::*;

fn runner() -> SystemCommandRunner {
    SystemCommandRunner::new(Duration::from_secs(5))
}

#[test]
#[cfg(unix)]
fn run_captures_stdout_without_trailing_newline() {
    let output = runner().run("echo", &["flag".to_string()]).unwrap();

    assert_eq!(output.stdout, "flag");
    assert_eq!(output.exit_code, Some(0));
}

#[test]
#[cfg(unix)]
fn run_reports_nonzero_exit_code_as_output() {
    let output = runner()
        .run("sh", &["-c".to_string(), "exit 3".to_string()])
        .unwrap();

    assert_eq!(output.exit_code, Some(3));
}

#[test]
#[cfg(unix)]
fn run_drains_stdout_larger_than_pipe_buffer() {
    // Well past the usual 64 KB pipe capacity; the child must still exit
    // promptly instead of blocking on write until the deadline.
    let runner = SystemCommandRunner::new(Duration::from_secs(3));
    let output = runner
        .run(
            "sh",
            &[
                "-c".to_string(),
                "head -c 200000 /dev/zero | tr '\\0' 'x'".to_string(),
            ],
        )
        .unwrap();

    assert_eq!(output.stdout.len(), 200_000);
    assert_eq!(output.exit_code, Some(0));
}

#[test]
#[cfg(unix)]
fn run_trims_all_trailing_newlines() {
    let output = runner().run("printf", &["flag\n\n\n".to_string()]).unwrap();

    assert_eq!(output.stdout, "flag");
}

#[test]
fn run_missing_binary_is_spawn_error() {
    let err = runner()
        .run("confguard-no-such-binary", &[])
        .unwrap_err();

    assert!(matches!(err, ConfGuardError::CommandSpawn { .. }));
}

#[test]
#[cfg(unix)]
fn run_kills_command_exceeding_timeout() {
    let runner = SystemCommandRunner::new(Duration::from_millis(100));
    let err = runner
        .run("sh", &["-c".to_string(), "sleep 5".to_string()])
        .unwrap_err();

    assert!(matches!(err, ConfGuardError::CommandTimeout { .. }));
}

#[test]
fn scripted_runner_returns_scripted_output() {
    let output = ScriptedRunner::stdout("----i---- /etc/resolv.conf")
        .run("lsattr", &[])
        .unwrap();

    assert_eq!(output.stdout, "----i---- /etc/resolv.conf");
    assert_eq!(output.exit_code, Some(0));
}

#[test]
fn scripted_runner_simulates_missing_binary() {
    let err = ScriptedRunner::missing_binary().run("lsattr", &[]).unwrap_err();
    assert!(matches!(err, ConfGuardError::CommandSpawn { .. }));
}

#[test]
fn scripted_runner_simulates_timeout() {
    let err = ScriptedRunner::timed_out().run("lsattr", &[]).unwrap_err();
    assert!(matches!(err, ConfGuardError::CommandTimeout { .. }));
}

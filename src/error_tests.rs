use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ConfGuardError::Config("invalid timeout".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid timeout");
}

#[test]
fn error_display_file_not_found() {
    let err = ConfGuardError::FileNotFound {
        path: PathBuf::from("/etc/resolv.conf"),
    };
    assert_eq!(err.to_string(), "File not found: /etc/resolv.conf");
}

#[test]
fn error_display_parse_names_line_number() {
    let err = ConfGuardError::Parse {
        line: 7,
        text: "hosts files dns".to_string(),
    };
    assert!(err.to_string().contains("line 7"));
    assert!(err.to_string().contains("hosts files dns"));
}

#[test]
fn error_display_command_timeout() {
    let err = ConfGuardError::CommandTimeout {
        program: "lsattr".to_string(),
        timeout_secs: 10,
    };
    assert_eq!(err.to_string(), "Command lsattr timed out after 10s");
}

#[test]
fn error_display_type_mismatch() {
    let err = ConfGuardError::TypeMismatch {
        matcher: "at_least",
        subject: "document",
    };
    assert!(err.to_string().contains("at_least"));
    assert!(err.to_string().contains("document"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::other("boom");
    let err: ConfGuardError = io_err.into();
    assert!(matches!(err, ConfGuardError::Io(_)));
}

use predicates::prelude::*;

mod common;

use common::HostFixture;

#[test]
fn version_flag_prints_version() {
    confguard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("confguard"));
}

#[test]
fn help_lists_subcommands() {
    confguard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn list_shows_builtin_controls() {
    confguard!()
        .arg("--no-config")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("AMZL-02-740600"))
        .stdout(predicate::str::contains("[low]"));
}

#[test]
fn show_prints_catalog_metadata() {
    confguard!()
        .arg("--no-config")
        .arg("show")
        .arg("AMZL-02-740600")
        .assert()
        .success()
        .stdout(predicate::str::contains("SRG-OS-000480-GPOS-00227"))
        .stdout(predicate::str::contains("CCI-000366"))
        .stdout(predicate::str::contains("CM-6 b"))
        .stdout(predicate::str::contains("impact: 0.3"))
        .stdout(predicate::str::contains("Fix:"));
}

#[test]
fn show_unknown_control_is_a_runtime_error() {
    confguard!()
        .arg("--no-config")
        .arg("show")
        .arg("AMZL-99-000000")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown control id"));
}

#[test]
fn scan_rejects_unknown_format() {
    confguard!()
        .arg("scan")
        .arg("--no-config")
        .arg("--format")
        .arg("sarif")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sarif"));
}

#[test]
fn missing_explicit_settings_file_is_a_runtime_error() {
    let fixture = HostFixture::new();
    let missing = fixture.dir.path().join("no-such-settings.toml");

    confguard!()
        .arg("scan")
        .arg("--config")
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("settings file not found"));
}

#[test]
fn malformed_settings_file_is_a_runtime_error() {
    let fixture = HostFixture::new();
    let settings = fixture.write_settings("[paths\nnot toml");

    confguard!()
        .arg("scan")
        .arg("--config")
        .arg(&settings)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn zero_timeout_in_settings_is_rejected() {
    let fixture = HostFixture::new();
    let settings = fixture.write_settings("[command]\ntimeout_secs = 0\n");

    confguard!()
        .arg("scan")
        .arg("--config")
        .arg(&settings)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timeout_secs"));
}

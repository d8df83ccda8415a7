#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the confguard binary.
#[macro_export]
macro_rules! confguard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("confguard"))
    };
}

/// Attribute-listing flags field containing the immutable flag. The scan is
/// pointed at `echo` so this string becomes the first stdout token.
pub const IMMUTABLE_FLAGS: &str = "----i---------e-------";

/// Flags field without the immutable flag.
pub const MUTABLE_FLAGS: &str = "--------------e-------";

pub const DNS_NSSWITCH: &str = "hosts: files dns\n";
pub const LOCAL_NSSWITCH: &str = "hosts: files\n";
pub const TWO_NAMESERVERS: &str = "nameserver 10.0.0.2\nnameserver 10.0.0.3\n";
pub const ONE_NAMESERVER: &str = "nameserver 10.0.0.2\n";

/// Temp directory holding the host files a scan inspects.
pub struct HostFixture {
    pub dir: TempDir,
}

impl HostFixture {
    /// Empty fixture; neither host file exists yet.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Fixture representing a compliant DNS-resolving host.
    pub fn dns_host() -> Self {
        let fixture = Self::new();
        fixture.write_nsswitch(DNS_NSSWITCH);
        fixture.write_resolv(TWO_NAMESERVERS);
        fixture
    }

    /// Fixture representing a compliant locally-resolving host.
    pub fn local_host() -> Self {
        let fixture = Self::new();
        fixture.write_nsswitch(LOCAL_NSSWITCH);
        fixture.write_resolv("");
        fixture
    }

    pub fn write_nsswitch(&self, content: &str) {
        fs::write(self.nsswitch_path(), content).expect("Failed to write nsswitch file");
    }

    pub fn write_resolv(&self, content: &str) {
        fs::write(self.resolv_path(), content).expect("Failed to write resolv file");
    }

    pub fn nsswitch_path(&self) -> PathBuf {
        self.dir.path().join("nsswitch.conf")
    }

    pub fn resolv_path(&self) -> PathBuf {
        self.dir.path().join("resolv.conf")
    }

    /// Writes a settings file into the fixture and returns its path.
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("confguard.toml");
        fs::write(&path, content).expect("Failed to write settings file");
        path
    }
}

impl Default for HostFixture {
    fn default() -> Self {
        Self::new()
    }
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lab-verdict binary.
#[macro_export]
macro_rules! lab_verdict {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lab-verdict"))
    };
}

pub const BASE: &str = "Script started on 2022-03-11 10:08:28+00:00 [TERM=\"linux\" TTY=\"/dev/tty1\"]
ip link add link eth1 name vlan7 type vlan id 7
ip address add dev vlan7 10.10.10.7/24
exit
";

pub const BRIDGE: &str = "Script started on 2022-03-11 10:07:38+00:00 [TERM=\"linux\" TTY=\"/dev/tty1\"]
ip link add br0 type bridge
exit
";

pub const CLONE: &str = "Script started on 2022-03-11 10:09:09+00:00 [TERM=\"linux\" TTY=\"/dev/tty1\"]
ip link add link eth1 name vlan9 type vlan id 9
ip address add dev vlan9 10.10.10.9/24
ping -c8 10.10.10.7
";

pub const INSTRUCTIONS: &str = r#"{
    "10.10.10.\\d": {"direction": "in", "files": ["report.03.clone"]},
    "Script started on": {"direction": "out"},
    "vlan7": {"direction": "in", "files": ["report.03.base", "report.03.clone"]}
}"#;

/// A temporary lab directory with reports and instruction files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Two participants, `veniamin` (base, bridge) and `dima` (base, bridge, clone),
    /// plus `instruction.json`. Eight of nine applicable rules match.
    pub fn lab() -> Self {
        let fixture = Self::new();
        fixture.create_file("reports/veniamin/report.03.base", BASE);
        fixture.create_file("reports/veniamin/report.03.bridge", BRIDGE);
        fixture.create_file("reports/dima/report.03.base", BASE);
        fixture.create_file("reports/dima/report.03.bridge", BRIDGE);
        fixture.create_file("reports/dima/report.03.clone", CLONE);
        fixture.create_file("instruction.json", INSTRUCTIONS);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Creates a local lab-verdict config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".lab-verdict.toml", content);
    }
}

//! Shared test fixtures: a small lab submission tree on disk.
//!
//! Layout under the returned `TempDir`:
//! - `reports/veniamin/{report.03.base, report.03.bridge}`
//! - `reports/dima/{report.03.base, report.03.bridge, report.03.clone}`
//! - `instruction.json`

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

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
ip link set vlan9 up
ping -c8 10.10.10.7
";

pub const INSTRUCTIONS: &str = r#"{
    "10.10.10.\\d": {"direction": "in", "files": ["report.03.clone"]},
    "Script started on": {"direction": "out"},
    "vlan7": {"direction": "in", "files": ["report.03.base", "report.03.clone"]}
}"#;

pub struct LabFixture {
    pub dir: TempDir,
}

impl LabFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let reports = dir.path().join("reports");
        write_participant(
            &reports.join("veniamin"),
            &[("report.03.base", BASE), ("report.03.bridge", BRIDGE)],
        );
        write_participant(
            &reports.join("dima"),
            &[
                ("report.03.base", BASE),
                ("report.03.bridge", BRIDGE),
                ("report.03.clone", CLONE),
            ],
        );
        fs::write(dir.path().join("instruction.json"), INSTRUCTIONS).unwrap();
        Self { dir }
    }

    pub fn reports(&self) -> PathBuf {
        self.dir.path().join("reports")
    }

    pub fn instructions(&self) -> PathBuf {
        self.dir.path().join("instruction.json")
    }
}

pub fn write_participant(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

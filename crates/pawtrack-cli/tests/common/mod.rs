//! Common utilities for CLI tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Isolated settings directory plus scratch space for input files.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the sandbox and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Invoke the CLI and return (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_pawtrack-cli"))
            .args(args)
            .env("PAWTRACK_CONFIG_DIR", self.dir.path().join("config"))
            .env_remove("PAWTRACK_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (stdout, stderr, code)
    }

    /// Invoke the CLI and expect success.
    pub fn run_success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "CLI command failed with code {code}: {args:?}\n{stderr}");
        stdout
    }

    /// Invoke the CLI and expect failure.
    pub fn run_failure(&self, args: &[&str]) -> (String, String, i32) {
        let (stdout, stderr, code) = self.run(args);
        assert!(code != 0, "CLI command unexpectedly succeeded: {args:?}");
        (stdout, stderr, code)
    }
}

/// Parse JSON output from CLI.
pub fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

/// A Monday-to-Wednesday sample calendar.
pub const EVENTS: &str = r#"[
    {"id": "1", "title": "Drop-in - Smith", "start": "2026-03-02T09:00:00", "end": "2026-03-02T09:30:00"},
    {"id": "2", "title": "Walk | Jones 60", "start": "2026-03-02T12:00:00", "end": "2026-03-02T13:00:00"},
    {"id": "3", "title": "Dentist", "start": "2026-03-03T10:00:00", "end": "2026-03-03T11:00:00"},
    {"id": "4", "title": "Overnight - Patel", "start": "2026-03-03T20:00:00", "end": "2026-03-04T08:00:00"}
]"#;

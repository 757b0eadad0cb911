#![allow(missing_docs)]

//! Write-failure reporting against a real standard error stream.
//!
//! The parent tests re-execute this test binary, running only
//! `report_child`, once with stderr captured and once with stderr
//! connected to a pipe whose read end is already closed.

#[macro_use]
mod common;

use levelog::{Flags, Logger, Severity};
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

const CHILD_MARKER_ENV: &str = "LEVELOG_REPORT_CHILD_MARKER";

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs only inside the child process.
#[test]
fn report_child() {
    let Ok(marker) = std::env::var(CHILD_MARKER_ENV) else {
        return;
    };
    let log = Logger::new(Some(BrokenPipe), "", Severity::Debug, Flags::NONE);
    levelog::error!(log, "lost line");
    levelog::warnf!(log, "lost {}", "again");
    std::fs::write(marker, "returned").expect("marker");
}

fn child(marker: &Path) -> Command {
    let exe = std::env::current_exe().expect("test binary path");
    let mut cmd = Command::new(exe);
    cmd.args(["--exact", "report_child", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER_ENV, marker)
        .stdin(Stdio::null())
        .stdout(Stdio::null());
    cmd
}

#[test]
fn write_failures_are_reported_on_stderr() {
    common::init_test_logging();
    test_phase!("write_failures_are_reported_on_stderr");

    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("returned");
    let output = child(&marker)
        .stderr(Stdio::piped())
        .output()
        .expect("spawn child");

    assert_with_log!(output.status.success(), "exit status", Some(0), output.status.code());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("levelog: failed to write error line: reader went away"),
        "stderr: {stderr}"
    );
    assert!(
        stderr.contains("levelog: failed to write warn line: reader went away"),
        "stderr: {stderr}"
    );
    assert!(marker.exists(), "logging call did not return");
    test_complete!("write_failures_are_reported_on_stderr");
}

#[test]
fn closed_stderr_does_not_crash_the_caller() {
    common::init_test_logging();
    test_phase!("closed_stderr_does_not_crash_the_caller");

    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("returned");
    let (reader, writer) = io::pipe().expect("pipe");
    drop(reader);

    let status = child(&marker)
        .stderr(writer)
        .status()
        .expect("spawn child");

    assert_with_log!(status.success(), "exit status", Some(0), status.code());
    assert!(marker.exists(), "logging call did not return");
    test_complete!("closed_stderr_does_not_crash_the_caller");
}

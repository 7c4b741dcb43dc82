//! E2E tests for the scan command

use anyhow::Result;
use assert_cmd::Command;
use depcalc_tests::fixtures::demo_project;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn e2e_scan_prints_declared_interface() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let project = demo_project(temp_dir.path())?;

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("scan").arg(project.lib.join("widget.js"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("provides: [demo.Widget]"))
        .stdout(predicate::str::contains("requires: [demo.dom]"));
    Ok(())
}

#[test]
fn e2e_scan_missing_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("scan").arg(temp_dir.path().join("absent.js"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn e2e_no_command_prints_usage_hint() -> Result<()> {
    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("depcalc"));
    Ok(())
}

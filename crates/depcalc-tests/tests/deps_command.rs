//! E2E tests for the deps command
//!
//! These tests run the real binary against real filesystem trees and check
//! the manifest it leaves behind.

use anyhow::Result;
use assert_cmd::Command;
use depcalc_tests::fixtures::{demo_project, write_source};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn e2e_deps_writes_manifest_and_prints_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let project = demo_project(temp_dir.path())?;
    let output = temp_dir.path().join("deps.js");

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("deps")
        .arg("-i")
        .arg(&project.main)
        .arg("-p")
        .arg(&project.lib)
        .arg("-o")
        .arg(&output)
        .arg("--base")
        .arg(&project.root);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("main.js"));

    let content = std::fs::read_to_string(&output)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "// This file was autogenerated by depcalc",
            "goog.addDependency('lib/dom.js', ['demo.dom'], []);",
            "goog.addDependency('lib/widget.js', ['demo.Widget'], ['demo.dom']);",
            "goog.addDependency('src/main.js', ['demo.main'], ['demo.Widget']);",
        ]
    );
    Ok(())
}

#[test]
fn e2e_deps_fails_on_unresolved_when_policy_is_fail() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let main = write_source(
        temp_dir.path(),
        "main.js",
        "goog.require('demo.nowhere');\n",
    )?;

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("deps")
        .arg("-i")
        .arg(&main)
        .arg("-o")
        .arg(temp_dir.path().join("deps.js"))
        .arg("--on-unresolved")
        .arg("fail");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("demo.nowhere"));

    assert!(!temp_dir.path().join("deps.js").exists());
    Ok(())
}

#[test]
fn e2e_deps_default_policy_tolerates_unresolved() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let main = write_source(
        temp_dir.path(),
        "main.js",
        "goog.provide('demo.main');\ngoog.require('demo.nowhere');\n",
    )?;
    let output = temp_dir.path().join("deps.js");

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("deps")
        .arg("-i")
        .arg(&main)
        .arg("-o")
        .arg(&output)
        .arg("--base")
        .arg(temp_dir.path());
    cmd.assert().success();

    let content = std::fs::read_to_string(&output)?;
    assert!(content.contains("goog.addDependency('main.js', ['demo.main'], ['demo.nowhere']);"));
    Ok(())
}

#[test]
fn e2e_deps_requires_an_input_argument() -> Result<()> {
    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("deps");
    cmd.assert().failure();
    Ok(())
}

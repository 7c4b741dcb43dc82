//! E2E tests for the list command

use anyhow::Result;
use assert_cmd::Command;
use depcalc_lib::annotations::{SourceScanner, collect_source_files};
use depcalc_lib::graph::GraphResolver;
use depcalc_lib::primitives::UnresolvedPolicy;
use depcalc_tests::fixtures::demo_project;
use tempfile::TempDir;

#[test]
fn e2e_list_prints_dependency_first_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let project = demo_project(temp_dir.path())?;

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("list")
        .arg("-i")
        .arg(&project.main)
        .arg("-p")
        .arg(&project.lib);
    let output = cmd.output()?;
    assert!(output.status.success());

    // The binary's output matches what the library resolves in-process
    let inputs = collect_source_files(std::slice::from_ref(&project.main))?;
    let corpus = collect_source_files(std::slice::from_ref(&project.lib))?;
    let scanner = SourceScanner::new();
    let expected: Vec<String> = GraphResolver::new(&scanner, UnresolvedPolicy::Warn)
        .resolve(&inputs, &corpus)?
        .files()
        .iter()
        .map(|file| file.display().to_string())
        .collect();

    let stdout = String::from_utf8(output.stdout)?;
    let printed: Vec<&str> = stdout.lines().collect();
    assert_eq!(printed, expected);

    // dom loads before widget, widget before main
    assert!(printed[0].ends_with("dom.js"));
    assert!(printed[1].ends_with("widget.js"));
    assert!(printed[2].ends_with("main.js"));

    // list never persists anything
    assert!(!temp_dir.path().join("deps.js").exists());
    Ok(())
}

#[test]
fn e2e_list_without_corpus_still_emits_inputs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let project = demo_project(temp_dir.path())?;

    let mut cmd = Command::cargo_bin("depcalc")?;
    cmd.arg("list").arg("-i").arg(&project.main);
    let output = cmd.output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("main.js"));
    assert!(!stdout.contains("widget.js"));
    Ok(())
}

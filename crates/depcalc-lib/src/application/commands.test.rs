use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A three-file tree: main requires Widget, Widget requires dom
fn fixture_tree(dir: &Path) -> (PathBuf, PathBuf) {
    write_source(dir, "lib/dom.js", "goog.provide('app.dom');\n");
    write_source(
        dir,
        "lib/widget.js",
        "goog.provide('app.Widget');\ngoog.require('app.dom');\n",
    );
    let main = write_source(
        dir,
        "src/main.js",
        "goog.provide('app.main');\ngoog.require('app.Widget');\n",
    );
    (main, dir.join("lib"))
}

#[test]
fn test_deps_writes_an_ordered_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let (main, lib) = fixture_tree(temp_dir.path());
    let output = temp_dir.path().join("deps.js");

    execute(Commands::Deps {
        inputs: vec![main],
        paths: vec![lib],
        output: output.clone(),
        base: Some(temp_dir.path().to_path_buf()),
        on_unresolved: UnresolvedPolicy::Warn,
    })
    .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "// This file was autogenerated by depcalc",
            "goog.addDependency('lib/dom.js', ['app.dom'], []);",
            "goog.addDependency('lib/widget.js', ['app.Widget'], ['app.dom']);",
            "goog.addDependency('src/main.js', ['app.main'], ['app.Widget']);",
        ]
    );
}

#[test]
fn test_deps_fails_on_unresolved_when_asked_to() {
    let temp_dir = TempDir::new().unwrap();
    let main = write_source(
        temp_dir.path(),
        "main.js",
        "goog.require('app.nowhere');\n",
    );
    let output = temp_dir.path().join("deps.js");

    let result = execute(Commands::Deps {
        inputs: vec![main],
        paths: vec![],
        output: output.clone(),
        base: None,
        on_unresolved: UnresolvedPolicy::Fail,
    });

    assert!(result.is_err());
    // Failed before anything was written
    assert!(!output.exists());
}

#[test]
fn test_deps_tolerates_unresolved_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let main = write_source(
        temp_dir.path(),
        "main.js",
        "goog.provide('app.main');\ngoog.require('app.nowhere');\n",
    );
    let output = temp_dir.path().join("deps.js");

    execute(Commands::Deps {
        inputs: vec![main],
        paths: vec![],
        output: output.clone(),
        base: Some(temp_dir.path().to_path_buf()),
        on_unresolved: UnresolvedPolicy::Warn,
    })
    .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("goog.addDependency('main.js', ['app.main'], ['app.nowhere']);"));
}

#[test]
fn test_list_resolves_without_writing_anything() {
    let temp_dir = TempDir::new().unwrap();
    let (main, lib) = fixture_tree(temp_dir.path());

    execute(Commands::List {
        inputs: vec![main],
        paths: vec![lib],
        on_unresolved: UnresolvedPolicy::Warn,
    })
    .unwrap();

    assert!(!temp_dir.path().join("deps.js").exists());
}

#[test]
fn test_scan_reads_each_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(
        temp_dir.path(),
        "widget.js",
        "goog.provide('app.Widget');\ngoog.require('app.dom');\n",
    );

    execute(Commands::Scan { files: vec![file] }).unwrap();
}

#[test]
fn test_scan_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = execute(Commands::Scan {
        files: vec![temp_dir.path().join("absent.js")],
    });
    assert!(result.is_err());
}

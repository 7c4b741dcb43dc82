use depcalc_lib::annotations::{SourceScanner, collect_source_files};
use depcalc_lib::graph::GraphResolver;
use depcalc_lib::manifest::ManifestWriter;
use depcalc_lib::primitives::UnresolvedPolicy;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Library tree with a diamond: app -> {ui, net} -> events
fn library_tree(dir: &Path) -> PathBuf {
    write_source(dir, "lib/events.js", "goog.provide('demo.events');\n");
    write_source(
        dir,
        "lib/ui.js",
        "goog.provide('demo.ui');\ngoog.require('demo.events');\n",
    );
    write_source(
        dir,
        "lib/net.js",
        "goog.provide('demo.net');\ngoog.require('demo.events');\n",
    );
    dir.join("lib")
}

#[test]
fn test_full_pipeline_from_files_to_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let lib = library_tree(temp_dir.path());
    let app = write_source(
        temp_dir.path(),
        "app.js",
        "goog.provide('demo.app');\ngoog.require('demo.ui');\ngoog.require('demo.net');\n",
    );

    let inputs = collect_source_files(&[app]).unwrap();
    let corpus = collect_source_files(&[lib]).unwrap();

    let scanner = SourceScanner::new();
    let resolution = GraphResolver::new(&scanner, UnresolvedPolicy::Warn)
        .resolve(&inputs, &corpus)
        .unwrap();
    assert!(resolution.diagnostics.is_empty());

    let output = temp_dir.path().join("deps.js");
    ManifestWriter::new(output.clone())
        .with_base(temp_dir.path().to_path_buf())
        .write(&resolution.ordered)
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "// This file was autogenerated by depcalc",
            "goog.addDependency('lib/events.js', ['demo.events'], []);",
            "goog.addDependency('lib/net.js', ['demo.net'], ['demo.events']);",
            "goog.addDependency('lib/ui.js', ['demo.ui'], ['demo.events']);",
            "goog.addDependency('app.js', ['demo.app'], ['demo.net', 'demo.ui']);",
        ]
    );

    // The ordered file list mirrors the manifest
    assert_eq!(
        resolution.files().last().unwrap(),
        &temp_dir.path().join("app.js")
    );
}

#[test]
fn test_pipeline_is_deterministic_over_directory_input() {
    let temp_dir = TempDir::new().unwrap();
    let lib = library_tree(temp_dir.path());
    let app = write_source(
        temp_dir.path(),
        "app.js",
        "goog.provide('demo.app');\ngoog.require('demo.net');\ngoog.require('demo.ui');\n",
    );

    let scanner = SourceScanner::new();
    let resolve = || {
        let inputs = collect_source_files(std::slice::from_ref(&app)).unwrap();
        let corpus = collect_source_files(std::slice::from_ref(&lib)).unwrap();
        GraphResolver::new(&scanner, UnresolvedPolicy::Warn)
            .resolve(&inputs, &corpus)
            .unwrap()
            .files()
    };

    assert_eq!(resolve(), resolve());
}

#[test]
fn test_pipeline_reports_unresolved_without_failing() {
    let temp_dir = TempDir::new().unwrap();
    let lib = library_tree(temp_dir.path());
    let app = write_source(
        temp_dir.path(),
        "app.js",
        "goog.provide('demo.app');\ngoog.require('demo.missing');\ngoog.require('demo.ui');\n",
    );

    let inputs = collect_source_files(&[app]).unwrap();
    let corpus = collect_source_files(&[lib]).unwrap();

    let scanner = SourceScanner::new();
    let resolution = GraphResolver::new(&scanner, UnresolvedPolicy::Warn)
        .resolve(&inputs, &corpus)
        .unwrap();

    assert_eq!(resolution.diagnostics.len(), 1);
    // demo.ui and its dependency still resolved; app placed last
    assert_eq!(resolution.ordered.len(), 3);
}

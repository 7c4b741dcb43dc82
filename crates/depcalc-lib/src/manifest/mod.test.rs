use super::*;
use crate::annotations::FileAnnotations;
use std::fs;
use tempfile::TempDir;

fn dep(file: &Path, provides: &[&str], requires: &[&str]) -> Arc<DependencyInfo> {
    Arc::new(DependencyInfo::new(
        file.to_path_buf(),
        FileAnnotations {
            provides: provides.iter().map(|s| s.to_string()).collect(),
            requires: requires.iter().map(|s| s.to_string()).collect(),
        },
    ))
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "").unwrap();
    path
}

/// Trivial manifest parser: (path, provides, requires) per registration line
fn parse_manifest(content: &str) -> Vec<(String, Vec<String>, Vec<String>)> {
    content
        .lines()
        .filter(|line| line.starts_with("goog.addDependency("))
        .map(|line| {
            let args = line
                .trim_start_matches("goog.addDependency(")
                .trim_end_matches(");");
            let path = args.split('\'').nth(1).unwrap().to_string();
            let lists: Vec<Vec<String>> = args
                .match_indices('[')
                .zip(args.match_indices(']'))
                .map(|((open, _), (close, _))| {
                    args[open + 1..close]
                        .split(", ")
                        .filter(|s| !s.is_empty())
                        .map(|s| s.trim_matches('\'').to_string())
                        .collect()
                })
                .collect();
            (path, lists[0].clone(), lists[1].clone())
        })
        .collect()
}

// ============================================================================
// Line Rendering
// ============================================================================

#[test]
fn test_registration_line_with_base() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(temp_dir.path(), "src/widget.js");
    let entry = dep(&file, &["app.Widget"], &["app.dom", "app.events"]);

    let line = registration_line(&entry, Some(temp_dir.path()));
    assert_eq!(
        line,
        "goog.addDependency('src/widget.js', ['app.Widget'], ['app.dom', 'app.events']);"
    );
}

#[test]
fn test_registration_line_renders_empty_lists() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(temp_dir.path(), "base.js");
    let entry = dep(&file, &[], &[]);

    let line = registration_line(&entry, Some(temp_dir.path()));
    assert_eq!(line, "goog.addDependency('base.js', [], []);");
}

#[test]
fn test_registration_line_without_base_is_absolute() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(temp_dir.path(), "a.js");
    let entry = dep(&file, &["A"], &[]);

    let line = registration_line(&entry, None);
    let path = line.split('\'').nth(1).unwrap();
    assert!(Path::new(path).is_absolute());
    assert!(path.ends_with("a.js"));
}

// ============================================================================
// Relativization
// ============================================================================

#[test]
fn test_relative_to_descends_into_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(temp_dir.path(), "a/b/c.js");

    let relative = relative_to(temp_dir.path(), &file).unwrap();
    assert_eq!(relative, PathBuf::from("a/b/c.js"));
}

#[test]
fn test_relative_to_traverses_up_with_dotdot() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(temp_dir.path(), "src/a.js");
    let out_dir = temp_dir.path().join("build/deps");
    fs::create_dir_all(&out_dir).unwrap();

    let relative = relative_to(&out_dir, &file).unwrap();
    assert_eq!(relative, PathBuf::from("../../src/a.js"));
}

// ============================================================================
// Writer
// ============================================================================

#[test]
fn test_write_emits_header_and_ordered_entries() {
    let temp_dir = TempDir::new().unwrap();
    let b = touch(temp_dir.path(), "b.js");
    let a = touch(temp_dir.path(), "a.js");
    let output = temp_dir.path().join("deps.js");

    let ordered = vec![dep(&b, &["B"], &[]), dep(&a, &["A"], &["B"])];
    ManifestWriter::new(output.clone())
        .with_base(temp_dir.path().to_path_buf())
        .write(&ordered)
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "// This file was autogenerated by depcalc",
            "goog.addDependency('b.js', ['B'], []);",
            "goog.addDependency('a.js', ['A'], ['B']);",
        ]
    );
}

#[test]
fn test_write_round_trips_through_a_trivial_parser() {
    let temp_dir = TempDir::new().unwrap();
    let widget = touch(temp_dir.path(), "src/widget.js");
    let dom = touch(temp_dir.path(), "src/dom.js");
    let output = temp_dir.path().join("deps.js");

    let ordered = vec![
        dep(&dom, &["app.dom"], &[]),
        dep(&widget, &["app.Widget", "app.WidgetState"], &["app.dom"]),
    ];
    ManifestWriter::new(output.clone())
        .with_base(temp_dir.path().to_path_buf())
        .write(&ordered)
        .unwrap();

    let parsed = parse_manifest(&fs::read_to_string(&output).unwrap());
    assert_eq!(
        parsed,
        vec![
            (
                "src/dom.js".to_string(),
                vec!["app.dom".to_string()],
                vec![]
            ),
            (
                "src/widget.js".to_string(),
                vec!["app.Widget".to_string(), "app.WidgetState".to_string()],
                vec!["app.dom".to_string()]
            ),
        ]
    );
}

#[test]
fn test_write_overwrites_a_previous_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let a = touch(temp_dir.path(), "a.js");
    let output = temp_dir.path().join("deps.js");
    fs::write(&output, "stale content\nmore stale content\n").unwrap();

    ManifestWriter::new(output.clone())
        .with_base(temp_dir.path().to_path_buf())
        .write(&[dep(&a, &["A"], &[])])
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_write_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let a = touch(temp_dir.path(), "a.js");
    // Output path points into a directory that does not exist
    let output = temp_dir.path().join("no/such/dir/deps.js");

    let result = ManifestWriter::new(output).write(&[dep(&a, &["A"], &[])]);
    assert!(matches!(
        result.unwrap_err(),
        ManifestError::WriteError { .. }
    ));
}

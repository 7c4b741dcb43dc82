use super::*;
use std::fs;
use tempfile::TempDir;

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Scanner Grammar
// ============================================================================

#[test]
fn test_extract_provides_and_requires() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(
        temp_dir.path(),
        "widget.js",
        r#"goog.provide('app.Widget');
goog.provide('app.WidgetState');

goog.require('app.dom');
goog.require('app.events');

app.Widget = function() {};
"#,
    );

    let annotations = SourceScanner::new().extract(&file).unwrap();
    assert_eq!(
        annotations.provides,
        BTreeSet::from(["app.Widget".to_string(), "app.WidgetState".to_string()])
    );
    assert_eq!(
        annotations.requires,
        BTreeSet::from(["app.dom".to_string(), "app.events".to_string()])
    );
}

#[test]
fn test_extract_accepts_double_quotes_and_indentation() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(
        temp_dir.path(),
        "quoted.js",
        "  goog.provide(\"app.a\")\n\tgoog.require( 'app.b' );\n",
    );

    let annotations = SourceScanner::new().extract(&file).unwrap();
    assert!(annotations.provides.contains("app.a"));
    assert!(annotations.requires.contains("app.b"));
}

#[test]
fn test_extract_ignores_commented_annotations() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(
        temp_dir.path(),
        "commented.js",
        "// goog.provide('app.dead')\n * goog.require('app.doc')\ngoog.provide('app.live');\n",
    );

    let annotations = SourceScanner::new().extract(&file).unwrap();
    assert_eq!(annotations.provides, BTreeSet::from(["app.live".to_string()]));
    assert!(annotations.requires.is_empty());
}

#[test]
fn test_extract_file_without_annotations() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(temp_dir.path(), "plain.js", "var x = 1;\n");

    let annotations = SourceScanner::new().extract(&file).unwrap();
    assert!(annotations.provides.is_empty());
    assert!(annotations.requires.is_empty());
}

#[test]
fn test_extract_missing_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let result = SourceScanner::new().extract(&temp_dir.path().join("absent.js"));
    assert!(matches!(
        result.unwrap_err(),
        AnnotationError::ReadError { .. }
    ));
}

// ============================================================================
// Source Collection
// ============================================================================

#[test]
fn test_collect_walks_directories_recursively() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_source(temp_dir.path(), "a.js", "");
    let b = write_source(temp_dir.path(), "nested/deep/b.js", "");
    write_source(temp_dir.path(), "nested/readme.txt", "");

    let files = collect_source_files(&[temp_dir.path().to_path_buf()]).unwrap();
    assert_eq!(files, BTreeSet::from([a, b]));
}

#[test]
fn test_collect_takes_explicit_files_as_given() {
    let temp_dir = TempDir::new().unwrap();
    let src = write_source(temp_dir.path(), "entry.jsx", "");

    // No extension filter for files named directly
    let files = collect_source_files(&[src.clone()]).unwrap();
    assert_eq!(files, BTreeSet::from([src]));
}

#[test]
fn test_collect_deduplicates_overlapping_roots() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_source(temp_dir.path(), "a.js", "");

    let files = collect_source_files(&[
        temp_dir.path().to_path_buf(),
        a.clone(),
        temp_dir.path().to_path_buf(),
    ])
    .unwrap();
    assert_eq!(files.len(), 1);
}
